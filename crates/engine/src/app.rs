//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::config::Environment;
use crate::infrastructure::ports::{CatalogRepo, ClockPort};
use crate::use_cases::{self, catalog::BrowseCatalog};

/// Main application state.
///
/// Holds the use cases and request-independent context.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
    pub clock: Arc<dyn ClockPort>,
    pub environment: Environment,
}

/// Container for all use cases.
pub struct UseCases {
    pub catalog: use_cases::CatalogUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        catalog: Arc<dyn CatalogRepo>,
        clock: Arc<dyn ClockPort>,
        environment: Environment,
    ) -> Self {
        let browse = Arc::new(BrowseCatalog::new(catalog));

        Self {
            use_cases: UseCases {
                catalog: use_cases::CatalogUseCases::new(browse),
            },
            clock,
            environment,
        }
    }
}
