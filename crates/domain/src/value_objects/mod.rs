//! Value objects - Immutable objects defined by their attributes

mod pagination;

pub use pagination::{
    total_pages, Page, PageParams, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
