pub mod pagination;

pub use pagination::{PaginatedResult, PaginationParams, DEFAULT_PAGE_SIZE};
