pub mod aggregate;
pub mod request;
pub mod search;

pub use aggregate::{Product, ProductDto};
pub use request::{HttpMethod, ProductRequest};
pub use search::ProductSearchQuery;
