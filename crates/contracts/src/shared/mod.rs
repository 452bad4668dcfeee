pub mod error_body;
pub mod text_field;

pub use error_body::ErrorBody;
