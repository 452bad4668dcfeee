//! Product Details UI Module
//!
//! MVVM split:
//! - form.rs: form state and per-action outcome rules (pure)
//! - model.rs: API functions against the product backend
//! - view_model.rs: ViewModel with commands and signals
//! - view.rs: Leptos component (pure UI)

pub mod form;
mod model;
mod view;
mod view_model;

pub use form::{FormField, FormState, ProductAction};
pub use view::ProductForm;
pub use view_model::ProductFormViewModel;
