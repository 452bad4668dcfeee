use crate::domain::a001_product::ui::details::ProductForm;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="container">
            <ProductForm />
        </div>
    }
}
