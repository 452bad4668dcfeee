use super::form::FormField;
use super::view_model::ProductFormViewModel;
use crate::domain::a001_product::ui::search_results::SearchResultsTable;
use leptos::prelude::*;

fn field_input(vm: ProductFormViewModel, field: FormField) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="control-label" for=field.dom_id()>{field.label()}</label>
            <input
                type="text"
                class="form-control"
                id=field.dom_id()
                prop:value=move || vm.form.with(|f| f.get(field).to_string())
                on:input=move |ev| {
                    vm.form.update(|f| f.set(field, event_target_value(&ev)));
                }
            />
        </div>
    }
}

#[component]
pub fn ProductForm() -> impl IntoView {
    let vm = ProductFormViewModel::new();
    vm.check_health();

    view! {
        <div class="product-form">
            <h3>{"Product Catalog"}</h3>

            <div id="flash_message" class="flash">{move || vm.flash.get()}</div>

            <div class="details-form">
                {FormField::ALL
                    .into_iter()
                    .map(|field| field_input(vm, field))
                    .collect_view()}
            </div>

            <div class="details-actions">
                <button id="retrieve-btn" class="btn btn-primary" on:click=move |_| vm.retrieve_command()>
                    {"Retrieve"}
                </button>
                <button id="delete-btn" class="btn btn-danger" on:click=move |_| vm.delete_command()>
                    {"Delete"}
                </button>
                <button id="add-unit-btn" class="btn btn-default" on:click=move |_| vm.add_unit_command()>
                    {"Add Unit"}
                </button>
                <button id="sell-unit-btn" class="btn btn-default" on:click=move |_| vm.sell_unit_command()>
                    {"Sell Unit"}
                </button>
                <button id="clear-btn" class="btn btn-secondary" on:click=move |_| vm.clear_command()>
                    {"Clear"}
                </button>
                <button id="search-btn" class="btn btn-primary" on:click=move |_| vm.search_command()>
                    {"Search"}
                </button>
                <button id="available-btn" class="btn btn-default" on:click=move |_| vm.available_command()>
                    {"List Available"}
                </button>
                <button id="create-btn" class="btn btn-primary" on:click=move |_| vm.create_command()>
                    {"Create"}
                </button>
                <button id="update-btn" class="btn btn-warning" on:click=move |_| vm.update_command()>
                    {"Update"}
                </button>
            </div>

            <div id="search_results" class="search-results">
                <SearchResultsTable rows=vm.results />
            </div>
        </div>
    }
}
