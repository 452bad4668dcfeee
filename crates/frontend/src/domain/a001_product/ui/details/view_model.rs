use super::form::{FormState, ProductAction};
use super::model;
use crate::domain::a001_product::ui::search_results::ProductRow;
use crate::shared::api_error::ApiError;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use std::future::Future;

/// ViewModel for the product form
///
/// Each command reads the form when clicked and spawns one request. Requests
/// are never cancelled or ordered: whichever response lands last wins.
#[derive(Clone, Copy)]
pub struct ProductFormViewModel {
    pub form: RwSignal<FormState>,
    pub flash: RwSignal<String>,
    /// `None` until the first successful search or listing
    pub results: RwSignal<Option<Vec<ProductRow>>>,
}

impl Default for ProductFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(FormState::default()),
            flash: RwSignal::new(String::new()),
            results: RwSignal::new(None),
        }
    }

    fn settle(&self, action: ProductAction, outcome: Result<Option<&Product>, &ApiError>) {
        if let Err(err) = outcome {
            log::warn!("{:?} failed: {}", action, err);
        }
        let mut message = String::new();
        self.form
            .update(|form| message = action.settle(form, outcome));
        self.flash.set(message);
    }

    fn run_product<F>(&self, action: ProductAction, request: F)
    where
        F: Future<Output = Result<Product, ApiError>> + 'static,
    {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = request.await;
            vm.settle(action, result.as_ref().map(Some));
        });
    }

    fn run_list<F>(&self, action: ProductAction, request: F)
    where
        F: Future<Output = Result<Vec<Product>, ApiError>> + 'static,
    {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let (rows, message) = match request.await {
                Ok(products) => {
                    log::debug!("{:?} returned {} products", action, products.len());
                    action.settle_list(Ok(products))
                }
                Err(err) => {
                    log::warn!("{:?} failed: {}", action, err);
                    action.settle_list(Err(&err))
                }
            };
            if let Some(rows) = rows {
                vm.results.set(Some(rows));
            }
            vm.flash.set(message);
        });
    }

    fn current_id(&self) -> String {
        self.form.with_untracked(|f| f.id.clone())
    }

    pub fn create_command(&self) {
        let dto = self.form.with_untracked(FormState::to_dto);
        self.run_product(ProductAction::Create, model::create(dto));
    }

    pub fn update_command(&self) {
        let id = self.current_id();
        let dto = self.form.with_untracked(FormState::to_dto);
        self.run_product(ProductAction::Update, async move {
            model::update(&id, dto).await
        });
    }

    pub fn retrieve_command(&self) {
        let id = self.current_id();
        self.run_product(ProductAction::Retrieve, async move {
            model::fetch_by_id(&id).await
        });
    }

    pub fn add_unit_command(&self) {
        let id = self.current_id();
        self.run_product(ProductAction::AddUnit, async move {
            model::add_unit(&id).await
        });
    }

    pub fn sell_unit_command(&self) {
        let id = self.current_id();
        self.run_product(ProductAction::SellUnit, async move {
            model::sell_unit(&id).await
        });
    }

    pub fn delete_command(&self) {
        let id = self.current_id();
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::delete(&id).await;
            vm.settle(ProductAction::Delete, result.as_ref().map(|_| None));
        });
    }

    pub fn search_command(&self) {
        let query = self.form.with_untracked(FormState::search_query);
        self.run_list(ProductAction::Search, async move {
            model::search(&query).await
        });
    }

    pub fn available_command(&self) {
        self.run_list(ProductAction::Available, model::list_available());
    }

    /// Local only, no request
    pub fn clear_command(&self) {
        self.form.update(FormState::clear_all);
    }

    /// Log backend availability once; the form is not touched.
    pub fn check_health(&self) {
        wasm_bindgen_futures::spawn_local(async move {
            match model::healthcheck().await {
                Ok(health) => log::info!(
                    "backend healthy: {}",
                    health.message.unwrap_or_default()
                ),
                Err(e) => log::warn!("backend health check failed: {}", e),
            }
        });
    }
}
