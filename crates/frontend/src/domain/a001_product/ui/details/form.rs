use crate::domain::a001_product::ui::search_results::ProductRow;
use crate::shared::api_error::{ApiError, SERVER_ERROR};
use contracts::domain::a001_product::{Product, ProductDto, ProductSearchQuery};

pub const GREAT_SUCCESS: &str = "Great Success";
pub const RETRIEVED: &str = "Great Success,let's have fun";
pub const DELETED: &str = "Product has been deleted!";

// ============================================================================
// Fields
// ============================================================================

/// Input fields of the product form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Id,
    Name,
    Category,
    Price,
    Color,
    Count,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Id,
        FormField::Name,
        FormField::Category,
        FormField::Price,
        FormField::Color,
        FormField::Count,
        FormField::Description,
    ];

    /// Element id of the input
    pub fn dom_id(&self) -> &'static str {
        match self {
            FormField::Id => "product_id",
            FormField::Name => "product_name",
            FormField::Category => "product_category",
            FormField::Price => "product_price",
            FormField::Color => "product_color",
            FormField::Count => "product_count",
            FormField::Description => "product_description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Id => "ID",
            FormField::Name => "Name",
            FormField::Category => "Category",
            FormField::Price => "Price",
            FormField::Color => "Color",
            FormField::Count => "Count",
            FormField::Description => "Description",
        }
    }
}

// ============================================================================
// Form state
// ============================================================================

/// Current text of every form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub color: String,
    pub count: String,
    pub description: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::Name => &self.name,
            FormField::Category => &self.category,
            FormField::Price => &self.price,
            FormField::Color => &self.color,
            FormField::Count => &self.count,
            FormField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Id => &mut self.id,
            FormField::Name => &mut self.name,
            FormField::Category => &mut self.category,
            FormField::Price => &mut self.price,
            FormField::Color => &mut self.color,
            FormField::Count => &mut self.count,
            FormField::Description => &mut self.description,
        };
        *slot = value;
    }

    /// Create/update body, taken verbatim from the inputs
    pub fn to_dto(&self) -> ProductDto {
        ProductDto {
            name: self.name.clone(),
            category: self.category.clone(),
            color: self.color.clone(),
            price: self.price.clone(),
            count: self.count.clone(),
            description: self.description.clone(),
        }
    }

    pub fn search_query(&self) -> ProductSearchQuery {
        ProductSearchQuery::new(self.name.clone(), self.category.clone())
    }

    /// Repaint every input, id included, from a backend product
    pub fn apply_product(&mut self, product: &Product) {
        self.id = product.id.clone().unwrap_or_default();
        self.name = product.name.clone().unwrap_or_default();
        self.category = product.category.clone().unwrap_or_default();
        self.price = product.price.clone().unwrap_or_default();
        self.color = product.color.clone().unwrap_or_default();
        self.count = product.count.clone().unwrap_or_default();
        self.description = product.description.clone().unwrap_or_default();
    }

    /// Empty the six editable inputs; the id stays as typed.
    pub fn clear_fields(&mut self) {
        let id = std::mem::take(&mut self.id);
        *self = FormState {
            id,
            ..FormState::default()
        };
    }

    /// Empty everything, id included
    pub fn clear_all(&mut self) {
        *self = FormState::default();
    }
}

// ============================================================================
// Actions
// ============================================================================

/// A button-triggered backend call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAction {
    Create,
    Update,
    Retrieve,
    AddUnit,
    SellUnit,
    Delete,
    Search,
    Available,
}

impl ProductAction {
    pub fn success_message(&self) -> &'static str {
        match self {
            ProductAction::Retrieve => RETRIEVED,
            ProductAction::Delete => DELETED,
            _ => GREAT_SUCCESS,
        }
    }

    pub fn failure_message(&self, err: &ApiError) -> String {
        match self {
            ProductAction::Delete => SERVER_ERROR.to_string(),
            _ => err.user_message(),
        }
    }

    /// By-id lookups and stock changes drop stale field values on failure
    pub fn clears_form_on_failure(&self) -> bool {
        matches!(
            self,
            ProductAction::Retrieve | ProductAction::AddUnit | ProductAction::SellUnit
        )
    }

    /// Apply the outcome of this action to the form and return the flash text.
    ///
    /// `Ok(Some(product))` repaints the form, `Ok(None)` is a success with
    /// nothing to repaint (delete, list results).
    pub fn settle(
        &self,
        form: &mut FormState,
        outcome: Result<Option<&Product>, &ApiError>,
    ) -> String {
        match outcome {
            Ok(product) => {
                if *self == ProductAction::Delete {
                    form.clear_fields();
                } else if let Some(product) = product {
                    form.apply_product(product);
                }
                self.success_message().to_string()
            }
            Err(err) => {
                if self.clears_form_on_failure() {
                    form.clear_fields();
                }
                self.failure_message(err)
            }
        }
    }

    /// Outcome of a search or listing: the rows replacing the result table
    /// (`None` keeps the current table) and the flash text.
    pub fn settle_list(
        &self,
        outcome: Result<Vec<Product>, &ApiError>,
    ) -> (Option<Vec<ProductRow>>, String) {
        match outcome {
            Ok(products) => (
                Some(products.into_iter().map(ProductRow::from).collect()),
                self.success_message().to_string(),
            ),
            Err(err) => (None, self.failure_message(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormState {
        FormState {
            id: "5".into(),
            name: "widget".into(),
            category: "tools".into(),
            price: "9.99".into(),
            color: "red".into(),
            count: "3".into(),
            description: "a widget".into(),
        }
    }

    fn not_found() -> ApiError {
        ApiError::Server {
            status: 404,
            message: "Product with id '5' was not found.".into(),
        }
    }

    fn server_product() -> Product {
        Product {
            id: Some("5".into()),
            name: Some("widget".into()),
            category: Some("tools".into()),
            color: Some("blue".into()),
            price: Some("9.99".into()),
            count: Some("4".into()),
            description: None,
        }
    }

    #[test]
    fn test_dom_ids() {
        let ids: Vec<&str> = FormField::ALL.iter().map(|f| f.dom_id()).collect();
        assert_eq!(
            ids,
            vec![
                "product_id",
                "product_name",
                "product_category",
                "product_price",
                "product_color",
                "product_count",
                "product_description",
            ]
        );
    }

    #[test]
    fn test_get_set_roundtrip_per_field() {
        let mut form = FormState::default();
        for field in FormField::ALL {
            form.set(field, field.dom_id().to_string());
        }
        for field in FormField::ALL {
            assert_eq!(form.get(field), field.dom_id());
        }
    }

    #[test]
    fn test_to_dto_excludes_id() {
        let dto = filled_form().to_dto();
        assert_eq!(dto.name, "widget");
        assert_eq!(dto.category, "tools");
        assert_eq!(dto.color, "red");
        assert_eq!(dto.price, "9.99");
        assert_eq!(dto.count, "3");
        assert_eq!(dto.description, "a widget");
    }

    #[test]
    fn test_search_query_ignores_other_fields() {
        let mut form = filled_form();
        form.name.clear();
        assert_eq!(form.search_query().to_query_string(), "category=tools");
    }

    #[test]
    fn test_clear_all() {
        let mut form = filled_form();
        form.clear_all();
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn test_clear_fields_keeps_id() {
        let mut form = filled_form();
        form.clear_fields();
        assert_eq!(form.id, "5");
        assert_eq!(
            form,
            FormState {
                id: "5".into(),
                ..FormState::default()
            }
        );
    }

    #[test]
    fn test_create_success_repaints_form() {
        let mut form = filled_form();
        let product = server_product();
        let flash = ProductAction::Create.settle(&mut form, Ok(Some(&product)));
        assert_eq!(flash, "Great Success");
        assert_eq!(form.color, "blue");
        assert_eq!(form.count, "4");
        assert_eq!(form.description, "");
    }

    #[test]
    fn test_retrieve_success_message() {
        let mut form = FormState {
            id: "5".into(),
            ..FormState::default()
        };
        let flash = ProductAction::Retrieve.settle(&mut form, Ok(Some(&server_product())));
        assert_eq!(flash, "Great Success,let's have fun");
        assert_eq!(form.name, "widget");
    }

    #[test]
    fn test_create_and_update_failures_keep_form() {
        for action in [ProductAction::Create, ProductAction::Update, ProductAction::Search] {
            let mut form = filled_form();
            let err = ApiError::Server {
                status: 400,
                message: "Invalid product: missing name".into(),
            };
            let flash = action.settle(&mut form, Err(&err));
            assert_eq!(flash, "Invalid product: missing name");
            assert_eq!(form, filled_form());
        }
    }

    #[test]
    fn test_by_id_failures_clear_form() {
        for action in [
            ProductAction::Retrieve,
            ProductAction::AddUnit,
            ProductAction::SellUnit,
        ] {
            let mut form = filled_form();
            let flash = action.settle(&mut form, Err(&not_found()));
            assert_eq!(flash, "Product with id '5' was not found.");
            assert_eq!(form.name, "");
            assert_eq!(form.category, "");
            assert_eq!(form.price, "");
            assert_eq!(form.color, "");
            assert_eq!(form.count, "");
            assert_eq!(form.description, "");
        }
    }

    #[test]
    fn test_delete_success_uses_fixed_message() {
        let mut form = filled_form();
        let flash = ProductAction::Delete.settle(&mut form, Ok(Some(&server_product())));
        assert_eq!(flash, "Product has been deleted!");
        assert_eq!(form.name, "");
        assert_eq!(form.color, "");

        let mut form = filled_form();
        let flash = ProductAction::Delete.settle(&mut form, Ok(None));
        assert_eq!(flash, "Product has been deleted!");
    }

    #[test]
    fn test_delete_failure_is_generic() {
        let mut form = filled_form();
        let flash = ProductAction::Delete.settle(&mut form, Err(&not_found()));
        assert_eq!(flash, "Server error!");
        assert_eq!(form, filled_form());
    }

    #[test]
    fn test_list_success_leaves_form() {
        let mut form = filled_form();
        let flash = ProductAction::Search.settle(&mut form, Ok(None));
        assert_eq!(flash, "Great Success");
        assert_eq!(form, filled_form());
    }

    #[test]
    fn test_list_success_replaces_rows() {
        let products = vec![server_product(), Product::default()];
        for action in [ProductAction::Search, ProductAction::Available] {
            let (rows, flash) = action.settle_list(Ok(products.clone()));
            let rows = rows.unwrap();
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].name, "widget");
            assert_eq!(rows[1].id, "");
            assert_eq!(flash, "Great Success");
        }
    }

    #[test]
    fn test_empty_list_still_shows_table() {
        let (rows, flash) = ProductAction::Search.settle_list(Ok(Vec::new()));
        assert_eq!(rows, Some(Vec::new()));
        assert_eq!(flash, "Great Success");
    }

    #[test]
    fn test_list_failure_keeps_rows() {
        let err = ApiError::Server {
            status: 400,
            message: "Invalid search".into(),
        };
        let (rows, flash) = ProductAction::Search.settle_list(Err(&err));
        assert!(rows.is_none());
        assert_eq!(flash, "Invalid search");

        let (rows, flash) =
            ProductAction::Available.settle_list(Err(&ApiError::Status { status: 503 }));
        assert!(rows.is_none());
        assert_eq!(flash, "Server error!");
    }

    #[test]
    fn test_failure_without_message() {
        let mut form = filled_form();
        let err = ApiError::Status { status: 500 };
        assert_eq!(
            ProductAction::Update.settle(&mut form, Err(&err)),
            "Server error!"
        );
    }
}
