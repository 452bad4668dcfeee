use contracts::domain::a001_product::Product;
use leptos::prelude::*;

/// Column headers with their widths, in display order
pub const COLUMNS: [(&str, &str); 7] = [
    ("ID", "width:10%"),
    ("Name", "width:40%"),
    ("Category", "width:40%"),
    ("Color", "width:40%"),
    ("Price", "width:40%"),
    ("Count", "width:40%"),
    ("Description", "width:10%"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub color: String,
    pub price: String,
    pub count: String,
    pub description: String,
}

impl ProductRow {
    /// Cell texts in column order
    pub fn cells(&self) -> [String; 7] {
        [
            self.id.clone(),
            self.name.clone(),
            self.category.clone(),
            self.color.clone(),
            self.price.clone(),
            self.count.clone(),
            self.description.clone(),
        ]
    }
}

impl From<Product> for ProductRow {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.unwrap_or_default(),
            name: p.name.unwrap_or_default(),
            category: p.category.unwrap_or_default(),
            color: p.color.unwrap_or_default(),
            price: p.price.unwrap_or_default(),
            count: p.count.unwrap_or_default(),
            description: p.description.unwrap_or_default(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SearchResultsTable(#[prop(into)] rows: Signal<Option<Vec<ProductRow>>>) -> impl IntoView {
    move || {
        rows.get().map(|rows| {
            view! {
                <table class="table-striped">
                    <thead>
                        <tr>
                            {COLUMNS
                                .iter()
                                .map(|(title, style)| view! { <th style=*style>{*title}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        {row
                                            .cells()
                                            .into_iter()
                                            .map(|cell| view! { <td>{cell}</td> })
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            }
        })
    }
}
