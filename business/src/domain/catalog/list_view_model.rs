use crate::domain::product::draft::EditDraft;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

/// Presentation settings shared by every rendered list.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayOptions {
    pub currency_prefix: String,
    /// Shown in the fetch error entry so the operator knows which backend was tried.
    pub api_location: String,
}

/// One list entry, ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListItem {
    pub id: ProductId,
    pub label: String,
    /// Values copied into the update form when "edit" is selected.
    pub edit_draft: EditDraft,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductListViewModel {
    Products(Vec<ProductListItem>),
    /// A single error entry replaces the list; no product entries are shown.
    Error { message: String },
}

impl ProductListViewModel {
    pub fn items(&self) -> &[ProductListItem] {
        match self {
            ProductListViewModel::Products(items) => items,
            ProductListViewModel::Error { .. } => &[],
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ProductListViewModel::Error { .. })
    }
}

/// Maps a fetched snapshot (or the fetch failure) to the list view model.
/// Server order is kept as-is.
pub fn build_list_view(
    snapshot: &Result<Vec<Product>, ProductError>,
    options: &DisplayOptions,
) -> ProductListViewModel {
    match snapshot {
        Ok(products) => ProductListViewModel::Products(
            products
                .iter()
                .map(|product| ProductListItem {
                    id: product.id.clone(),
                    label: format!(
                        "{} - {}",
                        product.name,
                        product.price.format_with(&options.currency_prefix)
                    ),
                    edit_draft: EditDraft::from_product(product),
                })
                .collect(),
        ),
        Err(_) => ProductListViewModel::Error {
            message: format!(
                "Error loading products. Check the backend and its address: {}",
                options.api_location
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::value_objects::Price;

    fn options() -> DisplayOptions {
        DisplayOptions {
            currency_prefix: "R$".to_string(),
            api_location: "http://localhost:3000/products".to_string(),
        }
    }

    fn product(id: &str, name: &str, price: f64) -> Product {
        Product::from_repository(
            ProductId::from_repository(id),
            name.to_string(),
            Price::from_repository(price),
        )
    }

    #[test]
    fn should_label_entries_with_name_and_formatted_price() {
        let snapshot = Ok(vec![product("7", "Widget", 9.5)]);

        let model = build_list_view(&snapshot, &options());

        let items = model.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "Widget - R$9.50");
        assert_eq!(items[0].id.as_str(), "7");
        assert_eq!(items[0].edit_draft, EditDraft::new("7", "Widget", "9.5"));
    }

    #[test]
    fn should_keep_server_order() {
        let snapshot = Ok(vec![
            product("3", "Zucchini", 1.0),
            product("1", "Apple", 2.0),
        ]);

        let model = build_list_view(&snapshot, &options());

        let ids: Vec<&str> = model.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn should_render_single_error_entry_when_fetch_failed() {
        let snapshot = Err(ProductError::Repository(RepositoryError::RequestFailed));

        let model = build_list_view(&snapshot, &options());

        assert!(model.is_error());
        assert!(model.items().is_empty());
        match model {
            ProductListViewModel::Error { message } => {
                assert!(message.contains("http://localhost:3000/products"))
            }
            other => panic!("unexpected model: {:?}", other),
        }
    }

    #[test]
    fn should_produce_identical_model_for_identical_snapshot() {
        let snapshot = Ok(vec![product("1", "Apple", 2.0), product("2", "Pear", 3.25)]);

        assert_eq!(
            build_list_view(&snapshot, &options()),
            build_list_view(&snapshot, &options())
        );
    }
}
