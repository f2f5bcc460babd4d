use super::errors::ProductError;
use super::model::Product;
use super::use_cases::create::CreateProductParams;
use super::use_cases::update::UpdateProductParams;
use super::value_objects::{Price, ProductId};

/// Raw contents of the add form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }

    /// Checks the local preconditions for a create request.
    pub fn to_create_params(&self) -> Result<CreateProductParams, ProductError> {
        let (name, price) = validate_fields(&self.name, &self.price)?;
        Ok(CreateProductParams { name, price })
    }
}

/// Raw contents of the update form, including the hidden id field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditDraft {
    pub id: String,
    pub name: String,
    pub price: String,
}

impl EditDraft {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
        }
    }

    /// Copies a rendered product verbatim into the edit fields.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.to_string(),
        }
    }

    /// Checks the local preconditions for an update request.
    pub fn to_update_params(&self) -> Result<UpdateProductParams, ProductError> {
        let id = ProductId::parse(&self.id)?;
        let (name, price) = validate_fields(&self.name, &self.price)?;
        Ok(UpdateProductParams { id, name, price })
    }
}

fn validate_fields(name: &str, price: &str) -> Result<(String, Price), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    let price = Price::parse(price)?;
    Ok((name.to_string(), price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_create_params_from_valid_draft() {
        let params = ProductDraft::new("Widget", "9.5").to_create_params().unwrap();

        assert_eq!(params.name, "Widget");
        assert_eq!(params.price.value(), 9.5);
    }

    #[test]
    fn should_reject_draft_when_name_is_empty() {
        let result = ProductDraft::new("  ", "9.5").to_create_params();

        assert!(matches!(result, Err(ProductError::NameEmpty)));
    }

    #[test]
    fn should_reject_draft_when_price_is_not_numeric() {
        let result = ProductDraft::new("Widget", "nine").to_create_params();

        assert!(matches!(result, Err(ProductError::PriceInvalid)));
    }

    #[test]
    fn should_reject_edit_draft_without_id() {
        let result = EditDraft::new("", "Widget", "9.5").to_update_params();

        assert!(matches!(result, Err(ProductError::IdMissing)));
    }

    #[test]
    fn should_copy_product_verbatim_into_edit_draft() {
        let product = Product::from_repository(
            ProductId::from_repository("7"),
            "Widget".to_string(),
            Price::from_repository(9.5),
        );

        let draft = EditDraft::from_product(&product);

        assert_eq!(draft, EditDraft::new("7", "Widget", "9.5"));
    }

    #[test]
    fn should_build_update_params_from_copied_draft() {
        let params = EditDraft::new("7", "Gadget", "12")
            .to_update_params()
            .unwrap();

        assert_eq!(params.id.as_str(), "7");
        assert_eq!(params.name, "Gadget");
        assert_eq!(params.price.value(), 12.0);
    }
}
