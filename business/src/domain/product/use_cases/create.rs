use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::Price;

pub struct CreateProductParams {
    pub name: String,
    pub price: Price,
}

#[async_trait(?Send)]
pub trait CreateProductUseCase {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
