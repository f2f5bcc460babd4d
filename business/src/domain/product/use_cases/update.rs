use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{Price, ProductId};

pub struct UpdateProductParams {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
}

#[async_trait(?Send)]
pub trait UpdateProductUseCase {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
