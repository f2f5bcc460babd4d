use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

#[async_trait(?Send)]
pub trait GetAllProductsUseCase {
    async fn execute(&self) -> Result<Vec<Product>, ProductError>;
}
