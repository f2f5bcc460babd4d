use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductId;

pub struct DeleteProductParams {
    pub id: ProductId,
}

#[async_trait(?Send)]
pub trait DeleteProductUseCase {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
}
