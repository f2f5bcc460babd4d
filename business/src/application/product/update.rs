use std::rc::Rc;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductPayload};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Rc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait(?Send)]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        if params.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        let payload = ProductPayload {
            name: params.name,
            price: params.price,
        };

        let updated_product = self
            .repository
            .update(&params.id, &payload)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Failed to update product {}: {}", params.id, e))
            })?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}
