use std::rc::Rc;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Rc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait(?Send)]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");
        let products = self.repository.get_all().await.inspect_err(|e| {
            self.logger
                .error(&format!("Failed to fetch products: {}", e))
        })?;
        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
