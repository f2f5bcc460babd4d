use std::rc::Rc;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductPayload};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Rc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait(?Send)]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        if params.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        let payload = ProductPayload {
            name: params.name,
            price: params.price,
        };

        let product = self.repository.create(&payload).await.inspect_err(|e| {
            self.logger
                .error(&format!("Failed to create product {}: {}", payload.name, e))
        })?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::value_objects::{Price, ProductId};
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait(?Send)]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn create(&self, payload: &ProductPayload) -> Result<Product, RepositoryError>;
            async fn update(&self, id: &ProductId, payload: &ProductPayload) -> Result<Product, RepositoryError>;
            async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_create_product_with_server_assigned_id() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .withf(|payload| payload.name == "Widget" && payload.price.value() == 9.5)
            .times(1)
            .returning(|payload| {
                Ok(Product::from_repository(
                    ProductId::from_repository("42"),
                    payload.name.clone(),
                    payload.price,
                ))
            });

        let use_case = CreateProductUseCaseImpl {
            repository: Rc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "Widget".to_string(),
                price: Price::from_repository(9.5),
            })
            .await;

        let product = result.unwrap();
        assert_eq!(product.id.as_str(), "42");
        assert_eq!(product.name, "Widget");
    }

    #[tokio::test]
    async fn should_reject_product_when_name_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_create().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Rc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "".to_string(),
                price: Price::from_repository(1.0),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_report_request_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::RequestFailed));

        let use_case = CreateProductUseCaseImpl {
            repository: Rc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "Widget".to_string(),
                price: Price::from_repository(9.5),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::RequestFailed)
        ));
    }
}
