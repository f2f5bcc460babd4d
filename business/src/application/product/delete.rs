use std::rc::Rc;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Rc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait(?Send)]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        self.repository.delete(&params.id).await.inspect_err(|e| {
            self.logger
                .error(&format!("Failed to delete product {}: {}", params.id, e))
        })?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{Product, ProductPayload};
    use crate::domain::product::value_objects::ProductId;
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
    async fn should_delete_product_by_id() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete()
            .withf(|id| id.as_str() == "7")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            repository: Rc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: ProductId::from_repository("7"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_report_request_failure_when_delete_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::RequestFailed));

        let use_case = DeleteProductUseCaseImpl {
            repository: Rc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: ProductId::from_repository("7"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::RequestFailed)
        ));
    }
}
