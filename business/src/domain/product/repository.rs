use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductPayload};
use super::value_objects::ProductId;

/// Remote product collection. Every call is a single request; there is no
/// caching and no retry behind this trait.
#[async_trait(?Send)]
pub trait ProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn create(&self, payload: &ProductPayload) -> Result<Product, RepositoryError>;
    async fn update(
        &self,
        id: &ProductId,
        payload: &ProductPayload,
    ) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
}
