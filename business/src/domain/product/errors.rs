#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_invalid")]
    PriceInvalid,
    #[error("product.id_missing")]
    IdMissing,
    #[error("repository.request_failed")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    /// True when the error was raised locally, before any request was sent.
    pub fn is_precondition(&self) -> bool {
        !matches!(self, ProductError::Repository(_))
    }
}
