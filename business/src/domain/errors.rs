/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
///
/// The remote catalog API exposes a single failure kind: a transport error and
/// a non-2xx response are reported identically.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.request_failed")]
    RequestFailed,
}

impl RepositoryError {
    pub fn request_failed() -> Self {
        RepositoryError::RequestFailed
    }
}
