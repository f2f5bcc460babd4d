use super::value_objects::{Price, ProductId};

/// A catalog entry as returned by the remote API.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: ProductId, name: String, price: Price) -> Self {
        Self { id, name, price }
    }
}

/// Writable fields of a product, sent on create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPayload {
    pub name: String,
    pub price: Price,
}
