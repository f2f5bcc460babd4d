use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductPayload};
use business::domain::product::value_objects::{Price, ProductId};

/// Ids are opaque: backends send them either as numbers or strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProductIdDto {
    Number(serde_json::Number),
    Text(String),
}

/// Decimal columns are often serialized as strings, so both forms are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PriceDto {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductDto {
    pub id: ProductIdDto,
    pub name: String,
    pub price: PriceDto,
}

impl ProductDto {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let id = match self.id {
            ProductIdDto::Number(number) => number.to_string(),
            ProductIdDto::Text(text) => text,
        };
        let price = match self.price {
            PriceDto::Number(value) => value,
            PriceDto::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| RepositoryError::request_failed())?,
        };

        Ok(Product::from_repository(
            ProductId::from_repository(id),
            self.name,
            Price::from_repository(price),
        ))
    }
}

/// Request body of create and update: `{name, price}` with a numeric price.
#[derive(Debug, Serialize)]
pub struct ProductPayloadDto<'a> {
    pub name: &'a str,
    pub price: f64,
}

impl<'a> From<&'a ProductPayload> for ProductPayloadDto<'a> {
    fn from(payload: &'a ProductPayload) -> Self {
        Self {
            name: &payload.name,
            price: payload.price.value(),
        }
    }
}
