use reqwest::Client;
use url::Url;

use business::domain::product::value_objects::ProductId;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("api_client.invalid_base_url")]
    InvalidBaseUrl,
}

/// Shared catalog API HTTP client configuration.
///
/// No timeout is configured; requests use the transport defaults.
pub struct ApiClient {
    pub client: Client,
    pub base_url: Url,
}

impl ApiClient {
    /// `base_url` is the collection endpoint, e.g. `http://host:3000/products`.
    pub fn new(base_url: &str) -> Result<Self, ApiClientError> {
        let base_url = Url::parse(base_url).map_err(|_| ApiClientError::InvalidBaseUrl)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiClientError::InvalidBaseUrl);
        }

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Returns the collection endpoint URL.
    pub fn collection_url(&self) -> Url {
        self.base_url.clone()
    }

    /// Returns the endpoint URL of a single product. The id is percent-encoded
    /// as one path segment.
    pub fn item_url(&self, id: &ProductId) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id.as_str());
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_address_item_below_collection() {
        let client = ApiClient::new("http://localhost:3000/products").unwrap();

        let url = client.item_url(&ProductId::from_repository("7"));

        assert_eq!(url.as_str(), "http://localhost:3000/products/7");
    }

    #[test]
    fn should_ignore_trailing_slash_on_base_url() {
        let client = ApiClient::new("http://localhost:3000/products/").unwrap();

        let url = client.item_url(&ProductId::from_repository("7"));

        assert_eq!(url.as_str(), "http://localhost:3000/products/7");
    }

    #[test]
    fn should_encode_id_as_single_segment() {
        let client = ApiClient::new("http://localhost:3000/products").unwrap();

        let url = client.item_url(&ProductId::from_repository("a/b c"));

        assert_eq!(url.as_str(), "http://localhost:3000/products/a%2Fb%20c");
    }

    #[test]
    fn should_use_base_url_as_collection_endpoint() {
        let client = ApiClient::new("http://18.217.155.122:3000/products").unwrap();

        assert_eq!(
            client.collection_url().as_str(),
            "http://18.217.155.122:3000/products"
        );
    }

    #[test]
    fn should_reject_invalid_base_url() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiClientError::InvalidBaseUrl)
        ));
        assert!(matches!(
            ApiClient::new("mailto:catalog@example.com"),
            Err(ApiClientError::InvalidBaseUrl)
        ));
    }
}
