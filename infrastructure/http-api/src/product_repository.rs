use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Response};
use url::Url;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductPayload};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use crate::client::ApiClient;
use crate::dto::{ProductDto, ProductPayloadDto};

/// [`ProductRepository`] backed by the remote REST API.
///
/// Any transport error, non-2xx status or undecodable body is reported as
/// [`RepositoryError::RequestFailed`]; the details only go to the log.
pub struct ProductRepositoryHttp {
    client: ApiClient,
}

impl ProductRepositoryHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<ProductPayloadDto<'_>>,
    ) -> Result<Response, RepositoryError> {
        let mut request = self.client.client.request(method.clone(), url.clone());
        if method != Method::GET {
            request = request.header(CONTENT_TYPE, "application/json");
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| request_failed(&method, &url, e))?;

        if !response.status().is_success() {
            return Err(request_failed(&method, &url, response.status()));
        }

        Ok(response)
    }

    async fn send_for_product(
        &self,
        method: Method,
        url: Url,
        payload: &ProductPayload,
    ) -> Result<Product, RepositoryError> {
        let response = self
            .send(method.clone(), url.clone(), Some(payload.into()))
            .await?;

        response
            .json::<ProductDto>()
            .await
            .map_err(|e| request_failed(&method, &url, e))?
            .into_domain()
    }
}

fn request_failed(method: &Method, url: &Url, reason: impl std::fmt::Display) -> RepositoryError {
    tracing::error!(%method, %url, %reason, "catalog API request failed");
    RepositoryError::request_failed()
}

#[async_trait(?Send)]
impl ProductRepository for ProductRepositoryHttp {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let url = self.client.collection_url();
        let response = self.send(Method::GET, url.clone(), None).await?;

        let entities = response
            .json::<Vec<ProductDto>>()
            .await
            .map_err(|e| request_failed(&Method::GET, &url, e))?;

        entities.into_iter().map(ProductDto::into_domain).collect()
    }

    async fn create(&self, payload: &ProductPayload) -> Result<Product, RepositoryError> {
        self.send_for_product(Method::POST, self.client.collection_url(), payload)
            .await
    }

    async fn update(
        &self,
        id: &ProductId,
        payload: &ProductPayload,
    ) -> Result<Product, RepositoryError> {
        self.send_for_product(Method::PUT, self.client.item_url(id), payload)
            .await
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        // Any 2xx is enough; the body is not read.
        self.send(Method::DELETE, self.client.item_url(id), None)
            .await?;
        Ok(())
    }
}
