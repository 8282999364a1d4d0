//! Product API: the trait the editor talks to and its HTTP implementation.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use vitrine_common::product::{Product, ProductId, UpdateReceipt};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Status plus decoded body of a backend call.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T> ServiceResponse<T> {
    /// Only 200 counts as success.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[allow(async_fn_in_trait)]
pub trait ProductService {
    async fn get(&self, id: &ProductId) -> Result<ServiceResponse<Product>, ClientError>;

    async fn update(
        &self,
        id: &ProductId,
        product: &Product,
    ) -> Result<ServiceResponse<UpdateReceipt>, ClientError>;

    async fn delete(&self, id: &ProductId) -> Result<ServiceResponse<()>, ClientError>;
}

/// reqwest-backed client for `{base}/produtos/{id}`.
#[derive(Debug, Clone)]
pub struct HttpProductService {
    client: Client,
    config: ClientConfig,
}

impl HttpProductService {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        #[cfg(not(target_family = "wasm"))]
        let client = Client::builder().timeout(config.timeout).build()?;
        #[cfg(target_family = "wasm")]
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl ProductService for HttpProductService {
    async fn get(&self, id: &ProductId) -> Result<ServiceResponse<Product>, ClientError> {
        let url = self.config.product_url(&id.0);
        tracing::debug!("GET {url}");
        let resp = checked(self.client.get(url).send().await?).await?;
        decode(resp).await
    }

    async fn update(
        &self,
        id: &ProductId,
        product: &Product,
    ) -> Result<ServiceResponse<UpdateReceipt>, ClientError> {
        let url = self.config.product_url(&id.0);
        tracing::debug!("PUT {url}");
        let resp = checked(self.client.put(url).json(product).send().await?).await?;
        decode(resp).await
    }

    async fn delete(&self, id: &ProductId) -> Result<ServiceResponse<()>, ClientError> {
        let url = self.config.product_url(&id.0);
        tracing::debug!("DELETE {url}");
        let resp = checked(self.client.delete(url).send().await?).await?;
        Ok(ServiceResponse {
            status: resp.status().as_u16(),
            data: (),
        })
    }
}

/// Turn non-2xx responses into errors, keeping the body for the log.
async fn checked(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<ServiceResponse<T>, ClientError> {
    let status = resp.status().as_u16();
    let bytes = resp.bytes().await?;
    let data = serde_json::from_slice(&bytes)?;
    Ok(ServiceResponse { status, data })
}
