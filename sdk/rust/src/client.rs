use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::proto::{self, method, ErrorBody};

/// Header carrying the caller identity used for per-client admission control.
pub const CLIENT_ID_HEADER: &str = "x-client-id";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The service answered with an error body.
    #[error("{code} ({status}): {detail}")]
    Rpc {
        status: StatusCode,
        code: String,
        detail: String,
    },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Error code reported by the service, if the call reached it.
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Rpc { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Typed client for the `Cart` method set.
#[derive(Clone)]
pub struct CartClient {
    client: Client,
    base_url: String,
    client_id: Option<String>,
}

impl CartClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id: None,
        }
    }

    /// Identify every call made through this client.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a raw payload to `method` (`Service.Endpoint`) with extra headers.
    pub async fn call_raw(
        &self,
        method: &str,
        body: Vec<u8>,
        headers: &[(&str, &str)],
    ) -> Result<Response, reqwest::Error> {
        let path = method.replacen('.', "/", 1);
        let mut request = self
            .client
            .post(format!("{}/{}", self.base_url, path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);

        if let Some(client_id) = &self.client_id {
            request = request.header(CLIENT_ID_HEADER, client_id);
        }
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        request.send().await
    }

    /// Invoke `method` with a typed request and decode the typed response.
    pub async fn call<Req, Resp>(&self, method: &str, req: &Req) -> Result<Resp, ClientError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_vec(req)?;
        let resp = self.call_raw(method, body, &[]).await?;
        decode(resp).await
    }

    pub async fn add_cart(&self, info: &proto::CartInfo) -> Result<proto::ResponseAdd, ClientError> {
        self.call(method::ADD_CART, info).await
    }

    pub async fn clean_cart(&self, user_id: i64) -> Result<proto::Response, ClientError> {
        self.call(method::CLEAN_CART, &proto::Clean { user_id }).await
    }

    pub async fn incr(&self, id: i64, change_num: i64) -> Result<proto::Response, ClientError> {
        self.call(method::INCR, &proto::Item { id, change_num }).await
    }

    pub async fn decr(&self, id: i64, change_num: i64) -> Result<proto::Response, ClientError> {
        self.call(method::DECR, &proto::Item { id, change_num }).await
    }

    pub async fn delete_item(&self, id: i64) -> Result<proto::Response, ClientError> {
        self.call(method::DELETE_ITEM_BY_ID, &proto::CartId { id }).await
    }

    pub async fn get_all(&self, user_id: i64) -> Result<proto::CartAll, ClientError> {
        self.call(method::GET_ALL, &proto::CartFindAll { user_id }).await
    }

    pub async fn find_cart(&self, id: i64) -> Result<proto::CartInfo, ClientError> {
        self.call(method::FIND_CART_BY_ID, &proto::CartId { id }).await
    }

    pub async fn update_cart(&self, info: &proto::CartInfo) -> Result<proto::Response, ClientError> {
        self.call(method::UPDATE_CART, info).await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    let bytes = resp.bytes().await?;

    if !status.is_success() {
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap_or_else(|_| ErrorBody {
            code: "unknown".to_string(),
            detail: String::from_utf8_lossy(&bytes).into_owned(),
            status: status.as_u16(),
            ..Default::default()
        });
        return Err(ClientError::Rpc {
            status,
            code: body.code,
            detail: body.detail,
        });
    }

    Ok(serde_json::from_slice(&bytes)?)
}
