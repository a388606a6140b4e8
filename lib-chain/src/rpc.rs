//! Minimal JSON-RPC 2.0 transport over HTTP.

use crate::error::{ChainError, ChainResult};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<Value>,
}

/// Plain JSON-RPC client bound to a single endpoint URL.
pub struct JsonRpcClient {
    http: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

impl JsonRpcClient {
    pub fn new(url: impl Into<String>) -> ChainResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            url: url.into(),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue one request and deserialize the `result` field.
    pub async fn request<T: DeserializeOwned>(&self, method: &str, params: Value) -> ChainResult<T> {
        match self.request_opt(method, params).await? {
            Some(value) => Ok(value),
            None => Err(ChainError::Decode(format!("{method} returned null"))),
        }
    }

    /// Like [`request`](Self::request) but treats a `null` result as `None`.
    /// Needed for `eth_getTransactionReceipt`, which is null while pending.
    pub async fn request_opt<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> ChainResult<Option<T>> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        tracing::debug!(method, id, "rpc request");
        let response: RpcResponse = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(err) = response.error {
            tracing::debug!(method, code = err.code, message = %err.message, "rpc error");
            return Err(ChainError::Rpc {
                code: err.code,
                message: err.message,
                data: err.data.and_then(|d| match d {
                    Value::String(s) => Some(s),
                    other => Some(other.to_string()),
                }),
            });
        }

        match response.result {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| ChainError::Decode(format!("{method}: {e}"))),
        }
    }
}
