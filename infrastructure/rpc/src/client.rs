use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use business::domain::errors::RpcError;
use business::domain::shared::value_objects::MessageId;

use crate::message::{RpcRequest, RpcResponse};

/// Header carrying the correlation id to the backend.
pub const MESSAGE_ID_HEADER: &str = "x-message-id";

/// Address of one RPC backend plus the service name its methods live under.
#[derive(Debug, Clone)]
pub struct RpcClient {
    pub host: String,
    pub port: u16,
    pub service: String,
}

impl RpcClient {
    pub fn new(host: impl Into<String>, port: u16, service: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            service: service.into(),
        }
    }

    /// Returns the RPC endpoint URL.
    pub fn endpoint_url(&self) -> String {
        format!("http://{}:{}/rpc", self.host, self.port)
    }

    /// Qualifies an operation with the service name, e.g. `ProductWorker.SaveProduct`.
    pub fn method_name(&self, operation: &str) -> String {
        format!("{}.{}", self.service, operation)
    }

    /// Issues exactly one remote call over a connection opened for it alone.
    ///
    /// The HTTP client is built per call with idle pooling disabled, so the
    /// connection is released when the client drops at the end of this call,
    /// whether it succeeded or not.
    pub async fn call<P, R>(
        &self,
        message_id: &MessageId,
        operation: &str,
        params: &P,
    ) -> Result<Option<R>, RpcError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let method = self.method_name(operation);
        let url = self.endpoint_url();
        debug!(message_id = %message_id, %method, %url, "rpc call");

        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(RpcError::unavailable)?;

        let response = client
            .post(&url)
            .header(MESSAGE_ID_HEADER, message_id.as_str())
            .json(&RpcRequest {
                method: &method,
                params,
                id: message_id.as_str(),
            })
            .send()
            .await
            .map_err(RpcError::unavailable)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RpcError::remote(format!(
                "{} answered {}: {}",
                method, status, body
            )));
        }

        let envelope: RpcResponse<R> = response.json().await.map_err(RpcError::codec)?;
        if let Some(error) = envelope.error {
            debug!(message_id = %message_id, %method, %error, "rpc remote error");
            return Err(RpcError::remote(error));
        }

        Ok(envelope.result)
    }
}
