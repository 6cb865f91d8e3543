use std::env;

use rpc::client::RpcClient;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 9000;

/// Address of one RPC backend
#[derive(Debug, Clone, PartialEq)]
pub struct RpcConfig {
    pub host: String,
    pub port: u16,
    pub service: String,
}

impl RpcConfig {
    /// Load the primary (authoritative) backend configuration
    ///
    /// Environment variables:
    /// - HOST_PRODUCT_WORKER: host (falls back to HOST_PRODUCT, then "127.0.0.1")
    /// - PORT_PRODUCT_WORKER: port (falls back to PORT_PRODUCT, then 9000)
    /// - PRODUCT_WORKER_SERVICE: service name (default: "ProductWorker")
    pub fn primary_from_env() -> Self {
        Self::primary_from(|key| env::var(key).ok())
    }

    /// Load the publish (best-effort) backend configuration
    ///
    /// Environment variables:
    /// - HOST_PRODUCT: host (default: "127.0.0.1")
    /// - PORT_PRODUCT: port (default: 9000)
    /// - PRODUCT_SERVICE: service name (default: "Product")
    pub fn publish_from_env() -> Self {
        Self::publish_from(|key| env::var(key).ok())
    }

    fn primary_from(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST_PRODUCT_WORKER").or_else(|| lookup("HOST_PRODUCT"));
        let port = lookup("PORT_PRODUCT_WORKER").or_else(|| lookup("PORT_PRODUCT"));
        let service = lookup("PRODUCT_WORKER_SERVICE");
        Self::build(host, port, service, "ProductWorker")
    }

    fn publish_from(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::build(
            lookup("HOST_PRODUCT"),
            lookup("PORT_PRODUCT"),
            lookup("PRODUCT_SERVICE"),
            "Product",
        )
    }

    fn build(
        host: Option<String>,
        port: Option<String>,
        service: Option<String>,
        default_service: &str,
    ) -> Self {
        let port = match port {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(port = %raw, "invalid RPC port, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            host: host
                .filter(|host| !host.is_empty())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            service: service
                .filter(|service| !service.is_empty())
                .unwrap_or_else(|| default_service.to_string()),
        }
    }

    pub fn client(&self) -> RpcClient {
        RpcClient::new(self.host.clone(), self.port, self.service.clone())
    }
}
