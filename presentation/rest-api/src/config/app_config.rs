use super::{
    correlation_config::CorrelationConfig, cors_config, rpc_config::RpcConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    /// Authoritative backend whose answers reach the HTTP caller.
    pub primary_rpc: RpcConfig,
    /// Best-effort publish backend notified on every operation.
    pub publish_rpc: RpcConfig,
    pub correlation: CorrelationConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let correlation = CorrelationConfig::from_env();
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(&correlation.header),
            primary_rpc: RpcConfig::primary_from_env(),
            publish_rpc: RpcConfig::publish_from_env(),
            correlation,
        }
    }
}
