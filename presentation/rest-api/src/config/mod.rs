pub mod app_config;
pub mod correlation_config;
pub mod cors_config;
pub mod rpc_config;
pub mod server_config;
