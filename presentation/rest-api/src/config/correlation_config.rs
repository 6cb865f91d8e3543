use std::env;

pub const DEFAULT_MESSAGE_ID_HEADER: &str = "x-message-id";

/// Where the per-request correlation id is read from.
#[derive(Debug, Clone)]
pub struct CorrelationConfig {
    pub header: String,
}

impl CorrelationConfig {
    /// Environment variables:
    /// - MESSAGE_ID_HEADER: inbound header carrying the id (default: "x-message-id")
    pub fn from_env() -> Self {
        let header = env::var("MESSAGE_ID_HEADER")
            .ok()
            .filter(|header| !header.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MESSAGE_ID_HEADER.to_string());

        Self {
            header: header.to_lowercase(),
        }
    }
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_MESSAGE_ID_HEADER.to_string(),
        }
    }
}
