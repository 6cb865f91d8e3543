/// Transport errors raised by an RPC adapter.
/// None of them is retried; callers decide whether to surface or swallow them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RpcError {
    /// The remote endpoint could not be reached or the connection dropped.
    #[error("rpc unavailable: {0}")]
    Unavailable(String),
    /// The remote endpoint answered with an error.
    #[error("rpc remote error: {0}")]
    Remote(String),
    /// The request or response could not be encoded or decoded.
    #[error("rpc codec error: {0}")]
    Codec(String),
}

impl RpcError {
    pub fn unavailable(cause: impl std::fmt::Display) -> Self {
        RpcError::Unavailable(cause.to_string())
    }
    pub fn remote(cause: impl std::fmt::Display) -> Self {
        RpcError::Remote(cause.to_string())
    }
    pub fn codec(cause: impl std::fmt::Display) -> Self {
        RpcError::Codec(cause.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_underlying_cause_in_message() {
        let err = RpcError::unavailable("connection refused");
        assert_eq!(err.to_string(), "rpc unavailable: connection refused");
    }

    #[test]
    fn should_distinguish_remote_from_codec_errors() {
        assert!(matches!(RpcError::remote("boom"), RpcError::Remote(_)));
        assert!(matches!(RpcError::codec("bad json"), RpcError::Codec(_)));
    }
}
