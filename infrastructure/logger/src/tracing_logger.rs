use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` adapter that forwards to `tracing`, tagging every event with the
/// emitting service name.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    service: &'static str,
}

impl TracingLogger {
    pub fn new(service: &'static str) -> Self {
        Self { service }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("hermes-foods-product")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(service = self.service, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(service = self.service, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(service = self.service, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(service = self.service, "{}", message);
    }
}
