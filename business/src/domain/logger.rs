/// Logging port used by the orchestration layer.
///
/// Implementations must be cheap to call from detached tasks, hence `Send + Sync`.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
