use std::future::Future;
use std::sync::Arc;

use crate::domain::errors::RpcError;
use crate::domain::logger::Logger;
use crate::domain::product::rpc::ProductRpc;
use crate::domain::shared::value_objects::MessageId;

/// Fires `call` against the publish endpoint on a detached tokio task.
///
/// The task is never joined: its result is logged and dropped, and a panic
/// inside it stays inside it. There is no timeout or cancellation, so a slow
/// publish endpoint can keep the task alive past the originating request.
pub fn spawn_publish<F, Fut, T>(
    secondary: &Arc<dyn ProductRpc>,
    logger: &Arc<dyn Logger>,
    message_id: &MessageId,
    operation: &'static str,
    call: F,
) where
    F: FnOnce(Arc<dyn ProductRpc>) -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, RpcError>> + Send + 'static,
    T: Send + 'static,
{
    let secondary = Arc::clone(secondary);
    let logger = Arc::clone(logger);
    let message_id = message_id.clone();

    tokio::spawn(async move {
        match call(secondary).await {
            Ok(_) => logger.debug(&format!("[{}] publish {} delivered", message_id, operation)),
            Err(err) => logger.warn(&format!(
                "[{}] publish {} discarded: {}",
                message_id, operation, err
            )),
        }
    });
}
