use async_trait::async_trait;

use crate::domain::errors::RpcError;
use crate::domain::shared::value_objects::MessageId;

use super::model::{Product, ProductInput};

/// Capability set exposed by a product backend.
///
/// The gateway holds two independent implementations, one per configured
/// endpoint: the authoritative primary and the best-effort publish side-channel.
/// A `None` product means the backend returned nothing for the call.
#[async_trait]
pub trait ProductRpc: Send + Sync {
    async fn create(
        &self,
        message_id: &MessageId,
        product: &ProductInput,
    ) -> Result<Option<Product>, RpcError>;

    async fn update_by_id(
        &self,
        message_id: &MessageId,
        id: &str,
        product: &ProductInput,
    ) -> Result<Option<Product>, RpcError>;

    async fn get_by_id(&self, message_id: &MessageId, id: &str)
    -> Result<Option<Product>, RpcError>;

    async fn list_by_category(
        &self,
        message_id: &MessageId,
        category: &str,
    ) -> Result<Option<Vec<Product>>, RpcError>;

    async fn delete_by_id(&self, message_id: &MessageId, id: &str) -> Result<(), RpcError>;
}
