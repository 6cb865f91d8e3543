use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::MessageId;

pub struct ListProductsByCategoryParams {
    pub message_id: MessageId,
    pub category: String,
}

#[async_trait]
pub trait ListProductsByCategoryUseCase: Send + Sync {
    /// An empty result set is reported as `Ok(None)`, never as an empty list.
    async fn execute(
        &self,
        params: ListProductsByCategoryParams,
    ) -> Result<Option<Vec<Product>>, ProductError>;
}
