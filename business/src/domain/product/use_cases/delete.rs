use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::shared::value_objects::MessageId;

pub struct DeleteProductParams {
    pub message_id: MessageId,
    pub id: String,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
}
