use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::MessageId;

pub struct GetProductByIdParams {
    pub message_id: MessageId,
    pub id: String,
}

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    /// `Ok(None)` is the not-found outcome, not an error.
    async fn execute(&self, params: GetProductByIdParams) -> Result<Option<Product>, ProductError>;
}
