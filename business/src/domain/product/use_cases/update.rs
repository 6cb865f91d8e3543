use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductInput};
use crate::domain::shared::value_objects::MessageId;

pub struct UpdateProductParams {
    pub message_id: MessageId,
    pub id: String,
    pub product: ProductInput,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
