use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductInput};
use crate::domain::shared::value_objects::MessageId;

pub struct CreateProductParams {
    pub message_id: MessageId,
    pub product: ProductInput,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
