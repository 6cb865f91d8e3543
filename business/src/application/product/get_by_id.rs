use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::publish::spawn_publish;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::rpc::ProductRpc;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub primary: Arc<dyn ProductRpc>,
    pub secondary: Arc<dyn ProductRpc>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Option<Product>, ProductError> {
        let GetProductByIdParams { message_id, id } = params;

        self.logger
            .info(&format!("[{}] Getting product by id: {}", message_id, id));

        let published_id = id.clone();
        let publish_message_id = message_id.clone();
        spawn_publish(
            &self.secondary,
            &self.logger,
            &message_id,
            "get_by_id",
            move |rpc| async move { rpc.get_by_id(&publish_message_id, &published_id).await },
        );

        let product = self
            .primary
            .get_by_id(&message_id, &id)
            .await
            .map_err(|err| {
                self.logger
                    .error(&format!("[{}] Get product {} failed: {}", message_id, id, err));
                ProductError::from(err)
            })?;

        match &product {
            Some(found) => self
                .logger
                .info(&format!("[{}] Product found: {:?}", message_id, found)),
            None => self
                .logger
                .info(&format!("[{}] Product {} not found", message_id, id)),
        }
        Ok(product)
    }
}
