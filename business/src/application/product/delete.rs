use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::publish::spawn_publish;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::rpc::ProductRpc;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub primary: Arc<dyn ProductRpc>,
    pub secondary: Arc<dyn ProductRpc>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        let DeleteProductParams { message_id, id } = params;

        self.logger
            .info(&format!("[{}] Deleting product: {}", message_id, id));

        let published_id = id.clone();
        let publish_message_id = message_id.clone();
        spawn_publish(
            &self.secondary,
            &self.logger,
            &message_id,
            "delete",
            move |rpc| async move { rpc.delete_by_id(&publish_message_id, &published_id).await },
        );

        if let Err(err) = self.primary.delete_by_id(&message_id, &id).await {
            self.logger
                .error(&format!("[{}] Delete product {} failed: {}", message_id, id, err));
            return Err(err.into());
        }

        self.logger
            .info(&format!("[{}] Product deleted: {}", message_id, id));
        Ok(())
    }
}
