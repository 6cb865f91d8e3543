use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::publish::spawn_publish;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::rpc::ProductRpc;
use crate::domain::product::use_cases::list_by_category::{
    ListProductsByCategoryParams, ListProductsByCategoryUseCase,
};

pub struct ListProductsByCategoryUseCaseImpl {
    pub primary: Arc<dyn ProductRpc>,
    pub secondary: Arc<dyn ProductRpc>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsByCategoryUseCase for ListProductsByCategoryUseCaseImpl {
    async fn execute(
        &self,
        params: ListProductsByCategoryParams,
    ) -> Result<Option<Vec<Product>>, ProductError> {
        let ListProductsByCategoryParams {
            message_id,
            category,
        } = params;

        self.logger.info(&format!(
            "[{}] Listing products by category: {}",
            message_id, category
        ));

        let published_category = category.clone();
        let publish_message_id = message_id.clone();
        spawn_publish(
            &self.secondary,
            &self.logger,
            &message_id,
            "list_by_category",
            move |rpc| async move {
                rpc.list_by_category(&publish_message_id, &published_category)
                    .await
            },
        );

        let products = self
            .primary
            .list_by_category(&message_id, &category)
            .await
            .map_err(|err| {
                self.logger.error(&format!(
                    "[{}] List products by category {} failed: {}",
                    message_id, category, err
                ));
                ProductError::from(err)
            })?;

        // An empty category is reported the same way as an unknown one.
        let products = products.filter(|products| !products.is_empty());

        match &products {
            Some(products) => self.logger.info(&format!(
                "[{}] Found {} products in category {}",
                message_id,
                products.len(),
                category
            )),
            None => self.logger.info(&format!(
                "[{}] No products in category {}",
                message_id, category
            )),
        }
        Ok(products)
    }
}
