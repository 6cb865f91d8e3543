use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::publish::spawn_publish;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::rpc::ProductRpc;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub primary: Arc<dyn ProductRpc>,
    pub secondary: Arc<dyn ProductRpc>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        let UpdateProductParams {
            message_id,
            id,
            product,
        } = params;

        self.logger.info(&format!(
            "[{}] Updating product {}: {:?}",
            message_id, id, product
        ));

        let published = product.clone();
        let published_id = id.clone();
        let publish_message_id = message_id.clone();
        spawn_publish(
            &self.secondary,
            &self.logger,
            &message_id,
            "update",
            move |rpc| async move {
                rpc.update_by_id(&publish_message_id, &published_id, &published)
                    .await
            },
        );

        let updated = self
            .primary
            .update_by_id(&message_id, &id, &product)
            .await
            .map_err(|err| {
                self.logger
                    .error(&format!("[{}] Update product {} failed: {}", message_id, id, err));
                ProductError::from(err)
            })?;

        match updated {
            Some(updated) => {
                self.logger
                    .info(&format!("[{}] Product updated: {}", message_id, updated.id));
                Ok(updated)
            }
            None => {
                self.logger.error(&format!(
                    "[{}] Update product {} returned nothing",
                    message_id, id
                ));
                Err(ProductError::UpdateReturnedEmpty)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{
        MockRpc, mock_logger, recv_signal, sample_input, sample_product,
    };
    use crate::domain::errors::RpcError;
    use crate::domain::product::model::{format_timestamp, parse_timestamp};
    use crate::domain::shared::value_objects::MessageId;
    use tokio::sync::mpsc;

    fn params(id: &str) -> UpdateProductParams {
        UpdateProductParams {
            message_id: MessageId::new("msg-update"),
            id: id.to_string(),
            product: sample_input(),
        }
    }

    fn quiet_secondary() -> MockRpc {
        let mut secondary = MockRpc::new();
        secondary.expect_update_by_id().returning(|_, _, _| Ok(None));
        secondary
    }

    #[tokio::test]
    async fn should_forward_id_and_return_updated_product() {
        let mut primary = MockRpc::new();
        primary
            .expect_update_by_id()
            .withf(|_, id, _| id == "abc-123")
            .times(1)
            .returning(|_, id, _| Ok(Some(sample_product(id))));

        let use_case = UpdateProductUseCaseImpl {
            primary: Arc::new(primary),
            secondary: Arc::new(quiet_secondary()),
            logger: mock_logger(),
        };

        let product = use_case.execute(params("abc-123")).await.unwrap();
        assert_eq!(product.id, "abc-123");
    }

    #[tokio::test]
    async fn should_forward_parsed_deactivation_date() {
        let mut primary = MockRpc::new();
        primary
            .expect_update_by_id()
            .withf(|_, _, product| {
                product
                    .deactivated_at
                    .as_ref()
                    .map(format_timestamp)
                    .as_deref()
                    == Some("01-02-2024 08:30:00")
            })
            .times(1)
            .returning(|_, id, _| Ok(Some(sample_product(id))));

        let use_case = UpdateProductUseCaseImpl {
            primary: Arc::new(primary),
            secondary: Arc::new(quiet_secondary()),
            logger: mock_logger(),
        };

        let mut params = params("p-1");
        params.product.deactivated_at = Some(parse_timestamp("01-02-2024 08:30:00").unwrap());

        assert!(use_case.execute(params).await.is_ok());
    }

    #[tokio::test]
    async fn should_fail_with_empty_result_when_primary_returns_nothing() {
        let mut primary = MockRpc::new();
        primary.expect_update_by_id().returning(|_, _, _| Ok(None));

        let use_case = UpdateProductUseCaseImpl {
            primary: Arc::new(primary),
            secondary: Arc::new(quiet_secondary()),
            logger: mock_logger(),
        };

        let err = use_case.execute(params("p-1")).await.unwrap_err();
        assert!(matches!(err, ProductError::UpdateReturnedEmpty));
        assert_ne!(
            err.to_string(),
            ProductError::SaveReturnedEmpty.to_string()
        );
    }

    #[tokio::test]
    async fn should_propagate_remote_error_and_still_publish() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut secondary = MockRpc::new();
        secondary.expect_update_by_id().returning(move |_, _, _| {
            let _ = tx.send(());
            Ok(None)
        });

        let mut primary = MockRpc::new();
        primary
            .expect_update_by_id()
            .returning(|_, _, _| Err(RpcError::remote("record locked")));

        let use_case = UpdateProductUseCaseImpl {
            primary: Arc::new(primary),
            secondary: Arc::new(secondary),
            logger: mock_logger(),
        };

        let err = use_case.execute(params("p-1")).await.unwrap_err();
        assert!(matches!(err, ProductError::Rpc(RpcError::Remote(_))));
        assert!(recv_signal(&mut rx).await);
    }
}
