use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::publish::spawn_publish;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::rpc::ProductRpc;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub primary: Arc<dyn ProductRpc>,
    pub secondary: Arc<dyn ProductRpc>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let CreateProductParams {
            message_id,
            product,
        } = params;

        self.logger
            .info(&format!("[{}] Creating product: {:?}", message_id, product));

        let published = product.clone();
        let publish_id = message_id.clone();
        spawn_publish(
            &self.secondary,
            &self.logger,
            &message_id,
            "create",
            move |rpc| async move { rpc.create(&publish_id, &published).await },
        );

        let saved = match self.primary.create(&message_id, &product).await {
            Ok(saved) => saved,
            Err(err) => {
                self.logger
                    .error(&format!("[{}] Create product failed: {}", message_id, err));
                return Err(err.into());
            }
        };

        let Some(saved) = saved else {
            self.logger
                .error(&format!("[{}] Create product returned nothing", message_id));
            return Err(ProductError::SaveReturnedEmpty);
        };

        self.logger
            .info(&format!("[{}] Product created with id: {}", message_id, saved.id));
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{
        MockRpc, mock_logger, recv_signal, sample_input, sample_product,
    };
    use crate::domain::errors::RpcError;
    use crate::domain::shared::value_objects::MessageId;
    use tokio::sync::mpsc;

    fn params() -> CreateProductParams {
        CreateProductParams {
            message_id: MessageId::new("msg-create"),
            product: sample_input(),
        }
    }

    fn quiet_secondary() -> MockRpc {
        let mut secondary = MockRpc::new();
        secondary.expect_create().returning(|_, _| Ok(None));
        secondary
    }

    #[tokio::test]
    async fn should_return_primary_product_when_saved() {
        let mut primary = MockRpc::new();
        primary
            .expect_create()
            .withf(|message_id, product| {
                message_id.as_str() == "msg-create" && product.name == "Hermes Burger"
            })
            .times(1)
            .returning(|_, _| Ok(Some(sample_product("p-1"))));

        let use_case = CreateProductUseCaseImpl {
            primary: Arc::new(primary),
            secondary: Arc::new(quiet_secondary()),
            logger: mock_logger(),
        };

        let product = use_case.execute(params()).await.unwrap();
        assert_eq!(product.id, "p-1");
        assert_eq!(product.name, "Hermes Burger");
        assert_eq!(product.category, "snack");
        assert_eq!(product.price, 25.9);
    }

    #[tokio::test]
    async fn should_fail_with_empty_result_when_primary_returns_nothing() {
        let mut primary = MockRpc::new();
        primary.expect_create().returning(|_, _| Ok(None));

        let use_case = CreateProductUseCaseImpl {
            primary: Arc::new(primary),
            secondary: Arc::new(quiet_secondary()),
            logger: mock_logger(),
        };

        let err = use_case.execute(params()).await.unwrap_err();
        assert!(matches!(err, ProductError::SaveReturnedEmpty));
    }

    #[tokio::test]
    async fn should_propagate_primary_transport_error() {
        let mut primary = MockRpc::new();
        primary
            .expect_create()
            .returning(|_, _| Err(RpcError::unavailable("connection refused")));

        let use_case = CreateProductUseCaseImpl {
            primary: Arc::new(primary),
            secondary: Arc::new(quiet_secondary()),
            logger: mock_logger(),
        };

        let err = use_case.execute(params()).await.unwrap_err();
        assert!(matches!(err, ProductError::Rpc(RpcError::Unavailable(_))));
    }

    #[tokio::test]
    async fn should_publish_and_ignore_secondary_failure() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut secondary = MockRpc::new();
        secondary.expect_create().returning(move |_, _| {
            let _ = tx.send(());
            Err(RpcError::remote("publish rejected"))
        });

        let mut primary = MockRpc::new();
        primary
            .expect_create()
            .returning(|_, _| Ok(Some(sample_product("p-2"))));

        let use_case = CreateProductUseCaseImpl {
            primary: Arc::new(primary),
            secondary: Arc::new(secondary),
            logger: mock_logger(),
        };

        let product = use_case.execute(params()).await.unwrap();
        assert_eq!(product.id, "p-2");
        assert!(recv_signal(&mut rx).await);
    }
}
