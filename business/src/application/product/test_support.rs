use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mockall::mock;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::domain::errors::RpcError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{Product, ProductInput};
use crate::domain::product::rpc::ProductRpc;
use crate::domain::shared::value_objects::MessageId;

mock! {
    pub Rpc {}

    #[async_trait]
    impl ProductRpc for Rpc {
        async fn create(&self, message_id: &MessageId, product: &ProductInput) -> Result<Option<Product>, RpcError>;
        async fn update_by_id(&self, message_id: &MessageId, id: &str, product: &ProductInput) -> Result<Option<Product>, RpcError>;
        async fn get_by_id(&self, message_id: &MessageId, id: &str) -> Result<Option<Product>, RpcError>;
        async fn list_by_category(&self, message_id: &MessageId, category: &str) -> Result<Option<Vec<Product>>, RpcError>;
        async fn delete_by_id(&self, message_id: &MessageId, id: &str) -> Result<(), RpcError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn sample_input() -> ProductInput {
    ProductInput {
        name: "Hermes Burger".to_string(),
        category: "snack".to_string(),
        image: "burger.png".to_string(),
        description: "double cheese".to_string(),
        price: 25.9,
        deactivated_at: None,
    }
}

pub fn sample_product(id: &str) -> Product {
    Product {
        id: id.to_string(),
        name: "Hermes Burger".to_string(),
        category: "snack".to_string(),
        image: "burger.png".to_string(),
        description: "double cheese".to_string(),
        price: 25.9,
        created_at: Utc.with_ymd_and_hms(2024, 3, 21, 10, 15, 0).unwrap(),
        deactivated_at: None,
    }
}

/// Waits for the detached publish task to report that it ran.
pub async fn recv_signal(rx: &mut UnboundedReceiver<()>) -> bool {
    matches!(
        tokio::time::timeout(Duration::from_secs(2), rx.recv()).await,
        Ok(Some(()))
    )
}
