use async_trait::async_trait;
use serde::de::IgnoredAny;

use business::domain::errors::RpcError;
use business::domain::product::model::{Product, ProductInput};
use business::domain::product::rpc::ProductRpc;
use business::domain::shared::value_objects::MessageId;

use crate::client::RpcClient;
use crate::message::{
    CategoryMessage, ProductIdMessage, ProductInputMessage, ProductMessage, UpdateProductMessage,
};

const SAVE_PRODUCT: &str = "SaveProduct";
const UPDATE_PRODUCT_BY_ID: &str = "UpdateProductByID";
const GET_PRODUCT_BY_ID: &str = "GetProductByID";
const GET_PRODUCT_BY_CATEGORY: &str = "GetProductByCategory";
const DELETE_PRODUCT_BY_ID: &str = "DeleteProductByID";

/// `ProductRpc` over one configured backend. The gateway builds two of these:
/// one for the primary endpoint and one for the publish endpoint.
pub struct ProductRpcClient {
    client: RpcClient,
}

impl ProductRpcClient {
    pub fn new(client: RpcClient) -> Self {
        Self { client }
    }

    fn into_product(reply: Option<ProductMessage>) -> Result<Option<Product>, RpcError> {
        match reply {
            Some(message) => message.into_domain(),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ProductRpc for ProductRpcClient {
    async fn create(
        &self,
        message_id: &MessageId,
        product: &ProductInput,
    ) -> Result<Option<Product>, RpcError> {
        let params = ProductInputMessage::try_from(product)?;
        let reply = self.client.call(message_id, SAVE_PRODUCT, &params).await?;
        Self::into_product(reply)
    }

    async fn update_by_id(
        &self,
        message_id: &MessageId,
        id: &str,
        product: &ProductInput,
    ) -> Result<Option<Product>, RpcError> {
        let product = ProductInputMessage::try_from(product)?;
        let params = UpdateProductMessage {
            uuid: id,
            product: &product,
        };
        let reply = self
            .client
            .call(message_id, UPDATE_PRODUCT_BY_ID, &params)
            .await?;
        Self::into_product(reply)
    }

    async fn get_by_id(
        &self,
        message_id: &MessageId,
        id: &str,
    ) -> Result<Option<Product>, RpcError> {
        let reply = self
            .client
            .call(message_id, GET_PRODUCT_BY_ID, &ProductIdMessage { uuid: id })
            .await?;
        Self::into_product(reply)
    }

    async fn list_by_category(
        &self,
        message_id: &MessageId,
        category: &str,
    ) -> Result<Option<Vec<Product>>, RpcError> {
        let reply: Option<Vec<ProductMessage>> = self
            .client
            .call(message_id, GET_PRODUCT_BY_CATEGORY, &CategoryMessage { category })
            .await?;

        let Some(messages) = reply else {
            return Ok(None);
        };

        let mut products = Vec::with_capacity(messages.len());
        for message in messages {
            if let Some(product) = message.into_domain()? {
                products.push(product);
            }
        }
        Ok(Some(products))
    }

    async fn delete_by_id(&self, message_id: &MessageId, id: &str) -> Result<(), RpcError> {
        let _: Option<IgnoredAny> = self
            .client
            .call(message_id, DELETE_PRODUCT_BY_ID, &ProductIdMessage { uuid: id })
            .await?;
        Ok(())
    }
}
