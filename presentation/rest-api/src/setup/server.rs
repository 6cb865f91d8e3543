use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};

use crate::api::health::routes::health_check;
use crate::api::product::routes::PRODUCT_MOUNT;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = routes(container).with(config.cors).with(Tracing);
        tracing::info!(
            primary = %config.primary_rpc.client().endpoint_url(),
            publish = %config.publish_rpc.client().endpoint_url(),
            "Server running at http://{}",
            addr
        );
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

/// Mounts the product gateway under both `/hermes_foods/product` and
/// `/hermes_foods/product/...`; the product router resolves the rest.
pub fn routes(container: DependencyContainer) -> Route {
    Route::new()
        .at("/health", health_check)
        .nest_no_strip(PRODUCT_MOUNT, container.product_api)
}
