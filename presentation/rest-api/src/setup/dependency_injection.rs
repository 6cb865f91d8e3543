use std::sync::Arc;

use logger::TracingLogger;
use rpc::product_rpc::ProductRpcClient;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::list_by_category::ListProductsByCategoryUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::rpc::ProductRpc;

use crate::api::product::routes::ProductApi;
use crate::config::app_config::AppConfig;
use crate::config::correlation_config::CorrelationConfig;

pub struct DependencyContainer {
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger::default());

        // Infrastructure adapters: one client per backend, same capability set
        let primary = Arc::new(ProductRpcClient::new(config.primary_rpc.client()));
        let publish = Arc::new(ProductRpcClient::new(config.publish_rpc.client()));

        Self::with_backends(primary, publish, logger, config.correlation.clone())
    }

    pub fn with_backends(
        primary: Arc<dyn ProductRpc>,
        publish: Arc<dyn ProductRpc>,
        logger: Arc<dyn Logger>,
        correlation: CorrelationConfig,
    ) -> Self {
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            primary: primary.clone(),
            secondary: publish.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            primary: primary.clone(),
            secondary: publish.clone(),
            logger: logger.clone(),
        });
        let list_by_category_use_case = Arc::new(ListProductsByCategoryUseCaseImpl {
            primary: primary.clone(),
            secondary: publish.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            primary: primary.clone(),
            secondary: publish.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            primary,
            secondary: publish,
            logger,
        });

        let product_api = ProductApi::new(
            create_use_case,
            get_by_id_use_case,
            list_by_category_use_case,
            update_use_case,
            delete_use_case,
            correlation,
        );

        Self { product_api }
    }
}
