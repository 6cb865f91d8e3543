use std::sync::Arc;

use percent_encoding::percent_decode_str;
use poem::http::header::ALLOW;
use poem::http::{HeaderValue, StatusCode};
use poem::{Endpoint, Request, Response};
use uuid::Uuid;

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::list_by_category::{
    ListProductsByCategoryParams, ListProductsByCategoryUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::value_objects::MessageId;

use crate::api::error::{IntoErrorResponse, StatusResponse, error_response, json_response};
use crate::api::product::dto::{CategoryQuery, OutputProduct, RequestProduct};
use crate::api::router::{PathRouter, RouteError};
use crate::config::correlation_config::CorrelationConfig;

pub const PRODUCT_MOUNT: &str = "/hermes_foods/product";

const SAVE_CONTEXT: &str = "error to save product";
const UPDATE_CONTEXT: &str = "error to update product";
const GET_CONTEXT: &str = "error to get product by id";
const LIST_CONTEXT: &str = "error to get product by category";
const DELETE_CONTEXT: &str = "error to delete product";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProductRoute {
    ListByCategory,
    Create,
    GetById,
    Update,
    Delete,
}

fn product_routes() -> PathRouter<ProductRoute> {
    PathRouter::new()
        .route("get hermes_foods/product", ProductRoute::ListByCategory)
        .route("post hermes_foods/product", ProductRoute::Create)
        .route("get hermes_foods/product/{id}", ProductRoute::GetById)
        .route("put hermes_foods/product/{id}", ProductRoute::Update)
        .route("delete hermes_foods/product/{id}", ProductRoute::Delete)
}

/// Product gateway endpoint.
///
/// Resolves the operation with its own path router, reads the correlation id,
/// and maps use case outcomes to JSON responses.
pub struct ProductApi {
    router: PathRouter<ProductRoute>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    list_by_category_use_case: Arc<dyn ListProductsByCategoryUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    correlation: CorrelationConfig,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        list_by_category_use_case: Arc<dyn ListProductsByCategoryUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        correlation: CorrelationConfig,
    ) -> Self {
        Self {
            router: product_routes(),
            create_use_case,
            get_by_id_use_case,
            list_by_category_use_case,
            update_use_case,
            delete_use_case,
            correlation,
        }
    }

    fn message_id(&self, req: &Request) -> MessageId {
        req.header(self.correlation.header.as_str())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(MessageId::from)
            .unwrap_or_else(|| MessageId::new(Uuid::new_v4().to_string()))
    }

    async fn dispatch(&self, mut req: Request) -> Response {
        let method = req.method().clone();
        let path = percent_decode_str(req.uri().path())
            .decode_utf8_lossy()
            .into_owned();
        let routed = path
            .strip_suffix('/')
            .filter(|trimmed| !trimmed.is_empty())
            .unwrap_or(path.as_str());

        let (route, params) = match self.router.find(method.as_str(), routed) {
            Ok(matched) => (*matched.handler, matched.params),
            Err(RouteError::NotFound) => {
                return error_response(
                    StatusCode::NOT_FOUND,
                    format!("route {} {} not found", method, path),
                );
            }
            Err(RouteError::MethodNotAllowed { allowed }) => {
                let mut response = error_response(
                    StatusCode::METHOD_NOT_ALLOWED,
                    format!("method {} not allowed for {}", method, path),
                );
                if let Ok(value) = HeaderValue::from_str(&allowed.join(", ")) {
                    response.headers_mut().insert(ALLOW, value);
                }
                return response;
            }
        };

        let message_id = self.message_id(&req);
        let id = params.get("id").unwrap_or_default().to_string();

        let outcome = match route {
            ProductRoute::ListByCategory => self.list_by_category(message_id, &req).await,
            ProductRoute::Create => self.create(message_id, &mut req).await,
            ProductRoute::GetById => self.get_by_id(message_id, id).await,
            ProductRoute::Update => self.update(message_id, id, &mut req).await,
            ProductRoute::Delete => self.delete(message_id, id).await,
        };
        outcome.unwrap_or_else(|response| response)
    }

    async fn create(&self, message_id: MessageId, req: &mut Request) -> Result<Response, Response> {
        let product = read_request_product(req)
            .await?
            .into_input()
            .map_err(|err| product_error(err, SAVE_CONTEXT))?;

        let created = self
            .create_use_case
            .execute(CreateProductParams {
                message_id,
                product,
            })
            .await
            .map_err(|err| product_error(err, SAVE_CONTEXT))?;

        Ok(json_response(
            StatusCode::CREATED,
            &OutputProduct::from(created),
        ))
    }

    async fn update(
        &self,
        message_id: MessageId,
        id: String,
        req: &mut Request,
    ) -> Result<Response, Response> {
        let product = read_request_product(req)
            .await?
            .into_input()
            .map_err(|err| product_error(err, UPDATE_CONTEXT))?;

        let updated = self
            .update_use_case
            .execute(UpdateProductParams {
                message_id,
                id,
                product,
            })
            .await
            .map_err(|err| product_error(err, UPDATE_CONTEXT))?;

        Ok(json_response(
            StatusCode::CREATED,
            &OutputProduct::from(updated),
        ))
    }

    async fn get_by_id(&self, message_id: MessageId, id: String) -> Result<Response, Response> {
        let product = self
            .get_by_id_use_case
            .execute(GetProductByIdParams { message_id, id })
            .await
            .map_err(|err| product_error(err, GET_CONTEXT))?;

        // Not found answers 200 with a `null` body.
        Ok(json_response(
            StatusCode::OK,
            &product.map(OutputProduct::from),
        ))
    }

    async fn list_by_category(
        &self,
        message_id: MessageId,
        req: &Request,
    ) -> Result<Response, Response> {
        let query = req.params::<CategoryQuery>().map_err(|err| {
            error_response(
                StatusCode::BAD_REQUEST,
                format!("{}: {}", LIST_CONTEXT, err),
            )
        })?;

        let products = self
            .list_by_category_use_case
            .execute(ListProductsByCategoryParams {
                message_id,
                category: query.category,
            })
            .await
            .map_err(|err| product_error(err, LIST_CONTEXT))?
            .ok_or_else(|| error_response(StatusCode::NOT_FOUND, "product not found"))?;

        let products: Vec<OutputProduct> = products.into_iter().map(OutputProduct::from).collect();
        Ok(json_response(StatusCode::OK, &products))
    }

    async fn delete(&self, message_id: MessageId, id: String) -> Result<Response, Response> {
        self.delete_use_case
            .execute(DeleteProductParams { message_id, id })
            .await
            .map_err(|err| product_error(err, DELETE_CONTEXT))?;

        Ok(json_response(StatusCode::OK, &StatusResponse::ok()))
    }
}

impl Endpoint for ProductApi {
    type Output = Response;

    async fn call(&self, req: Request) -> poem::Result<Self::Output> {
        Ok(self.dispatch(req).await)
    }
}

async fn read_request_product(req: &mut Request) -> Result<RequestProduct, Response> {
    let bytes = req.take_body().into_bytes().await.map_err(|err| {
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("error to read data body: {}", err),
        )
    })?;

    serde_json::from_slice(&bytes).map_err(|err| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("error to unmarshal: {}", err),
        )
    })
}

fn product_error(err: ProductError, context: &str) -> Response {
    let (status, body) = err.into_error_response(context);
    json_response(status, &body)
}
