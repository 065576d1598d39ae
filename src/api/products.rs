//! Product catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::product::Product;
use crate::infrastructure::product::{CreateProductRequest, UpdateProductRequest};

/// Create the products router
pub fn create_products_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Request to create a product
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductApiRequest {
    pub name: String,
    pub price: f64,
    pub category_id: String,
}

/// Request to update a product; omitted fields are left untouched
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProductApiRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
}

/// Response carrying the identifier of a newly created product
#[derive(Debug, Clone, Serialize)]
pub struct CreateProductResponse {
    pub id: String,
}

/// Product response
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().as_str().to_string(),
            name: product.name().to_string(),
            price: product.price().value(),
            category_id: product.category_id().to_string(),
            created_at: product.created_at().to_rfc3339(),
            updated_at: product.updated_at().to_rfc3339(),
        }
    }
}

/// List products response
#[derive(Debug, Clone, Serialize)]
pub struct ListProductsResponse {
    pub products: Vec<ProductResponse>,
    pub total: usize,
}

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductApiRequest>,
) -> Result<(StatusCode, Json<CreateProductResponse>), ApiError> {
    debug!(name = %request.name, "Creating product");

    let id = state
        .product_service
        .create(CreateProductRequest {
            name: request.name,
            price: request.price,
            category_id: request.category_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponse {
            id: id.as_str().to_string(),
        }),
    ))
}

/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ListProductsResponse>, ApiError> {
    let products = state.product_service.list().await.map_err(ApiError::from)?;

    let responses: Vec<ProductResponse> = products.iter().map(ProductResponse::from).collect();
    let total = responses.len();

    Ok(Json(ListProductsResponse {
        products: responses,
        total,
    }))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state
        .product_service
        .get(&id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("Product '{}' not found", id)))?;

    Ok(Json(ProductResponse::from(&product)))
}

/// PUT /products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateProductApiRequest>,
) -> Result<StatusCode, ApiError> {
    debug!(product_id = %id, "Updating product");

    state
        .product_service
        .update(
            &id,
            UpdateProductRequest {
                name: request.name,
                price: request.price,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(product_id = %id, "Deleting product");

    state
        .product_service
        .delete(&id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
