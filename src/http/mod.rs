//! REST front for the order service.
//!
//! | Method | Path                          | Success            |
//! |--------|-------------------------------|--------------------|
//! | POST   | `/api/orders`                 | 200 created order  |
//! | GET    | `/api/orders`                 | 200 all orders     |
//! | GET    | `/api/orders/{id}`            | 200 order, or 404  |
//! | POST   | `/api/orders/process-batch`   | 200 text message   |
//!
//! Invalid and duplicate orders answer 400, storage failures 500.

mod handlers;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;

use crate::order_service::{OrderError, OrderService};
use crate::store::OrderStore;

pub const BATCH_COMPLETED: &str = "Batch processing completed successfully";

/// Builds the router over a shared order service.
pub fn router<S: OrderStore + 'static>(service: Arc<OrderService<S>>) -> Router {
    Router::new()
        .route("/api/orders", post(handlers::create_order::<S>).get(handlers::get_all_orders::<S>))
        .route("/api/orders/process-batch", post(handlers::process_batch::<S>))
        .route("/api/orders/{id}", get(handlers::get_order_by_id::<S>))
        .with_state(service)
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
