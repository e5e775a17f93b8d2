use std::collections::BTreeSet;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{info, instrument};

use super::BATCH_COMPLETED;
use crate::domain::{Order, OrderId};
use crate::order_service::{OrderError, OrderService};
use crate::store::OrderStore;

/// POST /api/orders
///
/// A JSON `null` body reaches the service as a missing order.
#[instrument(skip(service, order))]
pub async fn create_order<S: OrderStore + 'static>(
    State(service): State<Arc<OrderService<S>>>,
    Json(order): Json<Option<Order>>,
) -> Result<Json<Order>, OrderError> {
    info!(?order, "Request received to create order");
    let created = service.create_order(order).await?;
    Ok(Json(created))
}

/// GET /api/orders
#[instrument(skip(service))]
pub async fn get_all_orders<S: OrderStore + 'static>(
    State(service): State<Arc<OrderService<S>>>,
) -> Result<Json<Vec<Order>>, OrderError> {
    info!("Request received to fetch all orders");
    Ok(Json(service.get_all_orders().await?))
}

/// GET /api/orders/{id}
#[instrument(skip(service))]
pub async fn get_order_by_id<S: OrderStore + 'static>(
    State(service): State<Arc<OrderService<S>>>,
    Path(id): Path<u64>,
) -> Result<Response, OrderError> {
    info!("Request received to fetch order by id");
    Ok(match service.get_order_by_id(OrderId(id)).await? {
        Some(order) => Json(order).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

/// POST /api/orders/process-batch
///
/// Structurally identical orders in the body collapse into one.
#[instrument(skip(service, orders), fields(batch_size = orders.len()))]
pub async fn process_batch<S: OrderStore + 'static>(
    State(service): State<Arc<OrderService<S>>>,
    Json(orders): Json<BTreeSet<Order>>,
) -> Result<&'static str, OrderError> {
    info!("Request received to process batch of orders");
    service.process_high_volume_orders(orders).await?;
    Ok(BATCH_COMPLETED)
}
