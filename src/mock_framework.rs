//! # Mock Framework
//!
//! Utilities for testing the order service without a running store actor.
//!
//! Use [`create_mock_store`] to get a store client and the receiver its requests
//! land on. Then use [`expect_list`], [`expect_insert`] or [`expect_get`] to
//! assert what the service asked for and script the store's reply.

use crate::actor_framework::{Response, ResourceClient, ResourceRequest};
use crate::domain::{Order, OrderId};
use tokio::sync::mpsc;

/// Creates a mock store client and a receiver for asserting requests.
///
/// Replying through the handed-out responder simulates the store's answer;
/// dropping it simulates a store that died mid-request.
pub fn create_mock_store(buffer_size: usize) -> (ResourceClient<Order>, mpsc::Receiver<ResourceRequest<Order>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Insert request
pub async fn expect_insert(receiver: &mut mpsc::Receiver<ResourceRequest<Order>>) -> Option<(Order, Response<Order>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Insert { record, respond_to }) => Some((record, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get(receiver: &mut mpsc::Receiver<ResourceRequest<Order>>) -> Option<(OrderId, Response<Option<Order>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list(receiver: &mut mpsc::Receiver<ResourceRequest<Order>>) -> Option<Response<Vec<Order>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_mock_store() {
        let (client, mut receiver) = create_mock_store(10);

        let insert_task = tokio::spawn(async move {
            let order = Order::new("Test", [Product::new("Pen", Decimal::ONE)]);
            client.insert(order).await
        });

        let (record, responder) = expect_insert(&mut receiver).await.expect("Expected Insert request");
        assert_eq!(record.customer_name, "Test");
        let mut stored = record.clone();
        stored.id = Some(OrderId(1));
        responder.send(Ok(stored.clone())).unwrap();

        let result = insert_task.await.unwrap();
        assert_eq!(result, Ok(stored));
    }
}
