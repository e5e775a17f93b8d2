//! Durable keyed storage of orders, as seen by the order service.

mod entity;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Order, OrderId};
use crate::order_service::OrderError;

/// Client handle for the actor that owns the order record set.
pub type OrderStoreClient = ResourceClient<Order>;

/// The narrow storage contract the order service depends on.
///
/// Implementations assign an identifier on save when the order has none and
/// report every failure as [`OrderError::StorageFailure`].
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn save(&self, order: Order) -> Result<Order, OrderError>;

    async fn find_all(&self) -> Result<Vec<Order>, OrderError>;

    /// A missing id is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderError>;
}

#[async_trait]
impl OrderStore for ResourceClient<Order> {
    #[instrument(skip(self, order), fields(customer_name = %order.customer_name))]
    async fn save(&self, order: Order) -> Result<Order, OrderError> {
        debug!("Sending request");
        Ok(self.insert(order).await?)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        Ok(self.list().await?)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        Ok(self.get(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_framework::{create_mock_store, expect_get};

    #[tokio::test]
    async fn test_find_by_id_forwards_to_actor() {
        let (client, mut receiver) = create_mock_store(10);

        let lookup = tokio::spawn(async move { client.find_by_id(OrderId(9)).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, OrderId(9));
        responder.send(Ok(None)).unwrap();

        assert_eq!(lookup.await.unwrap(), Ok(None));
    }

    #[tokio::test]
    async fn test_dropped_reply_is_storage_failure() {
        let (client, mut receiver) = create_mock_store(10);

        let lookup = tokio::spawn(async move { client.find_by_id(OrderId(1)).await });

        let (_, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        drop(responder);

        let err = lookup.await.unwrap().unwrap_err();
        assert!(matches!(err, OrderError::StorageFailure(_)));
    }
}
