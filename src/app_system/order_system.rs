use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info, instrument};

use super::SystemConfig;
use crate::actor_framework::ResourceActor;
use crate::domain::{Order, OrderId};
use crate::order_service::OrderService;
use crate::store::OrderStoreClient;

/// The order service as wired by [`OrderSystem`].
pub type SystemOrderService = OrderService<OrderStoreClient>;

/// The main application system that owns the store actor and the service.
///
/// Responsible for starting the actor, wiring the service to it, and handling
/// shutdown. Must be created inside a tokio runtime.
pub struct OrderSystem {
    pub order_service: Arc<SystemOrderService>,
    store_client: OrderStoreClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    #[instrument(name = "order_system", skip(config))]
    pub fn new(config: &SystemConfig) -> Self {
        info!("Starting order system");

        let order_id_counter = Arc::new(AtomicU64::new(1));
        let next_order_id = move || OrderId(order_id_counter.fetch_add(1, Ordering::SeqCst));

        let (store_actor, store_client) = ResourceActor::<Order>::new(config.store_buffer_size, next_order_id);
        let store_handle = tokio::spawn(store_actor.run());

        let order_service = Arc::new(OrderService::new(store_client.clone()));

        info!("Order system started successfully");
        Self {
            order_service,
            store_client,
            handles: vec![store_handle],
        }
    }

    /// Stops the store actor after it drains queued requests, then waits for it.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order system");

        if let Err(e) = self.store_client.shutdown().await {
            error!(error = %e, "Store actor already gone");
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Order system shutdown complete");
        Ok(())
    }
}
