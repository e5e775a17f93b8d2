use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};

use super::rules::{is_duplicate, order_total, validate_order};
use super::OrderError;
use crate::domain::{Order, OrderId};
use crate::store::OrderStore;

/// Gatekeeper between untrusted order submissions and the order store.
///
/// Every create, single or batched, runs its duplicate scan and save inside one
/// exclusive section, so two concurrent submissions of the same order cannot
/// both be persisted. A batch holds the section for its whole run.
pub struct OrderService<S> {
    store: S,
    exclusive: Arc<Mutex<()>>,
}

impl<S: OrderStore> OrderService<S> {
    pub fn new(store: S) -> Self {
        Self::with_exclusive_section(store, Arc::new(Mutex::new(())))
    }

    /// Builds a service that serializes on a section shared with other owners.
    pub fn with_exclusive_section(store: S, exclusive: Arc<Mutex<()>>) -> Self {
        Self { store, exclusive }
    }

    /// Validates, deduplicates, totals and persists one order.
    ///
    /// `None` stands for a submission without any order in it.
    #[instrument(name = "create_order", skip(self, order))]
    pub async fn create_order(&self, order: Option<Order>) -> Result<Order, OrderError> {
        let _section = self.exclusive.lock().await;
        self.create_in_section(order).await
    }

    #[instrument(skip(self))]
    pub async fn get_all_orders(&self) -> Result<Vec<Order>, OrderError> {
        info!("Fetching all orders");
        self.store.find_all().await
    }

    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn get_order_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        info!("Fetching order by id");
        let order = self.store.find_by_id(id).await?;
        if order.is_none() {
            debug!("Order not found");
        }
        Ok(order)
    }

    /// Creates every order of the batch one at a time under a single hold of
    /// the exclusive section.
    ///
    /// Stops at the first failure and returns it. Orders persisted before the
    /// failure stay persisted; the rest are never attempted.
    #[instrument(skip(self, orders), fields(batch_size = orders.len()))]
    pub async fn process_high_volume_orders(&self, orders: BTreeSet<Order>) -> Result<(), OrderError> {
        let _section = self.exclusive.lock().await;
        info!("Processing high volume of orders");

        for (position, order) in orders.into_iter().enumerate() {
            if let Err(e) = self.create_in_section(Some(order)).await {
                warn!(position, error = %e, "Batch aborted");
                return Err(e);
            }
        }

        info!("Batch processed");
        Ok(())
    }

    /// Caller must hold the exclusive section.
    async fn create_in_section(&self, order: Option<Order>) -> Result<Order, OrderError> {
        let mut order = validate_order(order).inspect_err(|e| error!(error = %e, "Order validation failed"))?;

        debug!(customer_name = %order.customer_name, "Checking for duplicate order");
        let existing = self.store.find_all().await?;
        if existing.iter().any(|stored| is_duplicate(stored, &order)) {
            warn!(customer_name = %order.customer_name, "Duplicate order detected");
            return Err(OrderError::DuplicateOrder);
        }

        // Identifiers come from the store only.
        order.id = None;
        order.total_value = order_total(&order.products)
            .inspect_err(|e| error!(error = %e, "Order total rejected"))?;

        let saved = self.store.save(order).await?;
        info!(
            order_id = ?saved.id,
            customer_name = %saved.customer_name,
            total_value = %saved.total_value,
            "Order created"
        );
        Ok(saved)
    }
}
