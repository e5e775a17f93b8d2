//! # Order Intake
//!
//! Accepts order submissions, validates and deduplicates them, computes their
//! total value, and keeps them for retrieval by id or in bulk.
//!
//! - **Store actor** - a tokio actor owning the order record set → [`ResourceActor`]
//! - **Store contract** - the narrow interface the service persists through → [`OrderStore`]
//! - **Order service** - validation, duplicate detection, totals, batches → [`OrderService`]
//! - **System coordinator** - startup and shutdown of the above → [`OrderSystem`]
//! - **HTTP front** - axum routes over the service → [`http::router`]
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use order_intake::app_system::{OrderSystem, SystemConfig};
//! use order_intake::domain::{Order, Product};
//! use rust_decimal::Decimal;
//!
//! let system = OrderSystem::new(&SystemConfig::default());
//! let order = Order::new("John Doe", [Product::new("Product A", Decimal::new(500, 1))]);
//! let created = system.order_service.create_order(Some(order)).await?;
//! assert_eq!(created.total_value, Decimal::new(500, 1));
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```
//!
//! [`ResourceActor`]: actor_framework::ResourceActor
//! [`OrderStore`]: store::OrderStore
//! [`OrderService`]: order_service::OrderService
//! [`OrderSystem`]: app_system::OrderSystem

pub mod actor_framework;
pub mod app_system;
pub mod domain;
pub mod http;
pub mod order_service;
pub mod store;

#[cfg(test)]
mod mock_framework;
