//! The order service: validation, duplicate detection, totals, and batch
//! serialization in front of the order store.

pub mod error;
pub mod rules;
mod service;

pub use error::*;
pub use service::*;
