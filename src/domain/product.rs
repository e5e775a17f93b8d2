use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named, priced item on an order.
///
/// Compared structurally: two products with the same name and price are the
/// same product, regardless of which order carries them.
///
/// Names are expected non-empty and prices non-negative, but neither is
/// enforced: the order service totals and stores product values as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Decimal,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}
