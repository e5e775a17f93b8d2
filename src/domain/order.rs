use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::Product;

/// Identifier handed out by the order store on first save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Represents a customer order.
///
/// Missing or `null` JSON fields deserialize to empty values so that the order
/// service, not the decoder, decides what an acceptable order is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_value: Decimal,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Order {
    /// Creates an unpersisted order with no total computed yet.
    pub fn new(customer_name: impl Into<String>, products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            id: None,
            customer_name: customer_name.into(),
            products: products.into_iter().collect(),
            total_value: Decimal::ZERO,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let order: Order = serde_json::from_str("{}").unwrap();
        assert_eq!(order, Order::new("", Vec::new()));
        assert!(!order.is_persisted());
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let order: Order =
            serde_json::from_str(r#"{"customerName":null,"products":null,"totalValue":null}"#).unwrap();
        assert_eq!(order, Order::new("", Vec::new()));
    }

    #[test]
    fn test_wire_shape_uses_camel_case() {
        let mut order = Order::new("John Doe", [Product::new("Product A", Decimal::new(500, 1))]);
        order.id = Some(OrderId(3));
        order.total_value = Decimal::new(500, 1);

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["customerName"], "John Doe");
        assert_eq!(json["totalValue"], 50.0);
        assert_eq!(json["products"][0]["price"], 50.0);
    }
}
