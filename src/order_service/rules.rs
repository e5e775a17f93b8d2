//! Pure decision logic applied to every submitted order.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use super::OrderError;
use crate::domain::{Order, Product};

pub const ORDER_REQUIRED: &str = "order cannot be null";
pub const CUSTOMER_NAME_REQUIRED: &str = "customer name is required";
pub const PRODUCTS_REQUIRED: &str = "order must contain at least one product";
pub const TOTAL_OUT_OF_RANGE: &str = "order total out of range";

/// Checks presence of the order, its customer name and its products, in that
/// order. The first failing check is reported.
pub fn validate_order(order: Option<Order>) -> Result<Order, OrderError> {
    let order = order.ok_or_else(|| OrderError::invalid(ORDER_REQUIRED))?;
    if order.customer_name.is_empty() {
        return Err(OrderError::invalid(CUSTOMER_NAME_REQUIRED));
    }
    if order.products.is_empty() {
        return Err(OrderError::invalid(PRODUCTS_REQUIRED));
    }
    Ok(order)
}

/// Exact sum of the product prices.
///
/// A sum beyond what `Decimal` can represent is a caller input error.
pub fn order_total(products: &[Product]) -> Result<Decimal, OrderError> {
    products
        .iter()
        .try_fold(Decimal::ZERO, |total, product| total.checked_add(product.price))
        .ok_or_else(|| OrderError::invalid(TOTAL_OUT_OF_RANGE))
}

/// Same customer and the same set of products. Ordering and repeats within
/// either product list are ignored.
pub fn is_duplicate(existing: &Order, candidate: &Order) -> bool {
    existing.customer_name == candidate.customer_name
        && same_product_set(&existing.products, &candidate.products)
}

fn same_product_set(left: &[Product], right: &[Product]) -> bool {
    let left: BTreeSet<&Product> = left.iter().collect();
    let right: BTreeSet<&Product> = right.iter().collect();
    left == right
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, cents: i64) -> Product {
        Product::new(name, Decimal::new(cents, 2))
    }

    #[test]
    fn test_missing_order_is_rejected_first() {
        assert_eq!(validate_order(None), Err(OrderError::invalid(ORDER_REQUIRED)));
    }

    #[test]
    fn test_customer_name_checked_before_products() {
        let order = Order::new("", Vec::new());
        assert_eq!(validate_order(Some(order)), Err(OrderError::invalid(CUSTOMER_NAME_REQUIRED)));
    }

    #[test]
    fn test_empty_products_rejected() {
        let order = Order::new("Jane Doe", Vec::new());
        assert_eq!(validate_order(Some(order)), Err(OrderError::invalid(PRODUCTS_REQUIRED)));
    }

    #[test]
    fn test_valid_order_passes_through_untouched() {
        let order = Order::new("Jane Doe", [product("Lamp", 1999)]);
        assert_eq!(validate_order(Some(order.clone())), Ok(order));
    }

    #[test]
    fn test_total_is_exact_and_order_independent() {
        let forward = [product("A", 10), product("B", 20), product("C", 3333)];
        let mut backward = forward.clone();
        backward.reverse();

        assert_eq!(order_total(&forward), Ok(Decimal::new(3363, 2)));
        assert_eq!(order_total(&forward), order_total(&backward));
    }

    #[test]
    fn test_total_of_free_items_is_zero() {
        assert_eq!(order_total(&[product("Sample", 0)]), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_total_overflow_is_invalid_order() {
        let products = [Product::new("A", Decimal::MAX), Product::new("B", Decimal::MAX)];
        assert_eq!(order_total(&products), Err(OrderError::invalid(TOTAL_OUT_OF_RANGE)));
    }

    #[test]
    fn test_product_values_are_taken_as_given() {
        let order = Order::new("Jane Doe", [Product::new("", Decimal::new(-500, 2)), product("Mug", 800)]);

        let order = validate_order(Some(order)).unwrap();
        assert_eq!(order_total(&order.products), Ok(Decimal::new(300, 2)));
    }

    #[test]
    fn test_duplicate_ignores_product_order() {
        let existing = Order::new("John Doe", [product("A", 100), product("B", 200)]);
        let candidate = Order::new("John Doe", [product("B", 200), product("A", 100)]);
        assert!(is_duplicate(&existing, &candidate));
    }

    #[test]
    fn test_duplicate_ignores_repeated_products() {
        let existing = Order::new("John Doe", [product("A", 100)]);
        let candidate = Order::new("John Doe", [product("A", 100), product("A", 100)]);
        assert!(is_duplicate(&existing, &candidate));
    }

    #[test]
    fn test_not_duplicate_when_customer_or_products_differ() {
        let existing = Order::new("John Doe", [product("A", 100)]);

        assert!(!is_duplicate(&existing, &Order::new("Jane Doe", [product("A", 100)])));
        assert!(!is_duplicate(&existing, &Order::new("John Doe", [product("A", 101)])));
        assert!(!is_duplicate(&existing, &Order::new("John Doe", [product("A", 100), product("B", 1)])));
    }

    #[test]
    fn test_equal_prices_with_different_scale_match() {
        let existing = Order::new("John Doe", [Product::new("A", Decimal::new(50, 0))]);
        let candidate = Order::new("John Doe", [Product::new("A", Decimal::new(5000, 2))]);
        assert!(is_duplicate(&existing, &candidate));
    }
}
