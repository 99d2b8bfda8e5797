//! Order record
//!
//! `items` holds menu item ids. They are not checked against the menu
//! store. `status` starts as [`DEFAULT_ORDER_STATUS`] and nothing in the
//! service ever changes it.

/// Status given to orders created without one
pub const DEFAULT_ORDER_STATUS: &str = "pending";

fn default_order_status() -> String {
    DEFAULT_ORDER_STATUS.to_string()
}

impl_record!(
    Order,
    OrderDraft,
    "orders",
    labels: ("Order", "Orders"),
    required: ["restaurantId", "items", "total"],
    owned {
        /// Ordered menu item ids
        items: Vec<String>,
        total: f64,
        #[serde(default = "default_order_status")]
        status: String,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::Record;
    use crate::core::id::UuidGenerator;
    use serde_json::json;

    #[test]
    fn test_status_defaults_to_pending() {
        let draft: OrderDraft = serde_json::from_value(
            json!({"restaurantId": "r", "items": ["m-1", "m-2"], "total": 21.0}),
        )
        .unwrap();
        let order = Order::create(&UuidGenerator, draft);
        assert_eq!(order.status, "pending");
        assert_eq!(order.items, vec!["m-1", "m-2"]);
    }

    #[test]
    fn test_explicit_status_is_kept() {
        let draft: OrderDraft = serde_json::from_value(
            json!({"restaurantId": "r", "items": [], "total": 0.0, "status": "paid"}),
        )
        .unwrap();
        assert_eq!(draft.status, "paid");
    }
}
