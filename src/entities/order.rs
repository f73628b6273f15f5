use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::next_id;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::OutForDelivery => "out-for-delivery",
            Self::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(())
    }
}

/// One line of an order. Whatever else the client sent about the dish
/// (id, name, price, ...) is kept alongside the quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDish {
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

/// Fields a PUT may change; the line items are fixed once the order exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderUpdate {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(new: NewOrder) -> Self {
        Self {
            id: next_id(),
            deliver_to: new.deliver_to,
            mobile_number: new.mobile_number,
            status: new.status,
            dishes: new.dishes,
        }
    }

    pub fn apply(&mut self, update: OrderUpdate) {
        self.deliver_to = update.deliver_to;
        self.mobile_number = update.mobile_number;
        self.status = update.status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_serde_is_kebab_case() {
        let s = serde_json::to_string(&OrderStatus::OutForDelivery).unwrap();
        assert_eq!(s, "\"out-for-delivery\"");
        let back: OrderStatus = serde_json::from_str(&s).unwrap();
        assert_eq!(back, OrderStatus::OutForDelivery);
    }

    #[test]
    fn status_from_str_matches_wire_names() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
        assert!("cancelled".parse::<OrderStatus>().is_err());
        assert!("Pending".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn order_serializes_camel_case_and_keeps_dish_details() {
        let mut details = Map::new();
        details.insert("id".into(), json!("d1"));
        details.insert("name".into(), json!("Taco"));
        let o = Order {
            id: "o1".into(),
            deliver_to: "1 Main St".into(),
            mobile_number: "555".into(),
            status: OrderStatus::Pending,
            dishes: vec![OrderDish {
                quantity: 2,
                details,
            }],
        };
        let v = serde_json::to_value(&o).unwrap();
        assert_eq!(v["deliverTo"], "1 Main St");
        assert_eq!(v["mobileNumber"], "555");
        assert_eq!(v["status"], "pending");
        assert_eq!(v["dishes"][0]["quantity"], 2);
        assert_eq!(v["dishes"][0]["name"], "Taco");

        let back: Order = serde_json::from_value(v).unwrap();
        assert_eq!(back, o);
    }

    #[test]
    fn apply_leaves_dishes_alone() {
        let mut o = Order::new(NewOrder {
            deliver_to: "a".into(),
            mobile_number: "1".into(),
            status: OrderStatus::Pending,
            dishes: vec![OrderDish {
                quantity: 1,
                details: Map::new(),
            }],
        });
        o.apply(OrderUpdate {
            deliver_to: "b".into(),
            mobile_number: "2".into(),
            status: OrderStatus::Preparing,
        });
        assert_eq!(o.deliver_to, "b");
        assert_eq!(o.mobile_number, "2");
        assert_eq!(o.status, OrderStatus::Preparing);
        assert_eq!(o.dishes.len(), 1);
    }
}
