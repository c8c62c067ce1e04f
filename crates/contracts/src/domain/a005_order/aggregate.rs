use crate::domain::common::ResourceItem;
use crate::shared::wire;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// Restaurant table order. `status` is assigned on the client from the
/// bucket the order arrived in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(deserialize_with = "wire::i64_lenient")]
    pub order_id: i64,
    #[serde(default, deserialize_with = "wire::string_lenient")]
    pub table_id: String,
    #[serde(default, deserialize_with = "wire::string_lenient")]
    pub food_count: String,
    #[serde(default, deserialize_with = "wire::opt_string_lenient")]
    pub order_datetime: Option<String>,
    #[serde(default)]
    pub status: String,
}

impl ResourceItem for Order {
    type Id = i64;

    fn id(&self) -> i64 {
        self.order_id
    }

    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Orders of one restaurant, grouped by the server into status buckets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderBuckets {
    #[serde(default, deserialize_with = "wire::vec_or_null")]
    pub fetched_data_delivered: Vec<Order>,
    #[serde(default, deserialize_with = "wire::vec_or_null")]
    pub fetched_data_not_selected: Vec<Order>,
    #[serde(default, deserialize_with = "wire::vec_or_null")]
    pub fetched_data_pending: Vec<Order>,
    #[serde(default, deserialize_with = "wire::vec_or_null")]
    pub fetched_data_cancelled: Vec<Order>,
}

impl OrderBuckets {
    /// Flattens the buckets, delivered first, stamping each order's status.
    /// Orders not yet picked up by the kitchen count as pending.
    pub fn into_collection(self) -> Vec<Order> {
        let buckets = [
            (self.fetched_data_delivered, OrderStatus::Delivered),
            (self.fetched_data_not_selected, OrderStatus::Pending),
            (self.fetched_data_pending, OrderStatus::Pending),
            (self.fetched_data_cancelled, OrderStatus::Cancelled),
        ];
        buckets
            .into_iter()
            .flat_map(|(orders, status)| {
                orders.into_iter().map(move |mut order| {
                    order.status = status.as_str().to_string();
                    order
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchOrdersRequest {
    pub rest_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModifyOrderStatusRequest {
    pub order_id: i64,
    pub rest_id: i64,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn buckets_flatten_with_assigned_status() {
        let buckets: OrderBuckets = serde_json::from_value(json!({
            "fetched_data_delivered": [{ "order_id": 1, "table_id": 4, "food_count": 2 }],
            "fetched_data_not_selected": [{ "order_id": 2 }],
            "fetched_data_pending": [{ "order_id": 3 }],
            "fetched_data_cancelled": null
        }))
        .unwrap();
        let orders = buckets.into_collection();
        let summary: Vec<(i64, &str)> = orders
            .iter()
            .map(|o| (o.order_id, o.status.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![(1, "Delivered"), (2, "Pending"), (3, "Pending")]
        );
        assert_eq!(orders[0].table_id, "4");
    }

    #[test]
    fn server_status_is_overridden_by_bucket() {
        let buckets: OrderBuckets = serde_json::from_value(json!({
            "fetched_data_cancelled": [{ "order_id": 9, "status": "whatever" }]
        }))
        .unwrap();
        assert_eq!(buckets.into_collection()[0].status, "Cancelled");
    }
}
