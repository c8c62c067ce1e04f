use crate::shared::action_error::ActionError;
use crate::shared::fetcher::{Fetcher, SuccessMarker};
use crate::shared::resource::{ActionMessages, Reconcile};
use contracts::domain::a005_order::aggregate::{
    FetchOrdersRequest, ModifyOrderStatusRequest, Order, OrderBuckets, OrderStatus,
};

const FETCH_ORDERS: &str = "/restaurant/fetch_orders";
const MODIFY_ORDER_STATUS: &str = "/restaurant/modify_orders_status";

pub fn load_messages() -> ActionMessages {
    ActionMessages::load(
        "Failed to fetch orders. Please try again.",
        "Failed to fetch orders. Please try again.",
    )
}

/// Status changes are visible in the table, so success stays silent.
pub fn update_messages() -> ActionMessages {
    ActionMessages::new("", "Failed to update order status. Please try again.")
}

/// Loads all four order buckets of a restaurant as one collection.
pub async fn fetch_orders(fetcher: &Fetcher, rest_id: i64) -> Result<Vec<Order>, ActionError> {
    let buckets: OrderBuckets = fetcher
        .post_as(
            FETCH_ORDERS,
            Some(&FetchOrdersRequest { rest_id }),
            SuccessMarker::HttpOk,
        )
        .await?;
    Ok(buckets.into_collection())
}

pub async fn update_status(
    fetcher: &Fetcher,
    rest_id: i64,
    order_id: i64,
    status: OrderStatus,
) -> Result<Reconcile<Order>, ActionError> {
    let request = ModifyOrderStatusRequest {
        order_id,
        rest_id,
        status: status.as_str().to_string(),
    };
    fetcher
        .post(MODIFY_ORDER_STATUS, Some(&request), SuccessMarker::HttpOk)
        .await?;
    log::info!("order {} is now {}", order_id, status.as_str());
    Ok(Reconcile::PatchStatus {
        id: order_id,
        status: status.as_str().to_string(),
    })
}
