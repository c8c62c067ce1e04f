use crate::shared::list_utils::ListQuery;
use contracts::domain::a005_order::aggregate::OrderStatus;
use leptos::prelude::*;

/// Orders open on the pending tab.
pub fn create_state() -> RwSignal<ListQuery> {
    RwSignal::new(ListQuery::with_status(OrderStatus::Pending.as_str()))
}
