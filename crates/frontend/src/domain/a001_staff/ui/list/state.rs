use crate::shared::list_utils::ListQuery;
use leptos::prelude::*;

/// Employee table starts unsorted, in server order.
pub fn create_state() -> RwSignal<ListQuery> {
    RwSignal::new(ListQuery::new())
}
