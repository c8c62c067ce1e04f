//! Sortable column header bound to a [`ListQuery`] signal.
//!
//! ```text
//! <SortableHeaderCell label="Order ID" field="order_id" query=query />
//! ```

use crate::shared::list_utils::{get_sort_indicator, ListQuery};
use leptos::prelude::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    field: &'static str,
    query: RwSignal<ListQuery>,
    /// "left" (default) or "right" for numeric columns
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let right = align == "right";
    let is_sorted = move || query.with(|q| q.sort_field() == Some(field));

    view! {
        <th
            class="table__header-cell table__header-cell--sortable"
            class:table__header-cell--right=right
            class:table__header-cell--sorted=is_sorted
            on:click=move |_| query.update(|q| q.toggle_sort(field))
        >
            {label}
            <span class="table__sort-indicator">
                {move || query.with(|q| get_sort_indicator(q, field))}
            </span>
        </th>
    }
}
