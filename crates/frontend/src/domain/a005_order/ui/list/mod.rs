pub mod model;
pub mod state;

use self::state::create_state;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{Button, StatusBadge};
use crate::shared::components::{EmptyState, ErrorBox, LoadingRow, MessageBanner, PageHeader};
use crate::shared::date_utils::format_datetime;
use crate::shared::fetcher::use_fetcher;
use crate::shared::list_utils::{derive_view, SearchInput, Searchable, Sortable};
use crate::shared::resource::ResourceStore;
use contracts::domain::a005_order::aggregate::{Order, OrderStatus};
use leptos::prelude::*;

impl Searchable for Order {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.order_id.to_string(),
            self.table_id.clone(),
            self.food_count.clone(),
        ]
    }
}

impl Sortable for Order {
    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "order_id" => Some(self.order_id.to_string()),
            "food_count" => Some(self.food_count.clone()),
            "table_id" => Some(self.table_id.clone()),
            "order_datetime" => self.order_datetime.clone(),
            "status" => Some(self.status.clone()),
            _ => None,
        }
    }
}

/// Orders of the selected restaurant, filtered by status tab.
#[component]
pub fn OrderList(#[prop(into)] rest_id: Signal<Option<i64>>) -> impl IntoView {
    let fetcher = StoredValue::new(use_fetcher());
    let store = ResourceStore::<Order>::new();
    let query = create_state();

    let fetch = move || {
        let Some(rest_id) = rest_id.get_untracked() else {
            return;
        };
        let fetcher = fetcher.get_value();
        store.load(
            async move { model::fetch_orders(&fetcher, rest_id).await },
            model::load_messages(),
        );
    };
    Effect::new(move |_| {
        if rest_id.get().is_some() {
            fetch();
        }
    });

    let update = move |order_id: i64, status: OrderStatus| {
        let Some(rest_id) = rest_id.get_untracked() else {
            return;
        };
        let fetcher = fetcher.get_value();
        store.mutate(
            async move { model::update_status(&fetcher, rest_id, order_id, status).await },
            model::update_messages(),
        );
    };

    let filter = move || query.with(|q| q.status_filter.clone()).unwrap_or_default();
    let on_pending = move || filter() == OrderStatus::Pending.as_str();
    let rows = move || store.state().with(|s| query.with(|q| derive_view(&s.items, q)));

    view! {
        <div class="order-list">
            <PageHeader title="Order Management" busy=Signal::derive(move || store.is_loading())>
                <Button on_click=Callback::new(move |_| fetch())>
                    {crate::shared::icons::icon("refresh")}
                    " Refresh Orders"
                </Button>
            </PageHeader>

            <MessageBanner
                banner=Signal::derive(move || store.banner())
                on_dismiss=Callback::new(move |_| store.dismiss_banner())
            />

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || query.with(|q| q.search.clone()))
                    on_change=Callback::new(move |v: String| query.update(|q| q.search = v))
                    placeholder="Search by order ID, table ID, or food count..."
                />
                <div class="form-tabs">
                    {OrderStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! {
                                <button
                                    class="form-tabs__item"
                                    class:form-tabs__item--active=move || filter() == status.as_str()
                                    on:click=move |_| {
                                        query.update(|q| q.status_filter = Some(status.as_str().to_string()))
                                    }
                                >
                                    {status.as_str()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <ErrorBox error=Signal::derive(move || store.error()) />
            <Show when=move || store.is_loading() && !store.is_loaded()>
                <LoadingRow text="Loading orders..." />
            </Show>

            {move || {
                let rows = rows();
                if rows.is_empty() {
                    let hint = if query.with(|q| q.search.is_empty()) {
                        format!("There are no {} orders at the moment", filter().to_lowercase())
                    } else {
                        "Try adjusting your search".to_string()
                    };
                    return view! { <EmptyState title="No orders found" hint=hint /> }.into_any();
                }
                view! {
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <SortableHeaderCell label="Order ID" field="order_id" query=query />
                                <SortableHeaderCell label="Food Count" field="food_count" query=query />
                                <SortableHeaderCell label="Table ID" field="table_id" query=query />
                                <SortableHeaderCell label="Order Time" field="order_datetime" query=query />
                                <th class="table__header-cell">"Status"</th>
                                <Show when=on_pending>
                                    <th class="table__header-cell">"Actions"</th>
                                </Show>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|order| {
                                    let id = order.order_id;
                                    let placed = order
                                        .order_datetime
                                        .as_deref()
                                        .map(format_datetime)
                                        .unwrap_or_else(|| "N/A".to_string());
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{id}</td>
                                            <td class="table__cell">{order.food_count}</td>
                                            <td class="table__cell">{order.table_id}</td>
                                            <td class="table__cell">{placed}</td>
                                            <td class="table__cell">
                                                <StatusBadge status=order.status />
                                            </td>
                                            <Show when=on_pending>
                                                <td class="table__cell table__cell--actions">
                                                    <Button
                                                        size="sm"
                                                        on_click=Callback::new(move |_| update(id, OrderStatus::Delivered))
                                                    >
                                                        "Mark Delivered"
                                                    </Button>
                                                    <Button
                                                        size="sm"
                                                        variant="danger"
                                                        on_click=Callback::new(move |_| update(id, OrderStatus::Cancelled))
                                                    >
                                                        "Cancel"
                                                    </Button>
                                                </td>
                                            </Show>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_order::aggregate::OrderBuckets;
    use crate::shared::list_utils::ListQuery;
    use serde_json::json;

    fn orders() -> Vec<Order> {
        let buckets: OrderBuckets = serde_json::from_value(json!({
            "fetched_data_delivered": [],
            "fetched_data_not_selected": [],
            "fetched_data_pending": [{ "order_id": 7, "table_id": 3, "food_count": 2 }],
            "fetched_data_cancelled": []
        }))
        .unwrap();
        buckets.into_collection()
    }

    #[test]
    fn pending_order_only_shows_under_pending() {
        let items = orders();
        assert_eq!(derive_view(&items, &ListQuery::with_status("Pending")).len(), 1);
        assert!(derive_view(&items, &ListQuery::with_status("Delivered")).is_empty());
    }

    #[test]
    fn search_covers_table_and_food_count() {
        let mut items = orders();
        items.push(Order {
            order_id: 12,
            table_id: "9".into(),
            food_count: "5".into(),
            status: "Pending".into(),
            ..Default::default()
        });
        let mut query = ListQuery::with_status("Pending");
        query.search = "9".into();
        let ids: Vec<i64> = derive_view(&items, &query).iter().map(|o| o.order_id).collect();
        assert_eq!(ids, vec![12]);

        query.search.clear();
        query.toggle_sort("food_count");
        query.toggle_sort("food_count");
        let ids: Vec<i64> = derive_view(&items, &query).iter().map(|o| o.order_id).collect();
        assert_eq!(ids, vec![12, 7]);
    }
}
