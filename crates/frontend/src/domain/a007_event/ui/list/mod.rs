pub mod model;

use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{Button, StatusBadge};
use crate::shared::components::{ErrorBox, LoadingRow, MessageBanner, PageHeader};
use crate::shared::date_utils::display_date;
use crate::shared::fetcher::use_fetcher;
use crate::shared::list_utils::{derive_view, ListQuery, SearchInput, Searchable, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::ResourceStore;
use contracts::domain::a007_event::aggregate::Event;
use leptos::prelude::*;

impl Searchable for Event {
    fn search_fields(&self) -> Vec<String> {
        vec![self.event_name.clone(), self.description.clone()]
    }
}

impl Sortable for Event {
    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "event_name" => Some(self.event_name.clone()),
            "event_date" => self.event_date.clone(),
            "insert_date" => self.insert_date.clone(),
            "status" => Some(self.status.clone()),
            _ => None,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EventList() -> impl IntoView {
    let fetcher = StoredValue::new(use_fetcher());
    let store = ResourceStore::<Event>::new();
    let query = RwSignal::new(ListQuery::new());

    let refresh = move || {
        let fetcher = fetcher.get_value();
        store.load(
            async move { model::fetch_todays_events(&fetcher).await },
            model::load_messages(),
        );
    };
    refresh();

    let mark_over = move |id: i64| {
        let fetcher = fetcher.get_value();
        store.mutate(
            async move { model::mark_over(&fetcher, id).await },
            model::over_messages(),
        );
    };

    let rows = move || store.state().with(|s| query.with(|q| derive_view(&s.items, q)));
    let has_search = move || query.with(|q| !q.search.is_empty());

    view! {
        <PageFrame page_id="a007_event--list" category=PAGE_CAT_LIST>
            <PageHeader title="Today's Events" busy=Signal::derive(move || store.is_loading())>
                <SearchInput
                    value=Signal::derive(move || query.with(|q| q.search.clone()))
                    on_change=Callback::new(move |v: String| query.update(|q| q.search = v))
                    placeholder="Search events..."
                />
                <Button on_click=Callback::new(move |_| refresh())>
                    {crate::shared::icons::icon("refresh")}
                    " Refresh Events"
                </Button>
            </PageHeader>

            <MessageBanner
                banner=Signal::derive(move || store.banner())
                on_dismiss=Callback::new(move |_| store.dismiss_banner())
            />
            <ErrorBox error=Signal::derive(move || store.error()) />
            <Show when=move || store.is_loading() && !store.is_loaded()>
                <LoadingRow text="Loading events..." />
            </Show>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SortableHeaderCell label="Event Name" field="event_name" query=query />
                            <th class="table__header-cell">"Description"</th>
                            <SortableHeaderCell label="Event Date" field="event_date" query=query />
                            <SortableHeaderCell label="Insert Date" field="insert_date" query=query />
                            <SortableHeaderCell label="Status" field="status" query=query />
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = rows();
                            if rows.is_empty() {
                                let text = if has_search() {
                                    "No events match your search"
                                } else {
                                    "No events available"
                                };
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="6">{text}</td>
                                    </tr>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|event| {
                                    let id = event.event_id;
                                    let over = event.is_over();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{event.event_name}</td>
                                            <td class="table__cell">{event.description}</td>
                                            <td class="table__cell">{display_date(event.event_date.as_deref())}</td>
                                            <td class="table__cell">{display_date(event.insert_date.as_deref())}</td>
                                            <td class="table__cell">
                                                <StatusBadge status=event.status />
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                <Show when=move || !over>
                                                    <Button
                                                        size="sm"
                                                        disabled=Signal::derive(move || store.is_loading())
                                                        on_click=Callback::new(move |_| mark_over(id))
                                                    >
                                                        "Mark as Over"
                                                    </Button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}
