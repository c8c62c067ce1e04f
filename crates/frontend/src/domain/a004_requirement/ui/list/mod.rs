use crate::domain::a004_requirement::ui::details::model;
use crate::shared::components::ui::{Button, StatusBadge};
use crate::shared::fetcher::Fetcher;
use crate::shared::resource::ResourceStore;
use contracts::domain::a004_requirement::aggregate::Requirement;
use leptos::prelude::*;

pub fn load_requirements(fetcher: Fetcher, store: ResourceStore<Requirement>) {
    store.load(
        async move { model::fetch_requirements(&fetcher).await },
        model::load_messages(),
    );
}

fn or_na(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| "N/A".to_string())
}

/// Requirement rows with a completion action for pending ones.
#[component]
pub fn RequirementsTable(store: ResourceStore<Requirement>, fetcher: StoredValue<Fetcher>) -> impl IntoView {
    let complete = move |id: i64| {
        let fetcher = fetcher.get_value();
        store.mutate(
            async move { model::mark_completed(&fetcher, id).await },
            model::complete_messages(),
        );
    };

    view! {
        <table class="table__data table--striped">
            <thead class="table__head">
                <tr>
                    <th class="table__header-cell">"Requirement ID"</th>
                    <th class="table__header-cell">"User"</th>
                    <th class="table__header-cell">"Room ID"</th>
                    <th class="table__header-cell">"Description"</th>
                    <th class="table__header-cell">"Status"</th>
                    <th class="table__header-cell">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let items = store.items();
                    if items.is_empty() {
                        return view! {
                            <tr>
                                <td class="table__cell table__cell--empty" colspan="6">
                                    "No requirements available"
                                </td>
                            </tr>
                        }
                        .into_any();
                    }
                    items
                        .into_iter()
                        .map(|req| {
                            let id = req.requirement_id;
                            let pending = req.is_pending();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{id}</td>
                                    <td class="table__cell">{or_na(req.user_id)}</td>
                                    <td class="table__cell">{or_na(req.room_id)}</td>
                                    <td class="table__cell">{or_na(req.description)}</td>
                                    <td class="table__cell">
                                        <StatusBadge status=req.status />
                                    </td>
                                    <td class="table__cell">
                                        <Show when=move || pending>
                                            <Button
                                                size="sm"
                                                on_click=Callback::new(move |_| complete(id))
                                                disabled=Signal::derive(move || store.is_loading())
                                            >
                                                "Mark as Completed"
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
    }
}
