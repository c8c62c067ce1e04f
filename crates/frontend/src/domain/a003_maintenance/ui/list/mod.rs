pub mod model;

use crate::domain::a004_requirement::ui::list::{load_requirements, RequirementsTable};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::{Button, StatusBadge};
use crate::shared::components::{ErrorBox, LoadingRow, MessageBanner, PageHeader};
use crate::shared::date_utils::display_date;
use crate::shared::fetcher::use_fetcher;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::{Banner, ResourceStore};
use contracts::domain::a003_maintenance::aggregate::MaintenanceTask;
use contracts::domain::a004_requirement::aggregate::Requirement;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MaintenanceTab {
    Tasks,
    Requirements,
}

#[component]
#[allow(non_snake_case)]
pub fn MaintenanceList() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let fetcher = StoredValue::new(use_fetcher());
    let tasks = ResourceStore::<MaintenanceTask>::new();
    let requirements = ResourceStore::<Requirement>::new();
    let active = RwSignal::new(MaintenanceTab::Tasks);

    let load_tasks = move || {
        let fetcher = fetcher.get_value();
        tasks.load(
            async move { model::fetch_pending(&fetcher).await },
            model::load_messages(),
        );
    };
    let select = move |tab: MaintenanceTab| {
        active.set(tab);
        match tab {
            MaintenanceTab::Tasks => load_tasks(),
            MaintenanceTab::Requirements => load_requirements(fetcher.get_value(), requirements),
        }
    };
    load_tasks();

    let complete = move |id: i64| {
        let fetcher = fetcher.get_value();
        tasks.mutate(
            async move { model::mark_completed(&fetcher, id).await },
            model::complete_messages(),
        );
    };
    let load_today = move |_: leptos::ev::MouseEvent| {
        let fetcher = fetcher.get_value();
        tasks.mutate_then(
            async move { model::load_today(&fetcher).await },
            model::load_today_messages(),
            move |ok| {
                if ok {
                    load_tasks();
                }
            },
        );
    };

    let busy = move || tasks.is_loading() || requirements.is_loading();
    let on_tasks = move || active.get() == MaintenanceTab::Tasks;
    let banner = Signal::derive(move || -> Option<Banner> {
        if on_tasks() {
            tasks.banner()
        } else {
            requirements.banner()
        }
    });
    let error = Signal::derive(move || {
        if on_tasks() {
            tasks.error()
        } else {
            requirements.error()
        }
    });

    view! {
        <PageFrame page_id="a003_maintenance--list" category=PAGE_CAT_LIST>
            <PageHeader title="Maintenance Management" busy=Signal::derive(busy)>
                <Show
                    when=on_tasks
                    fallback=move || {
                        view! {
                            <Button on_click=Callback::new(move |_| {
                                tabs_store.open_tab("a004_requirement", "Add Requirement")
                            })>
                                "Add Requirement"
                            </Button>
                        }
                    }
                >
                    <Button on_click=Callback::new(load_today)>"Load Today's Maintenance"</Button>
                </Show>
            </PageHeader>

            <MessageBanner
                banner=banner
                on_dismiss=Callback::new(move |_| {
                    tasks.dismiss_banner();
                    requirements.dismiss_banner();
                })
            />

            <div class="form-tabs">
                <button
                    class="form-tabs__item"
                    class:form-tabs__item--active=on_tasks
                    on:click=move |_| select(MaintenanceTab::Tasks)
                >
                    "Maintenance List"
                </button>
                <button
                    class="form-tabs__item"
                    class:form-tabs__item--active=move || !on_tasks()
                    on:click=move |_| select(MaintenanceTab::Requirements)
                >
                    "Requirements List"
                </button>
            </div>

            <ErrorBox error=error />
            <Show when=busy>
                <LoadingRow />
            </Show>

            <Show
                when=on_tasks
                fallback=move || view! { <RequirementsTable store=requirements fetcher=fetcher /> }
            >
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"ID"</th>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Location"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = tasks.items();
                            if items.is_empty() {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="5">
                                            "No maintenance data available"
                                        </td>
                                    </tr>
                                }
                                .into_any();
                            }
                            items
                                .into_iter()
                                .map(|task| {
                                    let id = task.maintenance_id;
                                    let pending = task.is_pending();
                                    let location = task.location_label();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{id}</td>
                                            <td class="table__cell">
                                                {display_date(task.today_maintenance_date.as_deref())}
                                            </td>
                                            <td class="table__cell">
                                                <StatusBadge status=task.status />
                                            </td>
                                            <td class="table__cell">{location}</td>
                                            <td class="table__cell">
                                                <Show when=move || pending>
                                                    <Button
                                                        size="sm"
                                                        on_click=Callback::new(move |_| complete(id))
                                                        disabled=Signal::derive(move || tasks.is_loading())
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
            </Show>
        </PageFrame>
    }
}
