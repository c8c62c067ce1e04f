pub mod state;

use self::state::create_state;
use crate::domain::a001_staff::ui::details::model;
use crate::shared::components::table::{format_money_text, SortableHeaderCell};
use crate::shared::components::{ErrorBox, LoadingRow, PageHeader};
use crate::shared::date_utils::display_date;
use crate::shared::fetcher::use_fetcher;
use crate::shared::list_utils::{derive_view, ListQuery, SearchInput, Searchable, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::ResourceStore;
use contracts::domain::a001_staff::aggregate::Employee;
use leptos::prelude::*;

impl Searchable for Employee {
    /// Every column the server sent, shown or not.
    fn search_fields(&self) -> Vec<String> {
        self.field_values()
    }
}

impl Sortable for Employee {
    fn get_field_value(&self, field: &str) -> Option<String> {
        self.field(field)
    }
}

/// Loads the employee list into `store`.
pub fn load_employees(store: ResourceStore<Employee>) {
    let fetcher = use_fetcher();
    store.load(
        async move { model::fetch_employees(&fetcher).await },
        model::load_messages(),
    );
}

/// Searchable, sortable employee table over a shared store.
#[component]
pub fn EmployeeTable(store: ResourceStore<Employee>, query: RwSignal<ListQuery>) -> impl IntoView {
    let rows = move || store.state().with(|s| query.with(|q| derive_view(&s.items, q)));
    let has_search = move || query.with(|q| !q.search.is_empty());

    view! {
        <div class="table-container">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <SortableHeaderCell label="Name" field="username" query=query />
                        <SortableHeaderCell label="Job Title" field="job_title" query=query />
                        <SortableHeaderCell label="Phone No" field="phone_no" query=query />
                        <SortableHeaderCell label="Salary" field="salary" query=query align="right" />
                        <SortableHeaderCell label="Nationality" field="nationality" query=query />
                        <SortableHeaderCell label="Date of Birth" field="DOB" query=query />
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows();
                        if rows.is_empty() {
                            let text = if has_search() {
                                "No employees match your search"
                            } else {
                                "No employees available"
                            };
                            return view! {
                                <tr>
                                    <td class="table__cell table__cell--empty" colspan="6">{text}</td>
                                </tr>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|e| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{e.username}</td>
                                        <td class="table__cell">{e.job_title}</td>
                                        <td class="table__cell">{e.phone_no}</td>
                                        <td class="table__cell table__cell--right">{format_money_text(&e.salary)}</td>
                                        <td class="table__cell">{e.nationality}</td>
                                        <td class="table__cell">{display_date(Some(&e.dob))}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let store = ResourceStore::<Employee>::new();
    let query = create_state();
    load_employees(store);

    view! {
        <PageFrame page_id="a001_employee_list--list" category=PAGE_CAT_LIST>
            <PageHeader title="Employee List" busy=Signal::derive(move || store.is_loading())>
                <SearchInput
                    value=Signal::derive(move || query.with(|q| q.search.clone()))
                    on_change=Callback::new(move |v: String| query.update(|q| q.search = v))
                    placeholder="Search employees..."
                />
            </PageHeader>

            <Show when=move || store.is_loading() && !store.is_loaded()>
                <LoadingRow />
            </Show>
            <ErrorBox error=Signal::derive(move || store.error()) />

            <EmployeeTable store=store query=query />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn staff() -> Vec<Employee> {
        serde_json::from_value(json!([
            { "userid": "E1", "username": "Asha", "job_title": "Chef", "phone_no": "9876543210",
              "salary": "42000", "nationality": "Indian", "DOB": "1990-07-21", "bank_name": "Canara" },
            { "userid": "E2", "username": "Bruno", "job_title": "Waiter", "phone_no": 9123456780u64,
              "salary": 9000, "nationality": "Italian", "DOB": "1985-02-03", "bank_name": "Unicredit" },
            { "userid": "E3", "username": "Chen", "job_title": "Cleaner", "phone_no": "9000000001",
              "salary": "15500", "nationality": "Chinese", "DOB": "2001-11-30" }
        ]))
        .unwrap()
    }

    fn ids(rows: &[Employee]) -> Vec<&str> {
        rows.iter().map(|e| e.userid.as_str()).collect()
    }

    #[test]
    fn search_reaches_columns_the_table_does_not_show() {
        let mut query = ListQuery::new();
        query.search = "unicred".into();
        assert_eq!(ids(&derive_view(&staff(), &query)), vec!["E2"]);

        query.search = "CHEF".into();
        assert_eq!(ids(&derive_view(&staff(), &query)), vec!["E1"]);
    }

    #[test]
    fn salary_sorts_as_a_number() {
        let mut query = ListQuery::new();
        query.toggle_sort("salary");
        assert_eq!(ids(&derive_view(&staff(), &query)), vec!["E2", "E3", "E1"]);
        query.toggle_sort("salary");
        assert_eq!(ids(&derive_view(&staff(), &query)), vec!["E1", "E3", "E2"]);
    }

    #[test]
    fn dob_sorts_by_date() {
        let mut query = ListQuery::new();
        query.toggle_sort("DOB");
        assert_eq!(ids(&derive_view(&staff(), &query)), vec!["E2", "E1", "E3"]);
    }

    #[test]
    fn named_columns_sort_by_text() {
        let mut query = ListQuery::new();
        query.toggle_sort("nationality");
        assert_eq!(ids(&derive_view(&staff(), &query)), vec!["E3", "E1", "E2"]);
        query.toggle_sort("username");
        assert_eq!(ids(&derive_view(&staff(), &query)), vec!["E1", "E2", "E3"]);
    }
}
