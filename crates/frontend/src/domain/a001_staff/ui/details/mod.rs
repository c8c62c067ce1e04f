pub mod model;
pub mod view_model;

use self::view_model::{StaffTab, StaffViewModel};
use super::list::{load_employees, state::create_state, EmployeeTable};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::{Button, Input};
use crate::shared::components::{ErrorBox, MessageBanner, PageHeader};
use crate::shared::fetcher::use_fetcher;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use crate::shared::resource::ResourceStore;
use leptos::prelude::*;

/// (wire name, label, input type)
type FieldSpec = (&'static str, &'static str, &'static str);

const SECTIONS: [(&str, &[FieldSpec]); 5] = [
    (
        "Personal Information",
        &[
            ("username", "Name", "text"),
            ("userid", "User ID", "text"),
            ("DOB", "Date of Birth", "date"),
            ("age", "Age", "number"),
            ("nationality", "Nationality", "text"),
            ("address", "Address", "text"),
        ],
    ),
    (
        "Contact Information",
        &[
            ("phone_no", "Phone No", "tel"),
            ("alter_phone_no", "Alternate Phone No", "tel"),
        ],
    ),
    (
        "Employment Details",
        &[
            ("job_title", "Job Title", "text"),
            ("job_type", "Job Type", "text"),
            ("salary", "Salary", "number"),
            ("join_date", "Join Date", "date"),
            ("contract_start", "Contract Start", "date"),
            ("contract_end", "Contract End", "date"),
        ],
    ),
    (
        "Identification",
        &[("id_type", "ID Type", "text"), ("id_number", "ID Number", "text")],
    ),
    (
        "Bank Details",
        &[
            ("bank_name", "Bank Name", "text"),
            ("account_no", "Account No", "text"),
            ("isfe", "ISFE", "text"),
        ],
    ),
];

#[component]
#[allow(non_snake_case)]
pub fn StaffManagement() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let store = ResourceStore::new();
    let vm = StaffViewModel::new(use_fetcher(), store);
    let query = create_state();
    load_employees(store);

    view! {
        <PageFrame page_id="a001_staff--form" category=PAGE_CAT_FORM>
            <PageHeader title="Staff Management" busy=Signal::derive(move || store.is_loading())>
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| tabs_store.open_tab("a001_employee_list", "Employee List"))
                >
                    "View Employee List"
                </Button>
            </PageHeader>

            <MessageBanner
                banner=Signal::derive(move || store.banner())
                on_dismiss=Callback::new(move |_| store.dismiss_banner())
            />

            <div class="form-tabs">
                {StaffTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="form-tabs__item"
                                class:form-tabs__item--active=move || vm.active_tab.get() == tab
                                on:click=move |_| vm.select_tab(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="form-card">
                {move || match vm.active_tab.get() {
                    StaffTab::Add => view! { <AddStaffForm vm=vm /> }.into_any(),
                    StaffTab::Modify => view! { <ModifyStaffForm vm=vm /> }.into_any(),
                    StaffTab::Delete => view! { <DeleteStaffForm vm=vm /> }.into_any(),
                }}
            </div>

            <ErrorBox error=Signal::derive(move || store.error()) />
            <EmployeeTable store=store query=query />
        </PageFrame>
    }
}

#[component]
fn AddStaffForm(vm: StaffViewModel) -> impl IntoView {
    let busy = move || vm.store.is_loading();

    view! {
        <form on:submit=move |ev| {
            ev.prevent_default();
            vm.add_command();
        }>
            {SECTIONS
                .into_iter()
                .map(|(title, fields)| {
                    view! {
                        <fieldset class="form__section">
                            <legend class="form__section-title">{title}</legend>
                            <div class="form__grid">
                                {fields
                                    .iter()
                                    .map(|&(name, label, input_type)| {
                                        view! {
                                            <Input
                                                id=format!("staff-{name}")
                                                label=label
                                                input_type=input_type
                                                required=true
                                                value=Signal::derive(move || {
                                                    vm.new_staff.with(|s| s.get(name).to_string())
                                                })
                                                on_input=Callback::new(move |v: String| vm.set_staff_field(name, v))
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </fieldset>
                    }
                })
                .collect_view()}
            <div class="form__actions">
                <Button button_type="submit" disabled=Signal::derive(busy)>
                    {move || if busy() { "Adding..." } else { "Add Staff Member" }}
                </Button>
            </div>
        </form>
    }
}

#[component]
fn ModifyStaffForm(vm: StaffViewModel) -> impl IntoView {
    let busy = move || vm.store.is_loading();

    view! {
        <form on:submit=move |ev| {
            ev.prevent_default();
            vm.modify_command();
        }>
            <div class="form__grid">
                <Input
                    id="modify-userid"
                    label="User ID"
                    required=true
                    value=Signal::derive(move || vm.modification.with(|m| m.userid.clone()))
                    on_input=Callback::new(move |v: String| vm.modification.update(|m| m.userid = v))
                />
                <Input
                    id="modify-field"
                    label="Field to Modify"
                    placeholder="e.g. job_title"
                    required=true
                    value=Signal::derive(move || vm.modification.with(|m| m.what_to_modify.clone()))
                    on_input=Callback::new(move |v: String| vm.modification.update(|m| m.what_to_modify = v))
                />
                <Input
                    id="modify-value"
                    label="New Value"
                    required=true
                    value=Signal::derive(move || vm.modification.with(|m| m.modification_value.clone()))
                    on_input=Callback::new(move |v: String| {
                        vm.modification.update(|m| m.modification_value = v)
                    })
                />
            </div>
            <div class="form__actions">
                <Button button_type="submit" disabled=Signal::derive(busy)>
                    {move || if busy() { "Modifying..." } else { "Modify Staff Member" }}
                </Button>
            </div>
        </form>
    }
}

#[component]
fn DeleteStaffForm(vm: StaffViewModel) -> impl IntoView {
    let busy = move || vm.store.is_loading();
    let armed = move || vm.delete_confirm.with(|c| c.is_armed());

    view! {
        <form on:submit=move |ev| {
            ev.prevent_default();
            vm.delete_command();
        }>
            <Input
                id="delete-userid"
                label="User ID"
                required=true
                value=Signal::derive(move || vm.delete_userid.get())
                on_input=Callback::new(move |v: String| {
                    vm.delete_userid.set(v);
                    vm.cancel_delete();
                })
            />
            <Show when=armed>
                <div class="banner banner--error" role="alert">
                    "This will permanently remove the staff member. Press again to confirm."
                </div>
            </Show>
            <div class="form__actions">
                <Button button_type="submit" variant="danger" disabled=Signal::derive(busy)>
                    {move || {
                        if busy() {
                            "Deleting..."
                        } else if armed() {
                            "Confirm Delete"
                        } else {
                            "Delete Staff Member"
                        }
                    }}
                </Button>
                <Show when=armed>
                    <Button variant="secondary" on_click=Callback::new(move |_| vm.cancel_delete())>
                        "Cancel"
                    </Button>
                </Show>
            </div>
        </form>
    }
}
