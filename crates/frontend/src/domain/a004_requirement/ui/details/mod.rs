pub mod model;
pub mod view_model;

use self::view_model::AddRequirementViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::{Button, Checkbox, Input, Textarea};
use crate::shared::components::{MessageBanner, PageHeader};
use crate::shared::fetcher::use_fetcher;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn AddRequirement() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let vm = AddRequirementViewModel::new(use_fetcher());
    let busy = move || vm.store.is_loading();
    let back = move || tabs_store.open_tab("a003_maintenance", "Maintenance");

    view! {
        <PageFrame page_id="a004_requirement--form" category=PAGE_CAT_FORM>
            <PageHeader
                title="Add Requirement"
                subtitle="Submit a new maintenance requirement"
                busy=Signal::derive(busy)
            />

            <MessageBanner
                banner=Signal::derive(move || vm.store.banner())
                on_dismiss=Callback::new(move |_| vm.store.dismiss_banner())
            />

            <form class="form-card" on:submit=move |ev| {
                ev.prevent_default();
                vm.save_command(back);
            }>
                <Input
                    id="requirement-user"
                    label="User ID"
                    placeholder="Enter your user ID"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.user_id.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.user_id = v))
                />
                <Checkbox
                    id="requirement-customer"
                    label="Raised by a customer"
                    checked=Signal::derive(move || vm.form.with(|f| f.is_customer))
                    on_change=Callback::new(move |on: bool| vm.form.update(|f| f.is_customer = on))
                />
                <Input
                    id="requirement-room"
                    label="Room ID"
                    placeholder="Enter room ID (e.g., R0001)"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.room_id.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.room_id = v))
                />
                <Textarea
                    id="requirement-description"
                    label="Description"
                    placeholder="Describe the maintenance requirement (e.g., AC not working)"
                    required=true
                    rows=4
                    value=Signal::derive(move || vm.form.with(|f| f.description.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.description = v))
                />
                <div class="form__actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| back())>
                        "Cancel"
                    </Button>
                    <Button button_type="submit" disabled=Signal::derive(busy)>
                        {move || if busy() { "Adding..." } else { "Add Requirement" }}
                    </Button>
                </div>
            </form>
        </PageFrame>
    }
}
