//! Tab content registry: the one place mapping a tab key to its page.

use crate::domain::a001_staff::ui::details::StaffManagement;
use crate::domain::a001_staff::ui::list::EmployeeList;
use crate::domain::a002_room_booking::ui::details::RoomBookingPage;
use crate::domain::a003_maintenance::ui::list::MaintenanceList;
use crate::domain::a004_requirement::ui::details::AddRequirement;
use crate::domain::a006_menu_item::ui::restaurant::RestaurantPage;
use crate::domain::a007_event::ui::list::EventList;
use crate::shared::components::EmptyState;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Every key `render_tab_content` knows, in menu order.
pub const TAB_KEYS: [&str; 8] = [
    "a007_event",
    "a002_room_booking",
    "a006_restaurant",
    "a003_maintenance",
    "a004_requirement",
    "a001_staff",
    "a001_employee_list",
    "sys_login",
];

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a001_staff" => view! { <StaffManagement /> }.into_any(),
        "a001_employee_list" => view! { <EmployeeList /> }.into_any(),
        "a002_room_booking" => view! { <RoomBookingPage /> }.into_any(),
        "a003_maintenance" => view! { <MaintenanceList /> }.into_any(),
        "a004_requirement" => view! { <AddRequirement /> }.into_any(),
        "a006_restaurant" => view! { <RestaurantPage /> }.into_any(),
        "a007_event" => view! { <EventList /> }.into_any(),
        "sys_login" => view! { <LoginPage /> }.into_any(),
        _ => {
            log::warn!("unknown tab key: {}", key);
            view! {
                <EmptyState
                    title="Page not found"
                    hint="The page you are looking for does not exist."
                />
            }
            .into_any()
        }
    }
}
