//! Tab titles by key. Unknown keys get an empty title.

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_staff" => "Staff Management",
        "a001_employee_list" => "Employee List",
        "a002_room_booking" => "Room Booking",
        "a003_maintenance" => "Maintenance",
        "a004_requirement" => "Add Requirement",
        "a006_restaurant" => "Restaurant",
        "a007_event" => "Today's Events",
        "sys_login" => "Login",
        _ => "",
    }
}
