pub mod a001_staff;
pub mod a002_room_booking;
pub mod a003_maintenance;
pub mod a004_requirement;
pub mod a005_order;
pub mod a006_menu_item;
pub mod a007_event;
