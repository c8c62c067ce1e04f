pub mod action_error;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod fetcher;
pub mod icons;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
pub mod resource;

#[cfg(test)]
pub mod testing;
