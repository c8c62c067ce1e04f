pub mod message_banner;
pub mod page_header;
pub mod table;
pub mod ui;

pub use message_banner::{EmptyState, ErrorBox, LoadingRow, MessageBanner};
pub use page_header::PageHeader;
