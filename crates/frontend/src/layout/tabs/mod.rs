//! Tab management: the `TabPage` wrapper, the key → view registry and the
//! key → title table.

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
