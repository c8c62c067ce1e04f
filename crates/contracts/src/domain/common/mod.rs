//! Common types and traits for all hotel resources

use std::fmt::Debug;

/// A record that lives in a client-side resource collection.
///
/// The collection reconciles server confirmations against records through
/// this trait: lookups go by [`id`](ResourceItem::id), status transitions by
/// [`set_status`](ResourceItem::set_status) and single-field edits by
/// [`set_field`](ResourceItem::set_field).
pub trait ResourceItem: Clone {
    /// Identifier type; unique within one collection.
    type Id: Clone + PartialEq + Debug;

    fn id(&self) -> Self::Id;

    /// Lifecycle status, for resources that have one.
    fn status(&self) -> Option<&str> {
        None
    }

    fn set_status(&mut self, _status: &str) {}

    /// Applies a single-field edit by wire name. Returns `false` when the
    /// field is unknown or the value does not fit it.
    fn set_field(&mut self, _field: &str, _value: &str) -> bool {
        false
    }
}
