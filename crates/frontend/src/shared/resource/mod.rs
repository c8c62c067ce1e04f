//! Resource list controller shared by every page: view state, mutation
//! dispatch and the reactive store tying them to signals.

pub mod dispatcher;
pub mod store;
pub mod view_state;

pub use dispatcher::{ActionMessages, MutationOutcome, Reconcile};
pub use store::ResourceStore;
pub use view_state::{Banner, BannerKind, ListState, LoadTicket, Phase};
