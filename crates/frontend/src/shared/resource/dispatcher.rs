//! Mutation dispatch: how an accepted server answer is folded back into the
//! local collection, and which texts the page shows for each outcome.

use super::view_state::{BannerKind, ListState, Phase};
use crate::shared::action_error::ActionError;
use contracts::domain::common::ResourceItem;

/// Banner texts of one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionMessages {
    /// `None` keeps a success silent.
    pub success: Option<String>,
    /// Shown when the server answered but did not accept.
    pub rejected: String,
    /// Shown when the request itself broke.
    pub failed: String,
}

impl ActionMessages {
    /// One text for every kind of failure. An empty `success` is silent.
    pub fn new(success: impl Into<String>, failure: impl Into<String>) -> Self {
        let success = success.into();
        let failure = failure.into();
        Self {
            success: (!success.is_empty()).then_some(success),
            rejected: failure.clone(),
            failed: failure,
        }
    }

    /// Texts for a load: no success banner, separate failure texts.
    pub fn load(rejected: impl Into<String>, failed: impl Into<String>) -> Self {
        Self {
            success: None,
            rejected: rejected.into(),
            failed: failed.into(),
        }
    }

    pub fn rejected(mut self, text: impl Into<String>) -> Self {
        self.rejected = text.into();
        self
    }

    pub fn failure_text(&self, err: &ActionError) -> String {
        err.banner_text(&self.rejected, &self.failed)
    }
}

/// Local change implied by an accepted mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Reconcile<T: ResourceItem> {
    Append(T),
    /// Replace the item with the same id, or append it.
    Upsert(T),
    PatchStatus {
        id: T::Id,
        status: String,
    },
    PatchField {
        id: T::Id,
        field: String,
        value: String,
    },
    Remove(T::Id),
    ReplaceAll(Vec<T>),
    Nothing,
}

impl<T: ResourceItem> Reconcile<T> {
    /// Applies the change and returns how many items it touched.
    pub fn apply(self, items: &mut Vec<T>) -> usize {
        match self {
            Reconcile::Append(item) => {
                items.push(item);
                1
            }
            Reconcile::Upsert(item) => {
                let id = item.id();
                match items.iter_mut().find(|it| it.id() == id) {
                    Some(existing) => *existing = item,
                    None => items.push(item),
                }
                1
            }
            Reconcile::PatchStatus { id, status } => match items.iter_mut().find(|it| it.id() == id) {
                Some(item) => {
                    item.set_status(&status);
                    1
                }
                None => {
                    log::debug!("status patch for {:?} matched nothing", id);
                    0
                }
            },
            Reconcile::PatchField { id, field, value } => items
                .iter_mut()
                .find(|it| it.id() == id)
                .map(|item| usize::from(item.set_field(&field, &value)))
                .unwrap_or(0),
            Reconcile::Remove(id) => match items.iter().position(|it| it.id() == id) {
                Some(index) => {
                    items.remove(index);
                    1
                }
                None => 0,
            },
            Reconcile::ReplaceAll(all) => {
                let count = all.len();
                *items = all;
                count
            }
            Reconcile::Nothing => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationOutcome {
    pub succeeded: bool,
    /// Banner raised by the outcome, if any.
    pub banner: Option<u64>,
}

impl<T: ResourceItem> ListState<T> {
    pub fn begin_mutation(&mut self) {
        self.begin_request();
    }

    /// Folds a mutation result into the state. On failure the collection is
    /// left exactly as it was.
    pub fn finish_mutation(
        &mut self,
        result: Result<Reconcile<T>, ActionError>,
        messages: &ActionMessages,
    ) -> MutationOutcome {
        self.end_request();
        match result {
            Ok(reconcile) => {
                reconcile.apply(&mut self.items);
                self.phase = Phase::Success;
                let banner = messages
                    .success
                    .clone()
                    .map(|text| self.show_banner(text, BannerKind::Success));
                MutationOutcome {
                    succeeded: true,
                    banner,
                }
            }
            Err(err) => {
                log::warn!("action failed: {}", err);
                self.phase = Phase::Failure;
                let banner = self.show_banner(messages.failure_text(&err), BannerKind::Error);
                MutationOutcome {
                    succeeded: false,
                    banner: Some(banner),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        status: String,
        note: String,
    }

    impl ResourceItem for Row {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }

        fn status(&self) -> Option<&str> {
            Some(&self.status)
        }

        fn set_status(&mut self, status: &str) {
            self.status = status.to_string();
        }

        fn set_field(&mut self, field: &str, value: &str) -> bool {
            if field == "note" {
                self.note = value.to_string();
                true
            } else {
                false
            }
        }
    }

    fn row(id: u32) -> Row {
        Row {
            id,
            status: "pending".into(),
            note: String::new(),
        }
    }

    fn loaded(rows: Vec<Row>) -> ListState<Row> {
        let mut state = ListState::new();
        let ticket = state.begin_load();
        state.finish_load(ticket, Ok(rows), &ActionMessages::new("", "x"));
        state
    }

    fn messages() -> ActionMessages {
        ActionMessages::new("Done!", "Failed to save.")
    }

    #[test]
    fn remove_drops_exactly_one() {
        let mut state = loaded(vec![row(1), row(2), row(3)]);
        state.begin_mutation();
        let outcome = state.finish_mutation(Ok(Reconcile::Remove(2)), &messages());
        assert!(outcome.succeeded);
        let ids: Vec<u32> = state.items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn patch_status_changes_only_the_target() {
        let mut state = loaded(vec![row(1), row(2)]);
        state.begin_mutation();
        state.finish_mutation(
            Ok(Reconcile::PatchStatus {
                id: 2,
                status: "completed".into(),
            }),
            &messages(),
        );
        assert_eq!(state.items[0], row(1));
        assert_eq!(state.items[1].status, "completed");
        assert_eq!(state.items[1].note, "");
    }

    #[test]
    fn patch_field_and_upsert() {
        let mut items = vec![row(1)];
        let touched = Reconcile::PatchField {
            id: 1,
            field: "note".into(),
            value: "late".into(),
        }
        .apply(&mut items);
        assert_eq!(touched, 1);
        assert_eq!(items[0].note, "late");

        let mut replaced = row(1);
        replaced.status = "done".into();
        Reconcile::Upsert(replaced.clone()).apply(&mut items);
        Reconcile::Upsert(row(9)).apply(&mut items);
        assert_eq!(items, vec![replaced, row(9)]);
    }

    #[test]
    fn failed_mutation_leaves_collection_untouched() {
        let mut state = loaded(vec![row(1), row(2)]);
        let before = state.items.clone();
        state.begin_mutation();
        let outcome = state.finish_mutation(
            Err(ActionError::Rejected { reason: None }),
            &messages(),
        );
        assert!(!outcome.succeeded);
        assert_eq!(state.items, before);
        assert_eq!(state.phase, Phase::Failure);
        let banner = state.banner.clone().unwrap();
        assert_eq!(banner.text, "Failed to save.");
        assert_eq!(banner.kind, BannerKind::Error);
    }

    #[test]
    fn success_banner_is_optional() {
        let mut state = loaded(vec![]);
        state.begin_mutation();
        let outcome = state.finish_mutation(Ok(Reconcile::Append(row(4))), &messages());
        assert_eq!(outcome.banner, Some(1));
        assert_eq!(state.banner.as_ref().map(|b| b.text.as_str()), Some("Done!"));

        state.clear_banner();
        state.begin_mutation();
        let silent = ActionMessages::new("", "Failed");
        let outcome = state.finish_mutation(Ok(Reconcile::Nothing), &silent);
        assert_eq!(outcome.banner, None);
        assert!(state.banner.is_none());
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn mutation_keeps_the_load_error_visible() {
        let mut state = loaded(vec![row(1)]);
        let ticket = state.begin_load();
        state.finish_load(ticket, Err(ActionError::Network("down".into())), &messages());
        let load_error = state.error.clone();
        assert!(load_error.is_some());

        state.begin_mutation();
        assert_eq!(state.error, load_error);
        state.finish_mutation(Ok(Reconcile::Remove(1)), &messages());
        assert_eq!(state.error, load_error);
        assert!(state.items.is_empty());
    }

    #[test]
    fn load_and_mutation_share_the_busy_flag() {
        let mut state = loaded(vec![]);
        let ticket = state.begin_load();
        state.begin_mutation();
        state.finish_load(ticket, Ok(vec![row(1)]), &messages());
        assert!(state.is_loading());
        state.finish_mutation(Ok(Reconcile::Nothing), &messages());
        assert!(!state.is_loading());
    }
}
