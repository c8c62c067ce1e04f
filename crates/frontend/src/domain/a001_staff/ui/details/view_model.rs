use super::model::{self, DeleteConfirm, DeleteStep};
use crate::shared::fetcher::Fetcher;
use crate::shared::resource::ResourceStore;
use contracts::domain::a001_staff::aggregate::{Employee, NewStaff, StaffModification};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffTab {
    Add,
    Modify,
    Delete,
}

impl StaffTab {
    pub const ALL: [StaffTab; 3] = [StaffTab::Add, StaffTab::Modify, StaffTab::Delete];

    pub fn label(&self) -> &'static str {
        match self {
            StaffTab::Add => "Add Staff",
            StaffTab::Modify => "Modify Staff",
            StaffTab::Delete => "Delete Staff",
        }
    }
}

/// Form state of the staff management page. All three forms share one
/// employee store with the embedded table.
#[derive(Clone, Copy)]
pub struct StaffViewModel {
    pub store: ResourceStore<Employee>,
    pub active_tab: RwSignal<StaffTab>,
    pub new_staff: RwSignal<NewStaff>,
    pub modification: RwSignal<StaffModification>,
    pub delete_userid: RwSignal<String>,
    pub delete_confirm: RwSignal<DeleteConfirm>,
    fetcher: StoredValue<Fetcher>,
}

impl StaffViewModel {
    pub fn new(fetcher: Fetcher, store: ResourceStore<Employee>) -> Self {
        Self {
            store,
            active_tab: RwSignal::new(StaffTab::Add),
            new_staff: RwSignal::new(NewStaff::default()),
            modification: RwSignal::new(StaffModification::default()),
            delete_userid: RwSignal::new(String::new()),
            delete_confirm: RwSignal::new(DeleteConfirm::default()),
            fetcher: StoredValue::new(fetcher),
        }
    }

    pub fn select_tab(&self, tab: StaffTab) {
        self.active_tab.set(tab);
        self.delete_confirm.update(|c| c.cancel());
    }

    pub fn set_staff_field(&self, name: &'static str, value: String) {
        self.new_staff.update(|s| {
            s.set(name, value);
        });
    }

    // ========================================================================
    // Commands
    // ========================================================================

    pub fn add_command(&self) {
        let staff = self.new_staff.get_untracked();
        let fetcher = self.fetcher.get_value();
        let form = self.new_staff;
        self.store.mutate_then(
            async move { model::add_staff(&fetcher, staff).await },
            model::add_messages(),
            move |ok| {
                if ok {
                    form.set(NewStaff::default());
                }
            },
        );
    }

    pub fn modify_command(&self) {
        let modification = self.modification.get_untracked();
        let fetcher = self.fetcher.get_value();
        let form = self.modification;
        self.store.mutate_then(
            async move { model::modify_staff(&fetcher, modification).await },
            model::modify_messages(),
            move |ok| {
                if ok {
                    form.set(StaffModification::default());
                }
            },
        );
    }

    /// First press arms the confirmation, the second one deletes.
    pub fn delete_command(&self) {
        let userid = self.delete_userid.get_untracked();
        let Some(step) = self.delete_confirm.try_update(|c| c.submit(&userid)) else {
            return;
        };
        match step {
            DeleteStep::AskConfirmation => {}
            DeleteStep::Invalid(err) => self.store.reject(err, &model::delete_messages()),
            DeleteStep::Execute(request) => {
                let fetcher = self.fetcher.get_value();
                let form = self.delete_userid;
                self.store.mutate_then(
                    async move { model::delete_staff(&fetcher, request).await },
                    model::delete_messages(),
                    move |ok| {
                        if ok {
                            form.set(String::new());
                        }
                    },
                );
            }
        }
    }

    pub fn cancel_delete(&self) {
        self.delete_confirm.update(|c| c.cancel());
    }
}
