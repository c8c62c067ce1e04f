use super::model;
use crate::shared::api_utils::REQUIREMENT_REDIRECT_MS;
use crate::shared::fetcher::Fetcher;
use crate::shared::resource::ResourceStore;
use contracts::domain::a004_requirement::aggregate::{NewRequirement, Requirement};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct AddRequirementViewModel {
    pub form: RwSignal<NewRequirement>,
    pub store: ResourceStore<Requirement>,
    fetcher: StoredValue<Fetcher>,
}

impl AddRequirementViewModel {
    pub fn new(fetcher: Fetcher) -> Self {
        Self {
            form: RwSignal::new(NewRequirement::default()),
            store: ResourceStore::new(),
            fetcher: StoredValue::new(fetcher),
        }
    }

    /// Submits the form and, once the server files it, calls `on_filed`
    /// after the redirect delay.
    pub fn save_command(&self, on_filed: impl FnOnce() + 'static) {
        let requirement = self.form.get_untracked();
        let fetcher = self.fetcher.get_value();
        let form = self.form;
        self.store.mutate_then(
            async move { model::add_requirement(&fetcher, requirement).await },
            model::add_messages(),
            move |ok| {
                if !ok {
                    return;
                }
                form.set(NewRequirement::default());
                spawn_local(async move {
                    TimeoutFuture::new(REQUIREMENT_REDIRECT_MS).await;
                    on_filed();
                });
            },
        );
    }
}
