use super::dispatcher::{ActionMessages, Reconcile};
use super::view_state::{Banner, ListState};
use crate::shared::action_error::ActionError;
use crate::shared::api_utils::BANNER_DISMISS_MS;
use contracts::domain::common::ResourceItem;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;

/// Reactive handle over one [`ListState`]. Copy it freely into closures.
pub struct ResourceStore<T: Send + Sync + 'static> {
    state: RwSignal<ListState<T>>,
}

impl<T: Send + Sync + 'static> Clone for ResourceStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ResourceStore<T> {}

impl<T> ResourceStore<T>
where
    T: ResourceItem + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ListState::new()),
        }
    }

    pub fn state(&self) -> RwSignal<ListState<T>> {
        self.state
    }

    pub fn items(&self) -> Vec<T> {
        self.state.with(|s| s.items.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn is_loaded(&self) -> bool {
        self.state.with(|s| s.is_loaded)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    pub fn banner(&self) -> Option<Banner> {
        self.state.with(|s| s.banner.clone())
    }

    /// Starts a load. A later call supersedes any load still in flight.
    pub fn load<F>(&self, request: F, messages: ActionMessages)
    where
        F: Future<Output = Result<Vec<T>, ActionError>> + 'static,
    {
        let state = self.state;
        let Some(ticket) = state.try_update(|s| s.begin_load()) else {
            return;
        };
        spawn_local(async move {
            let result = request.await;
            state.try_update(|s| s.finish_load(ticket, result, &messages));
        });
    }

    pub fn mutate<F>(&self, request: F, messages: ActionMessages)
    where
        F: Future<Output = Result<Reconcile<T>, ActionError>> + 'static,
    {
        self.mutate_then(request, messages, |_| {});
    }

    /// Runs a mutation, then calls `on_done` with whether it succeeded.
    pub fn mutate_then<F, K>(&self, request: F, messages: ActionMessages, on_done: K)
    where
        F: Future<Output = Result<Reconcile<T>, ActionError>> + 'static,
        K: FnOnce(bool) + 'static,
    {
        let state = self.state;
        if state.try_update(|s| s.begin_mutation()).is_none() {
            return;
        }
        spawn_local(async move {
            let result = request.await;
            let Some(outcome) = state.try_update(|s| s.finish_mutation(result, &messages)) else {
                return;
            };
            if let Some(id) = outcome.banner {
                schedule_dismiss(state, id);
            }
            on_done(outcome.succeeded);
        });
    }

    /// Shows a client-side refusal without touching the network.
    pub fn reject(&self, err: ActionError, messages: &ActionMessages) {
        if let Some(id) = self.state.try_update(|s| s.reject(&err, messages)) {
            schedule_dismiss(self.state, id);
        }
    }

    pub fn dismiss_banner(&self) {
        self.state.update(|s| s.clear_banner());
    }
}

impl<T> Default for ResourceStore<T>
where
    T: ResourceItem + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

fn schedule_dismiss<T: Send + Sync + 'static>(state: RwSignal<ListState<T>>, id: u64) {
    spawn_local(async move {
        TimeoutFuture::new(BANNER_DISMISS_MS).await;
        // The page may be gone by now.
        state.try_update(|s| s.dismiss_banner(id));
    });
}
