use crate::layout::tabs::tab_label_for_key;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Page opened when the URL names none.
pub const START_TAB: &str = "sys_login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Open tabs in opening order plus the active key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSet {
    pub tabs: Vec<Tab>,
    pub active: Option<String>,
}

impl TabSet {
    pub fn contains(&self, key: &str) -> bool {
        self.tabs.iter().any(|t| t.key == key)
    }

    /// Opens `key` unless already open, then activates it. Returns whether
    /// a new tab was added.
    pub fn open(&mut self, key: &str, title: &str) -> bool {
        let added = !self.contains(key);
        if added {
            self.tabs.push(Tab {
                key: key.to_string(),
                title: title.to_string(),
            });
        }
        self.active = Some(key.to_string());
        added
    }

    /// Closing the active tab activates the last remaining one.
    pub fn close(&mut self, key: &str) {
        self.tabs.retain(|t| t.key != key);
        if self.active.as_deref() == Some(key) {
            self.active = self.tabs.last().map(|t| t.key.clone());
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.as_deref() == Some(key)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub tabs: RwSignal<TabSet>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            tabs: RwSignal::new(TabSet::default()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn opened(&self) -> Vec<Tab> {
        self.tabs.with(|t| t.tabs.clone())
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.tabs.with(|t| t.is_active(key))
    }

    /// Restores the tab named by `?active=` and keeps the query string in
    /// step with the active tab afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        let key = params
            .get("active")
            .cloned()
            .unwrap_or_else(|| START_TAB.to_string());
        let title = match tab_label_for_key(&key) {
            "" => key.clone(),
            label => label.to_string(),
        };
        self.open_tab(&key, &title);

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.tabs.with(|t| t.active.clone()) else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(history) = window().and_then(|w| w.history().ok()) {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let added = self.tabs.try_update(|t| t.open(key, title)).unwrap_or(false);
        log::debug!("open_tab '{}' (new: {})", key, added);
    }

    pub fn activate_tab(&self, key: &str) {
        self.tabs.update(|t| {
            if t.contains(key) {
                t.active = Some(key.to_string());
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab '{}'", key);
        self.tabs.update(|t| t.close(key));
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
