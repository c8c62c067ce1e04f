use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Keeps a tab's content mounted and hides it while another tab is active.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = tab.key.clone();
    let key_for_check = key.clone();
    let is_active = move || tabs_store.is_active(&key_for_check);

    log::debug!("TabPage created for '{}'", key);
    let key_for_cleanup = key.clone();
    on_cleanup(move || log::debug!("TabPage destroyed for '{}'", key_for_cleanup));

    let content = render_tab_content(&key);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=key
        >
            {content}
        </div>
    }
}
