//! Outcome and load-state displays driven by a page's `ListState`.

use crate::shared::resource::{Banner, BannerKind};
use leptos::prelude::*;
use thaw::{Flex, FlexAlign, FlexGap, Spinner};

/// Transient success/error message with a close button.
#[component]
pub fn MessageBanner(
    #[prop(into)] banner: Signal<Option<Banner>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        banner.get().map(|b| {
            let role = match b.kind {
                BannerKind::Success => "status",
                BannerKind::Error => "alert",
            };
            view! {
                <div class=format!("banner {}", b.kind.css_modifier()) role=role>
                    <span class="banner__text">{b.text}</span>
                    <button
                        class="banner__close"
                        title="Dismiss"
                        on:click=move |_| on_dismiss.run(())
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                </div>
            }
        })
    }
}

/// Load failure shown in place of the table.
#[component]
pub fn ErrorBox(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|e| {
            view! {
                <div class="error-box" role="alert">
                    {crate::shared::icons::icon("alert")}
                    <span>{e}</span>
                </div>
            }
        })
    }
}

#[component]
pub fn LoadingRow(#[prop(optional, into)] text: MaybeProp<String>) -> impl IntoView {
    view! {
        <Flex gap=FlexGap::Small align=FlexAlign::Center class="loading-row">
            <Spinner />
            <span>{move || text.get().unwrap_or_else(|| "Loading...".to_string())}</span>
        </Flex>
    }
}

/// Placeholder for an empty table.
#[component]
pub fn EmptyState(
    #[prop(into)] title: Signal<String>,
    #[prop(optional, into)] hint: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__title">{title}</div>
            {move || hint.get().map(|h| view! { <div class="empty-state__hint">{h}</div> })}
        </div>
    }
}
