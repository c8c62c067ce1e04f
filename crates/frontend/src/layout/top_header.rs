//! Top bar: sidebar toggle, application title and the signed-in user.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();
    let user_label = move || {
        auth.session()
            .map(|s| match s.job_title {
                Some(title) => format!("{} ({})", s.user_id, title),
                None => s.user_id,
            })
            .unwrap_or_else(|| "Guest".to_string())
    };
    let sign_out = move |_| {
        auth.sign_out();
        ctx.open_tab("sys_login", tab_label_for_key("sys_login"));
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("sidebar")}
                </button>
                <span class="top-header__title">"Hotel Management"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("staff")}
                    <span>{user_label}</span>
                </div>
                <Show when=move || auth.is_authenticated()>
                    <button class="top-header__icon-btn" on:click=sign_out title="Sign out">
                        {icon("log-out")}
                    </button>
                </Show>
            </div>
        </div>
    }
}
