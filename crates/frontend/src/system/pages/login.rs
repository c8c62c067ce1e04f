use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::LOGIN_REDIRECT_MS;
use crate::shared::components::ui::{Button, Checkbox, Input};
use crate::shared::components::MessageBanner;
use crate::shared::fetcher::use_fetcher;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::resource::{Banner, BannerKind};
use crate::system::auth::{api, context::use_auth};
use contracts::system::auth::{LoginFieldErrors, LoginForm};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn LoginPage() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let auth = use_auth();
    let fetcher = StoredValue::new(use_fetcher());
    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(LoginFieldErrors::default());
    let show_password = RwSignal::new(false);
    let is_loading = RwSignal::new(false);
    let message = RwSignal::new(None::<Banner>);

    let show = move |text: String, kind: BannerKind| {
        message.set(Some(Banner { id: 0, text, kind }));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let typed = form.get_untracked();
        let found = typed.validate();
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }

        is_loading.set(true);
        message.set(None);
        let fetcher = fetcher.get_value();
        spawn_local(async move {
            match api::login(&fetcher, &typed).await {
                Ok(session) => {
                    show(session.welcome(), BannerKind::Success);
                    auth.sign_in(session);
                    is_loading.set(false);
                    TimeoutFuture::new(LOGIN_REDIRECT_MS).await;
                    tabs_store.open_tab("a007_event", "Today's Events");
                }
                Err(err) => {
                    log::error!("login failed: {}", err);
                    show(api::login_messages().failure_text(&err), BannerKind::Error);
                    is_loading.set(false);
                }
            }
        });
    };

    view! {
        <PageFrame page_id="sys_login--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <div class="login-box">
                    <h2>"Sign in to your account"</h2>

                    <MessageBanner
                        banner=Signal::derive(move || message.get())
                        on_dismiss=Callback::new(move |_| message.set(None))
                    />

                    <form on:submit=on_submit>
                        <Input
                            id="username"
                            label="Username"
                            placeholder="Enter your username"
                            required=true
                            value=Signal::derive(move || form.with(|f| f.username.clone()))
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| f.username = v);
                                errors.update(|e| e.username = None);
                            })
                            error=Signal::derive(move || errors.with(|e| e.username.clone()))
                        />
                        <Input
                            id="password"
                            label="Password"
                            placeholder="Enter your password"
                            input_type=Signal::derive(move || {
                                if show_password.get() { "text" } else { "password" }.to_string()
                            })
                            required=true
                            value=Signal::derive(move || form.with(|f| f.password.clone()))
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| f.password = v);
                                errors.update(|e| e.password = None);
                            })
                            error=Signal::derive(move || errors.with(|e| e.password.clone()))
                        />
                        <Checkbox
                            id="show-password"
                            label="Show password"
                            checked=show_password
                            on_change=Callback::new(move |on: bool| show_password.set(on))
                        />

                        <div class="form__actions">
                            <Button button_type="submit" disabled=Signal::derive(move || is_loading.get())>
                                {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                            </Button>
                        </div>
                    </form>

                    {move || {
                        auth.job_title()
                            .map(|title| {
                                view! {
                                    <p class="login-info">"Job Title: " <strong>{title}</strong></p>
                                }
                            })
                    }}
                </div>
            </div>
        </PageFrame>
    }
}
