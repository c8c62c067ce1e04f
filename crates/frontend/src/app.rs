use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::ApiConfig;
use crate::shared::fetcher::{provide_fetcher, Fetcher};
use crate::system::auth::context::provide_auth;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let fetcher = Fetcher::browser(ApiConfig::from_env());
    log::info!("API base: {}", fetcher.config().base_url());

    provide_context(AppGlobalContext::new());
    provide_fetcher(fetcher);
    provide_auth();

    view! {
        <AppRoutes />
    }
}
