//! Restaurant page: restaurant selector and menu search in the header,
//! then orders, menu editing or guest ordering for the selected restaurant.

use super::details::view_model::MenuViewModel;
use super::details::{CustomerMenu, MenuAdmin};
use crate::domain::a005_order::ui::list::OrderList;
use crate::domain::a006_menu_item::ui::details::model;
use crate::shared::components::ui::Select;
use crate::shared::components::{ErrorBox, LoadingRow, MessageBanner, PageHeader};
use crate::shared::fetcher::use_fetcher;
use crate::shared::list_utils::{derive_view, ListQuery, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::ResourceStore;
use contracts::domain::a006_menu_item::aggregate::{FoodItem, Restaurant};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RestaurantView {
    Orders,
    EditMenu,
    OrderFood,
}

impl RestaurantView {
    const ALL: [RestaurantView; 3] = [
        RestaurantView::Orders,
        RestaurantView::EditMenu,
        RestaurantView::OrderFood,
    ];

    fn label(&self) -> &'static str {
        match self {
            RestaurantView::Orders => "View Orders",
            RestaurantView::EditMenu => "Edit Menu",
            RestaurantView::OrderFood => "Order Food",
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn RestaurantPage() -> impl IntoView {
    let fetcher = use_fetcher();
    let restaurants = ResourceStore::<Restaurant>::new();
    let menu = ResourceStore::<FoodItem>::new();
    let vm = MenuViewModel::new(fetcher.clone(), menu);
    let selected = RwSignal::new(None::<i64>);
    let query = RwSignal::new(ListQuery::new());
    let view_mode = RwSignal::new(RestaurantView::Orders);

    restaurants.load(
        async move { model::fetch_restaurants(&fetcher).await },
        model::restaurants_messages(),
    );

    // First restaurant is selected once the list arrives.
    Effect::new(move |_| {
        let first = restaurants.state().with(|s| s.items.first().map(|r| r.rest_id));
        if selected.get_untracked().is_none() && first.is_some() {
            selected.set(first);
        }
    });
    Effect::new(move |_| {
        if let Some(rest_id) = selected.get() {
            vm.load_menu(rest_id);
        }
    });

    let restaurant_options = Signal::derive(move || {
        restaurants.state().with(|s| {
            s.items
                .iter()
                .map(|r| (r.rest_id.to_string(), format!("Restaurant {}", r.rest_id)))
                .collect::<Vec<_>>()
        })
    });
    let filtered = Signal::derive(move || menu.state().with(|s| query.with(|q| derive_view(&s.items, q))));

    view! {
        <PageFrame page_id="a006_restaurant--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Restaurant Management"
                busy=Signal::derive(move || restaurants.is_loading() || menu.is_loading())
            >
                <Select
                    id="restaurant-select"
                    options=restaurant_options
                    value=Signal::derive(move || selected.get().map(|id| id.to_string()).unwrap_or_default())
                    on_change=Callback::new(move |v: String| {
                        if let Ok(id) = v.parse::<i64>() {
                            selected.set(Some(id));
                        }
                    })
                />
                <SearchInput
                    value=Signal::derive(move || query.with(|q| q.search.clone()))
                    on_change=Callback::new(move |v: String| query.update(|q| q.search = v))
                    placeholder="Search menu..."
                />
            </PageHeader>

            <ErrorBox error=Signal::derive(move || restaurants.error().or_else(|| menu.error())) />
            <MessageBanner
                banner=Signal::derive(move || menu.banner())
                on_dismiss=Callback::new(move |_| menu.dismiss_banner())
            />
            <Show when=move || restaurants.is_loading() && !restaurants.is_loaded()>
                <LoadingRow text="Loading restaurants..." />
            </Show>

            <div class="view-switch">
                {RestaurantView::ALL
                    .into_iter()
                    .map(|mode| {
                        view! {
                            <button
                                class="view-switch__item"
                                class:view-switch__item--active=move || view_mode.get() == mode
                                on:click=move |_| view_mode.set(mode)
                            >
                                {mode.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card">
                {move || match view_mode.get() {
                    RestaurantView::Orders => view! { <OrderList rest_id=selected /> }.into_any(),
                    RestaurantView::EditMenu => view! { <MenuAdmin vm=vm items=filtered /> }.into_any(),
                    RestaurantView::OrderFood => view! { <CustomerMenu vm=vm items=filtered /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
