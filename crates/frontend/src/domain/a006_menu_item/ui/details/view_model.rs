use super::model;
use crate::shared::fetcher::Fetcher;
use crate::shared::resource::ResourceStore;
use contracts::domain::a006_menu_item::aggregate::{
    FoodItem, FoodModification, NewFoodItem, OrderCart,
};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAdminTab {
    Add,
    Modify,
}

/// Admin forms and guest cart over one restaurant menu.
#[derive(Clone, Copy)]
pub struct MenuViewModel {
    pub menu: ResourceStore<FoodItem>,
    pub admin_tab: RwSignal<MenuAdminTab>,
    pub new_item: RwSignal<NewFoodItem>,
    pub modification: RwSignal<FoodModification>,
    pub cart: RwSignal<OrderCart>,
    pub show_cart: RwSignal<bool>,
    fetcher: StoredValue<Fetcher>,
}

impl MenuViewModel {
    pub fn new(fetcher: Fetcher, menu: ResourceStore<FoodItem>) -> Self {
        Self {
            menu,
            admin_tab: RwSignal::new(MenuAdminTab::Add),
            new_item: RwSignal::new(NewFoodItem::default()),
            modification: RwSignal::new(FoodModification::default()),
            cart: RwSignal::new(OrderCart::default()),
            show_cart: RwSignal::new(false),
            fetcher: StoredValue::new(fetcher),
        }
    }

    pub fn load_menu(&self, rest_id: i64) {
        let fetcher = self.fetcher.get_value();
        self.menu.load(
            async move { model::fetch_menu(&fetcher, rest_id).await },
            model::menu_messages(),
        );
        self.new_item.update(|f| f.rest_id = rest_id.to_string());
    }

    pub fn add_command(&self) {
        let item = self.new_item.get_untracked();
        let rest_id = item.rest_id.clone();
        let fetcher = self.fetcher.get_value();
        let form = self.new_item;
        self.menu.mutate_then(
            async move { model::insert_food(&fetcher, item).await },
            model::insert_messages(),
            move |ok| {
                if ok {
                    form.set(NewFoodItem {
                        rest_id,
                        ..NewFoodItem::default()
                    });
                }
            },
        );
    }

    pub fn modify_command(&self) {
        let modification = self.modification.get_untracked();
        let fetcher = self.fetcher.get_value();
        let form = self.modification;
        self.menu.mutate_then(
            async move { model::modify_food(&fetcher, modification).await },
            model::modify_messages(),
            move |ok| {
                if ok {
                    form.set(FoodModification::default());
                }
            },
        );
    }

    pub fn delete_command(&self, food_id: i64) {
        let fetcher = self.fetcher.get_value();
        self.menu.mutate(
            async move { model::delete_food(&fetcher, food_id).await },
            model::delete_messages(),
        );
    }

    // ========================================================================
    // Cart
    // ========================================================================

    pub fn add_to_cart(&self, item: FoodItem) {
        self.cart.update(|c| c.add(item));
        self.show_cart.set(true);
    }

    pub fn remove_from_cart(&self, index: usize) {
        self.cart.update(|c| {
            c.remove(index);
        });
        if self.cart.with_untracked(|c| c.is_empty()) {
            self.show_cart.set(false);
        }
    }

    pub fn place_order_command(&self) {
        let cart = self.cart.get_untracked();
        let fetcher = self.fetcher.get_value();
        let cart_signal = self.cart;
        let show_cart = self.show_cart;
        self.menu.mutate_then(
            async move { model::place_order(&fetcher, cart).await },
            model::order_messages(),
            move |ok| {
                if ok {
                    cart_signal.update(|c| c.clear());
                    show_cart.set(false);
                }
            },
        );
    }
}
