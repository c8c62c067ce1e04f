use crate::shared::components::ui::Button;
use crate::shared::components::EmptyState;
use crate::shared::list_utils::{Searchable, Sortable};
use contracts::domain::a006_menu_item::aggregate::FoodItem;
use leptos::prelude::*;

impl Searchable for FoodItem {
    /// The menu search box only looks at dish names.
    fn search_fields(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}

impl Sortable for FoodItem {
    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "food_id" => Some(self.food_id.to_string()),
            "name" => Some(self.name.clone()),
            "price" => self.price.map(|p| p.to_string()),
            _ => None,
        }
    }
}

/// Dish cards. Each action button only appears when its callback is given.
#[component]
pub fn MenuGrid(
    #[prop(into)] items: Signal<Vec<FoodItem>>,
    #[prop(optional)] on_add: Option<Callback<FoodItem>>,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    move || {
        let items = items.get();
        if items.is_empty() {
            return view! { <EmptyState title="No dishes on this menu" /> }.into_any();
        }
        view! {
            <div class="menu-grid">
                {items
                    .into_iter()
                    .map(|item| {
                        let id = item.food_id;
                        let price = item.price_label();
                        let veg = item.is_vegetarian();
                        let name = item.name.clone();
                        let description = item.description.clone().unwrap_or_default();
                        view! {
                            <div class="menu-card">
                                <div class="menu-card__head">
                                    <div>
                                        <h3 class="menu-card__name">{name}</h3>
                                        <p class="menu-card__id">{format!("ID: {id}")}</p>
                                    </div>
                                    <span class="menu-card__price">{price}</span>
                                </div>
                                <p class="menu-card__description">{description}</p>
                                <Show when=move || veg>
                                    <span class="badge badge--success">"Veg"</span>
                                </Show>
                                <div class="menu-card__actions">
                                    {on_add.map(|add| {
                                        view! {
                                            <Button
                                                size="sm"
                                                on_click=Callback::new(move |_| add.run(item.clone()))
                                            >
                                                {crate::shared::icons::icon("cart")}
                                                " Add to Order"
                                            </Button>
                                        }
                                    })}
                                    {on_delete.map(|delete| {
                                        view! {
                                            <Button
                                                size="sm"
                                                variant="danger"
                                                disabled=Signal::derive(move || disabled.get().unwrap_or(false))
                                                on_click=Callback::new(move |_| delete.run(id))
                                            >
                                                "Delete"
                                            </Button>
                                        }
                                    })}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{derive_view, ListQuery};

    fn dish(food_id: i64, name: &str, price: Option<f64>) -> FoodItem {
        FoodItem {
            food_id,
            name: name.into(),
            price,
            description: Some("spicy".into()),
            ..Default::default()
        }
    }

    #[test]
    fn menu_search_matches_names_only() {
        let menu = vec![dish(1, "Paneer Tikka", Some(9.0)), dish(2, "Masala Tea", Some(2.0))];
        let mut query = ListQuery::new();
        query.search = "tea".into();
        assert_eq!(derive_view(&menu, &query), vec![dish(2, "Masala Tea", Some(2.0))]);
        query.search = "spicy".into();
        assert!(derive_view(&menu, &query).is_empty());
    }

    #[test]
    fn unpriced_dishes_sort_first() {
        let menu = vec![dish(1, "A", Some(9.0)), dish(2, "B", None), dish(3, "C", Some(2.5))];
        let mut query = ListQuery::new();
        query.toggle_sort("price");
        let ids: Vec<i64> = derive_view(&menu, &query).iter().map(|d| d.food_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
