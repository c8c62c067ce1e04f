pub mod model;
pub mod view_model;

use self::view_model::{MenuAdminTab, MenuViewModel};
use super::list::MenuGrid;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use contracts::domain::a006_menu_item::aggregate::{
    FoodItem, ModifiableFoodField, NewFoodItem, PaymentMethod,
};
use leptos::prelude::*;

type Getter = fn(&NewFoodItem) -> String;
type Setter = fn(&mut NewFoodItem, String);

fn item_field(
    vm: MenuViewModel,
    label: &'static str,
    input_type: &'static str,
    required: bool,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <Input
            label=label
            input_type=input_type
            required=required
            value=Signal::derive(move || vm.new_item.with(get))
            on_input=Callback::new(move |v: String| vm.new_item.update(|f| set(f, v)))
        />
    }
}

/// Menu editing for staff: current dishes plus add / modify forms.
#[component]
pub fn MenuAdmin(vm: MenuViewModel, #[prop(into)] items: Signal<Vec<FoodItem>>) -> impl IntoView {
    let busy = move || vm.menu.is_loading();
    let veg_options = Signal::derive(|| {
        vec![
            ("1".to_string(), "Vegetarian".to_string()),
            ("0".to_string(), "Non-Vegetarian".to_string()),
        ]
    });
    let field_options = Signal::derive(|| {
        ModifiableFoodField::ALL
            .iter()
            .map(|f| (f.as_wire().to_string(), f.label().to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="menu-admin">
            <h2 class="section-title">"Menu Management"</h2>
            <div class="form-tabs">
                <button
                    class="form-tabs__item"
                    class:form-tabs__item--active=move || vm.admin_tab.get() == MenuAdminTab::Add
                    on:click=move |_| vm.admin_tab.set(MenuAdminTab::Add)
                >
                    "Add Menu Item"
                </button>
                <button
                    class="form-tabs__item"
                    class:form-tabs__item--active=move || vm.admin_tab.get() == MenuAdminTab::Modify
                    on:click=move |_| vm.admin_tab.set(MenuAdminTab::Modify)
                >
                    "Modify Menu Item"
                </button>
            </div>

            <div class="menu-admin__body">
                <div class="menu-admin__current">
                    <h3 class="section-title">"Current Menu Items"</h3>
                    <MenuGrid
                        items=items
                        on_delete=Callback::new(move |id: i64| vm.delete_command(id))
                        disabled=Signal::derive(busy)
                    />
                </div>

                <div class="form-card">
                    {move || match vm.admin_tab.get() {
                        MenuAdminTab::Add => view! {
                            <form on:submit=move |ev| {
                                ev.prevent_default();
                                vm.add_command();
                            }>
                                {item_field(vm, "Name", "text", true, |f| f.name.clone(), |f, v| f.name = v)}
                                {item_field(vm, "Price", "number", true, |f| f.price.clone(), |f, v| f.price = v)}
                                <Textarea
                                    label="Description"
                                    value=Signal::derive(move || vm.new_item.with(|f| f.description.clone()))
                                    on_input=Callback::new(move |v: String| vm.new_item.update(|f| f.description = v))
                                />
                                {item_field(vm, "Average Income Rate", "number", false,
                                    |f| f.avg_income_rate.clone(), |f, v| f.avg_income_rate = v)}
                                {item_field(vm, "Average Plate Cost", "number", false,
                                    |f| f.avg_plate_cost.clone(), |f, v| f.avg_plate_cost = v)}
                                {item_field(vm, "Type", "text", false, |f| f.food_type.clone(), |f, v| f.food_type = v)}
                                <Select
                                    label="Veg/Non-Veg"
                                    options=veg_options
                                    value=Signal::derive(move || vm.new_item.with(|f| f.is_veg.clone()))
                                    on_change=Callback::new(move |v: String| vm.new_item.update(|f| f.is_veg = v))
                                />
                                <div class="form__actions">
                                    <Button button_type="submit" disabled=Signal::derive(busy)>
                                        "Add Menu Item"
                                    </Button>
                                </div>
                            </form>
                        }
                        .into_any(),
                        MenuAdminTab::Modify => view! {
                            <form on:submit=move |ev| {
                                ev.prevent_default();
                                vm.modify_command();
                            }>
                                <Input
                                    label="Food ID"
                                    input_type="number"
                                    required=true
                                    value=Signal::derive(move || vm.modification.with(|m| m.food_id.clone()))
                                    on_input=Callback::new(move |v: String| vm.modification.update(|m| m.food_id = v))
                                />
                                <Select
                                    label="Field to Modify"
                                    options=field_options
                                    value=Signal::derive(move || {
                                        vm.modification.with(|m| m.what_to_modify.as_wire().to_string())
                                    })
                                    on_change=Callback::new(move |v: String| {
                                        if let Some(field) = ModifiableFoodField::from_wire(&v) {
                                            vm.modification.update(|m| m.what_to_modify = field);
                                        }
                                    })
                                />
                                <Input
                                    label="New Value"
                                    input_type="number"
                                    required=true
                                    value=Signal::derive(move || vm.modification.with(|m| m.modification_value.clone()))
                                    on_input=Callback::new(move |v: String| {
                                        vm.modification.update(|m| m.modification_value = v)
                                    })
                                />
                                <div class="form__actions">
                                    <Button button_type="submit" disabled=Signal::derive(busy)>
                                        "Modify Menu Item"
                                    </Button>
                                </div>
                            </form>
                        }
                        .into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

/// Guest view: menu cards with a cart and checkout.
#[component]
pub fn CustomerMenu(vm: MenuViewModel, #[prop(into)] items: Signal<Vec<FoodItem>>) -> impl IntoView {
    let has_items = move || vm.cart.with(|c| !c.is_empty());
    let payment_options = Signal::derive(|| {
        PaymentMethod::ALL
            .iter()
            .map(|m| (m.as_wire().to_string(), m.label().to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="customer-menu">
            <div class="customer-menu__head">
                <h2 class="section-title">"Menu"</h2>
                <Show when=has_items>
                    <Button variant="secondary" on_click=Callback::new(move |_| vm.show_cart.update(|s| *s = !*s))>
                        {move || vm.cart.with(|c| c.toggle_label(vm.show_cart.get()))}
                    </Button>
                </Show>
            </div>

            <Show when=move || { vm.show_cart.get() && has_items() }>
                <div class="order-summary">
                    <h3 class="section-title">"Order Summary"</h3>
                    {move || {
                        vm.cart
                            .with(|c| c.items.clone())
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| {
                                view! {
                                    <div class="order-summary__line">
                                        <div>
                                            <p class="order-summary__name">{item.name.clone()}</p>
                                            <p class="order-summary__price">{item.price_label()}</p>
                                        </div>
                                        <Button
                                            size="sm"
                                            variant="ghost"
                                            on_click=Callback::new(move |_| vm.remove_from_cart(index))
                                        >
                                            "Remove"
                                        </Button>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                    <div class="order-summary__total">
                        <span>"Total:"</span>
                        <span>{move || format!("${}", vm.cart.with(|c| c.total_label()))}</span>
                    </div>
                    <Select
                        label="Payment Method"
                        placeholder="Select Payment Method"
                        options=payment_options
                        value=Signal::derive(move || {
                            vm.cart.with(|c| c.payment_method.map(|m| m.as_wire().to_string()).unwrap_or_default())
                        })
                        on_change=Callback::new(move |v: String| {
                            vm.cart.update(|c| c.payment_method = PaymentMethod::from_wire(&v))
                        })
                    />
                    <Button
                        disabled=Signal::derive(move || vm.menu.is_loading())
                        on_click=Callback::new(move |_| vm.place_order_command())
                    >
                        "Place Order"
                    </Button>
                </div>
            </Show>

            <MenuGrid items=items on_add=Callback::new(move |item: FoodItem| vm.add_to_cart(item)) />
        </div>
    }
}
