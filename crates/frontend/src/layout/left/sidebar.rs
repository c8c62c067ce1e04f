//! Sidebar with collapsible menu groups.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// (tab key, icon)
    items: Vec<(&'static str, &'static str)>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "front_desk",
            label: "Front desk",
            icon: "bed",
            items: vec![("a007_event", "calendar"), ("a002_room_booking", "bed")],
        },
        MenuGroup {
            id: "restaurant",
            label: "Restaurant",
            icon: "menu",
            items: vec![("a006_restaurant", "menu")],
        },
        MenuGroup {
            id: "operations",
            label: "Operations",
            icon: "wrench",
            items: vec![("a003_maintenance", "wrench"), ("a004_requirement", "clipboard")],
        },
        MenuGroup {
            id: "people",
            label: "People",
            icon: "staff",
            items: vec![("a001_staff", "staff"), ("a001_employee_list", "clipboard")],
        },
        MenuGroup {
            id: "account",
            label: "Account",
            icon: "login",
            items: vec![("sys_login", "login")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    let gid = group.id;
                    let is_expanded = move || expanded_groups.with(|items| items.iter().any(|x| x == gid));
                    let toggle = move |_| {
                        expanded_groups.update(|items| {
                            if let Some(pos) = items.iter().position(|x| x == gid) {
                                items.remove(pos);
                            } else {
                                items.push(gid.to_string());
                            }
                        });
                    };

                    view! {
                        <div>
                            <div class="app-sidebar__item" on:click=toggle>
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {group
                                        .items
                                        .iter()
                                        .map(|&(key, icon_name)| {
                                            let label = tab_label_for_key(key);
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || ctx.is_active(key)
                                                    on:click=move |_| ctx.open_tab(key, label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
