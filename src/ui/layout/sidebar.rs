// src/ui/layout/sidebar.rs - Category navigation, plus the seller menu

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::{
    router::{nav, Route},
    state::{use_app_dispatch, use_app_state, AppAction},
};

/// Storefront category names the sidebar offers as filters
pub const CATEGORIES: [&str; 6] = [
    "Dresses",
    "Tops",
    "Bottoms",
    "Jackets",
    "Shoes",
    "Accessories",
];

/// Sidebar component props
#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    /// Whether the sidebar is collapsed on desktop
    pub collapsed: bool,
    /// Whether the mobile menu is open
    pub mobile_open: bool,
    /// Callback for closing mobile menu
    pub on_close: Callback<Event<MouseData>>,
}

/// Main sidebar component
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let nav_body = rsx! {
        SidebarNav { collapsed: props.collapsed }
    };

    rsx! {
        // Desktop sidebar
        div {
            class: format!(
                "hidden lg:flex lg:flex-col lg:fixed lg:inset-y-0 lg:z-40 lg:transition-all lg:duration-200 lg:ease-in-out {}",
                if props.collapsed { "lg:w-16" } else { "lg:w-64" }
            ),
            div {
                class: "flex flex-col flex-grow bg-white border-r border-gray-200 pt-16 pb-4 overflow-y-auto",
                {nav_body}
            }
        }

        // Mobile drawer
        if props.mobile_open {
            div {
                class: "fixed inset-0 z-40 lg:hidden",
                div {
                    class: "fixed inset-0 bg-gray-600 bg-opacity-75",
                    onclick: move |event| props.on_close.call(event),
                }
                div {
                    class: "relative flex flex-col w-64 h-full bg-white pt-16 pb-4 overflow-y-auto",
                    SidebarNav { collapsed: false }
                }
            }
        }
    }
}

#[component]
fn SidebarNav(collapsed: bool) -> Element {
    let app_state = use_app_state();
    let dispatch = use_app_dispatch();
    let navigator = use_navigator();
    let current_route = use_route::<Route>();

    let shopping_category = app_state.category.clone();
    let on_products = nav::is_active_route(&current_route, &Route::Products {});

    rsx! {
        nav {
            class: "flex-1 px-2 space-y-1",

            if !collapsed {
                p {
                    class: "px-3 pt-2 pb-1 text-xs font-semibold text-gray-400 uppercase tracking-wider",
                    "Shop by category"
                }
            }

            // "All" entry clears the category filter
            button {
                r#type: "button",
                class: category_classes(on_products && shopping_category.is_none()),
                onclick: move |_| {
                    dispatch(AppAction::SetCategory(None));
                    navigator.push(Route::Products {});
                },
                if collapsed { "✦" } else { "All products" }
            }

            for category in CATEGORIES {
                button {
                    key: "{category}",
                    r#type: "button",
                    class: category_classes(
                        on_products && shopping_category.as_deref() == Some(category),
                    ),
                    onclick: move |_| {
                        dispatch(AppAction::SetCategory(Some(category.to_string())));
                        navigator.push(Route::Products {});
                    },
                    if collapsed {
                        "{category.chars().next().unwrap_or('?')}"
                    } else {
                        "{category}"
                    }
                }
            }

            if app_state.role.is_seller() {
                if !collapsed {
                    p {
                        class: "px-3 pt-4 pb-1 text-xs font-semibold text-gray-400 uppercase tracking-wider",
                        "Seller"
                    }
                }
                SidebarLink {
                    to: Route::SellerDashboard {},
                    label: "Dashboard".to_string(),
                    icon: "📊".to_string(),
                    collapsed: collapsed,
                    active: nav::is_active_route(&current_route, &Route::SellerDashboard {})
                }
                SidebarLink {
                    to: Route::SellerAnalytics {},
                    label: "Sales analytics".to_string(),
                    icon: "📈".to_string(),
                    collapsed: collapsed,
                    active: nav::is_active_route(&current_route, &Route::SellerAnalytics {})
                }
            }
        }
    }
}

fn category_classes(active: bool) -> String {
    format!(
        "w-full text-left group flex items-center px-3 py-2 text-sm font-medium rounded-md {}",
        if active {
            "bg-gray-100 text-gray-900"
        } else {
            "text-gray-600 hover:bg-gray-50 hover:text-gray-900"
        }
    )
}

#[component]
fn SidebarLink(to: Route, label: String, icon: String, collapsed: bool, active: bool) -> Element {
    rsx! {
        Link {
            to: to,
            class: category_classes(active),
            span { class: "text-base", "{icon}" }
            if !collapsed {
                span { class: "ml-3", "{label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_unique() {
        let mut names: Vec<&str> = CATEGORIES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CATEGORIES.len());
    }

    #[test]
    fn test_category_classes_switch_on_active() {
        assert!(category_classes(true).contains("bg-gray-100"));
        assert!(category_classes(false).contains("hover:bg-gray-50"));
    }
}
