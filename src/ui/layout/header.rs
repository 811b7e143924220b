// src/ui/layout/header.rs - Top navigation with branding, search, and list badges

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::session::UserRole;
use crate::ui::{
    router::Route,
    state::{use_app_dispatch, use_app_state, AppAction},
};

/// Header component props
#[derive(Props, Clone, PartialEq)]
pub struct HeaderProps {
    /// Callback for mobile menu toggle
    pub on_menu_toggle: Callback<()>,
    /// Callback for sidebar toggle
    pub on_sidebar_toggle: Callback<()>,
}

/// Main header component
#[component]
pub fn Header(props: HeaderProps) -> Element {
    let app_state = use_app_state();
    let dispatch = use_app_dispatch();
    let navigator = use_navigator();

    let mut search_input = use_signal(|| app_state.search_term.clone().unwrap_or_default());

    let submit_search = move |_| {
        let raw = search_input();
        let term = raw.trim();
        dispatch(AppAction::SetSearch(if term.is_empty() {
            None
        } else {
            Some(term.to_string())
        }));
        navigator.push(Route::Products {});
    };

    let left_side = rsx! {
        div {
            class: "flex items-center",
            // Mobile menu button
            button {
                r#type: "button",
                class: "inline-flex items-center justify-center p-2 rounded-md text-gray-400 hover:text-gray-500 hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-inset focus:ring-gray-500 lg:hidden",
                onclick: move |_| props.on_menu_toggle.call(()),
                span { class: "sr-only", "Open main menu" }
                svg {
                    class: "h-6 w-6",
                    xmlns: "http://www.w3.org/2000/svg",
                    fill: "none",
                    view_box: "0 0 24 24",
                    stroke: "currentColor",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M4 6h16M4 12h16M4 18h16"
                    }
                }
            }
            // Desktop sidebar toggle
            button {
                r#type: "button",
                class: "hidden lg:inline-flex items-center justify-center p-2 rounded-md text-gray-400 hover:text-gray-500 hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-inset focus:ring-gray-500 mr-4",
                onclick: move |_| props.on_sidebar_toggle.call(()),
                span { class: "sr-only", "Toggle sidebar" }
                svg {
                    class: "h-5 w-5",
                    xmlns: "http://www.w3.org/2000/svg",
                    fill: "none",
                    view_box: "0 0 24 24",
                    stroke: "currentColor",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M4 6h16M4 12h8m-8 6h16"
                    }
                }
            }
            // Logo
            Link {
                to: Route::Products {},
                class: "flex items-center",
                div {
                    class: "h-8 w-8 bg-gray-900 rounded-lg flex items-center justify-center",
                    span { class: "text-white font-bold text-sm", "H" }
                }
                span {
                    class: "ml-2 text-xl font-bold text-gray-900 hidden sm:block tracking-wide",
                    "Hemline"
                }
            }
        }
    };

    let search_bar = rsx! {
        // Search box (desktop only)
        form {
            class: "hidden md:block",
            onsubmit: submit_search,
            div {
                class: "relative",
                input {
                    r#type: "text",
                    placeholder: "Search the collection...",
                    value: "{search_input}",
                    oninput: move |event| search_input.set(event.value()),
                    class: "block w-64 pr-10 border-gray-300 rounded-md focus:ring-gray-500 focus:border-gray-500 sm:text-sm"
                }
                div {
                    class: "absolute inset-y-0 right-0 pr-3 flex items-center pointer-events-none",
                    svg {
                        class: "h-5 w-5 text-gray-400",
                        xmlns: "http://www.w3.org/2000/svg",
                        view_box: "0 0 20 20",
                        fill: "currentColor",
                        path {
                            fill_rule: "evenodd",
                            d: "M8 4a4 4 0 100 8 4 4 0 000-8zM2 8a6 6 0 1110.89 3.476l4.817 4.817a1 1 0 01-1.414 1.414l-4.816-4.816A6 6 0 012 8z",
                            clip_rule: "evenodd"
                        }
                    }
                }
            }
        }
    };

    let badge_links = rsx! {
        BadgeLink {
            to: Route::Wishlist {},
            label: "Wishlist".to_string(),
            icon: "♡".to_string(),
            count: app_state.badges.wishlist
        }
        BadgeLink {
            to: Route::Cart {},
            label: "Cart".to_string(),
            icon: "🛍".to_string(),
            count: app_state.badges.cart
        }
    };

    let account_link = match app_state.role {
        UserRole::Guest => rsx! {
            Link {
                to: Route::Login {},
                class: "text-sm font-medium text-gray-700 hover:text-gray-900",
                "Sign in"
            }
        },
        _ => rsx! {
            Link {
                to: Route::Account {},
                class: "h-8 w-8 rounded-full bg-gray-900 flex items-center justify-center",
                span { class: "text-sm font-medium text-white", "A" }
            }
        },
    };

    rsx! {
        header {
            class: "bg-white shadow-sm border-b border-gray-200 relative z-50",
            div {
                class: "mx-auto max-w-full px-4 sm:px-6 lg:px-8",
                div {
                    class: "flex justify-between items-center h-16",
                    {left_side}
                    div {
                        class: "flex items-center space-x-4",
                        {search_bar}
                        {badge_links}
                        {account_link}
                    }
                }
            }
        }
    }
}

/// Icon link with an optional count bubble
#[component]
fn BadgeLink(to: Route, label: String, icon: String, count: u32) -> Element {
    rsx! {
        Link {
            to: to,
            class: "relative p-2 text-gray-500 hover:text-gray-900 rounded-full hover:bg-gray-100",
            span { class: "sr-only", "{label}" }
            span { class: "text-xl", "{icon}" }
            if count > 0 {
                span {
                    class: "absolute -top-1 -right-1 h-5 w-5 bg-gray-900 text-white text-xs rounded-full flex items-center justify-center",
                    "{count}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_component_creation() {
        let on_menu_toggle = Callback::new(|_| {});
        let on_sidebar_toggle = Callback::new(|_| {});

        let _header = rsx! {
            Header {
                on_menu_toggle: on_menu_toggle,
                on_sidebar_toggle: on_sidebar_toggle
            }
        };
    }
}
