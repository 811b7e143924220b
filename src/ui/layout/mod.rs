// src/ui/layout/mod.rs - Layout system components

use dioxus::prelude::*;

use crate::ui::state::{use_app_dispatch, use_app_state, AppAction};
use crate::ui::NotificationType;

// Module declarations
mod footer;
mod header;
mod sidebar;

// Re-exports
pub use footer::Footer;
pub use header::Header;
pub use sidebar::Sidebar;

/// Shell wrapping every routed page: header, sidebar, toasts, footer
#[component]
pub fn Layout(children: Element) -> Element {
    let app_state = use_app_state();
    let dispatch = use_app_dispatch();

    let on_menu_toggle = use_callback({
        let dispatch = dispatch;
        move |_: ()| dispatch(AppAction::ToggleMobileMenu)
    });
    let on_sidebar_toggle = use_callback({
        let dispatch = dispatch;
        move |_: ()| dispatch(AppAction::ToggleSidebar)
    });
    let on_mobile_close = use_callback({
        let dispatch = dispatch;
        move |_: Event<MouseData>| dispatch(AppAction::SetMobileMenuOpen(false))
    });

    let content_margin = if app_state.sidebar_collapsed {
        "lg:ml-16"
    } else {
        "lg:ml-64"
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 flex flex-col",
            Header {
                on_menu_toggle: on_menu_toggle,
                on_sidebar_toggle: on_sidebar_toggle
            }
            Sidebar {
                collapsed: app_state.sidebar_collapsed,
                mobile_open: app_state.mobile_menu_open,
                on_close: on_mobile_close
            }
            main {
                class: format!("flex-1 transition-all duration-200 ease-in-out {}", content_margin),
                div {
                    class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-8",
                    NotificationStack {}
                    {children}
                }
            }
            div {
                class: content_margin,
                Footer {}
            }
        }
    }
}

/// Toasts for recent mutation outcomes
#[component]
fn NotificationStack() -> Element {
    let app_state = use_app_state();
    let dispatch = use_app_dispatch();

    if app_state.notifications.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "space-y-2 mb-4",
            for notification in app_state.notifications.clone() {
                div {
                    key: "{notification.id}",
                    class: format!(
                        "flex items-center justify-between rounded-md border px-4 py-3 text-sm {}",
                        match notification.notification_type {
                            NotificationType::Success => "bg-green-50 border-green-200 text-green-800",
                            NotificationType::Error => "bg-red-50 border-red-200 text-red-800",
                            NotificationType::Info => "bg-blue-50 border-blue-200 text-blue-800",
                        }
                    ),
                    span { "{notification.message}" }
                    button {
                        r#type: "button",
                        class: "ml-4 font-bold",
                        onclick: move |_| dispatch(AppAction::RemoveNotification(notification.id)),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_component_creation() {
        let _layout = rsx! {
            Layout {
                div { "Content" }
            }
        };
    }
}
