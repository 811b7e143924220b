// src/ui/pages/account.rs - Account overview

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::session::UserRole;
use crate::ui::{
    pages::PageWrapper,
    router::Route,
    state::{use_app_state, use_session_refresh},
};

/// Account page: who the session belongs to and where their lists stand
#[component]
pub fn Account() -> Element {
    let app_state = use_app_state();
    let refresh = use_session_refresh();

    let role_label = match app_state.role {
        UserRole::Guest => "Guest",
        UserRole::Buyer => "Buyer",
        UserRole::Seller => "Seller",
    };

    let refresh_button = rsx! {
        button {
            r#type: "button",
            class: "inline-flex items-center px-4 py-2 border border-gray-300 shadow-sm text-sm font-medium rounded-md text-gray-700 bg-white hover:bg-gray-50",
            onclick: move |_| refresh.call(()),
            "Refresh session"
        }
    };

    rsx! {
        PageWrapper {
            title: "Account".to_string(),
            subtitle: Some(format!("Signed in as: {}", role_label)),
            actions: Some(refresh_button),

            div {
                class: "bg-white shadow rounded-lg divide-y divide-gray-200",
                AccountRow {
                    label: "Role".to_string(),
                    value: role_label.to_string()
                }
                AccountRow {
                    label: "Items in cart".to_string(),
                    value: app_state.badges.cart.to_string()
                }
                AccountRow {
                    label: "Wishlisted pieces".to_string(),
                    value: app_state.badges.wishlist.to_string()
                }
            }

            if app_state.role.is_seller() {
                div {
                    class: "bg-white shadow rounded-lg p-4",
                    p { class: "text-sm text-gray-500 mb-3", "Seller tools" }
                    div {
                        class: "flex space-x-4",
                        Link {
                            to: Route::SellerDashboard {},
                            class: "text-sm font-medium text-gray-900 underline",
                            "Dashboard"
                        }
                        Link {
                            to: Route::SellerAnalytics {},
                            class: "text-sm font-medium text-gray-900 underline",
                            "Sales analytics"
                        }
                    }
                }
            }

            if !app_state.role.is_logged_in() {
                div {
                    class: "bg-gray-50 border border-gray-200 rounded-lg p-4 text-sm text-gray-600",
                    "You're browsing as a guest. "
                    Link {
                        to: Route::Login {},
                        class: "font-medium text-gray-900 underline",
                        "Sign in"
                    }
                    " to keep your cart and wishlist."
                }
            }
        }
    }
}

#[component]
fn AccountRow(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "flex justify-between px-4 py-3 text-sm",
            span { class: "text-gray-500", "{label}" }
            span { class: "font-medium text-gray-900", "{value}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_component_creation() {
        let _account = rsx! { Account {} };
    }
}
