// src/ui/pages/seller_dashboard.rs - Seller overview with stat cards

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::store::SellerCounters;
use crate::ui::{
    pages::{format_price, PageWrapper, StatCard},
    router::Route,
    state::{use_app_state, use_session_refresh},
};

/// Seller dashboard
#[component]
pub fn SellerDashboard() -> Element {
    let app_state = use_app_state();
    let refresh = use_session_refresh();

    let counters = app_state.seller.unwrap_or_default();

    let refresh_button = rsx! {
        button {
            r#type: "button",
            class: "inline-flex items-center px-4 py-2 border border-gray-300 shadow-sm text-sm font-medium rounded-md text-gray-700 bg-white hover:bg-gray-50",
            onclick: move |_| refresh.call(()),
            "Refresh"
        }
    };

    rsx! {
        PageWrapper {
            title: "Seller Dashboard".to_string(),
            subtitle: Some("How your shop is doing".to_string()),
            actions: Some(refresh_button),

            StatGrid { counters: counters }

            div {
                class: "bg-white shadow rounded-lg p-6",
                h2 { class: "text-lg font-medium text-gray-900 mb-2", "Sales activity" }
                p {
                    class: "text-sm text-gray-500 mb-4",
                    "See which days sold, your streaks, and per-product numbers."
                }
                Link {
                    to: Route::SellerAnalytics {},
                    class: "inline-flex items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-gray-900 hover:bg-gray-700",
                    "Open sales analytics"
                }
            }
        }
    }
}

#[component]
fn StatGrid(counters: SellerCounters) -> Element {
    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6",
            StatCard {
                title: "Products listed".to_string(),
                value: counters.total_products.to_string(),
                icon: Some("👗".to_string())
            }
            StatCard {
                title: "Total orders".to_string(),
                value: counters.total_orders.to_string(),
                icon: Some("📦".to_string())
            }
            StatCard {
                title: "Pending orders".to_string(),
                value: counters.pending_orders.to_string(),
                icon: Some("⏳".to_string())
            }
            StatCard {
                title: "Revenue this month".to_string(),
                value: format_price(counters.monthly_revenue),
                icon: Some("💰".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_component_creation() {
        let _dashboard = rsx! { SellerDashboard {} };
    }

    #[test]
    fn test_stat_grid_defaults_to_zeroes() {
        let counters = SellerCounters::default();
        assert_eq!(counters.total_orders, 0);
        let _grid = rsx! { StatGrid { counters: counters } };
    }
}
