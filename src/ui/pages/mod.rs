// src/ui/pages/mod.rs - Page components module

use dioxus::prelude::*;

// Module declarations
mod account;
mod cart;
mod checkout;
mod login;
mod not_found;
mod product_detail;
mod products;
mod seller_analytics;
mod seller_dashboard;
mod wishlist;

// Re-exports
pub use account::Account;
pub use cart::Cart;
pub use checkout::Checkout;
pub use login::Login;
pub use not_found::NotFound;
pub use product_detail::ProductDetail;
pub use products::Products;
pub use seller_analytics::SellerAnalytics;
pub use seller_dashboard::SellerDashboard;
pub use wishlist::Wishlist;

/// Common page wrapper component
#[component]
pub fn PageWrapper(
    #[props(default = "".to_string())] title: String,
    #[props(default = None)] subtitle: Option<String>,
    #[props(default = None)] actions: Option<Element>,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: format!("space-y-6 {}", class),

            if !title.is_empty() {
                div {
                    class: "md:flex md:items-center md:justify-between",
                    div {
                        class: "flex-1 min-w-0",
                        h1 {
                            class: "text-2xl font-bold leading-7 text-gray-900 sm:text-3xl sm:truncate",
                            "{title}"
                        }
                        if let Some(subtitle) = subtitle {
                            p {
                                class: "mt-1 text-sm text-gray-500",
                                "{subtitle}"
                            }
                        }
                    }
                    if let Some(actions) = actions {
                        div {
                            class: "mt-4 flex md:mt-0 md:ml-4",
                            {actions}
                        }
                    }
                }
            }

            {children}
        }
    }
}

/// Loading skeleton shown while a fetch is in flight
#[component]
pub fn PageSkeleton() -> Element {
    rsx! {
        div {
            class: "space-y-6 animate-pulse",
            div { class: "h-8 bg-gray-200 rounded w-1/3" }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                for _ in 0..6 {
                    div {
                        class: "bg-white p-6 rounded-lg shadow",
                        div {
                            class: "space-y-3",
                            div { class: "h-40 bg-gray-200 rounded" }
                            div { class: "h-4 bg-gray-200 rounded w-1/2" }
                            div { class: "h-3 bg-gray-200 rounded w-1/4" }
                        }
                    }
                }
            }
        }
    }
}

/// Error state component for pages
#[component]
pub fn PageError(
    #[props(default = "An error occurred".to_string())] message: String,
    #[props(default = None)] retry_action: Option<Callback<()>>,
) -> Element {
    rsx! {
        div {
            class: "text-center py-12",
            div { class: "text-6xl text-red-500 mb-4", "⚠️" }
            h2 {
                class: "text-2xl font-bold text-gray-900 mb-2",
                "Something went wrong"
            }
            p { class: "text-gray-600 mb-6", "{message}" }
            if let Some(retry) = retry_action {
                button {
                    r#type: "button",
                    class: "inline-flex items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-gray-900 hover:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-gray-500",
                    onclick: move |_| retry.call(()),
                    "Try Again"
                }
            }
        }
    }
}

/// Empty state component for pages
#[component]
pub fn EmptyState(
    #[props(default = "🧺".to_string())] icon: String,
    #[props(default = "Nothing here yet".to_string())] title: String,
    #[props(default = "There's nothing to show here yet.".to_string())] description: String,
    #[props(default = None)] action: Option<Element>,
) -> Element {
    rsx! {
        div {
            class: "text-center py-12",
            div { class: "text-6xl mb-4", "{icon}" }
            h3 {
                class: "text-lg font-medium text-gray-900 mb-2",
                "{title}"
            }
            p { class: "text-gray-500 mb-6", "{description}" }
            if let Some(action) = action {
                {action}
            }
        }
    }
}

/// Stat card component for the seller dashboard
#[component]
pub fn StatCard(
    title: String,
    value: String,
    #[props(default = None)] change: Option<String>,
    #[props(default = None)] trend: Option<StatTrend>,
    #[props(default = None)] icon: Option<String>,
) -> Element {
    let trend_color = match trend {
        Some(StatTrend::Up) => "text-green-600",
        Some(StatTrend::Down) => "text-red-600",
        _ => "text-gray-600",
    };

    rsx! {
        div {
            class: "bg-white overflow-hidden shadow rounded-lg",
            div {
                class: "p-5",
                div {
                    class: "flex items-center",
                    div {
                        class: "flex-shrink-0",
                        if let Some(icon) = icon {
                            span { class: "text-2xl", "{icon}" }
                        }
                    }
                    div {
                        class: "ml-5 w-0 flex-1",
                        dl {
                            dt {
                                class: "text-sm font-medium text-gray-500 truncate",
                                "{title}"
                            }
                            dd {
                                class: "flex items-baseline",
                                div {
                                    class: "text-2xl font-semibold text-gray-900",
                                    "{value}"
                                }
                                if let Some(change_text) = change {
                                    div {
                                        class: format!("ml-2 flex items-baseline text-sm font-semibold {}", trend_color),
                                        match trend {
                                            Some(StatTrend::Up) => rsx! { "↗ {change_text}" },
                                            Some(StatTrend::Down) => rsx! { "↘ {change_text}" },
                                            _ => rsx! { "{change_text}" },
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Trend direction for stat cards
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatTrend {
    Up,
    Down,
    Neutral,
}

/// Price formatting used across product, cart, and dashboard views
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wrapper_creation() {
        let _wrapper = rsx! {
            PageWrapper {
                title: "Shop".to_string(),
                div { "Content" }
            }
        };
    }

    #[test]
    fn test_stat_card_creation() {
        let _card = rsx! {
            StatCard {
                title: "Total Orders".to_string(),
                value: "412".to_string(),
                change: Some("+8%".to_string()),
                trend: Some(StatTrend::Up),
                icon: Some("📦".to_string())
            }
        };
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(49.9), "$49.90");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(1234.567), "$1234.57");
    }
}
