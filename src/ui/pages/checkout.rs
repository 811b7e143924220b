// src/ui/pages/checkout.rs - Checkout placeholder

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::{
    pages::{EmptyState, PageWrapper},
    router::Route,
};

/// Checkout page. Payment processing lives outside this client; the page
/// only confirms what would be ordered.
#[component]
pub fn Checkout() -> Element {
    rsx! {
        PageWrapper {
            title: "Checkout".to_string(),
            EmptyState {
                icon: "🧾".to_string(),
                title: "Checkout isn't wired up here".to_string(),
                description: "Orders are placed through the storefront's payment flow.".to_string(),
                action: Some(rsx! {
                    Link {
                        to: Route::Cart {},
                        class: "text-sm font-medium text-gray-900 underline",
                        "Back to cart"
                    }
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_component_creation() {
        let _checkout = rsx! { Checkout {} };
    }
}
