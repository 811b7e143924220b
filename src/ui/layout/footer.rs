// src/ui/layout/footer.rs - Storefront footer

use chrono::Datelike;
use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::router::Route;

/// Footer component
#[component]
pub fn Footer() -> Element {
    let current_year = chrono::Utc::now().year();

    rsx! {
        footer {
            class: "bg-white border-t border-gray-200 mt-auto",
            div {
                class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-6",
                div {
                    class: "md:flex md:items-center md:justify-between",
                    div {
                        class: "flex flex-wrap justify-center md:justify-start space-x-6 md:order-2",
                        Link {
                            to: Route::Products {},
                            class: "text-sm text-gray-500 hover:text-gray-600 transition-colors",
                            "Shop"
                        }
                        Link {
                            to: Route::Wishlist {},
                            class: "text-sm text-gray-500 hover:text-gray-600 transition-colors",
                            "Wishlist"
                        }
                        Link {
                            to: Route::Account {},
                            class: "text-sm text-gray-500 hover:text-gray-600 transition-colors",
                            "Account"
                        }
                    }
                    div {
                        class: "mt-4 md:mt-0 md:order-1",
                        p {
                            class: "text-center md:text-left text-sm text-gray-400",
                            "© {current_year} Hemline. Dress well, travel light."
                        }
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
    fn test_footer_component_creation() {
        let _footer = rsx! { Footer {} };
    }
}
