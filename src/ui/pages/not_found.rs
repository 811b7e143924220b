// src/ui/pages/not_found.rs - 404 page

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::router::Route;

/// Not-found page
#[component]
pub fn NotFound(path: String) -> Element {
    rsx! {
        div {
            class: "text-center",
            p { class: "text-6xl mb-4", "🧵" }
            h1 {
                class: "text-3xl font-bold text-gray-900 mb-2",
                "Page not found"
            }
            p {
                class: "text-gray-600 mb-6",
                "Nothing hangs at \"/{path}\"."
            }
            Link {
                to: Route::Products {},
                class: "inline-flex items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-gray-900 hover:bg-gray-700",
                "Back to the collection"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_component_creation() {
        let _page = rsx! { NotFound { path: "no/such/page".to_string() } };
    }
}
