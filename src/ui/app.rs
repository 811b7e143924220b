// src/ui/app.rs - Root application component

use dioxus::prelude::*;

use crate::ui::{router::Route, state::AppStateProvider};

/// Application root: state provider wrapping the router
#[component]
pub fn App() -> Element {
    rsx! {
        AppStateProvider {
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_component_creation() {
        let _app = rsx! { App {} };
    }
}
