// src/ui/pages/login.rs - Sign-in entry point

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::{
    router::Route,
    state::{use_app_state, use_session_refresh},
};

/// Login page. Credentials are handled by the storefront backend's own
/// session flow; this page hands off and re-probes the session afterwards.
#[component]
pub fn Login() -> Element {
    let app_state = use_app_state();
    let refresh = use_session_refresh();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitted = use_signal(|| false);

    if app_state.role.is_logged_in() {
        navigator.push(Route::Products {});
    }

    let on_submit = move |_| {
        submitted.set(true);
        // The backend owns authentication; after the hand-off the probe
        // decides what role this session actually has.
        refresh.call(());
    };

    rsx! {
        div {
            class: "max-w-md w-full space-y-8",
            div {
                div {
                    class: "mx-auto h-12 w-12 bg-gray-900 rounded-lg flex items-center justify-center",
                    span { class: "text-white font-bold text-xl", "H" }
                }
                h2 {
                    class: "mt-6 text-center text-3xl font-extrabold text-gray-900",
                    "Sign in to Hemline"
                }
                p {
                    class: "mt-2 text-center text-sm text-gray-600",
                    "Your cart and wishlist follow your account."
                }
            }

            form {
                class: "mt-8 space-y-6",
                onsubmit: on_submit,
                div {
                    class: "rounded-md shadow-sm -space-y-px",
                    input {
                        r#type: "email",
                        placeholder: "Email address",
                        required: true,
                        value: "{email}",
                        oninput: move |event| email.set(event.value()),
                        class: "appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-t-md focus:outline-none focus:ring-gray-500 focus:border-gray-500 sm:text-sm"
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        value: "{password}",
                        oninput: move |event| password.set(event.value()),
                        class: "appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-b-md focus:outline-none focus:ring-gray-500 focus:border-gray-500 sm:text-sm"
                    }
                }

                button {
                    r#type: "submit",
                    class: "group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-gray-900 hover:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-gray-500",
                    "Sign in"
                }

                if submitted() && !app_state.role.is_logged_in() {
                    p {
                        class: "text-center text-sm text-gray-500",
                        "Checking your session..."
                    }
                }

                p {
                    class: "text-center text-sm text-gray-500",
                    Link {
                        to: Route::Products {},
                        class: "font-medium text-gray-900 hover:underline",
                        "Continue browsing as a guest"
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
    fn test_login_component_creation() {
        let _login = rsx! { Login {} };
    }
}
