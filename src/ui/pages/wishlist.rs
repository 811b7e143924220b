// src/ui/pages/wishlist.rs - Wishlist with a local saved-for-later partition

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::cart::{ListState, WishlistLine};
use crate::ui::{
    pages::{EmptyState, PageError, PageSkeleton, PageWrapper},
    router::Route,
    state::{use_app_dispatch, use_services, AppAction},
    Notification,
};

/// Wishlist page
#[component]
pub fn Wishlist() -> Element {
    let services = use_services();
    let dispatch = use_app_dispatch();

    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| None::<String>);
    let mut lines = use_signal(ListState::default);

    use_future({
        let cart = services.cart.clone();
        move || {
            let cart = cart.clone();
            async move {
                match cart.refresh().await {
                    Ok(()) => lines.set(cart.snapshot()),
                    Err(error) => load_error.set(Some(error.user_message())),
                }
                loading.set(false);
            }
        }
    });

    let on_remove = use_callback({
        let cart = services.cart.clone();
        move |(product_id, size): (String, Option<String>)| {
            let cart = cart.clone();
            let dispatch = dispatch;
            spawn(async move {
                if let Err(error) = cart.toggle_wishlist(&product_id, size.as_deref()).await {
                    dispatch(AppAction::AddNotification(Notification::error(
                        error.user_message(),
                    )));
                }
                lines.set(cart.snapshot());
            });
        }
    });

    // Partition transfers are client-side staging only; no spinner, no toast
    let on_move = use_callback({
        let cart = services.cart.clone();
        move |(product_id, size, to_saved): (String, Option<String>, bool)| {
            cart.move_between_lists(&product_id, size.as_deref(), to_saved);
            lines.set(cart.snapshot());
        }
    });

    if loading() {
        return rsx! { PageSkeleton {} };
    }
    if let Some(message) = load_error() {
        return rsx! { PageError { message: message } };
    }

    let state = lines();
    let active: Vec<WishlistLine> = state.wishlist_active().into_iter().cloned().collect();
    let saved: Vec<WishlistLine> = state.wishlist_saved().into_iter().cloned().collect();

    if active.is_empty() && saved.is_empty() {
        return rsx! {
            PageWrapper {
                title: "Wishlist".to_string(),
                EmptyState {
                    icon: "♡".to_string(),
                    title: "Your wishlist is empty".to_string(),
                    description: "Tap the heart on any piece to keep it here.".to_string(),
                    action: Some(rsx! {
                        Link {
                            to: Route::Products {},
                            class: "text-sm font-medium text-gray-900 underline",
                            "Browse the collection"
                        }
                    })
                }
            }
        };
    }

    rsx! {
        PageWrapper {
            title: "Wishlist".to_string(),
            subtitle: Some(format!("{} saved pieces", active.len() + saved.len())),

            WishlistSection {
                title: "Wishlist".to_string(),
                lines: active,
                in_saved_partition: false,
                on_remove: on_remove,
                on_move: on_move
            }

            if !saved.is_empty() {
                WishlistSection {
                    title: "Saved for later".to_string(),
                    lines: saved,
                    in_saved_partition: true,
                    on_remove: on_remove,
                    on_move: on_move
                }
            }
        }
    }
}

#[component]
fn WishlistSection(
    title: String,
    lines: Vec<WishlistLine>,
    in_saved_partition: bool,
    on_remove: Callback<(String, Option<String>)>,
    on_move: Callback<(String, Option<String>, bool)>,
) -> Element {
    if lines.is_empty() {
        return rsx! {
            div {
                class: "bg-white shadow rounded-lg p-6 text-sm text-gray-500",
                "Nothing in this list right now."
            }
        };
    }

    rsx! {
        div {
            h2 { class: "text-lg font-medium text-gray-900 mb-3", "{title}" }
            div {
                class: "bg-white shadow rounded-lg divide-y divide-gray-200",
                for line in lines {
                    WishlistRow {
                        key: "{line.product_id}-{line.size.clone().unwrap_or_default()}",
                        line: line.clone(),
                        in_saved_partition: in_saved_partition,
                        on_remove: on_remove,
                        on_move: on_move
                    }
                }
            }
        }
    }
}

#[component]
fn WishlistRow(
    line: WishlistLine,
    in_saved_partition: bool,
    on_remove: Callback<(String, Option<String>)>,
    on_move: Callback<(String, Option<String>, bool)>,
) -> Element {
    let move_label = if in_saved_partition {
        "Move to wishlist"
    } else {
        "Save for later"
    };

    let do_move = {
        let line = line.clone();
        move |_| {
            on_move.call((line.product_id.clone(), line.size.clone(), !in_saved_partition));
        }
    };
    let do_remove = {
        let line = line.clone();
        move |_| {
            on_remove.call((line.product_id.clone(), line.size.clone()));
        }
    };

    rsx! {
        div {
            class: "flex items-center justify-between p-4",
            div {
                class: "min-w-0",
                Link {
                    to: Route::ProductDetail { product_id: line.product_id.clone() },
                    class: "text-sm font-medium text-gray-900 hover:underline",
                    "{line.product_id}"
                }
                if let Some(size) = &line.size {
                    p { class: "text-sm text-gray-500", "Size {size}" }
                }
            }
            div {
                class: "flex items-center space-x-3",
                button {
                    r#type: "button",
                    class: "text-sm text-gray-600 hover:text-gray-900 underline",
                    onclick: do_move,
                    "{move_label}"
                }
                button {
                    r#type: "button",
                    class: "text-gray-400 hover:text-red-600",
                    onclick: do_remove,
                    "×"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_split() {
        let state = ListState {
            cart: Vec::new(),
            wishlist: vec![
                WishlistLine {
                    product_id: "P1".to_string(),
                    size: None,
                    saved_for_later: false,
                },
                WishlistLine {
                    product_id: "P2".to_string(),
                    size: Some("S".to_string()),
                    saved_for_later: true,
                },
            ],
        };

        assert_eq!(state.wishlist_active().len(), 1);
        assert_eq!(state.wishlist_saved().len(), 1);
        assert_eq!(state.wishlist_saved()[0].product_id, "P2");
    }
}
