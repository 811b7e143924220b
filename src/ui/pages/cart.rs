// src/ui/pages/cart.rs - Cart with quantity steppers

use std::collections::BTreeMap;

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::cart::{CartLine, ListState};
use crate::catalog::{CatalogQuery, Product, SortBy};
use crate::ui::{
    pages::{format_price, EmptyState, PageError, PageSkeleton, PageWrapper},
    router::Route,
    state::{use_app_dispatch, use_services, AppAction},
    Notification,
};

/// Cart page
#[component]
pub fn Cart() -> Element {
    let services = use_services();
    let dispatch = use_app_dispatch();

    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| None::<String>);
    let mut lines = use_signal(ListState::default);
    let mut catalog_index = use_signal(BTreeMap::<String, Product>::new);

    use_future({
        let services = services.clone();
        move || {
            let services = services.clone();
            async move {
                if let Err(error) = services.cart.refresh().await {
                    load_error.set(Some(error.user_message()));
                    loading.set(false);
                    return;
                }
                lines.set(services.cart.snapshot());

                // Catalog join for names and prices; failure here only
                // degrades the labels, the cart itself is already loaded.
                let query = CatalogQuery::new(100, SortBy::Popularity);
                if let Ok(page) = services.api.fetch_products(&query).await {
                    catalog_index.set(
                        page.products
                            .into_iter()
                            .map(|product| (product.id.clone(), product))
                            .collect(),
                    );
                }
                loading.set(false);
            }
        }
    });

    let on_set_quantity = use_callback({
        let cart = services.cart.clone();
        move |(product_id, size, quantity): (String, Option<String>, u32)| {
            let cart = cart.clone();
            let dispatch = dispatch;
            spawn(async move {
                if let Err(error) = cart
                    .set_quantity(&product_id, size.as_deref(), quantity)
                    .await
                {
                    dispatch(AppAction::AddNotification(Notification::error(
                        error.user_message(),
                    )));
                }
                lines.set(cart.snapshot());
            });
        }
    });

    let on_remove = use_callback({
        let cart = services.cart.clone();
        move |(product_id, size): (String, Option<String>)| {
            let cart = cart.clone();
            let dispatch = dispatch;
            spawn(async move {
                if let Err(error) = cart.remove_line(&product_id, size.as_deref()).await {
                    dispatch(AppAction::AddNotification(Notification::error(
                        error.user_message(),
                    )));
                }
                lines.set(cart.snapshot());
            });
        }
    });

    if loading() {
        return rsx! { PageSkeleton {} };
    }
    if let Some(message) = load_error() {
        return rsx! { PageError { message: message } };
    }

    let state = lines();
    let index = catalog_index();
    let subtotal = cart_subtotal(&state.cart, &index);

    if state.cart.is_empty() {
        return rsx! {
            PageWrapper {
                title: "Cart".to_string(),
                EmptyState {
                    icon: "🛍".to_string(),
                    title: "Your cart is empty".to_string(),
                    description: "Pieces you add will wait for you here.".to_string(),
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
            title: "Cart".to_string(),
            subtitle: Some(format!("{} items", state.total_cart_items())),

            div {
                class: "bg-white shadow rounded-lg divide-y divide-gray-200",
                for line in state.cart.clone() {
                    CartLineRow {
                        key: "{line.product_id}-{line.size.clone().unwrap_or_default()}",
                        line: line.clone(),
                        product: index.get(&line.product_id).cloned(),
                        on_set_quantity: on_set_quantity,
                        on_remove: on_remove
                    }
                }
            }

            div {
                class: "flex items-center justify-between bg-white shadow rounded-lg p-4",
                p {
                    class: "text-lg font-medium text-gray-900",
                    "Subtotal: " {format_price(subtotal)}
                }
                Link {
                    to: Route::Checkout {},
                    class: "inline-flex items-center px-6 py-3 border border-transparent text-base font-medium rounded-md shadow-sm text-white bg-gray-900 hover:bg-gray-700",
                    "Checkout"
                }
            }
        }
    }
}

#[component]
fn CartLineRow(
    line: CartLine,
    product: Option<Product>,
    on_set_quantity: Callback<(String, Option<String>, u32)>,
    on_remove: Callback<(String, Option<String>)>,
) -> Element {
    let name = product
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| line.product_id.clone());
    let unit_price = product.as_ref().map(|p| p.price).unwrap_or(0.0);
    let image = product.as_ref().and_then(|p| p.images.first().cloned());

    let decrement = {
        let line = line.clone();
        move |_| {
            on_set_quantity.call((
                line.product_id.clone(),
                line.size.clone(),
                line.quantity.saturating_sub(1),
            ));
        }
    };
    let increment = {
        let line = line.clone();
        move |_| {
            on_set_quantity.call((line.product_id.clone(), line.size.clone(), line.quantity + 1));
        }
    };
    let remove = {
        let line = line.clone();
        move |_| {
            on_remove.call((line.product_id.clone(), line.size.clone()));
        }
    };

    rsx! {
        div {
            class: "flex items-center p-4 space-x-4",
            div {
                class: "h-16 w-16 bg-gray-100 rounded-md flex items-center justify-center overflow-hidden flex-shrink-0",
                if let Some(src) = image {
                    img { class: "h-full w-full object-cover", src: "{src}", alt: "{name}" }
                } else {
                    span { "👗" }
                }
            }
            div {
                class: "flex-1 min-w-0",
                Link {
                    to: Route::ProductDetail { product_id: line.product_id.clone() },
                    class: "text-sm font-medium text-gray-900 hover:underline",
                    "{name}"
                }
                if let Some(size) = &line.size {
                    p { class: "text-sm text-gray-500", "Size {size}" }
                }
                p { class: "text-sm text-gray-500", {format_price(unit_price)} }
            }
            // Quantity stepper
            div {
                class: "flex items-center border border-gray-300 rounded-md",
                button {
                    r#type: "button",
                    class: "px-3 py-1 text-gray-600 hover:bg-gray-50",
                    onclick: decrement,
                    "−"
                }
                span { class: "px-3 py-1 text-sm font-medium", "{line.quantity}" }
                button {
                    r#type: "button",
                    class: "px-3 py-1 text-gray-600 hover:bg-gray-50",
                    onclick: increment,
                    "+"
                }
            }
            p {
                class: "w-20 text-right text-sm font-semibold text-gray-900",
                {format_price(unit_price * line.quantity as f64)}
            }
            button {
                r#type: "button",
                class: "text-gray-400 hover:text-red-600",
                onclick: remove,
                "×"
            }
        }
    }
}

fn cart_subtotal(cart: &[CartLine], index: &BTreeMap<String, Product>) -> f64 {
    cart.iter()
        .map(|line| {
            let unit = index.get(&line.product_id).map(|p| p.price).unwrap_or(0.0);
            unit * line.quantity as f64
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::product;

    #[test]
    fn test_cart_subtotal_joins_prices() {
        let mut index = BTreeMap::new();
        index.insert("P1".to_string(), product("P1", "Bomber Jacket"));

        let cart = vec![
            CartLine {
                product_id: "P1".to_string(),
                size: Some("M".to_string()),
                quantity: 3,
            },
            // No catalog entry: contributes nothing rather than panicking
            CartLine {
                product_id: "P2".to_string(),
                size: None,
                quantity: 1,
            },
        ];

        assert_eq!(cart_subtotal(&cart, &index), 30.0);
    }
}
