// src/ui/pages/product_detail.rs - Single product view with variant picker

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::catalog::{CatalogQuery, Product, SortBy};
use crate::ui::{
    pages::{format_price, EmptyState, PageError, PageSkeleton, PageWrapper},
    router::Route,
    state::{use_app_dispatch, use_services, AppAction},
    Notification,
};

// The backend has no single-product read for buyers; the detail page pulls a
// wide catalog slice and picks the product out of it.
const LOOKUP_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq)]
enum DetailState {
    Loading,
    Found(Product),
    Missing,
    Failed(String),
}

/// Product detail page
#[component]
pub fn ProductDetail(product_id: String) -> Element {
    let services = use_services();
    let mut state = use_signal(|| DetailState::Loading);

    use_future({
        let api = services.api.clone();
        let product_id = product_id.clone();
        move || {
            let api = api.clone();
            let product_id = product_id.clone();
            async move {
                let query = CatalogQuery::new(LOOKUP_LIMIT, SortBy::Popularity);
                match api.fetch_products(&query).await {
                    Ok(page) => {
                        match page.products.into_iter().find(|p| p.id == product_id) {
                            Some(product) => state.set(DetailState::Found(product)),
                            None => state.set(DetailState::Missing),
                        }
                    }
                    Err(error) => state.set(DetailState::Failed(error.user_message())),
                }
            }
        }
    });

    match state() {
        DetailState::Loading => rsx! { PageSkeleton {} },
        DetailState::Failed(message) => rsx! { PageError { message: message } },
        DetailState::Missing => rsx! {
            EmptyState {
                icon: "🪡".to_string(),
                title: "Product not found".to_string(),
                description: "It may have been sold out and retired.".to_string(),
                action: Some(rsx! {
                    Link {
                        to: Route::Products {},
                        class: "text-sm font-medium text-gray-900 underline",
                        "Back to the collection"
                    }
                })
            }
        },
        DetailState::Found(product) => rsx! { ProductView { product: product } },
    }
}

#[component]
fn ProductView(product: Product) -> Element {
    let services = use_services();
    let dispatch = use_app_dispatch();

    let mut selected_size = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let needs_size = product.requires_variant_selection();
    let out_of_stock = product.is_out_of_stock();
    let selected_stock = product.stock_for(selected_size().as_deref());
    let rating = product.average_rating();
    let image = product.images.first().cloned();

    let add_to_cart = {
        let cart = services.cart.clone();
        let product = product.clone();
        move |_| {
            if busy() {
                return;
            }
            busy.set(true);
            let cart = cart.clone();
            let product = product.clone();
            let size = selected_size();
            let dispatch = dispatch;
            spawn(async move {
                match cart.add_line(&product, size).await {
                    Ok(()) => dispatch(AppAction::AddNotification(Notification::success(
                        "Added to cart",
                    ))),
                    Err(error) => dispatch(AppAction::AddNotification(Notification::error(
                        error.user_message(),
                    ))),
                }
                busy.set(false);
            });
        }
    };

    let toggle_wishlist = {
        let cart = services.cart.clone();
        let product_id = product.id.clone();
        move |_| {
            let cart = cart.clone();
            let product_id = product_id.clone();
            let size = selected_size();
            let dispatch = dispatch;
            spawn(async move {
                match cart.toggle_wishlist(&product_id, size.as_deref()).await {
                    Ok(true) => dispatch(AppAction::AddNotification(Notification::success(
                        "Added to wishlist",
                    ))),
                    Ok(false) => dispatch(AppAction::AddNotification(Notification::info(
                        "Removed from wishlist",
                    ))),
                    Err(error) => dispatch(AppAction::AddNotification(Notification::error(
                        error.user_message(),
                    ))),
                }
            });
        }
    };

    rsx! {
        PageWrapper {
            div {
                class: "grid grid-cols-1 lg:grid-cols-2 gap-8",

                // Image panel
                div {
                    class: "bg-gray-100 rounded-lg h-96 flex items-center justify-center overflow-hidden",
                    if let Some(src) = image {
                        img { class: "h-full w-full object-cover", src: "{src}", alt: "{product.name}" }
                    } else {
                        span { class: "text-6xl", "👗" }
                    }
                }

                // Details panel
                div {
                    class: "space-y-6",
                    div {
                        p { class: "text-sm text-gray-500", "{product.category.name}" }
                        h1 { class: "text-3xl font-bold text-gray-900", "{product.name}" }
                        p { class: "mt-2 text-2xl text-gray-900", {format_price(product.price)} }
                        if rating > 0.0 {
                            p {
                                class: "mt-1 text-sm text-amber-500",
                                {format!("★ {:.1} · {} reviews", rating, product.reviews.len())}
                            }
                        }
                    }

                    p { class: "text-gray-600", "{product.description}" }

                    if needs_size {
                        div {
                            p { class: "text-sm font-medium text-gray-900 mb-2", "Size" }
                            div {
                                class: "flex flex-wrap gap-2",
                                for (label, stock) in product.stock.clone() {
                                    SizeButton {
                                        key: "{label}",
                                        label: label.clone(),
                                        stock: stock,
                                        selected: selected_size().as_deref() == Some(label.as_str()),
                                        on_select: move |chosen: String| selected_size.set(Some(chosen))
                                    }
                                }
                            }
                            if selected_size().is_some() && selected_stock > 0 && selected_stock <= 3 {
                                p {
                                    class: "mt-2 text-sm text-red-600",
                                    "Only {selected_stock} left in this size"
                                }
                            }
                        }
                    }

                    div {
                        class: "flex space-x-3",
                        button {
                            r#type: "button",
                            disabled: out_of_stock || busy(),
                            class: "flex-1 inline-flex justify-center items-center px-6 py-3 border border-transparent text-base font-medium rounded-md shadow-sm text-white bg-gray-900 hover:bg-gray-700 disabled:opacity-40 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-gray-500",
                            onclick: add_to_cart,
                            if out_of_stock { "Out of stock" } else { "Add to cart" }
                        }
                        button {
                            r#type: "button",
                            class: "inline-flex items-center px-4 py-3 border border-gray-300 rounded-md text-gray-500 hover:text-red-500",
                            onclick: toggle_wishlist,
                            "♡"
                        }
                    }

                    if !product.reviews.is_empty() {
                        div {
                            class: "border-t border-gray-200 pt-6",
                            h2 { class: "text-lg font-medium text-gray-900 mb-4", "Reviews" }
                            div {
                                class: "space-y-4",
                                for (index, review) in product.reviews.iter().enumerate() {
                                    div {
                                        key: "{index}",
                                        class: "bg-white rounded-md shadow-sm p-4",
                                        div {
                                            class: "flex justify-between text-sm",
                                            span { class: "font-medium text-gray-900", "{review.author}" }
                                            span { class: "text-amber-500", {format!("★ {}", review.rating)} }
                                        }
                                        p { class: "mt-1 text-sm text-gray-600", "{review.comment}" }
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

#[component]
fn SizeButton(label: String, stock: u32, selected: bool, on_select: Callback<String>) -> Element {
    let chosen = label.clone();
    rsx! {
        button {
            r#type: "button",
            disabled: stock == 0,
            class: format!(
                "px-4 py-2 border rounded-md text-sm font-medium disabled:opacity-40 disabled:line-through {}",
                if selected {
                    "border-gray-900 bg-gray-900 text-white"
                } else {
                    "border-gray-300 text-gray-700 hover:border-gray-500"
                }
            ),
            onclick: move |_| on_select.call(chosen.clone()),
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::product;

    #[test]
    fn test_detail_state_lookup() {
        let p1 = product("P1", "Bomber Jacket");
        let found = vec![p1.clone()]
            .into_iter()
            .find(|p| p.id == "P1")
            .map(DetailState::Found)
            .unwrap_or(DetailState::Missing);
        assert!(matches!(found, DetailState::Found(_)));

        let missing = vec![p1]
            .into_iter()
            .find(|p| p.id == "P2")
            .map(DetailState::Found)
            .unwrap_or(DetailState::Missing);
        assert_eq!(missing, DetailState::Missing);
    }
}
