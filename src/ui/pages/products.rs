// src/ui/pages/products.rs - Catalog browsing with search, sort, and paging

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::catalog::{self, CatalogQuery, CatalogView, PaginationMode, Product, ServerPage, SortBy};
use crate::ui::{
    pages::{format_price, EmptyState, PageError, PageSkeleton, PageWrapper},
    router::Route,
    state::{use_app_dispatch, use_app_state, use_services, AppAction},
    Notification,
};

/// Catalog fetch lifecycle. `Failed` keeps the message so the page can show
/// it with zero products and zero counts rather than a stale list.
#[derive(Debug, Clone, PartialEq)]
enum FetchState {
    Loading,
    Loaded(ServerPage),
    Failed(String),
}

/// Catalog browsing page
#[component]
pub fn Products() -> Element {
    let app_state = use_app_state();
    let services = use_services();
    let dispatch = use_app_dispatch();

    let mut page = use_signal(|| 0usize);
    let mut loaded = use_signal(|| FetchState::Loading);
    let mut last_fetch = use_signal(|| None::<CatalogQuery>);
    let mut last_filters = use_signal(|| None::<(Option<String>, Option<String>, SortBy)>);

    let filters = (
        app_state.search_term.clone(),
        app_state.category.clone(),
        app_state.sort_by,
    );
    if last_filters.peek().as_ref() != Some(&filters) {
        last_filters.set(Some(filters.clone()));
        page.set(0);
    }

    let view_query = CatalogQuery::new(services.config.catalog.page_size, app_state.sort_by)
        .with_category(app_state.category.clone())
        .with_search(app_state.search_term.clone())
        .with_page(page());

    // While searching the backend slice stays parked on page 0; paging is
    // resolved locally, so a page change must not refetch.
    let fetch_query = if view_query.is_searching() {
        view_query.clone().with_page(0)
    } else {
        view_query.clone()
    };

    if last_fetch.peek().as_ref() != Some(&fetch_query) {
        last_fetch.set(Some(fetch_query.clone()));
        loaded.set(FetchState::Loading);
        let api = services.api.clone();
        spawn(async move {
            match api.fetch_products(&fetch_query).await {
                Ok(server_page) => loaded.set(FetchState::Loaded(server_page)),
                Err(error) => {
                    tracing::warn!(%error, "catalog fetch failed");
                    loaded.set(FetchState::Failed(error.user_message()));
                }
            }
        });
    }

    let retry = use_callback(move |_: ()| {
        last_fetch.set(None);
        loaded.set(FetchState::Loading);
    });

    let subtitle = match (&app_state.search_term, &app_state.category) {
        (Some(term), _) => Some(format!("Results for \"{}\"", term)),
        (None, Some(category)) => Some(category.clone()),
        (None, None) => Some("The whole collection".to_string()),
    };

    let sort_select = rsx! {
        select {
            class: "border-gray-300 rounded-md text-sm focus:ring-gray-500 focus:border-gray-500",
            value: "{app_state.sort_by.as_param()}",
            onchange: move |event| {
                if let Some(sort) = SortBy::ALL
                    .iter()
                    .find(|s| s.as_param() == event.value())
                {
                    dispatch(AppAction::SetSort(*sort));
                }
            },
            for sort in SortBy::ALL {
                option { value: "{sort.as_param()}", "{sort.label()}" }
            }
        }
    };

    let body = match loaded() {
        FetchState::Loading => rsx! { PageSkeleton {} },
        FetchState::Failed(message) => rsx! {
            PageError { message: message, retry_action: Some(retry) }
        },
        FetchState::Loaded(server_page) => {
            let view = catalog::resolve(&server_page, &view_query);
            rsx! {
                ProductGrid { view: view.clone() }
                Pager { mode: view.mode, on_page: move |p: usize| page.set(p) }
            }
        }
    };

    rsx! {
        PageWrapper {
            title: "Shop".to_string(),
            subtitle: subtitle,
            actions: Some(sort_select),

            ActiveFilters {}
            {body}
        }
    }
}

/// Chips for the active search/category filters
#[component]
fn ActiveFilters() -> Element {
    let app_state = use_app_state();
    let dispatch = use_app_dispatch();

    if app_state.search_term.is_none() && app_state.category.is_none() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "flex flex-wrap gap-2",
            if let Some(term) = app_state.search_term.clone() {
                FilterChip {
                    label: format!("Search: {}", term),
                    on_clear: move |_| dispatch(AppAction::SetSearch(None))
                }
            }
            if let Some(category) = app_state.category.clone() {
                FilterChip {
                    label: category,
                    on_clear: move |_| dispatch(AppAction::SetCategory(None))
                }
            }
        }
    }
}

#[component]
fn FilterChip(label: String, on_clear: Callback<()>) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center rounded-full bg-gray-100 px-3 py-1 text-sm text-gray-700",
            "{label}"
            button {
                r#type: "button",
                class: "ml-2 text-gray-400 hover:text-gray-700",
                onclick: move |_| on_clear.call(()),
                "×"
            }
        }
    }
}

#[component]
fn ProductGrid(view: CatalogView) -> Element {
    if view.products.is_empty() {
        return rsx! {
            EmptyState {
                icon: "🔍".to_string(),
                title: "No products found".to_string(),
                description: "Try a different search or clear the filters.".to_string()
            }
        };
    }

    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
            for product in view.products.clone() {
                ProductCard { key: "{product.id}", product: product }
            }
        }
    }
}

#[component]
fn ProductCard(product: Product) -> Element {
    let services = use_services();
    let dispatch = use_app_dispatch();

    let out_of_stock = product.is_out_of_stock();
    let rating = product.average_rating();
    let image = product.images.first().cloned();
    let wishlisted = services
        .cart
        .snapshot()
        .wishlist_contains(&product.id, None);

    let toggle_wishlist = {
        let cart = services.cart.clone();
        let product_id = product.id.clone();
        move |_| {
            let cart = cart.clone();
            let product_id = product_id.clone();
            let dispatch = dispatch;
            spawn(async move {
                match cart.toggle_wishlist(&product_id, None).await {
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
        div {
            class: "bg-white rounded-lg shadow overflow-hidden group relative",
            button {
                r#type: "button",
                class: format!(
                    "absolute top-2 right-2 z-10 h-8 w-8 rounded-full bg-white shadow flex items-center justify-center {}",
                    if wishlisted { "text-red-500" } else { "text-gray-400 hover:text-red-500" }
                ),
                onclick: toggle_wishlist,
                if wishlisted { "♥" } else { "♡" }
            }
            Link {
                to: Route::ProductDetail { product_id: product.id.clone() },
                div {
                    class: "h-48 bg-gray-100 flex items-center justify-center overflow-hidden",
                    if let Some(src) = image {
                        img {
                            class: "h-full w-full object-cover group-hover:scale-105 transition-transform",
                            src: "{src}",
                            alt: "{product.name}"
                        }
                    } else {
                        span { class: "text-4xl", "👗" }
                    }
                }
                div {
                    class: "p-4",
                    div {
                        class: "flex justify-between items-start",
                        h3 {
                            class: "text-sm font-medium text-gray-900",
                            "{product.name}"
                        }
                        p {
                            class: "text-sm font-semibold text-gray-900",
                            {format_price(product.price)}
                        }
                    }
                    p {
                        class: "mt-1 text-xs text-gray-500",
                        "{product.category.name}"
                    }
                    div {
                        class: "mt-2 flex items-center justify-between text-xs",
                        if rating > 0.0 {
                            span { class: "text-amber-500", {format!("★ {:.1}", rating)} }
                        } else {
                            span { class: "text-gray-400", "No reviews yet" }
                        }
                        if out_of_stock {
                            span {
                                class: "rounded-full bg-red-100 text-red-700 px-2 py-0.5",
                                "Out of stock"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Page controls. Both regimes render the same chrome; only the source of
/// the page count differs, so this branches on the mode tag alone.
#[component]
fn Pager(mode: PaginationMode, on_page: Callback<usize>) -> Element {
    let page = mode.page();
    let total_pages = mode.total_pages();
    let total_count = mode.total_count();

    if total_pages <= 1 {
        return rsx! {};
    }

    let scope_label = match mode {
        PaginationMode::ServerPaged { .. } => format!("{} items", total_count),
        PaginationMode::ClientPaged { .. } => format!("{} matches", total_count),
    };

    rsx! {
        div {
            class: "flex items-center justify-between border-t border-gray-200 pt-4",
            p {
                class: "text-sm text-gray-500",
                "Page {page + 1} of {total_pages} · {scope_label}"
            }
            div {
                class: "flex space-x-2",
                button {
                    r#type: "button",
                    class: "px-3 py-1 border border-gray-300 rounded-md text-sm disabled:opacity-40",
                    disabled: page == 0,
                    onclick: move |_| on_page.call(page.saturating_sub(1)),
                    "Previous"
                }
                button {
                    r#type: "button",
                    class: "px-3 py-1 border border-gray-300 rounded-md text-sm disabled:opacity-40",
                    disabled: page + 1 >= total_pages,
                    onclick: move |_| on_page.call(page + 1),
                    "Next"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_state_transitions() {
        let failed = FetchState::Failed("Please try again".to_string());
        assert_ne!(failed, FetchState::Loading);

        let loaded = FetchState::Loaded(ServerPage {
            products: vec![],
            total_count: 0,
            total_pages: 0,
        });
        assert!(matches!(loaded, FetchState::Loaded(_)));
    }

    #[test]
    fn test_loaded_page_resolves_into_a_view() {
        let server_page = ServerPage {
            products: vec![],
            total_count: 40,
            total_pages: 4,
        };
        let query = CatalogQuery::new(12, SortBy::Popularity).with_page(1);

        let view = catalog::resolve(&server_page, &query);
        assert!(matches!(view.mode, PaginationMode::ServerPaged { .. }));
        assert_eq!(view.mode.total_pages(), 4);
    }

    #[test]
    fn test_search_fetch_query_parks_on_page_zero() {
        let query = CatalogQuery::new(12, SortBy::Popularity)
            .with_search(Some("silk".to_string()))
            .with_page(4);
        let fetch_query = if query.is_searching() {
            query.clone().with_page(0)
        } else {
            query.clone()
        };
        assert_eq!(fetch_query.page, 0);
        assert_eq!(query.page, 4);
    }
}
