// src/ui/router.rs
use crate::session::UserRole;
use crate::ui::{
    layout::Layout,
    pages::{
        Account as AccountPage, Cart as CartPage, Checkout as CheckoutPage, Login as LoginPage,
        NotFound as NotFoundPage, ProductDetail as ProductDetailPage, Products as ProductsPage,
        SellerAnalytics as SellerAnalyticsPage, SellerDashboard as SellerDashboardPage,
        Wishlist as WishlistPage,
    },
    state::use_app_state,
};
use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

#[derive(Clone,Routable,Debug,PartialEq)]
#[rustfmt::skip]
pub enum Route{
    #[route("/login")]
    Login{},
    #[route("/")]
    #[redirect("/products",||Route::Products{})]
    Home{},
    #[route("/products")]
    Products{},
    #[route("/products/:product_id")]
    ProductDetail{product_id:String},
    #[route("/cart")]
    Cart{},
    #[route("/wishlist")]
    Wishlist{},
    #[route("/checkout")]
    Checkout{},
    #[route("/account")]
    Account{},
    #[route("/seller")]
    SellerDashboard{},
    #[route("/seller/analytics")]
    SellerAnalytics{},
    #[route("/:..segments")]
    NotFound{segments:Vec<String>},
}

#[component]
pub fn Login() -> Element {
    rsx! {
        div{
            class:"min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8",
            LoginPage{}
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        Layout{
            ProductsPage{}
        }
    }
}

#[component]
pub fn Products() -> Element {
    rsx! {
        Layout{
            ProductsPage{}
        }
    }
}

#[component]
pub fn ProductDetail(product_id: String) -> Element {
    rsx! {
        Layout{
            key: "{product_id}",
            ProductDetailPage{product_id:product_id}
        }
    }
}

#[component]
pub fn Cart() -> Element {
    rsx! {
        Layout{
            CartPage{}
        }
    }
}

#[component]
pub fn Wishlist() -> Element {
    rsx! {
        Layout{
            WishlistPage{}
        }
    }
}

#[component]
pub fn Checkout() -> Element {
    rsx! {
        Layout{
            CheckoutPage{}
        }
    }
}

#[component]
pub fn Account() -> Element {
    rsx! {
        Layout{
            AccountPage{}
        }
    }
}

#[component]
pub fn SellerDashboard() -> Element {
    rsx! {
        Layout{
            SellerGuard{
                SellerDashboardPage{}
            }
        }
    }
}

#[component]
pub fn SellerAnalytics() -> Element {
    rsx! {
        Layout{
            SellerGuard{
                SellerAnalyticsPage{}
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div{
            class:"min-h-screen flex items-center justify-center bg-gray-50",
            NotFoundPage{path:path}
        }
    }
}

/// Gates seller-only pages on the probed role
#[component]
pub fn SellerGuard(children: Element) -> Element {
    let app_state = use_app_state();

    match app_state.role {
        UserRole::Seller => rsx! {{children}},
        UserRole::Guest => rsx! {
            div{class:"text-center py-12",
                h1{class:"text-2xl font-bold text-gray-900 mb-2","Please log in"}
                p{class:"text-gray-600 mb-6","The seller area needs a seller account."}
                Link{
                    to:Route::Login{},
                    class:"inline-flex items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-gray-900 hover:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-gray-500",
                    "Go to login"
                }
            }
        },
        UserRole::Buyer => rsx! {
            div{class:"text-center py-12",
                h1{class:"text-2xl font-bold text-gray-900 mb-2","Sellers only"}
                p{class:"text-gray-600 mb-6","This page is reserved for seller accounts."}
                Link{
                    to:Route::Products{},
                    class:"inline-flex items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-gray-900 hover:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-gray-500",
                    "Back to shopping"
                }
            }
        },
    }
}

pub mod nav {
    use super::*;

    pub fn is_active_route(current: &Route, target: &Route) -> bool {
        std::mem::discriminant(current) == std::mem::discriminant(target)
    }

    pub fn route_title(route: &Route) -> &'static str {
        match route {
            Route::Login { .. } => "Login",
            Route::Home { .. } => "Home",
            Route::Products { .. } => "Shop",
            Route::ProductDetail { .. } => "Product",
            Route::Cart { .. } => "Cart",
            Route::Wishlist { .. } => "Wishlist",
            Route::Checkout { .. } => "Checkout",
            Route::Account { .. } => "Account",
            Route::SellerDashboard { .. } => "Seller Dashboard",
            Route::SellerAnalytics { .. } => "Sales Analytics",
            Route::NotFound { .. } => "Not Found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_equality() {
        let route1 = Route::Products {};
        let route2 = Route::Products {};
        assert_eq!(route1, route2);
    }

    #[test]
    fn test_route_title() {
        assert_eq!(nav::route_title(&Route::Products {}), "Shop");
        assert_eq!(nav::route_title(&Route::SellerAnalytics {}), "Sales Analytics");
    }

    #[test]
    fn test_active_route_ignores_params() {
        let a = Route::ProductDetail { product_id: "P1".to_string() };
        let b = Route::ProductDetail { product_id: "P2".to_string() };
        assert!(nav::is_active_route(&a, &b));
    }
}
