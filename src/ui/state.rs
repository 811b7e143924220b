// src/ui/state.rs - Application state management and context

use std::sync::Arc;

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::cart::CartMutator;
use crate::catalog::SortBy;
use crate::config::StorefrontConfig;
use crate::session::{SessionProbe, UserRole};
use crate::store::{shared_store, BadgeCounts, SellerCounters};
use crate::ui::Notification;

/// Long-lived service handles shared by every view. Created once when the
/// app mounts; cloning shares the same store and session state.
#[derive(Clone)]
pub struct Services {
    pub api: ApiClient,
    pub cart: CartMutator,
    pub probe: SessionProbe,
    pub store: crate::store::StoreReader,
    pub config: StorefrontConfig,
}

impl Services {
    pub fn from_config(config: StorefrontConfig) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let provider: crate::api::HttpArc = Arc::new(crate::api::native::ReqwestProvider::new());
        #[cfg(target_arch = "wasm32")]
        let provider: crate::api::HttpArc = Arc::new(crate::api::web::FetchProvider::new());

        let api = ApiClient::new(provider, config.api.clone());
        let (writer, reader) = shared_store();

        Self {
            cart: CartMutator::new(api.clone(), writer.clone()),
            probe: SessionProbe::new(api.clone(), writer),
            api,
            store: reader,
            config,
        }
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish()
    }
}

/// Application state context that provides global state to all components
#[derive(Debug, Clone, PartialEq)]
pub struct AppStateContext {
    pub role: UserRole,
    pub badges: BadgeCounts,
    pub seller: Option<SellerCounters>,
    pub search_term: Option<String>,
    pub category: Option<String>,
    pub sort_by: SortBy,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub notifications: Vec<Notification>,
    pub sidebar_collapsed: bool,
    pub mobile_menu_open: bool,
}

impl Default for AppStateContext {
    fn default() -> Self {
        Self {
            role: UserRole::Guest,
            badges: BadgeCounts::default(),
            seller: None,
            search_term: None,
            category: None,
            sort_by: SortBy::default(),
            is_loading: false,
            error_message: None,
            notifications: Vec::new(),
            sidebar_collapsed: false,
            mobile_menu_open: false,
        }
    }
}

/// Actions that can be performed on the application state
#[derive(Debug, Clone)]
pub enum AppAction {
    SetRole(UserRole),
    SetBadges(BadgeCounts),
    SetSeller(Option<SellerCounters>),
    SetSearch(Option<String>),
    SetCategory(Option<String>),
    SetSort(SortBy),
    SetLoading(bool),
    SetError(Option<String>),
    AddNotification(Notification),
    RemoveNotification(uuid::Uuid),
    ClearNotifications,
    ToggleSidebar,
    ToggleMobileMenu,
    SetMobileMenuOpen(bool),
}

/// State reducer function
pub fn app_state_reducer(state: &AppStateContext, action: AppAction) -> AppStateContext {
    let mut new_state = state.clone();

    match action {
        AppAction::SetRole(role) => new_state.role = role,
        AppAction::SetBadges(badges) => new_state.badges = badges,
        AppAction::SetSeller(seller) => new_state.seller = seller,
        AppAction::SetSearch(term) => new_state.search_term = term,
        AppAction::SetCategory(category) => new_state.category = category,
        AppAction::SetSort(sort_by) => new_state.sort_by = sort_by,
        AppAction::SetLoading(loading) => new_state.is_loading = loading,
        AppAction::SetError(error) => new_state.error_message = error,
        AppAction::AddNotification(notification) => new_state.notifications.push(notification),
        AppAction::RemoveNotification(id) => new_state.notifications.retain(|n| n.id != id),
        AppAction::ClearNotifications => new_state.notifications.clear(),
        AppAction::ToggleSidebar => new_state.sidebar_collapsed = !new_state.sidebar_collapsed,
        AppAction::ToggleMobileMenu => new_state.mobile_menu_open = !new_state.mobile_menu_open,
        AppAction::SetMobileMenuOpen(open) => new_state.mobile_menu_open = open,
    }

    new_state
}

/// Application state provider component
#[component]
pub fn AppStateProvider(children: Element) -> Element {
    // The desktop launcher injects a config through the launch context; the
    // web build has no launcher and reads the environment defaults.
    let services = use_context_provider(|| {
        let config = try_consume_context::<StorefrontConfig>()
            .unwrap_or_else(StorefrontConfig::from_env);
        Services::from_config(config)
    });

    // Separate signals for different parts of the state
    let mut role = use_signal(|| UserRole::Guest);
    let mut badges = use_signal(BadgeCounts::default);
    let mut seller = use_signal(|| None::<SellerCounters>);
    let mut search_term = use_signal(|| None::<String>);
    let mut category = use_signal(|| None::<String>);
    let mut sort_by = use_signal(SortBy::default);
    let mut is_loading = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);
    let mut notifications = use_signal(Vec::<Notification>::new);
    let mut sidebar_collapsed = use_signal(|| false);
    let mut mobile_menu_open = use_signal(|| false);

    // State accessor that builds the context from individual signals
    let get_state = use_callback(move |_: ()| AppStateContext {
        role: role(),
        badges: badges(),
        seller: seller(),
        search_term: search_term(),
        category: category(),
        sort_by: sort_by(),
        is_loading: is_loading(),
        error_message: error_message(),
        notifications: notifications(),
        sidebar_collapsed: sidebar_collapsed(),
        mobile_menu_open: mobile_menu_open(),
    });

    // Dispatch function that updates individual signals
    let dispatch = use_callback(move |action: AppAction| match action {
        AppAction::SetRole(new_role) => role.set(new_role),
        AppAction::SetBadges(counts) => badges.set(counts),
        AppAction::SetSeller(counters) => seller.set(counters),
        AppAction::SetSearch(term) => search_term.set(term),
        AppAction::SetCategory(name) => category.set(name),
        AppAction::SetSort(sort) => sort_by.set(sort),
        AppAction::SetLoading(loading) => is_loading.set(loading),
        AppAction::SetError(error) => error_message.set(error),
        AppAction::AddNotification(notification) => {
            let id = notification.id;
            notifications.with_mut(|n| n.push(notification));
            // Toasts expire on their own; the dismiss button just beats the clock.
            spawn(async move {
                crate::ui::sleep_ms(5_000).await;
                notifications.with_mut(|n| n.retain(|toast| toast.id != id));
            });
        }
        AppAction::RemoveNotification(id) => {
            notifications.with_mut(|n| n.retain(|notification| notification.id != id));
        }
        AppAction::ClearNotifications => notifications.set(Vec::new()),
        AppAction::ToggleSidebar => sidebar_collapsed.set(!sidebar_collapsed()),
        AppAction::ToggleMobileMenu => mobile_menu_open.set(!mobile_menu_open()),
        AppAction::SetMobileMenuOpen(open) => mobile_menu_open.set(open),
    });

    use_context_provider(|| get_state);
    use_context_provider(|| dispatch);

    // Probe the session once on mount, then mirror the shared store's
    // counters into the signals for as long as the app lives.
    use_future(move || {
        let probe = services.probe.clone();
        let mut reader = services.store.clone();
        async move {
            match probe.probe().await {
                Ok(resolved) => role.set(resolved),
                Err(error) => {
                    tracing::warn!(%error, "initial session probe failed");
                }
            }
            let snapshot = reader.snapshot();
            badges.set(snapshot.badges);
            seller.set(snapshot.seller);

            while reader.changed().await {
                let snapshot = reader.snapshot();
                badges.set(snapshot.badges);
                seller.set(snapshot.seller);
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Hook to access the current application state
pub fn use_app_state() -> AppStateContext {
    let get_state = use_context::<Callback<(), AppStateContext>>();
    get_state(())
}

/// Hook to dispatch actions to the application state
pub fn use_app_dispatch() -> Callback<AppAction> {
    use_context::<Callback<AppAction>>()
}

/// Hook to access the shared service handles
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Hook that re-probes the session; safe to fire on every route change
pub fn use_session_refresh() -> Callback<()> {
    let services = use_services();
    let dispatch = use_app_dispatch();

    use_callback(move |_| {
        let probe = services.probe.clone();
        let dispatch = dispatch;
        spawn(async move {
            match probe.probe().await {
                Ok(role) => dispatch(AppAction::SetRole(role)),
                Err(error) => {
                    tracing::debug!(%error, "session refresh failed");
                }
            }
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_app_state() {
        let state = AppStateContext::default();
        assert_eq!(state.role, UserRole::Guest);
        assert_eq!(state.badges, BadgeCounts::default());
        assert!(state.seller.is_none());
        assert!(state.search_term.is_none());
        assert!(!state.is_loading);
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_app_state_reducer() {
        let initial_state = AppStateContext::default();

        let new_state = app_state_reducer(&initial_state, AppAction::SetRole(UserRole::Seller));
        assert_eq!(new_state.role, UserRole::Seller);

        let new_state = app_state_reducer(
            &initial_state,
            AppAction::SetBadges(BadgeCounts { cart: 3, wishlist: 1 }),
        );
        assert_eq!(new_state.badges.cart, 3);

        let new_state = app_state_reducer(&initial_state, AppAction::ToggleSidebar);
        assert!(new_state.sidebar_collapsed);
    }

    #[test]
    fn test_search_actions_round_trip() {
        let state = AppStateContext::default();

        let searching =
            app_state_reducer(&state, AppAction::SetSearch(Some("linen".to_string())));
        assert_eq!(searching.search_term.as_deref(), Some("linen"));

        let cleared = app_state_reducer(&searching, AppAction::SetSearch(None));
        assert!(cleared.search_term.is_none());
    }

    #[test]
    fn test_notification_actions() {
        let initial_state = AppStateContext::default();
        let notification = Notification::success("Added to cart");
        let id = notification.id;

        let with_toast =
            app_state_reducer(&initial_state, AppAction::AddNotification(notification));
        assert_eq!(with_toast.notifications.len(), 1);

        let removed = app_state_reducer(&with_toast, AppAction::RemoveNotification(id));
        assert!(removed.notifications.is_empty());
    }
}
