// src/cart/mod.rs - Optimistic cart and wishlist mutations

//! Every user-initiated change applies to local state first, then confirms
//! against the backend. Before each optimistic change the mutator captures a
//! pre-image of the affected list; when the backend rejects, the pre-image and
//! the badge adjustment are both restored, so the displayed count never drifts
//! from the displayed lines for longer than the failed round-trip.
//!
//! Quantity changes follow the absolute-value contract: one network call per
//! user action, chosen from increment, decrement, or delete, and no call at
//! all when the target equals the current quantity.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::catalog::Product;
use crate::error::{Error, Result};
use crate::store::{StoreUpdate, StoreWriter};
use crate::types::{ProductId, VariantLabel};

/// One cart entry. At most one line exists per (product, size) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    #[serde(default)]
    pub size: Option<VariantLabel>,
    /// Always >= 1; a would-be zero is a removal
    pub quantity: u32,
}

/// One wishlist entry, either active or parked in "saved for later"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistLine {
    pub product_id: ProductId,
    #[serde(default)]
    pub size: Option<VariantLabel>,
    /// Client-side staging partition; the backend does not know about it
    #[serde(default)]
    pub saved_for_later: bool,
}

/// Buyer-owned list state, shared read-only with the views
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    pub cart: Vec<CartLine>,
    pub wishlist: Vec<WishlistLine>,
}

impl ListState {
    pub fn cart_quantity(&self, product_id: &str, size: Option<&str>) -> u32 {
        self.cart
            .iter()
            .find(|line| line.product_id == product_id && line.size.as_deref() == size)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    pub fn total_cart_items(&self) -> u32 {
        self.cart.iter().map(|line| line.quantity).sum()
    }

    pub fn wishlist_contains(&self, product_id: &str, size: Option<&str>) -> bool {
        self.wishlist
            .iter()
            .any(|line| line.product_id == product_id && line.size.as_deref() == size)
    }

    /// Active wishlist partition
    pub fn wishlist_active(&self) -> Vec<&WishlistLine> {
        self.wishlist.iter().filter(|l| !l.saved_for_later).collect()
    }

    /// Saved-for-later partition
    pub fn wishlist_saved(&self) -> Vec<&WishlistLine> {
        self.wishlist.iter().filter(|l| l.saved_for_later).collect()
    }
}

/// Applies buyer mutations optimistically and reconciles with the backend
#[derive(Clone)]
pub struct CartMutator {
    api: ApiClient,
    store: StoreWriter,
    state: Arc<RwLock<ListState>>,
}

impl std::fmt::Debug for CartMutator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartMutator").finish()
    }
}

impl CartMutator {
    pub fn new(api: ApiClient, store: StoreWriter) -> Self {
        Self {
            api,
            store,
            state: Arc::new(RwLock::new(ListState::default())),
        }
    }

    /// Current lists, cloned out for rendering
    pub fn snapshot(&self) -> ListState {
        self.state.read().clone()
    }

    /// Replaces local state with the backend's, e.g. after login
    pub async fn refresh(&self) -> Result<()> {
        let cart = self.api.cart_items().await?;
        let wishlist = self.api.wishlist_items().await?;

        let mut state = self.state.write();
        state.cart = cart;
        state.wishlist = wishlist;
        Ok(())
    }

    /// Adds one unit of (product, size) to the cart.
    ///
    /// Products with variants require a size up front; that failure never
    /// reaches the network.
    pub async fn add_line(&self, product: &Product, size: Option<String>) -> Result<()> {
        if product.requires_variant_selection() && size.is_none() {
            return Err(Error::validation("size", "Please select a size first").source("cart"));
        }

        let pre_image = self.state.read().cart.clone();

        {
            let mut state = self.state.write();
            match state
                .cart
                .iter_mut()
                .find(|l| l.product_id == product.id && l.size == size)
            {
                Some(line) => line.quantity += 1,
                None => state.cart.push(CartLine {
                    product_id: product.id.clone(),
                    size: size.clone(),
                    quantity: 1,
                }),
            }
        }
        self.store.apply(StoreUpdate::AdjustCart(1));

        match self.api.add_cart_item(&product.id, size.as_deref()).await {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(product = %product.id, "add to cart rejected, rolling back");
                self.state.write().cart = pre_image;
                self.store.apply(StoreUpdate::AdjustCart(-1));
                Err(error)
            }
        }
    }

    /// Sets the absolute quantity for an existing line.
    ///
    /// Issues at most one network call: increment, decrement, or delete when
    /// the target is zero. A target equal to the current quantity is a no-op.
    pub async fn set_quantity(
        &self,
        product_id: &ProductId,
        size: Option<&str>,
        quantity: u32,
    ) -> Result<()> {
        let current = self.state.read().cart_quantity(product_id, size);
        if quantity == current {
            return Ok(());
        }
        if quantity == 0 {
            return self.remove_line(product_id, size).await;
        }
        // No line to set: nothing to adjust, and the badge must not move.
        if current == 0 {
            return Err(
                Error::not_found("cart line", "That item is no longer in your cart")
                    .source("cart"),
            );
        }

        let pre_image = self.state.read().cart.clone();
        let delta = quantity as i64 - current as i64;

        {
            let mut state = self.state.write();
            if let Some(line) = state
                .cart
                .iter_mut()
                .find(|l| l.product_id == *product_id && l.size.as_deref() == size)
            {
                line.quantity = quantity;
            }
        }
        self.store.apply(StoreUpdate::AdjustCart(delta as i32));

        let result = if delta > 0 {
            self.api.increment_cart_item(product_id, size).await
        } else {
            self.api.decrement_cart_item(product_id, size).await
        };

        if let Err(error) = result {
            self.state.write().cart = pre_image;
            self.store.apply(StoreUpdate::AdjustCart(-delta as i32));
            return Err(error);
        }
        Ok(())
    }

    /// Removes a line outright. Rolls back the optimistic removal when the
    /// delete fails.
    pub async fn remove_line(&self, product_id: &ProductId, size: Option<&str>) -> Result<()> {
        let pre_image = self.state.read().cart.clone();
        let removed_quantity = self.state.read().cart_quantity(product_id, size);
        if removed_quantity == 0 {
            return Ok(());
        }

        self.state
            .write()
            .cart
            .retain(|l| !(l.product_id == *product_id && l.size.as_deref() == size));
        self.store
            .apply(StoreUpdate::AdjustCart(-(removed_quantity as i32)));

        match self.api.delete_cart_item(product_id, size).await {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(product = %product_id, "cart delete failed, rolling back");
                self.state.write().cart = pre_image;
                self.store
                    .apply(StoreUpdate::AdjustCart(removed_quantity as i32));
                Err(error)
            }
        }
    }

    /// Adds to the wishlist if absent, removes if present. Returns whether
    /// the product is wishlisted after the toggle.
    pub async fn toggle_wishlist(
        &self,
        product_id: &ProductId,
        size: Option<&str>,
    ) -> Result<bool> {
        if self.state.read().wishlist_contains(product_id, size) {
            self.remove_wishlist(product_id, size).await.map(|_| false)
        } else {
            self.add_wishlist(product_id, size).await.map(|_| true)
        }
    }

    async fn add_wishlist(&self, product_id: &ProductId, size: Option<&str>) -> Result<()> {
        let pre_image = self.state.read().wishlist.clone();

        self.state.write().wishlist.push(WishlistLine {
            product_id: product_id.clone(),
            size: size.map(str::to_string),
            saved_for_later: false,
        });
        self.store.apply(StoreUpdate::AdjustWishlist(1));

        match self.api.add_wishlist_item(product_id, size).await {
            Ok(()) => Ok(()),
            Err(error) => {
                self.state.write().wishlist = pre_image;
                self.store.apply(StoreUpdate::AdjustWishlist(-1));
                Err(error)
            }
        }
    }

    async fn remove_wishlist(&self, product_id: &ProductId, size: Option<&str>) -> Result<()> {
        let pre_image = self.state.read().wishlist.clone();

        self.state
            .write()
            .wishlist
            .retain(|l| !(l.product_id == *product_id && l.size.as_deref() == size));
        self.store.apply(StoreUpdate::AdjustWishlist(-1));

        match self.api.remove_wishlist_item(product_id, size).await {
            Ok(()) => Ok(()),
            Err(error) => {
                self.state.write().wishlist = pre_image;
                self.store.apply(StoreUpdate::AdjustWishlist(1));
                Err(error)
            }
        }
    }

    /// Moves a wishlist line between the active and saved-for-later
    /// partitions. Purely local: the partition is client-side staging and has
    /// no backend representation.
    pub fn move_between_lists(&self, product_id: &ProductId, size: Option<&str>, to_saved: bool) {
        let mut state = self.state.write();
        if let Some(line) = state
            .wishlist
            .iter_mut()
            .find(|l| l.product_id == *product_id && l.size.as_deref() == size)
        {
            line.saved_for_later = to_saved;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{client_with, MockProvider};
    use crate::catalog::test_fixtures::product;
    use crate::store::shared_store;

    use tokio_test::block_on;

    fn mutator(provider: Arc<MockProvider>) -> (CartMutator, crate::store::StoreReader) {
        let (writer, reader) = shared_store();
        (CartMutator::new(client_with(provider), writer), reader)
    }

    #[test]
    fn test_add_to_cart_happy_path() {
        let provider = Arc::new(MockProvider::default());
        let (mutator, reader) = mutator(provider.clone());
        let p1 = product("P1", "Bomber Jacket");

        block_on(async {
            mutator.add_line(&p1, Some("M".to_string())).await.unwrap();
        });

        let state = mutator.snapshot();
        assert_eq!(
            state.cart,
            vec![CartLine {
                product_id: "P1".to_string(),
                size: Some("M".to_string()),
                quantity: 1
            }]
        );
        assert_eq!(provider.request_count(), 1);
        let request = provider.last_request();
        assert_eq!(request.method, "POST");
        assert!(request.url.ends_with("/cart/addItem/P1"));
        assert_eq!(reader.snapshot().badges.cart, 1);
    }

    #[test]
    fn test_add_without_required_size_never_hits_network() {
        let provider = Arc::new(MockProvider::default());
        let (mutator, reader) = mutator(provider.clone());
        let p1 = product("P1", "Bomber Jacket");

        let error = block_on(mutator.add_line(&p1, None)).unwrap_err();
        assert!(matches!(error.kind, crate::error::ErrorKind::Validation { .. }));
        assert_eq!(provider.request_count(), 0);
        assert!(mutator.snapshot().cart.is_empty());
        assert_eq!(reader.snapshot().badges.cart, 0);
    }

    #[test]
    fn test_add_rejection_rolls_back_lines_and_badge() {
        let provider = Arc::new(MockProvider::default());
        provider.push(403, r#"{"success":false,"message":"Insufficient stock"}"#);
        let (mutator, reader) = mutator(provider.clone());
        let p1 = product("P1", "Bomber Jacket");

        let error = block_on(mutator.add_line(&p1, Some("M".to_string()))).unwrap_err();
        assert_eq!(error.user_message(), "Insufficient stock");
        assert!(mutator.snapshot().cart.is_empty());
        assert_eq!(reader.snapshot().badges.cart, 0);
    }

    #[test]
    fn test_set_quantity_is_idempotent() {
        let provider = Arc::new(MockProvider::default());
        let (mutator, _reader) = mutator(provider.clone());
        let p1 = product("P1", "Bomber Jacket");

        block_on(async {
            mutator.add_line(&p1, Some("M".to_string())).await.unwrap();
            mutator
                .set_quantity(&"P1".to_string(), Some("M"), 3)
                .await
                .unwrap();
            // Same target again: no further network mutation.
            mutator
                .set_quantity(&"P1".to_string(), Some("M"), 3)
                .await
                .unwrap();
        });

        // One add plus exactly one increment.
        assert_eq!(provider.request_count(), 2);
        assert_eq!(mutator.snapshot().cart_quantity("P1", Some("M")), 3);
    }

    #[test]
    fn test_set_quantity_picks_one_call_per_action() {
        let provider = Arc::new(MockProvider::default());
        let (mutator, reader) = mutator(provider.clone());
        let p1 = product("P1", "Bomber Jacket");

        block_on(async {
            mutator.add_line(&p1, Some("M".to_string())).await.unwrap();
            mutator
                .set_quantity(&"P1".to_string(), Some("M"), 2)
                .await
                .unwrap();
            assert_eq!(provider.last_request().method, "PATCH");
            assert!(provider.last_request().url.contains("/cart/increment/P1"));

            mutator
                .set_quantity(&"P1".to_string(), Some("M"), 1)
                .await
                .unwrap();
            assert!(provider.last_request().url.contains("/cart/decrement/P1"));
        });

        assert_eq!(reader.snapshot().badges.cart, 1);
    }

    #[test]
    fn test_set_quantity_on_missing_line_leaves_badge_alone() {
        let provider = Arc::new(MockProvider::default());
        let (mutator, reader) = mutator(provider.clone());

        let error = block_on(mutator.set_quantity(&"GHOST".to_string(), None, 3)).unwrap_err();
        assert!(matches!(error.kind, crate::error::ErrorKind::NotFound { .. }));
        assert_eq!(provider.request_count(), 0);
        assert!(mutator.snapshot().cart.is_empty());
        assert_eq!(reader.snapshot().badges.cart, 0);
    }

    #[test]
    fn test_set_quantity_zero_deletes() {
        let provider = Arc::new(MockProvider::default());
        let (mutator, reader) = mutator(provider.clone());
        let p1 = product("P1", "Bomber Jacket");

        block_on(async {
            mutator.add_line(&p1, Some("M".to_string())).await.unwrap();
            mutator
                .set_quantity(&"P1".to_string(), Some("M"), 0)
                .await
                .unwrap();
        });

        assert_eq!(provider.last_request().method, "DELETE");
        assert!(provider.last_request().url.contains("/cart/deleteItem/P1"));
        assert!(mutator.snapshot().cart.is_empty());
        assert_eq!(reader.snapshot().badges.cart, 0);
    }

    #[test]
    fn test_remove_failure_rolls_back() {
        let provider = Arc::new(MockProvider::default());
        provider.push(200, "{}"); // add succeeds
        provider.push_transport_failure(); // delete fails
        let (mutator, reader) = mutator(provider.clone());
        let p1 = product("P1", "Bomber Jacket");

        block_on(async {
            mutator.add_line(&p1, Some("M".to_string())).await.unwrap();
            let error = mutator
                .remove_line(&"P1".to_string(), Some("M"))
                .await
                .unwrap_err();
            assert!(error.is_retryable());
        });

        // The line and the badge both came back.
        assert_eq!(mutator.snapshot().cart_quantity("P1", Some("M")), 1);
        assert_eq!(reader.snapshot().badges.cart, 1);
    }

    #[test]
    fn test_wishlist_toggle_round_trip() {
        let provider = Arc::new(MockProvider::default());
        let (mutator, reader) = mutator(provider.clone());

        block_on(async {
            let now_listed = mutator
                .toggle_wishlist(&"P9".to_string(), Some("S"))
                .await
                .unwrap();
            assert!(now_listed);
            assert_eq!(reader.snapshot().badges.wishlist, 1);

            let now_listed = mutator
                .toggle_wishlist(&"P9".to_string(), Some("S"))
                .await
                .unwrap();
            assert!(!now_listed);
            assert_eq!(reader.snapshot().badges.wishlist, 0);
        });

        assert_eq!(provider.request_count(), 2);
    }

    #[test]
    fn test_move_between_lists_is_local_only() {
        let provider = Arc::new(MockProvider::default());
        let (mutator, reader) = mutator(provider.clone());

        block_on(async {
            mutator
                .toggle_wishlist(&"P9".to_string(), None)
                .await
                .unwrap();
        });
        let before = provider.request_count();

        mutator.move_between_lists(&"P9".to_string(), None, true);
        let state = mutator.snapshot();
        assert_eq!(state.wishlist_saved().len(), 1);
        assert!(state.wishlist_active().is_empty());
        // No network traffic and no badge movement for a partition transfer.
        assert_eq!(provider.request_count(), before);
        assert_eq!(reader.snapshot().badges.wishlist, 1);

        mutator.move_between_lists(&"P9".to_string(), None, false);
        assert_eq!(mutator.snapshot().wishlist_active().len(), 1);
    }

    #[test]
    fn test_duplicate_add_merges_into_one_line() {
        let provider = Arc::new(MockProvider::default());
        let (mutator, _reader) = mutator(provider);
        let p1 = product("P1", "Bomber Jacket");

        block_on(async {
            mutator.add_line(&p1, Some("M".to_string())).await.unwrap();
            mutator.add_line(&p1, Some("M".to_string())).await.unwrap();
            mutator.add_line(&p1, Some("L".to_string())).await.unwrap();
        });

        let state = mutator.snapshot();
        assert_eq!(state.cart.len(), 2);
        assert_eq!(state.cart_quantity("P1", Some("M")), 2);
        assert_eq!(state.cart_quantity("P1", Some("L")), 1);
    }
}
