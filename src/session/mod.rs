// src/session/mod.rs - Session and identity probing

//! Answers "who is logged in, and as which role", and refreshes the
//! role-dependent counters. The probe runs on route changes and on window
//! focus, so two probes can be in flight at once; each carries a
//! monotonically increasing token and only the latest token is allowed to
//! commit, so a slow stale response can never overwrite state written by a
//! newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::error::Result;
use crate::store::{BadgeCounts, SellerCounters, StoreUpdate, StoreWriter};

/// Who the backend says we are
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserRole {
    #[default]
    Guest,
    Buyer,
    Seller,
}

impl UserRole {
    pub fn is_logged_in(&self) -> bool {
        !matches!(self, Self::Guest)
    }

    pub fn is_seller(&self) -> bool {
        matches!(self, Self::Seller)
    }
}

/// Probes the backend for identity and role-dependent counters
#[derive(Clone)]
pub struct SessionProbe {
    api: ApiClient,
    store: StoreWriter,
    latest_token: Arc<AtomicU64>,
    role: Arc<RwLock<UserRole>>,
}

impl std::fmt::Debug for SessionProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionProbe")
            .field("role", &*self.role.read())
            .finish()
    }
}

impl SessionProbe {
    pub fn new(api: ApiClient, store: StoreWriter) -> Self {
        Self {
            api,
            store,
            latest_token: Arc::new(AtomicU64::new(0)),
            role: Arc::new(RwLock::new(UserRole::Guest)),
        }
    }

    /// Role as of the last committed probe
    pub fn role(&self) -> UserRole {
        *self.role.read()
    }

    /// Runs one full probe: verify the session, fetch the counters for the
    /// resolved role, and commit, unless a newer probe started meanwhile.
    ///
    /// On failure the previously committed state is left untouched.
    pub async fn probe(&self) -> Result<UserRole> {
        let token = self.issue_token();

        let status = self.api.verify_login().await?;
        let role = status.role();

        let update = match role {
            UserRole::Guest => StoreUpdate::Reset,
            UserRole::Buyer => {
                let counts = self.api.counts().await?;
                StoreUpdate::SetBadges(BadgeCounts {
                    cart: counts.cart_length,
                    wishlist: counts.wish_length,
                })
            }
            UserRole::Seller => {
                let stats = self.api.seller_stats().await?;
                StoreUpdate::SetSeller(SellerCounters {
                    total_products: stats.total_products,
                    total_orders: stats.total_orders,
                    pending_orders: stats.pending_orders,
                    monthly_revenue: stats.monthly_revenue,
                })
            }
        };

        if self.commit(token, role, update) {
            tracing::debug!(?role, token, "identity probe committed");
        } else {
            tracing::debug!(token, "identity probe superseded, response discarded");
        }
        Ok(role)
    }

    /// Issues the next probe token. Every probe gets a strictly larger token
    /// than any before it.
    fn issue_token(&self) -> u64 {
        self.latest_token.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Commits a probe outcome if `token` still belongs to the newest probe.
    /// Returns false when the response was superseded and dropped.
    fn commit(&self, token: u64, role: UserRole, update: StoreUpdate) -> bool {
        if self.latest_token.load(Ordering::SeqCst) != token {
            return false;
        }
        *self.role.write() = role;
        self.store.apply(update);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{client_with, MockProvider};
    use crate::store::shared_store;

    use tokio_test::block_on;

    fn probe_with(provider: Arc<MockProvider>) -> (SessionProbe, crate::store::StoreReader) {
        let (writer, reader) = shared_store();
        (SessionProbe::new(client_with(provider), writer), reader)
    }

    #[test]
    fn test_buyer_probe_sets_badges() {
        let provider = Arc::new(MockProvider::default());
        provider.push(200, r#"{"isLoggedIn":true,"userType":"buyer"}"#);
        provider.push(200, r#"{"cart_length":3,"wish_length":7}"#);
        let (probe, reader) = probe_with(provider);

        let role = block_on(probe.probe()).unwrap();
        assert_eq!(role, UserRole::Buyer);
        assert_eq!(probe.role(), UserRole::Buyer);
        assert_eq!(
            reader.snapshot().badges,
            BadgeCounts { cart: 3, wishlist: 7 }
        );
    }

    #[test]
    fn test_seller_probe_sets_counters() {
        let provider = Arc::new(MockProvider::default());
        provider.push(200, r#"{"isLoggedIn":true,"userType":"seller"}"#);
        provider.push(
            200,
            r#"{"totalProducts":12,"totalOrders":40,"pendingOrders":5,"monthlyRevenue":999.5}"#,
        );
        let (probe, reader) = probe_with(provider);

        let role = block_on(probe.probe()).unwrap();
        assert!(role.is_seller());
        let seller = reader.snapshot().seller.unwrap();
        assert_eq!(seller.total_products, 12);
        assert_eq!(seller.pending_orders, 5);
    }

    #[test]
    fn test_guest_probe_resets_store() {
        let provider = Arc::new(MockProvider::default());
        provider.push(200, r#"{"isLoggedIn":false}"#);
        let (probe, reader) = probe_with(provider);

        let role = block_on(probe.probe()).unwrap();
        assert_eq!(role, UserRole::Guest);
        assert!(!role.is_logged_in());
        assert_eq!(reader.snapshot().badges, BadgeCounts::default());
    }

    #[test]
    fn test_failed_probe_leaves_state_untouched() {
        let provider = Arc::new(MockProvider::default());
        provider.push(200, r#"{"isLoggedIn":true,"userType":"buyer"}"#);
        provider.push(200, r#"{"cart_length":3,"wish_length":7}"#);
        provider.push_transport_failure();
        let (probe, reader) = probe_with(provider);

        block_on(probe.probe()).unwrap();
        let error = block_on(probe.probe()).unwrap_err();
        assert!(error.is_retryable());

        // The committed buyer state from the first probe survives.
        assert_eq!(probe.role(), UserRole::Buyer);
        assert_eq!(reader.snapshot().badges.cart, 3);
    }

    #[test]
    fn test_superseded_response_is_discarded() {
        let provider = Arc::new(MockProvider::default());
        let (probe, reader) = probe_with(provider);

        // Probe A starts first, probe B starts later; B's response lands
        // first and commits.
        let token_a = probe.issue_token();
        let token_b = probe.issue_token();

        assert!(probe.commit(
            token_b,
            UserRole::Buyer,
            StoreUpdate::SetBadges(BadgeCounts { cart: 2, wishlist: 2 }),
        ));

        // A's late response must not overwrite B's.
        assert!(!probe.commit(
            token_a,
            UserRole::Guest,
            StoreUpdate::Reset,
        ));

        assert_eq!(probe.role(), UserRole::Buyer);
        assert_eq!(reader.snapshot().badges.cart, 2);
    }

    #[test]
    fn test_tokens_increase_monotonically() {
        let provider = Arc::new(MockProvider::default());
        let (probe, _reader) = probe_with(provider);

        let a = probe.issue_token();
        let b = probe.issue_token();
        let c = probe.issue_token();
        assert!(a < b && b < c);
    }
}
