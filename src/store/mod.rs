// src/store/mod.rs - Process-wide observable counters

//! The badge counters (cart, wishlist) and seller stats are read by several
//! unrelated views: the header, the sidebar, and the landing page. No view
//! owns them. They live here in a single observable container with one write
//! path; only the session probe and the cart mutator hold a writer handle, so
//! independent refetches can never race the counters into divergent values.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Buyer-side badge counters shown in navigation chrome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeCounts {
    pub cart: u32,
    pub wishlist: u32,
}

/// Seller-side counters shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SellerCounters {
    pub total_products: u32,
    pub total_orders: u32,
    pub pending_orders: u32,
    pub monthly_revenue: f64,
}

/// Everything the store holds, cloned out to readers
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StoreSnapshot {
    pub badges: BadgeCounts,
    pub seller: Option<SellerCounters>,
}

/// The only operations that may change the store
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreUpdate {
    /// Absolute badge counts, as reported by the backend
    SetBadges(BadgeCounts),
    /// Relative cart adjustment after an optimistic mutation
    AdjustCart(i32),
    /// Relative wishlist adjustment after an optimistic mutation
    AdjustWishlist(i32),
    SetSeller(SellerCounters),
    /// Logout or role change: drop everything
    Reset,
}

/// Creates the store, returning the single writer and a cloneable reader.
pub fn shared_store() -> (StoreWriter, StoreReader) {
    let (tx, rx) = watch::channel(StoreSnapshot::default());
    (StoreWriter { tx }, StoreReader { rx })
}

/// Write half. Held by the session probe and the cart mutator only.
#[derive(Debug, Clone)]
pub struct StoreWriter {
    tx: watch::Sender<StoreSnapshot>,
}

impl StoreWriter {
    /// Applies one update and notifies every subscriber. The closure runs
    /// under the channel's lock, so an update is never observed half-applied.
    pub fn apply(&self, update: StoreUpdate) {
        self.tx.send_modify(|snapshot| match update {
            StoreUpdate::SetBadges(badges) => snapshot.badges = badges,
            StoreUpdate::AdjustCart(delta) => {
                snapshot.badges.cart = saturating_adjust(snapshot.badges.cart, delta);
            }
            StoreUpdate::AdjustWishlist(delta) => {
                snapshot.badges.wishlist = saturating_adjust(snapshot.badges.wishlist, delta);
            }
            StoreUpdate::SetSeller(counters) => snapshot.seller = Some(counters),
            StoreUpdate::Reset => *snapshot = StoreSnapshot::default(),
        });
    }

    /// A reader sharing this writer's channel
    pub fn reader(&self) -> StoreReader {
        StoreReader {
            rx: self.tx.subscribe(),
        }
    }
}

/// Read half. Cheap to clone; one per interested view.
#[derive(Debug, Clone)]
pub struct StoreReader {
    rx: watch::Receiver<StoreSnapshot>,
}

impl StoreReader {
    pub fn snapshot(&self) -> StoreSnapshot {
        *self.rx.borrow()
    }

    /// Resolves when the snapshot changes. Views loop on this to re-render.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

fn saturating_adjust(value: u32, delta: i32) -> u32 {
    if delta >= 0 {
        value.saturating_add(delta as u32)
    } else {
        value.saturating_sub(delta.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_updates_apply_atomically() {
        let (writer, reader) = shared_store();

        writer.apply(StoreUpdate::SetBadges(BadgeCounts { cart: 2, wishlist: 5 }));
        assert_eq!(
            reader.snapshot().badges,
            BadgeCounts { cart: 2, wishlist: 5 }
        );

        writer.apply(StoreUpdate::AdjustCart(1));
        writer.apply(StoreUpdate::AdjustWishlist(-2));
        let snapshot = reader.snapshot();
        assert_eq!(snapshot.badges.cart, 3);
        assert_eq!(snapshot.badges.wishlist, 3);
    }

    #[test]
    fn test_adjust_saturates_at_zero() {
        let (writer, reader) = shared_store();
        writer.apply(StoreUpdate::AdjustCart(-10));
        assert_eq!(reader.snapshot().badges.cart, 0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let (writer, reader) = shared_store();
        writer.apply(StoreUpdate::SetBadges(BadgeCounts { cart: 4, wishlist: 1 }));
        writer.apply(StoreUpdate::SetSeller(SellerCounters {
            total_products: 7,
            ..Default::default()
        }));

        writer.apply(StoreUpdate::Reset);
        assert_eq!(reader.snapshot(), StoreSnapshot::default());
    }

    #[test]
    fn test_subscribers_see_changes() {
        tokio_test::block_on(async {
            let (writer, reader) = shared_store();
            let mut subscriber = reader.clone();

            writer.apply(StoreUpdate::AdjustCart(1));
            assert!(subscriber.changed().await);
            assert_eq!(subscriber.snapshot().badges.cart, 1);
        });
    }

    #[test]
    fn test_multiple_readers_share_one_snapshot() {
        let (writer, reader) = shared_store();
        let header = reader.clone();
        let sidebar = writer.reader();

        writer.apply(StoreUpdate::SetBadges(BadgeCounts { cart: 9, wishlist: 9 }));
        assert_eq!(header.snapshot(), sidebar.snapshot());
    }
}
