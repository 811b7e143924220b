// src/ui/mod.rs - Storefront UI

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export main app component
pub use app::App;

// Module declarations
pub mod app;
pub mod layout;
pub mod pages;
pub mod router;
pub mod state;

// Re-exports for convenience
pub use layout::*;
pub use router::Route;
pub use state::*;

/// Cross-target sleep for UI tasks such as toast expiry
pub(crate) async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

/// Transient toast shown after a mutation succeeds or fails
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub notification_type: NotificationType,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Notification types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Error,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::with_type(message, NotificationType::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_type(message, NotificationType::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::with_type(message, NotificationType::Info)
    }

    fn with_type(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            notification_type,
            timestamp: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_constructors() {
        let toast = Notification::success("Added to cart");
        assert_eq!(toast.notification_type, NotificationType::Success);
        assert_eq!(toast.message, "Added to cart");

        let toast = Notification::error("Insufficient stock");
        assert_eq!(toast.notification_type, NotificationType::Error);
    }
}
