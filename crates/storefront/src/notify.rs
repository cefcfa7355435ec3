//! Toast-style notification surface.
//!
//! Store mutations report outcomes ("Added to cart", "Item already in
//! wishlist") through a [`Notifier`] rather than returning errors -
//! duplicate adds and similar conditions are user notices, not failures.

use std::sync::{Mutex, PoisonError};

/// A user-visible notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    /// The notice text.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Error(message) => message,
        }
    }
}

/// Sink for user-visible success and error notices.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that logs notices through `tracing`.
///
/// The default surface for binaries without a UI toast layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(notice = "success", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!(notice = "error", "{message}");
    }
}

/// Notifier that buffers notices in memory.
///
/// Used by headless callers that present notices themselves, and by
/// tests asserting on the notice stream.
#[derive(Debug, Default)]
pub struct BufferedNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl BufferedNotifier {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return all buffered notices in emission order.
    #[must_use]
    pub fn take(&self) -> Vec<Notice> {
        let mut notices = self.notices.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *notices)
    }

    /// Snapshot the buffered notices without draining them.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for BufferedNotifier {
    fn success(&self, message: &str) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Notice::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Notice::Error(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffered_notifier_records_in_order() {
        let notifier = BufferedNotifier::new();
        notifier.success("Added to cart");
        notifier.error("Item already in wishlist");

        assert_eq!(
            notifier.take(),
            vec![
                Notice::Success("Added to cart".to_string()),
                Notice::Error("Item already in wishlist".to_string()),
            ]
        );
        // Drained
        assert!(notifier.take().is_empty());
    }

    #[test]
    fn test_notices_does_not_drain() {
        let notifier = BufferedNotifier::new();
        notifier.success("Added to wishlist");
        assert_eq!(notifier.notices().len(), 1);
        assert_eq!(notifier.notices().len(), 1);
        assert_eq!(notifier.notices()[0].message(), "Added to wishlist");
    }
}
