//! Notifier port: user-facing alerts for failed operator actions.

/// Shows a message the operator must acknowledge.
pub trait Notifier {
    /// Show `message`. May block until the operator dismisses it.
    fn alert(&self, message: &str);
}
