//! Navigation subscriber trait

use super::NavigationContext;
use crate::error::SyncError;

/// Trait for components that react to committed slide transitions
pub trait NavigationSubscriber: Send + Sync {
    /// Called once per committed transition, after the new slide is in place.
    ///
    /// Errors are logged by the engine and never affect the transition.
    fn on_navigation_change(&self, context: &NavigationContext) -> Result<(), SyncError>;

    /// Name used in log lines
    fn name(&self) -> &str {
        "subscriber"
    }
}
