//! Router port (the external routing framework)

#[cfg(test)]
use mockall::automock;

use crate::domain::NavigationIntent;

/// Performs the actual screen transition. Intents arrive one per user interaction.
#[cfg_attr(test, automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, intent: NavigationIntent);
}
