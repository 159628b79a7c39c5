//! Session-management port

#[cfg(test)]
use mockall::automock;

/// Receives the terminal logout signal. Nothing is returned to the core.
#[cfg_attr(test, automock)]
pub trait SessionManager: Send + Sync {
    fn logout(&self);
}
