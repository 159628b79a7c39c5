//! Ports to the external collaborators

pub mod navigator;
pub mod session;

pub use navigator::Navigator;
pub use session::SessionManager;

#[cfg(test)]
pub use navigator::MockNavigator;
#[cfg(test)]
pub use session::MockSessionManager;
