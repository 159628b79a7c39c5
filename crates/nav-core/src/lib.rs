//! # Navigation Core
//! 
//! Role-gated navigation for the wealth-management app: role model, menu
//! graph and filter, expansion tracking, tab slot resolution and the
//! navigation shell that issues intents to the external router.

pub mod domain;
pub mod services;
pub mod ports;
pub mod catalog;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use catalog::default_menu_graph;
pub use error::{DomainError, MenuIssue};
