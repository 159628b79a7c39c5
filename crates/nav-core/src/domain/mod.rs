//! # Navigation Core - Domain Module
//! 
//! Roles, the menu graph, tab slots and navigation intents.

pub mod role;
pub mod user;
pub mod menu;
pub mod tab;
pub mod intent;

pub use role::{has_access, has_access_opt, roles, Role, RoleSet};
pub use user::{SessionContext, User};
pub use menu::{MenuGraph, MenuItem, RouteId, SubMenuItem};
pub use tab::{ResolvedTab, ScreenRef, TabLabel, TabSlot, TabTarget};
pub use intent::NavigationIntent;
