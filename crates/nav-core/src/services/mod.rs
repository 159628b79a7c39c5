//! Navigation services (menu filtering, expansion, tab resolution, shell)

pub mod menu_filter;
pub mod expansion;
pub mod tab_resolver;
pub mod navigation_shell;

pub use menu_filter::{filter_for_role, filter_menu};
pub use expansion::ExpansionState;
pub use tab_resolver::{
    resolve_by_route_name, resolve_component, resolve_label, resolve_tab, resolve_tab_bar,
    resolve_target, FALLBACK_TAB,
};
pub use navigation_shell::{IgnoreReason, NavigationShell, SelectOutcome};
