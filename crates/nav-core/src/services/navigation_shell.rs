// ============================================================================
// Navigation Core - Navigation Shell
// File: crates/nav-core/src/services/navigation_shell.rs
// Description: Per-screen owner of the filtered menu and its expansion state.
//              Filters once on mount, issues at most one intent per selection,
//              and drops the expansion state when the screen unmounts.
// ============================================================================

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{
    MenuGraph, MenuItem, NavigationIntent, ResolvedTab, Role, SessionContext, TabSlot,
};
use crate::ports::{Navigator, SessionManager};
use crate::services::expansion::ExpansionState;
use crate::services::menu_filter::filter_for_role;
use crate::services::tab_resolver::{resolve_by_route_name, resolve_tab_bar, resolve_target};

/// What a selection did
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectOutcome {
    /// A grouping item was toggled; no navigation happened
    Toggled { key: String, expanded: bool },
    /// One intent was handed to the navigator
    Navigated { intent: NavigationIntent },
    Ignored { reason: IgnoreReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Not part of the filtered menu for this role
    NotVisible,
    /// Leaf without a path (a configuration defect)
    MissingPath,
}

pub struct NavigationShell<N: Navigator, S: SessionManager> {
    navigator: Arc<N>,
    session: Arc<S>,
    context: SessionContext,
    menu: Vec<MenuItem>,
    expansion: ExpansionState,
}

impl<N: Navigator, S: SessionManager> NavigationShell<N, S> {
    /// Mount: filter the graph for the session role, all groups collapsed
    pub fn new(
        context: SessionContext,
        graph: &MenuGraph,
        navigator: Arc<N>,
        session: Arc<S>,
    ) -> Self {
        let menu = filter_for_role(graph.items(), context.role());
        info!(
            "Navigation shell mounted for {} (role: {}, {} menu items)",
            context.user().display_name,
            context.user().role,
            menu.len()
        );

        Self {
            navigator,
            session,
            context,
            menu,
            expansion: ExpansionState::new(),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.context.role()
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Role-filtered menu, in authoring order
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expansion.is_expanded(key)
    }

    pub fn toggle(&mut self, key: &str) -> bool {
        self.expansion.toggle(key)
    }

    pub fn tab_bar(&self) -> [ResolvedTab; 5] {
        resolve_tab_bar(self.role())
    }

    /// Top-level selection: groups toggle, leaves navigate
    pub fn select_item(&mut self, label: &str) -> SelectOutcome {
        let Some(item) = self.menu.iter().find(|i| i.label == label) else {
            warn!("Ignoring selection of '{}': not visible for this session", label);
            return SelectOutcome::Ignored { reason: IgnoreReason::NotVisible };
        };

        if item.is_group() {
            let key = item.label.clone();
            let expanded = self.expansion.toggle(&key);
            return SelectOutcome::Toggled { key, expanded };
        }

        match NavigationIntent::for_item(item) {
            Some(intent) => self.dispatch(intent),
            None => {
                warn!("Ignoring selection of '{}': menu item has no path", label);
                SelectOutcome::Ignored { reason: IgnoreReason::MissingPath }
            }
        }
    }

    /// Submenu selection. Always a navigation; expansion is left alone.
    pub fn select_child(&mut self, parent: &str, child: &str) -> SelectOutcome {
        let found = self
            .menu
            .iter()
            .find(|i| i.label == parent)
            .and_then(|item| item.child(child));

        match found {
            Some(sub) => {
                let intent = NavigationIntent::for_child(sub);
                self.dispatch(intent)
            }
            None => {
                warn!("Ignoring selection of '{} > {}': not visible for this session", parent, child);
                SelectOutcome::Ignored { reason: IgnoreReason::NotVisible }
            }
        }
    }

    pub fn select_tab(&self, slot: TabSlot) -> SelectOutcome {
        let target = resolve_target(slot, self.role());
        self.dispatch(NavigationIntent::for_screen(target.screen))
    }

    /// Tab selection by the router's slot name; unknown names land on the fallback tab
    pub fn select_tab_by_name(&self, name: &str) -> SelectOutcome {
        let target = resolve_by_route_name(name, self.role());
        self.dispatch(NavigationIntent::for_screen(target.screen))
    }

    /// True if a visible menu leaf or a tab of this session targets `route_id`
    pub fn can_navigate(&self, route_id: &str) -> bool {
        let in_menu = self.menu.iter().any(|item| {
            item.path.as_deref() == Some(route_id)
                || item.children().iter().any(|c| c.path == route_id)
        });
        in_menu || self.tab_bar().iter().any(|t| t.screen.route_id() == route_id)
    }

    pub fn logout(&self) {
        info!("Logout requested by {}", self.context.user().display_name);
        self.session.logout();
    }

    fn dispatch(&self, intent: NavigationIntent) -> SelectOutcome {
        info!("Navigating to {}", intent.route_id);
        self.navigator.navigate(intent.clone());
        SelectOutcome::Navigated { intent }
    }
}
