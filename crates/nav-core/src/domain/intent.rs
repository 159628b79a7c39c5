//! Navigation intents handed to the external router

use serde::{Deserialize, Serialize};

use super::menu::{MenuItem, RouteId, SubMenuItem};
use super::tab::ScreenRef;

/// `navigate(route_id, params)` request for the routing framework
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationIntent {
    pub route_id: RouteId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl NavigationIntent {
    pub fn new(route_id: impl Into<RouteId>) -> Self {
        Self {
            route_id: route_id.into(),
            params: None,
        }
    }

    pub fn with_params(mut self, params: Option<serde_json::Value>) -> Self {
        self.params = params;
        self
    }

    /// `None` for grouping items and leaves missing a path
    pub fn for_item(item: &MenuItem) -> Option<Self> {
        if item.is_group() {
            return None;
        }
        item.path
            .as_ref()
            .map(|path| Self::new(path.clone()).with_params(item.params.clone()))
    }

    pub fn for_child(child: &SubMenuItem) -> Self {
        Self::new(child.path.clone()).with_params(child.params.clone())
    }

    pub fn for_screen(screen: ScreenRef) -> Self {
        Self::new(screen.route_id())
    }
}
