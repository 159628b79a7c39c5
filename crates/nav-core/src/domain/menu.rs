// ============================================================================
// Navigation Core - Menu Graph
// File: crates/nav-core/src/domain/menu.rs
// Description: Two-level menu tree, JSON loading and startup validation
// ============================================================================

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use validator::Validate;

use super::role::{Role, RoleSet};
use crate::error::{DomainError, MenuIssue};

/// Opaque route identifier understood by the external router
pub type RouteId = String;

/// Top-level menu entry. Either a leaf with a `path` or a group with `children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MenuItem {
    #[validate(length(max = 100, message = "Menu icon too long"))]
    pub icon: String,

    #[validate(length(min = 1, max = 100, message = "Menu label must be between 1 and 100 characters"))]
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255, message = "Menu path must be between 1 and 255 characters"))]
    pub path: Option<RouteId>,

    pub roles: RoleSet,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SubMenuItem>>,
}

/// Submenu entry. Always a navigable leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SubMenuItem {
    #[validate(length(min = 1, max = 100, message = "Submenu label must be between 1 and 100 characters"))]
    pub label: String,

    #[validate(length(min = 1, max = 255, message = "Submenu path must be between 1 and 255 characters"))]
    pub path: RouteId,

    pub roles: RoleSet,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl MenuItem {
    pub fn leaf(icon: &str, label: &str, path: &str, roles: RoleSet) -> Self {
        Self {
            icon: icon.to_string(),
            label: label.to_string(),
            path: Some(path.to_string()),
            roles,
            params: None,
            children: None,
        }
    }

    pub fn group(icon: &str, label: &str, roles: RoleSet, children: Vec<SubMenuItem>) -> Self {
        Self {
            icon: icon.to_string(),
            label: label.to_string(),
            path: None,
            roles,
            params: None,
            children: Some(children),
        }
    }

    /// Grouping node: selecting it toggles expansion instead of navigating
    pub fn is_group(&self) -> bool {
        self.children.is_some()
    }

    pub fn children(&self) -> &[SubMenuItem] {
        self.children.as_deref().unwrap_or_default()
    }

    pub fn child(&self, label: &str) -> Option<&SubMenuItem> {
        self.children().iter().find(|c| c.label == label)
    }
}

impl SubMenuItem {
    pub fn new(label: &str, path: &str, roles: RoleSet) -> Self {
        Self {
            label: label.to_string(),
            path: path.to_string(),
            roles,
            params: None,
        }
    }
}

/// The full authored menu tree, before any role filtering.
///
/// Read-only once built; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuGraph {
    items: Vec<MenuItem>,
}

impl MenuGraph {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn find(&self, label: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.label == label)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|e| DomainError::MenuGraphParse(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DomainError::MenuGraphIo(format!("{}: {}", path.display(), e)))?;
        let graph = Self::from_json_str(&raw)?;
        info!("Loaded menu graph from {} ({} items)", path.display(), graph.items.len());
        Ok(graph)
    }

    /// Every configuration defect in the graph, in authoring order
    pub fn issues(&self) -> Vec<MenuIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for item in &self.items {
            if !seen.insert(item.label.as_str()) {
                issues.push(MenuIssue::DuplicateLabel {
                    label: item.label.clone(),
                });
            }

            if let Err(e) = item.validate() {
                issues.push(MenuIssue::InvalidField {
                    item: item.label.clone(),
                    message: e.to_string(),
                });
            }

            if item.roles.is_empty() {
                issues.push(MenuIssue::EmptyRoles {
                    item: item.label.clone(),
                });
            }

            match (&item.path, &item.children) {
                (None, None) => issues.push(MenuIssue::MissingPath {
                    item: item.label.clone(),
                }),
                (Some(_), Some(_)) => issues.push(MenuIssue::AmbiguousTarget {
                    item: item.label.clone(),
                }),
                _ => {}
            }

            if let Some(children) = &item.children {
                if children.is_empty() {
                    issues.push(MenuIssue::EmptyGroup {
                        item: item.label.clone(),
                    });
                }
                for child in children {
                    issues.extend(child_issues(item, child));
                }
            }
        }

        issues
    }

    /// Startup load: `path` or the built-in catalog, then validation.
    ///
    /// In strict mode any finding fails the load; otherwise findings are logged
    /// and the graph is returned unchanged.
    pub fn load_checked(path: Option<&Path>, strict: bool) -> Result<Self, DomainError> {
        let graph = match path {
            Some(path) => Self::load(path)?,
            None => crate::catalog::default_menu_graph(),
        };

        match graph.validate() {
            Err(DomainError::InvalidMenuGraph(issues)) => {
                for issue in &issues {
                    warn!("Menu graph: {}", issue);
                }
                if strict {
                    return Err(DomainError::InvalidMenuGraph(issues));
                }
                Ok(graph)
            }
            other => other.map(|()| graph),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let issues = self.issues();
        if issues.is_empty() {
            debug!("Menu graph valid ({} items)", self.items.len());
            Ok(())
        } else {
            Err(DomainError::InvalidMenuGraph(issues))
        }
    }
}

fn child_issues(parent: &MenuItem, child: &SubMenuItem) -> Vec<MenuIssue> {
    let mut issues = Vec::new();
    let qualified = format!("{} > {}", parent.label, child.label);

    if let Err(e) = child.validate() {
        issues.push(MenuIssue::InvalidField {
            item: qualified.clone(),
            message: e.to_string(),
        });
    }

    if child.roles.is_empty() {
        issues.push(MenuIssue::EmptyRoles { item: qualified });
    }

    // Parent roles must cover every child role or the child is unreachable.
    let uncovered: Vec<Role> = child.roles.difference(&parent.roles).copied().collect();
    for role in uncovered {
        issues.push(MenuIssue::ChildRoleNotInParent {
            item: parent.label.clone(),
            child: child.label.clone(),
            role,
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::role::roles;

    const SAMPLE: &str = r#"[
        { "icon": "home", "label": "Dashboard", "path": "Dashboard",
          "roles": ["admin", "client"] },
        { "icon": "shield", "label": "Admin", "roles": ["admin"],
          "children": [
            { "label": "Payout", "path": "Payout", "roles": ["admin"],
              "params": { "tab": "pending" } }
          ] }
    ]"#;

    #[test]
    fn test_parse_json_graph() {
        let graph = MenuGraph::from_json_str(SAMPLE).unwrap();
        assert_eq!(graph.items().len(), 2);

        let admin = graph.find("Admin").unwrap();
        assert!(admin.is_group());
        assert!(admin.path.is_none());
        let payout = admin.child("Payout").unwrap();
        assert_eq!(payout.path, "Payout");
        assert_eq!(payout.params, Some(serde_json::json!({ "tab": "pending" })));
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_parse_rejects_unknown_role() {
        let json = r#"[{ "icon": "x", "label": "X", "path": "X", "roles": ["root"] }]"#;
        assert!(matches!(
            MenuGraph::from_json_str(json),
            Err(DomainError::MenuGraphParse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = MenuGraph::load("/nonexistent/menu-graph.json");
        assert!(matches!(result, Err(DomainError::MenuGraphIo(_))));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("menu-graph-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, SAMPLE).unwrap();
        let graph = MenuGraph::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(graph.items()[0].label, "Dashboard");
    }

    const BROKEN: &str = r#"[
        { "icon": "home", "label": "Dashboard", "path": "Dashboard", "roles": ["client"] },
        { "icon": "shield", "label": "Admin", "roles": ["admin"], "children": [] }
    ]"#;

    fn write_fixture(json: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("menu-graph-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_load_checked_strict_rejects_findings() {
        let path = write_fixture(BROKEN);
        let result = MenuGraph::load_checked(Some(path.as_path()), true);
        std::fs::remove_file(&path).unwrap();

        match result {
            Err(DomainError::InvalidMenuGraph(issues)) => {
                assert_eq!(issues, vec![MenuIssue::EmptyGroup { item: "Admin".into() }]);
            }
            other => panic!("expected InvalidMenuGraph, got {:?}", other),
        }
    }

    #[test]
    fn test_load_checked_lenient_keeps_graph() {
        let path = write_fixture(BROKEN);
        let graph = MenuGraph::load_checked(Some(path.as_path()), false).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(graph, MenuGraph::from_json_str(BROKEN).unwrap());
        assert!(graph.find("Admin").unwrap().children().is_empty());
    }

    #[test]
    fn test_load_checked_missing_file() {
        let path = Path::new("/nonexistent/menu-graph.json");
        assert!(matches!(
            MenuGraph::load_checked(Some(path), false),
            Err(DomainError::MenuGraphIo(_))
        ));
    }

    #[test]
    fn test_load_checked_malformed_file() {
        let path = write_fixture("{ not json");
        let result = MenuGraph::load_checked(Some(path.as_path()), false);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(DomainError::MenuGraphParse(_))));
    }

    #[test]
    fn test_load_checked_defaults_to_catalog() {
        let graph = MenuGraph::load_checked(None, true).unwrap();
        assert_eq!(graph, crate::catalog::default_menu_graph());
    }

    #[test]
    fn test_structural_issues() {
        let mut leaf_without_path = MenuItem::leaf("x", "Orphan", "Orphan", roles(&[Role::Admin]));
        leaf_without_path.path = None;

        let mut ambiguous = MenuItem::group(
            "x",
            "Mixed",
            roles(&[Role::Admin]),
            vec![SubMenuItem::new("Child", "Child", roles(&[Role::Admin]))],
        );
        ambiguous.path = Some("Mixed".to_string());

        let graph = MenuGraph::new(vec![
            leaf_without_path,
            ambiguous,
            MenuItem::group("x", "Empty", roles(&[Role::Client]), vec![]),
            MenuItem::leaf("x", "Hidden", "Hidden", RoleSet::new()),
            MenuItem::leaf("x", "Hidden", "Hidden2", roles(&[Role::Client])),
        ]);

        let issues = graph.issues();
        assert!(issues.contains(&MenuIssue::MissingPath { item: "Orphan".into() }));
        assert!(issues.contains(&MenuIssue::AmbiguousTarget { item: "Mixed".into() }));
        assert!(issues.contains(&MenuIssue::EmptyGroup { item: "Empty".into() }));
        assert!(issues.contains(&MenuIssue::EmptyRoles { item: "Hidden".into() }));
        assert!(issues.contains(&MenuIssue::DuplicateLabel { label: "Hidden".into() }));

        match graph.validate() {
            Err(DomainError::InvalidMenuGraph(found)) => assert_eq!(found, issues),
            other => panic!("expected InvalidMenuGraph, got {:?}", other),
        }
    }

    #[test]
    fn test_child_role_must_be_covered_by_parent() {
        let graph = MenuGraph::new(vec![MenuItem::group(
            "users",
            "People",
            roles(&[Role::Admin]),
            vec![SubMenuItem::new(
                "Clients",
                "ClientList",
                roles(&[Role::Admin, Role::ServiceProvider]),
            )],
        )]);

        assert_eq!(
            graph.issues(),
            vec![MenuIssue::ChildRoleNotInParent {
                item: "People".into(),
                child: "Clients".into(),
                role: Role::ServiceProvider,
            }]
        );
    }

    #[test]
    fn test_field_validation() {
        let graph = MenuGraph::new(vec![MenuItem::group(
            "x",
            "",
            roles(&[Role::Admin]),
            vec![SubMenuItem::new("Blank path", "", roles(&[Role::Admin]))],
        )]);

        let invalid: Vec<_> = graph
            .issues()
            .into_iter()
            .filter(|i| matches!(i, MenuIssue::InvalidField { .. }))
            .collect();
        assert_eq!(invalid.len(), 2);
    }
}
