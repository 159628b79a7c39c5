// ============================================================================
// Navigation Core - Menu Filter
// File: crates/nav-core/src/services/menu_filter.rs
// Description: Projects the menu graph down to what one role may see
// ============================================================================

use tracing::{debug, warn};

use crate::domain::{has_access_opt, MenuItem, Role};

/// Role-scoped copy of `tree`.
///
/// Items the role is not listed on are dropped. Groups keep only the children
/// the role is listed on, and a group left with no children is dropped even if
/// the role is listed on the group itself. Authoring order is preserved.
pub fn filter_menu(tree: &[MenuItem], role: Role) -> Vec<MenuItem> {
    project(tree, Some(role))
}

/// [`filter_menu`] for a role that may be unrecognized; unknown roles see nothing.
pub fn filter_for_role(tree: &[MenuItem], role: Option<Role>) -> Vec<MenuItem> {
    if role.is_none() {
        warn!("Unrecognized role; menu filtered to empty");
    }
    project(tree, role)
}

fn project(tree: &[MenuItem], role: Option<Role>) -> Vec<MenuItem> {
    tree.iter()
        .filter(|item| has_access_opt(role, &item.roles))
        .filter_map(|item| match &item.children {
            None => Some(item.clone()),
            Some(children) => {
                let visible: Vec<_> = children
                    .iter()
                    .filter(|child| has_access_opt(role, &child.roles))
                    .cloned()
                    .collect();

                if visible.is_empty() {
                    debug!("Dropping group '{}': no visible children", item.label);
                    return None;
                }

                Some(MenuItem {
                    children: Some(visible),
                    ..item.clone()
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{roles, SubMenuItem};

    fn labels(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn test_parent_pass_does_not_imply_children() {
        let tree = vec![MenuItem::group(
            "file",
            "Compliance",
            roles(&Role::ALL),
            vec![
                SubMenuItem::new("Risk Profile", "RiskProfile", roles(&[Role::Client])),
                SubMenuItem::new("Documents", "Documents", roles(&[Role::ServiceProvider])),
            ],
        )];

        let filtered = filter_menu(&tree, Role::Client);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].children().len(), 1);
        assert_eq!(filtered[0].children()[0].label, "Risk Profile");
    }

    #[test]
    fn test_group_without_visible_children_is_dropped() {
        let tree = vec![
            MenuItem::leaf("home", "Dashboard", "Dashboard", roles(&Role::ALL)),
            MenuItem::group(
                "shield",
                "Admin",
                roles(&[Role::Admin, Role::Client]),
                vec![SubMenuItem::new("Payout", "Payout", roles(&[Role::Admin]))],
            ),
        ];

        assert_eq!(labels(&filter_menu(&tree, Role::Client)), vec!["Dashboard"]);
        assert_eq!(labels(&filter_menu(&tree, Role::Admin)), vec!["Dashboard", "Admin"]);
    }

    #[test]
    fn test_empty_children_list_is_dropped() {
        let tree = vec![MenuItem::group("x", "Hollow", roles(&Role::ALL), vec![])];
        assert!(filter_menu(&tree, Role::Admin).is_empty());
    }

    #[test]
    fn test_leaf_kept_as_is() {
        let mut leaf = MenuItem::leaf("bell", "Alerts", "Notifications", roles(&[Role::Client]));
        leaf.params = Some(serde_json::json!({ "unread": true }));
        let filtered = filter_menu(std::slice::from_ref(&leaf), Role::Client);
        assert_eq!(filtered, vec![leaf]);
    }

    #[test]
    fn test_unknown_role_sees_nothing() {
        let tree = vec![MenuItem::leaf("home", "Dashboard", "Dashboard", roles(&Role::ALL))];
        assert!(filter_for_role(&tree, None).is_empty());
        assert_eq!(filter_for_role(&tree, Some(Role::Client)).len(), 1);
    }

    #[test]
    fn test_unknown_role_gets_no_groups() {
        let tree = vec![MenuItem::group(
            "file",
            "Compliance",
            roles(&Role::ALL),
            vec![SubMenuItem::new("Risk Profile", "RiskProfile", roles(&Role::ALL))],
        )];

        assert!(filter_for_role(&tree, None).is_empty());
        assert_eq!(filter_for_role(&tree, Some(Role::Admin)), filter_menu(&tree, Role::Admin));
    }
}
