// ============================================================================
// Navigation Core - Built-in Catalog
// File: crates/nav-core/src/catalog.rs
// Description: Authored menu graph of the wealth-management app
// ============================================================================

use crate::domain::{roles, MenuGraph, MenuItem, Role, SubMenuItem};

/// The default menu graph. Order is authoring order and is kept by the filter.
pub fn default_menu_graph() -> MenuGraph {
    use Role::{Admin, Client, ReferralPartner, ServiceProvider};

    MenuGraph::new(vec![
        MenuItem::leaf("home", "Dashboard", "Dashboard", roles(&Role::ALL)),
        MenuItem::group(
            "shield",
            "Admin",
            roles(&[Admin]),
            vec![
                SubMenuItem::new("Organization Requests", "OrganizationRequests", roles(&[Admin])),
                SubMenuItem::new("Payout", "Payout", roles(&[Admin])),
                SubMenuItem::new("User Management", "UserManagement", roles(&[Admin])),
            ],
        ),
        MenuItem::group(
            "users",
            "People",
            roles(&[Admin, ServiceProvider, ReferralPartner]),
            vec![
                SubMenuItem::new("Clients", "ClientList", roles(&[ServiceProvider, ReferralPartner])),
                SubMenuItem::new("Organizations", "Organizations", roles(&[Admin])),
                SubMenuItem::new("Referrals", "Referrals", roles(&[ReferralPartner])),
            ],
        ),
        MenuItem::group(
            "file-check",
            "Compliance",
            roles(&Role::ALL),
            vec![
                SubMenuItem::new(
                    "Risk Profile",
                    "RiskProfile",
                    roles(&[Client, ServiceProvider, ReferralPartner]),
                ),
                SubMenuItem::new("Documents", "Documents", roles(&[ServiceProvider, ReferralPartner])),
            ],
        ),
        MenuItem::group(
            "briefcase",
            "Backoffice",
            roles(&Role::ALL),
            vec![
                SubMenuItem::new("Payout", "Payout", roles(&[Admin, ReferralPartner])),
                SubMenuItem::new("Support", "Support", roles(&Role::ALL)),
            ],
        ),
    ])
}
