// ============================================================================
// Navigation Core - Tab Slot Resolver
// File: crates/nav-core/src/services/tab_resolver.rs
// Description: (slot, role) -> label, icon and screen, table-driven
// ============================================================================

use tracing::debug;

use crate::domain::{ResolvedTab, Role, ScreenRef, TabLabel, TabSlot, TabTarget};

const DASHBOARD: TabTarget = TabTarget::new("Dashboard", "home", ScreenRef::Dashboard);
const ORGANIZATION_REQUESTS: TabTarget = TabTarget::new(
    "Organization Requests",
    "clipboard-list",
    ScreenRef::OrganizationRequests,
);
const MY_DOCUMENTS: TabTarget = TabTarget::new("My Documents", "folder", ScreenRef::MyDocuments);
const CLIENT_LIST: TabTarget = TabTarget::new("Client list", "users", ScreenRef::ClientList);
const PAYOUT: TabTarget = TabTarget::new("Payout", "wallet", ScreenRef::Payout);
const SUPPORT: TabTarget = TabTarget::new("Support", "life-buoy", ScreenRef::Support);
const NOTIFICATIONS: TabTarget = TabTarget::new("Notifications", "bell", ScreenRef::Notifications);
const PROFILE: TabTarget = TabTarget::new("Profile", "user", ScreenRef::Profile);

/// Unrecognized slot names (and role-specific slots for an unknown role)
pub const FALLBACK_TAB: TabTarget = TabTarget::new("", "", ScreenRef::Dashboard);

/// One row per slot, columns in `Role::ALL` order:
/// admin, service_provider, referral_partner, client.
static TAB_TABLE: [[TabTarget; 4]; 5] = [
    // HomeTab
    [DASHBOARD, DASHBOARD, DASHBOARD, DASHBOARD],
    // RoleTab1
    [ORGANIZATION_REQUESTS, CLIENT_LIST, CLIENT_LIST, MY_DOCUMENTS],
    // RoleTab2
    [PAYOUT, SUPPORT, PAYOUT, SUPPORT],
    // AlertsTab
    [NOTIFICATIONS, NOTIFICATIONS, NOTIFICATIONS, NOTIFICATIONS],
    // ProfileTab
    [PROFILE, PROFILE, PROFILE, PROFILE],
];

fn slot_row(slot: TabSlot) -> &'static [TabTarget; 4] {
    match slot {
        TabSlot::HomeTab => &TAB_TABLE[0],
        TabSlot::RoleTab1 => &TAB_TABLE[1],
        TabSlot::RoleTab2 => &TAB_TABLE[2],
        TabSlot::AlertsTab => &TAB_TABLE[3],
        TabSlot::ProfileTab => &TAB_TABLE[4],
    }
}

fn role_column(role: Role) -> usize {
    match role {
        Role::Admin => 0,
        Role::ServiceProvider => 1,
        Role::ReferralPartner => 2,
        Role::Client => 3,
    }
}

/// What `slot` shows for `role`
pub fn resolve_tab(slot: TabSlot, role: Role) -> TabTarget {
    slot_row(slot)[role_column(role)]
}

/// Like [`resolve_tab`], but an unknown role only resolves slots that are the
/// same for every role. Role-specific slots fall back to [`FALLBACK_TAB`].
pub fn resolve_target(slot: TabSlot, role: Option<Role>) -> TabTarget {
    match role {
        Some(role) => resolve_tab(slot, role),
        None => {
            let row = slot_row(slot);
            if row.iter().all(|target| *target == row[0]) {
                row[0]
            } else {
                debug!("Unknown role on {}; using fallback tab", slot.route_name());
                FALLBACK_TAB
            }
        }
    }
}

pub fn resolve_label(slot: TabSlot, role: Option<Role>) -> TabLabel {
    resolve_target(slot, role).tab_label()
}

pub fn resolve_component(slot: TabSlot, role: Option<Role>) -> ScreenRef {
    resolve_target(slot, role).screen
}

/// Resolution by the router's slot name; unrecognized names get [`FALLBACK_TAB`]
pub fn resolve_by_route_name(name: &str, role: Option<Role>) -> TabTarget {
    match TabSlot::from_route_name(name) {
        Some(slot) => resolve_target(slot, role),
        None => {
            debug!("Unrecognized tab slot '{}'; using fallback tab", name);
            FALLBACK_TAB
        }
    }
}

/// The whole tab bar for a role, in slot order
pub fn resolve_tab_bar(role: Option<Role>) -> [ResolvedTab; 5] {
    TabSlot::ALL.map(|slot| ResolvedTab::new(slot, resolve_target(slot, role)))
}
