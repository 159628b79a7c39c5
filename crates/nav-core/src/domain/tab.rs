//! Tab slots, target screens and resolved tab entries

use serde::{Deserialize, Serialize};

/// Fixed positions in the primary tab bar. Their meaning depends on the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabSlot {
    HomeTab,
    RoleTab1,
    RoleTab2,
    AlertsTab,
    ProfileTab,
}

impl TabSlot {
    /// Tab bar order
    pub const ALL: [TabSlot; 5] = [
        TabSlot::HomeTab,
        TabSlot::RoleTab1,
        TabSlot::RoleTab2,
        TabSlot::AlertsTab,
        TabSlot::ProfileTab,
    ];

    /// Name the router registers the slot under
    pub fn route_name(&self) -> &'static str {
        match self {
            TabSlot::HomeTab => "HomeTab",
            TabSlot::RoleTab1 => "RoleTab1",
            TabSlot::RoleTab2 => "RoleTab2",
            TabSlot::AlertsTab => "AlertsTab",
            TabSlot::ProfileTab => "ProfileTab",
        }
    }

    pub fn from_route_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.route_name() == name)
    }
}

/// Screen a tab or menu leaf ends up on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenRef {
    Dashboard,
    OrganizationRequests,
    MyDocuments,
    ClientList,
    Payout,
    Support,
    Notifications,
    Profile,
}

impl ScreenRef {
    pub fn route_id(&self) -> &'static str {
        match self {
            ScreenRef::Dashboard => "Dashboard",
            ScreenRef::OrganizationRequests => "OrganizationRequests",
            ScreenRef::MyDocuments => "MyDocuments",
            ScreenRef::ClientList => "ClientList",
            ScreenRef::Payout => "Payout",
            ScreenRef::Support => "Support",
            ScreenRef::Notifications => "Notifications",
            ScreenRef::Profile => "Profile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabLabel {
    pub label: &'static str,
    pub icon: &'static str,
}

/// One cell of the resolution table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabTarget {
    pub label: &'static str,
    pub icon: &'static str,
    pub screen: ScreenRef,
}

impl TabTarget {
    pub const fn new(label: &'static str, icon: &'static str, screen: ScreenRef) -> Self {
        Self { label, icon, screen }
    }

    pub fn tab_label(&self) -> TabLabel {
        TabLabel {
            label: self.label,
            icon: self.icon,
        }
    }
}

/// A slot together with what it resolves to for one role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedTab {
    pub slot: TabSlot,
    pub label: &'static str,
    pub icon: &'static str,
    pub screen: ScreenRef,
}

impl ResolvedTab {
    pub fn new(slot: TabSlot, target: TabTarget) -> Self {
        Self {
            slot,
            label: target.label,
            icon: target.icon,
            screen: target.screen,
        }
    }
}
