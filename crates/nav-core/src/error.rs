//! Domain errors

use thiserror::Error;

use crate::domain::Role;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Menu graph parse error: {0}")]
    MenuGraphParse(String),

    #[error("Menu graph IO error: {0}")]
    MenuGraphIo(String),

    #[error("Invalid menu graph: {} issue(s)", .0.len())]
    InvalidMenuGraph(Vec<MenuIssue>),
}

/// A single finding from [`crate::domain::MenuGraph::validate`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuIssue {
    #[error("Menu item '{item}' has neither a path nor children")]
    MissingPath { item: String },

    #[error("Menu group '{item}' has an empty children list")]
    EmptyGroup { item: String },

    #[error("Menu item '{item}' has both a path and children")]
    AmbiguousTarget { item: String },

    #[error("Menu item '{item}' is not visible to any role")]
    EmptyRoles { item: String },

    #[error("Submenu item '{item} > {child}' allows role {role} which its parent does not")]
    ChildRoleNotInParent { item: String, child: String, role: Role },

    #[error("Duplicate top-level label '{label}'")]
    DuplicateLabel { label: String },

    #[error("Menu item '{item}' is invalid: {message}")]
    InvalidField { item: String, message: String },
}
