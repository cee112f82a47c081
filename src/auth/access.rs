// src/auth/access.rs
//
// Role-based access decisions. The table is fixed at compile time and
// is not configurable at runtime; the router asks these two questions
// and handles redirects/403s itself. Roles are trusted as given by the
// active session, so none of this is a security boundary.

use crate::domain::user::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewAllSchedules,
    CreateSchedule,
    TransitionSchedule,
    ViewAllIssues,
    CreateIssue,
    ResolveIssue,
    ViewAnalytics,
}

/// Allow/deny for a role/action pair.
///
/// Viewing issues is "allow" for residents even though they only see
/// their own reports; the row-level filter comes from [`issue_scope`].
pub fn can_perform(role: Role, action: Action) -> bool {
    match action {
        Action::ViewAllSchedules => true,
        Action::CreateSchedule => role == Role::Admin,
        Action::TransitionSchedule => matches!(role, Role::Collector | Role::Admin),
        Action::ViewAllIssues => matches!(role, Role::Resident | Role::Admin),
        Action::CreateIssue => role == Role::Resident,
        Action::ResolveIssue => role == Role::Admin,
        Action::ViewAnalytics => role == Role::Admin,
    }
}

/// Row-level visibility for issue list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueScope {
    All,
    OwnOnly,
    Denied,
}

pub fn issue_scope(role: Role) -> IssueScope {
    match role {
        Role::Admin => IssueScope::All,
        Role::Resident => IssueScope::OwnOnly,
        Role::Collector => IssueScope::Denied,
    }
}
