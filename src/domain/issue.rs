// src/domain/issue.rs
use serde::{Deserialize, Serialize};

/// A resident-submitted report of a problem with waste collection.
///
/// `resolved_by`/`resolved_at` are written when an admin resolves the
/// issue. If an admin later moves the issue back to another status the
/// old resolver fields are left in place rather than cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub description: String,
    pub area: String,
    pub address: String,
    pub reported_by: String,
    /// RFC 3339 timestamp
    pub reported_at: String,
    pub status: IssueStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    Reported,
    InProgress,
    Resolved,
}

impl IssueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Reported => "reported",
            IssueStatus::InProgress => "in-progress",
            IssueStatus::Resolved => "resolved",
        }
    }

    pub fn parse(s: &str) -> Option<IssueStatus> {
        match s {
            "reported" => Some(IssueStatus::Reported),
            "in-progress" => Some(IssueStatus::InProgress),
            "resolved" => Some(IssueStatus::Resolved),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssueStatus::Reported => "Reported",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
        }
    }
}
