// src/db/issues.rs
//
// Resident-reported issues over the storage port. One JSON array under
// `eco_issues`, no seed fixture (the list starts empty on first run).

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::db::storage::Storage;
use crate::domain::issue::{Issue, IssueStatus};
use crate::errors::ServerError;

const ISSUES_KEY: &str = "eco_issues";

#[derive(Debug, Clone)]
pub struct NewIssue {
    pub title: String,
    pub description: String,
    pub area: String,
    pub address: String,
    pub reported_by: String,
}

#[derive(Clone)]
pub struct IssueStore {
    storage: Arc<dyn Storage>,
}

impl IssueStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// All issues in insertion order; empty if none were ever reported.
    /// Read failures degrade to an empty list.
    pub fn list(&self) -> Vec<Issue> {
        match self.storage.get(ISSUES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("eco_issues blob is corrupt, treating as empty: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("failed to read eco_issues, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    /// The reporter's own issues, for scoping a resident's view.
    pub fn list_for_reporter(&self, user_id: &str) -> Vec<Issue> {
        self.list()
            .into_iter()
            .filter(|i| i.reported_by == user_id)
            .collect()
    }

    pub fn add(&self, new: NewIssue, now: DateTime<Utc>) -> Result<Issue, ServerError> {
        let mut issues = self.list();

        let record = Issue {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            description: new.description,
            area: new.area,
            address: new.address,
            reported_by: new.reported_by,
            reported_at: now.to_rfc3339(),
            status: IssueStatus::Reported,
            resolved_by: None,
            resolved_at: None,
        };

        issues.push(record.clone());
        self.save(&issues)?;
        Ok(record)
    }

    /// Update an issue's status. Resolver fields are stamped only on a
    /// transition to `resolved`; any other status change leaves a
    /// previously recorded resolver in place.
    pub fn set_status(
        &self,
        id: &str,
        status: IssueStatus,
        actor_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Issue, ServerError> {
        let mut issues = self.list();
        let record = issues
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(ServerError::NotFound)?;

        record.status = status;
        if status == IssueStatus::Resolved {
            record.resolved_by = Some(actor_id.to_string());
            record.resolved_at = Some(now.to_rfc3339());
        }
        let updated = record.clone();

        self.save(&issues)?;
        Ok(updated)
    }

    fn save(&self, issues: &[Issue]) -> Result<(), ServerError> {
        let raw = serde_json::to_string(issues).map_err(|_| ServerError::InternalError)?;
        self.storage.set(ISSUES_KEY, &raw)
    }
}
