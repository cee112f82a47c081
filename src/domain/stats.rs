// src/domain/stats.rs

use crate::domain::issue::{Issue, IssueStatus};
use crate::domain::schedule::{PickupSchedule, PickupStatus, WasteType, WASTE_TYPES};

/// Derived analytics over the current store contents. Never persisted,
/// recomputed on demand with a single pass over each collection.
#[derive(Debug)]
pub struct CollectionStats {
    pub collections: StatusCounts,
    pub waste_types: Vec<WasteTypeCount>,
    pub areas: Vec<AreaBreakdown>,
    pub issues: IssueCounts,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub collected: usize,
    pub missed: usize,
    pub scheduled: usize,
}

#[derive(Debug)]
pub struct WasteTypeCount {
    pub waste_type: WasteType,
    pub count: usize,
}

/// Per-area totals with a status split, in first-seen area order.
#[derive(Debug, PartialEq, Eq)]
pub struct AreaBreakdown {
    pub area: String,
    pub total: usize,
    pub collected: usize,
    pub missed: usize,
    pub scheduled: usize,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct IssueCounts {
    pub total: usize,
    pub resolved: usize,
    /// Anything not yet resolved, including in-progress.
    pub pending: usize,
}

pub fn collection_stats(schedules: &[PickupSchedule], issues: &[Issue]) -> CollectionStats {
    let mut collections = StatusCounts::default();
    let mut type_counts = [0usize; WASTE_TYPES.len()];
    let mut areas: Vec<AreaBreakdown> = Vec::new();

    for s in schedules {
        collections.total += 1;
        match s.status {
            PickupStatus::Collected => collections.collected += 1,
            PickupStatus::Missed => collections.missed += 1,
            PickupStatus::Scheduled => collections.scheduled += 1,
        }

        let idx = WASTE_TYPES.iter().position(|t| *t == s.waste_type).unwrap();
        type_counts[idx] += 1;

        let idx = match areas.iter().position(|a| a.area == s.area) {
            Some(i) => i,
            None => {
                areas.push(AreaBreakdown {
                    area: s.area.clone(),
                    total: 0,
                    collected: 0,
                    missed: 0,
                    scheduled: 0,
                });
                areas.len() - 1
            }
        };
        let entry = &mut areas[idx];
        entry.total += 1;
        match s.status {
            PickupStatus::Collected => entry.collected += 1,
            PickupStatus::Missed => entry.missed += 1,
            PickupStatus::Scheduled => entry.scheduled += 1,
        }
    }

    let waste_types = WASTE_TYPES
        .iter()
        .zip(type_counts)
        .map(|(t, count)| WasteTypeCount {
            waste_type: *t,
            count,
        })
        .collect();

    let mut issue_counts = IssueCounts::default();
    for i in issues {
        issue_counts.total += 1;
        if i.status == IssueStatus::Resolved {
            issue_counts.resolved += 1;
        } else {
            issue_counts.pending += 1;
        }
    }

    CollectionStats {
        collections,
        waste_types,
        areas,
        issues: issue_counts,
    }
}
