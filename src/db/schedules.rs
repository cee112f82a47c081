// src/db/schedules.rs
//
// Pickup-schedule lifecycle over the storage port. The whole collection
// lives as one JSON array under `eco_schedules` and is rewritten on
// every mutation, exactly like the browser build of this app did.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::db::storage::Storage;
use crate::domain::schedule::{PickupSchedule, PickupStatus, WasteType};
use crate::errors::ServerError;

const SCHEDULES_KEY: &str = "eco_schedules";
const SEED_JSON: &str = include_str!("../../data/schedules.json");

/// Payload for a new pickup. Id and status are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewSchedule {
    pub area: String,
    pub address: String,
    pub date: String,
    pub time: String,
    pub waste_type: WasteType,
}

#[derive(Clone)]
pub struct ScheduleStore {
    storage: Arc<dyn Storage>,
}

impl ScheduleStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// All schedules in insertion order. On the first call with nothing
    /// persisted the static seed dataset is written out once; after
    /// that this is a plain read. Read failures degrade to an empty
    /// list so a broken blob never takes the UI down.
    pub fn list(&self) -> Vec<PickupSchedule> {
        match self.storage.get(SCHEDULES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("eco_schedules blob is corrupt, treating as empty: {e}");
                    Vec::new()
                }
            },
            Ok(None) => {
                let seed: Vec<PickupSchedule> =
                    serde_json::from_str(SEED_JSON).expect("data/schedules.json is invalid");
                if let Err(e) = self.save(&seed) {
                    log::warn!("failed to persist schedule seed: {e}");
                    return Vec::new();
                }
                seed
            }
            Err(e) => {
                log::warn!("failed to read eco_schedules, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    /// Append a new pickup with a fresh id and `scheduled` status.
    /// Write failures propagate so the caller knows nothing was saved.
    pub fn add(&self, new: NewSchedule) -> Result<PickupSchedule, ServerError> {
        let mut schedules = self.list();

        let record = PickupSchedule {
            id: Uuid::new_v4().to_string(),
            area: new.area,
            address: new.address,
            date: new.date,
            time: new.time,
            waste_type: new.waste_type,
            status: PickupStatus::Scheduled,
            collected_by: None,
            collected_at: None,
        };

        schedules.push(record.clone());
        self.save(&schedules)?;
        Ok(record)
    }

    /// Transition a pickup out of `scheduled`. The target must be
    /// `collected` or `missed`; there is no route back to `scheduled`.
    /// An already-terminal pickup may be overwritten with the other
    /// terminal state, which doubles as an idempotent correction.
    pub fn set_status(
        &self,
        id: &str,
        status: PickupStatus,
        actor_id: &str,
        now: DateTime<Utc>,
    ) -> Result<PickupSchedule, ServerError> {
        if status == PickupStatus::Scheduled {
            return Err(ServerError::BadRequest(
                "a pickup cannot move back to scheduled".into(),
            ));
        }

        let mut schedules = self.list();
        let record = schedules
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(ServerError::NotFound)?;

        record.status = status;
        record.collected_by = Some(actor_id.to_string());
        record.collected_at = Some(now.to_rfc3339());
        let updated = record.clone();

        self.save(&schedules)?;
        Ok(updated)
    }

    fn save(&self, schedules: &[PickupSchedule]) -> Result<(), ServerError> {
        let raw = serde_json::to_string(schedules).map_err(|_| ServerError::InternalError)?;
        self.storage.set(SCHEDULES_KEY, &raw)
    }
}
