// src/domain/schedule.rs
use serde::{Deserialize, Serialize};

/// A planned waste-collection event for one area/address/date/time slot.
///
/// Field names follow the persisted JSON blob (camelCase), so records
/// written by this app round-trip losslessly. `collected_by` and
/// `collected_at` are set together when a pickup leaves `scheduled`,
/// and are omitted from the JSON until then.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupSchedule {
    pub id: String,
    pub area: String,
    pub address: String,
    /// ISO date, e.g. "2026-08-11"
    pub date: String,
    /// 24h wall-clock, e.g. "08:00"
    pub time: String,
    pub waste_type: WasteType,
    pub status: PickupStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collected_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collected_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickupStatus {
    Scheduled,
    Collected,
    Missed,
}

impl PickupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PickupStatus::Scheduled => "scheduled",
            PickupStatus::Collected => "collected",
            PickupStatus::Missed => "missed",
        }
    }

    pub fn parse(s: &str) -> Option<PickupStatus> {
        match s {
            "scheduled" => Some(PickupStatus::Scheduled),
            "collected" => Some(PickupStatus::Collected),
            "missed" => Some(PickupStatus::Missed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteType {
    General,
    Recycling,
    Compost,
    Hazardous,
}

/// Fixed display order used by forms and the analytics breakdown.
pub const WASTE_TYPES: [WasteType; 4] = [
    WasteType::General,
    WasteType::Recycling,
    WasteType::Compost,
    WasteType::Hazardous,
];

impl WasteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WasteType::General => "general",
            WasteType::Recycling => "recycling",
            WasteType::Compost => "compost",
            WasteType::Hazardous => "hazardous",
        }
    }

    pub fn parse(s: &str) -> Option<WasteType> {
        match s {
            "general" => Some(WasteType::General),
            "recycling" => Some(WasteType::Recycling),
            "compost" => Some(WasteType::Compost),
            "hazardous" => Some(WasteType::Hazardous),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WasteType::General => "General Waste",
            WasteType::Recycling => "Recycling",
            WasteType::Compost => "Compost",
            WasteType::Hazardous => "Hazardous",
        }
    }
}
