// src/domain/guide.rs
use serde::Deserialize;

/// One category in the static waste-sorting guide.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteGuideItem {
    pub category: String,
    pub items: Vec<String>,
    pub description: String,
    pub disposal_method: String,
}

const WASTE_GUIDE_JSON: &str = include_str!("../../data/waste_guide.json");

/// The guide ships with the binary. A broken fixture is a programmer
/// error, so parsing panics at first use rather than degrading.
pub fn waste_guide_items() -> Vec<WasteGuideItem> {
    serde_json::from_str(WASTE_GUIDE_JSON).expect("data/waste_guide.json is invalid")
}
