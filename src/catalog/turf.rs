use serde::{Deserialize, Serialize};

use super::city::City;

/// A single turf listing. Catalog records are immutable for the process
/// lifetime; nothing is created, mutated, or destroyed at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurfRecord {
    pub id: u32,
    pub name: String,
    pub city: City,
    pub area: String,
    pub description: String,
    pub price_per_hour: u32,
    pub rating: f32,
    pub review_count: u32,
    /// Slot labels in display order. Order is presentation order, not a
    /// chronological guarantee, and duplicates are not structurally prevented.
    pub available_slots: Vec<String>,
    pub capacity: String,
    pub pitch_type: String,
    pub phone: String,
    pub image: String,
}

impl TurfRecord {
    pub fn location(&self) -> String {
        format!("{}, {}", self.area, self.city)
    }

    pub fn offers_slot(&self, slot: &str) -> bool {
        self.available_slots.iter().any(|s| s == slot)
    }
}
