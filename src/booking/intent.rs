use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::form::BookingFields;

/// A locally-recorded request to be contacted about a slot. Not a confirmed
/// reservation; nothing is sent anywhere and nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingIntent {
    pub id: Uuid,
    pub turf_id: u32,
    pub name: String,
    pub phone: String,
    pub date: String,
    pub slot: String,
    pub recorded_at: DateTime<Utc>,
}

impl BookingIntent {
    /// Freezes the submitted field values into an intent record.
    pub fn from_fields(turf_id: u32, fields: &BookingFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            turf_id,
            name: fields.name.clone(),
            phone: fields.phone.clone(),
            date: fields.date.clone(),
            slot: fields.slot.clone(),
            recorded_at: Utc::now(),
        }
    }
}
