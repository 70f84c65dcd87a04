//! Meal Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One patient's meal request, owned by an [`Ambulance`](super::Ambulance)
///
/// String fields default to empty when absent so that required-field checks
/// report them instead of the JSON parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealOrder {
    #[serde(default)]
    pub id: String,
    /// Patient name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dietary_req: String,
    #[serde(default)]
    pub medical_need: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumation_time: Option<DateTime<Utc>>,
}

impl MealOrder {
    /// First required field that is empty, by its display name
    pub fn missing_required_field(&self) -> Option<&'static str> {
        if self.name.is_empty() {
            Some("Name")
        } else if self.dietary_req.is_empty() {
            Some("Dietary requirement")
        } else if self.medical_need.is_empty() {
            Some("Medical need")
        } else {
            None
        }
    }
}
