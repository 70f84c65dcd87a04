//! Ambulance Model

use serde::{Deserialize, Serialize};

use super::MealOrder;

/// Ambulance document (parent aggregate, stored whole)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ambulance {
    #[serde(default)]
    pub id: String,
    /// Human readable display name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub room_number: String,
    /// Insertion-ordered; ids are unique within the list
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meal_orders: Vec<MealOrder>,
}

impl Ambulance {
    /// Position of the first order with the given id
    pub fn find_order_index(&self, order_id: &str) -> Option<usize> {
        self.meal_orders.iter().position(|o| o.id == order_id)
    }

    /// First order with the given id
    pub fn find_order(&self, order_id: &str) -> Option<&MealOrder> {
        self.meal_orders.iter().find(|o| o.id == order_id)
    }
}
