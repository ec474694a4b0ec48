use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

pub mod transforms;
pub mod wire;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A single stop within a day. `name` is the identity key for likes and map labels.
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Place {
    pub name: String,
    pub description: String,
    pub category: String,
    /// Minutes
    pub estimated_time: u32,
    pub coordinates: Option<Coordinates>,
    pub tips: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_items: Vec<String>,
    pub cost_estimate: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nearby_places: Vec<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct DayPlan {
    /// 1-based, unique within a plan.
    pub day: u32,
    pub date: String,
    pub theme: String,
    pub places: Vec<Place>,
    /// 만원
    pub total_budget: u32,
    pub transportation: String,
}

/// Canonical plan. Only ever built by the normalizer in `transforms`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct TripPlan {
    pub id: String,
    pub destination: String,
    pub duration: u32,
    /// 만원
    pub total_budget: u32,
    pub overview: String,
    /// Ascending by `day`.
    pub days: Vec<DayPlan>,
    pub tips: Vec<String>,
    pub created_at: String,
}

/// One page of saved plans.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct TripList {
    pub trips: Vec<TripPlan>,
    pub total: u32,
}

impl TripPlan {
    pub fn day(&self, day: u32) -> Option<&DayPlan> {
        self.days.iter().find(|plan| plan.day == day)
    }

    pub fn day_indices(&self) -> Vec<u32> {
        self.days.iter().map(|plan| plan.day).collect()
    }

    pub fn place_count(&self) -> usize {
        self.days.iter().map(|plan| plan.places.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
