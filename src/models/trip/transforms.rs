use std::collections::BTreeSet;

use super::{
    wire::{RawDayPlan, RawPlace, RawTripList, RawTripPlan},
    DayPlan, Place, TripList, TripPlan,
};

/// Canonical spelling wins, then the legacy alias, then absent.
fn resolve_alias<T>(canonical: Option<T>, legacy: Option<T>) -> Option<T> {
    canonical.or(legacy)
}

impl RawTripPlan {
    /// Collapse either wire convention into the canonical plan.
    ///
    /// Total: every structurally valid payload yields a plan. Days are ordered by
    /// index and a day whose index is 0 or already taken is dropped, since the
    /// navigator keys on it.
    pub fn normalize(self) -> TripPlan {
        let mut seen = BTreeSet::new();
        let mut days: Vec<DayPlan> = self
            .days
            .into_iter()
            .map(RawDayPlan::normalize)
            .filter(|day| {
                if day.day == 0 {
                    log::warn!("Dropping day without a valid index: {:?}", day.theme);
                    false
                } else if !seen.insert(day.day) {
                    log::warn!("Dropping repeated day index {}", day.day);
                    false
                } else {
                    true
                }
            })
            .collect();
        days.sort_by_key(|day| day.day);

        TripPlan {
            id: self.id,
            destination: self.destination,
            duration: self.duration.unwrap_or(days.len() as u32),
            total_budget: resolve_alias(self.total_budget, self.total_budget_legacy)
                .unwrap_or_default(),
            overview: self.overview,
            days,
            tips: self.tips,
            created_at: resolve_alias(self.created_at, self.created_at_legacy)
                .unwrap_or_default(),
        }
    }
}

impl RawDayPlan {
    pub fn normalize(self) -> DayPlan {
        DayPlan {
            day: self.day.unwrap_or_default(),
            date: self.date,
            theme: self.theme,
            places: self.places.into_iter().map(RawPlace::normalize).collect(),
            total_budget: resolve_alias(self.total_budget, self.total_budget_legacy)
                .unwrap_or_default(),
            transportation: self.transportation,
        }
    }
}

impl RawPlace {
    pub fn normalize(self) -> Place {
        Place {
            name: self.name,
            description: self.description,
            category: self.category,
            estimated_time: resolve_alias(self.estimated_time, self.estimated_time_legacy)
                .unwrap_or_default(),
            coordinates: self.coordinates,
            tips: self.tips,
            recommended_items: self.recommended_items,
            cost_estimate: self.cost_estimate,
            nearby_places: self.nearby_places,
            image_url: self.image_url,
        }
    }
}

impl TripPlan {
    /// Decode a backend payload in either naming convention.
    pub fn from_json(body: &str) -> Result<TripPlan, serde_json::Error> {
        serde_json::from_str::<RawTripPlan>(body).map(RawTripPlan::normalize)
    }

    pub fn from_value(value: serde_json::Value) -> Result<TripPlan, serde_json::Error> {
        serde_json::from_value::<RawTripPlan>(value).map(RawTripPlan::normalize)
    }
}

impl RawTripList {
    /// `total` falls back to the page length when the backend leaves it out.
    pub fn normalize(self) -> TripList {
        let trips: Vec<TripPlan> = self.trips.into_iter().map(RawTripPlan::normalize).collect();
        let total = self.total.unwrap_or(trips.len() as u32);
        TripList { trips, total }
    }
}

impl TripList {
    pub fn from_json(body: &str) -> Result<TripList, serde_json::Error> {
        serde_json::from_str::<RawTripList>(body).map(RawTripList::normalize)
    }

    pub fn from_value(value: serde_json::Value) -> Result<TripList, serde_json::Error> {
        serde_json::from_value::<RawTripList>(value).map(RawTripList::normalize)
    }
}
