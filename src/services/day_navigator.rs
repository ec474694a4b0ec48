use serde::Serialize;

use crate::models::trip::{DayPlan, Place, TripPlan};

/// Which day is shown in detail and on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayNavigator {
    active_day: u32,
}

impl Default for DayNavigator {
    fn default() -> Self {
        Self { active_day: 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DayResolution<'a> {
    Found(&'a DayPlan),
    NotFound { requested: u32 },
}

impl<'a> DayResolution<'a> {
    pub fn day_plan(&self) -> Option<&'a DayPlan> {
        match self {
            DayResolution::Found(day) => Some(day),
            DayResolution::NotFound { .. } => None,
        }
    }

    /// Places to render. A missing day renders as an empty list.
    pub fn places(&self) -> &'a [Place] {
        match self {
            DayResolution::Found(day) => &day.places,
            DayResolution::NotFound { .. } => &[],
        }
    }
}

impl DayNavigator {
    pub fn active_day(&self) -> u32 {
        self.active_day
    }

    /// No existence check: a day may be picked before its plan arrives.
    pub fn select(&mut self, day: u32) {
        self.active_day = day;
    }

    pub fn resolve<'a>(&self, plan: &'a TripPlan) -> DayResolution<'a> {
        match plan.day(self.active_day) {
            Some(day) => DayResolution::Found(day),
            None => DayResolution::NotFound {
                requested: self.active_day,
            },
        }
    }

    /// Tabs in navigation order.
    pub fn navigable_days(plan: &TripPlan) -> Vec<u32> {
        plan.day_indices()
    }
}
