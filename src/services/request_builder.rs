use std::{collections::BTreeSet, fmt};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    error::TripError,
    models::request::{Companions, TravelStyle, TripRequest},
    services::duration_service::trip_duration,
};

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Destination,
    StartDate,
    EndDate,
    /// Both dates set but the range yields no days.
    DateRange,
    Budget,
    TravelStyle,
    Companions,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::Destination => "destination",
            FormField::StartDate => "start_date",
            FormField::EndDate => "end_date",
            FormField::DateRange => "date_range",
            FormField::Budget => "budget",
            FormField::TravelStyle => "travel_style",
            FormField::Companions => "companions",
        };
        f.write_str(name)
    }
}

/// Partial update of the scalar fields.
///
/// An absent key leaves the field alone, an explicit `null` clears it.
#[derive(Debug, Deserialize, Default)]
pub struct FormUpdate {
    pub destination: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub end_date: Option<Option<NaiveDate>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub budget: Option<Option<u32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub companions: Option<Option<Companions>>,
}

/// Raw selections as the user makes them. `build` turns them into a request.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TripForm {
    destination: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    budget: Option<u32>,
    travel_styles: BTreeSet<TravelStyle>,
    companions: Option<Companions>,
    interests: BTreeSet<String>,
}

impl TripForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
    }

    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
    }

    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.end_date = date;
    }

    pub fn set_budget(&mut self, budget: Option<u32>) {
        self.budget = budget;
    }

    pub fn select_companions(&mut self, companions: Option<Companions>) {
        self.companions = companions;
    }

    /// Returns whether the style is selected afterwards.
    pub fn toggle_travel_style(&mut self, style: TravelStyle) -> bool {
        if !self.travel_styles.remove(&style) {
            self.travel_styles.insert(style);
            return true;
        }
        false
    }

    /// Returns whether the interest is selected afterwards. Blank tags are ignored.
    pub fn toggle_interest(&mut self, interest: &str) -> bool {
        let interest = interest.trim();
        if interest.is_empty() {
            return false;
        }
        if !self.interests.remove(interest) {
            self.interests.insert(interest.to_string());
            return true;
        }
        false
    }

    pub fn apply(&mut self, update: FormUpdate) {
        if let Some(destination) = update.destination {
            self.set_destination(destination);
        }
        if let Some(date) = update.start_date {
            self.set_start_date(date);
        }
        if let Some(date) = update.end_date {
            self.set_end_date(date);
        }
        if let Some(budget) = update.budget {
            self.set_budget(budget);
        }
        if let Some(companions) = update.companions {
            self.select_companions(companions);
        }
    }

    /// Always derived from the current dates, so a cleared date reads as 0.
    pub fn duration(&self) -> u32 {
        trip_duration(self.start_date, self.end_date)
    }

    pub fn travel_styles(&self) -> impl Iterator<Item = &TravelStyle> {
        self.travel_styles.iter()
    }

    pub fn interests(&self) -> impl Iterator<Item = &String> {
        self.interests.iter()
    }

    pub fn missing_fields(&self) -> Vec<FormField> {
        let mut missing = Vec::new();

        if self.destination.trim().is_empty() {
            missing.push(FormField::Destination);
        }
        if self.start_date.is_none() {
            missing.push(FormField::StartDate);
        }
        if self.end_date.is_none() {
            missing.push(FormField::EndDate);
        }
        if self.start_date.is_some() && self.end_date.is_some() && self.duration() == 0 {
            missing.push(FormField::DateRange);
        }
        if !matches!(self.budget, Some(budget) if budget >= 1) {
            missing.push(FormField::Budget);
        }
        if self.travel_styles.is_empty() {
            missing.push(FormField::TravelStyle);
        }
        if self.companions.is_none() {
            missing.push(FormField::Companions);
        }

        missing
    }

    pub fn is_submittable(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn build(&self) -> Result<TripRequest, TripError> {
        let missing = self.missing_fields();
        let (Some(start_date), Some(end_date), Some(budget), Some(companions)) =
            (self.start_date, self.end_date, self.budget, self.companions)
        else {
            return Err(TripError::Validation { missing });
        };
        if !missing.is_empty() {
            return Err(TripError::Validation { missing });
        }

        Ok(TripRequest {
            destination: self.destination.trim().to_string(),
            start_date,
            end_date,
            duration: self.duration(),
            budget,
            travel_style: self.travel_styles.iter().copied().collect(),
            companions,
            interests: self.interests.iter().cloned().collect(),
        })
    }
}
