use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::trip::{DayPlan, Place, TripPlan};

pub const EXPORT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

pub fn export_file_name(plan: &TripPlan) -> String {
    format!("{}_여행일정.txt", plan.destination)
}

/// Render a plan as the plain-text itinerary offered for download.
///
/// Same plan in, same bytes out. Days go out in ascending index order and
/// places in visit order; optional place fields only emit a line when present.
pub fn export_text(plan: &TripPlan) -> String {
    ExportText(plan).to_string()
}

/// Plain-text itinerary of a plan, written through `fmt::Display`.
pub struct ExportText<'a>(pub &'a TripPlan);

impl fmt::Display for ExportText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;

        writeln!(f, "{} 여행 일정", plan.destination)?;
        if let Some(created_on) = created_on(&plan.created_at) {
            writeln!(f, "생성일: {}", created_on)?;
        }
        writeln!(f, "기간: {}일", plan.duration)?;
        writeln!(f, "총 예산: {}만원", plan.total_budget)?;
        writeln!(f)?;
        writeln!(f, "개요: {}", plan.overview)?;
        writeln!(f)?;

        let mut days: Vec<_> = plan.days.iter().collect();
        days.sort_by_key(|day| day.day);
        for day in days {
            write_day(f, day)?;
        }

        writeln!(f, "=== 여행 팁 ===")?;
        for (index, tip) in plan.tips.iter().enumerate() {
            writeln!(f, "{}. {}", index + 1, tip)?;
        }
        Ok(())
    }
}

fn write_day(f: &mut fmt::Formatter<'_>, day: &DayPlan) -> fmt::Result {
    writeln!(f, "--- {}일차: {} ---", day.day, day.theme)?;
    writeln!(f, "날짜: {}", day.date)?;
    writeln!(f, "예상 비용: {}만원", day.total_budget)?;
    writeln!(f)?;

    for (index, place) in day.places.iter().enumerate() {
        write_place(f, index + 1, place)?;
        writeln!(f)?;
    }

    writeln!(f, "교통: {}", day.transportation)?;
    writeln!(f)
}

fn write_place(f: &mut fmt::Formatter<'_>, position: usize, place: &Place) -> fmt::Result {
    if place.category.is_empty() {
        writeln!(f, "{}. {} ({}분)", position, place.name, place.estimated_time)?;
    } else {
        writeln!(
            f,
            "{}. {} [{}] ({}분)",
            position, place.name, place.category, place.estimated_time
        )?;
    }
    writeln!(f, "   {}", place.description)?;

    if let Some(tips) = place.tips.as_deref().filter(|tips| !tips.trim().is_empty()) {
        writeln!(f, "   💡 {}", tips)?;
    }
    if !place.recommended_items.is_empty() {
        writeln!(f, "   추천: {}", place.recommended_items.join(", "))?;
    }
    if let Some(cost) = &place.cost_estimate {
        writeln!(f, "   비용: {}", cost)?;
    }
    if !place.nearby_places.is_empty() {
        writeln!(f, "   주변: {}", place.nearby_places.join(", "))?;
    }
    Ok(())
}

// Date part of the creation timestamp. Unparseable values are printed as-is
// so the line is never dropped silently.
fn created_on(created_at: &str) -> Option<String> {
    let created_at = created_at.trim();
    if created_at.is_empty() {
        return None;
    }

    let date = DateTime::parse_from_rfc3339(created_at)
        .map(|timestamp| timestamp.date_naive())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(created_at, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|timestamp| timestamp.date())
        })
        .or_else(|_| NaiveDate::parse_from_str(created_at, "%Y-%m-%d"));

    Some(match date {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => created_at.to_string(),
    })
}
