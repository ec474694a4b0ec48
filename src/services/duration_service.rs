use chrono::NaiveDate;

/// Whole days from `start` to `end`, negative when `end` comes first.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Inclusive trip length in days.
///
/// `0` whenever a date is missing or the range runs backwards, which the form
/// treats as "not submittable" rather than as an error.
pub fn trip_duration(start: Option<NaiveDate>, end: Option<NaiveDate>) -> u32 {
    match (start, end) {
        (Some(start), Some(end)) if end >= start => {
            u32::try_from(days_between(start, end) + 1).unwrap_or(u32::MAX)
        }
        _ => 0,
    }
}
