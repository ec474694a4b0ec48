//! Response shapes as the generation backend actually emits them.
//!
//! Two naming conventions have been in circulation: the legacy camelCase one
//! (`totalBudget`, `createdAt`, `estimatedTime`) and the current snake_case one.
//! Both spellings are captured side by side here and reconciled in `transforms`.
//! Nothing outside the normalizer should read these types.

use serde::{Deserialize, Deserializer};

use super::Coordinates;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawTripPlan {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub destination: String,
    #[serde(deserialize_with = "deserialize_lenient_u32")]
    pub duration: Option<u32>,
    #[serde(deserialize_with = "deserialize_lenient_u32")]
    pub total_budget: Option<u32>,
    #[serde(rename = "totalBudget", deserialize_with = "deserialize_lenient_u32")]
    pub total_budget_legacy: Option<u32>,
    #[serde(deserialize_with = "nullable")]
    pub overview: String,
    #[serde(deserialize_with = "nullable")]
    pub days: Vec<RawDayPlan>,
    #[serde(deserialize_with = "nullable")]
    pub tips: Vec<String>,
    pub created_at: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at_legacy: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawTripList {
    #[serde(deserialize_with = "nullable")]
    pub trips: Vec<RawTripPlan>,
    #[serde(deserialize_with = "deserialize_lenient_u32")]
    pub total: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawDayPlan {
    #[serde(deserialize_with = "deserialize_lenient_u32")]
    pub day: Option<u32>,
    #[serde(deserialize_with = "nullable")]
    pub date: String,
    #[serde(deserialize_with = "nullable")]
    pub theme: String,
    #[serde(deserialize_with = "nullable")]
    pub places: Vec<RawPlace>,
    #[serde(deserialize_with = "deserialize_lenient_u32")]
    pub total_budget: Option<u32>,
    #[serde(rename = "totalBudget", deserialize_with = "deserialize_lenient_u32")]
    pub total_budget_legacy: Option<u32>,
    #[serde(deserialize_with = "nullable")]
    pub transportation: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawPlace {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub category: String,
    #[serde(deserialize_with = "deserialize_lenient_u32")]
    pub estimated_time: Option<u32>,
    #[serde(rename = "estimatedTime", deserialize_with = "deserialize_lenient_u32")]
    pub estimated_time_legacy: Option<u32>,
    #[serde(deserialize_with = "deserialize_lenient_coordinates")]
    pub coordinates: Option<Coordinates>,
    pub tips: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub recommended_items: Vec<String>,
    #[serde(deserialize_with = "deserialize_lenient_text")]
    pub cost_estimate: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub nearby_places: Vec<String>,
    pub image_url: Option<String>,
}

// Treats an explicit `null` like a missing field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_number(value: Option<&serde_json::Value>) -> Option<f64> {
    match value {
        Some(serde_json::Value::Number(n)) => n.as_u64().map(|i| i as f64).or_else(|| n.as_f64()),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite())
}

// Generators emit integers, floats and numeric strings interchangeably.
// Fractions round up, negatives and garbage become absent.
fn deserialize_lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;

    Ok(lenient_number(value.as_ref())
        .filter(|f| *f >= 0.0)
        .map(|f| f.ceil().min(u32::MAX as f64) as u32))
}

// A pair with a missing, non-numeric or out-of-range axis places no marker
fn deserialize_lenient_coordinates<'de, D>(
    deserializer: D,
) -> Result<Option<Coordinates>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    let Some(serde_json::Value::Object(fields)) = value else {
        return Ok(None);
    };

    let lat = lenient_number(fields.get("lat")).filter(|lat| (-90.0..=90.0).contains(lat));
    let lng = lenient_number(fields.get("lng")).filter(|lng| (-180.0..=180.0).contains(lng));

    Ok(lat.zip(lng).map(|(lat, lng)| Coordinates { lat, lng }))
}

fn deserialize_lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        _ => Ok(None),
    }
}
