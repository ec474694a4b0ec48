//! Client for the external itinerary-generation backend.
//!
//! The backend answers `POST /api/generate-trip` and the saved-plan lookups with
//! plans in either of its historical naming conventions; every response goes
//! through the normalizer before it leaves this module.

use std::time::Duration;

use url::Url;

use crate::{
    error::TripError,
    models::{
        request::TripRequest,
        trip::{TripList, TripPlan},
    },
};

/// Where plans come from. Implemented by `GenerationClient`, swapped out in tests.
pub trait TripBackend {
    async fn generate_trip(&self, request: &TripRequest) -> Result<TripPlan, TripError>;
    async fn fetch_trip(&self, trip_id: &str) -> Result<TripPlan, TripError>;
    async fn list_trips(&self, limit: u32, offset: u32) -> Result<TripList, TripError>;
}

/// A trip id travels as one path segment, so it cannot be empty or a dot segment.
pub fn validate_trip_id(trip_id: &str) -> Result<&str, TripError> {
    match trip_id.trim() {
        "" | "." | ".." => Err(TripError::InvalidTripId(trip_id.to_string())),
        _ => Ok(trip_id),
    }
}

pub struct GenerationClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl GenerationClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TripError> {
        // Normalized to a directory so the base reads the same with or without a trailing '/'
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // Base path plus `segments`, each percent-encoded as a single segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url, TripError> {
        let mut endpoint = self.base_url.clone();
        endpoint
            .path_segments_mut()
            .map_err(|_| TripError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(endpoint)
    }

    async fn read_body(response: reqwest::Response) -> Result<String, TripError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::error!("Backend responded {}: {}", status, body);
            return Err(TripError::Generation {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    async fn read_plan(response: reqwest::Response) -> Result<TripPlan, TripError> {
        let body = Self::read_body(response).await?;
        let plan = TripPlan::from_json(&body)?;
        log::info!(
            "Received plan {} for {} ({} days, {} places)",
            plan.id,
            plan.destination,
            plan.days.len(),
            plan.place_count()
        );
        Ok(plan)
    }
}

impl TripBackend for GenerationClient {
    async fn generate_trip(&self, request: &TripRequest) -> Result<TripPlan, TripError> {
        let endpoint = self.endpoint(&["api", "generate-trip"])?;
        log::info!(
            "Requesting {}-day plan for {} from {}",
            request.duration(),
            request.destination(),
            endpoint
        );

        let response = self
            .http_client
            .post(endpoint)
            .json(request)
            .send()
            .await?;

        Self::read_plan(response).await
    }

    async fn fetch_trip(&self, trip_id: &str) -> Result<TripPlan, TripError> {
        let trip_id = validate_trip_id(trip_id)?;
        let endpoint = self.endpoint(&["api", "trips", trip_id])?;
        log::info!("Fetching saved plan from {}", endpoint);

        let response = self.http_client.get(endpoint).send().await?;

        Self::read_plan(response).await
    }

    async fn list_trips(&self, limit: u32, offset: u32) -> Result<TripList, TripError> {
        let mut endpoint = self.endpoint(&["api", "trips"])?;
        endpoint
            .query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());
        log::info!("Listing saved plans from {}", endpoint);

        let response = self.http_client.get(endpoint).send().await?;
        let list = TripList::from_json(&Self::read_body(response).await?)?;
        log::info!("Received {} of {} saved plans", list.trips.len(), list.total);
        Ok(list)
    }
}
