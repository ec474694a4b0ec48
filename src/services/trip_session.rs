//! The one mutable thing in the client: form state, the current plan and the
//! overlays (active day, likes, map listeners) that sit on top of it.
//!
//! Every route locks the session, runs a synchronous operation and releases it.
//! The only async step, waiting for the backend, happens with the lock released
//! and is bracketed by `begin_*` / `PendingRequest::settle`.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use uuid::Uuid;

use crate::{
    error::TripError,
    models::{
        request::TripRequest,
        trip::{Place, TripPlan},
    },
    services::{
        day_navigator::DayNavigator,
        export_service::{export_file_name, export_text},
        like_tracker::LikeTracker,
        map_sync_service::{MapCommand, MapEvent, MapSize, MapSync, MapUpdate},
        request_builder::{FormField, TripForm},
        share_service::{place_links, share_action, PlaceLinks, ShareAction},
    },
};

pub type SharedSession = Mutex<TripSession>;

pub fn lock_session(session: &SharedSession) -> Result<MutexGuard<'_, TripSession>, TripError> {
    session.lock().map_err(|_| {
        log::error!("Session mutex poisoned");
        TripError::SessionPoisoned
    })
}

/// Identifies which "trip" a request was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(Uuid);

#[derive(Debug, Default)]
pub struct TripSession {
    form: TripForm,
    plan: Option<TripPlan>,
    navigator: DayNavigator,
    likes: LikeTracker,
    map_sync: MapSync,
    in_flight: bool,
    // Replaced on every "new trip"; responses carrying an older one are dropped
    epoch: Uuid,
}

#[derive(Debug, Serialize)]
pub struct FormView<'a> {
    #[serde(flatten)]
    pub form: &'a TripForm,
    pub duration: u32,
    pub missing_fields: Vec<FormField>,
    pub submittable: bool,
    pub in_flight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryAction {
    NewTrip,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TripView<'a> {
    Loaded {
        plan: &'a TripPlan,
        active_day: u32,
        days: Vec<u32>,
        place_count: usize,
        liked: Vec<&'a str>,
    },
    FailedToLoad {
        message: &'static str,
        recovery: RecoveryAction,
    },
}

#[derive(Debug, Serialize)]
pub struct DaySummary<'a> {
    pub day: u32,
    pub date: &'a str,
    pub theme: &'a str,
    pub total_budget: u32,
    pub transportation: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PlaceView<'a> {
    pub position: u32,
    #[serde(flatten)]
    pub place: &'a Place,
    pub liked: bool,
    pub links: PlaceLinks,
}

#[derive(Debug, Serialize)]
pub struct DayView<'a> {
    pub active_day: u32,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<DaySummary<'a>>,
    pub places: Vec<PlaceView<'a>>,
    pub map: MapUpdate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub content: String,
}

impl TripSession {
    pub fn new(map_size: MapSize) -> Self {
        Self {
            map_sync: MapSync::new(map_size),
            epoch: Uuid::new_v4(),
            ..Default::default()
        }
    }

    pub fn form(&self) -> &TripForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TripForm {
        &mut self.form
    }

    pub fn plan(&self) -> Option<&TripPlan> {
        self.plan.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Submission is disabled, not just rejected later, while this is false.
    pub fn can_submit(&self) -> bool {
        !self.in_flight && self.form.is_submittable()
    }

    pub fn form_view(&self) -> FormView<'_> {
        FormView {
            form: &self.form,
            duration: self.form.duration(),
            missing_fields: self.form.missing_fields(),
            submittable: self.can_submit(),
            in_flight: self.in_flight,
        }
    }

    fn reserve(&mut self) -> Result<Ticket, TripError> {
        if self.in_flight {
            return Err(TripError::InFlight);
        }
        self.in_flight = true;
        Ok(Ticket(self.epoch))
    }

    /// Validate the form and mark a request as outstanding.
    pub fn begin_submission(&mut self) -> Result<(Ticket, TripRequest), TripError> {
        if self.in_flight {
            return Err(TripError::InFlight);
        }
        let request = self.form.build()?;
        let ticket = self.reserve()?;
        Ok((ticket, request))
    }

    pub fn begin_lookup(&mut self) -> Result<Ticket, TripError> {
        self.reserve()
    }

    /// Store the outcome of an outstanding request.
    ///
    /// A failure leaves any previous plan untouched. A response for a trip the
    /// user has since abandoned is discarded.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<TripPlan, TripError>,
    ) -> Result<(), TripError> {
        self.in_flight = false;

        if ticket.0 != self.epoch {
            log::warn!("Discarding response for a superseded trip request");
            return Err(TripError::Superseded);
        }

        let plan = result?;
        if plan.is_empty() {
            log::warn!("Plan {} arrived without any days", plan.id);
        }

        // The active day is kept: it may have been picked while the plan was loading
        self.plan = Some(plan);
        self.likes.clear();
        self.map_sync.teardown();
        Ok(())
    }

    fn abandon(&mut self) {
        self.in_flight = false;
    }

    /// Drop the plan and every overlay on it. An outstanding request keeps
    /// running, but its response will be discarded.
    pub fn new_trip(&mut self) {
        self.form = TripForm::new();
        self.plan = None;
        self.navigator = DayNavigator::default();
        self.likes.clear();
        self.map_sync.teardown();
        self.epoch = Uuid::new_v4();
    }

    fn loaded_plan(&self) -> Result<&TripPlan, TripError> {
        self.plan.as_ref().ok_or(TripError::NoPlan)
    }

    pub fn trip_view(&self) -> Result<TripView<'_>, TripError> {
        let plan = self.loaded_plan()?;
        if plan.is_empty() {
            return Ok(TripView::FailedToLoad {
                message: "일정을 불러오지 못했습니다.",
                recovery: RecoveryAction::NewTrip,
            });
        }

        Ok(TripView::Loaded {
            plan,
            active_day: self.navigator.active_day(),
            days: DayNavigator::navigable_days(plan),
            place_count: plan.place_count(),
            liked: self.likes.names(),
        })
    }

    pub fn select_day(&mut self, day: u32) {
        self.navigator.select(day);
    }

    pub fn day_view(&mut self) -> Result<DayView<'_>, TripError> {
        let plan = self.plan.as_ref().ok_or(TripError::NoPlan)?;
        let resolution = self.navigator.resolve(plan);
        let places = resolution.places();
        let map = self.map_sync.sync(places);

        let day = resolution.day_plan().map(|day| DaySummary {
            day: day.day,
            date: &day.date,
            theme: &day.theme,
            total_budget: day.total_budget,
            transportation: &day.transportation,
        });
        let places = places
            .iter()
            .enumerate()
            .map(|(index, place)| PlaceView {
                position: index as u32 + 1,
                place,
                liked: self.likes.is_liked(&place.name),
                links: place_links(&place.name),
            })
            .collect();

        Ok(DayView {
            active_day: self.navigator.active_day(),
            found: day.is_some(),
            day,
            places,
            map,
        })
    }

    pub fn handle_map_event(&mut self, event: MapEvent) -> Option<MapCommand> {
        self.map_sync.handle_event(event)
    }

    pub fn toggle_like(&mut self, name: &str) -> bool {
        self.likes.toggle(name)
    }

    pub fn liked_names(&self) -> Vec<&str> {
        self.likes.names()
    }

    pub fn export(&self) -> Result<ExportFile, TripError> {
        let plan = self.loaded_plan()?;
        Ok(ExportFile {
            file_name: export_file_name(plan),
            content: export_text(plan),
        })
    }

    pub fn share(&self, page_url: &str, native_available: bool) -> Result<ShareAction, TripError> {
        Ok(share_action(self.loaded_plan()?, page_url, native_available))
    }
}

/// An outstanding backend call. Dropping it unsettled (say, the handler future
/// was cancelled) clears the in-flight flag so the form is usable again.
pub struct PendingRequest {
    session: Arc<SharedSession>,
    ticket: Ticket,
    settled: bool,
}

impl PendingRequest {
    pub fn new(session: Arc<SharedSession>, ticket: Ticket) -> Self {
        Self {
            session,
            ticket,
            settled: false,
        }
    }

    pub fn settle(mut self, result: Result<TripPlan, TripError>) -> Result<(), TripError> {
        self.settled = true;
        lock_session(&self.session)?.complete(self.ticket, result)
    }
}

impl Drop for PendingRequest {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        log::warn!("Trip request dropped before its response arrived");
        if let Ok(mut session) = self.session.lock() {
            session.abandon();
        }
    }
}
