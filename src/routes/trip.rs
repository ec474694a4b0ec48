use actix_web::{
    http::header::{Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue},
    web, HttpResponse, Responder,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::AppConfig,
    error::TripError,
    services::{
        export_service::EXPORT_CONTENT_TYPE,
        generation_client::{validate_trip_id, TripBackend},
        map_sync_service::{MapConfig, MapEvent},
        share_service::{record_share_outcome, ShareOutcome},
        trip_session::{lock_session, PendingRequest, SharedSession},
    },
};

/*
    POST /api/trip
*/
pub async fn submit<B: TripBackend + 'static>(
    backend: web::Data<B>,
    session: web::Data<SharedSession>,
) -> Result<HttpResponse, TripError> {
    let (ticket, request) = lock_session(&session)?.begin_submission()?;
    let pending = PendingRequest::new(session.clone().into_inner(), ticket);

    let result = backend.generate_trip(&request).await;
    pending.settle(result)?;

    let guard = lock_session(&session)?;
    Ok(HttpResponse::Ok().json(guard.trip_view()?))
}

/*
    POST /api/trip/load/{id}
*/
pub async fn load<B: TripBackend + 'static>(
    backend: web::Data<B>,
    session: web::Data<SharedSession>,
    path: web::Path<String>,
) -> Result<HttpResponse, TripError> {
    let trip_id = path.into_inner();
    validate_trip_id(&trip_id)?;
    let ticket = lock_session(&session)?.begin_lookup()?;
    let pending = PendingRequest::new(session.clone().into_inner(), ticket);

    let result = backend.fetch_trip(&trip_id).await;
    pending.settle(result)?;

    let guard = lock_session(&session)?;
    Ok(HttpResponse::Ok().json(guard.trip_view()?))
}

#[derive(Deserialize)]
pub struct TripListQuery {
    #[serde(default = "default_limit")]
    limit: u32,
    #[serde(default)]
    offset: u32,
}

fn default_limit() -> u32 {
    10
}

/*
    GET /api/trips?limit=10&offset=0
*/
pub async fn list_trips<B: TripBackend + 'static>(
    backend: web::Data<B>,
    query: web::Query<TripListQuery>,
) -> Result<HttpResponse, TripError> {
    let list = backend.list_trips(query.limit, query.offset).await?;
    Ok(HttpResponse::Ok().json(list))
}

/*
    GET /api/trip
*/
pub async fn get_trip(session: web::Data<SharedSession>) -> Result<HttpResponse, TripError> {
    let session = lock_session(&session)?;
    Ok(HttpResponse::Ok().json(session.trip_view()?))
}

/*
    DELETE /api/trip
*/
pub async fn new_trip(session: web::Data<SharedSession>) -> Result<HttpResponse, TripError> {
    let mut session = lock_session(&session)?;
    session.new_trip();
    Ok(HttpResponse::Ok().json(session.form_view()))
}

/*
    GET /api/trip/day
*/
pub async fn get_day(session: web::Data<SharedSession>) -> Result<HttpResponse, TripError> {
    let mut session = lock_session(&session)?;
    Ok(HttpResponse::Ok().json(session.day_view()?))
}

/*
    PUT /api/trip/day/{day}
*/
pub async fn select_day(
    session: web::Data<SharedSession>,
    path: web::Path<u32>,
) -> Result<HttpResponse, TripError> {
    let day = path.into_inner();
    lock_session(&session)?.select_day(day);
    Ok(HttpResponse::Ok().json(json!({ "active_day": day })))
}

/*
    GET /api/trip/likes
*/
pub async fn get_likes(session: web::Data<SharedSession>) -> Result<HttpResponse, TripError> {
    let session = lock_session(&session)?;
    Ok(HttpResponse::Ok().json(session.liked_names()))
}

/*
    POST /api/trip/likes/{name}
*/
pub async fn toggle_like(
    session: web::Data<SharedSession>,
    path: web::Path<String>,
) -> Result<HttpResponse, TripError> {
    let name = path.into_inner();
    let liked = lock_session(&session)?.toggle_like(&name);
    Ok(HttpResponse::Ok().json(json!({ "name": name, "liked": liked })))
}

/*
    GET /api/trip/export
*/
pub async fn export(session: web::Data<SharedSession>) -> Result<HttpResponse, TripError> {
    let file = lock_session(&session)?.export()?;

    let disposition = ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::FilenameExt(ExtendedValue {
            charset: Charset::Ext(String::from("UTF-8")),
            language_tag: None,
            value: file.file_name.into_bytes(),
        })],
    };

    Ok(HttpResponse::Ok()
        .content_type(EXPORT_CONTENT_TYPE)
        .insert_header(disposition)
        .body(file.content))
}

#[derive(Deserialize)]
pub struct ShareQuery {
    #[serde(default)]
    native: bool,
}

/*
    GET /api/trip/share?native=true
*/
pub async fn share(
    session: web::Data<SharedSession>,
    config: web::Data<AppConfig>,
    query: web::Query<ShareQuery>,
) -> Result<HttpResponse, TripError> {
    let action = lock_session(&session)?.share(&config.public_url, query.native)?;
    Ok(HttpResponse::Ok().json(action))
}

#[derive(Deserialize)]
pub struct ShareOutcomeInput {
    outcome: ShareOutcome,
}

/*
    POST /api/trip/share/outcome
*/
pub async fn share_outcome(input: web::Json<ShareOutcomeInput>) -> impl Responder {
    record_share_outcome(input.outcome);
    HttpResponse::NoContent().finish()
}

/*
    POST /api/trip/map/events
*/
pub async fn map_event(
    session: web::Data<SharedSession>,
    input: web::Json<MapEvent>,
) -> Result<HttpResponse, TripError> {
    let command = lock_session(&session)?.handle_map_event(input.into_inner());
    Ok(HttpResponse::Ok().json(json!({ "command": command })))
}

/*
    GET /api/map/config
*/
pub async fn map_config(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(MapConfig::new(config.google_maps_api_key.clone()))
}
