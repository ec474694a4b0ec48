use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::{
    error::TripError,
    models::request::{Companions, TravelStyle, INTEREST_OPTIONS},
    services::{
        request_builder::FormUpdate,
        trip_session::{lock_session, SharedSession},
    },
};

/*
    /api/form/options
*/
pub async fn options() -> impl Responder {
    let travel_styles: Vec<_> = TravelStyle::ALL
        .iter()
        .map(|style| {
            json!({
                "value": style,
                "label": style.label(),
                "description": style.description(),
            })
        })
        .collect();
    let companions: Vec<_> = Companions::ALL
        .iter()
        .map(|companions| json!({ "value": companions, "label": companions.label() }))
        .collect();

    HttpResponse::Ok().json(json!({
        "travel_styles": travel_styles,
        "companions": companions,
        "interests": INTEREST_OPTIONS,
    }))
}

/*
    GET /api/form
*/
pub async fn get_form(session: web::Data<SharedSession>) -> Result<HttpResponse, TripError> {
    let session = lock_session(&session)?;
    Ok(HttpResponse::Ok().json(session.form_view()))
}

/*
    PUT /api/form
*/
pub async fn update_form(
    session: web::Data<SharedSession>,
    input: web::Json<FormUpdate>,
) -> Result<HttpResponse, TripError> {
    let mut session = lock_session(&session)?;
    session.form_mut().apply(input.into_inner());
    Ok(HttpResponse::Ok().json(session.form_view()))
}

/*
    POST /api/form/travel-styles/{style}
*/
pub async fn toggle_travel_style(
    session: web::Data<SharedSession>,
    path: web::Path<String>,
) -> Result<HttpResponse, TripError> {
    let style = match TravelStyle::parse(&path.into_inner()) {
        Some(style) => style,
        None => {
            return Ok(HttpResponse::BadRequest().json(json!({ "error": "Unknown travel style" })))
        }
    };

    let mut session = lock_session(&session)?;
    session.form_mut().toggle_travel_style(style);
    Ok(HttpResponse::Ok().json(session.form_view()))
}

/*
    POST /api/form/interests/{interest}
*/
pub async fn toggle_interest(
    session: web::Data<SharedSession>,
    path: web::Path<String>,
) -> Result<HttpResponse, TripError> {
    let mut session = lock_session(&session)?;
    session.form_mut().toggle_interest(&path.into_inner());
    Ok(HttpResponse::Ok().json(session.form_view()))
}
