use actix_web::web;

use crate::services::generation_client::TripBackend;

pub mod form;
pub mod health;
pub mod trip;

/// Mounts every route. `B` is the backend the submit, load and list handlers talk to.
pub fn config<B: TripBackend + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/map/config", web::get().to(trip::map_config))
                .route("/trips", web::get().to(trip::list_trips::<B>))
                .service(
                    web::scope("/form")
                        .route("", web::get().to(form::get_form))
                        .route("", web::put().to(form::update_form))
                        .route("/options", web::get().to(form::options))
                        .route(
                            "/travel-styles/{style}",
                            web::post().to(form::toggle_travel_style),
                        )
                        .route(
                            "/interests/{interest}",
                            web::post().to(form::toggle_interest),
                        ),
                )
                .service(
                    web::scope("/trip")
                        .route("", web::post().to(trip::submit::<B>))
                        .route("", web::get().to(trip::get_trip))
                        .route("", web::delete().to(trip::new_trip))
                        .route("/load/{id}", web::post().to(trip::load::<B>))
                        .route("/day", web::get().to(trip::get_day))
                        .route("/day/{day}", web::put().to(trip::select_day))
                        .route("/likes", web::get().to(trip::get_likes))
                        .route("/likes/{name}", web::post().to(trip::toggle_like))
                        .route("/export", web::get().to(trip::export))
                        .route("/share", web::get().to(trip::share))
                        .route("/share/outcome", web::post().to(trip::share_outcome))
                        .route("/map/events", web::post().to(trip::map_event)),
                ),
        );
}
