pub mod day_navigator;
pub mod duration_service;
pub mod export_service;
pub mod generation_client;
pub mod like_tracker;
pub mod map_sync_service;
pub mod request_builder;
pub mod share_service;
pub mod trip_session;
