#![allow(dead_code)]

use std::sync::Mutex;

use actix_web::{web, App};
use serde_json::json;

use trip_curator::{
    config::AppConfig,
    error::TripError,
    models::{
        request::TripRequest,
        trip::{TripList, TripPlan},
    },
    routes,
    services::{
        generation_client::TripBackend, map_sync_service::MapSize, trip_session::TripSession,
    },
};

pub enum FakeResponse {
    Plan(serde_json::Value),
    Status(u16),
}

/// Stands in for the generation backend and records what it was sent.
pub struct FakeBackend {
    response: FakeResponse,
    pub requests: Mutex<Vec<serde_json::Value>>,
}

impl FakeBackend {
    pub fn new(response: FakeResponse) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn respond(&self) -> Result<TripPlan, TripError> {
        match &self.response {
            FakeResponse::Plan(body) => Ok(TripPlan::from_value(body.clone())?),
            FakeResponse::Status(status) => Err(TripError::Generation {
                status: *status,
                body: "generation failed".to_string(),
            }),
        }
    }
}

impl TripBackend for FakeBackend {
    async fn generate_trip(&self, request: &TripRequest) -> Result<TripPlan, TripError> {
        self.requests
            .lock()
            .unwrap()
            .push(serde_json::to_value(request)?);
        self.respond()
    }

    async fn fetch_trip(&self, trip_id: &str) -> Result<TripPlan, TripError> {
        self.requests.lock().unwrap().push(json!({ "id": trip_id }));
        self.respond()
    }

    async fn list_trips(&self, limit: u32, offset: u32) -> Result<TripList, TripError> {
        self.requests
            .lock()
            .unwrap()
            .push(json!({ "limit": limit, "offset": offset }));
        let plan = self.respond()?;
        Ok(TripList {
            trips: vec![plan],
            total: 1,
        })
    }
}

pub struct TestApp {
    pub backend: web::Data<FakeBackend>,
    pub config: AppConfig,
}

impl TestApp {
    pub fn new(response: FakeResponse) -> Self {
        Self {
            backend: web::Data::new(FakeBackend::new(response)),
            config: AppConfig {
                public_url: "https://trip.example".to_string(),
                google_maps_api_key: "test-key".to_string(),
                ..AppConfig::default()
            },
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.backend.clone())
            .app_data(web::Data::new(Mutex::new(TripSession::new(
                MapSize::default(),
            ))))
            .app_data(web::Data::new(self.config.clone()))
            .configure(routes::config::<FakeBackend>)
    }
}

/// Three days, one place each, in the legacy camelCase convention.
pub fn jeju_plan_legacy() -> serde_json::Value {
    json!({
        "id": "trip-jeju",
        "destination": "Jeju",
        "duration": 3,
        "totalBudget": 50,
        "overview": "바다와 오름을 여유롭게",
        "days": [
            {
                "day": 1,
                "date": "2025-06-01",
                "theme": "도착과 동쪽 해안",
                "places": [{
                    "name": "성산일출봉",
                    "description": "제주도의 대표적인 일출 명소",
                    "category": "자연경관",
                    "estimatedTime": 90,
                    "coordinates": { "lat": 33.4580, "lng": 126.9425 },
                    "tips": "일출 시간에 맞춰 방문하세요"
                }],
                "totalBudget": 15,
                "transportation": "렌터카"
            },
            {
                "day": 2,
                "date": "2025-06-02",
                "theme": "섬 속의 섬",
                "places": [{
                    "name": "우도",
                    "description": "아름다운 섬 풍경",
                    "category": "자연경관",
                    "estimatedTime": 180
                }],
                "totalBudget": 20,
                "transportation": "배"
            },
            {
                "day": 3,
                "date": "2025-06-03",
                "theme": "시장과 카페",
                "places": [{
                    "name": "제주 동문시장",
                    "description": "제주 전통 음식을 맛볼 수 있는 시장",
                    "category": "맛집",
                    "estimatedTime": 120,
                    "coordinates": { "lat": 33.5117, "lng": 126.5262 }
                }],
                "totalBudget": 15,
                "transportation": "버스"
            }
        ],
        "tips": ["선크림을 챙기세요", "우도행 배편은 미리 확인하세요"],
        "createdAt": "2025-05-20T10:00:00"
    })
}

pub fn jeju_form() -> serde_json::Value {
    json!({
        "destination": "Jeju",
        "start_date": "2025-06-01",
        "end_date": "2025-06-03",
        "budget": 50,
        "companions": "solo"
    })
}

/// "카페" as it appears in a request path.
pub const CAFE_PATH: &str = "%EC%B9%B4%ED%8E%98";
