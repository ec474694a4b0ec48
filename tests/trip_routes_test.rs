mod common;

use actix_web::{http::header, test};
use serde_json::json;

use common::{jeju_form, jeju_plan_legacy, FakeResponse, TestApp, CAFE_PATH};

// Fill the form with the Jeju example and submit it
macro_rules! submit_jeju {
    ($app:expr) => {{
        let req = test::TestRequest::put()
            .uri("/api/form")
            .set_json(&jeju_form())
            .to_request();
        assert!(test::call_service(&$app, req).await.status().is_success());

        let req = test::TestRequest::post()
            .uri("/api/form/travel-styles/relaxed")
            .to_request();
        assert!(test::call_service(&$app, req).await.status().is_success());

        let req = test::TestRequest::post()
            .uri(&format!("/api/form/interests/{}", CAFE_PATH))
            .to_request();
        assert!(test::call_service(&$app, req).await.status().is_success());

        let req = test::TestRequest::post().uri("/api/trip").to_request();
        test::call_service(&$app, req).await
    }};
}

#[actix_rt::test]
async fn test_jeju_end_to_end() {
    let test_app = TestApp::new(FakeResponse::Plan(jeju_plan_legacy()));
    let app = test::init_service(test_app.create_app()).await;

    let resp = submit_jeju!(app);
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "loaded");
    assert_eq!(body["days"], json!([1, 2, 3]));
    assert_eq!(body["active_day"], 1);
    assert_eq!(body["place_count"], 3);
    assert_eq!(body["plan"]["total_budget"], 50);
    assert_eq!(body["plan"]["days"][1]["places"][0]["estimated_time"], 180);

    let sent = test_app.backend.requests.lock().unwrap().clone();
    assert_eq!(
        sent,
        vec![json!({
            "destination": "Jeju",
            "startDate": "2025-06-01",
            "endDate": "2025-06-03",
            "duration": 3,
            "budget": 50,
            "travel_style": ["relaxed"],
            "companions": "solo",
            "interests": ["카페"]
        })]
    );

    let req = test::TestRequest::get().uri("/api/trip/export").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment"));

    let text = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(text.starts_with("Jeju 여행 일정\n"));
    assert_eq!(text.lines().filter(|line| line.starts_with("--- ")).count(), 3);
    assert!(text.contains("=== 여행 팁 ===\n1. 선크림을 챙기세요\n2. 우도행 배편은 미리 확인하세요\n"));
}

#[actix_rt::test]
async fn test_form_reports_duration_and_submittable() {
    let test_app = TestApp::new(FakeResponse::Plan(jeju_plan_legacy()));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::put()
        .uri("/api/form")
        .set_json(&jeju_form())
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["duration"], 3);
    assert_eq!(body["submittable"], false);
    assert_eq!(body["missing_fields"], json!(["travel_style"]));

    let req = test::TestRequest::post()
        .uri("/api/form/travel-styles/relaxed")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["submittable"], true);
    assert_eq!(body["travel_styles"], json!(["relaxed"]));

    let req = test::TestRequest::put()
        .uri("/api/form")
        .set_json(&json!({ "end_date": null }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["duration"], 0);
    assert_eq!(body["submittable"], false);
    assert_eq!(body["missing_fields"], json!(["end_date"]));
}

#[actix_rt::test]
async fn test_incomplete_form_never_reaches_backend() {
    let test_app = TestApp::new(FakeResponse::Plan(jeju_plan_legacy()));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post().uri("/api/trip").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["missing"],
        json!([
            "destination",
            "start_date",
            "end_date",
            "budget",
            "travel_style",
            "companions"
        ])
    );
    assert_eq!(test_app.backend.request_count(), 0);
}

#[actix_rt::test]
async fn test_unknown_travel_style_is_rejected() {
    let test_app = TestApp::new(FakeResponse::Plan(jeju_plan_legacy()));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/form/travel-styles/sightseeing")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_generation_failure_keeps_form_and_no_plan() {
    let test_app = TestApp::new(FakeResponse::Status(500));
    let app = test::init_service(test_app.create_app()).await;

    let resp = submit_jeju!(app);
    assert_eq!(resp.status(), 502);

    let req = test::TestRequest::get().uri("/api/trip").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);

    let req = test::TestRequest::get().uri("/api/form").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["destination"], "Jeju");
    assert_eq!(body["in_flight"], false);
    assert_eq!(body["submittable"], true);
}

#[actix_rt::test]
async fn test_out_of_range_day_renders_empty() {
    let test_app = TestApp::new(FakeResponse::Plan(jeju_plan_legacy()));
    let app = test::init_service(test_app.create_app()).await;
    assert!(submit_jeju!(app).status().is_success());

    let req = test::TestRequest::put().uri("/api/trip/day/99").to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let req = test::TestRequest::get().uri("/api/trip/day").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["active_day"], 99);
    assert_eq!(body["found"], false);
    assert_eq!(body["places"], json!([]));
    assert_eq!(body["map"]["markers"], json!([]));
    assert!(body["map"]["viewport"].is_null());
}

#[actix_rt::test]
async fn test_day_view_with_markers_likes_and_links() {
    let test_app = TestApp::new(FakeResponse::Plan(jeju_plan_legacy()));
    let app = test::init_service(test_app.create_app()).await;
    assert!(submit_jeju!(app).status().is_success());

    // 성산일출봉
    let req = test::TestRequest::post()
        .uri("/api/trip/likes/%EC%84%B1%EC%82%B0%EC%9D%BC%EC%B6%9C%EB%B4%89")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["liked"], true);

    let req = test::TestRequest::get().uri("/api/trip/day").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["found"], true);
    assert_eq!(body["day"]["theme"], "도착과 동쪽 해안");
    assert_eq!(body["places"][0]["position"], 1);
    assert_eq!(body["places"][0]["liked"], true);
    assert_eq!(
        body["places"][0]["links"]["instagram"],
        "https://www.instagram.com/explore/tags/%EC%84%B1%EC%82%B0%EC%9D%BC%EC%B6%9C%EB%B4%89/"
    );
    assert_eq!(body["map"]["markers"][0]["label"], 1);
    assert_eq!(body["map"]["viewport"]["zoom"], 15);

    // The widget over-zooms on a single marker and gets clamped once
    let req = test::TestRequest::post()
        .uri("/api/trip/map/events")
        .set_json(&json!({ "type": "bounds_changed", "zoom": 18 }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["command"], json!({ "type": "set_zoom", "zoom": 15 }));

    let req = test::TestRequest::post()
        .uri("/api/trip/map/events")
        .set_json(&json!({ "type": "marker_clicked", "label": 1 }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["command"]["type"], "open_info_window");
    assert_eq!(body["command"]["content"]["name"], "성산일출봉");
}

#[actix_rt::test]
async fn test_likes_survive_day_navigation() {
    let test_app = TestApp::new(FakeResponse::Plan(jeju_plan_legacy()));
    let app = test::init_service(test_app.create_app()).await;
    assert!(submit_jeju!(app).status().is_success());

    let req = test::TestRequest::post()
        .uri("/api/trip/likes/%EC%9A%B0%EB%8F%84")
        .to_request();
    test::call_service(&app, req).await;

    for day in [2, 3, 1] {
        let req = test::TestRequest::put()
            .uri(&format!("/api/trip/day/{}", day))
            .to_request();
        test::call_service(&app, req).await;
        let req = test::TestRequest::get().uri("/api/trip/day").to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/api/trip/likes").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!(["우도"]));

    let req = test::TestRequest::post()
        .uri("/api/trip/likes/%EC%9A%B0%EB%8F%84")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["liked"], false);
}

#[actix_rt::test]
async fn test_new_trip_resets_everything() {
    let test_app = TestApp::new(FakeResponse::Plan(jeju_plan_legacy()));
    let app = test::init_service(test_app.create_app()).await;
    assert!(submit_jeju!(app).status().is_success());

    let req = test::TestRequest::post()
        .uri("/api/trip/likes/%EC%9A%B0%EB%8F%84")
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::delete().uri("/api/trip").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["destination"], "");
    assert_eq!(body["duration"], 0);

    let req = test::TestRequest::get().uri("/api/trip").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);

    let req = test::TestRequest::get().uri("/api/trip/likes").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));
}

#[actix_rt::test]
async fn test_plan_without_days_renders_failed_state() {
    let test_app = TestApp::new(FakeResponse::Plan(json!({
        "id": "broken",
        "destination": "Jeju",
        "days": []
    })));
    let app = test::init_service(test_app.create_app()).await;

    let resp = submit_jeju!(app);
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "failed_to_load");
    assert_eq!(body["recovery"], "new_trip");
}

#[actix_rt::test]
async fn test_share_native_and_clipboard() {
    let test_app = TestApp::new(FakeResponse::Plan(jeju_plan_legacy()));
    let app = test::init_service(test_app.create_app()).await;
    assert!(submit_jeju!(app).status().is_success());

    let req = test::TestRequest::get()
        .uri("/api/trip/share?native=true")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({
            "method": "native",
            "title": "Jeju 여행 일정",
            "text": "바다와 오름을 여유롭게",
            "url": "https://trip.example"
        })
    );

    let req = test::TestRequest::get().uri("/api/trip/share").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["method"], "clipboard");
    assert_eq!(body["text"], "https://trip.example");

    let req = test::TestRequest::post()
        .uri("/api/trip/share/outcome")
        .set_json(&json!({ "outcome": "cancelled" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 204);
}

#[actix_rt::test]
async fn test_load_saved_trip() {
    let test_app = TestApp::new(FakeResponse::Plan(jeju_plan_legacy()));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/trip/load/trip-jeju")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "loaded");
    assert_eq!(body["plan"]["id"], "trip-jeju");

    let sent = test_app.backend.requests.lock().unwrap().clone();
    assert_eq!(sent, vec![json!({ "id": "trip-jeju" })]);
}

#[actix_rt::test]
async fn test_export_without_plan_is_not_found() {
    let test_app = TestApp::new(FakeResponse::Plan(jeju_plan_legacy()));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/trip/export").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "no trip plan is loaded");
}

#[actix_rt::test]
async fn test_health_and_static_config() {
    let test_app = TestApp::new(FakeResponse::Plan(jeju_plan_legacy()));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend_url"], "http://localhost:8000");

    let req = test::TestRequest::get().uri("/api/map/config").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["api_key"], "test-key");

    let req = test::TestRequest::get().uri("/api/form/options").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["travel_styles"].as_array().unwrap().len(), 10);
    assert_eq!(body["companions"].as_array().unwrap().len(), 4);
    assert_eq!(body["interests"].as_array().unwrap().len(), 15);
    assert_eq!(body["travel_styles"][1]["value"], "relaxed");
}

#[actix_rt::test]
async fn test_list_saved_trips() {
    let test_app = TestApp::new(FakeResponse::Plan(jeju_plan_legacy()));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/trips?limit=5&offset=10")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["trips"][0]["id"], "trip-jeju");
    assert_eq!(body["trips"][0]["total_budget"], 50);

    let req = test::TestRequest::get().uri("/api/trips").to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let sent = test_app.backend.requests.lock().unwrap().clone();
    assert_eq!(
        sent,
        vec![
            json!({ "limit": 5, "offset": 10 }),
            json!({ "limit": 10, "offset": 0 })
        ]
    );

    // Listing is not a plan load
    let req = test::TestRequest::get().uri("/api/trip").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_rt::test]
async fn test_listing_failure_is_bad_gateway() {
    let test_app = TestApp::new(FakeResponse::Status(500));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/trips").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 502);
}

#[actix_rt::test]
async fn test_blank_trip_id_is_rejected_before_loading() {
    let test_app = TestApp::new(FakeResponse::Plan(jeju_plan_legacy()));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/trip/load/%20")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
    assert_eq!(test_app.backend.request_count(), 0);

    let req = test::TestRequest::get().uri("/api/form").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["in_flight"], false);
}
