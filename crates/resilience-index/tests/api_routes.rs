use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{Days, NaiveDate, Utc};
use resilience_index::api::{analytics_router, AnalyticsState};
use resilience_index::config::SimulationConfig;
use serde_json::{json, Value};
use tower::ServiceExt;

fn router() -> Router {
    analytics_router(Arc::new(AnalyticsState::new(SimulationConfig {
        latency: Duration::ZERO,
        random_seed: None,
    })))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = router()
        .oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
        .await
        .expect("route executes");
    let status = response.status();
    (status, read_json(response).await)
}

async fn post(uri: &str, payload: Value) -> (StatusCode, Value) {
    let response = router()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&payload).expect("payload")))
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    let status = response.status();
    (status, read_json(response).await)
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn composite_score_for_pennsylvania() {
    let (status, body) = get("/api/resilience-score?region=PA&type=state").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["region"], json!("PA"));
    assert_eq!(body["regionType"], json!("state"));

    let factors = body["factors"].as_array().expect("factors array");
    assert_eq!(factors.len(), 5);
    let names: Vec<&str> = factors
        .iter()
        .filter_map(|factor| factor["name"].as_str())
        .collect();
    assert_eq!(
        names,
        [
            "health",
            "economic",
            "infrastructure",
            "environmental",
            "emergencyResponse"
        ]
    );

    let scores: Vec<f64> = factors
        .iter()
        .map(|factor| factor["score"].as_f64().expect("numeric score"))
        .collect();
    assert!(scores.iter().all(|score| (0.0..=100.0).contains(score)));
    let mean = scores.iter().sum::<f64>() / 5.0;
    assert_eq!(body["compositeScore"].as_f64(), Some(mean.round()));
    assert!(body["dataQuality"].is_string());
    assert!(body["trend"].is_string());
}

#[tokio::test]
async fn forecast_without_scenarios() {
    let (status, body) = get("/api/predictions?region=CA&days=10&includeScenarios=false").await;
    assert_eq!(status, StatusCode::OK);
    let predictions = body["predictions"].as_array().expect("predictions");
    assert_eq!(predictions.len(), 10);
    assert!(body.get("scenarios").is_none());

    for point in predictions {
        let lower = point["confidenceLower"].as_f64().expect("lower");
        let predicted = point["predicted"].as_f64().expect("predicted");
        let upper = point["confidenceUpper"].as_f64().expect("upper");
        assert!(lower <= predicted && predicted <= upper);
        assert!(point["factors"]["seasonal"].is_number());
    }
}

#[tokio::test]
async fn forecast_starts_tomorrow() {
    let today = Utc::now().date_naive();
    let (status, body) = get("/api/predictions?region=PA&days=3").await;
    assert_eq!(status, StatusCode::OK);

    let dates: Vec<NaiveDate> = body["predictions"]
        .as_array()
        .expect("predictions")
        .iter()
        .map(|point| {
            serde_json::from_value(point["date"].clone()).expect("ISO date")
        })
        .collect();
    // A request straddling midnight UTC sees the later day.
    let tomorrow = today + Days::new(1);
    assert!(dates[0] == tomorrow || dates[0] == tomorrow + Days::new(1));
    assert!(dates.windows(2).all(|pair| pair[1] == pair[0] + Days::new(1)));
}

#[tokio::test]
async fn malformed_optional_parameters_fall_back_to_defaults() {
    for uri in [
        "/api/predictions?region=CA&days=abc",
        "/api/predictions?region=CA&days=",
        "/api/predictions?region=CA&days=7.5&includeScenarios=perhaps",
    ] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body["predictions"].as_array().map(Vec::len), Some(30), "{uri}");
        assert!(body.get("scenarios").is_none(), "{uri}");
    }

    let (status, body) = get("/api/predictions?region=CA&days=5&includeScenarios=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scenarios"]["baseline"].as_array().map(Vec::len), Some(5));

    let (status, body) = get("/api/predictions?region=CA&days=5&includeScenarios=0").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("scenarios").is_none());

    let (status, body) = get("/api/trends?region=CA&months=x").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["history"].as_array().map(Vec::len), Some(12));
}

#[tokio::test]
async fn forecast_with_scenarios() {
    let (status, body) = get("/api/predictions?region=FL&days=20&scenarios=true").await;
    assert_eq!(status, StatusCode::OK);
    let scenarios = &body["scenarios"];
    for key in ["baseline", "disasterImpact", "mitigationApplied"] {
        assert_eq!(scenarios[key].as_array().map(Vec::len), Some(20), "{key}");
    }
}

#[tokio::test]
async fn metric_endpoints_require_region() {
    for uri in [
        "/api/resilience-score",
        "/api/resilience-score?type=county",
        "/api/predictions?days=5",
        "/api/trends",
        "/api/economic-indicators?region=",
    ] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["code"], json!("missing_parameter"), "{uri}");
        assert!(body["error"].as_str().unwrap_or_default().contains("region"));
    }
}

#[tokio::test]
async fn county_lookups_distinguish_missing_levels() {
    let (county_status, county_body) = get("/api/counties/pa/nonexistent").await;
    let (state_status, state_body) = get("/api/counties/zz/allegheny").await;

    assert_eq!(county_status, StatusCode::NOT_FOUND);
    assert_eq!(state_status, StatusCode::NOT_FOUND);
    assert_eq!(county_body["code"], json!("county_not_found"));
    assert_eq!(state_body["code"], json!("state_not_found"));
    assert_ne!(county_body, state_body);

    let (status, _) = get("/api/counties/zz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn county_detail_and_list() {
    let (status, body) = get("/api/counties/PA/allegheny").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stateName"], json!("Pennsylvania"));
    assert_eq!(body["county"]["fips"], json!("42003"));

    let (status, body) = get("/api/counties/ca").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"].as_u64(), Some(5));
}

#[tokio::test]
async fn top_level_catalogs_fall_back_to_defaults() {
    let (status, body) = get("/api/cbos/wy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["region"], json!("US"));

    let (_, known) = get("/api/cbos/PA").await;
    let (_, again) = get("/api/cbos/pa").await;
    assert_eq!(known, again);
    assert_eq!(known["region"], json!("PA"));

    let (_, state) = get("/api/states/zz").await;
    assert_eq!(state["code"], json!("US"));

    let (_, zip) = get("/api/zip/99999").await;
    assert_eq!(zip["zip"], json!("00000"));

    let (_, recs) = get("/api/recommendations/unknown").await;
    assert_eq!(recs["region"], json!("US"));
}

#[tokio::test]
async fn service_request_is_echoed_not_stored() {
    let payload = json!({
        "serviceType": "shelter",
        "region": "PA",
        "urgency": "critical",
        "description": "Family of four displaced by flooding"
    });
    let (status, first) = post("/api/service-requests", payload.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["status"], json!("submitted"));
    assert_eq!(first["estimatedResponseHours"], json!(4));

    let (_, second) = post("/api/service-requests", payload).await;
    assert_ne!(first["id"], second["id"]);

    let (status, body) = post("/api/service-requests", json!({ "region": "PA" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("missing_parameter"));
}

#[tokio::test]
async fn alert_subscription_confirms() {
    let (status, body) = post(
        "/api/alert-subscriptions",
        json!({ "region": "TX", "channels": ["SMS", "email"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("active"));
    assert_eq!(body["channels"], json!(["sms", "email"]));

    let (_, body) = post(
        "/api/alert-subscriptions",
        json!({
            "region": "TX",
            "channels": ["sms", "email", "sms"],
            "email": "alerts@county.example.org"
        }),
    )
    .await;
    assert_eq!(body["channels"], json!(["sms", "email"]));
    assert_eq!(body["email"], json!("alerts@county.example.org"));
}

#[tokio::test]
async fn trend_and_economic_profiles() {
    let (status, body) = get("/api/trends?region=NY&months=6").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["history"].as_array().map(Vec::len), Some(6));

    let (status, body) = get("/api/economic-indicators?region=NY&type=county").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["regionType"], json!("county"));
    let unemployment = body["unemploymentRate"].as_f64().expect("rate");
    assert!((2.0..=15.0).contains(&unemployment));
    assert!(body["medianHouseholdIncome"].as_u64().expect("income") >= 25_000);
}
