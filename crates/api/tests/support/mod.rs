#![allow(dead_code)]

use std::sync::Arc;

use aura_api::{router, AppContext};
use aura_core::FixedClock;
use aura_domain::Config;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use tower::ServiceExt;

/// Router over an in-memory ledger with a controllable clock.
pub struct TestApp {
    pub router: Router,
    pub clock: Arc<FixedClock>,
    pub ctx: Arc<AppContext>,
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body readable");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is JSON")
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::delete(uri).body(Body::empty()).unwrap()).await
    }
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}

/// App whose clock reads `now`.
pub fn app_at(now: NaiveDateTime) -> TestApp {
    let clock = Arc::new(FixedClock::new(now));
    let ctx = Arc::new(AppContext::in_memory(Config::default(), clock.clone()).unwrap());
    TestApp { router: router(Arc::clone(&ctx)), clock, ctx }
}

/// Monday 2025-03-10 at 08:00
pub fn monday_morning() -> TestApp {
    app_at(at(2025, 3, 10, 8, 0))
}
