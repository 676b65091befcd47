#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use activities::database::ActivityStore;
use activities::web;
use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Router over a fresh baseline catalog, driven in-process.
pub struct TestApp {
    pub store: Arc<ActivityStore>,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(ActivityStore::with_default_catalog())
    }

    pub fn with_store(store: ActivityStore) -> Self {
        let store = Arc::new(store);
        let static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static");
        let router = web::router(Arc::clone(&store), static_dir);
        Self { store, router }
    }

    pub async fn request(&self, method: Method, uri: &str) -> TestResponse {
        self.request_with_body(method, uri, None, Body::empty()).await
    }

    pub async fn request_with_body(
        &self,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: Body,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(body).expect("valid request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("readable body")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn activities(&self) -> Value {
        let response = self.request(Method::GET, "/activities").await;
        assert_eq!(response.status, StatusCode::OK);
        response.body
    }

    pub async fn participants(&self, activity: &str) -> Vec<String> {
        let activities = self.activities().await;
        serde_json::from_value(activities[activity]["participants"].clone())
            .expect("participants array")
    }

    pub async fn signup(&self, activity: &str, email: &str) -> TestResponse {
        let uri = format!(
            "/activities/{}/signup?email={}",
            urlencoding::encode(activity),
            urlencoding::encode(email)
        );
        self.request(Method::POST, &uri).await
    }

    pub async fn remove(&self, activity: &str, email: &str) -> TestResponse {
        let uri = format!(
            "/activities/{}/participants/{}",
            urlencoding::encode(activity),
            urlencoding::encode(email)
        );
        self.request(Method::DELETE, &uri).await
    }
}
