#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request};
use axum::response::Response;
use axum::Router;
use bookshelf_db::Store;
use bookshelf_kernel::{settings::Settings, InitCtx};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// A fully wired application on a throwaway database file.
pub struct TestApp {
    pub router: Router,
    pub store: Store,
    _dir: tempfile::TempDir,
}

/// Build the same router `serve` would, after running module init so the
/// storage module bootstraps the schema. `seed` controls the default rows.
pub async fn build_test_app(seed: bool) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = Settings::default();
    settings.database.path = dir.path().join("books.db");
    settings.database.seed = seed;

    let store = Store::new(&settings.database.path);
    let registry = bookshelf_app::build_registry(&store);
    registry
        .init_modules(&InitCtx {
            settings: &settings,
        })
        .await
        .unwrap();

    TestApp {
        router: bookshelf_http::build_router(&registry, &settings),
        store,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.send(empty_request(Method::GET, uri)).await
    }

    pub async fn delete(&self, uri: &str) -> Response {
        self.send(empty_request(Method::DELETE, uri)).await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> Response {
        self.send(json_request(Method::POST, uri, body)).await
    }

    pub async fn patch_json(&self, uri: &str, body: serde_json::Value) -> Response {
        self.send(json_request(Method::PATCH, uri, body)).await
    }
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn dune() -> serde_json::Value {
    serde_json::json!({
        "title": "Dune",
        "author": {"author_id": 1, "first_name": "Frank", "last_name": "Herbert"}
    })
}
