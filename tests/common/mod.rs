#![allow(dead_code)]

use altos_directory::db::DirectoryStorage;
use altos_directory::server::{DirectoryState, directory_router};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use axum_extra::extract::cookie::Key;
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;
use url::form_urlencoded;

/// Router over a throwaway on-disk SQLite file, removed on drop.
pub struct TestApp {
    pub app: Router,
    pub storage: DirectoryStorage,
    db_path: PathBuf,
}

impl TestApp {
    pub async fn spawn(label: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut db_path = std::env::temp_dir();
        db_path.push(format!(
            "altos-directory-{label}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));

        let database_url = format!("sqlite://{}", db_path.display());
        let storage = DirectoryStorage::connect(&database_url, 1)
            .await
            .expect("failed to open test database");
        let state = DirectoryState::new(storage.clone(), Key::generate(), true);
        let app = directory_router(state);

        Self {
            app,
            storage,
            db_path,
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.app
            .clone()
            .oneshot(builder.body(Body::empty()).expect("failed to build request"))
            .await
            .expect("request failed")
    }

    pub async fn post_form(&self, uri: &str, form: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.app
            .clone()
            .oneshot(
                builder
                    .body(Body::from(form.to_string()))
                    .expect("failed to build request"),
            )
            .await
            .expect("request failed")
    }

    /// Sign up and return the session cookie pair (`name=value`).
    pub async fn signup(&self, name: &str, email: &str, password: &str, house: &str) -> String {
        let form = form_urlencoded::Serializer::new(String::new())
            .append_pair("name", name)
            .append_pair("email", email)
            .append_pair("password", password)
            .append_pair("house_number", house)
            .append_pair("phone_number", "")
            .finish();
        let resp = self.post_form("/signup", &form, None).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), Some("/homepage"));
        session_cookie(&resp).expect("signup did not set a session cookie")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.db_path);
        // WAL journal side files
        for suffix in ["-wal", "-shm"] {
            let mut side = self.db_path.clone().into_os_string();
            side.push(suffix);
            let _ = fs::remove_file(side);
        }
    }
}

/// Percent-encode a single query or form value.
pub fn encode(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

/// `/path?q=<query>` with the query properly encoded.
pub fn search_uri(path: &str, query: &str) -> String {
    format!("{path}?q={}", encode(query))
}

pub fn location(resp: &Response) -> Option<&str> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

/// The `directory_session=...` pair from a `Set-Cookie` header, if any.
pub fn session_cookie(resp: &Response) -> Option<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter(|v| v.starts_with("directory_session="))
        .filter_map(|v| v.split(';').next())
        .map(str::to_string)
        .next()
}

pub async fn body_string(resp: Response) -> String {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(body.to_vec()).expect("response body was not utf-8")
}

pub async fn body_json(resp: Response) -> serde_json::Value {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&body).expect("response body was not json")
}
