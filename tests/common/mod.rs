//! Shared fixtures: a mock REST backend and request helpers.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use faculty::models::Config;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Backend records keyed by resource path.
fn fixtures(resource: &str) -> Option<Value> {
    let value = match resource {
        "berita" => json!([
            {
                "id": 7,
                "title": "Wisuda Periode II",
                "tag": "Pengumuman Umum",
                "content": "<p>Wisuda dilaksanakan di <b>aula utama</b>.</p>",
                "author": "Humas",
                "published_at": "2026-10-01T08:00:00Z"
            },
            {
                "id": "8",
                "title": "Tim Robotik Juara Nasional",
                "tag": "Prestasi",
                "content": "<p>Tim robotik meraih juara.</p>",
                "image": "https://cdn.example.ac.id/robot.jpg",
                "published_at": "2025-05-02"
            },
            {
                "id": 9,
                "title": "Catatan Tanpa Kategori",
                "content": "<p>Tanpa tag.</p>"
            }
        ]),
        "pengumuman" => json!([
            {
                "id": 3,
                "title": "Libur Semester",
                "tag": "Akademik",
                "content": "Perkuliahan libur selama dua minggu.",
                "attachment": "https://cdn.example.ac.id/surat.pdf",
                "published_at": "2026-09-20"
            }
        ]),
        "jadwal" => json!([
            { "id": 1, "course": "Basis Data", "lecturer": "Dr. Sari", "day": "Rabu",
              "start_time": "10:00", "end_time": "11:40", "room": "B201" },
            { "id": 2, "course": "Algoritma", "lecturer": "Dr. Budi", "day": "Senin",
              "start_time": "08:00", "end_time": "09:40", "room": "A101", "class_group": "A" }
        ]),
        "mahasiswa" => json!([
            { "id": 1, "nim": 2021001, "name": "Ayu Lestari", "cohort": 2021,
              "program": "Informatika" },
            { "id": 2, "nim": "2022002", "name": "Bima Saputra", "cohort": 2022,
              "program": "Matematika", "email": "bima@example.ac.id" }
        ]),
        "dokumen" => json!([
            { "id": 1, "title": "Kalender Akademik", "category": "Akademik",
              "file_url": "https://cdn.example.ac.id/kalender.pdf" }
        ]),
        "video" => json!([
            { "id": 1, "title": "Profil Fakultas",
              "url": "https://www.youtube.com/watch?v=abc123XYZ" }
        ]),
        _ => return None,
    };
    Some(value)
}

/// Shared state of the mock backend.
#[derive(Default)]
pub struct MockState {
    /// Resources answering with 500
    pub failing: Vec<&'static str>,
    pub detail_hits: AtomicUsize,
}

/// A running mock backend.
pub struct MockBackend {
    pub base_url: String,
    pub state: Arc<MockState>,
}

impl MockBackend {
    pub fn detail_hits(&self) -> usize {
        self.state.detail_hits.load(Ordering::SeqCst)
    }
}

async fn list(State(state): State<Arc<MockState>>, Path(resource): Path<String>) -> Response {
    if state.failing.contains(&resource.as_str()) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    match fixtures(&resource) {
        // Articles come wrapped, everything else bare.
        Some(items) if resource == "berita" => Json(json!({ "data": items })).into_response(),
        Some(items) => Json(items).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn detail(
    State(state): State<Arc<MockState>>,
    Path((resource, id)): Path<(String, String)>,
) -> Response {
    state.detail_hits.fetch_add(1, Ordering::SeqCst);
    if state.failing.contains(&resource.as_str()) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let record = fixtures(&resource).and_then(|items| {
        items.as_array()?.iter().find(|item| match &item["id"] {
            Value::Number(n) => n.to_string() == id,
            Value::String(s) => *s == id,
            _ => false,
        }).cloned()
    });
    match record {
        Some(record) => Json(json!({ "data": record })).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Start a mock backend on an ephemeral port.
pub async fn spawn_backend(failing: Vec<&'static str>) -> MockBackend {
    let state = Arc::new(MockState {
        failing,
        ..MockState::default()
    });
    let app = Router::new()
        .route("/api/:resource", get(list))
        .route("/api/:resource/detail/:id", get(detail))
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        base_url: format!("http://{addr}/api"),
        state,
    }
}

/// Configuration pointing at `api_base_url`.
pub fn test_config(api_base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = api_base_url.to_string();
    config.api.timeout_secs = 5;
    config.site.name = "Fakultas Uji".to_string();
    config.site.base_url = "https://fakultas.example.ac.id".to_string();
    config.server.assets_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/assets").into();
    config
}

/// Send a GET request through `app`.
pub async fn get_response(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Read a response body as text.
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Assert the fixed security headers are present.
pub fn assert_security_headers(response: &Response) {
    let headers = response.headers();
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["referrer-policy"], "strict-origin-when-cross-origin");
}
