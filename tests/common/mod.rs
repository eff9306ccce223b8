use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use chrono::Utc;
use http_body_util::BodyExt;

use estudiantes_api::config::cors::CorsConfig;
use estudiantes_api::modules::students::model::{NewStudent, Student, StudentPatch};
use estudiantes_api::modules::students::repo::StudentRepo;
use estudiantes_api::router::init_router;
use estudiantes_api::state::AppState;

#[derive(Debug, Default)]
struct MemoryState {
    next_id: i64,
    rows: BTreeMap<i64, Student>,
    fail_inserts: bool,
}

/// In-memory stand-in for the Postgres repository. Mirrors the storage
/// semantics the handlers rely on: sequential never-reused ids, a unique
/// constraint on email, and `updated_at` refreshed on update.
#[derive(Clone, Debug, Default)]
pub struct MemoryStudentRepo {
    inner: Arc<Mutex<MemoryState>>,
}

impl MemoryStudentRepo {
    /// Makes every subsequent insert fail, simulating the storage layer
    /// going away between the validation pre-check and the write.
    pub fn fail_inserts(&self, fail: bool) {
        self.inner.lock().unwrap().fail_inserts = fail;
    }
}

impl StudentRepo for MemoryStudentRepo {
    async fn find_all(&self) -> Result<Vec<Student>> {
        let state = self.inner.lock().unwrap();
        Ok(state.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>> {
        let state = self.inner.lock().unwrap();
        Ok(state.rows.get(&id).cloned())
    }

    async fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> Result<bool> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .rows
            .values()
            .any(|s| s.email == email && Some(s.id) != exclude_id))
    }

    async fn insert(&self, new: NewStudent) -> Result<Student> {
        let mut state = self.inner.lock().unwrap();
        if state.fail_inserts {
            return Err(anyhow!("connection closed"));
        }
        if state.rows.values().any(|s| s.email == new.email) {
            return Err(anyhow!(
                "duplicate key value violates unique constraint \"students_email_key\""
            ));
        }

        state.next_id += 1;
        let now = Utc::now();
        let student = Student {
            id: state.next_id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            language: new.language,
            created_at: now,
            updated_at: now,
        };
        state.rows.insert(student.id, student.clone());
        Ok(student)
    }

    async fn update(&self, id: i64, patch: StudentPatch) -> Result<Option<Student>> {
        let mut state = self.inner.lock().unwrap();

        if let Some(email) = patch.email.as_deref() {
            if state.rows.values().any(|s| s.id != id && s.email == email) {
                return Err(anyhow!(
                    "duplicate key value violates unique constraint \"students_email_key\""
                ));
            }
        }

        let Some(row) = state.rows.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(name) = patch.name {
            row.name = name;
        }
        if let Some(email) = patch.email {
            row.email = email;
        }
        if let Some(phone) = patch.phone {
            row.phone = phone;
        }
        if let Some(language) = patch.language {
            row.language = language;
        }
        row.updated_at = Utc::now();

        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut state = self.inner.lock().unwrap();
        Ok(state.rows.remove(&id).is_some())
    }
}

pub fn setup_test_app() -> Router {
    setup_test_app_with_repo().0
}

pub fn setup_test_app_with_repo() -> (Router, MemoryStudentRepo) {
    let repo = MemoryStudentRepo::default();
    let state = AppState {
        repo: repo.clone(),
        cors_config: CorsConfig::from_env(),
    };
    (init_router(state), repo)
}

pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
