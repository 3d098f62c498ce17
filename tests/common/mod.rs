#![allow(dead_code)]

use app_skeleton::prelude::*;
use app_skeleton::server::make_service;
use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::{Arc, Mutex};

/// Database probe with a fixed outcome.
pub struct FakeDatabase {
    pub error: Option<String>,
}

#[async_trait]
impl DatabaseProbe for FakeDatabase {
    async fn ping(&self) -> Result<(), CheckError> {
        match &self.error {
            Some(message) => Err(CheckError::Database(message.clone())),
            None => Ok(()),
        }
    }
}

/// Storage probe with a fixed outcome.
pub struct FakeStorage {
    pub writable: bool,
}

#[async_trait]
impl StorageProbe for FakeStorage {
    async fn is_writable(&self) -> bool {
        self.writable
    }
}

/// Mailer that records every message and optionally fails.
#[derive(Default)]
pub struct RecordingMailer {
    pub failure: Option<String>,
    pub sent: Mutex<Vec<MailMessage>>,
}

impl RecordingMailer {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<MailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: MailMessage) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(message);
        match &self.failure {
            Some(text) => Err(MailError::Transport(text.clone())),
            None => Ok(()),
        }
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub mailer: Arc<RecordingMailer>,
}

pub fn spawn_app(database_error: Option<&str>, storage_writable: bool) -> TestApp {
    spawn_app_with_mailer(
        database_error,
        storage_writable,
        Arc::new(RecordingMailer::default()),
    )
}

pub fn spawn_app_with_mailer(
    database_error: Option<&str>,
    storage_writable: bool,
    mailer: Arc<RecordingMailer>,
) -> TestApp {
    let health_service = Arc::new(HealthService::new(
        Arc::new(FakeDatabase {
            error: database_error.map(str::to_string),
        }),
        Arc::new(FakeStorage {
            writable: storage_writable,
        }),
        AppInfo::new("Laravel", "1.0.0", "testing"),
    ));
    let mail_service = Arc::new(MailService::new(mailer.clone()));

    let state = AppState::new(health_service, mail_service);
    let server = TestServer::new(make_service(state)).unwrap();

    TestApp { server, mailer }
}

pub fn assert_iso_timestamp(value: &serde_json::Value) {
    let stamp = value.as_str().expect("timestamp must be a string");
    assert!(
        chrono::DateTime::parse_from_rfc3339(stamp).is_ok(),
        "not an ISO-8601 timestamp: {stamp}"
    );
}
