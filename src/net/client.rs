// src/net/client.rs
//! Blocking HTTP client for the analysis service.
//!
//! Always used from worker threads (see `net::task`); the UI thread never
//! performs network IO directly.

use std::time::Duration;

use anyhow::Result;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Settings;
use crate::net::types::{AnalysisResponse, ApiErrorBody, TokenStats};
use crate::state::selection::SelectedFile;

/// Stats are optional; don't let a dead endpoint hold a thread for long.
const STATS_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from the analysis service boundary. The `Display` text of each
/// variant is exactly what the error panel shows.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Error: {0}")]
    Connection(String),
    /// Non-2xx response; `message` is the server-sent error text or a
    /// generic fallback naming the status.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// 2xx response whose body did not report success.
    #[error("Analysis did not complete successfully.")]
    Rejected,
    #[error("Error: {0}")]
    Parse(String),
    #[error("Error: {0}")]
    File(String),
}

#[derive(Clone)]
pub struct ApiClient {
    analyze_url: String,
    stats_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        // No overall timeout: an analysis run can take minutes and the
        // request has no abort path.
        let client = Client::builder().timeout(None).build()?;
        Ok(Self {
            analyze_url: settings.analyze_url(),
            stats_url: settings.stats_url(),
            client,
        })
    }

    /// Submit the selected files as one multipart request and decode the
    /// typed response. Returns `Ok` only for a 2xx response whose body
    /// reports success.
    pub fn analyze(&self, files: &[SelectedFile]) -> Result<AnalysisResponse, ApiError> {
        let mut form = Form::new();
        for file in files {
            let bytes = std::fs::read(&file.path)
                .map_err(|e| ApiError::File(format!("{}: {}", file.name, e)))?;
            let part = Part::bytes(bytes)
                .file_name(file.name.clone())
                .mime_str("text/csv")
                .map_err(|e| ApiError::File(e.to_string()))?;
            form = form.part("files", part);
        }

        info!("Submitting {} file(s) to {}", files.len(), self.analyze_url);
        let response = self
            .client
            .post(&self.analyze_url)
            .multipart(form)
            .send()
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("Analysis request failed (HTTP {})", status.as_u16()));
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: AnalysisResponse = response
            .json()
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        if !body.is_success() {
            debug!("Analysis response carried status {:?}", body.status);
            return Err(ApiError::Rejected);
        }
        Ok(body)
    }

    /// Best-effort fetch of the aggregate usage counters.
    pub fn fetch_stats(&self) -> Result<TokenStats, ApiError> {
        let response = self
            .client
            .get(&self.stats_url)
            .timeout(STATS_TIMEOUT)
            .send()
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: format!("Stats request failed (HTTP {})", status.as_u16()),
            });
        }
        response.json().map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn client_for(server: &mockito::Server) -> ApiClient {
        let settings = Settings {
            api_base_url: server.url(),
        };
        ApiClient::new(&settings).unwrap()
    }

    fn csv_fixture(dir: &TempDir, name: &str) -> SelectedFile {
        let path = dir.path().join(name);
        std::fs::write(&path, "HoleID,Depth\nDH001,10.5\n").unwrap();
        SelectedFile::new(path)
    }

    #[test]
    fn analyze_decodes_success_response() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/analyze")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "status": "success",
                    "results": [
                        {"file_type": "Collar", "field": "HoleID", "found": "BHID", "comment": "matched"}
                    ],
                    "files_processed": 1
                }"#,
            )
            .create();

        let dir = TempDir::new().unwrap();
        let files = vec![csv_fixture(&dir, "collar.csv")];
        let response = client_for(&server).analyze(&files).unwrap();

        mock.assert();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].found, "BHID");
        assert_eq!(response.files_processed, Some(1));
    }

    #[test]
    fn analyze_surfaces_server_error_text() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/analyze")
            .with_status(400)
            .with_body(r#"{"error": "bad file"}"#)
            .create();

        let dir = TempDir::new().unwrap();
        let files = vec![csv_fixture(&dir, "collar.csv")];
        let err = client_for(&server).analyze(&files).unwrap_err();
        assert!(err.to_string().contains("bad file"));
    }

    #[test]
    fn analyze_falls_back_when_error_body_unparseable() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/analyze")
            .with_status(500)
            .with_body("Internal Server Error")
            .create();

        let dir = TempDir::new().unwrap();
        let files = vec![csv_fixture(&dir, "collar.csv")];
        let err = client_for(&server).analyze(&files).unwrap_err();
        assert!(err.to_string().contains("HTTP 500"));
    }

    #[test]
    fn analyze_rejects_non_success_status_field() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/analyze")
            .with_status(200)
            .with_body(r#"{"status": "partial", "results": []}"#)
            .create();

        let dir = TempDir::new().unwrap();
        let files = vec![csv_fixture(&dir, "collar.csv")];
        let err = client_for(&server).analyze(&files).unwrap_err();
        assert!(matches!(err, ApiError::Rejected));
        assert_eq!(err.to_string(), "Analysis did not complete successfully.");
    }

    #[test]
    fn analyze_reports_missing_file() {
        let server = mockito::Server::new();
        let files = vec![SelectedFile::new("/nonexistent/collar.csv".into())];
        let err = client_for(&server).analyze(&files).unwrap_err();
        assert!(matches!(err, ApiError::File(_)));
        assert!(err.to_string().starts_with("Error:"));
    }

    #[test]
    fn fetch_stats_decodes_counters() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/stats")
            .with_status(200)
            .with_body(
                r#"{
                    "total_input_tokens": 100,
                    "total_output_tokens": 50,
                    "total_requests": 2,
                    "total_cost": 0.03
                }"#,
            )
            .create();

        let stats = client_for(&server).fetch_stats().unwrap();
        assert_eq!(stats.total_tokens(), 150);
        assert_eq!(stats.total_requests, Some(2));
    }

    #[test]
    fn fetch_stats_errors_on_non_ok() {
        let mut server = mockito::Server::new();
        server.mock("GET", "/stats").with_status(503).create();

        let err = client_for(&server).fetch_stats().unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 503, .. }));
    }
}
