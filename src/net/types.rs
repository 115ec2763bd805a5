// src/net/types.rs
//! Wire types for the analysis service.

use serde::Deserialize;

/// Sentinel the service sends when a field has no matching column.
pub const NOT_FOUND: &str = "NOT FOUND";
/// Sentinel for fields that keep their original column name.
pub const ORIGINAL_COLUMN: &str = "(original column)";

/// One row of the consolidated analysis summary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResultRow {
    pub file_type: String,
    pub field: String,
    pub found: String,
    pub comment: String,
}

/// Classification of the `found` value, derived at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoundKind {
    NotFound,
    Original,
    Named,
}

impl AnalysisResultRow {
    pub fn found_kind(&self) -> FoundKind {
        match self.found.as_str() {
            NOT_FOUND => FoundKind::NotFound,
            ORIGINAL_COLUMN => FoundKind::Original,
            _ => FoundKind::Named,
        }
    }
}

/// Body of a successful `POST /analyze` response.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<AnalysisResultRow>,
    pub token_stats: Option<TokenStats>,
    pub files_processed: Option<u32>,
}

impl AnalysisResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Aggregate usage counters, as returned by `GET /stats` or inlined in an
/// analysis response. Every field is optional; the service has grown them
/// over time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenStats {
    pub total_tokens: Option<u64>,
    pub total_input_tokens: Option<u64>,
    pub total_output_tokens: Option<u64>,
    pub total_cost: Option<f64>,
    pub total_requests: Option<u64>,
    pub model: Option<String>,
    pub last_updated: Option<String>,
}

impl TokenStats {
    /// Displayed token total: `total_tokens` if present, otherwise the sum
    /// of the input and output counters.
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens.unwrap_or_else(|| {
            self.total_input_tokens.unwrap_or(0) + self.total_output_tokens.unwrap_or(0)
        })
    }

    /// Average cost per request; `None` when no requests have been made.
    pub fn average_cost(&self) -> Option<f64> {
        let requests = self.total_requests.unwrap_or(0);
        if requests == 0 {
            return None;
        }
        Some(self.total_cost.unwrap_or(0.0) / requests as f64)
    }
}

/// Error body of a failed analysis request.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<String>,
}
