use serde::{Deserialize, Serialize};

use beacon_core::models::{CandidateResult, QueryContext, QueryParams};

/// How the data fetch ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStatus {
    /// The pipeline never reached the fetch (no usable candidate).
    NotAttempted,
    /// First attempt succeeded.
    Fetched,
    /// First attempt failed, the corrected retry succeeded.
    FetchedAfterCorrection,
    /// Both the first attempt and the corrected retry failed.
    Failed,
}

/// Everything a caller needs to display or audit one answered question.
///
/// Candidate documents are display-trimmed (no embeddings, no parameter
/// dumps); the preview holds at most the first few fetched rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskReport {
    pub question: String,
    /// Full ranked candidate list from the fine-ranking stage.
    pub candidates: Vec<CandidateResult>,
    pub chosen: Option<CandidateResult>,
    /// Near-tie alternatives within the configured threshold of the top.
    pub ties: Vec<CandidateResult>,
    pub context: Option<QueryContext>,
    pub params: Option<QueryParams>,
    pub fetch_status: FetchStatus,
    /// Error message from the first fetch attempt, when it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrected_params: Option<QueryParams>,
    /// Error message from the corrected retry, when it also failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_error: Option<String>,
    pub data_preview: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl AskReport {
    /// An empty report for a question that produced no usable candidate.
    pub fn empty(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            candidates: Vec::new(),
            chosen: None,
            ties: Vec::new(),
            context: None,
            params: None,
            fetch_status: FetchStatus::NotAttempted,
            error: None,
            corrected_params: None,
            second_error: None,
            data_preview: Vec::new(),
            answer: None,
        }
    }
}
