use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Succeeded,
    Failed,
}

/// Wire shape the caller expects from a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedOutput {
    Json,
    Media,
}

/// One text field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JobInput {
    /// JSON-posted features: the body is sent as-is.
    Text { body: serde_json::Value },
    /// Multipart features: one file part plus parameter fields.
    Upload {
        path: PathBuf,
        file_field: String,
        fields: Vec<FormField>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequest {
    pub project_id: String,
    pub feature_id: String,
    /// Backend path, e.g. `/text_to_speech`.
    pub endpoint: String,
    pub output: ExpectedOutput,
    pub input: JobInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobResult {
    pub project_id: String,
    pub feature_id: String,
    pub status: JobStatus,
    /// Inline, page-local message shown to the user on failure.
    pub message: Option<String>,
    pub logs: Vec<String>,
}
