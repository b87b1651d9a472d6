//! API module type definitions

use serde::{Deserialize, Serialize};

/// A named unit of work holding uploaded documents and prompts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// An uploaded document, as listed by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: i64,
    pub name: String,
}

/// A stored prompt, optionally answered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Question {
    /// None until the prompt has been saved once
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            answer: None,
        }
    }
}

/// Save payload entry built from the session's prompt list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuestion {
    /// 1-based position in the saved list
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// Projects and files visible to the signed-in user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectData {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub files: Vec<FileRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub result: bool,
}

/// API access credentials (persisted in settings.json)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub api_key: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    /// Both fields filled in (whitespace does not count)
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.api_key.trim().is_empty()
    }
}

// Request/response bodies used only by the HTTP client

#[derive(Serialize)]
pub(super) struct NewProjectBody<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

#[derive(Serialize)]
pub(super) struct SaveQuestionsBody<'a> {
    pub project_id: i64,
    pub questions: &'a [ParsedQuestion],
}

#[derive(Serialize)]
pub(super) struct TextUploadBody<'a> {
    pub text: &'a str,
}

#[derive(Serialize)]
pub(super) struct AnswerRequestBody<'a> {
    pub question: &'a str,
    pub files: &'a [String],
}

#[derive(Deserialize)]
pub(super) struct AnswerResponse {
    pub answer: String,
}

/// Errors raised while talking to the project API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{context}: HTTP {status}")]
    Status {
        context: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("could not read upload: {0}")]
    Io(#[from] std::io::Error),

    #[error("no credentials configured")]
    MissingCredentials,
}

pub type ApiResult<T> = Result<T, ApiError>;
