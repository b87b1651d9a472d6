//! Project API collaborator
//!
//! Everything persistent lives behind the remote API: projects, uploaded
//! documents, prompts and AI answers. The app only talks to it through the
//! [`ProjectApi`] trait so the session logic can be driven by a fake in tests.
//!
//! ## Module Structure
//! - `types.rs`: Project, FileRecord, Question, Credentials, ApiError
//! - `client.rs`: blocking HTTP implementation over reqwest

mod client;
#[cfg(test)]
pub mod fake;
mod types;

use std::path::PathBuf;

pub use client::HttpProjectApi;
pub use types::{
    ApiError, ApiResult, Credentials, FileRecord, ParsedQuestion, Project, ProjectData, Question,
    SaveResponse,
};

/// Operations the app needs from the remote API.
///
/// Calls block the caller until the API answers or the client times out.
pub trait ProjectApi {
    /// Replace the credentials used for authenticated calls
    fn set_credentials(&mut self, credentials: Credentials);

    /// Ask the API whether `credentials` grant access
    fn check_credentials(&self, credentials: &Credentials) -> ApiResult<bool>;

    /// Fetch the current project and file lists
    fn fetch_data(&self, credentials: &Credentials) -> ApiResult<ProjectData>;

    fn create_project(
        &self,
        name: &str,
        description: &str,
        credentials: &Credentials,
    ) -> ApiResult<Project>;

    /// Returns false when the API refused or did not find the project
    fn delete_project(&self, project_id: i64) -> ApiResult<bool>;

    fn get_questions(&self, project: &Project) -> ApiResult<Vec<Question>>;

    fn save_questions(
        &self,
        questions: &[ParsedQuestion],
        project: &Project,
    ) -> ApiResult<SaveResponse>;

    /// Upload pdf/txt documents into a project's knowledge base
    fn upload_files(&self, project: &Project, paths: &[PathBuf]) -> ApiResult<()>;

    /// Upload free text as a supporting document
    fn upload_text(&self, project: &Project, text: &str) -> ApiResult<()>;

    /// Answer a prompt using the named files as reference material
    fn answer_question(
        &self,
        question: &str,
        files: &[String],
        project: &Project,
    ) -> ApiResult<String>;
}
