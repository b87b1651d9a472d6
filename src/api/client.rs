//! Blocking HTTP client for the project API

use super::ProjectApi;
use super::types::{
    AnswerRequestBody, AnswerResponse, ApiError, ApiResult, Credentials, NewProjectBody,
    ParsedQuestion, Project, ProjectData, Question, SaveQuestionsBody, SaveResponse,
    TextUploadBody,
};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response, multipart};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

const USER_HEADER: &str = "X-Sliverhand-User";

pub struct HttpProjectApi {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl HttpProjectApi {
    pub fn new(base_url: &str, timeout: Duration, credentials: Credentials) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("sliverhand/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    fn authed(builder: RequestBuilder, credentials: &Credentials) -> RequestBuilder {
        builder
            .bearer_auth(&credentials.api_key)
            .header(USER_HEADER, &credentials.username)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        Self::authed(self.client.get(self.url(path)), &self.credentials)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        Self::authed(self.client.post(self.url(path)), &self.credentials)
    }
}

/// Join the base URL and an absolute API path
fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn ensure_success(response: Response, context: &'static str) -> ApiResult<Response> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status { context, status });
    }
    Ok(response)
}

impl ProjectApi for HttpProjectApi {
    fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = credentials;
    }

    fn check_credentials(&self, credentials: &Credentials) -> ApiResult<bool> {
        if !credentials.is_complete() {
            return Err(ApiError::MissingCredentials);
        }
        let response = Self::authed(self.client.get(self.url("/auth/check")), credentials).send()?;
        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(false),
            _ => ensure_success(response, "Credential check failed").map(|_| true),
        }
    }

    fn fetch_data(&self, credentials: &Credentials) -> ApiResult<ProjectData> {
        debug!(base_url = %self.base_url, "fetching project data");
        let response = Self::authed(self.client.get(self.url("/data")), credentials).send()?;
        Ok(ensure_success(response, "Failed to fetch project data")?.json()?)
    }

    fn create_project(
        &self,
        name: &str,
        description: &str,
        credentials: &Credentials,
    ) -> ApiResult<Project> {
        let response = Self::authed(self.client.post(self.url("/projects")), credentials)
            .json(&NewProjectBody { name, description })
            .send()?;
        Ok(ensure_success(response, "Failed to create project")?.json()?)
    }

    fn delete_project(&self, project_id: i64) -> ApiResult<bool> {
        let response = Self::authed(
            self.client.delete(self.url(&format!("/projects/{project_id}"))),
            &self.credentials,
        )
        .send()?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            _ => ensure_success(response, "Failed to delete project").map(|_| true),
        }
    }

    fn get_questions(&self, project: &Project) -> ApiResult<Vec<Question>> {
        let response = self
            .get(&format!("/projects/{}/questions", project.id))
            .send()?;
        Ok(ensure_success(response, "Failed to fetch prompts")?.json()?)
    }

    fn save_questions(
        &self,
        questions: &[ParsedQuestion],
        project: &Project,
    ) -> ApiResult<SaveResponse> {
        let response = Self::authed(
            self.client
                .put(self.url(&format!("/projects/{}/questions", project.id))),
            &self.credentials,
        )
        .json(&SaveQuestionsBody {
            project_id: project.id,
            questions,
        })
        .send()?;
        Ok(ensure_success(response, "Failed to save prompts")?.json()?)
    }

    fn upload_files(&self, project: &Project, paths: &[PathBuf]) -> ApiResult<()> {
        let mut form = multipart::Form::new();
        for path in paths {
            form = form.file("files", path)?;
        }
        let response = self
            .post(&format!("/projects/{}/files", project.id))
            .multipart(form)
            .send()?;
        ensure_success(response, "Failed to upload files")?;
        Ok(())
    }

    fn upload_text(&self, project: &Project, text: &str) -> ApiResult<()> {
        let response = self
            .post(&format!("/projects/{}/text", project.id))
            .json(&TextUploadBody { text })
            .send()?;
        ensure_success(response, "Failed to upload text")?;
        Ok(())
    }

    fn answer_question(
        &self,
        question: &str,
        files: &[String],
        project: &Project,
    ) -> ApiResult<String> {
        let response = self
            .post(&format!("/projects/{}/answer", project.id))
            .json(&AnswerRequestBody { question, files })
            .send()?;
        let body: AnswerResponse = ensure_success(response, "Failed to answer prompt")?.json()?;
        Ok(body.answer)
    }
}
