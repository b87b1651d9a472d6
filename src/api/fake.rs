//! In-memory ProjectApi used by the session tests

use super::{
    ApiError, ApiResult, Credentials, FileRecord, ParsedQuestion, Project, ProjectApi,
    ProjectData, Question, SaveResponse,
};
use reqwest::StatusCode;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

#[derive(Default)]
pub struct FakeState {
    pub projects: Vec<Project>,
    pub files: Vec<FileRecord>,
    pub questions: HashMap<i64, Vec<Question>>,
    pub saved: HashMap<i64, Vec<ParsedQuestion>>,
    pub uploaded_text: Vec<(i64, String)>,
    pub next_id: i64,
    /// Project names whose deletion reports false
    pub refuse_delete: HashSet<String>,
    /// Project names whose deletion errors out
    pub error_delete: HashSet<String>,
    pub fail_create: bool,
    pub fail_fetch: bool,
    pub fail_questions: bool,
    pub accept_credentials: bool,
    pub credentials: Credentials,
    pub calls: Vec<String>,
}

pub struct FakeApi {
    pub state: RefCell<FakeState>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(FakeState {
                next_id: 1,
                accept_credentials: true,
                ..FakeState::default()
            }),
        }
    }

    pub fn with_projects(names: &[&str]) -> Self {
        let api = Self::new();
        for name in names {
            api.add_project(name, &format!("{name} description"));
        }
        api
    }

    pub fn add_project(&self, name: &str, description: &str) -> Project {
        let mut state = self.state.borrow_mut();
        let project = Project {
            id: state.next_id,
            name: name.to_string(),
            description: description.to_string(),
        };
        state.next_id += 1;
        state.projects.push(project.clone());
        project
    }

    pub fn add_file(&self, name: &str) {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.files.push(FileRecord {
            id,
            name: name.to_string(),
        });
    }

    /// Drop a project server-side without the session knowing
    pub fn remove_project(&self, name: &str) {
        self.state.borrow_mut().projects.retain(|p| p.name != name);
    }

    pub fn calls(&self, prefix: &str) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn record(&self, call: String) {
        self.state.borrow_mut().calls.push(call);
    }
}

fn server_error(context: &'static str) -> ApiError {
    ApiError::Status {
        context,
        status: StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ProjectApi for FakeApi {
    fn set_credentials(&mut self, credentials: Credentials) {
        self.state.get_mut().credentials = credentials;
    }

    fn check_credentials(&self, credentials: &Credentials) -> ApiResult<bool> {
        self.record("check_credentials".to_string());
        if !credentials.is_complete() {
            return Err(ApiError::MissingCredentials);
        }
        Ok(self.state.borrow().accept_credentials)
    }

    fn fetch_data(&self, _credentials: &Credentials) -> ApiResult<ProjectData> {
        self.record("fetch_data".to_string());
        let state = self.state.borrow();
        if state.fail_fetch {
            return Err(server_error("Failed to fetch project data"));
        }
        Ok(ProjectData {
            projects: state.projects.clone(),
            files: state.files.clone(),
        })
    }

    fn create_project(
        &self,
        name: &str,
        description: &str,
        _credentials: &Credentials,
    ) -> ApiResult<Project> {
        self.record(format!("create_project:{name}"));
        if self.state.borrow().fail_create {
            return Err(server_error("Failed to create project"));
        }
        Ok(self.add_project(name, description))
    }

    fn delete_project(&self, project_id: i64) -> ApiResult<bool> {
        self.record(format!("delete_project:{project_id}"));
        let mut state = self.state.borrow_mut();
        let Some(project) = state.projects.iter().find(|p| p.id == project_id).cloned() else {
            return Ok(false);
        };
        if state.error_delete.contains(&project.name) {
            return Err(server_error("Failed to delete project"));
        }
        if state.refuse_delete.contains(&project.name) {
            return Ok(false);
        }
        state.projects.retain(|p| p.id != project_id);
        Ok(true)
    }

    fn get_questions(&self, project: &Project) -> ApiResult<Vec<Question>> {
        self.record(format!("get_questions:{}", project.id));
        let state = self.state.borrow();
        if state.fail_questions {
            return Err(server_error("Failed to fetch prompts"));
        }
        Ok(state.questions.get(&project.id).cloned().unwrap_or_default())
    }

    fn save_questions(
        &self,
        questions: &[ParsedQuestion],
        project: &Project,
    ) -> ApiResult<SaveResponse> {
        self.record(format!("save_questions:{}", project.id));
        self.state
            .borrow_mut()
            .saved
            .insert(project.id, questions.to_vec());
        Ok(SaveResponse { result: true })
    }

    fn upload_files(&self, project: &Project, paths: &[PathBuf]) -> ApiResult<()> {
        self.record(format!("upload_files:{}", project.id));
        for path in paths {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            self.add_file(&name);
        }
        Ok(())
    }

    fn upload_text(&self, project: &Project, text: &str) -> ApiResult<()> {
        self.record(format!("upload_text:{}", project.id));
        self.state
            .borrow_mut()
            .uploaded_text
            .push((project.id, text.to_string()));
        Ok(())
    }

    fn answer_question(
        &self,
        question: &str,
        files: &[String],
        project: &Project,
    ) -> ApiResult<String> {
        self.record(format!("answer_question:{}", project.id));
        Ok(format!("{question} [{}]", files.join(", ")))
    }
}
