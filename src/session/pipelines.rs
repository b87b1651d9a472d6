//! Session pipelines - multi-step workflows
//!
//! Compose pure functions and API operations into complete user actions.

mod create_project;
mod delete_projects;
mod prompts;
mod uploads;

pub use create_project::create_project;
pub use delete_projects::delete_selected_projects;
pub use prompts::{add_questions, answer_question, remove_question, save_questions};
pub use uploads::{upload_files, upload_manual_text};
