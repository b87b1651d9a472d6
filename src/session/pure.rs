//! Session pure functions - no API calls, no rendering

mod projects;
mod prompts;

pub use projects::{retain_known_files, toggle_name, validate_project_form};
pub use prompts::{format_questions, parse_prompt_input};
