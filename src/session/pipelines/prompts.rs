//! Prompt workflows: add, answer, save

use crate::api::{Question, ProjectApi};
use crate::session::Session;
use crate::session::pure::{format_questions, parse_prompt_input};
use tracing::{info, warn};

const PROMPTS_NOT_LOADED: &str =
    "Stored prompts could not be loaded. Reload them before making changes.";

/// Append the prompt input buffer to the selected project's prompts
pub fn add_questions(session: &mut Session, api: &dyn ProjectApi) -> usize {
    if session.selected().is_none() {
        session.notify_error("Please select a valid project.");
        return 0;
    }
    let parsed = parse_prompt_input(&session.prompt_input);
    if parsed.is_empty() {
        session.notify_info("Please enter a prompt.");
        return 0;
    }

    // New prompts join the selected project's stored list, never a partial one
    if !session.load_questions(api) {
        session.notify_error(PROMPTS_NOT_LOADED);
        return 0;
    }
    let count = parsed.len();
    session
        .questions
        .extend(parsed.into_iter().map(Question::new));
    session.prompt_input.clear();
    info!(count, "prompts added");
    count
}

pub fn remove_question(session: &mut Session, index: usize) {
    if index < session.questions.len() {
        session.questions.remove(index);
    }
}

/// Ask the API to answer one prompt with the selected files as reference
pub fn answer_question(session: &mut Session, api: &dyn ProjectApi, index: usize) {
    let Some(project) = session.selected().cloned() else {
        session.notify_error("Please select a valid project.");
        return;
    };
    let Some(text) = session
        .questions
        .get(index)
        .map(|q| q.text.trim().to_string())
        .filter(|t| !t.is_empty())
    else {
        return;
    };

    match api.answer_question(&text, &session.selected_files, &project) {
        Ok(answer) => {
            if let Some(question) = session.questions.get_mut(index) {
                question.answer = Some(answer);
            }
        }
        Err(e) => {
            warn!(project = %project.name, error = %e, "answer request failed");
            session.notify_error(format!("Could not answer prompt: {e}"));
        }
    }
}

/// Save every prompt of the selected project
pub fn save_questions(session: &mut Session, api: &dyn ProjectApi) -> bool {
    let Some(project) = session.selected().cloned() else {
        session.notify_error("Please select a valid project.");
        return false;
    };
    if session.questions_for != Some(project.id) {
        session.notify_error(PROMPTS_NOT_LOADED);
        return false;
    }
    let parsed = format_questions(&session.questions);

    match api.save_questions(&parsed, &project) {
        Ok(response) if response.result => {
            info!(project = %project.name, count = parsed.len(), "prompts saved");
            session.notify_success("Prompts saved!");
            true
        }
        Ok(_) => {
            warn!(project = %project.name, "prompt save rejected");
            session.notify_error("Prompts were not saved.");
            false
        }
        Err(e) => {
            warn!(project = %project.name, error = %e, "prompt save failed");
            session.notify_error(format!("Prompts were not saved: {e}"));
            false
        }
    }
}
