//! Project form validation and list helpers (pure functions)

use crate::api::{FileRecord, Project};
use crate::router::find_project;
use crate::session::types::ProjectFormError;

/// Validate a trimmed project name against the known projects
pub fn validate_project_form(name: &str, projects: &[Project]) -> Result<(), ProjectFormError> {
    if name.is_empty() {
        return Err(ProjectFormError::EmptyName);
    }
    if find_project(projects, name).is_some() {
        return Err(ProjectFormError::DuplicateName(name.to_string()));
    }
    Ok(())
}

/// Add or remove `name`, keeping first-insertion order
pub fn toggle_name(names: &mut Vec<String>, name: &str) {
    if let Some(idx) = names.iter().position(|n| n == name) {
        names.remove(idx);
    } else {
        names.push(name.to_string());
    }
}

/// Drop selected file names that the API no longer lists
pub fn retain_known_files(selected: &mut Vec<String>, files: &[FileRecord]) {
    selected.retain(|name| files.iter().any(|f| &f.name == name));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects() -> Vec<Project> {
        vec![Project {
            id: 1,
            name: "Essay1".to_string(),
            description: String::new(),
        }]
    }

    #[test]
    fn test_validate_project_form() {
        assert_eq!(validate_project_form("", &projects()), Err(ProjectFormError::EmptyName));
        assert_eq!(
            validate_project_form("Essay1", &projects()),
            Err(ProjectFormError::DuplicateName("Essay1".to_string()))
        );
        assert_eq!(validate_project_form("Essay2", &projects()), Ok(()));
    }

    #[test]
    fn test_toggle_name() {
        let mut names = vec!["a".to_string()];
        toggle_name(&mut names, "b");
        assert_eq!(names, vec!["a", "b"]);
        toggle_name(&mut names, "a");
        assert_eq!(names, vec!["b"]);
    }

    #[test]
    fn test_retain_known_files() {
        let files = vec![FileRecord {
            id: 9,
            name: "notes.txt".to_string(),
        }];
        let mut selected = vec!["notes.txt".to_string(), "gone.pdf".to_string()];
        retain_known_files(&mut selected, &files);
        assert_eq!(selected, vec!["notes.txt"]);
    }
}
