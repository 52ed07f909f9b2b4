//! Project configuration model.
//! Holds the values that describe the project to generate, the closed set of
//! project types, and project-name validation.

use crate::constants::{DEFAULT_AUTHOR, RESERVED_NAME_CHARS};
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Kind of project being generated. Drives directory layout and artifact variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[default]
    Cli,
    Library,
    Service,
}

impl ProjectType {
    /// All project types, in the order they are offered interactively.
    pub const ALL: [ProjectType; 3] =
        [ProjectType::Cli, ProjectType::Library, ProjectType::Service];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Cli => "cli",
            ProjectType::Library => "library",
            ProjectType::Service => "service",
        }
    }

    /// Human readable label used by the interactive prompt.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Cli => "CLI Application",
            ProjectType::Library => "Library",
            ProjectType::Service => "Service/API",
        }
    }

    /// Parses a project type, falling back to the default (`cli`) for
    /// anything unrecognized. Only the interactive flow uses this.
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cli" => Ok(ProjectType::Cli),
            "library" => Ok(ProjectType::Library),
            "service" => Ok(ProjectType::Service),
            _ => Err(Error::InvalidProjectTypeError { project_type: s.to_string() }),
        }
    }
}

/// Everything the generator needs to know about the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    pub project_name: String,
    pub module_path: String,
    pub author: String,
    pub license: String,
    pub project_type: ProjectType,
}

impl ProjectConfig {
    /// Fills the module path and author when they were left empty.
    ///
    /// The module path defaults to the project name and the author to a
    /// placeholder name.
    pub fn apply_defaults(&mut self) {
        if self.module_path.is_empty() {
            self.module_path = self.project_name.clone();
        }
        if self.author.is_empty() {
            self.author = DEFAULT_AUTHOR.to_string();
        }
    }
}

/// Checks that a project name is usable as a directory name.
///
/// # Errors
/// * `Error::ValidationError` if the name is empty or contains a space, a
///   control character or one of `/ \ : * ? " < > |`
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::ValidationError("project name cannot be empty".to_string()));
    }

    if name.contains(RESERVED_NAME_CHARS) || name.chars().any(char::is_control) {
        return Err(Error::ValidationError(format!(
            "project name '{name}' contains invalid characters"
        )));
    }

    Ok(())
}
