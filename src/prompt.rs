//! Interactive configuration gathering.
use crate::config::{ProjectConfig, ProjectType};
use crate::constants::{DEFAULT_AUTHOR, LICENSES};
use crate::error::{Error, Result};
use dialoguer::{Input, Select};

/// Trait for completing a partially filled project configuration.
pub trait Prompter {
    /// Asks for the values missing from `partial` and returns the completed
    /// configuration.
    ///
    /// # Errors
    /// * `Error::PromptError` if the user aborts the prompt
    fn fill(&self, partial: ProjectConfig) -> Result<ProjectConfig>;
}

/// Terminal prompter built on dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }

    fn text(&self, prompt: &str, default: String) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .default(default)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .default(default)
            .items(items)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

impl Prompter for DialoguerPrompter {
    fn fill(&self, mut partial: ProjectConfig) -> Result<ProjectConfig> {
        if partial.project_name.is_empty() {
            partial.project_name = Input::<String>::new()
                .with_prompt("Project name")
                .validate_with(|input: &String| -> std::result::Result<(), &str> {
                    if input.is_empty() {
                        Err("project name cannot be empty")
                    } else {
                        Ok(())
                    }
                })
                .interact_text()
                .map_err(|e| Error::PromptError(e.to_string()))?;
        }

        let module_default = if partial.module_path.is_empty() {
            partial.project_name.clone()
        } else {
            partial.module_path.clone()
        };
        partial.module_path =
            self.text("Module path (e.g. github.com/user/project)", module_default)?;

        let author_default = if partial.author.is_empty() {
            DEFAULT_AUTHOR.to_string()
        } else {
            partial.author.clone()
        };
        partial.author = self.text("Author", author_default)?;

        let license_default = LICENSES.iter().position(|l| *l == partial.license).unwrap_or(0);
        partial.license = LICENSES[self.select("License", &LICENSES, license_default)?].to_string();

        let labels: Vec<&str> = ProjectType::ALL.iter().map(ProjectType::label).collect();
        let type_default =
            ProjectType::ALL.iter().position(|t| *t == partial.project_type).unwrap_or(0);
        let type_index = self.select("Project type", &labels, type_default)?;
        partial.project_type = ProjectType::ALL[type_index];

        Ok(partial)
    }
}
