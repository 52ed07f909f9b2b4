#![allow(dead_code)]

use scaffold::config::{ProjectConfig, ProjectType};
use scaffold::error::{Error, Result};
use scaffold::template::{Template, TemplateSource};
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// In-memory template source. Every template renders its own name plus the
/// project name; static files hold their own name.
#[derive(Default)]
pub struct MemoryTemplates {
    templates: HashMap<String, String>,
    statics: HashMap<String, Vec<u8>>,
}

impl MemoryTemplates {
    pub fn complete() -> Self {
        let mut source = Self::default();
        for name in [
            "README.md.j2",
            "Makefile-cli.j2",
            "Makefile-library.j2",
            "Makefile-service.j2",
            "gitignore.j2",
            "go.mod.j2",
            "main.go.j2",
            "Dockerfile.j2",
        ] {
            source = source.with_template(name, &format!("{name} for {{{{ project_name }}}}\n"));
        }
        for name in [
            "workflows/test.yml",
            "workflows/release-cli.yml",
            "workflows/release-library.yml",
            "workflows/release-service.yml",
        ] {
            source = source.with_static(name, name.as_bytes());
        }
        source
    }

    pub fn with_template(mut self, name: &str, source: &str) -> Self {
        self.templates.insert(name.to_string(), source.to_string());
        self
    }

    pub fn with_static(mut self, name: &str, content: &[u8]) -> Self {
        self.statics.insert(name.to_string(), content.to_vec());
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        self.templates.remove(name);
        self.statics.remove(name);
        self
    }
}

impl TemplateSource for MemoryTemplates {
    fn resolve_template(&self, name: &str) -> Result<Template> {
        self.templates
            .get(name)
            .map(|source| Template::new(name.to_string(), source.clone()))
            .ok_or_else(|| Error::TemplateNotFoundError { name: name.to_string() })
    }

    fn resolve_static_file(&self, name: &str) -> Result<Vec<u8>> {
        self.statics
            .get(name)
            .cloned()
            .ok_or_else(|| Error::TemplateNotFoundError { name: name.to_string() })
    }
}

pub fn config(name: &str, project_type: ProjectType) -> ProjectConfig {
    ProjectConfig {
        project_name: name.to_string(),
        module_path: name.to_string(),
        author: "Your Name".to_string(),
        license: "MIT".to_string(),
        project_type,
    }
}

/// All paths below `root`, relative to it.
pub fn tree(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| entry.unwrap().path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}
