//! Template sources for scaffold.
//! A template source resolves a name either to template text that is rendered
//! against the project configuration, or to static bytes copied verbatim.
use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use chrono::Datelike;
use log::debug;
use rust_embed::RustEmbed;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Values available to every template.
#[derive(Debug, Serialize)]
pub struct RenderContext<'a> {
    #[serde(flatten)]
    pub config: &'a ProjectConfig,
    /// Current calendar year
    pub year: i32,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a ProjectConfig) -> Self {
        Self { config, year: chrono::Local::now().year() }
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// A named template ready for rendering.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    source: String,
}

impl Template {
    pub fn new<S: Into<String>>(name: S, source: S) -> Self {
        Self { name: name.into(), source: source.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders the template against the project configuration.
    ///
    /// # Errors
    /// * `Error::TemplateRenderError` if the template references a value the
    ///   configuration does not provide
    pub fn render(
        &self,
        renderer: &dyn TemplateRenderer,
        context: &RenderContext,
    ) -> Result<String> {
        renderer.render(&self.name, &self.source, &context.to_value()?)
    }
}

/// Trait for resolving templates and static files by name.
pub trait TemplateSource {
    /// Loads a template that is rendered before being written.
    fn resolve_template(&self, name: &str) -> Result<Template>;

    /// Loads a file that is copied without substitution.
    fn resolve_static_file(&self, name: &str) -> Result<Vec<u8>>;
}

fn decode_template(name: &str, bytes: Vec<u8>) -> Result<Template> {
    let source = String::from_utf8(bytes).map_err(|e| {
        Error::ResourceError {
            operation: "decode template",
            path: name.to_string(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        }
    })?;
    Ok(Template::new(name.to_string(), source))
}

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Assets;

/// Templates compiled into the binary.
#[derive(Debug, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }

    fn get(&self, name: &str) -> Result<Vec<u8>> {
        debug!("Resolving embedded template '{name}'.");
        Assets::get(name)
            .map(|file| file.data.into_owned())
            .ok_or_else(|| Error::TemplateNotFoundError { name: name.to_string() })
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn resolve_template(&self, name: &str) -> Result<Template> {
        decode_template(name, self.get(name)?)
    }

    fn resolve_static_file(&self, name: &str) -> Result<Vec<u8>> {
        self.get(name)
    }
}

/// Templates read from a directory on disk, laid out like the embedded set.
#[derive(Debug)]
pub struct LocalTemplates {
    root: PathBuf,
}

impl LocalTemplates {
    /// # Errors
    /// * `Error::TemplateNotFoundError` if the directory does not exist
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::TemplateNotFoundError { name: root.display().to_string() });
        }
        Ok(Self { root: root.to_path_buf() })
    }

    fn get(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.root.join(name);
        debug!("Resolving template '{}'.", path.display());
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(Error::TemplateNotFoundError { name: name.to_string() })
            }
            Err(e) => Err(Error::resource("read template", &path)(e)),
        }
    }
}

impl TemplateSource for LocalTemplates {
    fn resolve_template(&self, name: &str) -> Result<Template> {
        decode_template(name, self.get(name)?)
    }

    fn resolve_static_file(&self, name: &str) -> Result<Vec<u8>> {
        self.get(name)
    }
}
