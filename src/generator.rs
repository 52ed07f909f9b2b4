//! Project generation: planning and materialization.
//!
//! [`Generator::plan`] is the single place that decides which directories and
//! files make up a project. Dry-run returns that plan untouched; a real run
//! walks the same plan and writes it to disk.

use crate::config::ProjectConfig;
use crate::constants::{ENTRY_POINT_DIR, PLACEHOLDER_FILE, WORKFLOWS_DIR};
use crate::error::{Error, Result};
use crate::layout::{
    container_template, directory_structure, makefile_template, release_workflow,
    ENTRY_POINT_FILE, ENTRY_POINT_TEMPLATE, GITIGNORE_TEMPLATE, MODULE_TEMPLATE, README_TEMPLATE,
    TEST_WORKFLOW,
};
use crate::renderer::TemplateRenderer;
use crate::template::{RenderContext, TemplateSource};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the content of a planned file comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// Rendered from the named template
    Template(&'static str),
    /// Copied byte-for-byte from the named static file
    Static(&'static str),
    /// Empty marker file; failure to write it is ignored
    Placeholder,
}

/// A file the generator will produce, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub source: FileSource,
}

impl PlannedFile {
    fn new<P: Into<PathBuf>>(path: P, source: FileSource) -> Self {
        Self { path: path.into(), source }
    }
}

/// Everything a generation run will create, in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    /// Absolute path of the project directory
    pub root: PathBuf,
    /// Directories relative to `root`
    pub directories: Vec<PathBuf>,
    /// Files relative to `root`
    pub files: Vec<PlannedFile>,
}

impl GenerationPlan {
    /// Files rendered from templates, with their template names.
    fn rendered(&self) -> impl Iterator<Item = (&Path, &'static str)> {
        self.files.iter().filter_map(|file| match file.source {
            FileSource::Template(name) => Some((file.path.as_path(), name)),
            _ => None,
        })
    }

    /// Files copied without substitution, with their static file names.
    fn copied(&self) -> impl Iterator<Item = (&Path, &'static str)> {
        self.files.iter().filter_map(|file| match file.source {
            FileSource::Static(name) => Some((file.path.as_path(), name)),
            _ => None,
        })
    }

    /// Every path under the root that the plan creates, including
    /// intermediate directories such as `.github`.
    pub fn paths(&self) -> BTreeSet<PathBuf> {
        let mut paths = BTreeSet::new();
        let entries = self.directories.iter().chain(self.files.iter().map(|file| &file.path));
        for entry in entries {
            for ancestor in entry.ancestors() {
                if ancestor.as_os_str().is_empty() {
                    break;
                }
                paths.insert(ancestor.to_path_buf());
            }
        }
        paths
    }
}

/// Human readable rendition of a plan for dry-run output.
pub struct Preview<'a> {
    config: &'a ProjectConfig,
    plan: &'a GenerationPlan,
}

impl<'a> Preview<'a> {
    pub fn new(config: &'a ProjectConfig, plan: &'a GenerationPlan) -> Self {
        Self { config, plan }
    }
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project: {}", self.config.project_name)?;
        writeln!(f, "Location: {}", self.plan.root.display())?;
        writeln!(f, "Module Path: {}", self.config.module_path)?;
        writeln!(f, "Type: {}", self.config.project_type)?;

        writeln!(f, "\nDirectories to be created:")?;
        for dir in &self.plan.directories {
            writeln!(f, "  {}/", dir.display())?;
        }

        write!(f, "\nFiles to be created:")?;
        for file in &self.plan.files {
            write!(f, "\n  {}", file.path.display())?;
        }
        Ok(())
    }
}

/// Result of a successful generation run.
#[derive(Debug)]
pub enum Outcome {
    /// Dry-run: the plan that a real run would carry out
    Previewed(GenerationPlan),
    /// Real run: path of the created project
    Created(PathBuf),
}

/// Generates a project from a configuration and a template source.
pub struct Generator<'a> {
    config: &'a ProjectConfig,
    base_dir: PathBuf,
    dry_run: bool,
    templates: &'a dyn TemplateSource,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Generator<'a> {
    /// Creates a new Generator.
    ///
    /// # Arguments
    /// * `config` - Validated project configuration
    /// * `base_dir` - Directory the project directory is created in
    /// * `dry_run` - Only compute the plan, never touch the filesystem
    /// * `templates` - Source of templates and static files
    /// * `renderer` - Engine used to render templates
    pub fn new<P: Into<PathBuf>>(
        config: &'a ProjectConfig,
        base_dir: P,
        dry_run: bool,
        templates: &'a dyn TemplateSource,
        renderer: &'a dyn TemplateRenderer,
    ) -> Self {
        Self { config, base_dir: base_dir.into(), dry_run, templates, renderer }
    }

    pub fn project_path(&self) -> PathBuf {
        self.base_dir.join(&self.config.project_name)
    }

    /// Computes the directories and files for the configured project.
    pub fn plan(&self) -> GenerationPlan {
        let project_type = self.config.project_type;
        let name = self.config.project_name.as_str();
        let policy_dirs = directory_structure(project_type);
        let entry_dir = Path::new(ENTRY_POINT_DIR).join(name);

        let mut directories: Vec<PathBuf> = policy_dirs.iter().map(PathBuf::from).collect();
        directories.push(entry_dir.clone());
        directories.push(PathBuf::from(WORKFLOWS_DIR));

        let mut files = vec![
            PlannedFile::new("README.md", FileSource::Template(README_TEMPLATE)),
            PlannedFile::new("Makefile", FileSource::Template(makefile_template(project_type))),
            PlannedFile::new(".gitignore", FileSource::Template(GITIGNORE_TEMPLATE)),
            PlannedFile::new("go.mod", FileSource::Template(MODULE_TEMPLATE)),
        ];
        if let Some(template) = container_template(project_type) {
            files.push(PlannedFile::new("Dockerfile", FileSource::Template(template)));
        }

        files.push(PlannedFile::new(
            entry_dir.join(ENTRY_POINT_FILE),
            FileSource::Template(ENTRY_POINT_TEMPLATE),
        ));

        let workflows = Path::new(WORKFLOWS_DIR);
        files.push(PlannedFile::new(
            workflows.join("test.yml"),
            FileSource::Static(TEST_WORKFLOW),
        ));
        files.push(PlannedFile::new(
            workflows.join("release.yml"),
            FileSource::Static(release_workflow(project_type)),
        ));

        files.extend(
            policy_dirs
                .iter()
                .filter(|dir| **dir != ENTRY_POINT_DIR)
                .map(|dir| Path::new(dir).join(PLACEHOLDER_FILE))
                .map(|path| PlannedFile::new(path, FileSource::Placeholder)),
        );

        GenerationPlan { root: self.project_path(), directories, files }
    }

    /// Resolves and renders every template and static file in the plan,
    /// keyed by path relative to the project root. Placeholders have no entry.
    fn prepare(&self, plan: &GenerationPlan) -> Result<BTreeMap<PathBuf, Vec<u8>>> {
        let context = RenderContext::new(self.config);
        let mut contents = BTreeMap::new();

        for (path, name) in plan.rendered() {
            debug!("Rendering template '{name}' for {}", path.display());
            let template = self.templates.resolve_template(name)?;
            let rendered = template.render(self.renderer, &context)?;
            contents.insert(path.to_path_buf(), rendered.into_bytes());
        }
        for (path, name) in plan.copied() {
            debug!("Loading static file '{name}' for {}", path.display());
            contents.insert(path.to_path_buf(), self.templates.resolve_static_file(name)?);
        }

        Ok(contents)
    }

    /// Generates the project, or only plans it in dry-run mode.
    ///
    /// Both modes check that the project path is free and that every template
    /// resolves and renders before anything is returned or written.
    ///
    /// # Errors
    /// * `Error::OutputDirectoryExistsError` if the project path is occupied
    /// * `Error::TemplateNotFoundError` / `Error::TemplateRenderError` if a
    ///   template cannot be resolved or rendered
    /// * `Error::ResourceError` if a directory or file cannot be created
    ///
    /// A failed write leaves whatever was already written in place.
    pub fn generate(&self) -> Result<Outcome> {
        let project_path = self.project_path();
        if project_path.symlink_metadata().is_ok() {
            return Err(Error::OutputDirectoryExistsError {
                output_dir: project_path.display().to_string(),
            });
        }

        let plan = self.plan();
        let contents = self.prepare(&plan)?;
        if self.dry_run {
            debug!("Dry run: skipping materialization of '{}'.", plan.root.display());
            return Ok(Outcome::Previewed(plan));
        }

        self.materialize(&plan, contents)?;
        Ok(Outcome::Created(plan.root))
    }

    fn materialize(
        &self,
        plan: &GenerationPlan,
        mut contents: BTreeMap<PathBuf, Vec<u8>>,
    ) -> Result<()> {
        let root = &plan.root;
        fs::create_dir_all(root).map_err(Error::resource("create directory", root))?;

        for dir in &plan.directories {
            let path = plan.root.join(dir);
            debug!("Creating directory: {}", path.display());
            fs::create_dir_all(&path).map_err(Error::resource("create directory", &path))?;
        }

        for file in &plan.files {
            let path = plan.root.join(&file.path);
            match contents.remove(&file.path) {
                Some(content) => {
                    debug!("Writing file: {}", path.display());
                    fs::write(&path, content).map_err(Error::resource("write file", &path))?;
                }
                // Placeholders are best effort.
                None => {
                    let _ = fs::write(&path, b"");
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectType;
    use crate::renderer::MiniJinjaRenderer;
    use crate::template::EmbeddedTemplates;

    fn config(project_type: ProjectType) -> ProjectConfig {
        ProjectConfig {
            project_name: "demo".to_string(),
            module_path: "demo".to_string(),
            author: "Your Name".to_string(),
            license: "MIT".to_string(),
            project_type,
        }
    }

    #[test]
    fn test_plan_skips_placeholder_in_cmd() {
        let config = config(ProjectType::Cli);
        let (templates, renderer) = (EmbeddedTemplates::new(), MiniJinjaRenderer::new());
        let plan = Generator::new(&config, "/tmp", true, &templates, &renderer).plan();

        let placeholders: Vec<_> =
            plan.files.iter().filter(|file| file.source == FileSource::Placeholder).collect();
        assert_eq!(placeholders.len(), 9);
        assert!(!placeholders.iter().any(|file| file.path.starts_with("cmd")));
    }

    #[test]
    fn test_plan_paths_include_intermediate_directories() {
        let config = config(ProjectType::Library);
        let (templates, renderer) = (EmbeddedTemplates::new(), MiniJinjaRenderer::new());
        let paths = Generator::new(&config, "/tmp", true, &templates, &renderer).plan().paths();

        assert!(paths.contains(Path::new(".github")));
        assert!(paths.contains(Path::new(".github/workflows")));
        assert!(paths.contains(Path::new("cmd/demo/main.go")));
    }

    #[test]
    fn test_preview_lists_service_dockerfile() {
        let config = config(ProjectType::Service);
        let (templates, renderer) = (EmbeddedTemplates::new(), MiniJinjaRenderer::new());
        let plan = Generator::new(&config, "/work", true, &templates, &renderer).plan();
        let preview = Preview::new(&config, &plan).to_string();

        assert!(preview.starts_with("Project: demo\nLocation: /work/demo\n"));
        assert!(preview.contains("Type: service"));
        assert!(preview.contains("\n  web/\n"));
        assert!(preview.contains("\n  Dockerfile"));
    }
}
