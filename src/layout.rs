//! Per-project-type layout tables.
//! Each artifact kind is a single exhaustive lookup keyed by `ProjectType`,
//! so every function here is total and never fails.

use crate::config::ProjectType;

const CLI_DIRECTORIES: [&str; 10] = [
    "cmd",      // Main application(s)
    "internal", // Private application code
    "pkg",      // Public libraries
    "api",      // API definitions
    "configs",  // Configuration templates
    "scripts",  // Build/install/analysis scripts
    "build",    // Packaging and CI files
    "test",     // External test apps and data
    "docs",     // Documentation
    "examples", // Usage examples
];

const LIBRARY_DIRECTORIES: [&str; 7] = [
    "internal", // Private library code
    "pkg",      // Public library code
    "cmd",      // Example tools
    "scripts",
    "test",
    "docs",
    "examples",
];

const SERVICE_DIRECTORIES: [&str; 11] = [
    "cmd",
    "internal",
    "pkg",
    "api", // OpenAPI, protobuf, ...
    "web", // Web application components
    "configs",
    "scripts",
    "build",
    "test",
    "docs",
    "examples",
];

/// Returns the top-level directories created for a project type, in display order.
pub fn directory_structure(project_type: ProjectType) -> &'static [&'static str] {
    match project_type {
        ProjectType::Library => &LIBRARY_DIRECTORIES,
        ProjectType::Service => &SERVICE_DIRECTORIES,
        ProjectType::Cli => &CLI_DIRECTORIES,
    }
}

/// Template rendered into the project's `Makefile`.
pub fn makefile_template(project_type: ProjectType) -> &'static str {
    match project_type {
        ProjectType::Library => "Makefile-library.j2",
        ProjectType::Service => "Makefile-service.j2",
        ProjectType::Cli => "Makefile-cli.j2",
    }
}

/// Static workflow copied to `.github/workflows/release.yml`.
pub fn release_workflow(project_type: ProjectType) -> &'static str {
    match project_type {
        ProjectType::Library => "workflows/release-library.yml",
        ProjectType::Service => "workflows/release-service.yml",
        ProjectType::Cli => "workflows/release-cli.yml",
    }
}

/// Container build template, for the project types that ship one.
pub fn container_template(project_type: ProjectType) -> Option<&'static str> {
    match project_type {
        ProjectType::Service => Some("Dockerfile.j2"),
        ProjectType::Cli | ProjectType::Library => None,
    }
}

/// Static workflow shared by every project type.
pub const TEST_WORKFLOW: &str = "workflows/test.yml";

pub const README_TEMPLATE: &str = "README.md.j2";
pub const GITIGNORE_TEMPLATE: &str = "gitignore.j2";
pub const MODULE_TEMPLATE: &str = "go.mod.j2";
pub const ENTRY_POINT_TEMPLATE: &str = "main.go.j2";

/// File name of the generated entry point inside `cmd/<project-name>`.
pub const ENTRY_POINT_FILE: &str = "main.go";
