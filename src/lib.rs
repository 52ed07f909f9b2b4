//! Scaffold generates new Go projects following the standard project layout.
//! It plans a directory tree and boilerplate files from a small project
//! configuration and either previews that plan or writes it to disk.

/// Command-line interface module for the scaffold application
pub mod cli;

/// Project configuration, project types and name validation
pub mod config;

pub mod constants;

/// Error types and handling for the scaffold application
pub mod error;

/// Plans and materializes the project tree
pub mod generator;

/// Per-project-type directory and artifact tables
pub mod layout;

pub mod logger;

/// Interactive configuration prompts
pub mod prompt;

/// Template rendering engine
pub mod renderer;

/// Embedded and on-disk template sources
pub mod template;
