//! Common constants used throughout the scaffold application.

/// Author written into generated files when none is given
pub const DEFAULT_AUTHOR: &str = "Your Name";

/// License used when none is given
pub const DEFAULT_LICENSE: &str = "MIT";

/// Licenses offered by the interactive prompt
pub const LICENSES: [&str; 5] = ["MIT", "Apache-2.0", "GPL-3.0", "BSD-3-Clause", "None"];

/// Characters that may not appear in a project name
pub const RESERVED_NAME_CHARS: [char; 10] = [' ', '/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Empty marker file keeping otherwise-empty directories under version control
pub const PLACEHOLDER_FILE: &str = ".gitkeep";

/// Directory holding the generated GitHub Actions workflows
pub const WORKFLOWS_DIR: &str = ".github/workflows";

/// Policy directory that receives the entry point instead of a placeholder
pub const ENTRY_POINT_DIR: &str = "cmd";
