//! ZIP export and the fixed Vite config.

use crate::app::AppContext;
use crate::app::commands::load_manifest;
use crate::domain::project::{DEFAULT_ARCHIVE_STEM, MAIN_JS, PACKAGE_JSON, VITE_CONFIG_JS};
use crate::domain::{AppError, FileKind, ProjectFile};
use crate::ports::ProjectStore;
use crate::services::{archive, templates};

/// Result of [`export_archive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub archive_name: String,
    pub files: Vec<String>,
    /// `main.js` was absent and left out of the archive.
    pub missing_main: bool,
}

/// Write the project files into a ZIP archive inside the project directory.
///
/// `package.json` is required. A missing `main.js` is reported in the outcome
/// rather than failing the export.
pub fn export_archive<S: ProjectStore>(
    ctx: &AppContext<S>,
    output: Option<&str>,
) -> Result<ExportOutcome, AppError> {
    let store = ctx.store();
    let manifest = load_manifest(ctx)?;
    let mut files = vec![ProjectFile::new(PACKAGE_JSON, FileKind::Json, store.read_file(PACKAGE_JSON)?)];

    let main = store.read_optional(MAIN_JS)?;
    let missing_main = main.is_none();
    match main {
        Some(content) => files.push(ProjectFile::new(MAIN_JS, FileKind::JavaScript, content)),
        None => log::warn!("{} not found; exporting without it", MAIN_JS),
    }

    if let Some(content) = store.read_optional(ctx.build_script_name())? {
        files.push(ProjectFile::new(ctx.build_script_name(), FileKind::Batch, content));
    }

    if ctx.config().export.include_vite_config {
        let content = match store.read_optional(VITE_CONFIG_JS)? {
            Some(content) => content,
            None => templates::vite_config()?.to_string(),
        };
        files.push(ProjectFile::new(VITE_CONFIG_JS, FileKind::JavaScript, content));
    }

    let archive_name = match output {
        Some(name) => name.to_string(),
        None => format!("{}.zip", manifest.name().unwrap_or(DEFAULT_ARCHIVE_STEM)),
    };
    store.write_bytes(&archive_name, &archive::build_archive(&files)?)?;

    Ok(ExportOutcome {
        archive_name,
        files: files.into_iter().map(|f| f.name).collect(),
        missing_main,
    })
}

/// Write the fixed `vite.config.js`. Returns `false` when a file exists and
/// `overwrite` is not set.
pub fn write_vite_config<S: ProjectStore>(
    ctx: &AppContext<S>,
    overwrite: bool,
) -> Result<bool, AppError> {
    if ctx.store().file_exists(VITE_CONFIG_JS) && !overwrite {
        return Ok(false);
    }
    ctx.store().write_file(VITE_CONFIG_JS, templates::vite_config()?)?;
    Ok(true)
}
