//! Project creation and file import.

use std::fs;
use std::path::Path;

use crate::app::AppContext;
use crate::app::commands::{load_manifest, write_build_script};
use crate::domain::project::{
    DEFAULT_WINDOW_TITLE, MAIN_JS, PACKAGE_JSON, VITE_CONFIG_JS, classify_upload,
};
use crate::domain::{AppError, BootstrapConfig, FileKind, PackageJson, ProjectTemplate};
use crate::ports::ProjectStore;
use crate::services::{bootstrap_renderer, templates};

/// Files written by [`new_project`], in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProjectOutcome {
    pub files: Vec<String>,
}

/// Scaffold a project from a starter manifest.
pub fn new_project<S: ProjectStore>(
    ctx: &AppContext<S>,
    template: ProjectTemplate,
    name: &str,
    version: &str,
) -> Result<NewProjectOutcome, AppError> {
    if ctx.store().file_exists(PACKAGE_JSON) {
        return Err(AppError::ProjectExists(ctx.store().root().display().to_string()));
    }

    let manifest = template.instantiate(name, version)?;
    let store = ctx.store();

    store.write_file(PACKAGE_JSON, &format!("{}\n", manifest.to_pretty_string()))?;

    let config = BootstrapConfig::for_app(manifest.display_name(DEFAULT_WINDOW_TITLE));
    store.write_file(MAIN_JS, &bootstrap_renderer::render(&config)?)?;

    write_build_script(ctx, &manifest)?;
    store.write_file(VITE_CONFIG_JS, templates::vite_config()?)?;

    Ok(NewProjectOutcome {
        files: vec![
            PACKAGE_JSON.to_string(),
            MAIN_JS.to_string(),
            ctx.build_script_name().to_string(),
            VITE_CONFIG_JS.to_string(),
        ],
    })
}

/// Copy a `package.json` or `main.js` from elsewhere into the project.
///
/// An imported manifest must be valid JSON; the build script is regenerated
/// from it.
pub fn import_file<S: ProjectStore>(ctx: &AppContext<S>, source: &Path) -> Result<FileKind, AppError> {
    let kind = classify_upload(source)?;
    let content = fs::read_to_string(source)?;

    match kind {
        FileKind::Json => {
            PackageJson::parse(&content)?;
            ctx.store().write_file(PACKAGE_JSON, &content)?;
            let manifest = load_manifest(ctx)?;
            write_build_script(ctx, &manifest)?;
        }
        FileKind::JavaScript => {
            ctx.store().write_file(MAIN_JS, &content)?;
        }
        FileKind::Batch => return Err(AppError::InvalidFileType(source.display().to_string())),
    }

    log::info!("imported {}", source.display());
    Ok(kind)
}
