//! API Facade for the application.
//!
//! Each function opens the project directory at `root`, loads its
//! configuration and runs one command against the filesystem store.

use std::path::Path;

use crate::adapters::FilesystemProjectStore;
use crate::app::AppContext;
use crate::app::commands::{build_script, export, main_js, manifest, packager, project};
use crate::domain::{BootstrapConfig, BootstrapEdit, FieldValue, FileKind, PackageJson};
use crate::domain::{PackagerConfig, ProjectConfig, ProjectTemplate, ScriptTool};
use crate::ports::ProjectStore;

pub use crate::app::commands::export::ExportOutcome;
pub use crate::app::commands::manifest::DependencyKind;
pub use crate::app::commands::packager::{PackagerChanges, PackagerStatus};
pub use crate::app::commands::project::NewProjectOutcome;
pub use crate::domain::AppError;

/// Create an `AppContext` for a project directory.
fn create_context(root: &Path) -> Result<AppContext<FilesystemProjectStore>, AppError> {
    AppContext::load(FilesystemProjectStore::new(root.to_path_buf()))
}

/// Project configuration in effect for `root`.
pub fn config_at(root: &Path) -> Result<ProjectConfig, AppError> {
    Ok(create_context(root)?.config().clone())
}

/// Whether a project file exists under `root`.
pub fn file_exists_at(root: &Path, name: &str) -> bool {
    FilesystemProjectStore::new(root.to_path_buf()).file_exists(name)
}

pub fn new_project_at(
    root: &Path,
    template: ProjectTemplate,
    name: &str,
    version: &str,
) -> Result<NewProjectOutcome, AppError> {
    project::new_project(&create_context(root)?, template, name, version)
}

pub fn import_file_at(root: &Path, source: &Path) -> Result<FileKind, AppError> {
    project::import_file(&create_context(root)?, source)
}

pub fn generate_main_at(root: &Path, overwrite: bool) -> Result<BootstrapConfig, AppError> {
    main_js::generate_main(&create_context(root)?, overwrite)
}

pub fn show_main_at(root: &Path) -> Result<BootstrapConfig, AppError> {
    main_js::show_main(&create_context(root)?)
}

pub fn edit_main_at(root: &Path, edits: &[BootstrapEdit]) -> Result<BootstrapConfig, AppError> {
    main_js::edit_main(&create_context(root)?, edits)
}

pub fn set_resolution_at(root: &Path, width: u32, height: u32) -> Result<BootstrapConfig, AppError> {
    main_js::set_resolution(&create_context(root)?, width, height)
}

pub fn show_packager_at(root: &Path) -> Result<PackagerStatus, AppError> {
    packager::show_packager(&create_context(root)?)
}

pub fn edit_packager_at(root: &Path, changes: PackagerChanges) -> Result<PackagerConfig, AppError> {
    packager::edit_packager(&create_context(root)?, changes)
}

pub fn switch_tool_at(root: &Path, tool: ScriptTool) -> Result<Option<String>, AppError> {
    packager::switch_tool(&create_context(root)?, tool)
}

pub fn regenerate_build_script_at(root: &Path) -> Result<String, AppError> {
    build_script::regenerate_build_script(&create_context(root)?)
}

pub fn show_manifest_at(root: &Path) -> Result<PackageJson, AppError> {
    manifest::show_manifest(&create_context(root)?)
}

pub fn set_field_at(root: &Path, key: &str, raw: &str) -> Result<FieldValue, AppError> {
    manifest::set_field(&create_context(root)?, key, raw)
}

pub fn unset_field_at(root: &Path, key: &str) -> Result<bool, AppError> {
    manifest::unset_field(&create_context(root)?, key)
}

pub fn set_script_at(root: &Path, name: &str, command: &str) -> Result<(), AppError> {
    manifest::set_script(&create_context(root)?, name, command)
}

pub fn remove_script_at(root: &Path, name: &str) -> Result<bool, AppError> {
    manifest::remove_script(&create_context(root)?, name)
}

pub fn set_dependency_at(
    root: &Path,
    kind: DependencyKind,
    name: &str,
    version: &str,
) -> Result<(), AppError> {
    manifest::set_dependency(&create_context(root)?, kind, name, version)
}

pub fn remove_dependency_at(root: &Path, kind: DependencyKind, name: &str) -> Result<bool, AppError> {
    manifest::remove_dependency(&create_context(root)?, kind, name)
}

pub fn add_build_section_at(root: &Path) -> Result<bool, AppError> {
    manifest::add_build_section(&create_context(root)?)
}

pub fn apply_script_suggestion_at(root: &Path) -> Result<String, AppError> {
    manifest::apply_script_suggestion(&create_context(root)?)
}

pub fn export_archive_at(root: &Path, output: Option<&str>) -> Result<ExportOutcome, AppError> {
    export::export_archive(&create_context(root)?, output)
}

pub fn write_vite_config_at(root: &Path, overwrite: bool) -> Result<bool, AppError> {
    export::write_vite_config(&create_context(root)?, overwrite)
}
