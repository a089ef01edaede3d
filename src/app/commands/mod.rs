//! Use cases over a project directory.
//!
//! Every command re-reads the files it needs from the store, so the files on
//! disk stay the single source of truth between invocations.

pub mod build_script;
pub mod export;
pub mod main_js;
pub mod manifest;
pub mod packager;
pub mod project;

use crate::app::AppContext;
use crate::domain::project::PACKAGE_JSON;
use crate::domain::{AppError, PackageJson};
use crate::ports::ProjectStore;
use crate::services::BuildScriptGenerator;

/// Read and parse `package.json`.
pub(crate) fn load_manifest<S: ProjectStore>(ctx: &AppContext<S>) -> Result<PackageJson, AppError> {
    if !ctx.store().file_exists(PACKAGE_JSON) {
        return Err(AppError::ProjectNotFound(ctx.store().root().display().to_string()));
    }
    PackageJson::parse(&ctx.store().read_file(PACKAGE_JSON)?)
}

/// Write `package.json` and keep an existing build script in sync with it.
pub(crate) fn save_manifest<S: ProjectStore>(
    ctx: &AppContext<S>,
    manifest: &PackageJson,
) -> Result<(), AppError> {
    ctx.store().write_file(PACKAGE_JSON, &format!("{}\n", manifest.to_pretty_string()))?;

    if ctx.store().file_exists(ctx.build_script_name()) {
        write_build_script(ctx, manifest)?;
    } else {
        log::debug!("{} not present; not regenerated", ctx.build_script_name());
    }
    Ok(())
}

pub(crate) fn write_build_script<S: ProjectStore>(
    ctx: &AppContext<S>,
    manifest: &PackageJson,
) -> Result<(), AppError> {
    let script = BuildScriptGenerator::generate(manifest, &ctx.config().build_script)?;
    ctx.store().write_file(ctx.build_script_name(), &script)?;
    log::debug!("regenerated {}", ctx.build_script_name());
    Ok(())
}
