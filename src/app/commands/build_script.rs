//! Explicit build script regeneration.

use crate::app::AppContext;
use crate::app::commands::{load_manifest, write_build_script};
use crate::domain::AppError;
use crate::ports::ProjectStore;

/// Render the build script from `package.json`, creating or replacing it.
/// Returns the file name written.
pub fn regenerate_build_script<S: ProjectStore>(ctx: &AppContext<S>) -> Result<String, AppError> {
    let manifest = load_manifest(ctx)?;
    write_build_script(ctx, &manifest)?;
    Ok(ctx.build_script_name().to_string())
}
