//! `main.js` generation and editing.

use crate::app::AppContext;
use crate::app::commands::{load_manifest, save_manifest};
use crate::domain::bootstrap::{self, BootstrapConfig, BootstrapEdit};
use crate::domain::project::{DEFAULT_WINDOW_TITLE, MAIN_JS};
use crate::domain::AppError;
use crate::ports::ProjectStore;
use crate::services::bootstrap_renderer;
use serde_json::Value;

/// Create `main.js` from the manifest and point `main` at it.
///
/// An existing `main.js` is only replaced when `overwrite` is set.
pub fn generate_main<S: ProjectStore>(
    ctx: &AppContext<S>,
    overwrite: bool,
) -> Result<BootstrapConfig, AppError> {
    let mut manifest = load_manifest(ctx)?;

    if ctx.store().file_exists(MAIN_JS) && !overwrite {
        return Err(AppError::Validation(format!(
            "{} already exists; pass --force to overwrite it",
            MAIN_JS
        )));
    }

    let config = BootstrapConfig::for_app(manifest.display_name(DEFAULT_WINDOW_TITLE));
    ctx.store().write_file(MAIN_JS, &bootstrap_renderer::render(&config)?)?;

    if manifest.field("main").and_then(Value::as_str) != Some(MAIN_JS) {
        manifest.set_field("main", Value::String(MAIN_JS.to_string()));
        save_manifest(ctx, &manifest)?;
    }

    Ok(config)
}

/// Window settings recovered from the current `main.js`.
pub fn show_main<S: ProjectStore>(ctx: &AppContext<S>) -> Result<BootstrapConfig, AppError> {
    Ok(bootstrap::derive_config(&read_main(ctx)?))
}

/// Apply edits in order and write the script back when it changed.
pub fn edit_main<S: ProjectStore>(
    ctx: &AppContext<S>,
    edits: &[BootstrapEdit],
) -> Result<BootstrapConfig, AppError> {
    let original = read_main(ctx)?;
    let updated = edits.iter().fold(original.clone(), |script, edit| {
        log::debug!("applying {}", edit);
        bootstrap::apply_edit(&script, edit)
    });

    if updated != original {
        ctx.store().write_file(MAIN_JS, &updated)?;
    }
    Ok(bootstrap::derive_config(&updated))
}

pub fn set_resolution<S: ProjectStore>(
    ctx: &AppContext<S>,
    width: u32,
    height: u32,
) -> Result<BootstrapConfig, AppError> {
    edit_main(ctx, &[BootstrapEdit::Width(width), BootstrapEdit::Height(height)])
}

fn read_main<S: ProjectStore>(ctx: &AppContext<S>) -> Result<String, AppError> {
    ctx.store().read_optional(MAIN_JS)?.ok_or_else(|| AppError::FileNotFound(MAIN_JS.to_string()))
}
