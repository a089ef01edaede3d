//! Embedded project assets and the template environment that renders them.

use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::domain::AppError;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

pub const MAIN_JS_TEMPLATE: &str = "main.js.j2";
pub const BUILD_SCRIPT_TEMPLATE: &str = "build.bat.j2";
const VITE_CONFIG_ASSET: &str = "vite.config.js";

/// Raw text of an embedded asset.
pub fn asset_text(name: &str) -> Result<&'static str, AppError> {
    TEMPLATES_DIR
        .get_file(name)
        .ok_or_else(|| AppError::InternalError(format!("Embedded asset missing: {}", name)))?
        .contents_utf8()
        .ok_or_else(|| AppError::InternalError(format!("Embedded asset is not UTF-8: {}", name)))
}

/// The fixed `vite.config.js` shipped with every project.
pub fn vite_config() -> Result<&'static str, AppError> {
    asset_text(VITE_CONFIG_ASSET)
}

/// Render an embedded template with the given context.
pub fn render(name: &str, context: minijinja::Value) -> Result<String, AppError> {
    let source = asset_text(name)?;
    environment()
        .render_named_str(name, source, context)
        .map_err(|err| AppError::InternalError(format!("Failed to render {}: {}", name, err)))
}

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    // Output is JavaScript and batch text, never HTML.
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env
}
