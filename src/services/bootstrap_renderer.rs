//! `main.js` generation.

use minijinja::context;

use crate::domain::AppError;
use crate::domain::bootstrap::{BootstrapConfig, escape_single_quoted};
use crate::services::templates::{self, MAIN_JS_TEMPLATE};

/// Render a complete Electron bootstrap script for the given settings.
pub fn render(config: &BootstrapConfig) -> Result<String, AppError> {
    let ctx = context! {
        width => config.width,
        height => config.height,
        title => escape_single_quoted(&config.title),
        menu_bar_visible => config.menu_bar_visible,
        node_integration => config.node_integration,
        context_isolation => config.context_isolation,
        open_dev_tools => config.open_dev_tools,
    };
    templates::render(MAIN_JS_TEMPLATE, ctx)
}
