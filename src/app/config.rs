//! Project configuration loading.

use crate::domain::AppError;
use crate::domain::config::{CONFIG_FILE, ProjectConfig, parse_config_content};
use crate::ports::ProjectStore;

/// Load `elvite.toml` from the project root. A missing file yields defaults.
pub fn load_config<S: ProjectStore + ?Sized>(store: &S) -> Result<ProjectConfig, AppError> {
    match store.read_optional(CONFIG_FILE)? {
        Some(content) => parse_config_content(&content),
        None => {
            log::debug!("{} not found; using defaults", CONFIG_FILE);
            Ok(ProjectConfig::default())
        }
    }
}
