use crate::app::config::load_config;
use crate::domain::{AppError, ProjectConfig};
use crate::ports::ProjectStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ProjectStore> {
    store: S,
    config: ProjectConfig,
}

impl<S: ProjectStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(store: S, config: ProjectConfig) -> Self {
        Self { store, config }
    }

    /// Create a context using the project's `elvite.toml`, or defaults when absent.
    pub fn load(store: S) -> Result<Self, AppError> {
        let config = load_config(&store)?;
        Ok(Self::new(store, config))
    }

    /// Get a reference to the project store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// File name of the generated build script.
    pub fn build_script_name(&self) -> &str {
        &self.config.build_script.file_name
    }
}
