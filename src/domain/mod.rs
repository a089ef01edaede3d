pub mod bootstrap;
pub mod build_script;
pub mod config;
pub mod error;
pub mod package_json;
pub mod packager;
pub mod project;

pub use bootstrap::{BootstrapConfig, BootstrapEdit};
pub use build_script::BuildScriptPlan;
pub use config::ProjectConfig;
pub use error::AppError;
pub use package_json::{FieldValue, PackageJson, ProjectTemplate, ScriptTool};
pub use packager::PackagerConfig;
pub use project::{FileKind, ProjectFile};
