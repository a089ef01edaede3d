//! elvite: scaffold and edit the project files of an Electron + Vite desktop app.
//!
//! The core is three text transformations that never fail:
//! [`packager::parse`]/[`packager::build`] for the electron-packager command
//! line, [`bootstrap::derive_config`]/[`bootstrap::apply_edit`] for `main.js`,
//! and [`BuildScriptGenerator`] for the Windows build script. The `app` layer
//! wires them to a project directory.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

pub use app::AppContext;
pub use app::api;
pub use domain::{
    AppError, BootstrapConfig, BootstrapEdit, BuildScriptPlan, FieldValue, PackageJson,
    PackagerConfig, ProjectConfig, ProjectTemplate, ScriptTool, bootstrap, packager,
};
pub use services::BuildScriptGenerator;
