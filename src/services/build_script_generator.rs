//! Windows build script generation.

use minijinja::Value;

use crate::domain::AppError;
use crate::domain::build_script::{BuildScriptPlan, to_crlf};
use crate::domain::config::BuildScriptConfig;
use crate::domain::package_json::PackageJson;
use crate::services::templates::{self, BUILD_SCRIPT_TEMPLATE};

/// Generator for the batch file that installs, builds and packages the project.
pub struct BuildScriptGenerator;

impl BuildScriptGenerator {
    /// Render the build script for the manifest. Output uses CRLF line endings.
    pub fn generate(manifest: &PackageJson, config: &BuildScriptConfig) -> Result<String, AppError> {
        let plan = BuildScriptPlan::from_package_json(manifest, &config.log_file);
        Self::render(&plan)
    }

    pub fn render(plan: &BuildScriptPlan) -> Result<String, AppError> {
        let script = templates::render(BUILD_SCRIPT_TEMPLATE, Value::from_serialize(plan))?;
        Ok(to_crlf(&script))
    }
}
