//! Packaging script (`scripts["package:win"]`) commands.

use serde::Serialize;

use crate::app::AppContext;
use crate::app::commands::{load_manifest, save_manifest};
use crate::domain::package_json::PACKAGE_WIN_SCRIPT;
use crate::domain::packager;
use crate::domain::{AppError, PackagerConfig, ScriptTool};
use crate::ports::ProjectStore;

/// Current packaging setup of the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackagerStatus {
    pub tool: ScriptTool,
    pub script: Option<String>,
    /// Only present when the script is an electron-packager call.
    pub config: Option<PackagerConfig>,
}

/// Option overrides for [`edit_packager`]. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackagerChanges {
    pub app_name: Option<String>,
    pub arch: Option<String>,
    pub out_dir: Option<String>,
    pub overwrite: Option<bool>,
    pub asar: Option<bool>,
}

impl PackagerChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply(self, config: &mut PackagerConfig) {
        if let Some(app_name) = self.app_name {
            config.app_name = app_name;
        }
        if let Some(arch) = self.arch {
            config.arch = arch;
        }
        if let Some(out_dir) = self.out_dir {
            config.out_dir = out_dir;
        }
        if let Some(overwrite) = self.overwrite {
            config.overwrite = overwrite;
        }
        if let Some(asar) = self.asar {
            config.asar = asar;
        }
    }
}

pub fn show_packager<S: ProjectStore>(ctx: &AppContext<S>) -> Result<PackagerStatus, AppError> {
    let manifest = load_manifest(ctx)?;
    let tool = manifest.script_tool();

    Ok(PackagerStatus {
        tool,
        script: manifest.script(PACKAGE_WIN_SCRIPT).map(str::to_string),
        config: (tool == ScriptTool::Packager).then(|| manifest.packager_config()),
    })
}

/// Rewrite the electron-packager script with the given option changes.
pub fn edit_packager<S: ProjectStore>(
    ctx: &AppContext<S>,
    changes: PackagerChanges,
) -> Result<PackagerConfig, AppError> {
    let mut manifest = load_manifest(ctx)?;
    if manifest.script_tool() != ScriptTool::Packager {
        return Err(AppError::Validation(format!(
            "scripts[\"{}\"] is not an electron-packager command; run 'elvite packager tool packager' first",
            PACKAGE_WIN_SCRIPT
        )));
    }

    let mut config = manifest.packager_config();
    changes.apply(&mut config);
    manifest.set_script(PACKAGE_WIN_SCRIPT, &packager::build(&config));
    save_manifest(ctx, &manifest)?;

    Ok(config)
}

/// Select the packaging tool, rewriting or removing the script.
pub fn switch_tool<S: ProjectStore>(
    ctx: &AppContext<S>,
    tool: ScriptTool,
) -> Result<Option<String>, AppError> {
    let mut manifest = load_manifest(ctx)?;
    manifest.switch_tool(tool);
    save_manifest(ctx, &manifest)?;
    Ok(manifest.script(PACKAGE_WIN_SCRIPT).map(str::to_string))
}
