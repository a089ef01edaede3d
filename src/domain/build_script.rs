//! Windows build script model.

use serde::Serialize;

use crate::domain::package_json::{PACKAGE_WIN_SCRIPT, PackageJson};
use crate::domain::packager;

/// Files the build script checks for before running.
pub const REQUIRED_FILES: [&str; 3] = ["main.js", "package.json", "vite.config.js"];

/// Package step used when the packaging script is not an electron-packager call.
pub const DEFAULT_PACKAGE_COMMAND: &str =
    "powershell -Command \"npm run package:win | Tee-Object -FilePath '%LOGFILE%' -Append\"";

/// Values substituted into the build script template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildScriptPlan {
    pub log_file: String,
    pub required_files: Vec<String>,
    pub package_command: String,
}

impl BuildScriptPlan {
    /// Derive the template values from the current manifest.
    ///
    /// An electron-packager script is normalised through the packager codec and
    /// run through `npx`; any other script (or none) uses `npm run package:win`.
    /// Both variants tee their output into the log file.
    pub fn from_package_json(manifest: &PackageJson, log_file: &str) -> Self {
        Self {
            log_file: log_file.to_string(),
            required_files: REQUIRED_FILES.iter().map(|f| f.to_string()).collect(),
            package_command: package_command(manifest),
        }
    }
}

fn package_command(manifest: &PackageJson) -> String {
    match manifest.script(PACKAGE_WIN_SCRIPT) {
        Some(script) if packager::is_packager_script(script) => {
            let config =
                packager::parse(script, manifest.name().unwrap_or(packager::FALLBACK_APP_NAME));
            tee_to_log(&format!("npx {}", packager::build(&config)))
        }
        _ => DEFAULT_PACKAGE_COMMAND.to_string(),
    }
}

fn tee_to_log(command: &str) -> String {
    format!("powershell -Command \"{} | Tee-Object -FilePath '%LOGFILE%' -Append\"", command)
}

/// Normalise every line ending to CRLF. Existing CRLF pairs are not doubled.
pub fn to_crlf(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "\r\n")
}
