//! Project configuration (`elvite.toml`).

use serde::Deserialize;

use crate::domain::AppError;

/// Configuration file name, looked up at the project root.
pub const CONFIG_FILE: &str = "elvite.toml";

/// Optional per-project settings. Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub build_script: BuildScriptConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildScriptConfig {
    /// Name of the generated batch file.
    #[serde(default = "default_build_script_name")]
    pub file_name: String,
    /// Log file the batch file appends to.
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

impl Default for BuildScriptConfig {
    fn default() -> Self {
        Self { file_name: default_build_script_name(), log_file: default_log_file() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    #[serde(default = "default_true")]
    pub include_vite_config: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { include_vite_config: true }
    }
}

fn default_build_script_name() -> String {
    "build.bat".to_string()
}

fn default_log_file() -> String {
    "build_log.txt".to_string()
}

fn default_true() -> bool {
    true
}

impl ProjectConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_file_name("build_script.file_name", &self.build_script.file_name)?;
        validate_file_name("build_script.log_file", &self.build_script.log_file)?;
        Ok(())
    }
}

fn validate_file_name(key: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::config_error(format!("{} must not be empty", key)));
    }
    if value.contains(['/', '\\']) || value == "." || value == ".." {
        return Err(AppError::config_error(format!(
            "{} must be a plain file name, got '{}'",
            key, value
        )));
    }
    Ok(())
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ProjectConfig, AppError> {
    let config: ProjectConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_config_content("").unwrap();

        assert_eq!(config.build_script.file_name, "build.bat");
        assert_eq!(config.build_script.log_file, "build_log.txt");
        assert!(config.export.include_vite_config);
    }

    #[test]
    fn overrides_are_applied_per_field() {
        let config = parse_config_content(
            r#"
[build_script]
file_name = "Compilar.BAT"

[export]
include_vite_config = false
"#,
        )
        .unwrap();

        assert_eq!(config.build_script.file_name, "Compilar.BAT");
        assert_eq!(config.build_script.log_file, "build_log.txt");
        assert!(!config.export.include_vite_config);
    }

    #[test]
    fn rejects_path_like_names() {
        let err = parse_config_content("[build_script]\nlog_file = \"../log.txt\"\n").unwrap_err();
        assert!(matches!(err, AppError::Configuration(msg) if msg.contains("log_file")));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            parse_config_content("[build_script]\nname = \"x\"\n"),
            Err(AppError::TomlParseError(_))
        ));
    }
}
