//! `package.json` manifest model.
//!
//! The manifest is kept as an insertion-ordered JSON object so that keys the
//! editor does not know about survive every edit untouched.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value, json};

use crate::domain::AppError;
use crate::domain::packager::{self, PackagerConfig};

/// Script key holding the Windows packaging command.
pub const PACKAGE_WIN_SCRIPT: &str = "package:win";

/// Packaging command suggested for electron-builder projects.
pub const DEFAULT_BUILDER_SCRIPT: &str = "electron-builder --win portable --x64";

/// Manifest keys shown together as basic project information.
pub const CORE_INFO_KEYS: [&str; 6] = ["name", "version", "description", "main", "private", "type"];

/// A parsed `package.json`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageJson(Map<String, Value>);

impl PackageJson {
    /// Parse manifest text. Syntax errors and non-object roots are reported as
    /// [`AppError::ParseError`].
    pub fn parse(content: &str) -> Result<Self, AppError> {
        match serde_json::from_str::<Value>(content) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(_) => Err(AppError::parse_error("package.json", "top-level value must be an object")),
            Err(err) => Err(AppError::parse_error("package.json", err)),
        }
    }

    /// Two-space indented JSON.
    pub fn to_pretty_string(&self) -> String {
        format!("{:#}", Value::Object(self.0.clone()))
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    pub fn product_name(&self) -> Option<&str> {
        self.str_field("productName")
    }

    /// `productName`, else `name`, else `fallback`. Empty strings are skipped.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.product_name().or_else(|| self.name()).unwrap_or(fallback)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Set a top-level field, keeping its position when it already exists.
    pub fn set_field(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn remove_field(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn script(&self, key: &str) -> Option<&str> {
        self.0.get("scripts").and_then(|scripts| scripts.get(key)).and_then(Value::as_str)
    }

    pub fn set_script(&mut self, key: &str, command: &str) {
        self.set_map_entry("scripts", key, Value::String(command.to_string()));
    }

    pub fn remove_script(&mut self, key: &str) -> bool {
        self.remove_map_entry("scripts", key)
    }

    /// Insert into a nested string map such as `scripts` or `dependencies`,
    /// creating the section when it is missing or not an object.
    pub fn set_map_entry(&mut self, section: &str, key: &str, value: Value) {
        let entry = self.0.entry(section.to_string()).or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(map) = entry {
            map.insert(key.to_string(), value);
        }
    }

    pub fn remove_map_entry(&mut self, section: &str, key: &str) -> bool {
        match self.0.get_mut(section) {
            Some(Value::Object(map)) => map.shift_remove(key).is_some(),
            _ => false,
        }
    }

    pub fn has_build_section(&self) -> bool {
        self.0.contains_key("build")
    }

    /// Packaging tool currently selected by `scripts["package:win"]`.
    pub fn script_tool(&self) -> ScriptTool {
        ScriptTool::from_script(self.script(PACKAGE_WIN_SCRIPT))
    }

    /// Packager view of `scripts["package:win"]`, seeded with the manifest name.
    pub fn packager_config(&self) -> PackagerConfig {
        let script = self.script(PACKAGE_WIN_SCRIPT).unwrap_or("");
        packager::parse(script, self.name().unwrap_or(packager::FALLBACK_APP_NAME))
    }

    /// Rewrite `scripts["package:win"]` for the selected tool.
    ///
    /// Switching to electron-packager keeps the options recoverable from the
    /// current script and resets the app name to the manifest name.
    pub fn switch_tool(&mut self, tool: ScriptTool) {
        match tool {
            ScriptTool::Builder => self.set_script(PACKAGE_WIN_SCRIPT, DEFAULT_BUILDER_SCRIPT),
            ScriptTool::Packager => {
                let mut config = self.packager_config();
                config.app_name = self.name().unwrap_or(packager::FALLBACK_APP_NAME).to_string();
                self.set_script(PACKAGE_WIN_SCRIPT, &packager::build(&config));
            }
            ScriptTool::None => {
                self.remove_script(PACKAGE_WIN_SCRIPT);
            }
        }
    }
}

impl fmt::Display for PackageJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pretty_string())
    }
}

/// Tool invoked by the Windows packaging script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScriptTool {
    Builder,
    Packager,
    None,
}

impl ScriptTool {
    pub fn from_script(script: Option<&str>) -> Self {
        match script {
            None | Some("") => ScriptTool::None,
            Some(s) if packager::is_packager_script(s) => ScriptTool::Packager,
            Some(_) => ScriptTool::Builder,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScriptTool::Builder => "electron-builder",
            ScriptTool::Packager => "electron-packager",
            ScriptTool::None => "none",
        }
    }
}

/// Starter manifests for new projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectTemplate {
    /// Electron + Vite + React with electron-builder packaging.
    Electron,
    /// Plain Vite project.
    Vite,
}

impl ProjectTemplate {
    pub fn instantiate(&self, name: &str, version: &str) -> Result<PackageJson, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Project name cannot be empty".into()));
        }

        let mut manifest = match self {
            ProjectTemplate::Electron => electron_template(),
            ProjectTemplate::Vite => vite_template(),
        };
        manifest.set_field("name", Value::String(name.to_string()));
        manifest.set_field("version", Value::String(version.to_string()));

        if *self == ProjectTemplate::Electron {
            if manifest.script(PACKAGE_WIN_SCRIPT).is_none() {
                manifest.set_script(PACKAGE_WIN_SCRIPT, DEFAULT_BUILDER_SCRIPT);
            }
            manifest.set_field("build", default_build_section(Some(name)));
        }

        Ok(manifest)
    }
}

fn electron_template() -> PackageJson {
    from_object(json!({
        "name": "my-electron-app",
        "private": true,
        "version": "1.0.0",
        "type": "module",
        "main": "main.js",
        "scripts": {
            "dev": "vite",
            "build": "vite build",
            "preview": "vite preview",
            "package:win": DEFAULT_BUILDER_SCRIPT
        },
        "dependencies": {
            "react": "^19.1.1",
            "react-dom": "^19.1.1"
        },
        "devDependencies": {
            "@types/node": "^22.14.0",
            "@vitejs/plugin-react": "^5.0.0",
            "electron": "^37.3.0",
            "electron-builder": "^26.0.12",
            "electron-packager": "^17.1.2",
            "typescript": "~5.8.2",
            "vite": "^6.2.0"
        }
    }))
}

fn vite_template() -> PackageJson {
    from_object(json!({
        "name": "my-app",
        "private": true,
        "version": "1.0.0",
        "type": "module",
        "main": "main.js",
        "scripts": {
            "dev": "vite",
            "build": "vite build"
        },
        "dependencies": {},
        "devDependencies": {}
    }))
}

fn from_object(value: Value) -> PackageJson {
    match value {
        Value::Object(map) => PackageJson(map),
        _ => PackageJson::default(),
    }
}

/// electron-builder `build` section seeded with the project name.
pub fn default_build_section(name: Option<&str>) -> Value {
    let name = name.filter(|n| !n.is_empty());
    json!({
        "appId": format!("com.example.{}", name.unwrap_or("app")),
        "productName": name.unwrap_or("My App"),
        "directories": {
            "buildResources": "assets"
        },
        "files": [
            "dist/**/*",
            "main.js",
            "package.json"
        ],
        "forceCodeSigning": false,
        "win": {
            "target": [{ "target": "portable", "arch": ["x64"] }]
        }
    })
}

/// Tagged view of a dynamically typed manifest field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Number(Number),
    Boolean(bool),
    /// Objects, arrays and `null`, edited as JSON text.
    Object(Value),
}

impl FieldValue {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => FieldValue::String(s.clone()),
            Value::Number(n) => FieldValue::Number(n.clone()),
            Value::Bool(b) => FieldValue::Boolean(*b),
            other => FieldValue::Object(other.clone()),
        }
    }

    /// Guess the variant of a value for a field that does not exist yet.
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(b) = trimmed.parse::<bool>() {
            return FieldValue::Boolean(b);
        }
        if let Some(n) = parse_number(trimmed) {
            return FieldValue::Number(n);
        }
        if (trimmed.starts_with('{') || trimmed.starts_with('['))
            && let Ok(value) = serde_json::from_str::<Value>(trimmed)
        {
            return FieldValue::Object(value);
        }
        FieldValue::String(raw.to_string())
    }

    /// Parse `raw` as a new value of the same variant as `self`.
    pub fn edit(&self, raw: &str) -> Result<FieldValue, AppError> {
        match self {
            FieldValue::String(_) => Ok(FieldValue::String(raw.to_string())),
            FieldValue::Boolean(_) => match raw.trim() {
                "true" => Ok(FieldValue::Boolean(true)),
                "false" => Ok(FieldValue::Boolean(false)),
                other => {
                    Err(AppError::Validation(format!("Expected true or false, got '{}'", other)))
                }
            },
            FieldValue::Number(_) => parse_number(raw.trim())
                .map(FieldValue::Number)
                .ok_or_else(|| AppError::Validation(format!("Expected a number, got '{}'", raw))),
            FieldValue::Object(_) => serde_json::from_str::<Value>(raw)
                .map(FieldValue::Object)
                .map_err(|err| AppError::parse_error("JSON fragment", err)),
        }
    }

    pub fn into_json(self) -> Value {
        match self {
            FieldValue::String(s) => Value::String(s),
            FieldValue::Number(n) => Value::Number(n),
            FieldValue::Boolean(b) => Value::Bool(b),
            FieldValue::Object(v) => v,
        }
    }

    /// Text shown when editing the field.
    pub fn display_text(&self) -> String {
        match self {
            FieldValue::String(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::Object(v) => format!("{:#}", v),
        }
    }
}

fn parse_number(raw: &str) -> Option<Number> {
    if let Ok(i) = raw.parse::<i64>() {
        return Some(Number::from(i));
    }
    raw.parse::<f64>().ok().and_then(Number::from_f64)
}
