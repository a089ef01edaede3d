//! `package.json` field, script and dependency editing.

use crate::app::AppContext;
use crate::app::commands::{load_manifest, save_manifest};
use crate::domain::package_json::{DEFAULT_BUILDER_SCRIPT, PACKAGE_WIN_SCRIPT, default_build_section};
use crate::domain::{AppError, FieldValue, PackageJson};
use crate::ports::ProjectStore;
use serde_json::Value;

/// Dependency section of the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Runtime,
    Dev,
}

impl DependencyKind {
    pub fn section(&self) -> &'static str {
        match self {
            DependencyKind::Runtime => "dependencies",
            DependencyKind::Dev => "devDependencies",
        }
    }
}

pub fn show_manifest<S: ProjectStore>(ctx: &AppContext<S>) -> Result<PackageJson, AppError> {
    load_manifest(ctx)
}

/// Set a top-level field from text.
///
/// An existing field keeps its type: the text must parse as that type. A new
/// field gets the type the text looks like.
pub fn set_field<S: ProjectStore>(
    ctx: &AppContext<S>,
    key: &str,
    raw: &str,
) -> Result<FieldValue, AppError> {
    if key.trim().is_empty() {
        return Err(AppError::Validation("Field name cannot be empty".into()));
    }

    let mut manifest = load_manifest(ctx)?;
    let value = match manifest.field(key) {
        Some(current) => FieldValue::from_json(current).edit(raw)?,
        None => FieldValue::infer(raw),
    };

    manifest.set_field(key, value.clone().into_json());
    save_manifest(ctx, &manifest)?;
    Ok(value)
}

/// Remove a top-level field. Returns whether it existed.
pub fn unset_field<S: ProjectStore>(ctx: &AppContext<S>, key: &str) -> Result<bool, AppError> {
    let mut manifest = load_manifest(ctx)?;
    if manifest.remove_field(key).is_none() {
        return Ok(false);
    }
    save_manifest(ctx, &manifest)?;
    Ok(true)
}

pub fn set_script<S: ProjectStore>(
    ctx: &AppContext<S>,
    name: &str,
    command: &str,
) -> Result<(), AppError> {
    let mut manifest = load_manifest(ctx)?;
    manifest.set_script(name, command);
    save_manifest(ctx, &manifest)
}

pub fn remove_script<S: ProjectStore>(ctx: &AppContext<S>, name: &str) -> Result<bool, AppError> {
    let mut manifest = load_manifest(ctx)?;
    if !manifest.remove_script(name) {
        return Ok(false);
    }
    save_manifest(ctx, &manifest)?;
    Ok(true)
}

pub fn set_dependency<S: ProjectStore>(
    ctx: &AppContext<S>,
    kind: DependencyKind,
    name: &str,
    version: &str,
) -> Result<(), AppError> {
    let mut manifest = load_manifest(ctx)?;
    manifest.set_map_entry(kind.section(), name, Value::String(version.to_string()));
    save_manifest(ctx, &manifest)
}

pub fn remove_dependency<S: ProjectStore>(
    ctx: &AppContext<S>,
    kind: DependencyKind,
    name: &str,
) -> Result<bool, AppError> {
    let mut manifest = load_manifest(ctx)?;
    if !manifest.remove_map_entry(kind.section(), name) {
        return Ok(false);
    }
    save_manifest(ctx, &manifest)?;
    Ok(true)
}

/// Add the default electron-builder `build` section. Returns `false` when one exists.
pub fn add_build_section<S: ProjectStore>(ctx: &AppContext<S>) -> Result<bool, AppError> {
    let mut manifest = load_manifest(ctx)?;
    if manifest.has_build_section() {
        return Ok(false);
    }
    let section = default_build_section(manifest.name());
    manifest.set_field("build", section);
    save_manifest(ctx, &manifest)?;
    Ok(true)
}

/// Point `package:win` at the suggested electron-builder command.
pub fn apply_script_suggestion<S: ProjectStore>(ctx: &AppContext<S>) -> Result<String, AppError> {
    let mut manifest = load_manifest(ctx)?;
    manifest.set_script(PACKAGE_WIN_SCRIPT, DEFAULT_BUILDER_SCRIPT);
    save_manifest(ctx, &manifest)?;
    Ok(DEFAULT_BUILDER_SCRIPT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryProjectStore;
    use crate::app::commands::test_support::*;
    use crate::domain::project::PACKAGE_JSON;
    use serde_json::json;

    fn manifest(ctx: &AppContext<MemoryProjectStore>) -> PackageJson {
        PackageJson::parse(&text(ctx, PACKAGE_JSON)).unwrap()
    }

    fn demo() -> AppContext<MemoryProjectStore> {
        context(MemoryProjectStore::new().with_file(PACKAGE_JSON, MANIFEST))
    }

    #[test]
    fn existing_fields_keep_their_type() {
        let ctx = context(
            MemoryProjectStore::new().with_file(PACKAGE_JSON, r#"{"private":true,"port":3000}"#),
        );

        set_field(&ctx, "private", "false").unwrap();
        set_field(&ctx, "port", "8080").unwrap();

        assert_eq!(manifest(&ctx).field("private"), Some(&json!(false)));
        assert_eq!(manifest(&ctx).field("port"), Some(&json!(8080)));
        assert!(matches!(set_field(&ctx, "private", "yes"), Err(AppError::Validation(_))));
        assert!(matches!(set_field(&ctx, "port", "many"), Err(AppError::Validation(_))));
    }

    #[test]
    fn new_fields_infer_their_type() {
        let ctx = demo();

        set_field(&ctx, "description", "A demo app").unwrap();
        set_field(&ctx, "keywords", r#"["electron", "vite"]"#).unwrap();

        let manifest = manifest(&ctx);
        assert_eq!(manifest.field("description"), Some(&json!("A demo app")));
        assert_eq!(manifest.field("keywords"), Some(&json!(["electron", "vite"])));
    }

    #[test]
    fn invalid_object_edit_is_parse_error() {
        let ctx = context(MemoryProjectStore::new().with_file(PACKAGE_JSON, r#"{"build":{}}"#));
        assert!(matches!(set_field(&ctx, "build", "{ nope"), Err(AppError::ParseError { .. })));
    }

    #[test]
    fn unset_reports_missing_fields() {
        let ctx = demo();

        assert!(unset_field(&ctx, "version").unwrap());
        assert!(!unset_field(&ctx, "version").unwrap());
        assert_eq!(manifest(&ctx).field("version"), None);
    }

    #[test]
    fn scripts_and_dependencies_are_edited_in_place() {
        let ctx = demo();

        set_script(&ctx, "dev", "vite").unwrap();
        assert!(remove_script(&ctx, "build").unwrap());
        set_dependency(&ctx, DependencyKind::Dev, "electron", "^37.3.0").unwrap();
        set_dependency(&ctx, DependencyKind::Runtime, "react", "^19.1.1").unwrap();
        assert!(!remove_dependency(&ctx, DependencyKind::Runtime, "lodash").unwrap());

        let manifest = manifest(&ctx);
        assert_eq!(manifest.script("dev"), Some("vite"));
        assert_eq!(manifest.script("build"), None);
        assert_eq!(manifest.field("devDependencies"), Some(&json!({"electron": "^37.3.0"})));
        assert_eq!(manifest.field("dependencies"), Some(&json!({"react": "^19.1.1"})));
    }

    #[test]
    fn build_section_is_added_once() {
        let ctx = demo();

        assert!(add_build_section(&ctx).unwrap());
        assert!(!add_build_section(&ctx).unwrap());

        let build = manifest(&ctx).field("build").cloned().unwrap();
        assert_eq!(build["appId"], json!("com.example.demo"));
        assert_eq!(build["productName"], json!("demo"));
    }

    #[test]
    fn script_suggestion_sets_builder_command() {
        let ctx = context(MemoryProjectStore::new().with_file(PACKAGE_JSON, r#"{"name":"demo"}"#));

        apply_script_suggestion(&ctx).unwrap();

        assert_eq!(manifest(&ctx).script(PACKAGE_WIN_SCRIPT), Some(DEFAULT_BUILDER_SCRIPT));
    }
}
