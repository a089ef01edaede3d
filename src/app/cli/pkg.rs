//! package.json command implementation.

use std::path::Path;

use clap::Subcommand;

use crate::app::api::{self, DependencyKind};
use crate::domain::package_json::CORE_INFO_KEYS;
use crate::domain::{AppError, FieldValue};

#[derive(Subcommand)]
pub enum PkgCommands {
    /// Show package.json
    Show {
        /// Only the basic project information
        #[arg(long)]
        info: bool,
    },
    /// Set a top-level field (existing fields keep their type)
    Set { key: String, value: String },
    /// Remove a top-level field
    Unset { key: String },
    /// Add or replace a script
    Script { name: String, command: String },
    /// Remove a script
    Unscript { name: String },
    /// Add or replace a dependency
    Dep {
        name: String,
        version: String,
        /// Use devDependencies
        #[arg(short = 'D', long)]
        dev: bool,
    },
    /// Remove a dependency
    Undep {
        name: String,
        /// Use devDependencies
        #[arg(short = 'D', long)]
        dev: bool,
    },
    /// Add the default electron-builder build section
    AddBuild,
    /// Set package:win to the suggested electron-builder command
    SuggestScript,
}

fn kind(dev: bool) -> DependencyKind {
    if dev { DependencyKind::Dev } else { DependencyKind::Runtime }
}

pub fn run_pkg(root: &Path, command: PkgCommands) -> Result<(), AppError> {
    match command {
        PkgCommands::Show { info } => {
            let manifest = api::show_manifest_at(root)?;
            if info {
                for key in CORE_INFO_KEYS {
                    if let Some(value) = manifest.field(key) {
                        println!("{}: {}", key, FieldValue::from_json(value).display_text());
                    }
                }
            } else {
                println!("{}", manifest);
            }
        }
        PkgCommands::Set { key, value } => {
            let value = api::set_field_at(root, &key, &value)?;
            println!("✅ Set {} = {}", key, value.display_text());
        }
        PkgCommands::Unset { key } => report_removal(api::unset_field_at(root, &key)?, "field", &key),
        PkgCommands::Script { name, command } => {
            api::set_script_at(root, &name, &command)?;
            println!("✅ Set script {}", name);
        }
        PkgCommands::Unscript { name } => {
            report_removal(api::remove_script_at(root, &name)?, "script", &name)
        }
        PkgCommands::Dep { name, version, dev } => {
            let kind = kind(dev);
            api::set_dependency_at(root, kind, &name, &version)?;
            println!("✅ Added {}@{} to {}", name, version, kind.section());
        }
        PkgCommands::Undep { name, dev } => {
            report_removal(api::remove_dependency_at(root, kind(dev), &name)?, "dependency", &name)
        }
        PkgCommands::AddBuild => {
            if api::add_build_section_at(root)? {
                println!("✅ Added build section");
            } else {
                println!("ℹ️ package.json already has a build section");
            }
        }
        PkgCommands::SuggestScript => {
            let script = api::apply_script_suggestion_at(root)?;
            println!("✅ Set package:win to: {}", script);
        }
    }
    Ok(())
}

fn report_removal(removed: bool, what: &str, name: &str) {
    if removed {
        println!("✅ Removed {} {}", what, name);
    } else {
        println!("ℹ️ No {} named {}", what, name);
    }
}
