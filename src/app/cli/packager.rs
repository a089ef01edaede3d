//! Packager command implementation.

use std::path::Path;

use clap::builder::PossibleValuesParser;
use clap::{Subcommand, ValueEnum};

use crate::app::api::{self, PackagerChanges};
use crate::app::cli::to_json;
use crate::domain::packager::SUPPORTED_ARCHES;
use crate::domain::{AppError, ScriptTool};

#[derive(Subcommand)]
pub enum PackagerCommands {
    /// Show the packaging tool and electron-packager options
    #[clap(visible_alias = "s")]
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change electron-packager options
    Set {
        /// Application name
        #[arg(long)]
        name: Option<String>,
        /// Target architecture
        #[arg(long, value_parser = PossibleValuesParser::new(SUPPORTED_ARCHES))]
        arch: Option<String>,
        /// Output directory
        #[arg(long)]
        out: Option<String>,
        /// Pass --overwrite
        #[arg(long)]
        overwrite: Option<bool>,
        /// Pass --asar
        #[arg(long)]
        asar: Option<bool>,
    },
    /// Switch the packaging tool
    #[clap(visible_alias = "t")]
    Tool {
        #[arg(value_enum)]
        tool: ToolArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ToolArg {
    Builder,
    Packager,
    None,
}

impl From<ToolArg> for ScriptTool {
    fn from(value: ToolArg) -> Self {
        match value {
            ToolArg::Builder => ScriptTool::Builder,
            ToolArg::Packager => ScriptTool::Packager,
            ToolArg::None => ScriptTool::None,
        }
    }
}

pub fn run_packager(root: &Path, command: PackagerCommands) -> Result<(), AppError> {
    match command {
        PackagerCommands::Show { json } => {
            let status = api::show_packager_at(root)?;
            if json {
                println!("{}", to_json(&status)?);
                return Ok(());
            }
            println!("Tool: {}", status.tool.label());
            if let Some(script) = &status.script {
                println!("Script: {}", script);
            }
            if let Some(config) = &status.config {
                println!("  app name:  {}", config.app_name);
                println!("  arch:      {}", config.arch);
                println!("  out dir:   {}", config.out_dir);
                println!("  overwrite: {}", config.overwrite);
                println!("  asar:      {}", config.asar);
            }
            Ok(())
        }
        PackagerCommands::Set { name, arch, out, overwrite, asar } => {
            let changes = PackagerChanges { app_name: name, arch, out_dir: out, overwrite, asar };
            if changes.is_empty() {
                return Err(AppError::Validation(
                    "Nothing to change: pass at least one of --name, --arch, --out, --overwrite, --asar"
                        .into(),
                ));
            }
            let config = api::edit_packager_at(root, changes)?;
            println!("✅ Updated package:win ({} {})", config.app_name, config.arch);
            Ok(())
        }
        PackagerCommands::Tool { tool } => {
            let tool = ScriptTool::from(tool);
            match api::switch_tool_at(root, tool)? {
                Some(script) => println!("✅ package:win now uses {}: {}", tool.label(), script),
                None => println!("✅ Removed package:win"),
            }
            Ok(())
        }
    }
}
