//! CLI Adapter.

mod main_js;
mod packager;
mod pkg;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::app::api;
use crate::domain::project::{MAIN_JS, PACKAGE_JSON};
use crate::domain::{AppError, FileKind, ProjectTemplate};
use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::{Confirm, Error as DialoguerError};

#[derive(Parser)]
#[command(name = "elvite")]
#[command(version)]
#[command(
    about = "Scaffold and edit Electron + Vite project files (package.json, main.js, build.bat)",
    long_about = None
)]
struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long = "dir", global = true)]
    dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create package.json, main.js, the build script and vite.config.js
    #[clap(visible_alias = "n")]
    New {
        /// Project name
        name: String,
        /// Starter manifest
        #[arg(short, long, value_enum, default_value_t = TemplateArg::Electron)]
        template: TemplateArg,
        /// Initial version
        #[arg(long, default_value = "1.0.0")]
        app_version: String,
    },
    /// Copy an existing package.json or main.js into the project
    #[clap(visible_alias = "im")]
    Import {
        /// Files to import
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Generate or edit main.js
    #[clap(visible_alias = "m")]
    Main {
        #[command(subcommand)]
        command: main_js::MainCommands,
    },
    /// Inspect or edit the package:win script
    #[clap(visible_alias = "p")]
    Packager {
        #[command(subcommand)]
        command: packager::PackagerCommands,
    },
    /// Edit package.json fields, scripts and dependencies
    Pkg {
        #[command(subcommand)]
        command: pkg::PkgCommands,
    },
    /// Regenerate the Windows build script from package.json
    #[clap(visible_alias = "b")]
    Bat,
    /// Write vite.config.js
    ViteConfig {
        /// Replace an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Pack the project files into a ZIP archive
    #[clap(visible_alias = "x")]
    Export {
        /// Archive file name (defaults to <name>.zip)
        #[arg(short, long)]
        output: Option<String>,
        /// Export without asking when main.js is missing
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TemplateArg {
    Electron,
    Vite,
}

impl From<TemplateArg> for ProjectTemplate {
    fn from(value: TemplateArg) -> Self {
        match value {
            TemplateArg::Electron => ProjectTemplate::Electron,
            TemplateArg::Vite => ProjectTemplate::Vite,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = project_root(cli.dir).and_then(|root| dispatch(&root, cli.command));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn project_root(dir: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match dir {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}

fn dispatch(root: &Path, command: Commands) -> Result<(), AppError> {
    match command {
        Commands::New { name, template, app_version } => {
            run_new(root, &name, template, &app_version)
        }
        Commands::Import { paths } => run_import(root, &paths),
        Commands::Main { command } => main_js::run_main(root, command),
        Commands::Packager { command } => packager::run_packager(root, command),
        Commands::Pkg { command } => pkg::run_pkg(root, command),
        Commands::Bat => run_bat(root),
        Commands::ViteConfig { force } => run_vite_config(root, force),
        Commands::Export { output, yes } => run_export(root, output, yes),
    }
}

fn run_new(root: &Path, name: &str, template: TemplateArg, version: &str) -> Result<(), AppError> {
    let outcome = api::new_project_at(root, template.into(), name, version)?;
    println!("✅ Created project '{}'", name);
    for file in &outcome.files {
        println!("  • {}", file);
    }
    Ok(())
}

fn run_import(root: &Path, paths: &[PathBuf]) -> Result<(), AppError> {
    for path in paths {
        let kind = api::import_file_at(root, path)?;
        match kind {
            FileKind::Json => {
                println!("✅ Imported {} and regenerated the build script", PACKAGE_JSON)
            }
            _ => println!("✅ Imported {}", MAIN_JS),
        }
    }
    Ok(())
}

fn run_bat(root: &Path) -> Result<(), AppError> {
    let name = api::regenerate_build_script_at(root)?;
    println!("✅ Generated {}", name);
    Ok(())
}

fn run_vite_config(root: &Path, force: bool) -> Result<(), AppError> {
    if api::write_vite_config_at(root, force)? {
        println!("✅ Wrote vite.config.js");
    } else {
        println!("ℹ️ vite.config.js already exists (use --force to replace it)");
    }
    Ok(())
}

fn run_export(root: &Path, output: Option<String>, yes: bool) -> Result<(), AppError> {
    if !yes && !api::file_exists_at(root, MAIN_JS) {
        println!("⚠️ {} not found; the archive will not contain it.", MAIN_JS);
        if !confirm("Export anyway?")? {
            println!("Export cancelled");
            return Ok(());
        }
    }

    let outcome = api::export_archive_at(root, output.as_deref())?;
    println!("✅ Exported {} ({} file(s))", outcome.archive_name, outcome.files.len());
    for file in &outcome.files {
        println!("  • {}", file);
    }
    Ok(())
}

/// Ask a yes/no question. Cancelling the prompt answers no.
pub(crate) fn confirm(prompt: &str) -> Result<bool, AppError> {
    match Confirm::new().with_prompt(prompt).default(false).interact_opt() {
        Ok(answer) => Ok(answer.unwrap_or(false)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
        Err(err) => Err(AppError::Validation(format!(
            "Confirmation required but no answer could be read ({}); pass --force or --yes",
            err
        ))),
    }
}

/// Pretty JSON for `--json` output.
pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|err| AppError::InternalError(format!("Failed to serialize output: {}", err)))
}
