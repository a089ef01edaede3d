//! main.js command implementation.

use std::path::Path;

use clap::Subcommand;

use crate::app::api;
use crate::app::cli::{confirm, to_json};
use crate::domain::bootstrap::{RESOLUTION_PRESETS, parse_resolution};
use crate::domain::project::MAIN_JS;
use crate::domain::{AppError, BootstrapConfig, BootstrapEdit};

#[derive(Subcommand)]
pub enum MainCommands {
    /// Generate main.js from package.json
    #[clap(visible_alias = "g")]
    Gen {
        /// Overwrite an existing main.js without asking
        #[arg(short, long)]
        force: bool,
    },
    /// Show the window settings found in main.js
    #[clap(visible_alias = "s")]
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change window settings (e.g. width=1600 menuBarVisible=false)
    Set {
        /// field=value pairs, applied in order
        #[arg(required = true)]
        edits: Vec<BootstrapEdit>,
    },
    /// Apply a resolution (WIDTHxHEIGHT or preset number); lists presets when omitted
    #[clap(visible_alias = "res")]
    Resolution { resolution: Option<String> },
}

pub fn run_main(root: &Path, command: MainCommands) -> Result<(), AppError> {
    match command {
        MainCommands::Gen { force } => run_gen(root, force),
        MainCommands::Show { json } => {
            let config = api::show_main_at(root)?;
            if json {
                println!("{}", to_json(&config)?);
            } else {
                print_config(&config);
            }
            Ok(())
        }
        MainCommands::Set { edits } => {
            let config = api::edit_main_at(root, &edits)?;
            println!("✅ Updated {} ({} change(s))", MAIN_JS, edits.len());
            print_config(&config);
            Ok(())
        }
        MainCommands::Resolution { resolution: None } => {
            println!("Resolution presets:");
            for (i, (label, _, _)) in RESOLUTION_PRESETS.iter().enumerate() {
                println!("  {}. {}", i + 1, label);
            }
            Ok(())
        }
        MainCommands::Resolution { resolution: Some(text) } => {
            let (width, height) = parse_resolution(&text)?;
            let config = api::set_resolution_at(root, width, height)?;
            println!("✅ Window size set to {}x{}", config.width, config.height);
            Ok(())
        }
    }
}

fn run_gen(root: &Path, force: bool) -> Result<(), AppError> {
    if !force
        && api::file_exists_at(root, MAIN_JS)
        && !confirm(&format!("{} already exists. Overwrite it?", MAIN_JS))?
    {
        println!("ℹ️ Kept existing {}", MAIN_JS);
        return Ok(());
    }

    let config = api::generate_main_at(root, true)?;
    println!("✅ Generated {} for '{}'", MAIN_JS, config.title);
    Ok(())
}

fn print_config(config: &BootstrapConfig) {
    println!("  width:            {}", config.width);
    println!("  height:           {}", config.height);
    println!("  title:            {}", config.title);
    println!("  menuBarVisible:   {}", config.menu_bar_visible);
    println!("  nodeIntegration:  {}", config.node_integration);
    println!("  contextIsolation: {}", config.context_isolation);
    println!("  openDevTools:     {}", config.open_dev_tools);
}
