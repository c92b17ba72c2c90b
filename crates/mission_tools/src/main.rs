//! Mission Catalog - Command-line Tools

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mission_core::prelude::{Level, MissionType};
use mission_tools::error::{Result, ToolError};
use mission_tools::export::{export_catalog, write_export, ExportFormat};
use mission_tools::render::{render_list, render_mission, ListFilter};
use mission_tools::validate::{load_catalog, run_validation, CatalogSources};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mission-tools")]
#[command(about = "Validate, browse and export the mission encounter catalog")]
struct Cli {
    /// Roster RON file overriding entries of the standard roster
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// Extra RON mission file to merge (repeatable)
    #[arg(long = "missions", global = true)]
    missions: Vec<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum TypeArg {
    Security,
    Mining,
}

impl From<TypeArg> for MissionType {
    fn from(value: TypeArg) -> Self {
        match value {
            TypeArg::Security => Self::Security,
            TypeArg::Mining => Self::Mining,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build the catalog and report validation findings
    Validate {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// List missions, one per line
    List {
        /// Only missions of this level (1-5)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        level: Option<u8>,
        /// Only missions of this type
        #[arg(long = "type", value_enum)]
        mission_type: Option<TypeArg>,
    },
    /// Show the pocket breakdown of one mission
    Show {
        /// Mission key, e.g. RETRIBUTION_GURISTAS_PIRATES
        key: String,
    },
    /// Export the resolved catalog
    Export {
        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Ron)]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn run(cli: Cli) -> Result<()> {
    let sources = CatalogSources {
        roster: cli.roster,
        missions: cli.missions,
    };

    match cli.command {
        Commands::Validate { strict } => {
            tracing::info!("Validating catalog ({} extra mission files)", sources.missions.len());
            run_validation(&sources, strict)?;
            tracing::info!("Validation passed");
        }
        Commands::List {
            level,
            mission_type,
        } => {
            let catalog = load_catalog(&sources)?;
            let filter = ListFilter {
                level: level.and_then(Level::from_number),
                mission_type: mission_type.map(MissionType::from),
            };
            print!("{}", render_list(&catalog, filter));
        }
        Commands::Show { key } => {
            let catalog = load_catalog(&sources)?;
            let mission = catalog
                .get(&key)
                .ok_or_else(|| ToolError::UnknownMission(key.clone()))?;
            print!("{}", render_mission(mission));
        }
        Commands::Export { format, output } => {
            let catalog = load_catalog(&sources)?;
            match output {
                Some(path) => write_export(&catalog, format, &path)?,
                None => println!("{}", export_catalog(&catalog, format)?),
            }
        }
    }
    Ok(())
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
