//! `graphmodel`: inspect Microsoft Graph payloads with the model catalog.
//!
//! Usage:
//!   graphmodel inspect task.json --pretty
//!   graphmodel fields microsoft.graph.todoTask
//!   graphmodel enum alertSeverity high
//!   graphmodel types

use anyhow::Result;
use clap::{Parser, Subcommand};
use graphmodel_cli::{entity_types, enum_code, fields, inspect_file, Base, CliConfig};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphmodel")]
#[command(about = "Inspect Microsoft Graph payloads against the model catalog")]
struct Args {
    /// JSON config file with default options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a payload and print what it resolved to
    Inspect {
        file: PathBuf,

        /// Base type whose factory picks the concrete model
        #[arg(long, value_enum)]
        base: Option<Base>,

        #[arg(long)]
        pretty: bool,

        /// Reject unknown values for every enum
        #[arg(long)]
        strict_enums: bool,
    },
    /// List the wire names a type deserializes
    Fields {
        /// Discriminator, e.g. microsoft.graph.todoTask
        type_name: String,
    },
    /// Look up the integer code of an enum value
    Enum { name: String, value: String },
    /// List every entity discriminator
    Types,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let mut config = match &args.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    debug!(?config, "loaded config");

    match args.command {
        Command::Inspect {
            file,
            base,
            pretty,
            strict_enums,
        } => {
            config.pretty |= pretty;
            config.strict_enums |= strict_enums;
            if let Some(base) = base {
                config.base = base;
            }

            let inspections = inspect_file(&file, config.base, &config.json_options())?;
            info!(models = inspections.len(), "inspected {}", file.display());
            for (index, inspection) in inspections.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                println!("{}", inspection.render());
            }
        }
        Command::Fields { type_name } => {
            for name in fields(&type_name)? {
                println!("{name}");
            }
        }
        Command::Enum { name, value } => match enum_code(&name, &value)? {
            Some(code) => println!("{value} = {code}"),
            None => println!("{value} is not a {name} value"),
        },
        Command::Types => {
            for odata_type in entity_types() {
                println!("{odata_type}");
            }
        }
    }

    Ok(())
}
