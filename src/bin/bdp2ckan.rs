//! bdp2ckan CLI
//!
//! Import a budget data package into a CKAN instance.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use bdp2ckan::{import, init_cli_logger, ImportError, ImportOptions};

#[derive(Parser)]
#[command(name = "bdp2ckan")]
#[command(about = "Import a budget data package into CKAN")]
#[command(version)]
struct Cli {
    /// Descriptor URL of the data package to import
    datapackage: String,

    /// Schema to validate against
    #[arg(long)]
    schema: Option<PathBuf>,

    /// CKAN instance to upload to
    #[arg(long, default_value = "localhost")]
    host: String,

    /// CKAN user API key of uploader
    #[arg(long)]
    apikey: Option<String>,

    /// CKAN organisation the dataset should belong to
    #[arg(long)]
    organization: Option<String>,

    /// Enable debug output
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let options = ImportOptions {
        schema: cli.schema,
        host: cli.host,
        apikey: cli.apikey,
        organization: cli.organization,
    };

    match import(&cli.datapackage, &options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                ImportError::SchemaViolation { errors } => {
                    eprintln!("Validation failed:");
                    for error in errors {
                        eprintln!("  {}", error);
                    }
                }
                _ => eprintln!("Error: {}", err),
            }
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
