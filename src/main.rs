//! Command-line entry point for sqlrun

use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

use sqlrun::error::Error;
use sqlrun::utils::logging;
use sqlrun::{config, input, SqlRunClient};

/// Send the SQL statements in a text file to a database, one by one
#[derive(Parser, Debug)]
#[command(name = "sqlrun", version, about)]
struct Cli {
    /// Name of a connection pool defined in the configuration file
    pool: Option<String>,

    /// Text file containing the SQL statements to issue
    file: Option<PathBuf>,

    /// Statement separator; without it each line is its own statement
    separator: Option<String>,

    /// Path to the configuration file
    #[arg(short, long, default_value = "sqlrun.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Missing positionals print usage and exit cleanly, matching the
    // original tool's behavior.
    let (pool_name, file) = match (&cli.pool, &cli.file) {
        (Some(pool), Some(file)) => (pool.clone(), file.clone()),
        _ => {
            let mut cmd = Cli::command();
            let _ = cmd.print_help();
            return ExitCode::SUCCESS;
        }
    };

    let config = match config::load_from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init_logging(&config.logging) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    if let Some(separator) = &cli.separator {
        println!("Separator: {}", separator);
    }

    let text = match input::load_text(&file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match SqlRunClient::new(&config, &pool_name).await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match client.run_script(&text, cli.separator.as_deref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ Error::Execution(_)) => {
            // A failed statement is reported but does not change the exit
            // code. Downstream scripts depend on this lenient behavior.
            eprintln!("{}", e);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
