//! sqlrun: run a text file of SQL statements against a pooled database connection
//!
//! sqlrun reads a script file, splits it into individual SQL statements
//! (one statement per line, or delimited by a user-supplied separator), and
//! issues them in order over a connection pool defined by name in a TOML
//! configuration file. Comment lines start with `#` or `--`. The run stops
//! at the first statement that fails.

pub mod config;
pub mod db;
pub mod error;
pub mod input;
pub mod split;
pub mod utils;

#[cfg(test)]
mod test;

// Re-export main types for easier access
pub use config::Config;
pub use db::connection::DatabaseConnection;
pub use db::runner::{StatementExecutor, StatementRunner};
pub use error::{Error, Result};
pub use input::load_text;
pub use split::split_sql;

/// Initialize a sqlrun client from a configuration file and pool name
pub async fn init(config_path: &str, pool_name: &str) -> Result<SqlRunClient> {
    let config = config::load_from_file(config_path)?;
    SqlRunClient::new(&config, pool_name).await
}

/// The main client for running SQL scripts
pub struct SqlRunClient {
    connection: DatabaseConnection,
}

impl SqlRunClient {
    /// Create a new client connected to the named pool
    pub async fn new(config: &Config, pool_name: &str) -> Result<Self> {
        let pool_config = config.pool(pool_name)?;
        let connection = DatabaseConnection::connect(pool_config).await?;

        Ok(Self { connection })
    }

    /// Split the script text and execute every statement in order.
    ///
    /// Consumes the client: the connection is released when the run ends,
    /// whether it succeeded or not.
    pub async fn run_script(self, text: &str, separator: Option<&str>) -> Result<()> {
        let statements = split_sql(text, separator);
        tracing::debug!(count = statements.len(), "Split script into statements");

        StatementRunner::new(self.connection).run(&statements).await
    }
}
