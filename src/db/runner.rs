//! Statement runner
//!
//! Executes a split script in order against one execution context, stopping
//! the run on the first failure. The context is released exactly once on
//! every exit path.

use async_trait::async_trait;

use crate::db::connection::DatabaseConnection;
use crate::error::Result;

/// Execution context for a single run.
///
/// `DatabaseConnection` is the production implementation; tests substitute a
/// recording mock to pin the ordering and abort behavior.
#[async_trait]
pub trait StatementExecutor {
    /// Execute one SQL statement.
    async fn execute(&mut self, sql: &str) -> Result<()>;

    /// Release the context. Best-effort; the runner logs failures and never
    /// propagates them.
    async fn release(&mut self) -> Result<()>;
}

#[async_trait]
impl StatementExecutor for DatabaseConnection {
    async fn execute(&mut self, sql: &str) -> Result<()> {
        DatabaseConnection::execute(self, sql).await
    }

    async fn release(&mut self) -> Result<()> {
        self.close().await;
        Ok(())
    }
}

/// Runs statements sequentially against one execution context
pub struct StatementRunner<E: StatementExecutor> {
    executor: E,
}

impl<E: StatementExecutor> StatementRunner<E> {
    /// Create a new runner owning its execution context
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Execute all statements in order.
    ///
    /// Later statements may depend on the side effects of earlier ones, so
    /// execution is strictly sequential. The first failure aborts the run
    /// and is returned after the context has been released.
    pub async fn run(mut self, statements: &[String]) -> Result<()> {
        let result = self.run_all(statements).await;

        if let Err(e) = self.executor.release().await {
            tracing::warn!(error = %e, "Failed to release execution context");
        }

        result
    }

    async fn run_all(&mut self, statements: &[String]) -> Result<()> {
        for statement in statements {
            tracing::trace!(sql = %statement, "Executing statement");

            if let Err(e) = self.executor.execute(statement).await {
                tracing::info!(error = %e, sql = %statement, "Statement failed, aborting run");
                return Err(e);
            }
        }

        Ok(())
    }
}
