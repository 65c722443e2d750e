use anyhow::{Context, Result};
use rusqlite::Transaction;

use super::connection::DbConn;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Drops every table and view and rebuilds the schema in one transaction.
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    let statements = split_sql_statements(SCHEMA_SQL);
    let tx = conn
        .transaction()
        .context("Failed to open schema reset transaction")?;

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(&tx, statement)
            .with_context(|| format!("Failed to execute schema statement {}", idx + 1))?;
    }

    tx.commit().context("Failed to commit schema reset")?;
    log::info!("Database schema reset ({} statements)", statements.len());
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<&str> {
    sql.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(tx: &Transaction<'_>, sql: &str) -> Result<()> {
    tx.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
