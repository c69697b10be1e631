use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::{configuration::Config, dao::Table, error::Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Delete the destination rows matching the incoming key set, then
    /// insert the new rows, inside one transaction.
    Replace,
    Append,
}

#[derive(Debug)]
pub struct DatabasePool {
    pub pool: PgPool,
}

impl DatabasePool {
    pub async fn new(config: &Config) -> Result<DatabasePool, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&config.database_url)
            .await?;

        Ok(DatabasePool { pool })
    }

    /// Narrow warehouse interface: rows travel as one jsonb array and
    /// `jsonb_populate_recordset` maps them onto the destination's own
    /// record type, so the writer stays schema-agnostic. Destination
    /// tables are provisioned externally.
    pub async fn write_table_by_unique_id(
        &self,
        table: &Table,
        destination: &str,
        mode: WriteMode,
        unique_ids: &[&str],
        date_col_ref: Option<&str>,
    ) -> Result<(), Error> {
        validate_identifier(destination)?;
        for key in unique_ids {
            validate_identifier(key)?;
        }

        if table.is_empty() {
            info!("no rows for {}, nothing to write", destination);
            return Ok(());
        }

        let mut objects = table.to_objects();
        if let Some(date_col) = date_col_ref {
            validate_identifier(date_col)?;
            objects.sort_by(|a, b| {
                let left = a.get(date_col).map(Value::to_string);
                let right = b.get(date_col).map(Value::to_string);
                left.cmp(&right)
            });
        }
        let payload = Value::Array(objects);

        let mut tx = self.pool.begin().await?;

        if mode == WriteMode::Replace && !unique_ids.is_empty() {
            let keys = unique_ids.join(", ");
            let match_clause = unique_ids
                .iter()
                .map(|key| format!("t.{key} = d.{key}"))
                .collect::<Vec<String>>()
                .join(" AND ");
            let delete = format!(
                "DELETE FROM {destination} t \
                 USING (SELECT DISTINCT {keys} \
                        FROM jsonb_populate_recordset(NULL::{destination}, $1)) d \
                 WHERE {match_clause}"
            );
            sqlx::query(&delete).bind(&payload).execute(&mut *tx).await?;
        }

        let insert = format!(
            "INSERT INTO {destination} \
             SELECT * FROM jsonb_populate_recordset(NULL::{destination}, $1)"
        );
        sqlx::query(&insert).bind(&payload).execute(&mut *tx).await?;

        tx.commit().await?;
        info!("wrote {} rows to {}", table.len(), destination);

        Ok(())
    }
}

fn validate_identifier(name: &str) -> Result<(), Error> {
    let valid = !name.is_empty()
        && name.chars().all(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '.'
        });

    if valid {
        Ok(())
    } else {
        Err(Error::ConfigurationError(format!(
            "invalid SQL identifier: {}",
            name
        )))
    }
}
