use reqwest::Client;
use serde_json::{json, Value};
use tracing::info;

use crate::{configuration::GsheetConfig, dao::Table, error::Error};

/// Spreadsheet-export collaborator, driven through the Sheets values
/// API. Only the fully processed table is ever exported.
#[derive(Debug)]
pub struct GoogleSheets {
    config: GsheetConfig,
    client: Client,
}

impl GoogleSheets {
    pub fn new(config: GsheetConfig) -> GoogleSheets {
        GoogleSheets {
            config,
            client: Client::new(),
        }
    }

    pub async fn write_to_gsheet(
        &self,
        table: &Table,
        clear_old_data: bool,
    ) -> Result<(), Error> {
        let base = format!(
            "https://sheets.googleapis.com/v4/spreadsheets/{}/values/{}",
            self.config.spreadsheet_id, self.config.worksheet_title
        );

        if clear_old_data {
            self.client
                .post(format!("{}:clear", base))
                .bearer_auth(&self.config.access_token)
                .json(&json!({}))
                .send()
                .await?
                .error_for_status()?;
        }

        let mut values: Vec<Vec<Value>> = Vec::with_capacity(table.len() + 1);
        values.push(
            table
                .columns
                .iter()
                .map(|column| Value::String(column.to_owned()))
                .collect(),
        );
        for row in &table.rows {
            values.push(row.iter().map(cell_value).collect());
        }

        let body = json!({
            "range": format!("{}!A1", self.config.worksheet_title),
            "majorDimension": "ROWS",
            "values": values,
        });

        self.client
            .put(format!("{}!A1", base))
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(&self.config.access_token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        info!(
            "exported {} rows to spreadsheet {}",
            table.len(),
            self.config.spreadsheet_id
        );

        Ok(())
    }
}

/// Sheets cells take scalars only; nulls become empty cells and any
/// structured value is flattened to its JSON text.
fn cell_value(value: &Value) -> Value {
    match value {
        Value::Null => Value::String(String::new()),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            value.to_owned()
        },
        other => Value::String(other.to_string()),
    }
}
