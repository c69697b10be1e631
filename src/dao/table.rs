use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Error;

/// Generic column/row form handed to the persistence collaborators.
/// Columns keep first-seen order across all rows; a column absent from a
/// given row is filled with null, so left-join output stays rectangular.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn from_rows<T: Serialize>(rows: &[T]) -> Result<Table, Error> {
        let mut columns: Vec<String> = Vec::new();
        let mut objects: Vec<Map<String, Value>> =
            Vec::with_capacity(rows.len());

        for row in rows {
            let object = match serde_json::to_value(row)? {
                Value::Object(map) => map,
                other => {
                    return Err(Error::TaskError(format!(
                        "expected an object row, got {}",
                        other
                    )));
                },
            };
            for key in object.keys() {
                if !columns.iter().any(|column| column == key) {
                    columns.push(key.to_owned());
                }
            }
            objects.push(object);
        }

        let rows = objects
            .into_iter()
            .map(|mut object| {
                columns
                    .iter()
                    .map(|column| object.remove(column).unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Ok(Table { columns, rows })
    }

    /// Rebuild one JSON object per row, used by the warehouse writer.
    pub fn to_objects(&self) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| {
                let mut object = Map::new();
                for (column, value) in self.columns.iter().zip(row) {
                    object.insert(column.to_owned(), value.to_owned());
                }
                Value::Object(object)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
