use chrono::ParseError as CHRONO_PARSE_ERROR;
use reqwest::Error as REQWEST_ERROR;
use serde_json::Error as JSON_ERROR;
use sqlx::error::Error as SQL_ERROR;
use std::{env::VarError, io::Error as IO_ERROR, num::ParseIntError};
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError as TRACING_GLOBAL_DEFAULT_ERROR;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] IO_ERROR),

    #[error("API request failed: {0}")]
    Transport(#[from] REQWEST_ERROR),

    #[error("Schema mismatch: {0}")]
    Schema(#[from] JSON_ERROR),

    #[error("Invalid date format: {0}")]
    Format(#[from] CHRONO_PARSE_ERROR),

    #[error("{0}")]
    INT(#[from] ParseIntError),

    #[error("{0}")]
    SQL(#[from] SQL_ERROR),

    #[error("{0}")]
    VAR(#[from] VarError),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Decode datetime: {0}")]
    DecodeDateTimeError(String),

    #[error("Tracing error: {0}")]
    SetGlobalDefaultError(#[from] TRACING_GLOBAL_DEFAULT_ERROR),

    #[error("Task message error: {0}")]
    TaskError(String),
}
