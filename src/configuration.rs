use std::{env, fs, ops::Deref, path::Path, sync::Arc};

use crate::{
    dao::DatabasePool,
    dao::GoogleSheets,
    error::Error,
    provider::HTTP,
};

#[derive(Debug)]
pub struct AppState<T>(Arc<T>);

impl<T> AppState<T> {
    pub fn new(state: T) -> AppState<T> {
        AppState(Arc::new(state))
    }
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> AppState<T> {
        AppState(Arc::clone(&self.0))
    }
}

impl<T> Deref for AppState<T> {
    type Target = Arc<T>;

    fn deref(&self) -> &Arc<T> {
        &self.0
    }
}

#[derive(Debug)]
pub struct State {
    pub config: Config,
    pub database: DatabasePool,
    pub http: HTTP,
    pub gsheet: Option<GoogleSheets>,
}

impl State {
    pub fn new(
        config: Config,
        database: DatabasePool,
        http: HTTP,
        gsheet: Option<GoogleSheets>,
    ) -> State {
        State {
            config,
            database,
            http,
            gsheet,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GsheetConfig {
    pub spreadsheet_id: String,
    pub worksheet_title: String,
    pub access_token: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub coingecko_host: String,
    pub coingecko_api_key: String,
    pub currency: String,
    pub decimal_precision: u8,
    pub last_x_days: i64,
    pub delay_between_request: u64,
    pub per_page: i64,
    pub database_url: String,
    pub gsheet: Option<GsheetConfig>,
}

impl Config {
    pub fn coins_markets_url(&self) -> String {
        format!("{}/coins/markets", self.coingecko_host)
    }

    pub fn search_trending_url(&self) -> String {
        format!("{}/search/trending", self.coingecko_host)
    }

    pub fn market_chart_url(&self, id: &str) -> String {
        format!("{}/coins/{}/market_chart", self.coingecko_host, id)
    }

    pub fn market_chart_range_url(&self, id: &str) -> String {
        format!("{}/coins/{}/market_chart/range", self.coingecko_host, id)
    }

    pub fn ohlc_url(&self, id: &str) -> String {
        format!("{}/coins/{}/ohlc", self.coingecko_host, id)
    }
}

pub fn get_configuration() -> Result<Config, Error> {
    let coingecko_host = env_or(
        "COINGECKO_HOST",
        "https://api.coingecko.com/api/v3",
    );
    let coingecko_api_key = env::var("COINGECKO_API_KEY")?;
    let currency = env_or("CURRENCY", "usd");
    let decimal_precision: u8 = env_or("DECIMAL_PRECISION", "6").parse()?;
    let last_x_days: i64 = env_or("LAST_X_DAYS", "365").parse()?;
    let delay_between_request: u64 =
        env_or("DELAY_BETWEEN_REQUEST_IN_SEC", "3").parse()?;
    let per_page: i64 = env_or("MARKETS_PER_PAGE", "100").parse()?;
    let database_url = env::var("DATABASE_URL")?;

    if last_x_days < 1 {
        return Err(Error::ConfigurationError(String::from(
            "LAST_X_DAYS must be at least 1",
        )));
    }

    let gsheet = match (
        env::var("GSHEET_SPREADSHEET_ID"),
        env::var("GSHEET_WORKSHEET_TITLE"),
        env::var("GSHEET_ACCESS_TOKEN"),
    ) {
        (Ok(spreadsheet_id), Ok(worksheet_title), Ok(access_token)) => {
            Some(GsheetConfig {
                spreadsheet_id,
                worksheet_title,
                access_token,
            })
        },
        _ => None,
    };

    let config = Config {
        coingecko_host,
        coingecko_api_key,
        currency,
        decimal_precision,
        last_x_days,
        delay_between_request,
        per_page,
        database_url,
        gsheet,
    };

    Ok(config)
}

pub fn set_configuration() -> Result<(), Error> {
    let config_file: &str = ".env";

    let directory = env!("CARGO_MANIFEST_DIR");
    let path = format!("{}/{}", directory, config_file);

    if !Path::new(&path).exists() {
        return Ok(());
    }

    let config_string = fs::read_to_string(path)?;
    parse_config_string(config_string);

    Ok(())
}

fn parse_config_string(config: String) {
    let params: Vec<Option<(&str, &str)>> = config
        .split('\n')
        .map(|s| {
            let element = s.find('=');
            if let Some(e) = element {
                return Some(s.split_at(e));
            }
            None
        })
        .map(|value| {
            if let Some((k, v)) = value {
                return Some((k, &v[1..]));
            }
            None
        })
        .collect();

    for (key, value) in params.into_iter().flatten() {
        if env::var(key).is_err() {
            env::set_var(key, value);
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
