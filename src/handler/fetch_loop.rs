use std::future::Future;

use tokio::time::{sleep, Duration};
use tracing::{error, info};

use crate::error::Error;

/// Per-coin series endpoints driven by the rate-limited loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesEndpoint {
    Ohlc,
    MarketChart,
    MarketChartRange,
}

impl SeriesEndpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesEndpoint::Ohlc => "ohlc",
            SeriesEndpoint::MarketChart => "market_chart",
            SeriesEndpoint::MarketChartRange => "market_chart_range",
        }
    }
}

/// Drive `fetch` across the coin universe in submission order with a
/// fixed delay after every request, success or not. A failed coin is
/// logged and contributes zero rows; an all-failed batch yields an
/// empty concatenation rather than an error.
pub async fn fetch_series<T, F, Fut>(
    endpoint: SeriesEndpoint,
    coins: &[String],
    delay: Duration,
    fetch: F,
) -> Vec<T>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Vec<T>, Error>>,
{
    info!(
        "process: {} ({} coins to fetch)",
        endpoint.as_str(),
        coins.len()
    );

    let mut all_rows = Vec::new();

    for (count, coin) in coins.iter().enumerate() {
        info!(
            "{}. fetching {} data for {}",
            count + 1,
            endpoint.as_str(),
            coin
        );

        match fetch(coin.to_owned()).await {
            Ok(mut rows) => all_rows.append(&mut rows),
            Err(err) => {
                error!(
                    "error fetching {} data for {}: {}",
                    endpoint.as_str(),
                    coin,
                    err
                );
            },
        }

        sleep(delay).await;
    }

    all_rows
}
