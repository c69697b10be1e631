use std::collections::HashMap;

use chrono::NaiveDateTime;
use tokio::time::Duration;
use tracing::info;

use crate::{
    configuration::{AppState, State},
    dao::{Table, WriteMode},
    error::Error,
    handler::{
        coins_ohlc,
        fetch_loop::{fetch_series, SeriesEndpoint},
        market_chart, universe,
    },
    model::{
        Chart_Ohlc, Coins_Market, Coins_Ohlc, Market_Chart, Market_Trending,
        Merge_Status, Merged, Search_Trending,
    },
};

const COINS_MARKETS_TABLE: &str = "cryptocurrency.cgc_coins_markets";
const SEARCH_TRENDING_TABLE: &str = "cryptocurrency.cgc_search_trending";
const COINS_OHLC_TABLE: &str = "cryptocurrency.cgc_coins_ohlc";
const MARKET_CHART_TABLE: &str = "cryptocurrency.cgc_coins_market_chart";
const HISTORICAL_TABLE: &str = "cryptocurrency.cgc_a_market_historical_data";

/// One full harvest: resolve the coin universe, fetch both per-coin
/// series through the rate-limited loop, run the three-stage
/// reconciliation and persist every intermediate plus the final table.
pub async fn run(app_state: &AppState<State>) -> Result<Vec<Merged>, Error> {
    let universe = universe::resolve(app_state).await?;
    let delay = Duration::from_secs(app_state.config.delay_between_request);

    let ohlc = fetch_series(
        SeriesEndpoint::Ohlc,
        &universe.coin_list,
        delay,
        |coin| async move { coins_ohlc::fetch(app_state, &coin).await },
    )
    .await;

    let chart = fetch_series(
        SeriesEndpoint::MarketChart,
        &universe.coin_list,
        delay,
        |coin| async move { market_chart::fetch(app_state, &coin).await },
    )
    .await;

    let snapshot = merge_market_trending(&universe.market_all, &universe.trending);
    let series = merge_chart_ohlc(&chart, &ohlc);
    let merged = merge_all(&series, &snapshot);
    info!("reconciled {} rows", merged.len());

    let database = &app_state.database;
    database
        .write_table_by_unique_id(
            &Table::from_rows(&universe.markets)?,
            COINS_MARKETS_TABLE,
            WriteMode::Replace,
            &["coin_id"],
            Some("date"),
        )
        .await?;
    database
        .write_table_by_unique_id(
            &Table::from_rows(&universe.trending)?,
            SEARCH_TRENDING_TABLE,
            WriteMode::Replace,
            &["coin_id"],
            Some("date"),
        )
        .await?;
    database
        .write_table_by_unique_id(
            &Table::from_rows(&ohlc)?,
            COINS_OHLC_TABLE,
            WriteMode::Replace,
            &["coin_id"],
            Some("date"),
        )
        .await?;
    database
        .write_table_by_unique_id(
            &Table::from_rows(&chart)?,
            MARKET_CHART_TABLE,
            WriteMode::Replace,
            &["coin_id"],
            Some("date"),
        )
        .await?;
    database
        .write_table_by_unique_id(
            &Table::from_rows(&merged)?,
            HISTORICAL_TABLE,
            WriteMode::Replace,
            &["coin_id"],
            Some("date"),
        )
        .await?;

    Ok(merged)
}

/// Stage 1: `market_all` left-joined with trending on `coin_id`. The
/// trending identity columns were already dropped by
/// `Search_Trending::attrs`.
pub fn merge_market_trending(
    market_all: &[Coins_Market],
    trending: &[Search_Trending],
) -> Vec<Market_Trending> {
    let by_id: HashMap<&str, &Search_Trending> = trending
        .iter()
        .map(|row| (row.coin_id.as_str(), row))
        .collect();

    market_all
        .iter()
        .map(|market| match by_id.get(market.coin_id.as_str()) {
            Some(row) => Market_Trending {
                market: market.to_owned(),
                trending: Some(row.attrs()),
                merge_status_1: Merge_Status::Both,
                trending_flag: 1,
            },
            None => Market_Trending {
                market: market.to_owned(),
                trending: None,
                merge_status_1: Merge_Status::LeftOnly,
                trending_flag: 0,
            },
        })
        .collect()
}

/// Stage 2: market-chart left-joined with OHLC on `(coin_id, date)`.
/// Every chart row survives.
pub fn merge_chart_ohlc(
    chart: &[Market_Chart],
    ohlc: &[Coins_Ohlc],
) -> Vec<Chart_Ohlc> {
    let by_key: HashMap<(&str, NaiveDateTime), &Coins_Ohlc> = ohlc
        .iter()
        .map(|row| ((row.coin_id.as_str(), row.date), row))
        .collect();

    chart
        .iter()
        .map(|row| {
            let matched = by_key.get(&(row.coin_id.as_str(), row.date));
            Chart_Ohlc {
                chart: row.to_owned(),
                ohlc: matched.map(|ohlc| ohlc.values.to_owned()),
                merge_status_2: match matched {
                    Some(_) => Merge_Status::Both,
                    None => Merge_Status::LeftOnly,
                },
            }
        })
        .collect()
}

/// Stage 3: the combined series left-joined with the enriched snapshot
/// on `coin_id`, broadcasting per-coin attributes across all dates.
pub fn merge_all(
    series: &[Chart_Ohlc],
    snapshots: &[Market_Trending],
) -> Vec<Merged> {
    let by_id: HashMap<&str, &Market_Trending> = snapshots
        .iter()
        .map(|row| (row.market.coin_id.as_str(), row))
        .collect();

    series
        .iter()
        .map(|row| {
            let matched = by_id.get(row.chart.coin_id.as_str());
            Merged {
                series: row.to_owned(),
                snapshot: matched.map(|snapshot| (*snapshot).to_owned()),
                merge_status_3: match matched {
                    Some(_) => Merge_Status::Both,
                    None => Merge_Status::LeftOnly,
                },
            }
        })
        .collect()
}
