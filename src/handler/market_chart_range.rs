use chrono::NaiveDateTime;

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::{date_to_unix_seconds, decode_ms, now_ts},
    model::Market_Chart_Range,
    types::CoinGeckoMarketData,
};

/// Range variant of the market-chart fetch. `from_date`/`to_date` are
/// `YYYY-MM-DD` UTC dates converted to second-resolution Unix
/// timestamps before the call; malformed input fails with a format
/// error before any request is issued.
pub async fn fetch(
    app_state: &AppState<State>,
    id: &str,
    from_date: &str,
    to_date: &str,
) -> Result<Vec<Market_Chart_Range>, Error> {
    let from = date_to_unix_seconds(from_date)?;
    let to = date_to_unix_seconds(to_date)?;

    let raw = app_state.http.get_market_chart_range(id, from, to).await?;

    normalize(raw, id, now_ts(), &app_state.config.currency)
}

pub fn normalize(
    raw: CoinGeckoMarketData,
    id: &str,
    data_ts: NaiveDateTime,
    currency: &str,
) -> Result<Vec<Market_Chart_Range>, Error> {
    let mut rows = Vec::with_capacity(raw.prices.len());

    for ((price, market_cap), volume) in raw
        .prices
        .iter()
        .zip(&raw.market_caps)
        .zip(&raw.total_volumes)
    {
        rows.push(Market_Chart_Range {
            mrag_data_ts: data_ts,
            mrag_currency: currency.to_owned(),
            coin_id: id.to_lowercase(),
            date: decode_ms(price.0)?,
            mrag_price: price.1,
            mrag_market_cap: market_cap.1,
            mrag_volume: volume.1,
        });
    }

    Ok(rows)
}
