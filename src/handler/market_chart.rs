use chrono::NaiveDateTime;

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::{decode_ms, now_ts},
    model::Market_Chart,
    types::CoinGeckoMarketData,
};

pub async fn fetch(
    app_state: &AppState<State>,
    id: &str,
) -> Result<Vec<Market_Chart>, Error> {
    let raw = app_state
        .http
        .get_market_chart(id, app_state.config.last_x_days)
        .await?;

    normalize(raw, id, now_ts(), &app_state.config.currency)
}

pub fn normalize(
    raw: CoinGeckoMarketData,
    id: &str,
    data_ts: NaiveDateTime,
    currency: &str,
) -> Result<Vec<Market_Chart>, Error> {
    let mut rows = Vec::with_capacity(raw.prices.len());

    for ((price, market_cap), volume) in raw
        .prices
        .iter()
        .zip(&raw.market_caps)
        .zip(&raw.total_volumes)
    {
        rows.push(Market_Chart {
            mkch_data_ts: data_ts,
            mkch_currency: currency.to_owned(),
            coin_id: id.to_lowercase(),
            date: decode_ms(price.0)?,
            mkch_price: price.1,
            mkch_market_cap: market_cap.1,
            mkch_volume: volume.1,
        });
    }

    // the newest bucket is still accumulating upstream
    if let Some(max_date) = rows.iter().map(|row| row.date).max() {
        rows.retain(|row| row.date != max_date);
    }

    Ok(rows)
}
