use chrono::NaiveDateTime;

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::{decode_ms, now_ts, snap_ohlc_days},
    model::{Coins_Ohlc, Ohlc_Values},
    types::Candle,
};

/// OHLC fetch; the configured lookback is snapped down to the largest
/// day window the endpoint accepts.
pub async fn fetch(
    app_state: &AppState<State>,
    id: &str,
) -> Result<Vec<Coins_Ohlc>, Error> {
    let days = snap_ohlc_days(app_state.config.last_x_days);
    let raw = app_state.http.get_ohlc(id, days).await?;

    normalize(raw, id, now_ts(), &app_state.config.currency)
}

pub fn normalize(
    candles: Vec<Candle>,
    id: &str,
    data_ts: NaiveDateTime,
    currency: &str,
) -> Result<Vec<Coins_Ohlc>, Error> {
    candles
        .into_iter()
        .map(|candle| {
            Ok(Coins_Ohlc {
                coin_id: id.to_lowercase(),
                date: decode_ms(candle.0)?,
                values: Ohlc_Values {
                    ohlc_data_ts: data_ts,
                    ohlc_currency: currency.to_owned(),
                    ohlc_open: candle.1,
                    ohlc_high: candle.2,
                    ohlc_low: candle.3,
                    ohlc_close: candle.4,
                },
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_candles() {
        let candles = vec![
            Candle(1_704_067_200_000, 42000.0, 42500.0, 41800.0, 42250.0),
            Candle(1_704_412_800_000, 42250.0, 43800.0, 42100.0, 43500.0),
        ];
        let rows =
            normalize(candles, "Bitcoin", now_ts(), "usd").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].coin_id, "bitcoin");
        assert_eq!(rows[0].date.to_string(), "2024-01-01 00:00:00");
        assert_eq!(rows[0].values.ohlc_open, 42000.0);
        assert_eq!(rows[1].values.ohlc_close, 43500.0);
    }
}
