use chrono::{DateTime, NaiveDateTime};

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::now_ts,
    model::Coins_Market,
    types::CoinGeckoMarket,
};

/// Markets snapshot fetch; `ids: None` means the top page ranked by
/// descending market cap.
pub async fn fetch(
    app_state: &AppState<State>,
    ids: Option<&[String]>,
) -> Result<Vec<Coins_Market>, Error> {
    let raw = app_state.http.get_coins_markets(ids).await?;
    let data_ts = now_ts();

    raw.into_iter()
        .map(|entry| normalize(entry, data_ts, &app_state.config.currency))
        .collect()
}

pub fn normalize(
    entry: CoinGeckoMarket,
    data_ts: NaiveDateTime,
    currency: &str,
) -> Result<Coins_Market, Error> {
    // nested ROI object flattens to its JSON text for flat storage
    let roi = entry
        .roi
        .map(|value| serde_json::to_string(&value))
        .transpose()?;

    Ok(Coins_Market {
        cmrk_data_ts: data_ts,
        cmrk_currency: currency.to_owned(),
        coin_id: entry.id.to_lowercase(),
        coin_symbol: entry.symbol.to_uppercase(),
        coin_name: entry.name.to_uppercase(),
        cmrk_image: entry.image,
        cmrk_current_price: entry.current_price,
        cmrk_market_cap: entry.market_cap,
        cmrk_market_cap_rank: entry.market_cap_rank,
        cmrk_fully_diluted_valuation: entry.fully_diluted_valuation,
        cmrk_total_volume: entry.total_volume,
        cmrk_high_24h: entry.high_24h,
        cmrk_low_24h: entry.low_24h,
        cmrk_price_change_24h: entry.price_change_24h,
        cmrk_price_change_percentage_24h: fraction(
            entry.price_change_percentage_24h,
        ),
        cmrk_market_cap_change_24h: entry.market_cap_change_24h,
        cmrk_market_cap_change_percentage_24h: fraction(
            entry.market_cap_change_percentage_24h,
        ),
        cmrk_circulating_supply: entry.circulating_supply,
        cmrk_total_supply: entry.total_supply,
        cmrk_max_supply: entry.max_supply,
        cmrk_ath: entry.ath,
        cmrk_ath_change_percentage: fraction(entry.ath_change_percentage),
        cmrk_ath_date: decode_rfc3339(entry.ath_date)?,
        cmrk_atl: entry.atl,
        cmrk_atl_change_percentage: fraction(entry.atl_change_percentage),
        cmrk_atl_date: decode_rfc3339(entry.atl_date)?,
        cmrk_roi: roi,
        cmrk_last_updated: decode_rfc3339(entry.last_updated)?,
        cmrk_price_change_percentage_1h_in_currency: fraction(
            entry.price_change_percentage_1h_in_currency,
        ),
        cmrk_price_change_percentage_24h_in_currency: fraction(
            entry.price_change_percentage_24h_in_currency,
        ),
        cmrk_price_change_percentage_7d_in_currency: fraction(
            entry.price_change_percentage_7d_in_currency,
        ),
        cmrk_price_change_percentage_14d_in_currency: fraction(
            entry.price_change_percentage_14d_in_currency,
        ),
        cmrk_price_change_percentage_30d_in_currency: fraction(
            entry.price_change_percentage_30d_in_currency,
        ),
        cmrk_price_change_percentage_200d_in_currency: fraction(
            entry.price_change_percentage_200d_in_currency,
        ),
        cmrk_price_change_percentage_1y_in_currency: fraction(
            entry.price_change_percentage_1y_in_currency,
        ),
    })
}

/// Percent value (5.2) to fractional value (0.052); Markets only.
fn fraction(percent: Option<f64>) -> Option<f64> {
    percent.map(|value| value / 100.0)
}

fn decode_rfc3339(
    value: Option<String>,
) -> Result<Option<NaiveDateTime>, Error> {
    Ok(value
        .map(|text| {
            DateTime::parse_from_rfc3339(&text).map(|dt| dt.naive_utc())
        })
        .transpose()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_entry(id: &str) -> CoinGeckoMarket {
        CoinGeckoMarket {
            id: id.to_owned(),
            symbol: String::from("btc"),
            name: String::from("Bitcoin"),
            image: Some(String::from("https://example.org/btc.png")),
            current_price: Some(42000.5),
            market_cap: Some(8.0e11),
            market_cap_rank: Some(1),
            fully_diluted_valuation: Some(8.8e11),
            total_volume: Some(3.2e10),
            high_24h: Some(43000.0),
            low_24h: Some(41000.0),
            price_change_24h: Some(-120.5),
            price_change_percentage_24h: Some(-0.4),
            market_cap_change_24h: Some(-2.0e6),
            market_cap_change_percentage_24h: Some(-0.3),
            circulating_supply: Some(19_600_000.0),
            total_supply: Some(21_000_000.0),
            max_supply: None,
            ath: Some(69000.0),
            ath_change_percentage: Some(-39.1),
            ath_date: Some(String::from("2021-11-10T14:24:11.849Z")),
            atl: Some(67.81),
            atl_change_percentage: Some(61850.2),
            atl_date: Some(String::from("2013-07-06T00:00:00.000Z")),
            roi: Some(json!({"times": 43.0, "currency": "eth"})),
            last_updated: Some(String::from("2024-01-02T08:15:00.000Z")),
            price_change_percentage_1h_in_currency: Some(0.1),
            price_change_percentage_24h_in_currency: Some(-0.4),
            price_change_percentage_7d_in_currency: Some(5.2),
            price_change_percentage_14d_in_currency: Some(8.0),
            price_change_percentage_30d_in_currency: Some(12.5),
            price_change_percentage_200d_in_currency: Some(60.0),
            price_change_percentage_1y_in_currency: Some(155.0),
        }
    }

    #[test]
    fn test_normalize_cases_and_fractions() {
        let row =
            normalize(sample_entry("Bitcoin"), crate::helpers::now_ts(), "usd")
                .unwrap();
        assert_eq!(row.coin_id, "bitcoin");
        assert_eq!(row.coin_symbol, "BTC");
        assert_eq!(row.coin_name, "BITCOIN");
        assert_eq!(row.cmrk_currency, "usd");
        assert_eq!(
            row.cmrk_price_change_percentage_7d_in_currency,
            Some(0.052)
        );
        assert_eq!(
            row.cmrk_price_change_percentage_1y_in_currency,
            Some(1.55)
        );
        // absolute change columns are not percentages
        assert_eq!(row.cmrk_price_change_24h, Some(-120.5));
    }

    #[test]
    fn test_normalize_decodes_dates_and_roi() {
        let row =
            normalize(sample_entry("bitcoin"), crate::helpers::now_ts(), "usd")
                .unwrap();
        assert_eq!(
            row.cmrk_ath_date.unwrap().to_string(),
            "2021-11-10 14:24:11.849"
        );
        let roi = row.cmrk_roi.unwrap();
        assert!(roi.contains("\"times\":43.0") || roi.contains("\"times\":43"));
    }

    #[test]
    fn test_normalize_rejects_malformed_dates() {
        let mut entry = sample_entry("bitcoin");
        entry.ath_date = Some(String::from("not-a-date"));
        let result = normalize(entry, crate::helpers::now_ts(), "usd");
        assert!(matches!(result, Err(Error::Format(_))));
    }
}
