use serde_json::Value;
use tracing::info;

use crate::{
    configuration::{AppState, State},
    dao::{Table, WriteMode},
    error::Error,
    model::{Merged, Processed},
};

const PROCESSED_TABLE: &str =
    "cryptocurrency.cgc_a_market_historical_processed";

/// Placeholder for trending presentation columns on non-trending coins.
const MISSING_TEXT: &str = "-";
/// Trending score sentinel, outranks any real score.
const NOT_TRENDING_SCORE: i64 = 9999;

/// Derive the analytics table from the reconciled rows, persist it and
/// export it to the configured worksheet.
pub async fn run(
    app_state: &AppState<State>,
    merged: &[Merged],
) -> Result<(), Error> {
    let processed = derive(merged);
    info!("derived {} processed rows", processed.len());

    app_state
        .database
        .write_table_by_unique_id(
            &Table::from_rows(&processed)?,
            PROCESSED_TABLE,
            WriteMode::Replace,
            &["coin_id"],
            Some("date"),
        )
        .await?;

    match &app_state.gsheet {
        Some(gsheet) => {
            gsheet.write_to_gsheet(&sheet_table(&processed)?, true).await?;
        },
        None => info!("sheet export not configured, skipping"),
    }

    Ok(())
}

pub fn derive(merged: &[Merged]) -> Vec<Processed> {
    let total_market_cap: f64 = merged
        .iter()
        .filter_map(|row| {
            row.snapshot
                .as_ref()
                .and_then(|snapshot| snapshot.market.cmrk_market_cap)
        })
        .sum();

    merged
        .iter()
        .map(|row| derive_row(row, total_market_cap))
        .collect()
}

fn derive_row(row: &Merged, total_market_cap: f64) -> Processed {
    let chart = &row.series.chart;
    let ohlc = row.series.ohlc.as_ref();
    let snapshot = row.snapshot.as_ref();
    let market = snapshot.map(|snapshot| &snapshot.market);
    let trending =
        snapshot.and_then(|snapshot| snapshot.trending.as_ref());

    let market_cap = market.and_then(|m| m.cmrk_market_cap);
    let current_price = market.and_then(|m| m.cmrk_current_price);
    let total_volume = market.and_then(|m| m.cmrk_total_volume);
    let circulating_supply = market.and_then(|m| m.cmrk_circulating_supply);
    let total_supply = market.and_then(|m| m.cmrk_total_supply);
    let ath = market.and_then(|m| m.cmrk_ath);
    let high_24h = market.and_then(|m| m.cmrk_high_24h);
    let low_24h = market.and_then(|m| m.cmrk_low_24h);
    let change_24h_currency = market
        .and_then(|m| m.cmrk_price_change_percentage_24h_in_currency);
    let change_7d = market
        .and_then(|m| m.cmrk_price_change_percentage_7d_in_currency);
    let change_1y = market
        .and_then(|m| m.cmrk_price_change_percentage_1y_in_currency);

    let circulation_percentage =
        sanitize(ratio(circulating_supply, total_supply));
    let daily_price_range = sanitize(match (high_24h, low_24h) {
        (Some(high), Some(low)) => Some(high - low),
        _ => None,
    });

    // data_ts/currency come from the snapshot side, like the other
    // cmrk_* columns; rows without a snapshot match keep them null
    Processed {
        date: chart.date,
        data_ts: market.map(|m| m.cmrk_data_ts),
        currency: market.map(|m| m.cmrk_currency.to_owned()),
        coin_id: chart.coin_id.to_owned(),
        coin_symbol: market.map(|m| m.coin_symbol.to_owned()),
        coin_name: market.map(|m| m.coin_name.to_owned()),
        mkch_price: chart.mkch_price,
        mkch_market_cap: chart.mkch_market_cap,
        mkch_volume: chart.mkch_volume,
        ohlc_open: ohlc.map(|o| o.ohlc_open),
        ohlc_high: ohlc.map(|o| o.ohlc_high),
        ohlc_low: ohlc.map(|o| o.ohlc_low),
        ohlc_close: ohlc.map(|o| o.ohlc_close),
        cmrk_image: market.and_then(|m| m.cmrk_image.to_owned()),
        cmrk_current_price: current_price,
        cmrk_market_cap: market_cap,
        cmrk_market_cap_rank: market.and_then(|m| m.cmrk_market_cap_rank),
        cmrk_fully_diluted_valuation: market
            .and_then(|m| m.cmrk_fully_diluted_valuation),
        cmrk_total_volume: total_volume,
        cmrk_high_24h: high_24h,
        cmrk_low_24h: low_24h,
        cmrk_price_change_24h: market.and_then(|m| m.cmrk_price_change_24h),
        cmrk_price_change_percentage_24h: market
            .and_then(|m| m.cmrk_price_change_percentage_24h),
        cmrk_market_cap_change_24h: market
            .and_then(|m| m.cmrk_market_cap_change_24h),
        cmrk_market_cap_change_percentage_24h: market
            .and_then(|m| m.cmrk_market_cap_change_percentage_24h),
        cmrk_circulating_supply: circulating_supply,
        cmrk_total_supply: total_supply,
        cmrk_max_supply: market.and_then(|m| m.cmrk_max_supply),
        cmrk_ath: ath,
        cmrk_ath_change_percentage: market
            .and_then(|m| m.cmrk_ath_change_percentage),
        cmrk_ath_date: market.and_then(|m| m.cmrk_ath_date),
        cmrk_atl: market.and_then(|m| m.cmrk_atl),
        cmrk_atl_change_percentage: market
            .and_then(|m| m.cmrk_atl_change_percentage),
        cmrk_atl_date: market.and_then(|m| m.cmrk_atl_date),
        cmrk_last_updated: market.and_then(|m| m.cmrk_last_updated),
        cmrk_price_change_percentage_1h_in_currency: market
            .and_then(|m| m.cmrk_price_change_percentage_1h_in_currency),
        cmrk_price_change_percentage_24h_in_currency: change_24h_currency,
        cmrk_price_change_percentage_7d_in_currency: change_7d,
        cmrk_price_change_percentage_14d_in_currency: market
            .and_then(|m| m.cmrk_price_change_percentage_14d_in_currency),
        cmrk_price_change_percentage_30d_in_currency: market
            .and_then(|m| m.cmrk_price_change_percentage_30d_in_currency),
        cmrk_price_change_percentage_200d_in_currency: market
            .and_then(|m| m.cmrk_price_change_percentage_200d_in_currency),
        cmrk_price_change_percentage_1y_in_currency: change_1y,
        trdg_img_thumb: trending
            .map_or_else(|| MISSING_TEXT.to_owned(), |t| {
                t.trdg_img_thumb.to_owned()
            }),
        trdg_img_small: trending
            .map_or_else(|| MISSING_TEXT.to_owned(), |t| {
                t.trdg_img_small.to_owned()
            }),
        trdg_img_large: trending
            .map_or_else(|| MISSING_TEXT.to_owned(), |t| {
                t.trdg_img_large.to_owned()
            }),
        trdg_score: trending.map_or(NOT_TRENDING_SCORE, |t| t.trdg_score),
        trdg_sparkline: trending
            .map_or_else(|| MISSING_TEXT.to_owned(), |t| {
                t.trdg_sparkline.to_owned()
            }),
        trending_flag: snapshot.map(|snapshot| snapshot.trending_flag),
        market_dominance: sanitize(
            market_cap.map(|cap| cap / total_market_cap),
        ),
        circulation_percentage,
        // distance from the all-time high: 0 at the ATH, negative below
        price_vs_ath: sanitize(match (current_price, ath) {
            (Some(price), Some(ath)) => Some((price - ath) / ath),
            _ => None,
        }),
        volatility_7d: change_7d.map(f64::abs),
        price_change_classification: match change_24h_currency {
            Some(change) if change > 0.0 => String::from("Bullish"),
            _ => String::from("Bearish"),
        },
        liquidity_score: sanitize(ratio(total_volume, market_cap)),
        growth_potential: market
            .and_then(|m| m.cmrk_ath_change_percentage)
            .map(f64::abs),
        risk_reward_ratio: sanitize(
            ratio(change_7d, change_24h_currency).map(f64::abs),
        ),
        market_cap_to_supply_ratio: sanitize(ratio(
            market_cap,
            circulating_supply,
        )),
        daily_price_range,
        stability_index: sanitize(ratio(daily_price_range, current_price)),
        circulation_health: match circulation_percentage {
            Some(fraction) if fraction >= 0.75 => String::from("Healthy"),
            _ => String::from("Unhealthy"),
        },
        performance_trend_1y: match change_1y {
            Some(change) if change > 1.0 => String::from("High Growth"),
            Some(change) if change >= 0.0 => String::from("Moderate"),
            _ => String::from("Decline"),
        },
    }
}

fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(numerator), Some(denominator)) => Some(numerator / denominator),
        _ => None,
    }
}

/// Division results are computed first and cleaned afterwards: anything
/// non-finite (x/0, 0/0) becomes the missing marker.
fn sanitize(value: Option<f64>) -> Option<f64> {
    value.filter(|value| value.is_finite())
}

/// Worksheet variant of the processed table: `date` is exported in
/// date-only form, timestamps stay timezone-naive.
fn sheet_table(processed: &[Processed]) -> Result<Table, Error> {
    let mut table = Table::from_rows(processed)?;

    if let Some(index) = table.columns.iter().position(|column| column == "date")
    {
        for row in &mut table.rows {
            if let Value::String(text) = &row[index] {
                let date_only: String = text.chars().take(10).collect();
                row[index] = Value::String(date_only);
            }
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::merge_init::{
        self,
        tests::{dt, sample_chart, sample_market, sample_ohlc, sample_trending},
    };
    use crate::model::Coins_Market;

    fn merge(
        market_all: Vec<Coins_Market>,
        trending: Vec<crate::model::Search_Trending>,
        chart: Vec<crate::model::Market_Chart>,
        ohlc: Vec<crate::model::Coins_Ohlc>,
    ) -> Vec<Merged> {
        let snapshot =
            merge_init::merge_market_trending(&market_all, &trending);
        let series = merge_init::merge_chart_ohlc(&chart, &ohlc);
        merge_init::merge_all(&series, &snapshot)
    }

    #[test]
    fn test_zero_ath_sanitized_to_missing() {
        let mut market = sample_market("a");
        market.cmrk_ath = Some(0.0);

        let merged = merge(
            vec![market],
            vec![],
            vec![sample_chart("a", 1)],
            vec![],
        );
        let processed = derive(&merged);

        assert_eq!(processed[0].price_vs_ath, None);
    }

    #[test]
    fn test_price_vs_ath_is_distance_from_ath() {
        let mut market = sample_market("a");
        market.cmrk_current_price = Some(100.0);
        market.cmrk_ath = Some(200.0);
        let mut at_ath = sample_market("b");
        at_ath.cmrk_current_price = Some(200.0);
        at_ath.cmrk_ath = Some(200.0);

        let merged = merge(
            vec![market, at_ath],
            vec![],
            vec![sample_chart("a", 1), sample_chart("b", 1)],
            vec![],
        );
        let processed = derive(&merged);

        assert_eq!(processed[0].price_vs_ath, Some(-0.5));
        assert_eq!(processed[1].price_vs_ath, Some(0.0));
    }

    #[test]
    fn test_data_ts_and_currency_come_from_snapshot() {
        let mut market = sample_market("a");
        market.cmrk_data_ts = dt(9);

        let merged = merge(
            vec![market],
            vec![],
            vec![sample_chart("a", 1), sample_chart("orphan", 1)],
            vec![],
        );
        let processed = derive(&merged);

        assert_eq!(processed[0].data_ts, Some(dt(9)));
        assert_eq!(processed[0].currency.as_deref(), Some("usd"));
        assert_eq!(processed[1].data_ts, None);
        assert_eq!(processed[1].currency, None);
    }

    #[test]
    fn test_daily_change_features_use_the_in_currency_column() {
        let mut market = sample_market("a");
        market.cmrk_price_change_percentage_24h = Some(-5.0);
        market.cmrk_price_change_percentage_24h_in_currency = Some(0.02);
        market.cmrk_price_change_percentage_7d_in_currency = Some(-0.04);

        let merged =
            merge(vec![market], vec![], vec![sample_chart("a", 1)], vec![]);
        let processed = derive(&merged);

        assert_eq!(processed[0].price_change_classification, "Bullish");
        assert_eq!(processed[0].risk_reward_ratio, Some(2.0));
    }

    #[test]
    fn test_zero_market_cap_sanitized_to_missing() {
        let mut market = sample_market("a");
        market.cmrk_market_cap = Some(0.0);

        let merged = merge(
            vec![market],
            vec![],
            vec![sample_chart("a", 1)],
            vec![],
        );
        let processed = derive(&merged);

        assert_eq!(processed[0].liquidity_score, None);
    }

    #[test]
    fn test_zero_over_zero_risk_reward_is_missing() {
        let mut market = sample_market("a");
        market.cmrk_price_change_percentage_7d_in_currency = Some(0.0);
        market.cmrk_price_change_percentage_24h_in_currency = Some(0.0);

        let merged = merge(
            vec![market],
            vec![],
            vec![sample_chart("a", 1)],
            vec![],
        );
        let processed = derive(&merged);

        assert_eq!(processed[0].risk_reward_ratio, None);
    }

    #[test]
    fn test_market_dominance_is_batch_relative() {
        let mut big = sample_market("a");
        big.cmrk_market_cap = Some(3000.0);
        let mut small = sample_market("b");
        small.cmrk_market_cap = Some(1000.0);

        let merged = merge(
            vec![big, small],
            vec![],
            vec![sample_chart("a", 1), sample_chart("b", 1)],
            vec![],
        );
        let processed = derive(&merged);

        assert_eq!(processed[0].market_dominance, Some(0.75));
        assert_eq!(processed[1].market_dominance, Some(0.25));
    }

    #[test]
    fn test_classification_and_buckets() {
        let mut bullish = sample_market("a");
        bullish.cmrk_price_change_percentage_24h_in_currency = Some(0.02);
        bullish.cmrk_price_change_percentage_1y_in_currency = Some(1.5);
        bullish.cmrk_circulating_supply = Some(800.0);
        bullish.cmrk_total_supply = Some(1000.0);

        let mut bearish = sample_market("b");
        bearish.cmrk_price_change_percentage_24h_in_currency = Some(-0.02);
        bearish.cmrk_price_change_percentage_1y_in_currency = Some(-0.4);
        bearish.cmrk_circulating_supply = Some(100.0);
        bearish.cmrk_total_supply = Some(1000.0);

        let merged = merge(
            vec![bullish, bearish],
            vec![],
            vec![sample_chart("a", 1), sample_chart("b", 1)],
            vec![],
        );
        let processed = derive(&merged);

        assert_eq!(processed[0].price_change_classification, "Bullish");
        assert_eq!(processed[0].circulation_health, "Healthy");
        assert_eq!(processed[0].performance_trend_1y, "High Growth");
        assert_eq!(processed[1].price_change_classification, "Bearish");
        assert_eq!(processed[1].circulation_health, "Unhealthy");
        assert_eq!(processed[1].performance_trend_1y, "Decline");
    }

    #[test]
    fn test_trending_sentinels_for_non_trending_coins() {
        let merged = merge(
            vec![sample_market("a"), sample_market("b")],
            vec![sample_trending("b")],
            vec![sample_chart("a", 1), sample_chart("b", 1)],
            vec![sample_ohlc("b", 1)],
        );
        let processed = derive(&merged);

        assert_eq!(processed[0].trdg_img_thumb, "-");
        assert_eq!(processed[0].trdg_sparkline, "-");
        assert_eq!(processed[0].trdg_score, 9999);
        assert_eq!(processed[0].trending_flag, Some(0));
        assert_eq!(processed[1].trdg_score, 2);
        assert_eq!(processed[1].trending_flag, Some(1));
    }

    #[test]
    fn test_sheet_table_uses_date_only_form() {
        let merged = merge(
            vec![sample_market("a")],
            vec![],
            vec![sample_chart("a", 1)],
            vec![],
        );
        let table = sheet_table(&derive(&merged)).unwrap();
        let index =
            table.columns.iter().position(|c| c == "date").unwrap();
        assert_eq!(table.rows[0][index], serde_json::json!("2024-01-01"));
    }
}
