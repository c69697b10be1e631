use serde::Serialize;

use super::{Coins_Market, Market_Chart, Ohlc_Values, Trending_Attrs};

/// Join provenance: matched on both sides, or left side only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Merge_Status {
    Both,
    LeftOnly,
}

/// Stage 1: market snapshot enriched with trending attributes.
#[derive(Debug, Clone, Serialize)]
pub struct Market_Trending {
    #[serde(flatten)]
    pub market: Coins_Market,
    #[serde(flatten)]
    pub trending: Option<Trending_Attrs>,
    pub merge_status_1: Merge_Status,
    pub trending_flag: i64,
}

/// Stage 2: market-chart series as the driving side, OHLC attached
/// where `(coin_id, date)` matched.
#[derive(Debug, Clone, Serialize)]
pub struct Chart_Ohlc {
    #[serde(flatten)]
    pub chart: Market_Chart,
    #[serde(flatten)]
    pub ohlc: Option<Ohlc_Values>,
    pub merge_status_2: Merge_Status,
}

/// Stage 3: the final reconciled row, one per `(coin_id, date)`, with
/// the per-coin snapshot/trending attributes broadcast across dates.
#[derive(Debug, Clone, Serialize)]
pub struct Merged {
    #[serde(flatten)]
    pub series: Chart_Ohlc,
    #[serde(flatten)]
    pub snapshot: Option<Market_Trending>,
    pub merge_status_3: Merge_Status,
}
