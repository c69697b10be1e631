use std::collections::HashSet;

use tracing::info;

use crate::{
    configuration::{AppState, State},
    error::Error,
    handler::{coins_markets, search_trending},
    model::{Coins_Market, Search_Trending},
};

/// The working set for one pipeline run: the initial snapshot, the
/// snapshot extended with trending-only coins, the trending rows, and
/// the deduplicated coin list every per-coin loop iterates.
#[derive(Debug)]
pub struct CoinUniverse {
    pub markets: Vec<Coins_Market>,
    pub market_all: Vec<Coins_Market>,
    pub trending: Vec<Search_Trending>,
    pub coin_list: Vec<String>,
}

pub async fn resolve(
    app_state: &AppState<State>,
) -> Result<CoinUniverse, Error> {
    let markets = coins_markets::fetch(app_state, None).await?;
    let market_ids = unique_ids(markets.iter().map(|row| row.coin_id.as_str()));

    let trending = search_trending::fetch(app_state).await?;
    let trending_ids =
        unique_ids(trending.iter().map(|row| row.coin_id.as_str()));

    let gap = trending_gap(&trending_ids, &market_ids);

    let mut market_all = markets.to_owned();
    if !gap.is_empty() {
        info!(
            "fetching {} trending coins missing from the market snapshot",
            gap.len()
        );
        let additional = coins_markets::fetch(app_state, Some(&gap)).await?;
        market_all.extend(additional);
    }

    let coin_list =
        unique_ids(market_all.iter().map(|row| row.coin_id.as_str()));
    info!("coin universe resolved: {} coins", coin_list.len());

    Ok(CoinUniverse {
        markets,
        market_all,
        trending,
        coin_list,
    })
}

/// First-seen-order deduplication.
pub fn unique_ids<'a, I>(ids: I) -> Vec<String>
where
    I: Iterator<Item = &'a str>,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut unique = Vec::new();

    for id in ids {
        if seen.insert(id) {
            unique.push(id.to_owned());
        }
    }

    unique
}

/// Trending ids absent from the market snapshot, in trending order.
pub fn trending_gap(
    trending_ids: &[String],
    market_ids: &[String],
) -> Vec<String> {
    trending_ids
        .iter()
        .filter(|id| !market_ids.contains(id))
        .map(String::to_owned)
        .collect()
}
