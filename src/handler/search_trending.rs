use chrono::NaiveDateTime;

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::now_ts,
    model::Search_Trending,
    types::TrendingItem,
};

pub async fn fetch(
    app_state: &AppState<State>,
) -> Result<Vec<Search_Trending>, Error> {
    let raw = app_state.http.get_search_trending().await?;
    let data_ts = now_ts();

    Ok(raw
        .coins
        .into_iter()
        .map(|coin| normalize(coin.item, data_ts))
        .collect())
}

pub fn normalize(item: TrendingItem, data_ts: NaiveDateTime) -> Search_Trending {
    // only the btc/usd views of the 24h change are carried
    let change_btc = item.data.price_change_percentage_24h.get("btc").copied();
    let change_usd = item.data.price_change_percentage_24h.get("usd").copied();

    Search_Trending {
        trdg_data_ts: data_ts,
        trdg_id: item.coin_id,
        coin_id: item.id.to_lowercase(),
        coin_name: item.name.to_uppercase(),
        coin_symbol: item.symbol.to_uppercase(),
        trdg_market_cap_rank: item.market_cap_rank,
        trdg_img_thumb: item.thumb,
        trdg_img_small: item.small,
        trdg_img_large: item.large,
        trdg_slug: item.slug,
        trdg_score: item.score,
        trdg_price_usd: item.data.price,
        trdg_price_btc: item.data.price_btc,
        trdg_price_change_percentage_24h_btc: change_btc,
        trdg_price_change_percentage_24h_usd: change_usd,
        trdg_market_cap_usd: item.data.market_cap,
        trdg_market_cap_btc: item.data.market_cap_btc,
        trdg_total_volume_usd: item.data.total_volume,
        trdg_total_volume_btc: item.data.total_volume_btc,
        trdg_sparkline: item.data.sparkline,
    }
}
