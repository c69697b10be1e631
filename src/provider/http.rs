use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::{
    configuration::Config,
    error::Error,
    types::{Candle, CoinGeckoMarket, CoinGeckoMarketData, TrendingResponse},
};

/// Timeframes requested from `/coins/markets`.
const PRICE_CHANGE_WINDOWS: &str = "1h,24h,7d,14d,30d,200d,1y";

#[derive(Debug)]
pub struct HTTP {
    pub config: Config,
    client: Client,
}

impl HTTP {
    pub fn new(config: Config) -> Result<HTTP, Error> {
        let client = Client::builder().build()?;
        Ok(HTTP { config, client })
    }

    /// Markets snapshot; `ids` scopes the call to an explicit coin set,
    /// `None` fetches the top page by descending market cap.
    pub async fn get_coins_markets(
        &self,
        ids: Option<&[String]>,
    ) -> Result<Vec<CoinGeckoMarket>, Error> {
        let mut params = vec![
            ("vs_currency", self.config.currency.to_owned()),
            ("order", String::from("market_cap_desc")),
            ("per_page", self.config.per_page.to_string()),
            ("page", String::from("1")),
            ("sparkline", String::from("false")),
            (
                "price_change_percentage",
                String::from(PRICE_CHANGE_WINDOWS),
            ),
            ("locale", String::from("en")),
            ("precision", self.config.decimal_precision.to_string()),
        ];
        if let Some(ids) = ids {
            params.push(("ids", ids.join(",")));
        }

        self.get_json(self.config.coins_markets_url(), &params).await
    }

    pub async fn get_search_trending(&self) -> Result<TrendingResponse, Error> {
        self.get_json(self.config.search_trending_url(), &[]).await
    }

    pub async fn get_market_chart(
        &self,
        id: &str,
        days: i64,
    ) -> Result<CoinGeckoMarketData, Error> {
        let params = vec![
            ("vs_currency", self.config.currency.to_owned()),
            ("days", days.to_string()),
            ("interval", String::from("daily")),
            ("precision", self.config.decimal_precision.to_string()),
        ];
        self.get_json(self.config.market_chart_url(id), &params).await
    }

    /// `from`/`to` are second-resolution Unix timestamps.
    pub async fn get_market_chart_range(
        &self,
        id: &str,
        from: i64,
        to: i64,
    ) -> Result<CoinGeckoMarketData, Error> {
        let params = vec![
            ("vs_currency", self.config.currency.to_owned()),
            ("from", from.to_string()),
            ("to", to.to_string()),
            ("precision", self.config.decimal_precision.to_string()),
        ];
        self.get_json(self.config.market_chart_range_url(id), &params)
            .await
    }

    pub async fn get_ohlc(
        &self,
        id: &str,
        days: i64,
    ) -> Result<Vec<Candle>, Error> {
        let params = vec![
            ("vs_currency", self.config.currency.to_owned()),
            ("days", days.to_string()),
            ("precision", self.config.decimal_precision.to_string()),
        ];
        self.get_json(self.config.ohlc_url(id), &params).await
    }

    /// 4xx/5xx surfaces as `Error::Transport`; a payload that no longer
    /// matches the typed contract surfaces as `Error::Schema`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        info!("{}", &url);
        let body = self
            .client
            .get(url)
            .query(params)
            .header("accept", "application/json")
            .header("x-cg-demo-api-key", &self.config.coingecko_api_key)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }
}
