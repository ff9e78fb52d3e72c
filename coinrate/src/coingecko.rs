//! Client for the CoinGecko `simple/price` endpoint.
//!
//! Every lookup is a single blocking GET. Nothing is cached and failed
//! requests are never retried, the error goes straight back to the caller.

use crate::error::{Error, Result};
use crate::PriceSource;
use coinrate_api::{PriceQuery, SimplePriceResponse};
use log::{debug, error, info};
use reqwest::blocking::Client;
use reqwest::Url;

pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";
const SIMPLE_PRICE_PATH: &str = "simple/price";

#[derive(Debug, Clone)]
pub struct CoinGecko {
    endpoint: Url,
    client: Client,
}

impl CoinGecko {
    /// Client for the API rooted at `base_url`, e.g. [`DEFAULT_API_URL`].
    pub fn new(base_url: &str) -> Result<CoinGecko> {
        CoinGecko::with_client(base_url, Client::new())
    }

    /// Like [`CoinGecko::new`], but sends its requests through `client`.
    pub fn with_client(base_url: &str, client: Client) -> Result<CoinGecko> {
        let mut base = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid API url '{}': {}", base_url, e)))?;

        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(Error::Config(format!(
                "API url '{}' is not an http(s) url",
                base_url
            )));
        }

        // without the trailing slash `join` would drop the last path segment
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let endpoint = base
            .join(SIMPLE_PRICE_PATH)
            .map_err(|e| Error::Config(format!("invalid API url '{}': {}", base_url, e)))?;
        debug!("Using price endpoint {}", endpoint);

        Ok(CoinGecko { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches the price of one unit of `asset_id` denominated in `fiat_code`.
    pub fn simple_price(&self, asset_id: &str, fiat_code: &str) -> Result<f64> {
        let res = self.fetch(asset_id, fiat_code);

        match &res {
            Ok(price) => info!(
                "Price of {} in {}: {}",
                asset_id,
                fiat_code.to_uppercase(),
                price
            ),
            Err(e) if e.is_transport() => error!("Request to the CoinGecko API failed: {}", e),
            Err(e) => error!("Invalid CoinGecko API response: {}", e),
        }

        res
    }

    fn fetch(&self, asset_id: &str, fiat_code: &str) -> Result<f64> {
        let body = self
            .client
            .get(self.endpoint.clone())
            .query(&[("ids", asset_id), ("vs_currencies", fiat_code)])
            .send()?
            .error_for_status()?
            .text()?;

        extract_price(&body, asset_id, fiat_code)
    }
}

impl PriceSource for CoinGecko {
    fn price(&self, query: &PriceQuery) -> Result<f64> {
        self.simple_price(&query.asset_id, &query.fiat_code)
    }
}

fn extract_price(body: &str, asset_id: &str, fiat_code: &str) -> Result<f64> {
    let prices: SimplePriceResponse = serde_json::from_str(body)
        .map_err(|e| Error::Format(format!("body is not a price table: {}", e)))?;

    let price = prices
        .get(asset_id)
        .and_then(|quotes| quotes.get(fiat_code))
        .ok_or_else(|| {
            Error::Format(format!("no price for '{}' in '{}'", asset_id, fiat_code))
        })?;

    price.as_f64().ok_or_else(|| {
        Error::Format(format!(
            "price for '{}' in '{}' is not a number: {}",
            asset_id, fiat_code, price
        ))
    })
}
