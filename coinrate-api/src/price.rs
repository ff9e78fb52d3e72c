use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_FIAT: &str = "usd";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PriceQuery {
    pub asset_id: String,
    pub fiat_code: String,
}

impl PriceQuery {
    /// Query the price of `asset_id` in US dollars.
    pub fn new(asset_id: &str) -> PriceQuery {
        PriceQuery::with_fiat(asset_id, DEFAULT_FIAT)
    }

    pub fn with_fiat(asset_id: &str, fiat_code: &str) -> PriceQuery {
        PriceQuery {
            asset_id: asset_id.to_string(),
            fiat_code: fiat_code.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PriceAnswer {
    pub req: PriceQuery,
    pub price: f64,
}

/// Body of a `simple/price` response: asset id -> fiat code -> price.
pub type SimplePriceResponse = HashMap<String, HashMap<String, serde_json::Value>>;
