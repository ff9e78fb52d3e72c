use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};

pub mod assets;
pub mod price;

pub use assets::Asset;
pub use price::{PriceAnswer, PriceQuery, SimplePriceResponse, DEFAULT_FIAT};

/// No cryptocurrency was selected, or the selection is not in the asset table.
pub const SELECTION_ERROR: u64 = 1;
/// The price source could not be set up from the given configuration.
pub const CONFIG_ERROR: u64 = 2;
/// The request failed at the network or HTTP level.
pub const HTTP_ERROR: u64 = 3;
/// The API answered, but not with the expected price table.
pub const RESPONSE_ERROR: u64 = 4;

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Error {
    pub code: u64,
    pub description: String,
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}
