//! Look up the current price of a handful of cryptocurrencies.
//!
//! [`coingecko::CoinGecko`] performs the actual lookup, [`shell::Shell`] turns
//! a user's selection into a lookup and the lookup's result into a message.

pub mod coingecko;
pub mod error;
pub mod shell;

pub use coingecko::CoinGecko;
pub use error::{Error, Result};
pub use shell::{Outcome, Shell};

use coinrate_api::PriceQuery;

/// Something that can answer a single price query.
pub trait PriceSource {
    fn price(&self, query: &PriceQuery) -> Result<f64>;
}

impl<'a, S: PriceSource + ?Sized> PriceSource for &'a S {
    fn price(&self, query: &PriceQuery) -> Result<f64> {
        (**self).price(query)
    }
}
