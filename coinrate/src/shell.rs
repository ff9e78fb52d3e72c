use crate::error::Error;
use crate::PriceSource;
use coinrate_api::assets::{self, Asset, ASSETS};
use coinrate_api::{PriceAnswer, PriceQuery, DEFAULT_FIAT, SELECTION_ERROR};
use log::{error, warn};
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

pub const NO_SELECTION_NOTICE: &str = "Select a cryptocurrency";
pub const FAILURE_NOTICE: &str = "Could not retrieve the price data";

/// Front end logic: resolves what the user picked and renders the result.
pub struct Shell<S> {
    source: S,
    fiat_code: String,
}

#[derive(Debug)]
pub enum Outcome {
    Price {
        asset: &'static Asset,
        query: PriceQuery,
        price: f64,
    },
    NoSelection,
    UnknownAsset(String),
    /// Transport and format errors alike, the user only sees [`FAILURE_NOTICE`].
    Failed(Error),
}

impl<S: PriceSource> Shell<S> {
    pub fn new(source: S) -> Shell<S> {
        Shell {
            source,
            fiat_code: DEFAULT_FIAT.to_string(),
        }
    }

    pub fn fiat_code(&self) -> &str {
        &self.fiat_code
    }

    /// Looks up the price of the asset with the display name `selection`.
    ///
    /// The price source is only queried for names from the asset table.
    pub fn check_price(&self, selection: Option<&str>) -> Outcome {
        let name = match selection.map(str::trim) {
            None | Some("") => {
                warn!("Price requested without selecting a cryptocurrency");
                return Outcome::NoSelection;
            }
            Some(name) => name,
        };

        let asset = match assets::by_name(name) {
            Some(asset) => asset,
            None => {
                warn!("Unknown cryptocurrency '{}'", name);
                return Outcome::UnknownAsset(name.to_string());
            }
        };

        let query = PriceQuery::with_fiat(asset.id, &self.fiat_code);
        match self.source.price(&query) {
            Ok(price) => Outcome::Price {
                asset,
                query,
                price,
            },
            Err(e) => {
                error!("Could not get the price of {}: {}", asset.name, e);
                Outcome::Failed(e)
            }
        }
    }

    /// Interactive selection loop, runs until `q` or the end of `input`.
    pub fn run_prompt<R: BufRead, W: Write>(&self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "Crypto exchange rate")?;
        writeln!(output, "Base currency: {}", self.fiat_code.to_uppercase())?;
        for (idx, asset) in ASSETS.iter().enumerate() {
            writeln!(output, "  {}) {}", idx + 1, asset.name)?;
        }

        let mut lines = input.lines();
        loop {
            write!(output, "Target currency (number or name, q to quit): ")?;
            output.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };
            if line.trim() == "q" {
                break;
            }

            let outcome = self.check_price(selection_from_input(&line));
            writeln!(output, "{}", outcome)?;
        }

        Ok(())
    }
}

/// Maps a prompt answer to a display name, accepting list positions too.
pub fn selection_from_input(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match line.parse::<usize>() {
        Ok(position) => Some(assets::by_position(position).map_or(line, |asset| asset.name)),
        Err(_) => Some(line),
    }
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Price { .. } => 0,
            Outcome::Failed(_) => 1,
            Outcome::NoSelection | Outcome::UnknownAsset(_) => 2,
        }
    }

    /// Machine readable form of the outcome, distinguishes the failure kinds.
    pub fn to_answer(&self) -> Result<PriceAnswer, coinrate_api::Error> {
        match self {
            Outcome::Price { query, price, .. } => Ok(PriceAnswer {
                req: query.clone(),
                price: *price,
            }),
            Outcome::NoSelection => Err(coinrate_api::Error {
                code: SELECTION_ERROR,
                description: "no cryptocurrency selected".to_string(),
            }),
            Outcome::UnknownAsset(name) => Err(coinrate_api::Error {
                code: SELECTION_ERROR,
                description: format!("unknown cryptocurrency '{}'", name),
            }),
            Outcome::Failed(e) => Err(e.into()),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Price { asset, price, .. } => write!(f, "Price of {}: ${}", asset.name, price),
            Outcome::NoSelection => write!(f, "Warning: {}", NO_SELECTION_NOTICE),
            Outcome::UnknownAsset(name) => write!(f, "Warning: unknown cryptocurrency '{}'", name),
            Outcome::Failed(_) => write!(f, "Error: {}", FAILURE_NOTICE),
        }
    }
}
