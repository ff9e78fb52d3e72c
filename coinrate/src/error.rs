#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response shape: {0}")]
    Format(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }
}

impl From<&Error> for coinrate_api::Error {
    fn from(e: &Error) -> Self {
        let code = match e {
            Error::Transport(_) => coinrate_api::HTTP_ERROR,
            Error::Format(_) => coinrate_api::RESPONSE_ERROR,
            Error::Config(_) => coinrate_api::CONFIG_ERROR,
        };

        coinrate_api::Error {
            code,
            description: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
