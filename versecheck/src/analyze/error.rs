use thiserror::Error;

/// Input problems caught before any network activity.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("no lyrics to analyze, the input was empty after trimming")]
    EmptyLyrics,
}

/// Failures of the exchange itself. An `{error}` envelope from the backend is
/// not one of these; it travels back to the caller as a normal response.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("unable to reach the analysis endpoint. {0}")]
    Connection(#[from] reqwest::Error),
    #[error("the analysis endpoint returned an unrecognized response. {0}")]
    UnexpectedShape(String),
}
