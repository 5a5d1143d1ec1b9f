use thiserror::Error;

/// A typed value could not be read from a raw token. Always recoverable by asking again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("nothing was entered")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' is negative")]
    Negative(String),

    #[error("'{raw}' has more than {max} decimal places")]
    TooManyDecimals { raw: String, max: u32 },

    #[error("'{0}' is not a whole number")]
    NotWholeNumber(String),

    #[error("'{0}' must be at least 1")]
    NotPositive(String),

    #[error("'{0}' is not 'simple' or 'compound'")]
    UnknownMode(String),

    #[error("'{0}' is not a valid request")]
    UnknownRequest(String),

    #[error("the result is too large to show")]
    ResultOutOfRange,
}

/// Failures that end the session.
#[derive(Error, Debug)]
pub enum FinanceError {
    #[error("input stream closed before the calculation finished")]
    EndOfInput,

    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
