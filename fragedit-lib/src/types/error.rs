/// Text Fragment Error codes
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TextFragmentError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Percent decode error: {0}")]
    PercentDecode(String),
}
