use thiserror::Error;

use crate::booking::wizard::TransitionError;

/// Failures raised while loading the car catalog from a provider.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed catalog data: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Catalog request failed: {0}")]
    Http(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Http(err.to_string())
    }
}

/// Failures raised while handing a booking over to the messaging service.
#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("Destination `{0}` contains no digits")]
    InvalidDestination(String),
    #[error("Could not open link: {0}")]
    OpenFailed(String),
}

/// Failures raised while loading or saving preferences.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Invalid value for `{key}`: {value}")]
    InvalidValue { key: String, value: String },
    #[error("Unknown configuration key `{0}`")]
    UnknownKey(String),
}

/// Unified error type for the booking core.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("Car not found: {0}")]
    UnknownCar(String),
    #[error("Car `{0}` must be chosen from the catalog")]
    UnverifiedCar(String),
    #[error(transparent)]
    Handoff(#[from] HandoffError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, BookingError>;
