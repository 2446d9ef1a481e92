use error_location::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid trade action: {value} {location}")]
    InvalidTradeAction {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid preference type: {value} {location}")]
    InvalidPreferenceType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid market event: {value} {location}")]
    InvalidMarketEvent {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
