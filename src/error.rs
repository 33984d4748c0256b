//! Error handling for wikicoord.
//! Defines the error kinds returned by coordinate extraction and the binary.

use std::io;
use thiserror::Error;

use crate::constants::SIGNIFICANT_DIGITS;
use crate::coordinate::{format_significant, Coordinate};

/// Errors produced while extracting a coordinate.
///
/// Validation failures carry the computed, out-of-range coordinate so callers
/// can still inspect what was parsed.
#[derive(Error, Debug)]
pub enum Error {
    /// No `{{coord|...}}` template outside comments and `<nowiki>` blocks
    #[error("No coord data found.")]
    NoCoordData,

    /// The template fields could not be reduced to a latitude/longitude pair
    #[error("Malformed coord template: {0}.")]
    MalformedTemplate(String),

    #[error("Invalid latitude: {}", format_significant(.coordinate.lat, SIGNIFICANT_DIGITS))]
    InvalidLatitude { coordinate: Coordinate },

    #[error("Invalid longitude: {}", format_significant(.coordinate.lon, SIGNIFICANT_DIGITS))]
    InvalidLongitude { coordinate: Coordinate },

    /// Represents errors that occur while reading input
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Some inputs handed to the binary yielded no coordinate
    #[error("{failed} of {total} input(s) yielded no coordinate.")]
    InputsFailed { failed: usize, total: usize },
}

impl Error {
    /// The coordinate that accompanies this error.
    ///
    /// Range failures return the computed value, every other kind returns
    /// the zero coordinate.
    pub fn coordinate(&self) -> Coordinate {
        match self {
            Error::InvalidLatitude { coordinate } | Error::InvalidLongitude { coordinate } => {
                *coordinate
            }
            _ => Coordinate::default(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidLatitude { .. } | Error::InvalidLongitude { .. })
    }
}

/// Convenience type alias for Results with wikicoord's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
