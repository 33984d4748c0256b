//! wikicoord extracts a geographic coordinate from wiki markup.
//! It finds the first `{{coord|...}}` template outside HTML comments and
//! `<nowiki>` blocks and reduces its fields to a validated latitude/longitude.

/// Command-line interface module for the wikicoord binary
pub mod cli;

/// Common constants
pub mod constants;

/// The coordinate value type and range validation
pub mod coordinate;

/// Error types and handling
pub mod error;

/// Input sources for the binary (files and stdin)
pub mod input;

/// Template lookup in masked text
pub mod locator;

/// env_logger setup for the binary
pub mod logger;

/// Comment and `<nowiki>` region masking
pub mod mask;

/// Field parsing and the public entry points
pub mod parser;

/// Template argument classification
pub mod token;

pub use coordinate::Coordinate;
pub use error::{Error, Result};
pub use parser::{parse, parse_lossy};
