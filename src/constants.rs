//! Common constants used throughout wikicoord.

/// Inclusive latitude bounds in degrees
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Inclusive longitude bounds in degrees
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Precision of values reported in range errors
pub const SIGNIFICANT_DIGITS: usize = 7;

/// Most fields a degree/minute/second group may hold
pub const MAX_GROUP_FIELDS: usize = 3;

/// Argument that selects stdin as an input
pub const STDIN_ARG: &str = "-";
