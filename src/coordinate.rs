//! The coordinate value produced by extraction and its range validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::error::{Error, Result};

/// A signed latitude/longitude pair in decimal degrees.
///
/// Positive values are North/East, negative values South/West.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Checks both axes against their bounds.
    ///
    /// # Errors
    /// * `Error::InvalidLatitude` if latitude is outside `[-90, 90]`
    /// * `Error::InvalidLongitude` if latitude is valid and longitude is outside `[-180, 180]`
    pub fn validate(&self) -> Result<()> {
        if !within(self.lat, LATITUDE_RANGE) {
            return Err(Error::InvalidLatitude { coordinate: *self });
        }
        if !within(self.lon, LONGITUDE_RANGE) {
            return Err(Error::InvalidLongitude { coordinate: *self });
        }
        Ok(())
    }

    /// Renders the coordinate as a decimal `{{coord|lat|lon}}` template.
    pub fn to_template(&self) -> String {
        format!("{{{{coord|{}|{}}}}}", self.lat, self.lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

// NaN fails both comparisons and is rejected.
fn within(value: f64, (min, max): (f64, f64)) -> bool {
    value >= min && value <= max
}

/// Formats `value` with at most `digits` significant digits.
///
/// Extra digits are cut off rather than rounded, so `-97.987777…` becomes
/// `-97.98777`. Values whose integer part is wider than `digits` switch to
/// exponent form, so `123456789` becomes `1.234567e8`.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }
    let integer_digits = value.abs().log10().floor() as i64 + 1;

    if integer_digits > digits as i64 {
        let exponent = integer_digits - 1;
        let mantissa = value / 10f64.powi(exponent as i32);
        let mantissa = truncate_decimals(mantissa, digits.saturating_sub(1));
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        return format!("{}e{}", mantissa, exponent);
    }

    let decimals = (digits as i64 - integer_digits).max(0) as usize;
    truncate_decimals(value, decimals)
}

fn truncate_decimals(value: f64, decimals: usize) -> String {
    // Guard digits absorb the rounding done by the formatter.
    const GUARD: usize = 3;
    let wide = format!("{:.*}", decimals + GUARD, value);
    let cut = &wide[..wide.len() - GUARD];
    cut.trim_end_matches('.').to_string()
}
