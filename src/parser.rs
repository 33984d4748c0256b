//! Reduction of classified template arguments to a coordinate.
//! Also hosts the public entry points that chain masking, lookup and parsing.

use log::debug;

use crate::constants::MAX_GROUP_FIELDS;
use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::locator::find_template_body;
use crate::mask::mask_regions;
use crate::token::{tokenize, Token};

/// Divisors for the degree, minute and second fields of a group.
const FIELD_DIVISORS: [f64; MAX_GROUP_FIELDS] = [1.0, 60.0, 3600.0];

/// Progress through a hemisphere-marked argument list.
#[derive(Debug, Clone, Copy)]
enum State {
    AwaitLatitudeHemisphere,
    AwaitLongitudeHemisphere { lat: f64 },
}

/// Extracts the first valid coordinate from wiki markup.
///
/// # Arguments
/// * `text` - Arbitrary text that may contain a `{{coord|...}}` template
///
/// # Returns
/// * `Result<Coordinate>` - The coordinate of the first template outside
///   comments and `<nowiki>` blocks
///
/// # Errors
/// * `Error::NoCoordData` if no template is found
/// * `Error::MalformedTemplate` if the fields cannot be resolved
/// * `Error::InvalidLatitude` / `Error::InvalidLongitude` on range failures;
///   these carry the computed coordinate
///
/// # Example
/// ```
/// let coordinate = wikicoord::parse("{{coord|27|59|16|N|86|56|40|E}}").unwrap();
/// assert!((coordinate.lat - 27.987777).abs() < 1e-5);
/// ```
pub fn parse(text: &str) -> Result<Coordinate> {
    let masked = mask_regions(text);
    let body = find_template_body(&masked)?;
    parse_body(body)
}

/// Like [`parse`], but always hands back a coordinate next to the error.
///
/// The coordinate is the zero value on terminal failures and the computed,
/// out-of-range value on validation failures.
pub fn parse_lossy(text: &str) -> (Coordinate, Option<Error>) {
    match parse(text) {
        Ok(coordinate) => (coordinate, None),
        Err(err) => (err.coordinate(), Some(err)),
    }
}

/// Parses a template body (the argument list without `coord|` and braces).
pub fn parse_body(body: &str) -> Result<Coordinate> {
    let tokens = tokenize(body);
    let coordinate = if tokens.iter().any(|t| matches!(t, Token::Hemisphere(_))) {
        parse_hemisphere_groups(&tokens)?
    } else {
        parse_decimal_pair(&tokens)?
    };
    debug!("Parsed coordinate {}", coordinate);
    coordinate.validate()?;
    Ok(coordinate)
}

/// Signed decimal latitude and longitude; further arguments are ignored.
fn parse_decimal_pair(tokens: &[Token]) -> Result<Coordinate> {
    match tokens {
        [lat, lon, ..] => Ok(Coordinate::new(field_value(lat)?, field_value(lon)?)),
        _ => Err(Error::MalformedTemplate(format!(
            "expected latitude and longitude, found {} field(s)",
            tokens.len()
        ))),
    }
}

/// Degree groups closed by hemisphere markers; arguments after the second
/// marker are ignored.
fn parse_hemisphere_groups(tokens: &[Token]) -> Result<Coordinate> {
    let mut state = State::AwaitLatitudeHemisphere;
    let mut group: Vec<&Token> = Vec::with_capacity(MAX_GROUP_FIELDS);

    for token in tokens {
        let Token::Hemisphere(hemisphere) = token else {
            group.push(token);
            continue;
        };
        let value = reduce_group(&group)? * hemisphere.sign();
        group.clear();
        state = match state {
            State::AwaitLatitudeHemisphere => State::AwaitLongitudeHemisphere { lat: value },
            State::AwaitLongitudeHemisphere { lat } => return Ok(Coordinate::new(lat, value)),
        };
    }

    Err(Error::MalformedTemplate("missing longitude hemisphere".to_string()))
}

/// Folds `[deg]`, `[deg, min]` or `[deg, min, sec]` into decimal degrees.
fn reduce_group(group: &[&Token]) -> Result<f64> {
    if group.is_empty() || group.len() > MAX_GROUP_FIELDS {
        return Err(Error::MalformedTemplate(format!(
            "expected 1 to {} degree fields before a hemisphere, found {}",
            MAX_GROUP_FIELDS,
            group.len()
        )));
    }
    group
        .iter()
        .zip(FIELD_DIVISORS)
        .try_fold(0.0, |total, (token, divisor)| -> Result<f64> {
            Ok(total + field_value(token)? / divisor)
        })
}

fn field_value(token: &Token) -> Result<f64> {
    token.value().ok_or_else(|| match token {
        Token::Text(text) => Error::MalformedTemplate(format!("'{}' is not a number", text)),
        other => Error::MalformedTemplate(format!("expected a number, found {:?}", other)),
    })
}
