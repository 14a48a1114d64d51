//! `Polygon(n, R)` text form: Display for diagnostics, FromStr for replay.

use std::fmt;
use std::str::FromStr;

use super::types::Polygon;
use crate::error::PolygonError;

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Polygon({}, {})",
            self.number_of_edges(),
            self.circumradius()
        )
    }
}

impl FromStr for Polygon {
    type Err = PolygonError;

    /// Accepts exactly what `Display` prints, modulo surrounding whitespace.
    /// The parsed values still go through `Polygon::new`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || PolygonError::Parse {
            input: s.to_string(),
        };
        let (sides, radius) = s
            .trim()
            .strip_prefix("Polygon(")
            .and_then(|rest| rest.strip_suffix(')'))
            .and_then(|args| args.split_once(','))
            .ok_or_else(parse_err)?;
        let sides: u32 = sides.trim().parse().map_err(|_| parse_err())?;
        let radius: f64 = radius.trim().parse().map_err(|_| parse_err())?;
        Polygon::new(sides, radius)
    }
}
