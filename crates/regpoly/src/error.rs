//! Error type shared by construction, parsing and comparison.

use std::fmt;
use thiserror::Error;

/// Which constructor argument was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Param {
    Sides,
    Circumradius,
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Sides => f.write_str("sides"),
            Param::Circumradius => f.write_str("circumradius"),
        }
    }
}

/// Failure raised by construction, parsing, or cross-type comparison.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolygonError {
    #[error("invalid {param}: {reason}")]
    InvalidArgument { param: Param, reason: String },

    #[error("Polygon is not comparable with {other}")]
    NotComparable { other: &'static str },

    #[error("cannot parse polygon from {input:?}")]
    Parse { input: String },
}

impl PolygonError {
    pub(crate) fn invalid(param: Param, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param,
            reason: reason.into(),
        }
    }

    /// True for the construction-time failure kind.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

pub type PolygonResult<T> = Result<T, PolygonError>;
