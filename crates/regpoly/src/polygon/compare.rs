//! Equality, ordering, and the typed cross-type comparison interface.

use std::any::{type_name, Any};
use std::cmp::Ordering;

use super::types::Polygon;
use crate::error::{PolygonError, PolygonResult};

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.number_of_edges() == other.number_of_edges()
            && self.circumradius() == other.circumradius()
    }
}

// Circumradius is finite by construction, so `==` is reflexive.
impl Eq for Polygon {}

impl PartialOrd for Polygon {
    /// Orders by side count only. Same side count with a different
    /// circumradius is unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.cmp_by_sides(other) {
            Ordering::Equal => (self == other).then_some(Ordering::Equal),
            ord => Some(ord),
        }
    }
}

impl Polygon {
    /// Total preorder on the side count, ignoring the circumradius.
    #[inline]
    pub fn cmp_by_sides(&self, other: &Polygon) -> Ordering {
        self.number_of_edges().cmp(&other.number_of_edges())
    }
}

/// Comparison against values whose type is only known at the call site.
///
/// Only `Polygon` vs `Polygon` is comparable; any other right-hand side
/// returns `PolygonError::NotComparable` instead of `false`.
pub trait TryCompare {
    fn try_eq<T: Any>(&self, other: &T) -> PolygonResult<bool>;

    fn try_partial_cmp<T: Any>(&self, other: &T) -> PolygonResult<Option<Ordering>>;

    fn try_gt<T: Any>(&self, other: &T) -> PolygonResult<bool> {
        Ok(self.try_partial_cmp(other)? == Some(Ordering::Greater))
    }

    fn try_lt<T: Any>(&self, other: &T) -> PolygonResult<bool> {
        Ok(self.try_partial_cmp(other)? == Some(Ordering::Less))
    }
}

fn as_polygon<T: Any>(other: &T) -> PolygonResult<&Polygon> {
    (other as &dyn Any)
        .downcast_ref::<Polygon>()
        .ok_or(PolygonError::NotComparable {
            other: type_name::<T>(),
        })
}

impl TryCompare for Polygon {
    fn try_eq<T: Any>(&self, other: &T) -> PolygonResult<bool> {
        Ok(self == as_polygon(other)?)
    }

    fn try_partial_cmp<T: Any>(&self, other: &T) -> PolygonResult<Option<Ordering>> {
        Ok(self.partial_cmp(as_polygon(other)?))
    }
}
