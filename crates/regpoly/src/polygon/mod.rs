//! Regular convex polygon value type.
//!
//! Purpose
//! - `Polygon` holds a side count `n >= 3` and a finite circumradius `R >= 0`.
//!   Both are fixed at construction; there are no mutators.
//! - Derived quantities are computed on demand from `(n, R)`.
//!
//! Comparison
//! - Equality is structural on `(n, R)`.
//! - Ordering looks at `n` only: more sides is greater. Two polygons with the
//!   same side count but different circumradii are unordered (`partial_cmp`
//!   returns `None`), so `a == b` never coexists with `a < b` or `a > b`.
//! - Comparing against a foreign type goes through `TryCompare` and yields
//!   `PolygonError::NotComparable`.
//!
//! Code cross-refs: `types::Polygon`, `compare::TryCompare`, `text` (Display/FromStr)

mod compare;
mod text;
mod types;

pub use compare::TryCompare;
pub use types::Polygon;

#[cfg(test)]
mod tests;
