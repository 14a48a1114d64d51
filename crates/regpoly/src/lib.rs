//! Regular convex polygons as immutable value objects.
//!
//! A `Polygon` is fixed by its side count and circumradius; everything else
//! (edge length, apothem, area, perimeter, interior angle, vertex coordinates)
//! is derived on demand.
//!
//! API Policy
//! - `Polygon` and `PolygonError` are the stable surface.
//! - `sample` is a helper for benches and the CLI; expect it to move around.

pub mod error;
pub mod polygon;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Param, PolygonError, PolygonResult};
pub use nalgebra::Vector2 as Vec2;
pub use polygon::{Polygon, TryCompare};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Param, PolygonError, PolygonResult};
    pub use crate::polygon::{Polygon, TryCompare};
    pub use crate::sample::{draw_polygon, PolygonSampler, ReplayToken, SampleCfg, SideCount};
    pub use nalgebra::Vector2 as Vec2;
}
