//! `Polygon` construction and derived measures.

use nalgebra::Vector2;
use std::f64::consts::PI;

use crate::error::{Param, PolygonError, PolygonResult};

/// Regular strictly convex polygon: equal side lengths, equal interior
/// angles, all interior angles below 180°.
///
/// Invariants:
/// - `sides >= 3`.
/// - `circumradius` is finite and `>= 0` (zero is the degenerate point polygon).
#[derive(Clone, Copy, Debug)]
pub struct Polygon {
    sides: u32,
    circumradius: f64,
}

impl Polygon {
    /// Validate and build. Sides are checked before the circumradius.
    pub fn new(sides: u32, circumradius: f64) -> PolygonResult<Self> {
        if sides < 3 {
            tracing::debug!(sides, circumradius, "rejecting polygon: too few sides");
            return Err(PolygonError::invalid(
                Param::Sides,
                format!("number of edges/vertices must be >= 3, got {sides}"),
            ));
        }
        if !circumradius.is_finite() {
            tracing::debug!(sides, circumradius, "rejecting polygon: non-finite circumradius");
            return Err(PolygonError::invalid(
                Param::Circumradius,
                format!("circumradius must be finite, got {circumradius}"),
            ));
        }
        if circumradius < 0.0 {
            tracing::debug!(sides, circumradius, "rejecting polygon: negative circumradius");
            return Err(PolygonError::invalid(
                Param::Circumradius,
                format!("circumradius must be >= 0, got {circumradius}"),
            ));
        }
        Ok(Self {
            sides,
            // fold -0.0 into +0.0
            circumradius: circumradius + 0.0,
        })
    }

    #[inline]
    pub fn number_of_vertices(&self) -> u32 {
        self.sides
    }

    #[inline]
    pub fn number_of_edges(&self) -> u32 {
        self.sides
    }

    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Angle subtended at the center by one edge, in radians: `2π/n`.
    #[inline]
    pub fn central_angle(&self) -> f64 {
        2.0 * PI / self.sides as f64
    }

    /// `s = 2 R sin(π/n)`
    #[inline]
    pub fn edge_length(&self) -> f64 {
        2.0 * self.circumradius * (PI / self.sides as f64).sin()
    }

    /// `a = R cos(π/n)`
    #[inline]
    pub fn apothem(&self) -> f64 {
        self.circumradius * (PI / self.sides as f64).cos()
    }

    /// Radius of the inscribed circle; same as the apothem.
    #[inline]
    pub fn inradius(&self) -> f64 {
        self.apothem()
    }

    /// `A = ½ n s a`
    pub fn area(&self) -> f64 {
        0.5 * self.sides as f64 * self.edge_length() * self.apothem()
    }

    /// `P = n s`
    pub fn perimeter(&self) -> f64 {
        self.sides as f64 * self.edge_length()
    }

    /// Interior angle in degrees: `(n − 2)·180/n`.
    pub fn interior_angle(&self) -> f64 {
        (self.sides as f64 - 2.0) * 180.0 / self.sides as f64
    }

    /// Vertices on the circumcircle, counterclockwise, the first one at
    /// angle `rotation` (radians) from the positive x-axis.
    pub fn vertices(&self, rotation: f64) -> Vec<Vector2<f64>> {
        let step = self.central_angle();
        (0..self.sides)
            .map(|i| {
                let theta = rotation + step * i as f64;
                Vector2::new(
                    self.circumradius * theta.cos(),
                    self.circumradius * theta.sin(),
                )
            })
            .collect()
    }
}
