//! Reproducible random regular polygons.
//!
//! Purpose
//! - Feed benches and the CLI `sample` command with deterministic polygon
//!   streams. Every draw is addressed by a replay token `(seed, index)`, so a
//!   single row can be regenerated without replaying the whole stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Param, PolygonError, PolygonResult};
use crate::polygon::Polygon;

/// Side count distribution.
#[derive(Clone, Copy, Debug)]
pub enum SideCount {
    Fixed(u32),
    Uniform { min: u32, max: u32 },
}

impl SideCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> u32 {
        match *self {
            SideCount::Fixed(n) => n.max(3),
            SideCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Sampler configuration. Circumradii are drawn uniformly from
/// `[radius_min, radius_max]`.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub sides: SideCount,
    pub radius_min: f64,
    pub radius_max: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            sides: SideCount::Uniform { min: 3, max: 12 },
            radius_min: 0.5,
            radius_max: 10.0,
        }
    }
}

impl SampleCfg {
    pub fn validate(&self) -> PolygonResult<()> {
        if let SideCount::Uniform { min, max } = self.sides {
            if min > max {
                return Err(PolygonError::invalid(
                    Param::Sides,
                    format!("side count min ({min}) must not exceed max ({max})"),
                ));
            }
        }
        if !self.radius_min.is_finite() || !self.radius_max.is_finite() {
            return Err(PolygonError::invalid(
                Param::Circumradius,
                "radius bounds must be finite",
            ));
        }
        if self.radius_min < 0.0 {
            return Err(PolygonError::invalid(
                Param::Circumradius,
                "radius_min must be >= 0",
            ));
        }
        if self.radius_min > self.radius_max {
            return Err(PolygonError::invalid(
                Param::Circumradius,
                "radius_min <= radius_max required",
            ));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one polygon for `tok`. Same `(cfg, tok)` always gives the same polygon.
pub fn draw_polygon(cfg: SampleCfg, tok: ReplayToken) -> PolygonResult<Polygon> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let n = cfg.sides.sample(&mut rng);
    // radius_min >= 0, so the span cannot overflow even for [0, f64::MAX]
    let span = cfg.radius_max - cfg.radius_min;
    let r = (cfg.radius_min + rng.gen::<f64>() * span).min(cfg.radius_max);
    Polygon::new(n, r)
}

/// Iterator over `draw_polygon(cfg, (seed, 0)), (seed, 1), …`.
#[derive(Clone, Debug)]
pub struct PolygonSampler {
    cfg: SampleCfg,
    seed: u64,
    next_index: u64,
}

impl PolygonSampler {
    pub fn new(cfg: SampleCfg, seed: u64) -> PolygonResult<Self> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            seed,
            next_index: 0,
        })
    }

    /// Token that the next call to `next` will use.
    pub fn next_token(&self) -> ReplayToken {
        ReplayToken {
            seed: self.seed,
            index: self.next_index,
        }
    }

    pub fn regenerate(&self, tok: ReplayToken) -> PolygonResult<Polygon> {
        draw_polygon(self.cfg, tok)
    }
}

impl Iterator for PolygonSampler {
    type Item = (ReplayToken, Polygon);

    fn next(&mut self) -> Option<Self::Item> {
        let tok = self.next_token();
        self.next_index = self.next_index.wrapping_add(1);
        // cfg was validated in `new`, and sampled values satisfy the invariants
        draw_polygon(self.cfg, tok).ok().map(|p| (tok, p))
    }
}
