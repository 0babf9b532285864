//! Voronoi diagrams of planar point sets, using Fortune's sweep-line algorithm.
//!
//! The sweep line is vertical and moves towards positive x. Every site swept so far contributes a
//! parabolic arc to the beach line, and the breakpoints between adjacent arcs trace the edges of
//! the diagram. The result is a flat list of finite segments, one per traced edge piece, given as
//! `(x0, y0, x1, y1)`.
//!
//! ```
//! use fortune_sweep::{fortune_algorithm, Point};
//!
//! let sites = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, 4.0)];
//! let segments = fortune_algorithm(&sites).unwrap();
//! assert_eq!(segments.len(), 5);
//! ```

/// Per-event tracing, forwarded to `log::trace!`.
macro_rules! debugln {
    ($($arg:tt)*) => {
        ::log::trace!($($arg)*)
    };
}

pub mod beachline;
pub mod diagram;
pub mod error;
pub mod geometry;
mod heap;
mod index;
pub mod schedule;
mod sweep;


pub use beachline::{BeachLine, Insertion, Removal};
pub use error::VoronoiError;
pub use geometry::BoundingBox;
pub use index::{ArcId, EventId, SegmentId};
pub use sweep::{fortune_algorithm, fortune_algorithm_with, LineSegment, Step};

/// A point in 2D space. Used for sites, breakpoints and circle centers alike.
#[derive(PartialEq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl std::ops::Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// The z component of the cross product of `self` and `other`.
    pub fn perp_dot(&self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn dist(&self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Point")
            .field(&self.x)
            .field(&self.y)
            .finish()
    }
}
impl std::hash::Hash for Point {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}
impl Eq for Point {}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}
impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x as f64, y as f64)
    }
}
