//! Pure geometric primitives of the sweep: parabola breakpoints, arc hit tests and circle events.
//!
//! The sweep line is the vertical line `x = l` (the directrix). The parabola of a site `f` with
//! `f.x < l` is the set of points equidistant from `f` and the directrix, and opens towards
//! negative x.

use crate::{Point, VoronoiError};

/// Fraction of the (span + 1) of the input added on each side of the bounding box.
const BOX_MARGIN: f64 = 0.25;

/// The box around the input, expanded by a margin. Its left wall seeds the start of edges between
/// sites that share the first sweep position, and its extent decides where the sweep is closed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}
impl BoundingBox {
    /// Return the expanded bounding box of `points`, or `None` if there are no points.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = BoundingBox {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for p in &points[1..] {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_y = bounds.max_y.max(p.y);
        }

        let dx = (bounds.width() + 1.0) * BOX_MARGIN;
        let dy = (bounds.height() + 1.0) * BOX_MARGIN;
        bounds.min_x -= dx;
        bounds.max_x += dx;
        bounds.min_y -= dy;
        bounds.max_y += dy;

        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The sweep position at which the edges still open at the end of the sweep are cut, when
    /// the last event was processed at `sweep_x`.
    ///
    /// The breakpoints of the final beach line move away from the box as the directrix advances,
    /// so this is placed well past the right wall. Circle events can happen far past the box, and
    /// an edge born there must be cut ahead of its vertex, so the closing position is also kept
    /// the same distance past the last event.
    pub fn closing_x(&self, sweep_x: f64) -> f64 {
        self.max_x.max(sweep_x) + 2.0 * (self.width() + self.height())
    }
}

/// The x coordinate of the point at height `y` on the parabola of `focus`, for the directrix at
/// `l`. `focus.x` must differ from `l`.
fn parabola_x(focus: Point, y: f64, l: f64) -> f64 {
    let dy = focus.y - y;
    (focus.x * focus.x + dy * dy - l * l) / (2.0 * focus.x - 2.0 * l)
}

/// The intersection of the parabolas of `p0` and `p1` for the directrix at `l`, where `p0` is
/// the arc below (smaller y) and `p1` the arc above on the beach line.
///
/// A focus lying on the directrix degenerates its parabola to a horizontal ray, so the breakpoint
/// is taken at its height.
pub fn breakpoint(p0: Point, p1: Point, l: f64) -> Result<Point, VoronoiError> {
    let mut focus = p0;

    let y = if p0.x == p1.x {
        (p0.y + p1.y) / 2.0
    } else if p1.x == l {
        p1.y
    } else if p0.x == l {
        focus = p1;
        p0.y
    } else {
        // Equate both parabolas as functions of y and solve the quadratic.
        let z0 = 2.0 * (p0.x - l);
        let z1 = 2.0 * (p1.x - l);

        let a = 1.0 / z0 - 1.0 / z1;
        let b = -2.0 * (p0.y / z0 - p1.y / z1);
        let c = (p0.y * p0.y + p0.x * p0.x - l * l) / z0 - (p1.y * p1.y + p1.x * p1.x - l * l) / z1;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Err(VoronoiError::InvariantViolation(
                "parabolas without a breakpoint",
            ));
        }

        (-b - discriminant.sqrt()) / (2.0 * a)
    };

    Ok(Point::new(parabola_x(focus, y, l), y))
}

/// Check if a site `p` falls under the arc of `site`, whose neighbors on the beach line are
/// `below` and `above`, with the directrix at `p.x`.
///
/// Returns the point of the arc directly left of `p`, where the arc is split and where the new
/// edges start. A breakpoint lying exactly at `p.y` counts as a hit for both arcs around it.
pub fn arc_intersects(
    p: Point,
    below: Option<Point>,
    site: Point,
    above: Option<Point>,
) -> Result<Option<Point>, VoronoiError> {
    // an arc whose site is on the directrix is a ray, never hit from the side.
    if site.x == p.x {
        return Ok(None);
    }

    if let Some(below) = below {
        if breakpoint(below, site, p.x)?.y > p.y {
            return Ok(None);
        }
    }
    if let Some(above) = above {
        if p.y > breakpoint(site, above, p.x)?.y {
            return Ok(None);
        }
    }

    Ok(Some(Point::new(parabola_x(site, p.y, p.x), p.y)))
}

/// Check if the arcs of `a`, `b` and `c` (in beach line order) converge, making the arc of `b`
/// vanish.
///
/// Returns the sweep position of the event (the rightmost point of the circle through the three
/// sites) and the center of that circle. Returns `None` if the breakpoints diverge or the three
/// sites are collinear.
pub fn circle_event_center(a: Point, b: Point, c: Point) -> Option<(f64, Point)> {
    // `b` must be a right turn from `a` to `c`.
    if (b - a).perp_dot(c - a) > 0.0 {
        return None;
    }

    // Computational Geometry in C (2nd ed.), O'Rourke, p. 189.
    let ab = b - a;
    let ac = c - a;
    let e = ab.x * (a.x + b.x) + ab.y * (a.y + b.y);
    let f = ac.x * (a.x + c.x) + ac.y * (a.y + c.y);
    let g = 2.0 * (ab.x * (c.y - b.y) - ab.y * (c.x - b.x));

    if g == 0.0 {
        return None;
    }

    let center = Point::new((ac.y * e - ab.y * f) / g, (ab.x * f - ac.x * e) / g);
    let x = center.x + center.dist(a);

    Some((x, center))
}
