use crate::beachline::{BeachLine, Insertion, Removal};
use crate::diagram::Diagram;
use crate::geometry::BoundingBox;
use crate::schedule::{EventKind, Schedule};
use crate::{Point, VoronoiError};

/// A finished edge piece, as `(x0, y0, x1, y1)`.
pub type LineSegment = (f64, f64, f64, f64);

/// An event processed by the sweep, as reported to the progress callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// The sweep line reached `site`.
    Site { site: Point, insertion: Insertion },
    /// An arc vanished at `center` when the sweep line reached `key`.
    Circle {
        key: f64,
        center: Point,
        removal: Removal,
    },
}

/// Compute the edges of the Voronoi diagram of `sites`.
///
/// Every edge comes out as one or more finite segments; edges that extend to infinity are cut
/// well outside the bounding box of the sites. The order of the segments is the order in which
/// the sweep created them. Fewer than two sites have no edges.
///
/// Duplicated sites are not removed, and may produce zero-length segments.
pub fn fortune_algorithm(sites: &[Point]) -> Result<Vec<LineSegment>, VoronoiError> {
    fortune_algorithm_with(sites, &mut |_, _| {})
}

/// Same as [`fortune_algorithm`], calling `on_progress` after every processed event with the
/// beach line as the event left it.
///
/// Site events are processed in order of x, and in input order for sites with equal x. A circle
/// event is processed before a site event at the same x.
pub fn fortune_algorithm_with(
    sites: &[Point],
    on_progress: &mut impl FnMut(&BeachLine, &Step),
) -> Result<Vec<LineSegment>, VoronoiError> {
    if sites.len() < 2 {
        return Ok(Vec::new());
    }
    let Some(bounds) = BoundingBox::from_points(sites) else {
        return Ok(Vec::new());
    };

    let mut sweep = Sweep::new(bounds);
    for &site in sites {
        sweep.schedule.push_site(site);
    }
    sweep.run(on_progress)?;

    log::debug!(
        "swept {} sites: {} circle events, {} stale events skipped, {} segments",
        sites.len(),
        sweep.circle_events,
        sweep.schedule.stale_events(),
        sweep.diagram.len()
    );

    Ok(sweep.diagram.into_lines())
}

struct Sweep {
    bounds: BoundingBox,
    schedule: Schedule,
    beachline: BeachLine,
    diagram: Diagram,
    /// Key of the last processed event.
    sweep_x: f64,
    circle_events: usize,
}
impl Sweep {
    fn new(bounds: BoundingBox) -> Self {
        Self {
            bounds,
            schedule: Schedule::new(),
            beachline: BeachLine::new(bounds.min_x),
            diagram: Diagram::new(),
            sweep_x: bounds.min_x,
            circle_events: 0,
        }
    }

    fn run(&mut self, on_progress: &mut impl FnMut(&BeachLine, &Step)) -> Result<(), VoronoiError> {
        while let Some(site_x) = self.schedule.peek_site().map(|e| e.key) {
            let step = match self.schedule.peek_circle().map(|e| e.key) {
                Some(circle_x) if circle_x <= site_x => self.process_circle()?,
                _ => self.process_site()?,
            };
            on_progress(&self.beachline, &step);
        }

        while self.schedule.peek_circle().is_some() {
            let step = self.process_circle()?;
            on_progress(&self.beachline, &step);
        }

        self.beachline
            .finalize(self.bounds.closing_x(self.sweep_x), &mut self.diagram)
    }

    fn process_site(&mut self) -> Result<Step, VoronoiError> {
        let site = self.schedule.pop_site()?;
        self.sweep_x = site.x;
        debugln!("site event {:?}", site);
        let insertion = self
            .beachline
            .insert_site(site, &mut self.schedule, &mut self.diagram)?;
        Ok(Step::Site { site, insertion })
    }

    fn process_circle(&mut self) -> Result<Step, VoronoiError> {
        let id = self.schedule.pop_circle()?;
        let event = *self.schedule.event(id);
        let EventKind::Circle { center, arc } = event.kind else {
            return Err(VoronoiError::InvariantViolation(
                "site event in the circle queue",
            ));
        };
        debugln!("circle event {:?} at {} for {:?}", id, event.key, arc);
        self.sweep_x = event.key;

        let removal = self
            .beachline
            .remove_arc(arc, center, &mut self.schedule, &mut self.diagram)?;
        self.circle_events += 1;

        Ok(Step::Circle {
            key: event.key,
            center,
            removal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_circle_events_are_counted() {
        let sites = [(4, 5), (0, 7), (3, 0), (2, 1), (5, 7)].map(Point::from);
        let bounds = BoundingBox::from_points(&sites).unwrap();

        let mut sweep = Sweep::new(bounds);
        for &site in &sites {
            sweep.schedule.push_site(site);
        }
        let mut circles = 0;
        sweep
            .run(&mut |_, step| {
                if let Step::Circle { .. } = step {
                    circles += 1;
                }
            })
            .unwrap();

        // an arc of (2, 1) loses its pending event at x ~ 17 when its neighbors change.
        assert_eq!(sweep.schedule.stale_events(), 1);
        assert_eq!(sweep.circle_events, circles);
        assert!(!sweep.schedule.has_circles());
    }
}
