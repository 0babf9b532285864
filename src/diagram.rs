//! The segments traced by the breakpoints of the beach line, and their flattening into the
//! output.

use crate::index::{SegmentId, SegmentVec};
use crate::{LineSegment, Point};

/// A Voronoi edge under construction. It starts where a breakpoint is born and ends where the
/// breakpoint vanishes, or where the sweep is closed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Option<Point>,
}
impl Segment {
    pub fn new(start: Point) -> Self {
        Self { start, end: None }
    }

    pub fn is_finished(&self) -> bool {
        self.end.is_some()
    }

    /// Set the end point. Only the first call has an effect; returns whether it was that call.
    pub fn finish(&mut self, end: Point) -> bool {
        if self.end.is_some() {
            return false;
        }
        self.end = Some(end);
        true
    }

    /// The segment as `(x0, y0, x1, y1)`, if finished.
    pub fn to_line(&self) -> Option<LineSegment> {
        let end = self.end?;
        Some((self.start.x, self.start.y, end.x, end.y))
    }
}

/// All segments created during a sweep, in creation order.
#[derive(Clone, Debug, Default)]
pub struct Diagram {
    segments: SegmentVec<Segment>,
}
impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new segment at `start`.
    pub fn start(&mut self, start: Point) -> SegmentId {
        self.segments.push(Segment::new(start))
    }

    /// Move the start of a segment that has not been finished yet.
    pub fn restart(&mut self, id: SegmentId, start: Point) {
        debug_assert!(!self.segments[id].is_finished());
        self.segments[id].start = start;
        debugln!("{:?} restarted at {:?}", id, start);
    }

    pub fn finish(&mut self, id: SegmentId, end: Point) {
        if self.segments[id].finish(end) {
            debugln!("{:?} finished at {:?}", id, end);
        }
    }

    pub fn get(&self, id: SegmentId) -> &Segment {
        &self.segments[id]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, &Segment)> + '_ {
        self.segments.iter()
    }

    /// Flatten the finished segments, in creation order. Unfinished ones are left out.
    pub fn into_lines(self) -> Vec<LineSegment> {
        let lines: Vec<_> = self.segments.values().filter_map(Segment::to_line).collect();
        if lines.len() != self.segments.len() {
            log::debug!(
                "dropped {} unfinished segments",
                self.segments.len() - lines.len()
            );
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_only_once() {
        let mut segment = Segment::new(Point::new(0.0, 0.0));
        assert!(!segment.is_finished());
        assert_eq!(segment.to_line(), None);

        assert!(segment.finish(Point::new(1.0, 2.0)));
        assert!(!segment.finish(Point::new(5.0, 5.0)));

        assert!(segment.is_finished());
        assert_eq!(segment.end, Some(Point::new(1.0, 2.0)));
        assert_eq!(segment.to_line(), Some((0.0, 0.0, 1.0, 2.0)));
    }

    #[test]
    fn unfinished_segments_are_dropped() {
        let mut diagram = Diagram::new();
        let a = diagram.start(Point::new(0.0, 0.0));
        let _b = diagram.start(Point::new(1.0, 1.0));
        let c = diagram.start(Point::new(2.0, 2.0));

        diagram.restart(c, Point::new(2.5, 2.0));
        diagram.finish(c, Point::new(3.0, 3.0));
        diagram.finish(a, Point::new(-1.0, 0.0));
        diagram.finish(a, Point::new(-9.0, 0.0));

        assert_eq!(diagram.len(), 3);
        assert_eq!(
            diagram.into_lines(),
            [(0.0, 0.0, -1.0, 0.0), (2.5, 2.0, 3.0, 3.0)]
        );
    }
}
