//! The beach line: the sequence of parabolic arcs seen from the sweep line, ordered by
//! increasing y of their breakpoints.
//!
//! Arcs live in an arena and are chained through `prev`/`next` handles. An arc that vanishes is
//! unlinked but stays in the arena, so stale circle events can still name it.

use crate::diagram::Diagram;
use crate::geometry::{arc_intersects, breakpoint, circle_event_center};
use crate::index::{ArcId, ArcVec, EventId, SegmentId};
use crate::schedule::Schedule;
use crate::{Point, VoronoiError};

#[derive(Clone, Copy, Debug)]
pub struct Arc {
    pub site: Point,
    pub prev: Option<ArcId>,
    pub next: Option<ArcId>,
    /// The pending circle event that would make this arc vanish.
    pub circle_event: Option<EventId>,
    /// The segment traced by the breakpoint with `prev`.
    pub left_edge: Option<SegmentId>,
    /// The segment traced by the breakpoint with `next`.
    pub right_edge: Option<SegmentId>,
}
impl Arc {
    fn new(site: Point) -> Self {
        Self {
            site,
            prev: None,
            next: None,
            circle_event: None,
            left_edge: None,
            right_edge: None,
        }
    }
}

/// What a site insertion did to the beach line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Insertion {
    /// The beach line was empty.
    First { arc: ArcId },
    /// `split` was cut in two at `at`, with `arc` in between. `clone` is the right half of
    /// `split`. `edges` are the left and right segments of `arc`, both starting at `at`.
    Split {
        split: ArcId,
        arc: ArcId,
        clone: ArcId,
        at: Point,
        edges: [SegmentId; 2],
    },
    /// No arc lies under the site, since every arc so far belongs to a site on the first sweep
    /// position. `arc` was linked between `below` and `above`, by y. `edges` are its lower and
    /// upper segments, starting at the left wall.
    Column {
        below: Option<ArcId>,
        arc: ArcId,
        above: Option<ArcId>,
        edges: [Option<SegmentId>; 2],
    },
}

/// What a circle event did to the beach line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Removal {
    pub arc: ArcId,
    pub prev: ArcId,
    pub next: ArcId,
    /// The segment now traced between `prev` and `next`, starting at the vertex.
    pub edge: SegmentId,
    /// The left and right segments of the removed arc, which end at the vertex.
    pub finished: [Option<SegmentId>; 2],
}

#[derive(Clone, Debug)]
pub struct BeachLine {
    arcs: ArcVec<Arc>,
    head: Option<ArcId>,
    /// The left wall of the bounding box. Circle events are only scheduled past it.
    left_wall: f64,
}
impl BeachLine {
    pub fn new(left_wall: f64) -> Self {
        Self {
            arcs: ArcVec::new(),
            head: None,
            left_wall,
        }
    }

    pub fn arc(&self, arc: ArcId) -> &Arc {
        &self.arcs[arc]
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterate the arcs on the beach line, from the lowest to the highest.
    pub fn arcs(&self) -> impl Iterator<Item = ArcId> + '_ {
        std::iter::successors(self.head, |&arc| self.arcs[arc].next)
    }

    /// Iterate the site of each arc on the beach line, from the lowest to the highest. A site
    /// appears once per arc it owns.
    pub fn sites(&self) -> impl Iterator<Item = Point> + '_ {
        self.arcs().map(|arc| self.arcs[arc].site)
    }

    /// Insert the arc of a new site `p`, with the sweep line at `p.x`.
    pub fn insert_site(
        &mut self,
        p: Point,
        schedule: &mut Schedule,
        diagram: &mut Diagram,
    ) -> Result<Insertion, VoronoiError> {
        let Some(head) = self.head else {
            let arc = self.arcs.push(Arc::new(p));
            self.head = Some(arc);
            debugln!("first arc {:?} for {:?}", arc, p);
            return Ok(Insertion::First { arc });
        };

        let mut cursor = Some(head);
        while let Some(i) = cursor {
            if let Some(at) = self.intersects(p, i)? {
                return Ok(self.split(i, p, at, schedule, diagram));
            }
            cursor = self.arcs[i].next;
        }

        Ok(self.insert_in_column(p, head, schedule, diagram))
    }

    /// Link the arc of `p` among arcs whose sites all share `p.x`. Those arcs are horizontal rays,
    /// so they are ordered by y alone.
    fn insert_in_column(
        &mut self,
        p: Point,
        head: ArcId,
        schedule: &mut Schedule,
        diagram: &mut Diagram,
    ) -> Insertion {
        let mut below = None;
        let mut above = Some(head);
        while let Some(a) = above {
            if self.arcs[a].site.y > p.y {
                break;
            }
            below = Some(a);
            above = self.arcs[a].next;
        }

        let arc = self.arcs.push(Arc {
            prev: below,
            next: above,
            ..Arc::new(p)
        });
        match below {
            Some(b) => self.arcs[b].next = Some(arc),
            None => self.head = Some(arc),
        }
        if let Some(a) = above {
            self.arcs[a].prev = Some(arc);
        }

        let lower = below.map(|b| {
            let start = Point::new(self.left_wall, (self.arcs[b].site.y + p.y) / 2.0);
            // the edge `below` shared with `above` now separates it from `p`.
            let edge = match self.arcs[b].right_edge {
                Some(edge) => {
                    diagram.restart(edge, start);
                    edge
                }
                None => diagram.start(start),
            };
            self.arcs[b].right_edge = Some(edge);
            self.arcs[arc].left_edge = Some(edge);
            edge
        });
        let upper = above.map(|a| {
            let start = Point::new(self.left_wall, (p.y + self.arcs[a].site.y) / 2.0);
            let edge = diagram.start(start);
            self.arcs[arc].right_edge = Some(edge);
            self.arcs[a].left_edge = Some(edge);
            edge
        });
        debugln!("{:?} for {:?} between {:?} and {:?}", arc, p, below, above);

        self.check_circle_event(arc, schedule);
        for neighbor in [below, above].into_iter().flatten() {
            self.check_circle_event(neighbor, schedule);
        }

        Insertion::Column {
            below,
            arc,
            above,
            edges: [lower, upper],
        }
    }

    /// Cut the arc `i` at `at`, placing the arc of `p` between its two halves.
    fn split(
        &mut self,
        i: ArcId,
        p: Point,
        at: Point,
        schedule: &mut Schedule,
        diagram: &mut Diagram,
    ) -> Insertion {
        let old = self.arcs[i];

        let clone = self.arcs.push(Arc {
            prev: None,
            circle_event: None,
            left_edge: None,
            ..old
        });
        if let Some(next) = old.next {
            self.arcs[next].prev = Some(clone);
        }

        let arc = self.arcs.push(Arc {
            prev: Some(i),
            next: Some(clone),
            ..Arc::new(p)
        });
        self.arcs[i].next = Some(arc);
        self.arcs[clone].prev = Some(arc);

        let left = diagram.start(at);
        let right = diagram.start(at);
        self.arcs[i].right_edge = Some(left);
        self.arcs[arc].left_edge = Some(left);
        self.arcs[arc].right_edge = Some(right);
        self.arcs[clone].left_edge = Some(right);

        debugln!("{:?} split at {:?} by {:?} for {:?}", i, at, arc, p);

        self.check_circle_event(arc, schedule);
        self.check_circle_event(i, schedule);
        self.check_circle_event(clone, schedule);

        Insertion::Split {
            split: i,
            arc,
            clone,
            at,
            edges: [left, right],
        }
    }

    /// Check if the new site `p` falls under `arc`, returning the split point.
    fn intersects(&self, p: Point, arc: ArcId) -> Result<Option<Point>, VoronoiError> {
        let Arc {
            site, prev, next, ..
        } = self.arcs[arc];
        arc_intersects(
            p,
            prev.map(|a| self.arcs[a].site),
            site,
            next.map(|a| self.arcs[a].site),
        )
    }

    /// Remove `arc`, which shrank to the point `vertex`. Its two edges end there, and a new one
    /// starts there between its former neighbors.
    pub fn remove_arc(
        &mut self,
        arc: ArcId,
        vertex: Point,
        schedule: &mut Schedule,
        diagram: &mut Diagram,
    ) -> Result<Removal, VoronoiError> {
        let Arc {
            prev,
            next,
            left_edge,
            right_edge,
            ..
        } = self.arcs[arc];
        let (Some(prev), Some(next)) = (prev, next) else {
            return Err(VoronoiError::InvariantViolation(
                "vanishing arc without two neighbors",
            ));
        };

        let edge = diagram.start(vertex);

        self.arcs[prev].next = Some(next);
        self.arcs[prev].right_edge = Some(edge);
        self.arcs[next].prev = Some(prev);
        self.arcs[next].left_edge = Some(edge);

        for segment in [left_edge, right_edge].into_iter().flatten() {
            diagram.finish(segment, vertex);
        }

        self.arcs[arc] = Arc::new(self.arcs[arc].site);
        debugln!("{:?} removed at {:?}, {:?} starts there", arc, vertex, edge);

        self.check_circle_event(prev, schedule);
        self.check_circle_event(next, schedule);

        Ok(Removal {
            arc,
            prev,
            next,
            edge,
            finished: [left_edge, right_edge],
        })
    }

    /// Replace the pending circle event of `arc` with the one its current neighbors produce, if
    /// any.
    fn check_circle_event(&mut self, arc: ArcId, schedule: &mut Schedule) {
        if let Some(event) = self.arcs[arc].circle_event.take() {
            // an event keyed exactly at the left wall is never withdrawn.
            if schedule.event(event).key != self.left_wall {
                debugln!("invalidating {:?} of {:?}", event, arc);
                schedule.invalidate(event);
            }
        }

        let Arc {
            site, prev, next, ..
        } = self.arcs[arc];
        let (Some(prev), Some(next)) = (prev, next) else {
            return;
        };

        let Some((x, center)) =
            circle_event_center(self.arcs[prev].site, site, self.arcs[next].site)
        else {
            return;
        };

        if x > self.left_wall {
            let event = schedule.push_circle(x, center, arc);
            self.arcs[arc].circle_event = Some(event);
            debugln!("{:?} of {:?} at x = {} center {:?}", event, arc, x, center);
        }
    }

    /// Close every edge still open by cutting it where its breakpoint is when the sweep line is
    /// at `far_x`.
    pub fn finalize(&self, far_x: f64, diagram: &mut Diagram) -> Result<(), VoronoiError> {
        for arc in self.arcs() {
            let Arc {
                site,
                next,
                right_edge,
                ..
            } = self.arcs[arc];
            let (Some(next), Some(edge)) = (next, right_edge) else {
                continue;
            };
            if diagram.get(edge).is_finished() {
                continue;
            }
            let end = breakpoint(site, self.arcs[next].site, far_x)?;
            diagram.finish(edge, end);
        }
        Ok(())
    }
}
