//! The event schedule: pending site and circle events, ordered by sweep position.
//!
//! Circle events are never removed from their queue when the beach line makes them obsolete.
//! Instead the event is flagged invalid, and the queue drops invalid entries as they reach the
//! top.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::heap::Heap;
use crate::index::{ArcId, EventId, EventVec};
use crate::{Point, VoronoiError};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EventKind {
    /// The sweep line reaches a site.
    Site(Point),
    /// The arc `arc` shrinks to a point at `center`, a vertex of the diagram.
    Circle { center: Point, arc: ArcId },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Event {
    /// The sweep position at which the event happens.
    pub key: f64,
    pub kind: EventKind,
    /// Cleared when the beach line configuration that produced the event is gone.
    pub valid: bool,
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    key: f64,
    /// Insertion order, to break ties between equal keys.
    seq: u64,
    id: EventId,
}
impl Entry {
    fn order(a: &Entry, b: &Entry) -> Ordering {
        a.key.total_cmp(&b.key).then(a.seq.cmp(&b.seq))
    }
}

/// A min-queue of events by key. It only stores handles; validity is read from the event arena
/// passed to each call.
pub struct EventQueue {
    heap: Heap<Entry, fn(&Entry, &Entry) -> Ordering>,
    /// The events currently in the heap. Keyed by handle, so two distinct events with equal
    /// contents are both scheduled.
    scheduled: HashSet<EventId>,
    next_seq: u64,
    /// Number of invalid entries dropped so far.
    discarded: usize,
}
impl EventQueue {
    pub fn new() -> Self {
        Self {
            heap: Heap::new(Entry::order as fn(&Entry, &Entry) -> Ordering),
            scheduled: HashSet::new(),
            next_seq: 0,
            discarded: 0,
        }
    }

    /// Schedule the event `id`. Does nothing if it is already scheduled.
    pub fn push(&mut self, id: EventId, events: &EventVec<Event>) {
        if !self.scheduled.insert(id) {
            return;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            key: events[id].key,
            seq,
            id,
        });
    }

    /// Remove and return the valid event with the lowest key.
    pub fn pop_min(&mut self, events: &EventVec<Event>) -> Result<EventId, VoronoiError> {
        self.discard_invalid(events);
        let entry = self.heap.pop().ok_or(VoronoiError::EmptyQueue)?;
        self.scheduled.remove(&entry.id);
        Ok(entry.id)
    }

    /// Return the valid event with the lowest key, dropping any invalid event ahead of it.
    pub fn peek_min(&mut self, events: &EventVec<Event>) -> Option<EventId> {
        self.discard_invalid(events);
        self.heap.peek().map(|entry| entry.id)
    }

    /// Check if the queue holds no valid event.
    pub fn is_empty(&self, events: &EventVec<Event>) -> bool {
        self.heap.as_slice().iter().all(|entry| !events[entry.id].valid)
    }

    /// Number of entries, including invalid ones not yet dropped.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Number of invalid entries dropped since the queue was created.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    fn discard_invalid(&mut self, events: &EventVec<Event>) {
        while let Some(&entry) = self.heap.peek() {
            if events[entry.id].valid {
                break;
            }
            debugln!("dropping stale {:?} at {}", entry.id, entry.key);
            self.heap.pop();
            self.scheduled.remove(&entry.id);
            self.discarded += 1;
        }
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.heap.as_slice().iter().map(|e| (e.id, e.key)))
            .finish()
    }
}

/// The event arena together with the site queue and the circle queue.
#[derive(Debug, Default)]
pub struct Schedule {
    events: EventVec<Event>,
    sites: EventQueue,
    circles: EventQueue,
}
impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event(&self, id: EventId) -> &Event {
        &self.events[id]
    }

    /// Schedule the site event for `site`, keyed by its x coordinate.
    pub fn push_site(&mut self, site: Point) -> EventId {
        let id = self.events.push(Event {
            key: site.x,
            kind: EventKind::Site(site),
            valid: true,
        });
        self.sites.push(id, &self.events);
        id
    }

    /// Schedule a circle event for `arc`, happening when the sweep reaches `key`.
    pub fn push_circle(&mut self, key: f64, center: Point, arc: ArcId) -> EventId {
        let id = self.events.push(Event {
            key,
            kind: EventKind::Circle { center, arc },
            valid: true,
        });
        self.circles.push(id, &self.events);
        id
    }

    /// Mark an event as stale. The queue will skip it.
    pub fn invalidate(&mut self, id: EventId) {
        self.events[id].valid = false;
    }

    pub fn peek_site(&mut self) -> Option<&Event> {
        let id = self.sites.peek_min(&self.events)?;
        Some(&self.events[id])
    }

    pub fn peek_circle(&mut self) -> Option<&Event> {
        let id = self.circles.peek_min(&self.events)?;
        Some(&self.events[id])
    }

    pub fn pop_site(&mut self) -> Result<Point, VoronoiError> {
        let id = self.sites.pop_min(&self.events)?;
        match self.events[id].kind {
            EventKind::Site(site) => Ok(site),
            EventKind::Circle { .. } => Err(VoronoiError::InvariantViolation(
                "circle event in the site queue",
            )),
        }
    }

    pub fn pop_circle(&mut self) -> Result<EventId, VoronoiError> {
        self.circles.pop_min(&self.events)
    }

    pub fn has_sites(&self) -> bool {
        !self.sites.is_empty(&self.events)
    }

    pub fn has_circles(&self) -> bool {
        !self.circles.is_empty(&self.events)
    }

    /// Number of invalidated events skipped by either queue.
    pub fn stale_events(&self) -> usize {
        self.sites.discarded() + self.circles.discarded()
    }
}
