// voronoi/sweep/src/event.rs
//
// Copyright © 2019 The Voronoi Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The sweep's event queue.
//!
//! Events are plain values moved through a binary heap. Circle events can
//! be invalidated after they are queued (a *false alarm*); invalidation is
//! lazy: the id is flagged in a bit vector and the event is discarded
//! when it surfaces, never dug out of the heap.

use bit_vec::BitVec;
use euclid::default::Point2D;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use voronoi_geometry::POINT_EPSILON;

/// Sentinel for "no pending circle event".
pub const NO_EVENT: u32 = u32::MAX;

#[derive(Clone, Copy, Debug)]
pub enum Event {
    /// The sweep reaches a new input site.
    Site { site: u32, point: Point2D<f64> },
    /// Three consecutive arcs are predicted to squeeze the middle one out
    /// at `point`, the lowest point of their sites' circumscribed circle.
    Circle { id: u32, point: Point2D<f64>, center: Point2D<f64>, arc: u32 },
}

impl Event {
    #[inline]
    pub fn point(&self) -> Point2D<f64> {
        match *self {
            Event::Site { point, .. } | Event::Circle { point, .. } => point,
        }
    }
}

struct HeapEntry(Event);

impl PartialEq for HeapEntry {
    fn eq(&self, other: &HeapEntry) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &HeapEntry) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &HeapEntry) -> Ordering {
        // Top-to-bottom sweep: larger y pops first. Heights within the tie
        // tolerance compare equal and fall back to smaller x first, so
        // duplicate heights still process deterministically left to right.
        let (a, b) = (self.0.point(), other.0.point());
        if (a.y - b.y).abs() < POINT_EPSILON {
            b.x.partial_cmp(&a.x).unwrap_or(Ordering::Equal)
        } else {
            a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal)
        }
    }
}

pub struct EventQueue {
    heap: BinaryHeap<HeapEntry>,
    invalidated: BitVec,
    next_circle_id: u32,
}

impl EventQueue {
    #[inline]
    pub fn new() -> EventQueue {
        EventQueue { heap: BinaryHeap::new(), invalidated: BitVec::new(), next_circle_id: 0 }
    }

    #[inline]
    pub fn push_site(&mut self, site: u32, point: Point2D<f64>) {
        self.heap.push(HeapEntry(Event::Site { site, point }));
    }

    /// Queues a circle event and returns its freshly allocated id.
    pub fn push_circle(&mut self, point: Point2D<f64>, center: Point2D<f64>, arc: u32) -> u32 {
        let id = self.next_circle_id;
        self.next_circle_id += 1;
        self.invalidated.push(false);
        self.heap.push(HeapEntry(Event::Circle { id, point, center, arc }));
        id
    }

    /// Marks a queued circle event as a false alarm.
    #[inline]
    pub fn invalidate(&mut self, id: u32) {
        self.invalidated.set(id as usize, true);
    }

    #[inline]
    pub fn is_invalidated(&self, id: u32) -> bool {
        self.invalidated[id as usize]
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|entry| entry.0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod test {
    use euclid::default::Point2D;

    use super::{Event, EventQueue};

    fn popped_sites(queue: &mut EventQueue) -> Vec<u32> {
        let mut sites = vec![];
        while let Some(event) = queue.pop() {
            match event {
                Event::Site { site, .. } => sites.push(site),
                Event::Circle { .. } => panic!("unexpected circle event"),
            }
        }
        sites
    }

    #[test]
    fn test_events_pop_top_to_bottom() {
        let mut queue = EventQueue::new();
        queue.push_site(0, Point2D::new(0.0, 1.0));
        queue.push_site(1, Point2D::new(0.0, 5.0));
        queue.push_site(2, Point2D::new(0.0, 3.0));
        assert_eq!(popped_sites(&mut queue), vec![1, 2, 0]);
    }

    #[test]
    fn test_height_ties_pop_left_to_right() {
        let mut queue = EventQueue::new();
        queue.push_site(0, Point2D::new(4.0, 2.0));
        queue.push_site(1, Point2D::new(-1.0, 2.0));
        queue.push_site(2, Point2D::new(2.0, 2.0 + 1.0e-8));
        assert_eq!(popped_sites(&mut queue), vec![1, 2, 0]);
    }

    #[test]
    fn test_coincident_points_still_order_deterministically() {
        let mut queue = EventQueue::new();
        queue.push_site(0, Point2D::new(1.0, 1.0));
        queue.push_site(1, Point2D::new(1.0, 1.0));
        assert_eq!(popped_sites(&mut queue).len(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_invalidation_is_sticky() {
        let mut queue = EventQueue::new();
        let id = queue.push_circle(Point2D::new(0.0, -1.0), Point2D::new(0.0, 1.0), 7);
        assert!(!queue.is_invalidated(id));
        queue.invalidate(id);
        assert!(queue.is_invalidated(id));
        match queue.pop() {
            Some(Event::Circle { id: popped, arc, .. }) => {
                assert_eq!(popped, id);
                assert_eq!(arc, 7);
            }
            other => panic!("expected the circle event, got {:?}", other.map(|e| e.point())),
        }
    }
}
