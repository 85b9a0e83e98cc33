// voronoi/sweep/src/builder.rs
//
// Copyright © 2019 The Voronoi Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The sweep driver: pops events, mutates the beachline, grows the DCEL.

use euclid::default::{Box2D, Point2D};
use voronoi_geometry::{circle, POINT_EPSILON};

use crate::beachline::{Beachline, NO_NODE};
use crate::clip;
use crate::dcel::Dcel;
use crate::event::{Event, EventQueue, NO_EVENT};

#[derive(Clone, Copy, Debug)]
pub struct BuildOptions {
    /// Clip box for the finished diagram. When absent, unbounded edges
    /// keep an unset origin instead of being trimmed.
    pub bounds: Option<Box2D<f64>>,
    /// How far apart (in x) a squeezed arc's two flanking breakpoints may
    /// be at the event's sweep position before the event is discarded as
    /// numerically stale. The default of 1.0 is generous on purpose:
    /// genuinely diverging breakpoints are far apart by the time a stale
    /// event surfaces, while converged ones agree to within rounding.
    pub mismatch_tolerance: f64,
}

impl Default for BuildOptions {
    fn default() -> BuildOptions {
        BuildOptions { bounds: None, mismatch_tolerance: 1.0 }
    }
}

/// Computes the Voronoi diagram of `sites` in one call.
pub fn build_diagram(sites: Vec<Point2D<f64>>, options: &BuildOptions) -> Dcel {
    DiagramBuilder::new(sites, *options).build()
}

/// Step-at-a-time sweep state, for callers that want to drive or inspect
/// the sweep themselves; [`build_diagram`] is the everyday entry point.
pub struct DiagramBuilder {
    sites: Vec<Point2D<f64>>,
    options: BuildOptions,
    queue: EventQueue,
    beachline: Beachline,
    dcel: Dcel,
    sweep: f64,
}

impl DiagramBuilder {
    pub fn new(sites: Vec<Point2D<f64>>, options: BuildOptions) -> DiagramBuilder {
        let mut queue = EventQueue::new();
        for (site, point) in sites.iter().enumerate() {
            queue.push_site(site as u32, *point);
        }
        DiagramBuilder {
            sites,
            options,
            queue,
            beachline: Beachline::new(),
            dcel: Dcel::new(),
            sweep: f64::INFINITY,
        }
    }

    #[inline]
    pub fn sites(&self) -> &[Point2D<f64>] {
        &self.sites
    }

    #[inline]
    pub fn dcel(&self) -> &Dcel {
        &self.dcel
    }

    #[inline]
    pub fn beachline(&self) -> &Beachline {
        &self.beachline
    }

    /// Runs the sweep to completion and returns the finished diagram.
    pub fn build(mut self) -> Dcel {
        while self.process_next_event() {}
        self.finish();
        self.dcel
    }

    /// Processes one event; returns `false` once the queue is empty.
    pub fn process_next_event(&mut self) -> bool {
        let event = match self.queue.pop() {
            Some(event) => event,
            None => return false,
        };
        match event {
            Event::Site { site, point } => {
                debug!("site event: site {} at {:?}", site, point);
                self.sweep = point.y;
                let (arc, evicted) =
                    self.beachline.insert(site, self.sweep, &self.sites, &mut self.dcel);
                if evicted != NO_EVENT {
                    self.queue.invalidate(evicted);
                }
                let prev = self.beachline.leaf(arc).prev;
                let next = self.beachline.leaf(arc).next;
                if prev != NO_NODE {
                    self.check_circle(prev);
                }
                // A sandwich split leaves the new arc between two copies
                // of one site, which the circumcenter predicate rejects;
                // a same-height append gives it a real triple to check.
                self.check_circle(arc);
                if next != NO_NODE {
                    self.check_circle(next);
                }
            }
            Event::Circle { id, point, center, arc } => {
                if self.queue.is_invalidated(id) {
                    debug!("circle event {}: false alarm", id);
                    return true;
                }
                debug!("circle event {}: arc {} vanishes at {:?}", id, arc, point);
                self.sweep = point.y;
                let own = self.beachline.take_pending(arc);
                debug_assert_eq!(own, id);
                let removed = self.beachline.remove(arc,
                                                    center,
                                                    self.sweep,
                                                    self.options.mismatch_tolerance,
                                                    &self.sites,
                                                    &mut self.dcel);
                if let Some(prev) = removed {
                    let next = self.beachline.leaf(prev).next;
                    self.evict_pending(prev);
                    self.evict_pending(next);
                    self.check_circle(prev);
                    self.check_circle(next);
                }
            }
        }
        true
    }

    /// The removed arc's neighbors gained a new neighbor themselves, so
    /// any circle event predicted for their old triple no longer applies.
    fn evict_pending(&mut self, arc: u32) {
        let pending = self.beachline.take_pending(arc);
        if pending != NO_EVENT {
            self.queue.invalidate(pending);
        }
    }

    /// Predicts whether the triple centered on `arc` converges, and if so
    /// queues the circle event at which the arc vanishes.
    fn check_circle(&mut self, arc: u32) {
        let leaf = *self.beachline.leaf(arc);
        if leaf.prev == NO_NODE || leaf.next == NO_NODE {
            return;
        }
        let a = self.sites[self.beachline.leaf(leaf.prev).site as usize];
        let b = self.sites[leaf.site as usize];
        let c = self.sites[self.beachline.leaf(leaf.next).site as usize];
        let center = match circle::circumcenter(&a, &b, &c) {
            Some(center) => center,
            None => return,
        };
        let radius = (a - center).length();
        let vanish = Point2D::new(center.x, center.y - radius);
        // Only strictly below the sweep: a vanishing point at the sweep
        // itself is the event being processed right now, not a new one.
        if vanish.y >= self.sweep - POINT_EPSILON {
            return;
        }
        let id = self.queue.push_circle(vanish, center, arc);
        self.beachline.set_pending(arc, id);
        debug!("circle event {} queued: arc {} vanishes at {:?}", id, arc, vanish);
    }

    /// The queue has drained; breakpoints still on the beachline are the
    /// diagram's unbounded edges. With a clip box configured, give each
    /// one a concrete far endpoint (its position at a sweep far below
    /// everything) so the clip pass can trim all edges uniformly.
    fn finish(&mut self) {
        let bounds = match self.options.bounds {
            Some(bounds) => bounds,
            None => return,
        };

        let mut min = bounds.min.min(bounds.max);
        let mut max = bounds.max.max(bounds.min);
        for site in &self.sites {
            min = min.min(*site);
            max = max.max(*site);
        }
        let span = (max.x - min.x).max(max.y - min.y);
        let far_sweep = min.y - 4.0 * span - 16.0;

        let breakpoints: Vec<u32> = self.beachline.breakpoints().collect();
        for breakpoint in breakpoints {
            let position = self.beachline.breakpoint_position(breakpoint, far_sweep, &self.sites);
            let edge = self.beachline.internal(breakpoint).edge;
            let vertex = self.dcel.add_vertex(position, edge);
            self.dcel.half_edges[edge as usize].origin = vertex;
            debug!("unbounded edge {} pinned at far point {:?}", edge, position);
        }

        clip::clip_to_box(&mut self.dcel, &bounds);
    }
}
