// voronoi/sweep/src/clip.rs
//
// Copyright © 2019 The Voronoi Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Trims the finished diagram to a bounding box.

use euclid::default::Box2D;
use voronoi_geometry::segment::{box_contains, box_exit};

use crate::dcel::{Dcel, UNSET};

/// Pulls every half-edge origin lying outside `bounds` back onto the box.
///
/// An outside origin whose twin's origin is inside moves to the point
/// where the edge crosses the boundary, recorded as a fresh vertex. An
/// outside origin whose twin's origin is also outside (or unset) belongs
/// to a fully unbounded ray or line, which is omitted: the origin goes
/// unset. Either way the abandoned vertex is marked by unsetting its
/// incident edge; consumers skip vertices and half-edges whose records
/// are unset.
pub fn clip_to_box(dcel: &mut Dcel, bounds: &Box2D<f64>) {
    for edge in 0..dcel.half_edges.len() {
        let origin = dcel.half_edges[edge].origin;
        if origin == UNSET {
            continue;
        }
        let position = dcel.vertices[origin as usize].position;
        if box_contains(bounds, &position) {
            continue;
        }

        let twin = dcel.half_edges[edge].twin;
        let twin_origin = dcel.half_edges[twin as usize].origin;
        let mut replacement = UNSET;
        if twin_origin != UNSET {
            let twin_position = dcel.vertices[twin_origin as usize].position;
            if box_contains(bounds, &twin_position) {
                let exit = box_exit(&twin_position, &position, bounds);
                replacement = dcel.add_vertex(exit, edge as u32);
                debug!("edge {} clipped to {:?}", edge, exit);
            }
        }
        if replacement == UNSET {
            debug!("edge {} lies outside the box; dropped", edge);
        }

        dcel.vertices[origin as usize].incident_edge = UNSET;
        dcel.half_edges[edge].origin = replacement;
    }
}
