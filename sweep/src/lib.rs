// voronoi/sweep/src/lib.rs
//
// Copyright © 2019 The Voronoi Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Builds planar Voronoi diagrams with Fortune's sweep-line algorithm.
//!
//! The sweep advances top to bottom over a priority queue of *site* and
//! *circle* events. The *beachline*, the lower envelope of one parabolic
//! arc per visible site kept as a height-balanced binary tree, is updated
//! in place as events fire, while the diagram's half-edge topology (a
//! DCEL) grows append-only alongside it: a site event splits an arc and
//! opens a twin pair of half-edges, a circle event squeezes an arc out and
//! pins the surrounding half-edges to a new vertex. When the queue drains,
//! an optional post-pass trims the unbounded edges to a clip box.
//!
//! Input is a plain list of points; loading, rendering, and any
//! interactive surface are the caller's concern.

#[macro_use]
extern crate log;

pub mod beachline;
pub mod builder;
pub mod clip;
pub mod dcel;
pub mod event;

pub use crate::builder::{build_diagram, BuildOptions, DiagramBuilder};
pub use crate::dcel::{Dcel, HalfEdge, Vertex, UNSET};
