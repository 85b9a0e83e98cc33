// voronoi/geometry/src/lib.rs
//
// Copyright © 2019 The Voronoi Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pure geometric predicates backing the Voronoi sweep: parabola
//! intersections, circumcenters, and segment/box crossings.
//!
//! Everything here is a stateless function of its arguments; the sweep
//! position in particular is always passed in explicitly as the directrix.

#[macro_use]
extern crate log;

pub mod circle;
pub mod parabola;
pub mod segment;

/// Coordinate tolerance below which two positions are considered equal.
pub const POINT_EPSILON: f64 = 1.0e-6;
