// voronoi/geometry/src/segment.rs
//
// Copyright © 2019 The Voronoi Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Segment/box crossings for the clip pass.

use euclid::default::{Box2D, Point2D};

/// Whether `point` lies in `bounds`, boundary included.
#[inline]
pub fn box_contains(bounds: &Box2D<f64>, point: &Point2D<f64>) -> bool {
    point.x >= bounds.min.x && point.x <= bounds.max.x &&
        point.y >= bounds.min.y && point.y <= bounds.max.y
}

/// The point where the segment `from` → `to` leaves `bounds`.
///
/// `from` must be inside the box and `to` outside it; the crossed side is
/// the one facing the segment's direction, with corner ties resolved by
/// whichever axis reaches its bound first.
pub fn box_exit(from: &Point2D<f64>, to: &Point2D<f64>, bounds: &Box2D<f64>) -> Point2D<f64> {
    debug_assert!(box_contains(bounds, from));
    debug_assert!(!box_contains(bounds, to));

    let direction = *to - *from;
    let mut t = f64::INFINITY;
    if direction.x > 0.0 {
        t = t.min((bounds.max.x - from.x) / direction.x);
    } else if direction.x < 0.0 {
        t = t.min((bounds.min.x - from.x) / direction.x);
    }
    if direction.y > 0.0 {
        t = t.min((bounds.max.y - from.y) / direction.y);
    } else if direction.y < 0.0 {
        t = t.min((bounds.min.y - from.y) / direction.y);
    }
    debug_assert!(t.is_finite());
    *from + direction * t
}

#[cfg(test)]
mod test {
    use euclid::default::{Box2D, Point2D};

    use super::{box_contains, box_exit};

    fn bounds() -> Box2D<f64> {
        Box2D::new(Point2D::new(-10.0, -10.0), Point2D::new(10.0, 10.0))
    }

    #[test]
    fn test_box_contains_includes_the_boundary() {
        assert!(box_contains(&bounds(), &Point2D::new(10.0, -10.0)));
        assert!(!box_contains(&bounds(), &Point2D::new(10.1, 0.0)));
    }

    #[test]
    fn test_axis_aligned_exit() {
        let exit = box_exit(&Point2D::new(0.0, 0.0), &Point2D::new(20.0, 0.0), &bounds());
        assert!((exit.x - 10.0).abs() < 1e-12);
        assert!(exit.y.abs() < 1e-12);
    }

    #[test]
    fn test_diagonal_exit_picks_the_nearer_side() {
        let exit = box_exit(&Point2D::new(0.0, 5.0), &Point2D::new(8.0, 25.0), &bounds());
        assert!((exit.y - 10.0).abs() < 1e-12);
        assert!((exit.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_corner_exit() {
        let exit = box_exit(&Point2D::new(0.0, 0.0), &Point2D::new(20.0, 20.0), &bounds());
        assert!((exit.x - 10.0).abs() < 1e-12);
        assert!((exit.y - 10.0).abs() < 1e-12);
    }
}
