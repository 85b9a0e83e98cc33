// voronoi/geometry/src/parabola.rs
//
// Copyright © 2019 The Voronoi Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Intersection of two parabolas sharing a directrix.
//!
//! An arc of the beachline is the locus of points equidistant from a site
//! (the focus) and the sweep line (the directrix), so a breakpoint between
//! two arcs is an intersection of two such parabolas.

use arrayvec::ArrayVec;
use euclid::default::Point2D;

use crate::POINT_EPSILON;

/// The y-coordinate of the parabola with the given focus and directrix at
/// the given x.
#[inline]
pub fn solve_y_for_x(focus: &Point2D<f64>, directrix: f64, x: f64) -> f64 {
    let dx = x - focus.x;
    (dx * dx / (focus.y - directrix) + focus.y + directrix) * 0.5
}

/// Intersection points of the parabolas with foci `p1` and `p2` and the
/// common directrix `directrix`, sorted by x.
///
/// A focus lying on the directrix degenerates its parabola into the
/// vertical ray at the focus' x, which happens whenever several sites
/// share the current sweep y; those cases yield a single intersection, as
/// do foci at the same height. The general case always has two solutions.
pub fn intersection_points(p1: &Point2D<f64>,
                           p2: &Point2D<f64>,
                           directrix: f64)
                           -> ArrayVec<Point2D<f64>, 2> {
    let mut points = ArrayVec::new();

    let p1_degenerate = (p1.y - directrix).abs() < POINT_EPSILON;
    let p2_degenerate = (p2.y - directrix).abs() < POINT_EPSILON;
    if p1_degenerate && p2_degenerate {
        points.push(Point2D::new((p1.x + p2.x) * 0.5, directrix));
        return points;
    }
    if p1_degenerate {
        points.push(Point2D::new(p1.x, solve_y_for_x(p2, directrix, p1.x)));
        return points;
    }
    if p2_degenerate {
        points.push(Point2D::new(p2.x, solve_y_for_x(p1, directrix, p2.x)));
        return points;
    }

    if (p1.x - p2.x).abs() < POINT_EPSILON {
        // Foci stacked vertically: two solutions at the mid height,
        // symmetric about the common x. The radicand factors as
        // (d - y1)(d - y2) and is nonnegative while the sweep is below
        // both foci.
        let y = (p1.y + p2.y) * 0.5;
        let offset = (directrix * directrix - directrix * (p1.y + p2.y) + p1.y * p2.y).sqrt();
        points.push(Point2D::new(p1.x - offset, y));
        points.push(Point2D::new(p1.x + offset, y));
        return points;
    }

    if (p1.y - p2.y).abs() < POINT_EPSILON {
        // Foci at the same height: a single crossing at the midline.
        let x = (p1.x + p2.x) * 0.5;
        points.push(Point2D::new(x, solve_y_for_x(p1, directrix, x)));
        return points;
    }

    let a = 0.5 / (p1.y - directrix);
    let e = 0.5 / (p2.y - directrix);
    let b = a * p1.x - e * p2.x;
    let c = a * p1.x * p1.x - 0.25 / a + p1.y;
    let f = e * p2.x * p2.x - 0.25 / e + p2.y;
    let discriminant = (b * b - (a - e) * (c - f)).max(0.0);
    let d = discriminant.sqrt();

    let x1 = (b + d) / (a - e);
    let x2 = (b - d) / (a - e);
    let point_at = |x: f64, q: f64, focus_x: f64, offset: f64| {
        Point2D::new(x, q * x * x - 2.0 * q * focus_x * x + offset)
    };
    if x1 < x2 {
        points.push(point_at(x1, a, p1.x, c));
        points.push(point_at(x2, e, p2.x, f));
    } else {
        points.push(point_at(x2, e, p2.x, f));
        points.push(point_at(x1, a, p1.x, c));
    }
    points
}

#[cfg(test)]
mod test {
    use euclid::default::Point2D;

    use super::intersection_points;

    fn assert_on_both_parabolas(point: &Point2D<f64>,
                                p1: &Point2D<f64>,
                                p2: &Point2D<f64>,
                                directrix: f64) {
        let to_directrix = point.y - directrix;
        assert!((point.distance_to(*p1) - to_directrix).abs() < 1e-9);
        assert!((point.distance_to(*p2) - to_directrix).abs() < 1e-9);
    }

    #[test]
    fn test_general_case_has_two_sorted_equidistant_solutions() {
        let p1 = Point2D::new(0.0, 2.0);
        let p2 = Point2D::new(4.0, 6.0);
        let points = intersection_points(&p1, &p2, 0.0);
        assert_eq!(points.len(), 2);
        assert!(points[0].x < points[1].x);
        for point in &points {
            assert_on_both_parabolas(point, &p1, &p2, 0.0);
        }
    }

    #[test]
    fn test_stacked_foci_solutions_are_symmetric_about_the_common_x() {
        let p1 = Point2D::new(2.0, 5.0);
        let p2 = Point2D::new(2.0, 1.0);
        let points = intersection_points(&p1, &p2, 0.0);
        assert_eq!(points.len(), 2);
        assert!((points[0].y - 3.0).abs() < 1e-12);
        assert!((points[1].y - 3.0).abs() < 1e-12);
        assert!((points[0].x + points[1].x - 4.0).abs() < 1e-12);
        assert!(points[0].x < points[1].x);
        for point in &points {
            assert_on_both_parabolas(point, &p1, &p2, 0.0);
        }
    }

    #[test]
    fn test_level_foci_cross_once_at_the_midline() {
        let p1 = Point2D::new(0.0, 4.0);
        let p2 = Point2D::new(6.0, 4.0);
        let points = intersection_points(&p1, &p2, 0.0);
        assert_eq!(points.len(), 1);
        assert!((points[0].x - 3.0).abs() < 1e-12);
        assert_on_both_parabolas(&points[0], &p1, &p2, 0.0);
    }

    #[test]
    fn test_focus_on_directrix_degenerates_to_a_vertical_ray() {
        let p1 = Point2D::new(2.0, 4.0);
        let p2 = Point2D::new(0.0, 0.0);
        let points = intersection_points(&p1, &p2, 0.0);
        assert_eq!(points.len(), 1);
        assert!((points[0].x - 0.0).abs() < 1e-12);
        assert!((points[0].y - 2.5).abs() < 1e-12);
    }
}
