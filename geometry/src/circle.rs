// voronoi/geometry/src/circle.rs
//
// Copyright © 2019 The Voronoi Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Circumscribed circles.

use euclid::default::Point2D;

use crate::POINT_EPSILON;

/// The center of the circle through the three given points, or `None` if
/// they are collinear or coincident (the cross-product denominator
/// vanishes).
pub fn circumcenter(a: &Point2D<f64>, b: &Point2D<f64>, c: &Point2D<f64>)
                    -> Option<Point2D<f64>> {
    let ab = *b - *a;
    let ac = *c - *a;
    let denominator = 2.0 * ab.cross(ac);
    if denominator.abs() < POINT_EPSILON {
        debug!("degenerate circumcenter: {:?} {:?} {:?}", a, b, c);
        return None;
    }

    let ab_length2 = ab.square_length();
    let ac_length2 = ac.square_length();
    Some(Point2D::new(a.x + (ac.y * ab_length2 - ab.y * ac_length2) / denominator,
                      a.y + (ab.x * ac_length2 - ac.x * ab_length2) / denominator))
}

#[cfg(test)]
mod test {
    use euclid::default::Point2D;

    use super::circumcenter;

    #[test]
    fn test_circumcenter_of_a_triangle() {
        let center = circumcenter(&Point2D::new(0.0, 0.0),
                                  &Point2D::new(4.0, 0.0),
                                  &Point2D::new(2.0, 4.0)).unwrap();
        assert!((center.x - 2.0).abs() < 1e-12);
        assert!((center.y - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_collinear_points_have_no_circumcenter() {
        assert!(circumcenter(&Point2D::new(0.0, 0.0),
                             &Point2D::new(1.0, 1.0),
                             &Point2D::new(2.0, 2.0)).is_none());
    }

    #[test]
    fn test_coincident_points_have_no_circumcenter() {
        assert!(circumcenter(&Point2D::new(1.0, 1.0),
                             &Point2D::new(1.0, 1.0),
                             &Point2D::new(3.0, 5.0)).is_none());
    }
}
