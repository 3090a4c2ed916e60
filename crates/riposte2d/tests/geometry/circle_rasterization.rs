use na::Point2;
use riposte2d::rasterization::{
    circle_closest_point, circle_contains_point, circle_farthest_point, circle_perimeter,
    circles_intersect,
};

fn distance(a: &Point2<i32>, b: &Point2<i32>) -> f64 {
    ((a.x - b.x) as f64).hypot((a.y - b.y) as f64)
}

#[test]
fn containment_matches_the_exact_circle() {
    let center = Point2::new(2, -3);

    for radius in 0..16 {
        for x in -20..=20 {
            for y in -20..=20 {
                let pt = Point2::new(center.x + x, center.y + y);
                let d = distance(&center, &pt);

                // Points near the boundary depend on the rasterization.
                if (d - radius as f64).abs() <= 0.5 {
                    continue;
                }

                assert_eq!(
                    circle_contains_point(&center, radius, &pt),
                    d < radius as f64,
                    "radius {}, point {:?}",
                    radius,
                    pt
                );
            }
        }
    }
}

#[test]
fn perimeter_points_are_contained() {
    let center = Point2::new(-7, 4);

    for radius in 0..20 {
        for pt in circle_perimeter(center, radius) {
            assert!(circle_contains_point(&center, radius, &pt));
            assert_eq!(circle_closest_point(&center, radius, &pt), pt);
        }
    }
}

#[test]
fn closest_and_farthest_are_on_the_perimeter() {
    let center = Point2::origin();
    let radius = 9;
    let perimeter: Vec<_> = circle_perimeter(center, radius).collect();

    for (x, y) in [(20, 3), (-15, 15), (0, -30), (4, 25), (-11, -2)] {
        let pt = Point2::new(x, y);
        let closest = circle_closest_point(&center, radius, &pt);
        let farthest = circle_farthest_point(&center, radius, &pt);

        assert!(perimeter.contains(&closest));
        assert!(perimeter.contains(&farthest));
        assert!(distance(&closest, &pt) < distance(&farthest, &pt));
    }
}

#[test]
fn intersection_matches_the_exact_circles() {
    let c1 = Point2::origin();

    for r1 in 1..8 {
        for r2 in 1..8 {
            for x in -20..=20 {
                let c2 = Point2::new(x, 3);
                let d = distance(&c1, &c2);
                let reach = (r1 + r2) as f64;

                if (d - reach).abs() <= 1.5 {
                    continue;
                }

                assert_eq!(circles_intersect(&c1, r1, &c2, r2), d < reach);
            }
        }
    }
}
