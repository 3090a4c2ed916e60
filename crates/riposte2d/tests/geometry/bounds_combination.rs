use na::{Matrix2, Point2};
use riposte2d::bounding_volume::{Aabb, BoundingSphere, Bounds, Obb};
use riposte2d::math::Real;

fn random_points(rng: &mut oorandom::Rand64, n: usize) -> Vec<Point2<Real>> {
    (0..n)
        .map(|_| {
            Point2::new(
                rng.rand_float() * 40.0 - 20.0,
                rng.rand_float() * 10.0 - 5.0,
            )
        })
        .collect()
}

#[test]
fn aabb_grows_to_a_point() {
    let mut aabb = Aabb::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
    aabb.combine_point(&Point2::new(20.0, 5.0));

    assert_eq!(aabb.mins(), Point2::new(0.0, 0.0));
    assert_eq!(aabb.maxs(), Point2::new(20.0, 10.0));
}

#[test]
fn combined_volumes_contain_their_points() {
    let mut rng = oorandom::Rand64::new(42);

    for _ in 0..50 {
        let pts = random_points(&mut rng, 30);
        let aabb = Aabb::from_points(&pts);
        let sphere = BoundingSphere::from_points(&pts);
        let obb = Obb::from_points(&pts);

        for pt in &pts {
            assert!(aabb.contains_point(pt));
            assert!(sphere.distance(pt) <= 1.0e-9);
            assert!(obb.distance(pt) <= 1.0e-9);
        }

        let mut incremental = BoundingSphere::new(pts[0], 0.0);
        incremental.combine_points(&pts[1..], true);
        for pt in &pts {
            assert!(incremental.distance(pt) <= 1.0e-9);
        }
    }
}

#[test]
fn obb_axes_are_orthonormal() {
    let mut rng = oorandom::Rand64::new(7);

    for _ in 0..50 {
        let pts = random_points(&mut rng, 20);
        let axes = Obb::from_points(&pts).axes();

        assert_relative_eq!(axes.transpose() * axes, Matrix2::identity(), epsilon = 1.0e-9);
        assert_relative_eq!(axes.determinant(), 1.0, epsilon = 1.0e-9);
    }
}

#[test]
fn merged_bounds_contain_their_parts() {
    let parts = [
        Bounds::from(Aabb::new(Point2::new(0.0, 0.0), Point2::new(2.0, 1.0))),
        Bounds::from(BoundingSphere::new(Point2::new(10.0, 3.0), 2.0)),
        Bounds::from(Obb::from_points(&[
            Point2::new(-4.0, -4.0),
            Point2::new(-2.0, -3.0),
            Point2::new(-3.0, -1.0),
        ])),
    ];

    let mut sphere = BoundingSphere::new_uninitialized();
    sphere.combine_bounds(&parts, false);
    let mut obb = Obb::new_uninitialized();
    obb.combine_bounds(&parts, false);
    let mut aabb = Aabb::new_uninitialized();
    aabb.combine_bounds(&parts, false);

    for part in &parts {
        assert!(part.distance_max(&sphere.center()) <= sphere.radius() + 1.0e-9);

        for pt in part.vertices() {
            assert!(obb.distance(&pt) <= 1.0e-9);
            assert!(aabb.distance(&pt) <= 1.0e-9);
        }
    }
}
