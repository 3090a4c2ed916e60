use na::{Matrix3, Point3};
use riposte3d::bounding_volume::{Aabb, BoundingSphere, Obb};
use riposte3d::math::Real;

fn random_points(rng: &mut oorandom::Rand64, n: usize) -> Vec<Point3<Real>> {
    (0..n)
        .map(|_| {
            Point3::new(
                rng.rand_float() * 30.0 - 15.0,
                rng.rand_float() * 8.0 - 4.0,
                rng.rand_float() * 2.0 - 1.0,
            )
        })
        .collect()
}

#[test]
fn aabb_grows_to_a_point() {
    let mut aabb = Aabb::new(Point3::origin(), Point3::new(10.0, 10.0, 10.0));
    aabb.combine_point(&Point3::new(20.0, 5.0, -3.0));

    assert_eq!(aabb.mins(), Point3::new(0.0, 0.0, -3.0));
    assert_eq!(aabb.maxs(), Point3::new(20.0, 10.0, 10.0));
}

#[test]
fn combined_volumes_contain_their_points() {
    let mut rng = oorandom::Rand64::new(42);

    for _ in 0..50 {
        let pts = random_points(&mut rng, 40);
        let sphere = BoundingSphere::from_points(&pts);
        let obb = Obb::from_points(&pts);

        for pt in &pts {
            assert!(sphere.distance(pt) <= 1.0e-9);
            assert!(obb.distance(pt) <= 1.0e-9);
        }
    }
}

#[test]
fn obb_axes_are_a_rotation() {
    let mut rng = oorandom::Rand64::new(7);

    for _ in 0..50 {
        let pts = random_points(&mut rng, 25);
        let axes = Obb::from_points(&pts).axes();

        assert_relative_eq!(axes.transpose() * axes, Matrix3::identity(), epsilon = 1.0e-9);
        assert_relative_eq!(axes.determinant(), 1.0, epsilon = 1.0e-9);
    }
}
