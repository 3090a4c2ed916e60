use na::{Point3, Rotation3, Vector3};
use riposte3d::bounding_volume::{Aabb, BoundingSphere, Bounds, Obb};
use riposte3d::math::Real;
use riposte3d::query::{self, IntersectionType};

fn random_bounds(rng: &mut oorandom::Rand64) -> Bounds {
    let center = Point3::new(
        rng.rand_float() * 16.0 - 8.0,
        rng.rand_float() * 16.0 - 8.0,
        rng.rand_float() * 16.0 - 8.0,
    );
    let kind = rng.rand_range(0..3);
    let sizes = Vector3::new(
        0.5 + 5.0 * rng.rand_float(),
        0.5 + 5.0 * rng.rand_float(),
        0.5 + 5.0 * rng.rand_float(),
    );

    match kind {
        0 => Bounds::from(Aabb::from_half_extents(center, sizes)),
        1 => Bounds::from(BoundingSphere::new(center, sizes.x)),
        _ => {
            let angles: [Real; 3] = [
                rng.rand_float() * 3.0,
                rng.rand_float() * 3.0,
                rng.rand_float() * 3.0,
            ];
            let axes = Rotation3::from_euler_angles(angles[0], angles[1], angles[2]).into_inner();
            Bounds::from(Obb::new(center, axes, sizes))
        }
    }
}

#[test]
fn classification_is_inverted_with_swapped_operands() {
    let mut rng = oorandom::Rand64::new(4321);

    for _ in 0..2000 {
        let a = random_bounds(&mut rng);
        let b = random_bounds(&mut rng);

        let ab = query::classify(&a, &b).unwrap();
        let ba = query::classify(&b, &a).unwrap();
        assert_eq!(ab, ba.invert(), "{:?} / {:?}", a, b);
        assert_eq!(
            query::intersects(&a, &b).unwrap(),
            ab != IntersectionType::Outside,
            "{:?} / {:?}",
            a,
            b
        );
    }
}

#[test]
fn sphere_in_a_box() {
    let aabb = Bounds::from(Aabb::new(Point3::new(-5.0, -5.0, -5.0), Point3::new(5.0, 5.0, 5.0)));
    let inner = Bounds::from(BoundingSphere::new(Point3::new(0.0, 0.0, 1.0), 3.0));
    let across = Bounds::from(BoundingSphere::new(Point3::new(0.0, 0.0, 5.0), 1.0));
    let away = Bounds::from(BoundingSphere::new(Point3::new(0.0, 0.0, 9.0), 1.0));

    assert_eq!(query::classify(&aabb, &inner), Ok(IntersectionType::Inside));
    assert_eq!(query::classify(&inner, &aabb), Ok(IntersectionType::Enclosing));
    assert_eq!(query::classify(&aabb, &across), Ok(IntersectionType::Spanning));
    assert_eq!(query::classify(&aabb, &away), Ok(IntersectionType::Outside));
}
