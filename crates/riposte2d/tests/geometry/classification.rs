use na::{Point2, Rotation2, Vector2};
use riposte2d::bounding_volume::{Aabb, BoundingSphere, Bounds, ComposedBounds, Obb};
use riposte2d::math::Real;
use riposte2d::query::{self, IntersectionType};

fn random_point(rng: &mut oorandom::Rand64) -> Point2<Real> {
    Point2::new(rng.rand_float() * 20.0 - 10.0, rng.rand_float() * 20.0 - 10.0)
}

fn random_bounds(rng: &mut oorandom::Rand64) -> Bounds {
    let center = random_point(rng);
    let kind = rng.rand_range(0..3);
    let sizes = Vector2::new(0.5 + 5.0 * rng.rand_float(), 0.5 + 5.0 * rng.rand_float());

    match kind {
        0 => Bounds::from(Aabb::from_half_extents(center, sizes)),
        1 => Bounds::from(BoundingSphere::new(center, sizes.x)),
        _ => {
            let axes = Rotation2::new(rng.rand_float() * 3.0).into_inner();
            Bounds::from(Obb::new(center, axes, sizes))
        }
    }
}

fn random_composed(rng: &mut oorandom::Rand64) -> Bounds {
    let len = 1 + rng.rand_range(0..3) as usize;
    Bounds::from(ComposedBounds::new((0..len).map(|_| random_bounds(rng)).collect()))
}

#[test]
fn sphere_boundary_point_is_inside() {
    let sphere = BoundingSphere::new(Point2::origin(), 5.0);
    assert_eq!(sphere.classify_point(&Point2::new(3.0, 4.0)), IntersectionType::Inside);
    assert!(sphere.contains_point(&Point2::new(3.0, 4.0)));
    assert!(!sphere.contains_point(&Point2::new(3.0, 4.1)));
}

#[test]
fn classification_is_inverted_with_swapped_operands() {
    let mut rng = oorandom::Rand64::new(1234);
    let mut outside = 0;
    let mut others = 0;

    for _ in 0..2000 {
        let a = random_bounds(&mut rng);
        let b = random_bounds(&mut rng);

        let ab = query::classify(&a, &b).unwrap();
        let ba = query::classify(&b, &a).unwrap();
        assert_eq!(ab, ba.invert(), "{:?} / {:?}", a, b);

        let intersects = query::intersects(&a, &b).unwrap();
        assert_eq!(intersects, ab != IntersectionType::Outside, "{:?} / {:?}", a, b);
        assert_eq!(intersects, query::intersects(&b, &a).unwrap());

        if ab == IntersectionType::Outside {
            outside += 1;
        } else {
            others += 1;
        }
    }

    // The sample mixes overlapping and disjoint pairs.
    assert!(outside > 100 && others > 100);
}

#[test]
fn composed_classification_is_inverted_with_swapped_operands() {
    let mut rng = oorandom::Rand64::new(77);

    for _ in 0..500 {
        let a = random_composed(&mut rng);
        let b = random_composed(&mut rng);

        let ab = query::classify(&a, &b).unwrap();
        assert_eq!(ab, query::classify(&b, &a).unwrap().invert(), "{:?} / {:?}", a, b);
        assert_eq!(query::intersects(&a, &b).unwrap(), ab.is_intersecting());
    }
}

#[test]
fn nested_volumes() {
    let aabb = Bounds::from(Aabb::new(Point2::new(-10.0, -10.0), Point2::new(10.0, 10.0)));
    let sphere = Bounds::from(BoundingSphere::new(Point2::new(1.0, 1.0), 2.0));
    let obb = Bounds::from(Obb::new(
        Point2::new(1.0, 1.0),
        Rotation2::new(0.7).into_inner(),
        Vector2::new(0.5, 0.25),
    ));

    assert_eq!(query::classify(&aabb, &sphere), Ok(IntersectionType::Inside));
    assert_eq!(query::classify(&sphere, &obb), Ok(IntersectionType::Inside));
    assert_eq!(query::classify(&obb, &aabb), Ok(IntersectionType::Enclosing));
    assert_eq!(query::classify(&aabb, &aabb), Ok(IntersectionType::Same));
}
