use na::Point2;
use riposte2d::bounding_volume::{Aabb, BoundingSphere, Bounds, BoundsKind};
use riposte2d::query::{
    ClassifyDispatcher, DefaultClassifyDispatcher, IntersectionType, Unsupported,
};

/// Only knows about spheres, and sees every pair of them as spanning.
struct SpheresOnly;

impl ClassifyDispatcher for SpheresOnly {
    fn classify_directed(
        &self,
        a: &Bounds,
        b: &Bounds,
    ) -> Result<IntersectionType, Unsupported> {
        match (a, b) {
            (Bounds::Sphere(_), Bounds::Sphere(_)) => Ok(IntersectionType::Spanning),
            _ => Err(Unsupported::new(a.kind(), b.kind())),
        }
    }

    fn intersects_directed(&self, a: &Bounds, b: &Bounds) -> Result<bool, Unsupported> {
        self.classify_directed(a, b).map(IntersectionType::is_intersecting)
    }
}

fn volumes() -> (Bounds, Bounds, Bounds) {
    let aabb = Bounds::from(Aabb::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0)));
    let small = Bounds::from(BoundingSphere::new(Point2::new(5.0, 5.0), 1.0));
    let large = Bounds::from(BoundingSphere::new(Point2::new(5.0, 5.0), 3.0));
    (aabb, small, large)
}

#[test]
fn unsupported_pairs_are_reported() {
    let (aabb, small, large) = volumes();

    assert_eq!(SpheresOnly.classify(&small, &large), Ok(IntersectionType::Spanning));

    let err = SpheresOnly.classify(&aabb, &small).unwrap_err();
    assert_eq!(err, Unsupported::new(BoundsKind::Aabb, BoundsKind::Sphere));
    assert_eq!(err.to_string(), "unable to classify aligned box against sphere");
    assert!(SpheresOnly.intersects(&small, &aabb).is_err());
}

#[test]
fn chained_dispatchers_fall_back() {
    let (aabb, small, large) = volumes();
    let dispatcher = SpheresOnly.chain(DefaultClassifyDispatcher);

    // The first dispatcher wins for the pairs it supports.
    assert_eq!(dispatcher.classify(&large, &small), Ok(IntersectionType::Spanning));
    assert_eq!(
        DefaultClassifyDispatcher.classify(&large, &small),
        Ok(IntersectionType::Inside)
    );

    assert_eq!(dispatcher.classify(&aabb, &small), Ok(IntersectionType::Inside));
    assert_eq!(dispatcher.classify(&small, &aabb), Ok(IntersectionType::Enclosing));
    assert_eq!(dispatcher.intersects(&aabb, &large), Ok(true));
}
