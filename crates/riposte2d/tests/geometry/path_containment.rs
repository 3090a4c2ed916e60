use na::{Point2, Vector2};
use riposte2d::bounding_volume::Aabb;
use riposte2d::math::Real;
use riposte2d::query::crossings::{self, CrossingMode, Crossings, PathShadow};
use riposte2d::shape::{Path, WindingRule};

fn polygon(pts: &[Point2<Real>], winding_rule: WindingRule) -> Path {
    let mut path = Path::new(winding_rule);
    let _ = path.move_to(pts[0]);
    for pt in &pts[1..] {
        let _ = path.line_to(*pt);
    }
    let _ = path.close();
    path
}

// Classic even-odd ray casting.
fn ray_cast_contains(pts: &[Point2<Real>], pt: &Point2<Real>) -> bool {
    let mut inside = false;
    let mut j = pts.len() - 1;

    for i in 0..pts.len() {
        let (a, b) = (pts[i], pts[j]);
        if (a.y > pt.y) != (b.y > pt.y) && pt.x < (b.x - a.x) * (pt.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }

    inside
}

fn random_angles(rng: &mut oorandom::Rand64, n: usize) -> Vec<Real> {
    (0..n)
        .map(|i| (i as Real + 0.8 * rng.rand_float()) * core::f64::consts::TAU / n as Real)
        .collect()
}

// A star-shaped polygon around `center`.
fn random_star(
    rng: &mut oorandom::Rand64,
    center: Point2<Real>,
    scale: Real,
) -> Vec<Point2<Real>> {
    let n = 3 + rng.rand_range(0..12) as usize;
    random_angles(rng, n)
        .into_iter()
        .map(|angle| {
            let radius = (2.0 + 8.0 * rng.rand_float()) * scale;
            center + Vector2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

fn random_polygon(rng: &mut oorandom::Rand64) -> Vec<Point2<Real>> {
    random_star(rng, Point2::origin(), 1.0)
}

// A convex polygon inscribed in a circle around the origin.
fn random_convex_polygon(rng: &mut oorandom::Rand64) -> Vec<Point2<Real>> {
    let n = 3 + rng.rand_range(0..10) as usize;
    let radius = 4.0 + 6.0 * rng.rand_float();
    random_angles(rng, n)
        .into_iter()
        .map(|angle| Point2::new(radius * angle.cos(), radius * angle.sin()))
        .collect()
}

fn edges(pts: &[Point2<Real>]) -> impl Iterator<Item = (Point2<Real>, Point2<Real>)> + '_ {
    pts.iter().zip(pts[1..].iter().chain(&pts[..1])).map(|(a, b)| (*a, *b))
}

fn cross(o: &Point2<Real>, a: &Point2<Real>, b: &Point2<Real>) -> Real {
    (a - o).perp(&(b - o))
}

// Do the two polygon areas overlap? Either their edges cross, or one has a
// vertex inside of the other.
fn polygons_overlap(a: &[Point2<Real>], b: &[Point2<Real>]) -> bool {
    let edges_cross = edges(a).any(|(a0, a1)| {
        edges(b).any(|(b0, b1)| {
            cross(&a0, &a1, &b0) * cross(&a0, &a1, &b1) < 0.0
                && cross(&b0, &b1, &a0) * cross(&b0, &b1, &a1) < 0.0
        })
    });

    edges_cross
        || a.iter().any(|pt| ray_cast_contains(b, pt))
        || b.iter().any(|pt| ray_cast_contains(a, pt))
}

#[test]
fn segment_through_a_square_shadow() {
    let square = [
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 10.0),
        Point2::new(0.0, 10.0),
    ];
    let path = polygon(&square, WindingRule::NonZero);
    let shadow = PathShadow::new(&path);

    let result = shadow.crossings(0, &Point2::new(5.0, -5.0), &Point2::new(5.0, 15.0));
    assert_eq!(result, Ok(Crossings::Intersects));
    assert!(path.contains_point(&Point2::new(5.0, 5.0)));
}

#[test]
fn contains_point_agrees_with_ray_casting() {
    let mut rng = oorandom::Rand64::new(2024);

    for _ in 0..200 {
        let pts = random_polygon(&mut rng);
        let non_zero = polygon(&pts, WindingRule::NonZero);
        let even_odd = polygon(&pts, WindingRule::EvenOdd);

        for _ in 0..50 {
            let pt = Point2::new(rng.rand_float() * 24.0 - 12.0, rng.rand_float() * 24.0 - 12.0);
            let expected = ray_cast_contains(&pts, &pt);

            assert_eq!(non_zero.contains_point(&pt), expected, "{:?} in {:?}", pt, pts);
            assert_eq!(even_odd.contains_point(&pt), expected, "{:?} in {:?}", pt, pts);
        }
    }
}

#[test]
fn rect_containment_agrees_with_its_corners() {
    let mut rng = oorandom::Rand64::new(99);

    for _ in 0..200 {
        let pts = random_polygon(&mut rng);
        let path = polygon(&pts, WindingRule::NonZero);
        let center = Point2::new(rng.rand_float() * 16.0 - 8.0, rng.rand_float() * 16.0 - 8.0);
        let half = Vector2::new(0.1 + rng.rand_float(), 0.1 + rng.rand_float());
        let rect = Aabb::from_half_extents(center, half);

        let corners_inside = rect.vertices().iter().all(|c| ray_cast_contains(&pts, c));

        if path.contains_rect(&rect) {
            assert!(corners_inside);
            assert!(path.intersects_rect(&rect));
        }
        if !path.intersects_rect(&rect) {
            assert!(!rect.vertices().iter().any(|c| ray_cast_contains(&pts, c)));
        }
    }
}

#[test]
fn convex_polygons_contain_rects_with_inner_corners() {
    let mut rng = oorandom::Rand64::new(7);
    let mut contained = 0;

    for _ in 0..500 {
        let pts = random_convex_polygon(&mut rng);
        let path = polygon(&pts, WindingRule::NonZero);
        let center = Point2::new(rng.rand_float() * 12.0 - 6.0, rng.rand_float() * 12.0 - 6.0);
        let half = Vector2::new(0.1 + 2.0 * rng.rand_float(), 0.1 + 2.0 * rng.rand_float());
        let rect = Aabb::from_half_extents(center, half);

        let corners_inside = rect.vertices().iter().all(|c| ray_cast_contains(&pts, c));
        assert_eq!(path.contains_rect(&rect), corners_inside, "{:?} in {:?}", rect, pts);

        if corners_inside {
            contained += 1;
        }
    }

    assert!(contained > 20);
}

#[test]
fn paths_intersect_when_their_areas_overlap() {
    let mut rng = oorandom::Rand64::new(3000);
    let mut overlapping = 0;

    for _ in 0..3000 {
        let a = random_star(&mut rng, Point2::origin(), 1.0);
        let center = Point2::new(rng.rand_float() * 30.0 - 15.0, rng.rand_float() * 30.0 - 15.0);
        let scale = 0.2 + rng.rand_float();
        let b = random_star(&mut rng, center, scale);
        let expected = polygons_overlap(&a, &b);

        let path_a = polygon(&a, WindingRule::NonZero);
        let path_b = polygon(&b, WindingRule::EvenOdd);
        assert_eq!(path_a.intersects_path(&path_b), expected, "{:?} / {:?}", a, b);
        assert_eq!(path_b.intersects_path(&path_a), expected, "{:?} / {:?}", b, a);

        if expected {
            overlapping += 1;
        }
    }

    // Both outcomes are well represented.
    assert!(overlapping > 300 && overlapping < 2700);
}

#[test]
fn self_overlapping_paths_follow_their_winding_rule() {
    // Two turns around the same square.
    let mut pts = vec![
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 10.0),
        Point2::new(0.0, 10.0),
    ];
    pts.extend_from_within(..);

    let non_zero = polygon(&pts, WindingRule::NonZero);
    let even_odd = polygon(&pts, WindingRule::EvenOdd);
    let center = Point2::new(5.0, 5.0);

    let count = crossings::path_crossings_from_point(
        0,
        non_zero.path_iter(None),
        &center,
        CrossingMode::Standard,
    );
    assert_eq!(count, Ok(Crossings::Count(2)));
    assert!(non_zero.contains_point(&center));
    assert!(!even_odd.contains_point(&center));
}
