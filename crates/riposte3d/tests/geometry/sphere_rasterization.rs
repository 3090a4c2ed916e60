use na::Point3;
use riposte3d::rasterization::sphere_contains_point;

#[test]
fn sphere_of_radius_three() {
    let center = Point3::origin();

    assert!(sphere_contains_point(&center, 3, &Point3::new(3, 0, 0)));
    assert!(!sphere_contains_point(&center, 3, &Point3::new(4, 0, 0)));
    assert!(sphere_contains_point(&center, 3, &Point3::new(0, 0, -3)));
    assert!(!sphere_contains_point(&center, 3, &Point3::new(0, 0, 4)));
}

#[test]
fn containment_matches_the_exact_sphere() {
    let center = Point3::new(1, -2, 3);

    for radius in 0..9 {
        for x in -10..=10 {
            for y in -10..=10 {
                for z in -10..=10 {
                    let d = ((x * x + y * y + z * z) as f64).sqrt();

                    // Slices round the radius once more than circles do.
                    if (d - radius as f64).abs() <= 1.0 {
                        continue;
                    }

                    let pt = Point3::new(center.x + x, center.y + y, center.z + z);
                    assert_eq!(
                        sphere_contains_point(&center, radius, &pt),
                        d < radius as f64,
                        "radius {}, point {:?}",
                        radius,
                        pt
                    );
                }
            }
        }
    }
}
