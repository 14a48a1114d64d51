use super::*;
use crate::error::{Param, PolygonError};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::thread;

fn poly(n: u32, r: f64) -> Polygon {
    Polygon::new(n, r).unwrap()
}

#[test]
fn construction_accepts_valid_and_zero_radius() {
    assert!(Polygon::new(3, 9.2).is_ok());
    // degenerate point polygon is allowed
    let p = poly(5, 0.0);
    assert_eq!(p.edge_length(), 0.0);
    assert_eq!(p.area(), 0.0);
}

#[test]
fn construction_rejects_too_few_sides() {
    for n in 0..3 {
        let err = Polygon::new(n, 4.4).unwrap_err();
        assert!(matches!(
            err,
            PolygonError::InvalidArgument {
                param: Param::Sides,
                ..
            }
        ));
    }
    // sides are checked first
    let err = Polygon::new(2, -1.0).unwrap_err();
    assert!(matches!(
        err,
        PolygonError::InvalidArgument {
            param: Param::Sides,
            ..
        }
    ));
}

#[test]
fn construction_rejects_bad_circumradius() {
    for r in [-3.2, -1e-12, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = Polygon::new(3, r).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(
            err,
            PolygonError::InvalidArgument {
                param: Param::Circumradius,
                ..
            }
        ));
    }
}

#[test]
fn negative_zero_is_folded() {
    let p = poly(4, -0.0);
    assert!(p.circumradius().is_sign_positive());
    assert_eq!(p.to_string(), "Polygon(4, 0)");
}

#[test]
fn triangle_properties() {
    let t = poly(3, 9.0);
    assert_eq!(t.number_of_vertices(), 3);
    assert_eq!(t.number_of_edges(), 3);
    assert_eq!(t.circumradius(), 9.0);
    assert!((t.edge_length() - 15.5885).abs() < 0.01);
    assert!((t.apothem() - 4.5).abs() < 0.01);
    assert!((t.inradius() - t.apothem()).abs() < 1e-15);
    assert!((t.area() - 105.2).abs() < 0.1);
    assert!((t.perimeter() - 46.7654).abs() < 0.01);
    assert!((t.interior_angle() - 60.0).abs() < 0.01);
}

#[test]
fn square_and_hexagon_closed_forms() {
    let sq = poly(4, 2.0_f64.sqrt());
    assert!((sq.edge_length() - 2.0).abs() < 1e-12);
    assert!((sq.area() - 4.0).abs() < 1e-12);
    assert!((sq.interior_angle() - 90.0).abs() < 1e-12);

    // hexagon edge equals the circumradius
    let hex = poly(6, 11.0);
    assert!((hex.edge_length() - 11.0).abs() < 1e-12);
    assert!((hex.interior_angle() - 120.0).abs() < 1e-12);
    assert!((hex.central_angle() - std::f64::consts::FRAC_PI_3).abs() < 1e-15);
}

#[test]
fn equality_is_structural() {
    assert_eq!(poly(3, 9.3), poly(3, 9.3));
    assert_ne!(poly(3, 9.3), poly(3, 9.4));
    assert_ne!(poly(3, 7.0), poly(4, 7.0));
    assert!(!(poly(3, 7.0) != poly(3, 7.0)));
}

#[test]
fn ordering_uses_side_count_only() {
    let triangle = poly(3, 7.0);
    let triangle_big = poly(3, 77.0);
    let hexagon = poly(6, 11.0);

    assert!(poly(4, 9.4) > poly(3, 9.3));
    assert!(poly(3, 9.3) < poly(4, 9.4));
    assert!(!(poly(3, 9.3) > poly(3, 9.3)));

    assert!(hexagon > triangle);
    assert!(!(triangle > hexagon));
    assert!(triangle < hexagon);
    assert!(!(hexagon < triangle));
    // a smaller circumradius does not make a hexagon smaller
    assert!(poly(6, 0.1) > triangle_big);

    // same sides, different radius: unequal and unordered
    assert_eq!(triangle.partial_cmp(&triangle_big), None);
    assert!(!(triangle < triangle_big) && !(triangle > triangle_big));
    assert_eq!(triangle.cmp_by_sides(&triangle_big), Ordering::Equal);
    assert_eq!(
        triangle.partial_cmp(&poly(3, 7.0)),
        Some(Ordering::Equal)
    );
}

#[test]
fn foreign_types_are_not_comparable() {
    let p = poly(3, 9.3);
    let err = p.try_eq(&3.0_f64).unwrap_err();
    assert_eq!(err, PolygonError::NotComparable { other: "f64" });
    assert!(matches!(
        p.try_partial_cmp(&"Polygon(3, 9.3)"),
        Err(PolygonError::NotComparable { .. })
    ));
    assert!(p.try_gt(&(3u32, 9.3_f64)).is_err());

    assert_eq!(p.try_eq(&poly(3, 9.3)), Ok(true));
    assert_eq!(p.try_eq(&poly(3, 9.4)), Ok(false));
    assert_eq!(poly(4, 1.0).try_gt(&p), Ok(true));
    assert_eq!(p.try_lt(&poly(4, 1.0)), Ok(true));
}

#[test]
fn display_reproduces_constructor_args() {
    assert_eq!(poly(3, 9.3).to_string(), "Polygon(3, 9.3)");
    assert_eq!(poly(3, 9.0).to_string(), "Polygon(3, 9)");
}

#[test]
fn parse_accepts_display_and_rejects_garbage() {
    let p: Polygon = "  Polygon( 5 ,2.5 ) ".parse().unwrap();
    assert_eq!(p, poly(5, 2.5));

    for bad in ["", "Polygon(3)", "Polygon(3, x)", "Square(4, 1)", "Polygon(-3, 1)"] {
        assert!(
            matches!(bad.parse::<Polygon>(), Err(PolygonError::Parse { .. })),
            "{bad}"
        );
    }
    // well-formed text still goes through validation
    assert!(matches!(
        "Polygon(2, 1)".parse::<Polygon>(),
        Err(PolygonError::InvalidArgument {
            param: Param::Sides,
            ..
        })
    ));
    assert!(matches!(
        "Polygon(3, -1)".parse::<Polygon>(),
        Err(PolygonError::InvalidArgument {
            param: Param::Circumradius,
            ..
        })
    ));
}

#[test]
fn vertices_walk_the_circumcircle() {
    let sq = poly(4, 1.0);
    let v = sq.vertices(0.0);
    assert_eq!(v.len(), 4);
    assert!((v[0].x - 1.0).abs() < 1e-12 && v[0].y.abs() < 1e-12);
    assert!(v[1].x.abs() < 1e-12 && (v[1].y - 1.0).abs() < 1e-12);
    // counterclockwise: positive shoelace area equals the closed form
    let shoelace: f64 = (0..v.len())
        .map(|i| {
            let (a, b) = (v[i], v[(i + 1) % v.len()]);
            a.x * b.y - a.y * b.x
        })
        .sum::<f64>()
        * 0.5;
    assert!((shoelace - sq.area()).abs() < 1e-12);
}

#[test]
fn shared_across_threads_without_locks() {
    let p = Polygon::new(8, 3.0).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(move || (p.area(), p.perimeter())))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), (p.area(), p.perimeter()));
    }
}

#[test]
fn errors_render_useful_messages() {
    let err = Polygon::new(2, 1.0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid sides: number of edges/vertices must be >= 3, got 2"
    );
    let err = Polygon::new(3, -1.5).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid circumradius: circumradius must be >= 0, got -1.5"
    );
    let err = Polygon::new(3, 1.0).unwrap().try_eq(&1u8).unwrap_err();
    assert_eq!(err.to_string(), "Polygon is not comparable with u8");
}

#[test]
fn sorting_by_sides_groups_equal_counts() {
    let mut ps: Vec<Polygon> = ["Polygon(6, 1)", "Polygon(3, 2)", "Polygon(4, 1)", "Polygon(3, 1)"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    ps.sort_by(Polygon::cmp_by_sides);
    let sides: Vec<u32> = ps.iter().map(Polygon::number_of_edges).collect();
    assert_eq!(sides, vec![3, 3, 4, 6]);
    // stable sort keeps input order within a side count
    assert_eq!(ps[0].circumradius(), 2.0);
}

proptest! {
    #[test]
    fn prop_vertex_and_edge_counts_agree(n in 3u32..1000, r in 0.0f64..1e6) {
        let p = poly(n, r);
        prop_assert_eq!(p.number_of_vertices(), n);
        prop_assert_eq!(p.number_of_edges(), n);
    }

    #[test]
    fn prop_small_sides_always_rejected(n in 0u32..3, r in -1e6f64..1e6) {
        prop_assert!(Polygon::new(n, r).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn prop_negative_radius_always_rejected(n in 3u32..1000, r in -1e6f64..-1e-9) {
        let rejected = matches!(
            Polygon::new(n, r),
            Err(PolygonError::InvalidArgument { param: Param::Circumradius, .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn prop_display_round_trip(n in 3u32..10_000, r in 0.0f64..1e9) {
        let p = poly(n, r);
        let back: Polygon = p.to_string().parse().unwrap();
        prop_assert_eq!(back, p);
    }

    #[test]
    fn prop_ordering_consistent(
        n1 in 3u32..50, r1 in 0.0f64..100.0,
        n2 in 3u32..50, r2 in 0.0f64..100.0,
    ) {
        let (a, b) = (poly(n1, r1), poly(n2, r2));
        prop_assert_eq!(a > b, b < a);
        prop_assert_eq!(a > b, n1 > n2);
        if a == b {
            prop_assert!(!(a > b) && !(a < b));
        }
        prop_assert_eq!(a.partial_cmp(&b).map(Ordering::reverse), b.partial_cmp(&a));
    }

    #[test]
    fn prop_area_is_half_perimeter_times_apothem(n in 3u32..500, r in 0.0f64..1e3) {
        let p = poly(n, r);
        let expected = 0.5 * p.perimeter() * p.apothem();
        prop_assert!((p.area() - expected).abs() <= 1e-9 * expected.max(1.0));
        // bounded by the circumscribed disk
        prop_assert!(p.area() <= std::f64::consts::PI * r * r + 1e-9);
    }

    #[test]
    fn prop_vertices_spaced_by_edge_length(n in 3u32..200, r in 0.1f64..100.0, rot in -10.0f64..10.0) {
        let p = poly(n, r);
        let v = p.vertices(rot);
        prop_assert_eq!(v.len(), n as usize);
        for i in 0..v.len() {
            prop_assert!((v[i].norm() - r).abs() < 1e-9 * r.max(1.0));
            let d = (v[(i + 1) % v.len()] - v[i]).norm();
            prop_assert!((d - p.edge_length()).abs() < 1e-9 * r.max(1.0));
        }
    }
}
