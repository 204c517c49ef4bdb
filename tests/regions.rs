use rand::prelude::*;
use rand::rngs::StdRng;
use voxgrid::{BoundingBox, GridBox, Interval};

fn rng() -> StdRng {
    StdRng::seed_from_u64(123456789)
}

#[test]
fn test_interval_intersection_iff_not_separated() {
    let mut rng = rng();
    for _ in 0..1000 {
        let a = sorted_pair(&mut rng);
        let b = sorted_pair(&mut rng);
        let separated = a.max < b.min || b.max < a.min;
        match Interval::intersection(a, b) {
            None => assert!(separated, "{:?} vs {:?} reported disjoint", a, b),
            Some(overlap) => {
                assert!(!separated, "{:?} vs {:?} reported overlapping", a, b);
                assert_eq!(overlap.min, if a.min >= b.min { a.min } else { b.min });
                assert_eq!(overlap.max, if a.max <= b.max { a.max } else { b.max });
                assert!(a.contains(overlap.min) && b.contains(overlap.min));
                assert!(a.contains(overlap.max) && b.contains(overlap.max));
            }
        }
    }
}

#[test]
fn test_interval_union_always_covers_both() {
    let mut rng = rng();
    for _ in 0..1000 {
        let a = sorted_pair(&mut rng);
        let b = sorted_pair(&mut rng);
        let union = Interval::union(a, b);
        assert!(union.contains(a.min) && union.contains(a.max));
        assert!(union.contains(b.min) && union.contains(b.max));
    }
}

#[test]
fn test_box_intersection_scenarios() {
    let a = GridBox::new([0, 0, 0], [2, 2, 2]);
    let b = GridBox::new([1, 1, 1], [3, 3, 3]);
    assert_eq!(
        GridBox::intersection(a, b),
        Some(GridBox::new([1, 1, 1], [2, 2, 2]))
    );

    let a = GridBox::new([0, 0, 0], [1, 1, 1]);
    let c = GridBox::new([5, 5, 5], [6, 6, 6]);
    assert_eq!(GridBox::intersection(a, c), None);

    // Face contact produces a degenerate (zero-thickness) box.
    let d = GridBox::new([1, 0, 0], [4, 1, 1]);
    assert_eq!(
        GridBox::intersection(a, d),
        Some(GridBox::new([1, 0, 0], [1, 1, 1]))
    );
}

#[test]
fn test_box_union_contains_both_inputs() {
    let mut rng = rng();
    for _ in 0..500 {
        let a = random_float_box(&mut rng);
        let b = random_float_box(&mut rng);
        let union = BoundingBox::union(a, b);
        for corner in [a.v0, a.v1, b.v0, b.v1] {
            assert!(union.contains(corner, true), "{} lost {:?}", union, corner);
        }
    }
}

#[test]
fn test_integer_round_trip_is_lossless() {
    let mut rng = rng();
    for _ in 0..500 {
        let gbox = random_grid_box(&mut rng);
        assert_eq!(gbox.to_float().to_grid(), gbox);
    }
}

#[test]
fn test_outward_rounding_always_covers() {
    let mut rng = rng();
    for _ in 0..500 {
        let bbox = random_float_box(&mut rng);
        let cover = bbox.to_grid().to_float();
        for i in 0..3 {
            assert!(cover.v0[i] <= bbox.v0[i]);
            assert!(cover.v1[i] >= bbox.v1[i]);
        }
    }
}

#[test]
fn test_corner_containment_inclusivity() {
    let mut rng = rng();
    for _ in 0..500 {
        let bbox = random_float_box(&mut rng);
        assert!(bbox.contains(bbox.v0, true));
        assert!(bbox.contains(bbox.v1, true));
        assert!(!bbox.contains(bbox.v0, false));
        assert!(!bbox.contains(bbox.v1, false));
    }
}

#[test]
fn test_intersection_bounds_match_per_axis_intervals() {
    let mut rng = rng();
    for _ in 0..500 {
        let a = random_float_box(&mut rng);
        let b = random_float_box(&mut rng);
        match BoundingBox::intersection(a, b) {
            None => {
                let disjoint_axis = (0..3)
                    .any(|i| Interval::intersection(a.axis(i), b.axis(i)).is_none());
                assert!(disjoint_axis, "{} vs {} reported disjoint", a, b);
            }
            Some(overlap) => {
                for i in 0..3 {
                    let axis = Interval::intersection(a.axis(i), b.axis(i)).unwrap();
                    assert_eq!(overlap.axis(i), axis);
                }
            }
        }
    }
}

fn sorted_pair(rng: &mut StdRng) -> Interval<i32> {
    let a = rng.gen_range(-50..50);
    let b = rng.gen_range(-50..50);
    Interval::new(a.min(b), a.max(b))
}

fn random_float_box(rng: &mut StdRng) -> BoundingBox<3> {
    let corner = |rng: &mut StdRng| [0; 3].map(|_| rng.gen_range(-10.0..10.0));
    BoundingBox::from_points([corner(rng), corner(rng)])
}

fn random_grid_box(rng: &mut StdRng) -> GridBox<3> {
    let corner = |rng: &mut StdRng| [0; 3].map(|_| rng.gen_range(-20..20));
    GridBox::from_points([corner(rng), corner(rng)])
}
