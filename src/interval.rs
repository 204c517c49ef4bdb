/// A closed interval `[min, max]` over an ordered scalar type.
///
/// Used at `i32` for grid-coordinate ranges and at `f64` for world-space
/// ranges. Results produced by [`Interval::union`] and
/// [`Interval::intersection`] satisfy `min <= max`; direct construction does
/// not enforce the ordering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Interval<T> {
    #[inline]
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Inclusive containment: `min <= value <= max`.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// The smallest interval covering both inputs. Always succeeds.
    pub fn union(a: Self, b: Self) -> Self {
        Self {
            min: if a.min <= b.min { a.min } else { b.min },
            max: if a.max >= b.max { a.max } else { b.max },
        }
    }

    /// The overlapping part of two intervals, or `None` when they are
    /// disjoint.
    ///
    /// Intervals that touch at a single point (`a.max == b.min`) count as
    /// overlapping and produce a degenerate single-point interval.
    pub fn intersection(a: Self, b: Self) -> Option<Self> {
        if a.contains(b.min) || a.contains(b.max) || b.contains(a.min) || b.contains(a.max) {
            Some(Self {
                min: if a.min >= b.min { a.min } else { b.min },
                max: if a.max <= b.max { a.max } else { b.max },
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let interval = Interval::new(-2, 5);
        assert!(interval.contains(-2));
        assert!(interval.contains(5));
        assert!(interval.contains(0));
        assert!(!interval.contains(-3));
        assert!(!interval.contains(6));
    }

    #[test]
    fn test_union_covers_both_inputs() {
        let a = Interval::new(0.0, 1.0);
        let b = Interval::new(-3.5, 0.25);
        let u = Interval::union(a, b);
        assert_eq!(u, Interval::new(-3.5, 1.0));
        assert!(u.contains(a.min) && u.contains(a.max));
        assert!(u.contains(b.min) && u.contains(b.max));
    }

    #[test]
    fn test_intersection_of_overlapping_intervals() {
        let a = Interval::new(0, 4);
        let b = Interval::new(2, 7);
        assert_eq!(Interval::intersection(a, b), Some(Interval::new(2, 4)));
        assert_eq!(Interval::intersection(b, a), Some(Interval::new(2, 4)));
    }

    #[test]
    fn test_intersection_of_disjoint_intervals() {
        let a = Interval::new(0.0, 1.0);
        let b = Interval::new(1.5, 2.0);
        assert_eq!(Interval::intersection(a, b), None);
        assert_eq!(Interval::intersection(b, a), None);
    }

    #[test]
    fn test_touching_intervals_intersect_at_a_point() {
        let a = Interval::new(0, 3);
        let b = Interval::new(3, 8);
        assert_eq!(Interval::intersection(a, b), Some(Interval::new(3, 3)));
    }

    #[test]
    fn test_nested_intervals_intersect_to_the_inner_one() {
        let outer = Interval::new(-10.0, 10.0);
        let inner = Interval::new(-1.0, 2.5);
        assert_eq!(Interval::intersection(outer, inner), Some(inner));
    }
}
