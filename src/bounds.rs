use crate::interval::Interval;
use std::fmt;
use std::ops::{Add, Sub};

/// Running min/max accumulator used to build axis-ordered boxes.
///
/// Starts empty and folds points in one at a time; finishing from the empty
/// state is a programmer error and panics. This is the only construction
/// path that guarantees `v0 <= v1` on every axis.
#[derive(Clone, Copy, Debug)]
pub struct Extents<T, const D: usize> {
    corners: Option<([T; D], [T; D])>,
}

impl<T: PartialOrd + Copy, const D: usize> Extents<T, D> {
    pub fn new() -> Self {
        Self { corners: None }
    }

    /// True until the first point is accumulated.
    pub fn is_empty(&self) -> bool {
        self.corners.is_none()
    }

    /// Fold a point into the running per-axis minima and maxima.
    pub fn update(&mut self, point: [T; D]) {
        match &mut self.corners {
            None => self.corners = Some((point, point)),
            Some((lo, hi)) => {
                for i in 0..D {
                    if point[i] < lo[i] {
                        lo[i] = point[i];
                    }
                    if point[i] > hi[i] {
                        hi[i] = point[i];
                    }
                }
            }
        }
    }

    /// The ordered `(min, max)` corner pair.
    ///
    /// # Panics
    ///
    /// Panics when no point was ever accumulated.
    pub fn finish(self) -> ([T; D], [T; D]) {
        self.corners
            .expect("Extents::finish called before any point was accumulated")
    }
}

impl<T: PartialOrd + Copy, const D: usize> Default for Extents<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Axis-aligned box in continuous world space.
///
/// `v0` is conventionally the per-axis minimum corner and `v1` the maximum,
/// but direct construction does not enforce the ordering; only
/// [`BoundingBox::from_points`] and [`BoundingBox::union`] normalize. With
/// corner-unordered input, [`BoundingBox::volume`] may be negative and
/// intersections follow the raw corner values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox<const D: usize> {
    pub v0: [f64; D],
    pub v1: [f64; D],
}

impl<const D: usize> BoundingBox<D> {
    pub fn new(v0: [f64; D], v1: [f64; D]) -> Self {
        Self { v0, v1 }
    }

    /// The smallest box covering every point in the iterator.
    ///
    /// # Panics
    ///
    /// Panics when the iterator yields no points.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = [f64; D]>,
    {
        let mut extents = Extents::new();
        for point in points {
            extents.update(point);
        }
        let (v0, v1) = extents.finish();
        Self { v0, v1 }
    }

    /// The interval spanned along one axis.
    #[inline]
    pub fn axis(&self, axis: usize) -> Interval<f64> {
        Interval::new(self.v0[axis], self.v1[axis])
    }

    /// Midpoint of the two corners.
    pub fn center(&self) -> [f64; D] {
        std::array::from_fn(|i| 0.5 * (self.v0[i] + self.v1[i]))
    }

    /// Product of per-axis extents `v1 - v0`. Negative for corner-unordered
    /// input on an odd number of axes; callers must not rely on the sign.
    pub fn volume(&self) -> f64 {
        (0..D).map(|i| self.v1[i] - self.v0[i]).product()
    }

    /// Single-axis containment test; boundary-equal values are inside in
    /// inclusive mode and outside otherwise.
    #[inline]
    pub fn contains_axis(&self, axis: usize, value: f64, inclusive: bool) -> bool {
        if inclusive {
            value >= self.v0[axis] && value <= self.v1[axis]
        } else {
            value > self.v0[axis] && value < self.v1[axis]
        }
    }

    /// Per-axis containment test; every axis must pass.
    pub fn contains(&self, point: [f64; D], inclusive: bool) -> bool {
        (0..D).all(|i| self.contains_axis(i, point[i], inclusive))
    }

    /// The smallest axis-ordered box covering both inputs, built by routing
    /// all four corners through the accumulator.
    pub fn union(a: Self, b: Self) -> Self {
        Self::from_points([a.v0, a.v1, b.v0, b.v1])
    }

    /// Per-axis interval intersection; `None` as soon as any axis is
    /// disjoint. Disjoint inputs are a valid, detectable outcome rather
    /// than an error.
    pub fn intersection(a: Self, b: Self) -> Option<Self> {
        let mut v0 = [0.0; D];
        let mut v1 = [0.0; D];
        for i in 0..D {
            let overlap = Interval::intersection(a.axis(i), b.axis(i))?;
            v0[i] = overlap.min;
            v1[i] = overlap.max;
        }
        Some(Self { v0, v1 })
    }

    /// The smallest integer box fully covering this box: floor the minimum
    /// corner, ceil the maximum corner.
    pub fn to_grid(&self) -> GridBox<D> {
        GridBox {
            v0: std::array::from_fn(|i| self.v0[i].floor() as i32),
            v1: std::array::from_fn(|i| self.v1[i].ceil() as i32),
        }
    }
}

impl<const D: usize> Add<[f64; D]> for BoundingBox<D> {
    type Output = Self;

    fn add(self, offset: [f64; D]) -> Self {
        Self {
            v0: std::array::from_fn(|i| self.v0[i] + offset[i]),
            v1: std::array::from_fn(|i| self.v1[i] + offset[i]),
        }
    }
}

impl<const D: usize> Sub<[f64; D]> for BoundingBox<D> {
    type Output = Self;

    fn sub(self, offset: [f64; D]) -> Self {
        Self {
            v0: std::array::from_fn(|i| self.v0[i] - offset[i]),
            v1: std::array::from_fn(|i| self.v1[i] - offset[i]),
        }
    }
}

impl<const D: usize> fmt::Display for BoundingBox<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundingBox({:?} ~ {:?})", self.v0, self.v1)
    }
}

/// Axis-aligned box in integer grid-coordinate space.
///
/// Same corner convention as [`BoundingBox`]: `v0` is conventionally the
/// minimum corner, unenforced outside the accumulating constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBox<const D: usize> {
    pub v0: [i32; D],
    pub v1: [i32; D],
}

impl<const D: usize> GridBox<D> {
    pub fn new(v0: [i32; D], v1: [i32; D]) -> Self {
        Self { v0, v1 }
    }

    /// The smallest box covering every coordinate in the iterator.
    ///
    /// # Panics
    ///
    /// Panics when the iterator yields no coordinates.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = [i32; D]>,
    {
        let mut extents = Extents::new();
        for point in points {
            extents.update(point);
        }
        let (v0, v1) = extents.finish();
        Self { v0, v1 }
    }

    /// The interval spanned along one axis.
    #[inline]
    pub fn axis(&self, axis: usize) -> Interval<i32> {
        Interval::new(self.v0[axis], self.v1[axis])
    }

    /// Product of per-axis extents `v1 - v0`. Note this counts spans, not
    /// coordinates: the box `{0..=2}` per axis has volume 8, not 27.
    pub fn volume(&self) -> i32 {
        (0..D).map(|i| self.v1[i] - self.v0[i]).product()
    }

    /// Single-axis containment test; boundary-equal values are inside in
    /// inclusive mode and outside otherwise.
    #[inline]
    pub fn contains_axis(&self, axis: usize, value: i32, inclusive: bool) -> bool {
        if inclusive {
            value >= self.v0[axis] && value <= self.v1[axis]
        } else {
            value > self.v0[axis] && value < self.v1[axis]
        }
    }

    /// Per-axis containment test; every axis must pass.
    pub fn contains(&self, coord: [i32; D], inclusive: bool) -> bool {
        (0..D).all(|i| self.contains_axis(i, coord[i], inclusive))
    }

    /// The smallest axis-ordered box covering both inputs.
    pub fn union(a: Self, b: Self) -> Self {
        Self::from_points([a.v0, a.v1, b.v0, b.v1])
    }

    /// Per-axis interval intersection; `None` as soon as any axis is
    /// disjoint.
    pub fn intersection(a: Self, b: Self) -> Option<Self> {
        let mut v0 = [0; D];
        let mut v1 = [0; D];
        for i in 0..D {
            let overlap = Interval::intersection(a.axis(i), b.axis(i))?;
            v0[i] = overlap.min;
            v1[i] = overlap.max;
        }
        Some(Self { v0, v1 })
    }

    /// Exact widening cast of both corners.
    pub fn to_float(&self) -> BoundingBox<D> {
        BoundingBox {
            v0: std::array::from_fn(|i| self.v0[i] as f64),
            v1: std::array::from_fn(|i| self.v1[i] as f64),
        }
    }
}

impl<const D: usize> Add<[i32; D]> for GridBox<D> {
    type Output = Self;

    fn add(self, offset: [i32; D]) -> Self {
        Self {
            v0: std::array::from_fn(|i| self.v0[i] + offset[i]),
            v1: std::array::from_fn(|i| self.v1[i] + offset[i]),
        }
    }
}

impl<const D: usize> Sub<[i32; D]> for GridBox<D> {
    type Output = Self;

    fn sub(self, offset: [i32; D]) -> Self {
        Self {
            v0: std::array::from_fn(|i| self.v0[i] - offset[i]),
            v1: std::array::from_fn(|i| self.v1[i] - offset[i]),
        }
    }
}

impl<const D: usize> fmt::Display for GridBox<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GridBox({:?} ~ {:?})", self.v0, self.v1)
    }
}
