//! Shape type and row-major index arithmetic for rank-4 tensors

use crate::error::{Error, Result};
use std::fmt;
use std::ops::Deref;

/// Number of dimensions of every tensor in this crate
pub const RANK: usize = 4;

/// Coordinates of one element: `[i, j, k, l]`, dimension 0 first
pub type Coords = [usize; RANK];

/// Shape type: the four extents of a tensor
///
/// Fixed at construction and never changed afterwards. Dimension 0 varies
/// slowest in memory, dimension 3 fastest.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Shape([usize; RANK]);

impl Shape {
    /// Create a shape from its four extents.
    #[inline]
    pub const fn new(dims: [usize; RANK]) -> Self {
        Self(dims)
    }

    /// The four extents.
    #[inline]
    pub const fn dims(&self) -> [usize; RANK] {
        self.0
    }

    /// Total number of elements.
    ///
    /// Tensors validate their shape with [`Self::checked_numel`] at
    /// construction, so this cannot overflow for a shape taken from a tensor.
    #[inline]
    pub const fn numel(&self) -> usize {
        self.0[0] * self.0[1] * self.0[2] * self.0[3]
    }

    /// Total number of elements, or an error if the extents overflow `usize`.
    ///
    /// Overflow is checked over the product of the non-zero extents, so a
    /// shape that passes has in-range strides and `numel` even when some
    /// extent is 0.
    pub fn checked_numel(&self) -> Result<usize> {
        let nonzero = self
            .0
            .iter()
            .filter(|&&d| d != 0)
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| Error::InvalidArgument {
                arg: "shape",
                reason: format!("extents {:?} overflow usize", self.0),
            })?;
        Ok(if self.0.contains(&0) { 0 } else { nonzero })
    }

    /// Row-major (C-contiguous) strides, in elements.
    ///
    /// ```
    /// use tensor4d::tensor::Shape;
    /// assert_eq!(Shape::new([1, 2, 3, 4]).strides(), [24, 12, 4, 1]);
    /// ```
    pub const fn strides(&self) -> [usize; RANK] {
        let [_, d1, d2, d3] = self.0;
        [d1 * d2 * d3, d2 * d3, d3, 1]
    }

    /// Check whether `other` can be broadcast onto `self` in one direction.
    ///
    /// Every dimension of `other` must equal the matching dimension of `self`
    /// or be 1. `self` is never stretched. Returns the first offending
    /// dimension on failure.
    pub fn broadcast_from(&self, other: &Shape) -> std::result::Result<(), usize> {
        match self
            .0
            .iter()
            .zip(other.0.iter())
            .position(|(&s, &o)| s != o && o != 1)
        {
            Some(dim) => Err(dim),
            None => Ok(()),
        }
    }
}

/// Row-major linear offset of `coords` within a buffer of the given shape.
///
/// ```
/// use tensor4d::tensor::{Shape, linear_index};
/// let shape = Shape::new([1, 2, 3, 4]);
/// assert_eq!(linear_index(&shape, [0, 1, 2, 3]), 12 + 8 + 3);
/// ```
#[inline]
pub fn linear_index(shape: &Shape, coords: Coords) -> usize {
    let strides = shape.strides();
    coords
        .iter()
        .zip(strides.iter())
        .map(|(&c, &s)| c * s)
        .sum()
}

/// Map coordinates of the destination onto a broadcast source.
///
/// Each component is replaced by 0 where `source` has extent 1.
#[inline]
pub fn broadcast_coords(source: &Shape, coords: Coords) -> Coords {
    let mut out = coords;
    for (c, &d) in out.iter_mut().zip(source.0.iter()) {
        if d == 1 {
            *c = 0;
        }
    }
    out
}

impl Deref for Shape {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[usize]> for Shape {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "({a}, {b}, {c}, {d})")
    }
}

impl From<[usize; RANK]> for Shape {
    fn from(value: [usize; RANK]) -> Self {
        Self(value)
    }
}

impl From<Shape> for [usize; RANK] {
    fn from(value: Shape) -> Self {
        value.0
    }
}
