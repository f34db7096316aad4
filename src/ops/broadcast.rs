//! In-place broadcast addition

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::tensor::{Tensor4D, broadcast_coords, linear_index};
use std::ops::AddAssign;

impl<T: Element> Tensor4D<T> {
    /// Add `other` into `self` elementwise, broadcasting `other`'s singleton
    /// dimensions
    ///
    /// For every coordinate `[i, j, k, l]` of `self`, in row-major order,
    /// adds the element of `other` at the same coordinate with each component
    /// zeroed where `other` has extent 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if some dimension of `other` is neither
    /// equal to the matching dimension of `self` nor 1. All dimensions are
    /// validated before any element is written, so `self` is unchanged on
    /// error.
    ///
    /// # Example
    ///
    /// ```
    /// use tensor4d::Tensor4D;
    ///
    /// let mut t = Tensor4D::from_slice([1, 1, 2, 2], &[1i32, 2, 3, 4]);
    /// let row = Tensor4D::from_slice([1, 1, 1, 2], &[10, 20]);
    /// let one = Tensor4D::from_slice([1, 1, 1, 1], &[1]);
    /// t.add_broadcast(&row)?.add_broadcast(&one)?;
    /// assert_eq!(t.as_slice(), &[12, 23, 14, 25]);
    /// # Ok::<(), tensor4d::Error>(())
    /// ```
    pub fn add_broadcast(&mut self, other: &Tensor4D<T>) -> Result<&mut Self> {
        let lhs = self.shape();
        let rhs = other.shape();
        lhs.broadcast_from(&rhs)
            .map_err(|dim| Error::shape_mismatch(lhs.dims(), rhs.dims(), dim))?;

        tracing::trace!(lhs = %lhs, rhs = %rhs, dtype = %T::DTYPE, "add_broadcast");

        if self.is_empty() {
            return Ok(self);
        }

        let src = other.as_slice();
        let dst = self.as_mut_slice();
        let [d0, d1, d2, d3] = lhs.dims();
        for i in 0..d0 {
            for j in 0..d1 {
                for k in 0..d2 {
                    for l in 0..d3 {
                        let coords = [i, j, k, l];
                        let dst_idx = linear_index(&lhs, coords);
                        let src_idx = linear_index(&rhs, broadcast_coords(&rhs, coords));
                        dst[dst_idx] = dst[dst_idx].add_elem(src[src_idx]);
                    }
                }
            }
        }

        Ok(self)
    }
}

impl<T: Element> AddAssign<&Tensor4D<T>> for Tensor4D<T> {
    /// Operator form of [`Tensor4D::add_broadcast`]
    ///
    /// # Panics
    ///
    /// Panics if `rhs` cannot be broadcast onto `self`.
    fn add_assign(&mut self, rhs: &Tensor4D<T>) {
        if let Err(e) = self.add_broadcast(rhs) {
            panic!("Tensor4D += failed: {e}");
        }
    }
}
