//! Core Tensor4D type

use super::shape::{Coords, Shape, linear_index};
use super::storage::Storage;
use crate::dtype::{DType, Element};
use crate::error::Result;
use std::fmt;
use std::marker::PhantomData;

/// Rank-4 array owning a contiguous row-major buffer
///
/// `Tensor4D` consists of:
/// - **Shape**: four extents, fixed at construction
/// - **Storage**: an exclusively owned buffer of exactly `shape.numel()` elements
///
/// Construction always copies the caller's data. The buffer is never aliased,
/// never resized, and released exactly once when the tensor is dropped.
///
/// # Ownership
///
/// A tensor cannot be duplicated:
///
/// ```compile_fail
/// use tensor4d::Tensor4D;
/// let t = Tensor4D::from_slice([1, 1, 1, 2], &[1i32, 2]);
/// let u: Tensor4D<i32> = t.clone();
/// ```
///
/// and cannot be handed to another thread:
///
/// ```compile_fail
/// use tensor4d::Tensor4D;
/// let t = Tensor4D::from_slice([1, 1, 1, 2], &[1i32, 2]);
/// std::thread::spawn(move || drop(t));
/// ```
///
/// # Example
///
/// ```
/// use tensor4d::Tensor4D;
///
/// let mut a = Tensor4D::from_slice([1, 1, 2, 2], &[1.0f32, 2.0, 3.0, 4.0]);
/// let b = Tensor4D::from_slice([1, 1, 1, 2], &[10.0f32, 20.0]);
/// a.add_broadcast(&b)?;
/// assert_eq!(a.as_slice(), &[11.0, 22.0, 13.0, 24.0]);
/// # Ok::<(), tensor4d::Error>(())
/// ```
pub struct Tensor4D<T: Element> {
    shape: Shape,
    storage: Storage<T>,
    /// Opts out of `Send` and `Sync`: the tensor stays with the thread that built it
    _not_send: PhantomData<*const ()>,
}

impl<T: Element> Tensor4D<T> {
    fn from_parts(shape: Shape, len: usize, storage: Storage<T>) -> Self {
        debug_assert_eq!(storage.len(), len);
        Self {
            shape,
            storage,
            _not_send: PhantomData,
        }
    }

    /// Create a tensor by copying data from a slice
    ///
    /// Copies the first `shape.numel()` elements of `data` in order. Extra
    /// trailing elements are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `data` holds fewer elements than the shape requires.
    /// For a fallible alternative, use [`Self::try_from_slice`].
    pub fn from_slice(shape: impl Into<Shape>, data: &[T]) -> Self {
        Self::try_from_slice(shape, data).expect("Tensor4D::from_slice failed")
    }

    /// Create a tensor by copying data from a slice (fallible version)
    ///
    /// Returns an error if `data` holds fewer than `shape.numel()` elements,
    /// if the element count overflows `usize`, or if memory allocation fails.
    ///
    /// # Example
    ///
    /// ```
    /// use tensor4d::{Error, Tensor4D};
    ///
    /// let t = Tensor4D::try_from_slice([1, 2, 1, 2], &[1u8, 2, 3, 4])?;
    /// assert_eq!(t.numel(), 4);
    ///
    /// let short = Tensor4D::try_from_slice([1, 2, 1, 2], &[1u8, 2]);
    /// assert!(matches!(short, Err(Error::InvalidLength { expected: 4, got: 2 })));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn try_from_slice(shape: impl Into<Shape>, data: &[T]) -> Result<Self> {
        let shape = shape.into();
        let len = shape.checked_numel()?;
        let storage = Storage::copy_from_slice(data, len)?;
        Ok(Self::from_parts(shape, len, storage))
    }

    /// Create a tensor with every element set to `value` (fallible version)
    pub fn try_full(shape: impl Into<Shape>, value: T) -> Result<Self> {
        let shape = shape.into();
        let len = shape.checked_numel()?;
        let storage = Storage::filled(len, value)?;
        Ok(Self::from_parts(shape, len, storage))
    }

    /// Create a tensor with every element set to `value`
    pub fn full(shape: impl Into<Shape>, value: T) -> Self {
        Self::try_full(shape, value).expect("Tensor4D::full failed")
    }

    /// Create a tensor filled with zeros
    pub fn zeros(shape: impl Into<Shape>) -> Self {
        Self::try_full(shape, T::zero()).expect("Tensor4D::zeros failed")
    }

    /// Create a tensor filled with ones
    pub fn ones(shape: impl Into<Shape>) -> Self {
        Self::try_full(shape, T::one()).expect("Tensor4D::ones failed")
    }

    // ===== Accessors =====

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Get the four extents
    #[inline]
    pub fn dims(&self) -> [usize; 4] {
        self.shape.dims()
    }

    /// Get the row-major strides, in elements
    #[inline]
    pub fn strides(&self) -> [usize; 4] {
        self.shape.strides()
    }

    /// Total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.storage.len()
    }

    /// Check whether the tensor holds no elements (some extent is 0)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Get the underlying storage
    #[inline]
    pub fn storage(&self) -> &Storage<T> {
        &self.storage
    }

    /// View the elements in row-major order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// View the elements as raw bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.storage.as_bytes()
    }

    /// Copy the elements out in row-major order
    pub fn to_vec(&self) -> Vec<T> {
        self.storage.as_slice().to_vec()
    }

    /// Read the element at `coords`, or `None` if any coordinate is out of range
    pub fn get(&self, coords: Coords) -> Option<T> {
        if coords.iter().zip(self.shape.iter()).any(|(&c, &d)| c >= d) {
            return None;
        }
        Some(self.as_slice()[linear_index(&self.shape, coords)])
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }
}

impl<T: Element> fmt::Debug for Tensor4D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor4D")
            .field("shape", &self.shape)
            .field("dtype", &self.dtype())
            .field("storage", &self.storage)
            .finish()
    }
}

impl<T: Element> fmt::Display for Tensor4D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor4D({}, {})", self.shape, self.dtype())
    }
}
