//! Storage: exclusively owned element buffer

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};

/// Storage for tensor data
///
/// Storage owns a fixed-length heap buffer. It is never resized, never
/// shared, and never cloned; the buffer is released exactly once when the
/// storage is dropped.
pub struct Storage<T: Element> {
    buf: Box<[T]>,
}

impl<T: Element> Storage<T> {
    /// Reserve room for exactly `len` elements, reporting allocation failure
    /// as [`Error::OutOfMemory`] instead of aborting.
    fn reserve(len: usize) -> Result<Vec<T>> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(len).map_err(|_| Error::OutOfMemory {
            size: len.saturating_mul(T::DTYPE.size_in_bytes()),
        })?;
        tracing::trace!(
            len,
            bytes = len.saturating_mul(T::DTYPE.size_in_bytes()),
            dtype = %T::DTYPE,
            "allocated tensor storage"
        );
        Ok(buf)
    }

    /// Create storage holding a copy of the first `len` elements of `data`
    ///
    /// Returns [`Error::InvalidLength`] if `data` is shorter than `len`.
    pub fn copy_from_slice(data: &[T], len: usize) -> Result<Self> {
        let src = data
            .get(..len)
            .ok_or_else(|| Error::invalid_length(len, data.len()))?;
        let mut buf = Self::reserve(len)?;
        buf.extend_from_slice(src);
        Ok(Self {
            buf: buf.into_boxed_slice(),
        })
    }

    /// Create storage with every element set to `value`
    pub fn filled(len: usize, value: T) -> Result<Self> {
        let mut buf = Self::reserve(len)?;
        buf.resize(len, value);
        Ok(Self {
            buf: buf.into_boxed_slice(),
        })
    }

    /// Get the number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if storage is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Get size in bytes
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.buf.len() * T::DTYPE.size_in_bytes()
    }

    /// View the elements
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// View the elements mutably (length stays fixed)
    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// View the raw bytes of the buffer
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.buf)
    }
}

impl<T: Element> std::fmt::Debug for Storage<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("ptr", &self.buf.as_ptr())
            .field("len", &self.buf.len())
            .field("dtype", &T::DTYPE)
            .finish()
    }
}
