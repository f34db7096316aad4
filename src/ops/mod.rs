//! Tensor operations
//!
//! Only in-place accumulation is provided:
//!
//! ```text
//! Tensor4D<T>
//!   ├── add_broadcast(&mut self, &other) -> Result<&mut Self>
//!   └── += &other   (panics on shape mismatch)
//! ```
//!
//! Broadcasting is one-directional: each dimension of `other` must equal the
//! matching dimension of `self` or be 1. Singleton dimensions of `other` are
//! repeated without copying; `self` is never stretched.

mod broadcast;
