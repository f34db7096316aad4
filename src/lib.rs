//! # tensor4d
//!
//! **Fixed rank-4 tensors with in-place, one-directional broadcast addition.**
//!
//! A [`Tensor4D`] exclusively owns a contiguous row-major buffer tagged with a
//! four-element shape. Construction copies the caller's data; the buffer is
//! never aliased or resized and is released when the tensor is dropped.
//!
//! ## Broadcasting
//!
//! [`Tensor4D::add_broadcast`] adds another tensor into `self`. Each dimension
//! of the right-hand tensor must either match the left-hand dimension or be 1;
//! singleton dimensions are repeated across the left-hand extent. The
//! left-hand shape is never stretched.
//!
//! ## Quick Start
//!
//! ```rust
//! use tensor4d::prelude::*;
//!
//! let mut t = Tensor4D::from_slice([1, 2, 3, 1], &[1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! let bias = Tensor4D::from_slice([1, 1, 1, 1], &[0.5f32]);
//! t.add_broadcast(&bias)?;
//! assert_eq!(t.as_slice(), &[1.5, 2.5, 3.5, 4.5, 5.5, 6.5]);
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `f16`: Half-precision element types (`half::f16`, `half::bf16`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod dtype;
pub mod error;
pub mod ops;
pub mod tensor;

pub use error::{Error, Result};
pub use tensor::Tensor4D;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::tensor::{Shape, Tensor4D};
}
