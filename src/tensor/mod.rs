//! Tensor types
//!
//! This module provides `Tensor4D`, a rank-4 array that exclusively owns a
//! contiguous row-major buffer, together with its shape and index helpers.

mod core;
mod shape;
mod storage;

pub use core::Tensor4D;
pub use shape::{Coords, RANK, Shape, broadcast_coords, linear_index};
pub use storage::Storage;
