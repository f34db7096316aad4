//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::Pod;
use std::fmt::{Debug, Display};

/// Trait for types that can be elements of a `Tensor4D`
///
/// Connects Rust's numeric primitives to tensor4d's runtime dtype tag and
/// supplies the addition used by broadcast accumulation.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod` - Safe byte views of tensor storage (bytemuck)
/// - `PartialEq + Debug + Display` - Inspection and assertions
pub trait Element: Copy + Send + Sync + Pod + PartialEq + Debug + Display + 'static {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;

    /// Add two elements with the type's native arithmetic
    ///
    /// Floating point types use IEEE 754 addition (rounding, infinities and
    /// NaN propagate unchanged). Integer types wrap on overflow in two's
    /// complement, independently of the build profile.
    fn add_elem(self, rhs: Self) -> Self;
}

macro_rules! impl_float_element {
    ($ty:ty, $dtype:expr) => {
        impl Element for $ty {
            const DTYPE: DType = $dtype;

            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }

            #[inline]
            fn add_elem(self, rhs: Self) -> Self {
                self + rhs
            }
        }
    };
}

macro_rules! impl_int_element {
    ($ty:ty, $dtype:expr) => {
        impl Element for $ty {
            const DTYPE: DType = $dtype;

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn one() -> Self {
                1
            }

            #[inline]
            fn add_elem(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }
        }
    };
}

impl_float_element!(f64, DType::F64);
impl_float_element!(f32, DType::F32);

impl_int_element!(i64, DType::I64);
impl_int_element!(i32, DType::I32);
impl_int_element!(i16, DType::I16);
impl_int_element!(i8, DType::I8);
impl_int_element!(u64, DType::U64);
impl_int_element!(u32, DType::U32);
impl_int_element!(u16, DType::U16);
impl_int_element!(u8, DType::U8);

// ============================================================================
// Half-precision floating point types (requires "f16" feature)
// ============================================================================

#[cfg(feature = "f16")]
impl Element for half::f16 {
    const DTYPE: DType = DType::F16;

    #[inline]
    fn zero() -> Self {
        half::f16::ZERO
    }

    #[inline]
    fn one() -> Self {
        half::f16::ONE
    }

    #[inline]
    fn add_elem(self, rhs: Self) -> Self {
        self + rhs
    }
}

#[cfg(feature = "f16")]
impl Element for half::bf16 {
    const DTYPE: DType = DType::BF16;

    #[inline]
    fn zero() -> Self {
        half::bf16::ZERO
    }

    #[inline]
    fn one() -> Self {
        half::bf16::ONE
    }

    #[inline]
    fn add_elem(self, rhs: Self) -> Self {
        self + rhs
    }
}
