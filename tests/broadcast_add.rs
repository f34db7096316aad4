//! Integration tests for in-place broadcast addition
//!
//! Tests verify:
//! - Same-shape, full-singleton and partial broadcasting
//! - One-directional rejection leaves the left-hand tensor untouched
//! - Copy-on-construct (no aliasing of the caller's buffer)
//! - Agreement with a reference implementation on random shapes

mod common;

use common::{
    iota_i64, numel, random_broadcastable, random_data, random_shape, reference_add_i64,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tensor4d::prelude::*;

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn test_tensor_doubled_by_adding_itself() {
    let shape = [1, 2, 3, 4];
    #[rustfmt::skip]
    let data: [i32; 24] = [
         1,  2,  3,  4,
         5,  6,  7,  8,
         9, 10, 11, 12,

        13, 14, 15, 16,
        17, 18, 19, 20,
        21, 22, 23, 24,
    ];
    let mut t0 = Tensor4D::from_slice(shape, &data);
    let t1 = Tensor4D::from_slice(shape, &data);
    t0.add_broadcast(&t1).unwrap();

    for (i, &x) in t0.as_slice().iter().enumerate() {
        assert_eq!(x, data[i] * 2, "element {i}");
    }
}

#[test]
fn test_last_dim_broadcast_sums_to_seven() {
    #[rustfmt::skip]
    let d0: [f32; 24] = [
        1.0, 1.0, 1.0, 1.0,
        2.0, 2.0, 2.0, 2.0,
        3.0, 3.0, 3.0, 3.0,

        4.0, 4.0, 4.0, 4.0,
        5.0, 5.0, 5.0, 5.0,
        6.0, 6.0, 6.0, 6.0,
    ];
    let d1: [f32; 6] = [6.0, 5.0, 4.0, 3.0, 2.0, 1.0];

    let mut t0 = Tensor4D::from_slice([1, 2, 3, 4], &d0);
    let t1 = Tensor4D::from_slice([1, 2, 3, 1], &d1);
    t0.add_broadcast(&t1).unwrap();

    assert!(t0.as_slice().iter().all(|&x| x == 7.0));
}

#[test]
fn test_singleton_increments_every_element() {
    let d0: Vec<f64> = (1..=24).map(f64::from).collect();
    let mut t0 = Tensor4D::from_slice([1, 2, 3, 4], &d0);
    let t1 = Tensor4D::from_slice([1, 1, 1, 1], &[1.0f64]);
    t0.add_broadcast(&t1).unwrap();

    for (i, &x) in t0.as_slice().iter().enumerate() {
        assert_eq!(x, d0[i] + 1.0, "element {i}");
    }
}

// ============================================================================
// Broadcast rule
// ============================================================================

#[test]
fn test_last_axis_block_receives_single_addend() {
    let (mut t0, _) = iota_i64([1, 2, 3, 4]);
    let before = t0.to_vec();
    let t1 = Tensor4D::from_slice([1, 2, 3, 1], &[100i64, 200, 300, 400, 500, 600]);
    t0.add_broadcast(&t1).unwrap();

    for j in 0..2 {
        for k in 0..3 {
            let addend = t1.get([0, j, k, 0]).unwrap();
            for l in 0..4 {
                let idx = j * 12 + k * 4 + l;
                assert_eq!(t0.as_slice()[idx] - before[idx], addend);
            }
        }
    }
}

#[test]
fn test_every_singleton_mask_matches_reference() {
    let lhs = [2, 3, 2, 3];
    for mask in 0u8..16 {
        let rhs: [usize; 4] =
            std::array::from_fn(|d| if mask & (1 << d) != 0 { 1 } else { lhs[d] });
        let (mut t0, d0) = iota_i64(lhs);
        let (t1, d1) = iota_i64(rhs);
        t0.add_broadcast(&t1).unwrap();
        assert_eq!(
            t0.to_vec(),
            reference_add_i64(lhs, &d0, rhs, &d1),
            "rhs shape {rhs:?}"
        );
    }
}

#[test]
fn test_chained_additions() {
    let mut t = Tensor4D::<i32>::zeros([1, 1, 2, 2]);
    let col = Tensor4D::from_slice([1, 1, 2, 1], &[1, 2]);
    let row = Tensor4D::from_slice([1, 1, 1, 2], &[10, 20]);
    t.add_broadcast(&col).unwrap().add_broadcast(&row).unwrap();
    assert_eq!(t.as_slice(), &[11, 21, 12, 22]);
}

// ============================================================================
// Rejection
// ============================================================================

#[test]
fn test_incompatible_shapes_leave_self_unchanged() {
    let d0: Vec<f32> = (0..24).map(|x| x as f32 * 0.25).collect();
    let mut t0 = Tensor4D::from_slice([1, 2, 3, 4], &d0);
    let t1 = Tensor4D::<f32>::ones([1, 2, 2, 4]);
    let bytes_before = t0.as_bytes().to_vec();

    let err = t0.add_broadcast(&t1).unwrap_err();

    assert!(matches!(err, Error::ShapeMismatch { dim: 2, .. }));
    assert_eq!(t0.as_bytes(), bytes_before.as_slice());
    assert_eq!(t0.dims(), [1, 2, 3, 4]);
}

#[test]
fn test_mismatch_after_compatible_dims_is_detected_before_writing() {
    // dims 0, 1 and 2 are compatible; only the last one is not
    let (mut t0, d0) = iota_i64([2, 2, 2, 3]);
    let (t1, _) = iota_i64([1, 2, 1, 2]);
    assert!(t0.add_broadcast(&t1).is_err());
    assert_eq!(t0.to_vec(), d0);
}

#[test]
fn test_left_singleton_is_not_stretched() {
    let (mut t0, d0) = iota_i64([1, 2, 3, 4]);
    let (t1, _) = iota_i64([2, 2, 3, 4]);
    let err = t0.add_broadcast(&t1).unwrap_err();
    assert_eq!(err, Error::shape_mismatch([1, 2, 3, 4], [2, 2, 3, 4], 0));
    assert_eq!(t0.to_vec(), d0);
}

// ============================================================================
// Ownership and shape stability
// ============================================================================

#[test]
fn test_source_mutation_does_not_reach_tensor() {
    let mut data = vec![1u32, 2, 3, 4];
    let t = Tensor4D::from_slice([1, 1, 2, 2], &data);
    data[0] = 100;
    data[3] = 400;
    assert_eq!(t.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn test_shape_unchanged_on_success_and_failure() {
    let (mut t0, _) = iota_i64([1, 2, 3, 4]);
    let shape = t0.shape();

    let (ok, _) = iota_i64([1, 1, 3, 1]);
    t0.add_broadcast(&ok).unwrap();
    assert_eq!(t0.shape(), shape);

    let (bad, _) = iota_i64([1, 2, 4, 4]);
    assert!(t0.add_broadcast(&bad).is_err());
    assert_eq!(t0.shape(), shape);
    assert_eq!(t0.numel(), 24);
}

// ============================================================================
// Randomized agreement with the reference
// ============================================================================

#[test]
fn test_random_shapes_match_reference() {
    let mut rng = StdRng::seed_from_u64(0x7e45_04d);
    for _ in 0..200 {
        let lhs = random_shape(&mut rng, 4);
        let rhs = random_broadcastable(&mut rng, lhs);
        let d0 = random_data(&mut rng, numel(lhs));
        let d1 = random_data(&mut rng, numel(rhs));

        let mut t0 = Tensor4D::from_slice(lhs, &d0);
        let t1 = Tensor4D::from_slice(rhs, &d1);
        t0.add_broadcast(&t1).unwrap();

        assert_eq!(t0.to_vec(), reference_add_i64(lhs, &d0, rhs, &d1));
    }
}

#[test]
fn test_random_incompatible_shapes_are_rejected() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let lhs = random_shape(&mut rng, 4);
        let mut rhs = random_broadcastable(&mut rng, lhs);
        let dim = rng.random_range(0..4);
        // extents are at least 1, so this is neither equal to lhs nor 1
        rhs[dim] = lhs[dim] + 1;

        let d0 = random_data(&mut rng, numel(lhs));
        let mut t0 = Tensor4D::from_slice(lhs, &d0);
        let t1 = Tensor4D::<i64>::zeros(rhs);

        let err = t0.add_broadcast(&t1).unwrap_err();
        match err {
            Error::ShapeMismatch { dim: got, .. } => assert_eq!(got, dim),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(t0.to_vec(), d0);
    }
}
