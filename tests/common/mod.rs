//! Common test utilities
#![allow(dead_code)]

use rand::Rng;
use tensor4d::tensor::Tensor4D;

/// Element count of a shape
pub fn numel(shape: [usize; 4]) -> usize {
    shape.iter().product()
}

/// Build a tensor holding `1, 2, ..., numel` in row-major order
pub fn iota_i64(shape: [usize; 4]) -> (Tensor4D<i64>, Vec<i64>) {
    let data: Vec<i64> = (1..=numel(shape) as i64).collect();
    (Tensor4D::from_slice(shape, &data), data)
}

/// Reference broadcast-add written directly from the nested-index formula
///
/// Kept independent of the crate's index helpers so the two can be checked
/// against each other.
pub fn reference_add_i64(
    lhs_shape: [usize; 4],
    lhs: &[i64],
    rhs_shape: [usize; 4],
    rhs: &[i64],
) -> Vec<i64> {
    let [a0, a1, a2, a3] = lhs_shape;
    let [b0, b1, b2, b3] = rhs_shape;
    let pick = |c: usize, d: usize| if d == 1 { 0 } else { c };
    let mut out = lhs.to_vec();
    for i in 0..a0 {
        for j in 0..a1 {
            for k in 0..a2 {
                for l in 0..a3 {
                    let idx = i * a1 * a2 * a3 + j * a2 * a3 + k * a3 + l;
                    let other = pick(i, b0) * b1 * b2 * b3
                        + pick(j, b1) * b2 * b3
                        + pick(k, b2) * b3
                        + pick(l, b3);
                    out[idx] = out[idx].wrapping_add(rhs[other]);
                }
            }
        }
    }
    out
}

/// Random shape with every extent in `1..=max`
pub fn random_shape(rng: &mut impl Rng, max: usize) -> [usize; 4] {
    std::array::from_fn(|_| rng.random_range(1..=max))
}

/// Random right-hand shape that broadcasts onto `lhs`
pub fn random_broadcastable(rng: &mut impl Rng, lhs: [usize; 4]) -> [usize; 4] {
    lhs.map(|d| if rng.random_bool(0.5) { 1 } else { d })
}

/// Random data of the given length
pub fn random_data(rng: &mut impl Rng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(-1000..1000)).collect()
}
