//! Allocation-free 8x8 DCT
//!
//! Same separable product as `TransformEngine` (`B · X · Bᵗ` and
//! `Bᵗ · C · B`), specialised to 8x8 blocks stored as flat row-major arrays:
//! - Basis table computed once and shared
//! - Row pass then column pass, no heap traffic
//!
//! Output matches `TransformEngine::new(8)` to floating-point tolerance.

use crate::dct::dct_basis;

const N: usize = 8;

lazy_static::lazy_static! {
    static ref BASIS_8: [[f64; N]; N] = {
        let basis = dct_basis(N);
        let mut table = [[0.0f64; N]; N];
        for (i, row) in table.iter_mut().enumerate() {
            row.copy_from_slice(basis.row(i));
        }
        table
    };
}

/// 8x8 DCT-II (forward transform)
pub fn dct8x8_forward(input: &[f64; 64], output: &mut [f64; 64]) {
    let basis = &*BASIS_8;
    let mut temp = [0.0f64; 64];

    // temp = B · X
    for i in 0..N {
        for j in 0..N {
            let mut sum = 0.0;
            for k in 0..N {
                sum += basis[i][k] * input[k * N + j];
            }
            temp[i * N + j] = sum;
        }
    }

    // output = temp · Bᵗ
    for i in 0..N {
        for j in 0..N {
            let mut sum = 0.0;
            for k in 0..N {
                sum += temp[i * N + k] * basis[j][k];
            }
            output[i * N + j] = sum;
        }
    }
}

/// 8x8 DCT-III (inverse transform)
pub fn dct8x8_inverse(input: &[f64; 64], output: &mut [f64; 64]) {
    let basis = &*BASIS_8;
    let mut temp = [0.0f64; 64];

    // temp = Bᵗ · C
    for i in 0..N {
        for j in 0..N {
            let mut sum = 0.0;
            for k in 0..N {
                sum += basis[k][i] * input[k * N + j];
            }
            temp[i * N + j] = sum;
        }
    }

    // output = temp · B
    for i in 0..N {
        for j in 0..N {
            let mut sum = 0.0;
            for k in 0..N {
                sum += temp[i * N + k] * basis[k][j];
            }
            output[i * N + j] = sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransformEngine;
    use blockdct_core::Block;

    fn pattern() -> [f64; 64] {
        core::array::from_fn(|i| ((i * 7) % 256) as f64)
    }

    #[test]
    fn test_fixed_dct_matches_engine() {
        let input = pattern();
        let engine = TransformEngine::new(8).unwrap();
        let reference = engine
            .forward(&Block::from_vec(8, 8, input.to_vec()).unwrap())
            .unwrap();

        let mut output = [0.0f64; 64];
        dct8x8_forward(&input, &mut output);

        for i in 0..64 {
            assert!(
                (reference.as_slice()[i] - output[i]).abs() < 1e-9,
                "Mismatch at index {}: ref={}, fixed={}",
                i,
                reference.as_slice()[i],
                output[i]
            );
        }
    }

    #[test]
    fn test_fixed_idct_matches_engine() {
        let input: [f64; 64] = core::array::from_fn(|i| (i as f64) / 64.0);
        let engine = TransformEngine::new(8).unwrap();
        let reference = engine
            .inverse(&Block::from_vec(8, 8, input.to_vec()).unwrap())
            .unwrap();

        let mut output = [0.0f64; 64];
        dct8x8_inverse(&input, &mut output);

        for i in 0..64 {
            assert!((reference.as_slice()[i] - output[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_fixed_roundtrip() {
        let input = pattern();
        let mut coefficients = [0.0f64; 64];
        let mut output = [0.0f64; 64];

        dct8x8_forward(&input, &mut coefficients);
        dct8x8_inverse(&coefficients, &mut output);

        for i in 0..64 {
            assert!(
                (input[i] - output[i]).abs() < 1e-9,
                "Roundtrip error at index {}: input={}, output={}",
                i,
                input[i],
                output[i]
            );
        }
    }
}
