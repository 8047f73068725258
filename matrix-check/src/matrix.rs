//! Integer matrix multiplication.

use crate::Error;

/// A rectangular matrix of 64-bit integers, stored as rows.
pub type Matrix = Vec<Vec<i64>>;

/// Multiplies two integer matrices.
///
/// A must be m×n and B n×p; the product is m×p with
/// `c[i][j] = Σ_k a[i][k] * b[k][j]`. An A with no rows has column count
/// 0, so it only multiplies with a B that has no rows, yielding an empty
/// product.
///
/// Arithmetic is plain `i64`; products outside the `i64` range are a
/// known limitation (panic in debug builds, wrap in release builds).
pub fn multiply(a: &[Vec<i64>], b: &[Vec<i64>]) -> Result<Matrix, Error> {
    let m = a.len();
    let n = a.get(0).map_or(0, |row| row.len());
    let rows_b = b.len();
    let p = b.get(0).map_or(0, |row| row.len());

    if n != rows_b {
        return Err(Error::DimensionMismatch(m, n, rows_b, p));
    }

    let mut result = vec![vec![0i64; p]; m];
    for i in 0..m {
        for j in 0..p {
            let mut sum = 0i64;
            for k in 0..n {
                sum += a[i][k] * b[k][j];
            }
            result[i][j] = sum;
        }
    }

    Ok(result)
}
