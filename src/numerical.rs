//! Iterative numerical methods.
//!
//! Root finding (Newton-Raphson), composite Simpson integration, and
//! direct solution of square linear systems by Gaussian elimination
//! with partial pivoting.
//!
//! # Algorithms
//!
//! - **Newton-Raphson**: `x_{n+1} = x_n − f(x_n)/f'(x_n)` with a
//!   near-zero-derivative guard.
//!   Reference: Press et al. (2007), *Numerical Recipes*, 3rd ed., §9.4.
//! - **Simpson's rule**: composite quadrature over an even number of
//!   subintervals, exact for cubics on each pair of panels.
//!   Reference: *Numerical Recipes*, §4.1.
//! - **Gaussian elimination**: forward elimination with partial
//!   pivoting followed by back substitution.
//!   Reference: Golub & Van Loan (1996), *Matrix Computations*, 3rd ed., §3.4.

use crate::matrix::Matrix;
use crate::rounding::round_to;

/// Default convergence tolerance for [`newton_raphson`].
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Default iteration cap for [`newton_raphson`].
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Default subdivision count for [`integrate`].
pub const DEFAULT_INTERVALS: usize = 1000;

/// A pivot smaller than this in absolute value is treated as zero.
const SINGULARITY_EPS: f64 = 1e-12;

/// Error type for numerical-method failures.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericalError {
    /// `|f'(x)|` fell below the tolerance; the iteration cannot continue.
    DerivativeTooSmall { value: f64 },
    /// No usable pivot exists in the given column; the system has no
    /// unique solution.
    SingularMatrix { column: usize },
    /// The coefficient matrix of a linear system is not square.
    NotSquare { rows: usize, cols: usize },
    /// The constants vector length does not match the system order.
    DimensionMismatch { rows: usize, constants: usize },
}

impl std::fmt::Display for NumericalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericalError::DerivativeTooSmall { value } => {
                write!(f, "derivative too small to continue: {value}")
            }
            NumericalError::SingularMatrix { column } => {
                write!(f, "singular matrix: no usable pivot in column {column}")
            }
            NumericalError::NotSquare { rows, cols } => {
                write!(f, "coefficient matrix must be square, got {rows}×{cols}")
            }
            NumericalError::DimensionMismatch { rows, constants } => {
                write!(
                    f,
                    "constants vector has {constants} entries for a system of order {rows}"
                )
            }
        }
    }
}

impl std::error::Error for NumericalError {}

/// Outcome of a Newton-Raphson run.
///
/// `converged` is `false` when the iteration cap was exhausted before
/// successive estimates came within tolerance; `root` is then the best
/// estimate so far, not a verified root. Callers must check the flag.
#[derive(Debug, Clone, PartialEq)]
pub struct RootFinding {
    /// Root estimate, rounded to 5 decimal places.
    pub root: f64,
    /// Number of update steps performed.
    pub iterations: usize,
    /// Whether `|x_{n+1} − x_n| < tolerance` was reached.
    pub converged: bool,
}

/// Finds a root of `f` by the Newton-Raphson iteration.
///
/// Starting from `initial_guess`, applies `x_{n+1} = x_n − f(x_n)/f'(x_n)`
/// until two successive estimates differ by less than `tolerance` or
/// `max_iterations` steps have been taken.
///
/// Non-convergence is not an error: the best estimate is returned with
/// `converged = false`. A derivative whose magnitude falls below
/// `tolerance` *is* an error, since the update would divide by
/// (near) zero.
///
/// # Errors
/// Returns [`NumericalError::DerivativeTooSmall`] if `|derivative(x)| <
/// tolerance` at any step.
///
/// # Examples
/// ```
/// use numkit::numerical::{newton_raphson, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS};
/// // √2 as the positive root of x² − 2
/// let result = newton_raphson(
///     |x| x * x - 2.0,
///     |x| 2.0 * x,
///     1.0,
///     DEFAULT_TOLERANCE,
///     DEFAULT_MAX_ITERATIONS,
/// )
/// .unwrap();
/// assert!(result.converged);
/// assert_eq!(result.root, 1.41421);
/// ```
pub fn newton_raphson<F, G>(
    f: F,
    derivative: G,
    initial_guess: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<RootFinding, NumericalError>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    let mut x = initial_guess;
    for i in 0..max_iterations {
        let fx = f(x);
        let fpx = derivative(x);
        if fpx.abs() < tolerance {
            return Err(NumericalError::DerivativeTooSmall { value: fpx });
        }
        let next = x - fx / fpx;
        if (next - x).abs() < tolerance {
            return Ok(RootFinding {
                root: round_to(next, 5),
                iterations: i + 1,
                converged: true,
            });
        }
        x = next;
    }
    Ok(RootFinding {
        root: round_to(x, 5),
        iterations: max_iterations,
        converged: false,
    })
}

/// Approximates `∫ₐᵇ f(x) dx` by the composite Simpson rule.
///
/// An odd `n` is bumped to `n + 1` so the subdivision count is always
/// even (required for the 4-2-4 weight pattern to telescope); `n = 0`
/// is treated as 2. No error bound is reported.
///
/// # Complexity
/// Time: O(n) evaluations of `f`, Space: O(1)
///
/// # Examples
/// ```
/// use numkit::numerical::{integrate, DEFAULT_INTERVALS};
/// let area = integrate(|x| x * x, 0.0, 1.0, DEFAULT_INTERVALS);
/// assert!((area - 1.0 / 3.0).abs() < 1e-6);
/// ```
pub fn integrate<F>(f: F, a: f64, b: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let n = match n {
        0 => 2,
        n if n % 2 == 1 => n + 1,
        n => n,
    };
    let h = (b - a) / n as f64;
    let mut sum = f(a) + f(b);
    for i in 1..n {
        let x = a + i as f64 * h;
        let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
        sum += weight * f(x);
    }
    h / 3.0 * sum
}

/// Solves the square system `coefficients · x = constants`.
///
/// # Algorithm
/// Forward elimination with partial pivoting, then back substitution,
/// on an internally built augmented matrix; the caller's matrix and
/// vector are never touched. For each column the pivot is the row with
/// the maximal absolute coefficient at or below the diagonal, scanning
/// top to bottom, so the *first* row achieving the maximum wins. That
/// scan order is part of the contract: it makes results reproducible
/// bit for bit across implementations.
///
/// Solution components are rounded to 5 decimal places.
///
/// # Complexity
/// Time: O(n³), Space: O(n²)
///
/// # Errors
/// - [`NumericalError::NotSquare`] if the coefficient matrix is not square.
/// - [`NumericalError::DimensionMismatch`] if `constants.len()` differs
///   from the system order.
/// - [`NumericalError::SingularMatrix`] if the selected pivot for some
///   column is numerically zero. Division by a zero pivot is detected
///   and reported, never left to produce NaN or ±∞.
///
/// # Examples
/// ```
/// use numkit::matrix::Matrix;
/// use numkit::numerical::gaussian_elimination;
/// let a = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
/// let x = gaussian_elimination(&a, &[3.0, 5.0]).unwrap();
/// assert_eq!(x, vec![0.8, 1.4]);
/// ```
pub fn gaussian_elimination(
    coefficients: &Matrix,
    constants: &[f64],
) -> Result<Vec<f64>, NumericalError> {
    let n = coefficients.rows();
    if coefficients.cols() != n {
        return Err(NumericalError::NotSquare {
            rows: n,
            cols: coefficients.cols(),
        });
    }
    if constants.len() != n {
        return Err(NumericalError::DimensionMismatch {
            rows: n,
            constants: constants.len(),
        });
    }

    // Augmented copy: [A | b]
    let mut augmented: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            let mut row = coefficients.row(i).to_vec();
            row.push(constants[i]);
            row
        })
        .collect();

    // Forward elimination
    for col in 0..n {
        // Partial pivoting: first row at or below `col` with maximal |coefficient|
        let mut max_row = col;
        for candidate in (col + 1)..n {
            if augmented[candidate][col].abs() > augmented[max_row][col].abs() {
                max_row = candidate;
            }
        }
        augmented.swap(col, max_row);

        if augmented[col][col].abs() < SINGULARITY_EPS {
            return Err(NumericalError::SingularMatrix { column: col });
        }

        let pivot_row = augmented[col].clone();
        for row in (col + 1)..n {
            let factor = augmented[row][col] / pivot_row[col];
            for j in col..=n {
                augmented[row][j] -= factor * pivot_row[j];
            }
        }
    }

    // Back substitution
    let mut solution = vec![0.0; n];
    for i in (0..n).rev() {
        let mut value = augmented[i][n];
        for j in (i + 1)..n {
            value -= augmented[i][j] * solution[j];
        }
        solution[i] = value / augmented[i][i];
    }

    Ok(solution.into_iter().map(|x| round_to(x, 5)).collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- newton_raphson ---

    #[test]
    fn test_newton_raphson_sqrt_two() {
        let result = newton_raphson(
            |x| x * x - 2.0,
            |x| 2.0 * x,
            1.0,
            DEFAULT_TOLERANCE,
            DEFAULT_MAX_ITERATIONS,
        )
        .unwrap();
        assert!(result.converged);
        assert!(result.iterations <= DEFAULT_MAX_ITERATIONS);
        assert_eq!(result.root, 1.41421);
    }

    #[test]
    fn test_newton_raphson_linear_one_step() {
        // f(x) = 2x − 4 jumps straight to the root
        let result = newton_raphson(
            |x| 2.0 * x - 4.0,
            |_| 2.0,
            0.0,
            DEFAULT_TOLERANCE,
            DEFAULT_MAX_ITERATIONS,
        )
        .unwrap();
        assert!(result.converged);
        assert_eq!(result.root, 2.0);
        // One step reaches the root exactly, the next confirms convergence.
        assert!(result.iterations <= 2);
    }

    #[test]
    fn test_newton_raphson_derivative_too_small() {
        // f'(x) = 2x is below tolerance at x = 0
        let err = newton_raphson(
            |x| x * x - 2.0,
            |x| 2.0 * x,
            0.0,
            DEFAULT_TOLERANCE,
            DEFAULT_MAX_ITERATIONS,
        )
        .unwrap_err();
        assert!(matches!(err, NumericalError::DerivativeTooSmall { .. }));
    }

    #[test]
    fn test_newton_raphson_non_convergence() {
        // One iteration is not enough for x² − 2 from x₀ = 1000
        let result = newton_raphson(
            |x| x * x - 2.0,
            |x| 2.0 * x,
            1000.0,
            DEFAULT_TOLERANCE,
            1,
        )
        .unwrap();
        assert!(!result.converged);
        assert_eq!(result.iterations, 1);
    }

    // --- integrate ---

    #[test]
    fn test_integrate_quadratic() {
        let area = integrate(|x| x * x, 0.0, 1.0, DEFAULT_INTERVALS);
        assert!((area - 1.0 / 3.0).abs() < 1e-6, "got {area}");
    }

    #[test]
    fn test_integrate_odd_n_bumped() {
        // n = 999 must behave like n = 1000, not panic or mis-weight
        let odd = integrate(|x| x * x, 0.0, 1.0, 999);
        let even = integrate(|x| x * x, 0.0, 1.0, 1000);
        assert_eq!(odd, even);
    }

    #[test]
    fn test_integrate_cubic_exact() {
        // Simpson's rule is exact for cubics
        let area = integrate(|x| x * x * x, 0.0, 2.0, 2);
        assert!((area - 4.0).abs() < 1e-12, "got {area}");
    }

    #[test]
    fn test_integrate_reversed_bounds_negates() {
        let forward = integrate(|x| x.sin(), 0.0, 1.0, 100);
        let backward = integrate(|x| x.sin(), 1.0, 0.0, 100);
        assert!((forward + backward).abs() < 1e-12);
    }

    #[test]
    fn test_integrate_zero_intervals() {
        // n = 0 falls back to the smallest valid subdivision
        let area = integrate(|x| x, 0.0, 1.0, 0);
        assert!((area - 0.5).abs() < 1e-12);
    }

    // --- gaussian_elimination ---

    fn matrix(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_gaussian_elimination_2x2() {
        let a = matrix(vec![vec![2.0, 1.0], vec![1.0, 3.0]]);
        let x = gaussian_elimination(&a, &[3.0, 5.0]).unwrap();
        assert_eq!(x, vec![0.8, 1.4]);
    }

    #[test]
    fn test_gaussian_elimination_3x3() {
        // x = 1, y = -2, z = 3
        let a = matrix(vec![
            vec![1.0, 1.0, 1.0],
            vec![2.0, -1.0, 1.0],
            vec![1.0, 2.0, -1.0],
        ]);
        let b = [2.0, 7.0, -6.0];
        let x = gaussian_elimination(&a, &b).unwrap();
        assert_eq!(x, vec![1.0, -2.0, 3.0]);
    }

    #[test]
    fn test_gaussian_elimination_needs_pivoting() {
        // Leading zero forces a row swap before elimination can proceed
        let a = matrix(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        let x = gaussian_elimination(&a, &[2.0, 3.0]).unwrap();
        assert_eq!(x, vec![3.0, 2.0]);
    }

    #[test]
    fn test_gaussian_elimination_singular() {
        // Column of zeros: pivot search finds no usable pivot
        let a = matrix(vec![vec![0.0, 1.0], vec![0.0, 1.0]]);
        let err = gaussian_elimination(&a, &[1.0, 1.0]).unwrap_err();
        assert_eq!(err, NumericalError::SingularMatrix { column: 0 });
    }

    #[test]
    fn test_gaussian_elimination_singular_dependent_rows() {
        // Second row is twice the first
        let a = matrix(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
        let err = gaussian_elimination(&a, &[3.0, 6.0]).unwrap_err();
        assert!(matches!(err, NumericalError::SingularMatrix { .. }));
    }

    #[test]
    fn test_gaussian_elimination_not_square() {
        let a = matrix(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(
            gaussian_elimination(&a, &[1.0, 2.0]).unwrap_err(),
            NumericalError::NotSquare { rows: 2, cols: 3 }
        );
    }

    #[test]
    fn test_gaussian_elimination_constants_length() {
        let a = matrix(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        assert_eq!(
            gaussian_elimination(&a, &[1.0]).unwrap_err(),
            NumericalError::DimensionMismatch {
                rows: 2,
                constants: 1
            }
        );
    }

    #[test]
    fn test_gaussian_elimination_inputs_untouched() {
        let a = matrix(vec![vec![2.0, 1.0], vec![1.0, 3.0]]);
        let b = [3.0, 5.0];
        let a_before = a.clone();
        let _ = gaussian_elimination(&a, &b).unwrap();
        assert_eq!(a, a_before);
        assert_eq!(b, [3.0, 5.0]);
    }
}
