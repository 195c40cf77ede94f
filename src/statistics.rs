//! Statistical inference over paired numeric sequences.
//!
//! Pearson correlation, ordinary least-squares regression with R², and
//! the pooled two-sample t-test. All functions are pure: inputs are
//! read-only slices and every call recomputes from scratch.
//!
//! # Degenerate inputs
//!
//! A zero denominator in the correlation (e.g. a constant series) yields
//! `0.0` rather than NaN. A regression whose dependent variable has zero
//! total variance has an undefined R²; it is reported as `f64::NAN`,
//! never produced by a silent division.

use crate::rounding::round_to;

/// Error type for malformed statistics inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Paired sequences differ in length.
    LengthMismatch { left: usize, right: usize },
    /// A sample is too small for the requested statistic.
    InsufficientSampleSize { len: usize, min: usize },
}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::LengthMismatch { left, right } => {
                write!(f, "sequences must have the same length, got {left} and {right}")
            }
            StatsError::InsufficientSampleSize { len, min } => {
                write!(f, "sample of {len} values is below the minimum of {min}")
            }
        }
    }
}

impl std::error::Error for StatsError {}

/// Ordinary least-squares fit of `y = slope·x + intercept`.
///
/// All fields are rounded to 4 decimal places. `r_squared` is
/// `f64::NAN` when the dependent variable is constant (zero total sum
/// of squares), since the coefficient of determination is undefined
/// there.
#[derive(Debug, Clone, PartialEq)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
    /// Fraction of the variance in `y` explained by the fit.
    pub r_squared: f64,
}

/// Pooled two-sample t-test summary.
///
/// Fields other than `degrees_of_freedom` are rounded to 4 decimal
/// places.
#[derive(Debug, Clone, PartialEq)]
pub struct TTest {
    pub mean1: f64,
    pub mean2: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: usize,
    pub standard_error: f64,
}

/// Pearson correlation coefficient via the sum-of-products formula.
///
/// # Formula
/// ```text
/// r = (n·Σxy − Σx·Σy) / √((n·Σx² − (Σx)²)(n·Σy² − (Σy)²))
/// ```
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// `0.0` when the denominator is exactly zero (either series constant,
/// or empty input) — the degenerate case is a defined value, not NaN.
///
/// # Errors
/// Returns [`StatsError::LengthMismatch`] if `x` and `y` differ in length.
///
/// # Examples
/// ```
/// use numkit::statistics::correlation;
/// let r = correlation(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
/// assert_eq!(r, 1.0);
///
/// // Constant series: zero variance, defined fallback
/// let r = correlation(&[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0]).unwrap();
/// assert_eq!(r, 0.0);
/// ```
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(&a, &b)| a * b).sum();
    let sum_x2: f64 = x.iter().map(|&a| a * a).sum();
    let sum_y2: f64 = y.iter().map(|&b| b * b).sum();

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();

    if denominator == 0.0 {
        Ok(0.0)
    } else {
        Ok(numerator / denominator)
    }
}

/// Ordinary least-squares simple linear regression.
///
/// # Formula
/// Closed-form slope and intercept:
/// ```text
/// slope     = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
/// intercept = (Σy − slope·Σx) / n
/// R²        = 1 − SS_res / SS_tot
/// ```
///
/// Slope, intercept, and R² are rounded to 4 decimal places.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// A [`Regression`]. When `y` is constant, `SS_tot` is zero and
/// `r_squared` is `f64::NAN`. Fewer than two distinct `x` values make
/// the slope denominator zero, so slope and intercept come out NaN as
/// well; callers wanting a fit need at least two distinct abscissae.
///
/// # Errors
/// Returns [`StatsError::LengthMismatch`] if `x` and `y` differ in length.
///
/// # Examples
/// ```
/// use numkit::statistics::linear_regression;
/// let fit = linear_regression(&[1.0, 2.0, 3.0, 4.0], &[3.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(fit.slope, 2.0);
/// assert_eq!(fit.intercept, 1.0);
/// assert_eq!(fit.r_squared, 1.0);
/// ```
pub fn linear_regression(x: &[f64], y: &[f64]) -> Result<Regression, StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(&a, &b)| a * b).sum();
    let sum_x2: f64 = x.iter().map(|&a| a * a).sum();

    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n;

    let mean_y = sum_y / n;
    let total_ss: f64 = y.iter().map(|&yi| (yi - mean_y).powi(2)).sum();
    let residual_ss: f64 = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| {
            let predicted = slope * xi + intercept;
            (yi - predicted).powi(2)
        })
        .sum();

    // R² is undefined for a constant dependent variable.
    let r_squared = if total_ss == 0.0 {
        f64::NAN
    } else {
        1.0 - residual_ss / total_ss
    };

    Ok(Regression {
        slope: round_to(slope, 4),
        intercept: round_to(intercept, 4),
        r_squared: round_to(r_squared, 4),
    })
}

/// Pooled two-sample t-test.
///
/// # Formula
/// Sample variances use Bessel's correction (divisor `n − 1`); the
/// pooled variance weights them by degrees of freedom:
/// ```text
/// s²_p = ((n₁−1)s₁² + (n₂−1)s₂²) / (n₁ + n₂ − 2)
/// SE   = √(s²_p (1/n₁ + 1/n₂))
/// t    = (x̄₁ − x̄₂) / SE
/// ```
///
/// # Complexity
/// Time: O(n₁ + n₂), Space: O(1)
///
/// # Errors
/// Returns [`StatsError::InsufficientSampleSize`] if either sample has
/// fewer than 2 values (sample variance is undefined below that).
///
/// # Examples
/// ```
/// use numkit::statistics::t_test;
/// let a = [5.0, 6.0, 7.0, 8.0];
/// let b = [1.0, 2.0, 3.0, 4.0];
/// let result = t_test(&a, &b).unwrap();
/// assert_eq!(result.degrees_of_freedom, 6);
/// assert!(result.t_statistic > 0.0);
/// ```
pub fn t_test(sample1: &[f64], sample2: &[f64]) -> Result<TTest, StatsError> {
    for sample in [sample1, sample2] {
        if sample.len() < 2 {
            return Err(StatsError::InsufficientSampleSize {
                len: sample.len(),
                min: 2,
            });
        }
    }
    let n1 = sample1.len() as f64;
    let n2 = sample2.len() as f64;
    let mean1 = sample1.iter().sum::<f64>() / n1;
    let mean2 = sample2.iter().sum::<f64>() / n2;

    let var1 = sample1.iter().map(|&v| (v - mean1).powi(2)).sum::<f64>() / (n1 - 1.0);
    let var2 = sample2.iter().map(|&v| (v - mean2).powi(2)).sum::<f64>() / (n2 - 1.0);

    let pooled_var = ((n1 - 1.0) * var1 + (n2 - 1.0) * var2) / (n1 + n2 - 2.0);
    let standard_error = (pooled_var * (1.0 / n1 + 1.0 / n2)).sqrt();
    let t_statistic = (mean1 - mean2) / standard_error;

    Ok(TTest {
        mean1: round_to(mean1, 4),
        mean2: round_to(mean2, 4),
        t_statistic: round_to(t_statistic, 4),
        degrees_of_freedom: sample1.len() + sample2.len() - 2,
        standard_error: round_to(standard_error, 4),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
