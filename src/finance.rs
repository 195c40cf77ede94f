//! Time-value-of-money calculations.
//!
//! Present/future value, net present value, internal rate of return by
//! bisection, amortized loan payments, and compound interest. All
//! functions are pure; rates are plain fractions (0.05 = 5%).
//!
//! # Conventions
//!
//! - Cash flows are ordered: the value at index `i` occurs in period
//!   `i`, and period 0 is undiscounted.
//! - Loan rates are annual and divided by 12 internally; `periods`
//!   counts months.
//! - Monetary results are rounded to cents, rates to 4 decimal places.

use crate::rounding::round_to;

/// Default NPV magnitude below which the IRR bisection stops.
pub const DEFAULT_PRECISION: f64 = 1e-4;

/// Iteration cap for the IRR bisection search.
const MAX_BISECTION_ITERATIONS: usize = 1000;

/// Outcome of the IRR bisection search.
///
/// `converged` is `false` when the iteration cap was reached before the
/// NPV at `rate` fell below the requested precision; `rate` is then the
/// midpoint of the final bracket, a best-effort estimate. Callers must
/// check the flag before treating the rate as exact.
#[derive(Debug, Clone, PartialEq)]
pub struct RateEstimate {
    /// Rate estimate, rounded to 4 decimal places.
    pub rate: f64,
    /// Number of bisection steps performed.
    pub iterations: usize,
    /// Whether `|NPV(rate)| < precision` was reached.
    pub converged: bool,
}

/// Compound-interest summary.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundInterest {
    /// Principal plus interest, rounded to cents.
    pub final_amount: f64,
    /// Interest earned over the whole term, rounded to cents.
    pub interest_earned: f64,
    /// Effective annual rate, rounded to 4 decimal places.
    pub effective_rate: f64,
}

/// Discounts a future amount back to today.
///
/// `PV = FV / (1 + rate)^periods`
///
/// # Examples
/// ```
/// use numkit::finance::present_value;
/// let pv = present_value(1000.0, 0.05, 10.0);
/// assert!((pv - 613.913).abs() < 1e-2);
/// ```
pub fn present_value(future_value: f64, rate: f64, periods: f64) -> f64 {
    future_value / (1.0 + rate).powf(periods)
}

/// Grows a present amount forward in time.
///
/// `FV = PV · (1 + rate)^periods`
///
/// # Examples
/// ```
/// use numkit::finance::future_value;
/// let fv = future_value(1000.0, 0.05, 10.0);
/// assert!((fv - 1628.89).abs() < 1e-1);
/// ```
pub fn future_value(present_value: f64, rate: f64, periods: f64) -> f64 {
    present_value * (1.0 + rate).powf(periods)
}

/// Net present value of a cash-flow series at the given discount rate.
///
/// The flow at index `i` is discounted by `(1 + rate)^i`; index 0 is
/// undiscounted, so an initial outlay belongs there as a negative flow.
///
/// # Examples
/// ```
/// use numkit::finance::net_present_value;
/// // Invest 1000 now, receive 500 for three years, discounted at 10%
/// let npv = net_present_value(0.1, &[-1000.0, 500.0, 500.0, 500.0]);
/// assert!((npv - 243.42).abs() < 0.01);
/// ```
pub fn net_present_value(rate: f64, cash_flows: &[f64]) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(period, &flow)| flow / (1.0 + rate).powi(period as i32))
        .sum()
}

/// Internal rate of return by bisection over rates in `[0, 1]`.
///
/// # Algorithm
/// Starts at rate 0.1 and narrows the bracket by the sign of the NPV at
/// the current rate: a positive NPV means the rate is too low (raise the
/// lower bound), a negative NPV that it is too high. Stops when
/// `|NPV(rate)| < precision` or after 1000 iterations.
///
/// Non-convergence is not an error; the best estimate is returned with
/// `converged = false`. Rates outside `[0, 1]` (a return below 0% or
/// above 100%) are not found by this search — the bracket is fixed.
///
/// # Examples
/// ```
/// use numkit::finance::{internal_rate_of_return, net_present_value, DEFAULT_PRECISION};
/// let flows = [-1000.0, 500.0, 500.0, 500.0];
/// let result = internal_rate_of_return(&flows, DEFAULT_PRECISION);
/// assert!(result.converged);
/// // NPV at the reported rate is ~0
/// assert!(net_present_value(result.rate, &flows).abs() < 0.5);
/// ```
pub fn internal_rate_of_return(cash_flows: &[f64], precision: f64) -> RateEstimate {
    let mut rate = 0.1;
    let mut low = 0.0;
    let mut high = 1.0;

    for i in 0..MAX_BISECTION_ITERATIONS {
        let npv = net_present_value(rate, cash_flows);
        if npv.abs() < precision {
            return RateEstimate {
                rate: round_to(rate, 4),
                iterations: i + 1,
                converged: true,
            };
        }
        if npv > 0.0 {
            low = rate;
            rate = (rate + high) / 2.0;
        } else {
            high = rate;
            rate = (low + rate) / 2.0;
        }
    }

    RateEstimate {
        rate: round_to(rate, 4),
        iterations: MAX_BISECTION_ITERATIONS,
        converged: false,
    }
}

/// Fixed payment for a fully amortizing loan.
///
/// `rate` is annual and divided by 12; `periods` counts monthly
/// payments. The result is rounded to cents.
///
/// A zero rate degenerates the amortization formula (division by zero),
/// so it falls back to straight-line repayment `principal / periods`.
///
/// # Examples
/// ```
/// use numkit::finance::loan_payment;
/// // Zero-rate fallback: straight division
/// assert_eq!(loan_payment(1000.0, 0.0, 10.0), 100.0);
///
/// // 200k at 6% over 30 years
/// let payment = loan_payment(200_000.0, 0.06, 360.0);
/// assert_eq!(payment, 1199.10);
/// ```
pub fn loan_payment(principal: f64, rate: f64, periods: f64) -> f64 {
    if rate == 0.0 {
        return principal / periods;
    }
    let monthly_rate = rate / 12.0;
    let growth = (1.0 + monthly_rate).powf(periods);
    round_to(principal * (monthly_rate * growth) / (growth - 1.0), 2)
}

/// Compound interest with a given compounding frequency.
///
/// `A = P · (1 + rate/m)^(m·t)` where `m` is `compounding_periods` per
/// year and `t` is the term in years. Also reports the effective annual
/// rate `(1 + rate/m)^m − 1`.
///
/// # Examples
/// ```
/// use numkit::finance::compound_interest;
/// let result = compound_interest(1000.0, 0.05, 12.0, 10.0);
/// assert_eq!(result.final_amount, 1647.01);
/// assert_eq!(result.effective_rate, 0.0512);
/// ```
pub fn compound_interest(
    principal: f64,
    rate: f64,
    compounding_periods: f64,
    time: f64,
) -> CompoundInterest {
    let amount = principal * (1.0 + rate / compounding_periods).powf(compounding_periods * time);
    let effective = (1.0 + rate / compounding_periods).powf(compounding_periods) - 1.0;
    CompoundInterest {
        final_amount: round_to(amount, 2),
        interest_earned: round_to(amount - principal, 2),
        effective_rate: round_to(effective, 4),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
