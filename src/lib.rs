//! # numkit
//!
//! A standalone numerical-computation toolkit: matrix algebra,
//! statistical inference, financial time-value calculations, and
//! iterative numerical methods.
//!
//! ## Modules
//!
//! - [`matrix`] — dense matrix construction and algebra (determinants
//!   up to order 3)
//! - [`numerical`] — Newton-Raphson root finding, Simpson integration,
//!   Gaussian elimination with partial pivoting
//! - [`statistics`] — correlation, linear regression with R², pooled
//!   two-sample t-test
//! - [`finance`] — present/future value, NPV, IRR, loan amortization,
//!   compound interest
//! - [`number_theory`] — gcd/lcm, primality, Fibonacci, combinatorics
//! - [`rounding`] — the fixed-decimal rounding rule shared by results
//!   whose precision is part of their contract
//!
//! ## Design Philosophy
//!
//! - **Pure functions only**: no shared state, no I/O, no caching —
//!   every call recomputes from its arguments, so unrestricted parallel
//!   invocation is safe by construction
//! - **Fail fast**: malformed inputs surface as module-local error
//!   enums at the point of detection; no partial results accompany an
//!   error
//! - **Degenerate cases are defined**: zero denominators and zero rates
//!   get explicit fallback values, never silent NaN or ±∞
//! - **Convergence is explicit**: iteration-capped methods report a
//!   `converged` flag instead of erroring on slow problems
//! - **Property-based testing**: mathematical invariants verified via
//!   proptest

pub mod finance;
pub mod matrix;
pub mod number_theory;
pub mod numerical;
pub mod rounding;
pub mod statistics;
