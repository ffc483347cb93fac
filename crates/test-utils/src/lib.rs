//! Shared test utilities for the gbi workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Approximate floating-point assertions
//! - Ordering assertions for latitude sequences
//! - Common area and grid fixtures
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, fixtures};
//! ```

pub mod fixtures;

// Re-export commonly used items at the crate root
pub use fixtures::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Macro for element-wise approximate equality of two slices of floats.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_all_approx_eq;
///
/// assert_all_approx_eq!(&[45.0, -45.0], &[45.0000001, -45.0], 1e-6);
/// ```
#[macro_export]
macro_rules! assert_all_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left = $left;
        let right = $right;
        assert_eq!(
            left.len(),
            right.len(),
            "length mismatch: {:?} vs {:?}",
            left,
            right
        );
        for (l, r) in left.iter().zip(right.iter()) {
            $crate::assert_approx_eq!(*l, *r, $epsilon);
        }
    }};
}

/// Macro asserting that a sequence of floats never increases.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_non_increasing;
///
/// assert_non_increasing!([90.0, 45.0, 45.0, -90.0]);
/// ```
#[macro_export]
macro_rules! assert_non_increasing {
    ($values:expr) => {{
        let values: Vec<f64> = $values.into_iter().map(|v| v as f64).collect();
        for (k, pair) in values.windows(2).enumerate() {
            if pair[0] < pair[1] {
                panic!(
                    "assertion failed: sequence increases at index {}: {:?} < {:?}\n  values: {:?}",
                    k + 1,
                    pair[0],
                    pair[1],
                    values
                );
            }
        }
    }};
}
