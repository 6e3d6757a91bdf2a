//! Fixtures shared by the integration tests.

use approx::relative_eq;

/// The sequence used throughout the broadcasting scenarios.
pub const SAMPLE: [f64; 5] = [0.0, 2.0, 6.0, 9.0, 4.0];

/// A second sequence with the same length as [`SAMPLE`].
pub const COUNTING: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

/// Asserts that two float sequences have equal length and relatively equal
/// elements.
///
/// # Panics
///
/// Panics with the first mismatching index if the sequences differ.
pub fn assert_all_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {actual:?} vs {expected:?}"
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            relative_eq!(*a, *e, epsilon = 1e-12),
            "element {i} differs: {a} vs {e}"
        );
    }
}
