use std::f64::consts::E;

/// Logistic function `1 / (1 + e^-x)`, mapping any real into (0, 1).
///
/// The open bound holds only up to `f64` rounding: from `x ≈ 37` the result
/// is exactly `1.0`, and below `x ≈ -710` it is exactly `0.0`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the logistic function expressed through its output:
/// `σ'(z) = σ(z)·(1 − σ(z))`.
///
/// The backward pass only keeps activations, not pre-activations, so the
/// derivative is taken from `a = σ(z)` directly.
pub fn sigmoid_derivative_from_output(a: f64) -> f64 {
    a * (1.0 - a)
}
