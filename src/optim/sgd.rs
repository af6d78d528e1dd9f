use crate::math::matrix::Matrix;

/// Plain gradient descent: `W ← W − η·G`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Returns the weights after one descent step along `grad`.
    ///
    /// `weights` is left untouched so callers can keep using the old values
    /// until every gradient of the step has been computed.
    pub fn step(&self, weights: &Matrix, grad: &Matrix) -> Matrix {
        weights - &grad.scale(self.learning_rate)
    }
}
