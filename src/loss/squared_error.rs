/// Half squared-error loss, `E = 0.5 · Σ (t_i − o_i)²`.
pub struct SquaredErrorLoss;

impl SquaredErrorLoss {
    /// Scalar loss summed over all outputs (not averaged).
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(o, t)| 0.5 * (t - o).powi(2))
            .sum()
    }

    /// Per-output gradient ∂E/∂o_i = −(t_i − o_i)
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(o, t)| -(t - o))
            .collect()
    }
}
