/// Diagnostic emitted once per completed training step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepStats {
    /// 1-based index of the step since the network was created.
    pub step: u64,
    /// `0.5 · Σ (t_i − o_i)²` measured on the forward pass of this step,
    /// i.e. before the weight update.
    pub total_error: f64,
}
