use std::fmt;

use rand::Rng;
use tracing::debug;

use crate::activation::logistic::{sigmoid, sigmoid_derivative_from_output};
use crate::error::{NetworkError, Result};
use crate::loss::squared_error::SquaredErrorLoss;
use crate::math::matrix::Matrix;
use crate::network::topology::Topology;
use crate::optim::sgd::Sgd;
use crate::train::observer::{TracingObserver, TrainObserver};
use crate::train::step_stats::StepStats;

/// Half-width of the uniform range used by `initialize`.
pub const DEFAULT_INIT_LIMIT: f64 = 0.5;

struct Weights {
    /// `(inputs, hidden)`
    input: Matrix,
    /// `(hidden, outputs)`
    hidden: Matrix,
}

/// Activations kept from a forward pass, both as `1 × n` row vectors.
struct ForwardPass {
    hidden: Matrix,
    output: Matrix,
}

/// An input → hidden → output network with logistic activations, trained
/// one example at a time by backpropagation.
///
/// A new network has no weights; `query` and `train` fail with
/// [`NetworkError::NotInitialized`] until `initialize` has been called.
pub struct Network {
    topology: Topology,
    optimizer: Sgd,
    init_limit: f64,
    weights: Option<Weights>,
    steps: u64,
    observer: Box<dyn TrainObserver>,
}

impl Network {
    /// Creates an uninitialized network.
    ///
    /// Fails if any layer is empty or `learning_rate` is not a positive
    /// finite number.
    pub fn new(topology: Topology, learning_rate: f64) -> Result<Network> {
        topology.validate()?;
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(NetworkError::InvalidLearningRate(learning_rate));
        }

        Ok(Network {
            topology,
            optimizer: Sgd::new(learning_rate),
            init_limit: DEFAULT_INIT_LIMIT,
            weights: None,
            steps: 0,
            observer: Box::new(TracingObserver),
        })
    }

    /// Replaces the sink that receives each training step's loss.
    pub fn with_observer<O>(mut self, observer: O) -> Network
    where
        O: TrainObserver + 'static,
    {
        self.observer = Box::new(observer);
        self
    }

    /// Sets the bound of the uniform range `[-limit, limit]` used by
    /// subsequent calls to `initialize`.
    pub fn with_init_limit(mut self, limit: f64) -> Result<Network> {
        if !(limit.is_finite() && limit >= 0.0) {
            return Err(NetworkError::InvalidInitLimit(limit));
        }
        self.init_limit = limit;
        Ok(self)
    }

    pub fn set_observer<O>(&mut self, observer: O)
    where
        O: TrainObserver + 'static,
    {
        self.observer = Box::new(observer);
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn input_count(&self) -> usize {
        self.topology.inputs
    }

    pub fn hidden_count(&self) -> usize {
        self.topology.hidden
    }

    pub fn output_count(&self) -> usize {
        self.topology.outputs
    }

    pub fn learning_rate(&self) -> f64 {
        self.optimizer.learning_rate
    }

    pub fn is_initialized(&self) -> bool {
        self.weights.is_some()
    }

    /// Number of successful `train` calls so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Input → hidden weights, shape `(inputs, hidden)`.
    pub fn input_weights(&self) -> Option<&Matrix> {
        self.weights.as_ref().map(|w| &w.input)
    }

    /// Hidden → output weights, shape `(hidden, outputs)`.
    pub fn hidden_weights(&self) -> Option<&Matrix> {
        self.weights.as_ref().map(|w| &w.hidden)
    }

    /// Draws fresh weights from the thread RNG, discarding any previous ones.
    pub fn initialize(&mut self) {
        self.initialize_with_rng(&mut rand::thread_rng());
    }

    /// Draws fresh weights from `rng`, uniform over `[-limit, limit]`.
    pub fn initialize_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (in_rows, in_cols) = self.topology.input_weights_shape();
        let (hid_rows, hid_cols) = self.topology.hidden_weights_shape();

        self.weights = Some(Weights {
            input: Matrix::uniform(in_rows, in_cols, self.init_limit, rng),
            hidden: Matrix::uniform(hid_rows, hid_cols, self.init_limit, rng),
        });

        debug!(
            inputs = self.topology.inputs,
            hidden = self.topology.hidden,
            outputs = self.topology.outputs,
            limit = self.init_limit,
            "initialized weights"
        );
    }

    /// Installs explicit weight matrices. Shapes must be `(inputs, hidden)`
    /// and `(hidden, outputs)`; on mismatch nothing changes.
    pub fn set_weights(&mut self, input: Matrix, hidden: Matrix) -> Result<()> {
        check_shape("input_weights", &input, self.topology.input_weights_shape())?;
        check_shape("hidden_weights", &hidden, self.topology.hidden_weights_shape())?;
        self.weights = Some(Weights { input, hidden });
        Ok(())
    }

    /// Runs `inputs` through the network and returns the output activations,
    /// each strictly between 0 and 1 up to `f64` rounding (see
    /// [`sigmoid`](crate::activation::logistic::sigmoid)).
    pub fn query(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        let weights = self.weights.as_ref().ok_or(NetworkError::NotInitialized)?;
        check_len("inputs", inputs, self.topology.inputs)?;

        let pass = forward(weights, &Matrix::row_vector(inputs));
        Ok(pass.output.row(0).to_vec())
    }

    /// Performs one backpropagation step on `(inputs, target)` and reports
    /// the step's loss to the configured observer.
    pub fn train(&mut self, inputs: &[f64], target: &[f64]) -> Result<()> {
        let stats = self.step(inputs, target)?;
        self.observer.on_step(&stats);
        Ok(())
    }

    /// Like `train`, but reports to `observer` instead of the configured one.
    pub fn train_with(
        &mut self,
        inputs: &[f64],
        target: &[f64],
        observer: &mut dyn TrainObserver,
    ) -> Result<()> {
        let stats = self.step(inputs, target)?;
        observer.on_step(&stats);
        Ok(())
    }

    fn step(&mut self, inputs: &[f64], target: &[f64]) -> Result<StepStats> {
        let weights = self.weights.as_ref().ok_or(NetworkError::NotInitialized)?;
        check_len("inputs", inputs, self.topology.inputs)?;
        check_len("target", target, self.topology.outputs)?;

        let x = Matrix::row_vector(inputs);
        let pass = forward(weights, &x);
        let output = pass.output.row(0);

        let total_error = SquaredErrorLoss::loss(output, target);

        // δ_out = ∂E/∂o ⊙ σ'(z_out)
        let output_error = Matrix::row_vector(&SquaredErrorLoss::derivative(output, target));
        let output_delta = output_error.hadamard(&pass.output.map(sigmoid_derivative_from_output));
        let hidden_grad = &pass.hidden.transpose() * &output_delta;

        // Propagated through the old hidden weights.
        let hidden_error = &output_delta * &weights.hidden.transpose();
        let hidden_delta = hidden_error.hadamard(&pass.hidden.map(sigmoid_derivative_from_output));
        let input_grad = &x.transpose() * &hidden_delta;

        let updated = Weights {
            input: self.optimizer.step(&weights.input, &input_grad),
            hidden: self.optimizer.step(&weights.hidden, &hidden_grad),
        };
        self.weights = Some(updated);
        self.steps += 1;

        Ok(StepStats { step: self.steps, total_error })
    }
}

impl fmt::Debug for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Network")
            .field("topology", &self.topology)
            .field("learning_rate", &self.optimizer.learning_rate)
            .field("initialized", &self.is_initialized())
            .field("steps", &self.steps)
            .finish()
    }
}

fn forward(weights: &Weights, x: &Matrix) -> ForwardPass {
    let hidden = (x * &weights.input).map(sigmoid);
    let output = (&hidden * &weights.hidden).map(sigmoid);
    ForwardPass { hidden, output }
}

fn check_len(vector: &'static str, values: &[f64], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(NetworkError::DimensionMismatch {
            vector,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

fn check_shape(vector: &'static str, m: &Matrix, (rows, cols): (usize, usize)) -> Result<()> {
    if m.rows != rows || m.data.len() != rows {
        let actual = if m.rows != rows { m.rows } else { m.data.len() };
        return Err(NetworkError::DimensionMismatch { vector, expected: rows, actual });
    }
    if m.cols != cols || m.data.iter().any(|row| row.len() != cols) {
        let actual = m.data.iter().map(|row| row.len()).find(|&len| len != cols).unwrap_or(m.cols);
        return Err(NetworkError::DimensionMismatch { vector, expected: cols, actual });
    }
    Ok(())
}
