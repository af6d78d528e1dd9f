pub mod math;
pub mod activation;
pub mod error;
pub mod loss;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use error::{NetworkError, Result};
pub use loss::squared_error::SquaredErrorLoss;
pub use network::network::{Network, DEFAULT_INIT_LIMIT};
pub use network::topology::Topology;
pub use optim::sgd::Sgd;
pub use train::observer::{LossHistory, NoopObserver, TracingObserver, TrainObserver};
pub use train::step_stats::StepStats;
