pub mod observer;
pub mod step_stats;

pub use observer::{from_fn, FnObserver, LossHistory, NoopObserver, TracingObserver, TrainObserver};
pub use step_stats::StepStats;
