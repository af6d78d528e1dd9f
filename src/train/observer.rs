use std::sync::mpsc;

use tracing::debug;

use crate::train::step_stats::StepStats;

/// Receives the diagnostic loss of every training step.
///
/// The network calls `on_step` exactly once per successful `train` call,
/// after both weight matrices have been replaced.
pub trait TrainObserver: Send {
    fn on_step(&mut self, stats: &StepStats);
}

/// Default sink: logs each step through `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TrainObserver for TracingObserver {
    fn on_step(&mut self, stats: &StepStats) {
        debug!(step = stats.step, total_error = stats.total_error, "training step");
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl TrainObserver for NoopObserver {
    fn on_step(&mut self, _stats: &StepStats) {}
}

/// Forwards stats over a channel. A dropped receiver is not an error for
/// the network; the event is simply lost.
impl TrainObserver for mpsc::Sender<StepStats> {
    fn on_step(&mut self, stats: &StepStats) {
        let _ = self.send(*stats);
    }
}

/// Keeps every reported loss in memory, in step order.
#[derive(Debug, Default, Clone)]
pub struct LossHistory {
    pub losses: Vec<f64>,
}

impl LossHistory {
    pub fn new() -> Self {
        LossHistory::default()
    }
}

impl TrainObserver for LossHistory {
    fn on_step(&mut self, stats: &StepStats) {
        self.losses.push(stats.total_error);
    }
}

/// Adapter turning a closure into an observer; see [`from_fn`].
pub struct FnObserver<F>(F);

impl<F> TrainObserver for FnObserver<F>
where
    F: FnMut(&StepStats) + Send,
{
    fn on_step(&mut self, stats: &StepStats) {
        (self.0)(stats)
    }
}

/// Wraps `f` so it is called with every step's stats.
pub fn from_fn<F>(f: F) -> FnObserver<F>
where
    F: FnMut(&StepStats) + Send,
{
    FnObserver(f)
}
