//! Driver for the backprop-nn library.
//!
//! Trains a network repeatedly on one example and prints the final query.
//!
//! Run with:
//!   cargo run                       # built-in 3-3-3 sample
//!   cargo run -- path/to/run.json   # custom `DriverConfig`
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

mod config;

use rand::{rngs::StdRng, SeedableRng};
use tracing::{info, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backprop_nn::{Network, StepStats};
use backprop_nn::train::observer::from_fn;

use config::{ConfigError, DriverConfig};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConfigError> {
    let config = match std::env::args().nth(1) {
        Some(path) => DriverConfig::load_json(path)?,
        None => DriverConfig::default(),
    };

    let log_every = config.log_every as u64;
    let mut network = Network::new(config.topology, config.learning_rate)?
        .with_observer(from_fn(move |stats: &StepStats| {
            if log_every > 0 && stats.step % log_every == 0 {
                info!(step = stats.step, total_error = stats.total_error, "loss");
            }
        }));

    match config.seed {
        Some(seed) => network.initialize_with_rng(&mut StdRng::seed_from_u64(seed)),
        None => network.initialize(),
    }

    info!(
        inputs = config.topology.inputs,
        hidden = config.topology.hidden,
        outputs = config.topology.outputs,
        learning_rate = config.learning_rate,
        iterations = config.iterations,
        "training"
    );

    for _ in 0..config.iterations {
        network.train(&config.inputs, &config.target)?;
    }

    let output = network.query(&config.inputs)?;
    println!("target: {:?}", config.target);
    println!("output: {:?}", output);

    Ok(())
}
