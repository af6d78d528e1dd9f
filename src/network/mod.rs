pub mod network;
pub mod topology;

pub use network::{Network, DEFAULT_INIT_LIMIT};
pub use topology::Topology;
