pub mod latency;
pub mod simulator;

pub use latency::LatencyModel;
pub use simulator::{FetchSimulator, Gathered};
