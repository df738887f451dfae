pub mod runner;
pub mod progress;
pub mod solver;
pub mod dataset;

pub use runner::*;
pub use progress::*;
pub use solver::*;
pub use dataset::*;
