pub mod correctness;
pub mod aggregators;

pub use correctness::*;
pub use aggregators::*;
