pub mod ids;
pub mod model;
pub mod problem;
pub mod outcome;
pub mod completion;
pub mod result;
pub mod report;

pub use ids::*;
pub use model::*;
pub use problem::*;
pub use outcome::*;
pub use completion::*;
pub use result::*;
pub use report::*;
