pub mod engine;
pub mod keywords;
pub mod readability;
pub mod recommend;
pub mod sentiment;
pub mod stats;

pub use engine::*;
pub use keywords::*;
pub use readability::*;
pub use sentiment::*;
pub use stats::*;
