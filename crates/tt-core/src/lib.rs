pub mod digest;
pub mod error;
pub mod report;
pub mod rng;
pub mod segment;

pub use digest::*;
pub use error::*;
pub use report::*;
pub use rng::*;
pub use segment::*;
