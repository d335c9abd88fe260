pub mod compute;
pub mod contract;

pub use compute::*;
pub use contract::*;
