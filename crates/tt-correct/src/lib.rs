pub mod changes;
pub mod corrector;
pub mod dictionary;
pub mod rewrite;
pub mod rules;

pub use changes::*;
pub use corrector::*;
pub use rewrite::*;
