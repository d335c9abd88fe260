pub mod base64;
pub mod identifier;
pub mod lorem;
pub mod password;
pub mod urlcodec;

pub use crate::base64::*;
pub use identifier::*;
pub use lorem::*;
pub use password::*;
pub use urlcodec::*;

// The digest tool is a thin view over the core helpers.
pub use tt_core::digest::{sha256_hex, sha512_hex};
