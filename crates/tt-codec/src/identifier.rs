//! UUID v4 generation from an injected randomness source.
//!
//! Sixteen random bytes with the version nibble forced to 4 and the variant
//! bits to `10xx`, so the textual form always matches
//! `xxxxxxxx-xxxx-4xxx-[89ab]xxx-xxxxxxxxxxxx`.

use uuid::Uuid;

use tt_core::RandomSource;

/// Generate a random (version 4) UUID from `rng`.
pub fn uuid_v4(rng: &mut dyn RandomSource) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.next_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}
