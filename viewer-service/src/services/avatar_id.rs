//! Placeholder avatar identifiers derived from upload contents.
//!
//! The hasher is keyed randomly once per process: identical bytes map to the
//! same id for the lifetime of the process, but ids change across restarts.
//! Ids live in a space of [`AVATAR_ID_MODULUS`] values, so distinct uploads
//! can and do collide. Nothing detects or resolves that.

use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;

pub const AVATAR_ID_MODULUS: u64 = 10_000;

#[derive(Debug, Clone, Default)]
pub struct AvatarIdGenerator {
    hasher: RandomState,
}

impl AvatarIdGenerator {
    pub fn new() -> Self {
        Self {
            hasher: RandomState::new(),
        }
    }

    pub fn bucket(&self, contents: &[u8]) -> u64 {
        self.hasher.hash_one(contents) % AVATAR_ID_MODULUS
    }

    pub fn generate(&self, contents: &[u8]) -> String {
        format!("avatar_{}", self.bucket(contents))
    }
}
