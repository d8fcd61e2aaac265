//! Daily seed derivation.
//!
//! Every run started on the same calendar day shares one seed, so all
//! players face identical dice.

use core::fmt;

use chrono::{NaiveDate, Utc};
use rogue_core::{Turn, compute_seed};
use sha2::{Digest, Sha256};

/// Seed context for per-turn seeds.
const TURN_CONTEXT: u32 = 0x7475_726e;

/// Seed shared by every run of a calendar day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DailySeed(u64);

impl DailySeed {
    const DOMAIN: &'static str = "daily-rogue";

    /// `SHA-256("daily-rogue:<yyyy-mm-dd>")`, first 8 bytes little-endian.
    pub fn from_date(date: NaiveDate) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(Self::DOMAIN.as_bytes());
        hasher.update(b":");
        hasher.update(date.format("%Y-%m-%d").to_string().as_bytes());
        let digest = hasher.finalize();

        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        Self(u64::from_le_bytes(bytes))
    }

    /// Seed for the current UTC day.
    pub fn today() -> Self {
        Self::from_date(Utc::now().date_naive())
    }

    /// Fixed seed, for replays and tests.
    pub const fn from_raw(seed: u64) -> Self {
        Self(seed)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// Seed handed to combat resolution on `turn`.
    pub fn turn_seed(self, turn: Turn) -> u64 {
        compute_seed(self.0, turn.0 as u64, 0, TURN_CONTEXT)
    }
}

impl fmt::Display for DailySeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
