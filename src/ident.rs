use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::config::{Config, DEFAULT_PUID_LEN};

pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Base-62 digits of `v`, least significant first. Zero encodes as "".
pub fn num_to_string(mut v: u64) -> String {
    let base = ALPHABET.len() as u64;
    let mut out = String::new();
    while v > 0 {
        out.push(ALPHABET[(v % base) as usize] as char);
        v /= base;
    }
    out
}

fn system_clock_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Generator of short pseudo-unique ids.
///
/// Each generator carries its own counter and random source, so ids from
/// separate generators are independent. Ids mix the clock, the counter and a
/// random number; they are not cryptographically strong.
#[derive(Debug)]
pub struct IdGenerator<R: Rng> {
    rng: R,
    counter: u64,
    len: usize,
    clock: fn() -> u64,
}

impl<R: Rng> IdGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            counter: 0,
            len: DEFAULT_PUID_LEN,
            clock: system_clock_ms,
        }
    }

    pub fn from_config(rng: R, cfg: &Config) -> Self {
        Self {
            len: cfg.puid_len.max(1),
            ..Self::new(rng)
        }
    }

    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    pub fn issued(&self) -> u64 {
        self.counter
    }

    pub fn puid(&mut self) -> String {
        let stamp = (self.clock)().wrapping_add(self.counter);
        self.counter += 1;
        let noise = (self.rng.gen_range(0.0..1.0) * 1e14) as u64;

        let mut id = num_to_string(stamp);
        id.push_str(&num_to_string(noise));
        id.chars().take(self.len).collect()
    }
}

impl Default for IdGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl IdGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

/// Insecure, stable hash of `s` rendered in base 62.
///
/// Mixes UTF-16 code units as `h = int32(h << 5) - h + c`, the classic
/// Java-style string hash. Empty input hashes to "".
pub fn hash_code(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let mut hash: i64 = 0;
    for unit in s.encode_utf16() {
        let shifted = (hash as i32).wrapping_shl(5) as i64;
        hash = shifted.wrapping_sub(hash).wrapping_add(unit as i64);
    }
    num_to_string(hash.unsigned_abs())
}
