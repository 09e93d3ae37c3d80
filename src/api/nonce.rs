//! Nonce generation for signed requests.
//!
//! The exchange treats the nonce as a strictly increasing replay guard: a
//! request whose nonce is not greater than the last accepted one is
//! rejected. The default source derives nonces from the wall clock in
//! microseconds and bumps past the previous value whenever two calls land
//! in the same microsecond, so concurrent callers sharing one client never
//! collide or go backwards.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Width of the nonce field, the exchange's `%16.0f` convention.
/// Epoch microseconds fill all 16 digits until the year 2286, so the
/// left space-padding never appears in practice.
const NONCE_WIDTH: usize = 16;

/// Source of strictly increasing nonce strings.
///
/// Injectable on [`BitcoinDeClient`](super::BitcoinDeClient) so tests can
/// pin signatures deterministically.
pub trait NonceSource: Send + Sync {
    /// Next nonce, formatted as a 16-character decimal string.
    fn next_nonce(&self) -> String;
}

fn format_nonce(value: i64) -> String {
    format!("{value:width$}", width = NONCE_WIDTH)
}

/// Wall-clock nonce source: microseconds since the Unix epoch.
#[derive(Debug, Default)]
pub struct ClockNonce {
    last: AtomicI64,
}

impl NonceSource for ClockNonce {
    fn next_nonce(&self) -> String {
        let now = Utc::now().timestamp_micros();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, next, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return format_nonce(next),
                Err(observed) => last = observed,
            }
        }
    }
}

/// Deterministic nonce source counting up from a seed.
#[derive(Debug)]
pub struct CounterNonce {
    next: AtomicI64,
}

impl CounterNonce {
    pub fn starting_at(seed: i64) -> Self {
        Self {
            next: AtomicI64::new(seed),
        }
    }
}

impl NonceSource for CounterNonce {
    fn next_nonce(&self) -> String {
        format_nonce(self.next.fetch_add(1, Ordering::SeqCst))
    }
}
