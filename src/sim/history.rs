//! Fixed-capacity position history driving the trail
//!
//! Every slot always holds a valid sample: the buffer is filled with the
//! starting position on creation and only ever overwritten afterwards.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::HISTORY_CAPACITY;

/// A recorded position and the session time (seconds) it was taken at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistorySample {
    pub position: Rect,
    pub timestamp: f64,
}

/// Ring buffer of the last `HISTORY_CAPACITY` samples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    samples: [HistorySample; HISTORY_CAPACITY],
    /// Slot the next `record` overwrites
    cursor: usize,
}

impl History {
    /// Create a history with every slot set to `position` at time `now`
    pub fn new(position: Rect, now: f64) -> Self {
        Self {
            samples: [HistorySample {
                position,
                timestamp: now,
            }; HISTORY_CAPACITY],
            cursor: 0,
        }
    }

    /// Reset every slot to `position` at time `now`
    pub fn initialize(&mut self, position: Rect, now: f64) {
        *self = Self::new(position, now);
    }

    /// Overwrite the oldest slot with a new sample
    pub fn record(&mut self, position: Rect, now: f64) {
        self.samples[self.cursor] = HistorySample {
            position,
            timestamp: now,
        };
        self.cursor = (self.cursor + 1) % HISTORY_CAPACITY;
        log::trace!("History sample at t={now:.3} -> {:?}", position.center());
    }

    /// Sample written `age` records ago (0 = most recent). Ages wrap modulo
    /// the capacity.
    pub fn sample_at_age(&self, age: usize) -> &HistorySample {
        &self.samples[slot_for_age(self.cursor, age)]
    }

    pub const fn capacity(&self) -> usize {
        HISTORY_CAPACITY
    }

    /// The most recent sample
    pub fn newest(&self) -> &HistorySample {
        self.sample_at_age(0)
    }

    /// The oldest retained sample
    pub fn oldest(&self) -> &HistorySample {
        self.sample_at_age(HISTORY_CAPACITY - 1)
    }
}

/// Slot index holding the sample `age` writes behind `cursor`
fn slot_for_age(cursor: usize, age: usize) -> usize {
    let n = HISTORY_CAPACITY as i64;
    let raw = cursor as i64 - 1 - (age as i64 % n);
    raw.rem_euclid(n) as usize
}
