//! Test helpers

use std::collections::VecDeque;

use rand::RngCore;

/// RNG that replays queued unit values, then repeats a fallback word.
///
/// `rand` builds an `f32` from the top 24 bits of `next_u32`, so a queued
/// unit value `u` comes back from `random::<f32>()` as `u` (to 2^-24).
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    queued: VecDeque<u32>,
    fallback: u32,
}

impl ScriptedRng {
    /// Always rolls 0.0: every bounce is special, serves go to -1 spread
    pub fn zero() -> Self {
        Self {
            queued: VecDeque::new(),
            fallback: 0,
        }
    }

    /// Always rolls just under 1.0: no special bounces
    pub fn max() -> Self {
        Self {
            queued: VecDeque::new(),
            fallback: u32::MAX,
        }
    }

    /// Queue a unit value in `[0, 1)` for the next roll
    pub fn then(mut self, unit: f32) -> Self {
        let bits = (unit.clamp(0.0, 1.0) * (1u32 << 24) as f32) as u32;
        self.queued.push_back(bits.min((1 << 24) - 1) << 8);
        self
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.queued.pop_front().unwrap_or(self.fallback)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32() as u64;
        let hi = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
