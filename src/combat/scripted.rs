use rand::{Error, RngCore};

/// 2^53: `rand` builds an `f64` in [0, 1) from the top 53 bits of a `u64`.
const UNIT_SCALE: f64 = (1u64 << 53) as f64;

/// A random source that replays a fixed list of unit-interval rolls.
///
/// Each `rng.gen::<f64>()` yields the next roll; the list wraps around when
/// exhausted. Integer draws consume rolls the same way. An empty list behaves
/// like an endless stream of `0.0`.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    rolls: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(rolls: Vec<f64>) -> Self {
        Self { rolls, cursor: 0 }
    }

    /// How many rolls have been consumed so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }

    fn next_roll(&mut self) -> f64 {
        let roll = if self.rolls.is_empty() {
            0.0
        } else {
            self.rolls[self.cursor % self.rolls.len()]
        };
        self.cursor += 1;
        roll.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        ((self.next_roll() * UNIT_SCALE) as u64) << 11
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
