//! Six-roll d20 sequence with the positional curse offsets.
//!
//! The sequencer is pure state: it draws one die per call and never sleeps.
//! The front end drives it from timer ticks so that closing the popup
//! between draws abandons the sequence without reporting anything.

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::RollError;

/// Number of rolls in a full sequence.
pub const SEQUENCE_LEN: usize = 6;

/// Per-position offsets applied to the raw rolls, in roll order.
pub const CURSE_OFFSETS: [i32; SEQUENCE_LEN] = [-10, -8, -6, -4, -2, 0];

/// Apply the curse offsets positionally to six raw rolls. The rolls are
/// taken in roll order, never sorted or reassigned by magnitude.
pub fn apply_curse(raw: &[u32; SEQUENCE_LEN]) -> [i32; SEQUENCE_LEN] {
    let mut adjusted = [0i32; SEQUENCE_LEN];
    for (i, roll) in raw.iter().enumerate() {
        adjusted[i] = *roll as i32 + CURSE_OFFSETS[i];
    }
    adjusted
}

/// Progress of a roll sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    /// No rolls made yet.
    #[default]
    Idle,
    /// Mid-sequence: more draws remain.
    Rolling,
    /// All six rolls made and offsets applied.
    Complete,
}

/// State machine for the animated six-roll sequence.
///
/// `Idle -> Rolling -> Complete`, with re-roll allowed from `Complete`.
/// Results are reported exactly once per completed sequence via
/// [`RollSequencer::take_results`].
#[derive(Debug, Clone, Default)]
pub struct RollSequencer {
    phase: Phase,
    raw: Vec<u32>,
    adjusted: Option<[i32; SEQUENCE_LEN]>,
    reported: bool,
}

impl RollSequencer {
    /// Create a sequencer in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new sequence. Valid from idle or after a completed sequence
    /// (a re-roll discards the previous values first).
    pub fn start(&mut self) -> Result<(), RollError> {
        if self.phase == Phase::Rolling {
            return Err(RollError::SequenceInProgress);
        }
        self.raw.clear();
        self.adjusted = None;
        self.reported = false;
        self.phase = Phase::Rolling;
        Ok(())
    }

    /// Draw the next die: a uniform value in 1..=20. Returns the drawn value,
    /// or `None` when no sequence is in progress. After the sixth draw the
    /// sequence completes and the adjusted results become available.
    pub fn roll_next(&mut self, rng: &mut StdRng) -> Option<u32> {
        if self.phase != Phase::Rolling {
            return None;
        }
        let value = rng.random_range(1..=20);
        self.raw.push(value);
        if self.raw.len() == SEQUENCE_LEN {
            let mut raw = [0u32; SEQUENCE_LEN];
            raw.copy_from_slice(&self.raw);
            self.adjusted = Some(apply_curse(&raw));
            self.phase = Phase::Complete;
        }
        Some(value)
    }

    /// Yield the adjusted results exactly once per completed sequence.
    /// Returns `None` if the sequence is not complete or was already taken.
    pub fn take_results(&mut self) -> Option<[i32; SEQUENCE_LEN]> {
        if self.phase == Phase::Complete && !self.reported {
            self.reported = true;
            self.adjusted
        } else {
            None
        }
    }

    /// Clear all rolled and derived values and return to idle. Not allowed
    /// mid-roll; abandoning a live sequence is done by dropping the popup.
    pub fn reset(&mut self) -> Result<(), RollError> {
        if self.phase == Phase::Rolling {
            return Err(RollError::SequenceInProgress);
        }
        *self = Self::default();
        Ok(())
    }

    /// Raw die values drawn so far, in roll order.
    pub fn raw_rolls(&self) -> &[u32] {
        &self.raw
    }

    /// The most recently drawn value, if any.
    pub fn current_roll(&self) -> Option<u32> {
        self.raw.last().copied()
    }

    /// Adjusted results, available once the sequence is complete.
    pub fn adjusted(&self) -> Option<&[i32; SEQUENCE_LEN]> {
        self.adjusted.as_ref()
    }

    /// True while a sequence is mid-flight.
    pub fn is_rolling(&self) -> bool {
        self.phase == Phase::Rolling
    }

    /// True once all six rolls are made and offsets applied.
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn run_to_completion(seq: &mut RollSequencer, rng: &mut StdRng) {
        seq.start().unwrap();
        while seq.is_rolling() {
            seq.roll_next(rng).unwrap();
        }
    }

    #[test]
    fn curse_is_positional() {
        assert_eq!(apply_curse(&[15, 3, 20, 1, 10, 7]), [5, -5, 14, -3, 8, 7]);
        assert_eq!(apply_curse(&[1, 1, 1, 1, 1, 1]), [-9, -7, -5, -3, -1, 1]);
        assert_eq!(apply_curse(&[20, 20, 20, 20, 20, 20]), [10, 12, 14, 16, 18, 20]);
    }

    #[test]
    fn sequence_yields_six_values_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seq = RollSequencer::new();
        run_to_completion(&mut seq, &mut rng);

        assert_eq!(seq.raw_rolls().len(), SEQUENCE_LEN);
        for roll in seq.raw_rolls() {
            assert!((1..=20).contains(roll));
        }
        let adjusted = seq.take_results().unwrap();
        for value in adjusted {
            assert!((-9..=20).contains(&value));
        }
    }

    #[test]
    fn results_taken_exactly_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seq = RollSequencer::new();
        run_to_completion(&mut seq, &mut rng);

        assert!(seq.take_results().is_some());
        assert!(seq.take_results().is_none());
        // Peeking is still possible for rendering.
        assert!(seq.adjusted().is_some());
    }

    #[test]
    fn no_results_before_sixth_roll() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seq = RollSequencer::new();
        seq.start().unwrap();
        for _ in 0..5 {
            seq.roll_next(&mut rng).unwrap();
        }
        assert!(seq.is_rolling());
        assert!(seq.take_results().is_none());
        assert!(seq.adjusted().is_none());
    }

    #[test]
    fn start_rejected_mid_roll() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seq = RollSequencer::new();
        seq.start().unwrap();
        seq.roll_next(&mut rng).unwrap();
        assert_eq!(seq.start(), Err(RollError::SequenceInProgress));
        assert_eq!(seq.reset(), Err(RollError::SequenceInProgress));
        // The in-flight roll is untouched by the rejected calls.
        assert_eq!(seq.raw_rolls().len(), 1);
    }

    #[test]
    fn reroll_discards_previous_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seq = RollSequencer::new();
        run_to_completion(&mut seq, &mut rng);
        let first = *seq.adjusted().unwrap();

        run_to_completion(&mut seq, &mut rng);
        assert_eq!(seq.raw_rolls().len(), SEQUENCE_LEN);
        // A fresh take is allowed for the new sequence.
        let second = seq.take_results().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn reset_clears_everything() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seq = RollSequencer::new();
        run_to_completion(&mut seq, &mut rng);
        seq.reset().unwrap();

        assert!(!seq.is_rolling());
        assert!(!seq.is_complete());
        assert!(seq.raw_rolls().is_empty());
        assert!(seq.adjusted().is_none());
        assert!(seq.take_results().is_none());
    }

    #[test]
    fn roll_next_is_noop_when_not_rolling() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seq = RollSequencer::new();
        assert_eq!(seq.roll_next(&mut rng), None);
        assert!(seq.raw_rolls().is_empty());
    }

    #[test]
    fn deterministic_with_seed() {
        let mut a = RollSequencer::new();
        let mut b = RollSequencer::new();
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        run_to_completion(&mut a, &mut rng_a);
        run_to_completion(&mut b, &mut rng_b);
        assert_eq!(a.raw_rolls(), b.raw_rolls());
        assert_eq!(a.take_results(), b.take_results());
    }
}
