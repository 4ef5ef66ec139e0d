use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::REGULATION_MINUTES;

/// Snapshot of a live game used as projector input.
///
/// Fouls are carried for parity with the scoreboard feed; the current
/// heuristics do not read them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Team A points
    pub score_a: u32,

    /// Team B points
    pub score_b: u32,

    /// Minutes remaining in the current half
    pub time_left: f64,

    /// Team A fouls committed (reserved)
    pub fouls_a: u32,

    /// Team B fouls committed (reserved)
    pub fouls_b: u32,

    /// Team A is in the foul-shooting bonus
    pub bonus_a: bool,

    /// Team B is in the foul-shooting bonus
    pub bonus_b: bool,

    /// Team A timeouts remaining (0-5)
    pub timeouts_a: u8,

    /// Team B timeouts remaining (0-5)
    pub timeouts_b: u8,

    /// Team A tournament seed (1-16)
    pub seed_a: u8,

    /// Team B tournament seed (1-16)
    pub seed_b: u8,

    /// Tournament round, 1 (first round) through 6 (championship)
    pub round: u8,
}

impl Default for GameState {
    /// Matches the entry form's initial values.
    fn default() -> Self {
        GameState {
            score_a: 50,
            score_b: 50,
            time_left: 20.0,
            fouls_a: 5,
            fouls_b: 5,
            bonus_a: false,
            bonus_b: false,
            timeouts_a: 3,
            timeouts_b: 3,
            seed_a: 1,
            seed_b: 16,
            round: 1,
        }
    }
}

/// Out-of-range game state, rejected before projection.
#[derive(Debug, Error, PartialEq)]
pub enum StateError {
    #[error("game clock must be at least 0 and under 40 minutes, got {0}")]
    ClockOutOfRange(f64),

    #[error("timeouts must be between 0 and 5, got {0}")]
    TimeoutsOutOfRange(u8),

    #[error("seed must be between 1 and 16, got {0}")]
    SeedOutOfRange(u8),

    #[error("round must be between 1 and 6, got {0}")]
    RoundOutOfRange(u8),
}

impl GameState {
    /// Combined score of both teams.
    pub fn current_total(&self) -> u32 {
        self.score_a + self.score_b
    }

    /// Absolute point margin.
    pub fn margin(&self) -> u32 {
        self.score_a.abs_diff(self.score_b)
    }

    /// Absolute seed difference.
    pub fn seed_diff(&self) -> u8 {
        self.seed_a.abs_diff(self.seed_b)
    }

    /// Check the bounds the projectors rely on.
    ///
    /// The clock bound doubles as the guard for the pace extrapolation,
    /// which divides by the minutes already played and would divide by
    /// zero at a full 40-minute clock.
    pub fn validate(&self) -> Result<(), StateError> {
        if !self.time_left.is_finite()
            || self.time_left < 0.0
            || self.time_left >= REGULATION_MINUTES
        {
            return Err(StateError::ClockOutOfRange(self.time_left));
        }
        for t in [self.timeouts_a, self.timeouts_b] {
            if t > 5 {
                return Err(StateError::TimeoutsOutOfRange(t));
            }
        }
        for s in [self.seed_a, self.seed_b] {
            if !(1..=16).contains(&s) {
                return Err(StateError::SeedOutOfRange(s));
            }
        }
        if !(1..=6).contains(&self.round) {
            return Err(StateError::RoundOutOfRange(self.round));
        }
        Ok(())
    }
}
