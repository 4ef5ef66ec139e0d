//! Totals Core - live tournament over/under projection library.
//!
//! Projects a basketball game's final and halftime combined point totals
//! from a snapshot of live game state. Both projectors are pure functions
//! over an immutable [`GameState`]; input collection and display live in
//! the `live-totals` binary.

pub mod clock;
pub mod constants;
pub mod game_state;
pub mod projection;

pub use clock::parse_clock;
pub use constants::{
    AVG_FIRST_HALF_TOTAL, HALF_DELTA_WEIGHT, HALF_MINUTES, PACE_INFLATION, REGULATION_MINUTES,
    TIMEOUT_FATIGUE_FACTOR,
};
pub use game_state::{GameState, StateError};
pub use projection::{project_final_total, project_halftime_total};
