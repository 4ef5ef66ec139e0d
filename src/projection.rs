use crate::constants::{
    AVG_FIRST_HALF_TOTAL, HALF_DELTA_WEIGHT, HALF_MINUTES, PACE_INFLATION, REGULATION_MINUTES,
    TIMEOUT_FATIGUE_FACTOR,
};
use crate::game_state::GameState;

/// Project the final combined score of the game.
///
/// Extrapolates the current scoring pace over the remaining clock, then
/// walks the remaining-points estimate through a fixed sequence of
/// situational adjustments: endgame margin, garbage-time caps, timeout
/// fatigue, seed mismatch, round stage. The foul-shooting bonus factor
/// multiplies the estimate once, at the final combination step. The
/// sequence is order-sensitive.
///
/// Callers must supply `time_left < 40.0`; [`GameState::validate`]
/// enforces this bound, which keeps the pace extrapolation away from its
/// zero denominator.
///
/// # Returns
/// Projected combined final score, rounded to one decimal place
pub fn project_final_total(state: &GameState) -> f64 {
    let current_total = state.current_total() as f64;
    let time_left = state.time_left;

    let mut estimated_remaining =
        (current_total / (REGULATION_MINUTES - time_left)) * time_left * PACE_INFLATION;

    let foul_factor = if state.bonus_a && state.bonus_b {
        1.08
    } else if state.bonus_a || state.bonus_b {
        1.04
    } else {
        1.0
    };

    let margin = state.margin() as f64;
    if time_left < 3.0 {
        if margin <= 5.0 {
            estimated_remaining += 8.0;
        } else if margin > 10.0 {
            estimated_remaining -= 5.0;
        }
    }
    if time_left <= 1.0 {
        // Caps tighten as the blowout grows; the half-minute cap is strictest.
        if margin >= 15.0 {
            estimated_remaining = estimated_remaining.min(4.0);
        }
        if margin >= 20.0 {
            estimated_remaining = estimated_remaining.min(2.0);
        }
        if time_left <= 0.5 && margin >= 15.0 {
            estimated_remaining = estimated_remaining.min(1.0);
        }
    }

    if u32::from(state.timeouts_a) + u32::from(state.timeouts_b) > 3 {
        estimated_remaining *= TIMEOUT_FATIGUE_FACTOR;
    }

    let seed_diff = state.seed_diff();
    if seed_diff >= 7 && time_left < 10.0 {
        estimated_remaining *= 0.90;
    } else if seed_diff <= 3 && time_left < 5.0 {
        estimated_remaining += 5.0;
    }

    if state.round >= 4 {
        estimated_remaining *= 0.92;
    } else if state.round == 1 {
        estimated_remaining *= 1.05;
    }

    round1(current_total + estimated_remaining * foul_factor)
}

/// Project the combined score at halftime.
///
/// Compares the points on the board against a league-average first-half
/// pace and extrapolates the deviation. Fouls, bonus, timeouts, seeds,
/// and round are accepted in the snapshot but have no effect here.
///
/// # Returns
/// Projected combined halftime score, rounded to one decimal place
pub fn project_halftime_total(state: &GameState) -> f64 {
    let current_total = state.current_total() as f64;
    let elapsed = HALF_MINUTES - state.time_left;

    let progress = elapsed / HALF_MINUTES;
    let expected_by_now = AVG_FIRST_HALF_TOTAL * progress;
    let delta = current_total - expected_by_now;

    round1(AVG_FIRST_HALF_TOTAL + delta * HALF_DELTA_WEIGHT)
}

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
