/// Length of a regulation game in minutes
pub const REGULATION_MINUTES: f64 = 40.0;

/// Length of one half in minutes
pub const HALF_MINUTES: f64 = 20.0;

/// League-average combined first-half total
pub const AVG_FIRST_HALF_TOTAL: f64 = 70.0;

/// Inflation applied to the raw pace extrapolation
pub const PACE_INFLATION: f64 = 1.05;

/// Weight on the observed deviation from average pace in the halftime model
pub const HALF_DELTA_WEIGHT: f64 = 1.15;

/// Dampening applied when the teams still hold most of their timeouts
pub const TIMEOUT_FATIGUE_FACTOR: f64 = 0.98;
