//! Simulation constants and default tuning parameters.
//!
//! Content magnitudes here are only defaults; `GameConfig` carries the
//! values a session actually uses.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Ticks per displayed score point.
pub const SCORE_TICKS_PER_POINT: u64 = 10;

/// Persistence key for the high-score record.
pub const HIGH_SCORE_KEY: &str = "pirateHighscore";

/// Longest accepted timer interval or delay (one day).
pub const MAX_TIMER_MS: u64 = 24 * 60 * 60 * 1000;

/// Convert logical milliseconds to whole ticks, rounding up. Saturates
/// instead of overflowing.
pub const fn ms_to_ticks(ms: u64) -> u64 {
    ms.saturating_mul(TICK_RATE as u64).div_ceil(1000)
}

// --- Play-field ---

pub const FIELD_WIDTH: f64 = 800.0;
pub const FIELD_HEIGHT: f64 = 600.0;

// --- Vessel ---

pub const VESSEL_START_X: f64 = 100.0;
pub const VESSEL_START_Y: f64 = 300.0;

/// Vessel speed per held axis (units/s).
pub const VESSEL_SPEED: f64 = 200.0;

/// Vessel hit box half-extents.
pub const VESSEL_HALF_WIDTH: f64 = 40.0;
pub const VESSEL_HALF_HEIGHT: f64 = 24.0;

// --- Projectiles ---

/// Player projectile speed (units/s).
pub const PLAYER_PROJECTILE_SPEED: f64 = 400.0;

/// Enemy projectile speed (units/s).
pub const ENEMY_PROJECTILE_SPEED: f64 = 200.0;

pub const PROJECTILE_RADIUS: f64 = 6.0;

// --- Hazards ---

pub const HAZARD_INTERVAL_MS: u64 = 2000;

/// Leftward drift speed (units/s).
pub const HAZARD_SPEED: f64 = 200.0;

pub const HAZARD_RADIUS: f64 = 16.0;

/// Vertical spawn band (inclusive).
pub const HAZARD_BAND_MIN_Y: f64 = 100.0;
pub const HAZARD_BAND_MAX_Y: f64 = 550.0;

// --- Enemy vessels ---

pub const ENEMY_INTERVAL_MS: u64 = 4000;

/// Inbound speed (units/s).
pub const ENEMY_SPEED: f64 = 150.0;

/// Distance outside the edge at which enemies appear.
pub const ENEMY_SPAWN_MARGIN: f64 = 50.0;

/// Vertical band for left/right spawns.
pub const ENEMY_SIDE_BAND_MIN: f64 = 100.0;
pub const ENEMY_SIDE_BAND_MAX: f64 = 500.0;

/// Horizontal band for top spawns.
pub const ENEMY_TOP_BAND_MIN: f64 = 100.0;
pub const ENEMY_TOP_BAND_MAX: f64 = 700.0;

/// Delay between spawn and the enemy's single shot.
pub const ENEMY_FIRE_DELAY_MS: u64 = 1000;

pub const ENEMY_HALF_WIDTH: f64 = 40.0;
pub const ENEMY_HALF_HEIGHT: f64 = 24.0;
