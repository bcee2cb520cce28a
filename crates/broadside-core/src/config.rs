//! Content configuration: play-field size, speeds, intervals and spawn bands.
//!
//! Every field has a default from `constants`, and documents may be partial:
//! missing fields fall back to those defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Position;

/// Inclusive range a spawn coordinate is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnBand {
    pub min: f64,
    pub max: f64,
}

impl SpawnBand {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VesselConfig {
    pub start: Position,
    pub speed: f64,
    pub half_width: f64,
    pub half_height: f64,
}

impl Default for VesselConfig {
    fn default() -> Self {
        Self {
            start: Position::new(VESSEL_START_X, VESSEL_START_Y),
            speed: VESSEL_SPEED,
            half_width: VESSEL_HALF_WIDTH,
            half_height: VESSEL_HALF_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub player_speed: f64,
    pub enemy_speed: f64,
    pub radius: f64,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_PROJECTILE_SPEED,
            enemy_speed: ENEMY_PROJECTILE_SPEED,
            radius: PROJECTILE_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HazardConfig {
    pub interval_ms: u64,
    pub speed: f64,
    pub radius: f64,
    pub band: SpawnBand,
}

impl Default for HazardConfig {
    fn default() -> Self {
        Self {
            interval_ms: HAZARD_INTERVAL_MS,
            speed: HAZARD_SPEED,
            radius: HAZARD_RADIUS,
            band: SpawnBand::new(HAZARD_BAND_MIN_Y, HAZARD_BAND_MAX_Y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub interval_ms: u64,
    pub speed: f64,
    pub spawn_margin: f64,
    /// y band for left/right spawns.
    pub side_band: SpawnBand,
    /// x band for top spawns.
    pub top_band: SpawnBand,
    pub fire_delay_ms: u64,
    pub half_width: f64,
    pub half_height: f64,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            interval_ms: ENEMY_INTERVAL_MS,
            speed: ENEMY_SPEED,
            spawn_margin: ENEMY_SPAWN_MARGIN,
            side_band: SpawnBand::new(ENEMY_SIDE_BAND_MIN, ENEMY_SIDE_BAND_MAX),
            top_band: SpawnBand::new(ENEMY_TOP_BAND_MIN, ENEMY_TOP_BAND_MAX),
            fire_delay_ms: ENEMY_FIRE_DELAY_MS,
            half_width: ENEMY_HALF_WIDTH,
            half_height: ENEMY_HALF_HEIGHT,
        }
    }
}

/// Complete content configuration for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field: FieldConfig,
    pub vessel: VesselConfig,
    pub projectile: ProjectileConfig,
    pub hazard: HazardConfig,
    pub enemy: EnemyConfig,
    /// Persistence key of the high-score record.
    pub high_score_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            vessel: VesselConfig::default(),
            projectile: ProjectileConfig::default(),
            hazard: HazardConfig::default(),
            enemy: EnemyConfig::default(),
            high_score_key: HIGH_SCORE_KEY.to_string(),
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.field.width <= 0.0 || self.field.height <= 0.0 {
            return Err(format!(
                "Play-field must be positive, got {}x{}",
                self.field.width, self.field.height
            ));
        }
        if self.hazard.interval_ms == 0 || self.enemy.interval_ms == 0 {
            return Err("Spawn intervals must be non-zero".into());
        }
        for (name, ms) in [
            ("hazard.interval_ms", self.hazard.interval_ms),
            ("enemy.interval_ms", self.enemy.interval_ms),
            ("enemy.fire_delay_ms", self.enemy.fire_delay_ms),
        ] {
            if ms > MAX_TIMER_MS {
                return Err(format!("{name} is {ms}, limit is {MAX_TIMER_MS}"));
            }
        }
        for (name, band) in [
            ("hazard.band", self.hazard.band),
            ("enemy.side_band", self.enemy.side_band),
            ("enemy.top_band", self.enemy.top_band),
        ] {
            if band.min > band.max {
                return Err(format!(
                    "{name} is inverted: min {} > max {}",
                    band.min, band.max
                ));
            }
        }
        if self.high_score_key.is_empty() {
            return Err("high_score_key must not be empty".into());
        }
        Ok(())
    }
}
