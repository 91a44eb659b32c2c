//! Data-driven game balance
//!
//! Every field defaults to the matching constant in [`crate::consts`]; a JSON
//! override only needs the fields it changes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

#[derive(Error, Debug)]
pub enum TuningError {
    #[error("Tuning JSON could not be parsed")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay balance parameters. Durations are in simulation ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Scroll velocity at run start (must be negative)
    pub initial_speed: i32,
    /// Points per ring
    pub ring_score: u64,
    /// Milestones fire on exact multiples of this score
    pub milestone_score: u64,
    /// Speed/multiplier growth per milestone
    pub speed_growth: f64,
    pub obstacle_spawn_ticks: u64,
    pub ring_spawn_ticks: u64,
    /// Safety-net lifetime of a spawned entity
    pub entity_ttl_ticks: u64,
    pub start_countdown_ticks: u64,
    pub jump_velocity: f32,
    pub double_jump_velocity: f32,
    pub spawn_offset_x: f32,
    pub obstacle_ground_offset: f32,
    /// Ring band, measured up from the bottom edge (high >= low)
    pub ring_band_high: f32,
    pub ring_band_low: f32,
    pub background_scroll_per_tick: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_speed: INITIAL_SPEED,
            ring_score: RING_SCORE,
            milestone_score: MILESTONE_SCORE,
            speed_growth: SPEED_GROWTH,
            obstacle_spawn_ticks: OBSTACLE_SPAWN_SECS * TICKS_PER_SECOND,
            ring_spawn_ticks: RING_SPAWN_SECS * TICKS_PER_SECOND,
            entity_ttl_ticks: ENTITY_TTL_SECS * TICKS_PER_SECOND,
            start_countdown_ticks: START_COUNTDOWN_SECS * TICKS_PER_SECOND,
            jump_velocity: JUMP_VELOCITY,
            double_jump_velocity: DOUBLE_JUMP_VELOCITY,
            spawn_offset_x: SPAWN_OFFSET_X,
            obstacle_ground_offset: OBSTACLE_GROUND_OFFSET,
            ring_band_high: RING_BAND_HIGH,
            ring_band_low: RING_BAND_LOW,
            background_scroll_per_tick: BACKGROUND_SCROLL_PER_TICK,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if self.initial_speed >= 0 {
            return Err(TuningError::Invalid {
                field: "initial_speed",
                reason: "world must scroll leftward (negative)",
            });
        }
        if self.ring_score == 0 {
            return Err(TuningError::Invalid {
                field: "ring_score",
                reason: "must be positive",
            });
        }
        if self.milestone_score == 0 {
            return Err(TuningError::Invalid {
                field: "milestone_score",
                reason: "must be positive",
            });
        }
        if !(self.speed_growth >= 1.0) {
            return Err(TuningError::Invalid {
                field: "speed_growth",
                reason: "must be at least 1.0",
            });
        }
        if self.obstacle_spawn_ticks == 0 || self.ring_spawn_ticks == 0 {
            return Err(TuningError::Invalid {
                field: "spawn_ticks",
                reason: "spawn periods must be positive",
            });
        }
        if self.entity_ttl_ticks == 0 {
            return Err(TuningError::Invalid {
                field: "entity_ttl_ticks",
                reason: "must be positive",
            });
        }
        if self.ring_band_high < self.ring_band_low {
            return Err(TuningError::Invalid {
                field: "ring_band_high",
                reason: "must not be below ring_band_low",
            });
        }

        // Milestones are exact multiples; a ring score that does not divide the
        // milestone score can step over some of them.
        if self.milestone_score % self.ring_score != 0 {
            log::warn!(
                "ring_score {} does not divide milestone_score {}; some milestones will be skipped",
                self.ring_score,
                self.milestone_score
            );
        }
        Ok(())
    }
}
