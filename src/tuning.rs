//! Data-driven game balance
//!
//! Defaults reproduce the stock game. A page may override any field with a
//! JSON block; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

/// Errors raised while loading tuning data
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    /// The tuning block is not valid JSON for [`Tuning`].
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the game cannot run with.
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Hearts needed to fill the meter and trigger the proposal
    pub win_score: u32,
    /// Decline-button activations before it stops running away
    pub escape_cap: u32,
    /// Delay between reaching the win score and showing the proposal (ms)
    pub reveal_delay_ms: f32,
    /// Per-frame heart spawn probability
    pub spawn_chance: f32,
    /// Extra spawn probability on narrow viewports (shorter sessions)
    pub narrow_spawn_boost: f32,
    /// Confetti burst size on wide viewports
    pub confetti_count: usize,
    /// Confetti burst size on narrow viewports
    pub confetti_count_narrow: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            win_score: 15,
            escape_cap: 8,
            reveal_delay_ms: 450.0,
            spawn_chance: 0.02,
            narrow_spawn_boost: 0.008,
            confetti_count: 200,
            confetti_count_narrow: 140,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning block
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every field is usable
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.win_score == 0 {
            return Err(TuningError::Invalid {
                field: "win_score",
                reason: "must be at least 1",
            });
        }
        if !self.reveal_delay_ms.is_finite() || self.reveal_delay_ms < 0.0 {
            return Err(TuningError::Invalid {
                field: "reveal_delay_ms",
                reason: "must be a finite, non-negative number",
            });
        }
        let total_chance = self.spawn_chance + self.narrow_spawn_boost;
        if !(0.0..=1.0).contains(&self.spawn_chance) || !(0.0..=1.0).contains(&total_chance) {
            return Err(TuningError::Invalid {
                field: "spawn_chance",
                reason: "spawn probability must stay within [0, 1]",
            });
        }
        if self.confetti_count == 0 || self.confetti_count_narrow == 0 {
            return Err(TuningError::Invalid {
                field: "confetti_count",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Spawn probability for a viewport
    pub fn spawn_probability(&self, narrow: bool) -> f32 {
        if narrow {
            self.spawn_chance + self.narrow_spawn_boost
        } else {
            self.spawn_chance
        }
    }

    /// Confetti burst size for a viewport
    pub fn confetti_for(&self, narrow: bool) -> usize {
        if narrow {
            self.confetti_count_narrow
        } else {
            self.confetti_count
        }
    }

    /// Load tuning from a `<script id="tuning" type="application/json">` element (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("tuning"))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning (win score {})", tuning.win_score);
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring tuning block: {}", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.win_score, 15);
        assert_eq!(tuning.escape_cap, 8);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "win_score": 5 }"#).unwrap();
        assert_eq!(tuning.win_score, 5);
        assert_eq!(tuning.escape_cap, 8);
        assert_eq!(tuning.confetti_count, 200);
    }

    #[test]
    fn test_rejects_zero_win_score() {
        let err = Tuning::from_json(r#"{ "win_score": 0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "win_score", .. }));
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = Tuning::from_json(r#"{ "spawn_chance": 0.999, "narrow_spawn_boost": 0.5 }"#)
            .unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "spawn_chance", .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ win_score: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_viewport_dependent_values() {
        let tuning = Tuning::default();
        assert!((tuning.spawn_probability(true) - 0.028).abs() < 1e-6);
        assert!((tuning.spawn_probability(false) - 0.02).abs() < 1e-6);
        assert_eq!(tuning.confetti_for(true), 140);
        assert_eq!(tuning.confetti_for(false), 200);
    }
}
