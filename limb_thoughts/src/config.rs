//! Engine configuration.
//!
//! Every field has a default, so a TOML file only needs the keys it changes:
//!
//! ```toml
//! adjust_loss_memories = true
//!
//! [mood]
//! belief_system_active = false
//! ```

use serde::Deserialize;

use crate::error::{Result, ThoughtError};

/// Identifiers and deltas used when adjusting a memory's mood power.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MoodConfig {
    /// Whether belief systems are enabled in the host at all.
    pub belief_system_active: bool,
    pub approved_precept: String,
    pub disapproved_precept: String,
    /// Added per approving precept, subtracted per disapproving one.
    pub precept_delta: f32,
    pub purist_trait: String,
    pub modder_trait: String,
    pub purist_delta: f32,
    pub modder_delta: f32,
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            belief_system_active: true,
            approved_precept: "BodyModification_Approved".to_string(),
            disapproved_precept: "BodyModification_Disapproved".to_string(),
            precept_delta: 0.5,
            purist_trait: "BodyPurist".to_string(),
            modder_trait: "BodyModder".to_string(),
            purist_delta: -1.0,
            modder_delta: 0.5,
        }
    }
}

/// Configuration for the thought engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Prefix shared by every thought definition name.
    pub thought_prefix: String,

    /// Count every installed replacement of a category when choosing the
    /// plural thought, instead of only those of the same tier.
    pub count_replacements_across_tiers: bool,

    /// Apply belief and trait adjustments to limb-loss thoughts too.
    pub adjust_loss_memories: bool,

    pub mood: MoodConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thought_prefix: "IMissMyLimb_".to_string(),
            count_replacements_across_tiers: false,
            adjust_loss_memories: false,
            mood: MoodConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from TOML, filling unspecified keys with defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every delta is a finite number.
    pub fn validate(&self) -> Result<()> {
        let deltas = [
            ("mood.precept_delta", self.mood.precept_delta),
            ("mood.purist_delta", self.mood.purist_delta),
            ("mood.modder_delta", self.mood.modder_delta),
        ];
        for (name, value) in deltas {
            if !value.is_finite() {
                return Err(ThoughtError::Config(format!("{name} must be finite, got {value}")));
            }
        }
        Ok(())
    }
}
