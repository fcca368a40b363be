//! Belief and trait adjustments to a memory's mood power.

use health_model::{Character, Memory};

use crate::config::MoodConfig;

/// Adjusts freshly created memories before they are committed.
#[derive(Debug, Clone)]
pub struct MagnitudeAdjuster {
    config: MoodConfig,
}

impl MagnitudeAdjuster {
    pub fn new(config: MoodConfig) -> Self {
        Self { config }
    }

    /// Apply the character's belief-system stance.
    ///
    /// Every matching precept adjusts the factor again, so an ideology holding
    /// the approving precept twice moves the factor twice.
    pub fn apply_belief_factor(&self, character: &Character, memory: &mut Memory) {
        if !self.config.belief_system_active {
            return;
        }
        let Some(ideology) = character.ideology.as_ref() else {
            return;
        };

        for precept in &ideology.precepts {
            if *precept == self.config.approved_precept {
                memory.mood_power_factor += self.config.precept_delta;
            } else if *precept == self.config.disapproved_precept {
                memory.mood_power_factor -= self.config.precept_delta;
            }
        }
    }

    /// Apply the character's personality traits. The purist trait takes
    /// precedence over the modder trait.
    pub fn apply_trait_factor(&self, character: &Character, memory: &mut Memory) {
        if character.has_trait(&self.config.purist_trait) {
            memory.mood_power_factor += self.config.purist_delta;
        } else if character.has_trait(&self.config.modder_trait) {
            memory.mood_power_factor += self.config.modder_delta;
        }
    }

    /// Apply belief then trait adjustments.
    pub fn apply_all(&self, character: &Character, memory: &mut Memory) {
        self.apply_belief_factor(character, memory);
        self.apply_trait_factor(character, memory);
    }
}

impl Default for MagnitudeAdjuster {
    fn default() -> Self {
        Self::new(MoodConfig::default())
    }
}
