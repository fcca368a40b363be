//! Character definitions.

use serde::{Deserialize, Serialize};

use super::{EntityId, HealthRecord, Ideology, MemoryStore, NeedsComponent, TraitSet};

/// A character with the sub-records the thought engine reads and writes.
///
/// Every sub-record except the health record is optional: a character without
/// needs has no mood and therefore no memories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: EntityId,
    pub name: String,

    pub health: HealthRecord,
    pub needs: Option<NeedsComponent>,
    pub ideology: Option<Ideology>,
    pub traits: Option<TraitSet>,
}

impl Character {
    /// Create a new character with the given name and an empty mood.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            health: HealthRecord::default(),
            needs: Some(NeedsComponent::with_mood()),
            ideology: None,
            traits: None,
        }
    }

    /// Create a character without needs (no mood, no memories).
    pub fn without_needs(name: impl Into<String>) -> Self {
        Self {
            needs: None,
            ..Self::new(name)
        }
    }

    /// Set the character's belief system.
    pub fn with_ideology(mut self, ideology: Ideology) -> Self {
        self.ideology = Some(ideology);
        self
    }

    /// Add a personality trait.
    pub fn with_trait(mut self, def_name: impl Into<String>) -> Self {
        self.traits
            .get_or_insert_with(TraitSet::default)
            .traits
            .push(def_name.into());
        self
    }

    /// The memory store, if the character has a mood.
    pub fn memories(&self) -> Option<&MemoryStore> {
        let mood = self.needs.as_ref()?.mood.as_ref()?;
        Some(&mood.memories)
    }

    /// Mutable memory store, if the character has a mood.
    pub fn memories_mut(&mut self) -> Option<&mut MemoryStore> {
        let mood = self.needs.as_mut()?.mood.as_mut()?;
        Some(&mut mood.memories)
    }

    /// Check if the character carries a trait.
    pub fn has_trait(&self, def_name: &str) -> bool {
        self.traits.as_ref().is_some_and(|t| t.has_trait(def_name))
    }
}
