//! Component definitions for characters.

use serde::{Deserialize, Serialize};

use super::{ConditionId, MemoryId};
use crate::defs::ThoughtDef;
use crate::error::{ModelError, Result};
use crate::mechanics::{BodyPartDef, ConditionClass, ConditionDef};

/// A specific body part on a specific character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyPart {
    pub def: BodyPartDef,
    /// Display label, e.g. "left leg".
    pub label: String,
}

impl BodyPart {
    pub fn new(def_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            def: BodyPartDef::new(def_name),
            label: label.into(),
        }
    }
}

/// A health state attached to a character, optionally targeting a part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCondition {
    pub id: ConditionId,
    pub def: ConditionDef,
    pub part: Option<BodyPart>,
}

impl HealthCondition {
    /// Create a condition that targets no specific part.
    pub fn new(def: ConditionDef) -> Self {
        Self {
            id: ConditionId::new(),
            def,
            part: None,
        }
    }

    /// Create a missing-part condition for the given part.
    pub fn missing(part: BodyPart) -> Self {
        Self::new(ConditionDef::missing_part()).on_part(part)
    }

    /// Target a specific body part.
    pub fn on_part(mut self, part: BodyPart) -> Self {
        self.part = Some(part);
        self
    }

    /// Check if the condition records a missing part.
    pub fn is_missing_part(&self) -> bool {
        self.def.class == ConditionClass::MissingPart
    }
}

/// The live set of health conditions on a character.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HealthRecord {
    pub conditions: Vec<HealthCondition>,
}

impl HealthRecord {
    pub fn iter(&self) -> impl Iterator<Item = &HealthCondition> {
        self.conditions.iter()
    }

    pub fn add(&mut self, condition: HealthCondition) -> ConditionId {
        let id = condition.id;
        self.conditions.push(condition);
        id
    }

    pub fn remove(&mut self, id: ConditionId) -> Option<HealthCondition> {
        let index = self.conditions.iter().position(|c| c.id == id)?;
        Some(self.conditions.remove(index))
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// A mood-affecting memory ("thought") held by a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    pub id: MemoryId,
    pub def_name: String,
    pub stage: usize,
    pub base_mood_effect: f32,
    /// Multiplier applied to the base mood effect. Starts at 1.0.
    pub mood_power_factor: f32,
}

impl Memory {
    /// Instantiate a memory of the given definition at the given stage.
    pub fn from_def(def: &ThoughtDef, stage: usize) -> Result<Self> {
        let stage_def = def.stages.get(stage).ok_or_else(|| ModelError::InvalidStage {
            def_name: def.def_name.clone(),
            stage,
            available: def.stages.len(),
        })?;

        Ok(Self {
            id: MemoryId::new(),
            def_name: def.def_name.clone(),
            stage,
            base_mood_effect: stage_def.base_mood_effect,
            mood_power_factor: 1.0,
        })
    }

    /// The effective mood offset of this memory.
    pub fn mood_offset(&self) -> f32 {
        self.base_mood_effect * self.mood_power_factor
    }
}

/// Memories currently held by a character.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MemoryStore {
    memories: Vec<Memory>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a memory to the store.
    ///
    /// Memories do not stack: if one of the same definition is already held it
    /// takes the new stage and factor but keeps its identity. Returns `true`
    /// when a new memory was added.
    pub fn try_gain_memory(&mut self, memory: Memory) -> bool {
        if let Some(index) = self.position_of(&memory.def_name) {
            let existing = &mut self.memories[index];
            existing.stage = memory.stage;
            existing.base_mood_effect = memory.base_mood_effect;
            existing.mood_power_factor = memory.mood_power_factor;
            return false;
        }
        self.memories.push(memory);
        true
    }

    fn position_of(&self, def_name: &str) -> Option<usize> {
        self.memories.iter().position(|m| m.def_name == def_name)
    }

    /// Remove every memory of the given definition.
    ///
    /// Returns how many were removed; removing an absent definition is a no-op.
    pub fn remove_memories_of_def(&mut self, def_name: &str) -> usize {
        let before = self.memories.len();
        self.memories.retain(|m| m.def_name != def_name);
        before - self.memories.len()
    }

    /// Get all memories of a definition.
    pub fn memories_of_def<'a>(&'a self, def_name: &'a str) -> impl Iterator<Item = &'a Memory> {
        self.memories.iter().filter(move |m| m.def_name == def_name)
    }

    /// Check if any memory of the definition is held.
    pub fn has_memory_of_def(&self, def_name: &str) -> bool {
        self.memories.iter().any(|m| m.def_name == def_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Memory> {
        self.memories.iter()
    }

    pub fn len(&self) -> usize {
        self.memories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memories.is_empty()
    }

    /// Total mood offset of all held memories.
    pub fn total_mood_offset(&self) -> f32 {
        self.memories.iter().map(Memory::mood_offset).sum()
    }
}

/// Mood need, holding the memory store.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MoodComponent {
    pub memories: MemoryStore,
}

/// Needs tracker. Animals and mechanoids may lack a mood entirely.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NeedsComponent {
    pub mood: Option<MoodComponent>,
}

impl NeedsComponent {
    /// Needs with an empty mood.
    pub fn with_mood() -> Self {
        Self {
            mood: Some(MoodComponent::default()),
        }
    }
}

/// A character's belief system.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Ideology {
    pub name: String,
    /// Precept definition names, in the order they were adopted.
    pub precepts: Vec<String>,
}

impl Ideology {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            precepts: Vec::new(),
        }
    }

    pub fn with_precept(mut self, precept: impl Into<String>) -> Self {
        self.precepts.push(precept.into());
        self
    }
}

/// Personality traits.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraitSet {
    pub traits: Vec<String>,
}

impl TraitSet {
    pub fn has_trait(&self, def_name: &str) -> bool {
        self.traits.iter().any(|t| t == def_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::ThoughtStage;

    fn lost_arm_def() -> ThoughtDef {
        ThoughtDef::new("LostArm")
            .with_stage(ThoughtStage::new("lost an arm", -10.0))
            .with_stage(ThoughtStage::new("lost both arms", -20.0))
    }

    #[test]
    fn test_memory_from_def() {
        let memory = Memory::from_def(&lost_arm_def(), 1).unwrap();
        assert_eq!(memory.def_name, "LostArm");
        assert_eq!(memory.stage, 1);
        assert_eq!(memory.mood_power_factor, 1.0);
        assert_eq!(memory.mood_offset(), -20.0);
    }

    #[test]
    fn test_memory_invalid_stage() {
        let err = Memory::from_def(&lost_arm_def(), 2).unwrap_err();
        assert!(matches!(err, ModelError::InvalidStage { stage: 2, .. }));
        assert!(err.to_string().ends_with("(stages: 2)"));
    }

    #[test]
    fn test_memory_store_does_not_stack() {
        let def = lost_arm_def();
        let mut store = MemoryStore::new();
        assert!(store.try_gain_memory(Memory::from_def(&def, 0).unwrap()));
        let id = store.iter().next().unwrap().id;

        assert!(!store.try_gain_memory(Memory::from_def(&def, 1).unwrap()));
        assert_eq!(store.len(), 1);

        let held = store.memories_of_def("LostArm").next().unwrap();
        assert_eq!(held.id, id);
        assert_eq!(held.stage, 1);
    }

    #[test]
    fn test_memory_store_remove_by_def() {
        let mut store = MemoryStore::new();
        store.try_gain_memory(Memory::from_def(&lost_arm_def(), 0).unwrap());
        let other = ThoughtDef::new("LostLeg").with_stage(ThoughtStage::new("lost a leg", -10.0));
        store.try_gain_memory(Memory::from_def(&other, 0).unwrap());

        assert_eq!(store.remove_memories_of_def("LostArm"), 1);
        assert!(!store.has_memory_of_def("LostArm"));
        assert!(store.has_memory_of_def("LostLeg"));
        assert_eq!(store.remove_memories_of_def("LostArm"), 0);
        assert_eq!(store.total_mood_offset(), -10.0);
    }

    #[test]
    fn test_mood_offset_uses_factor() {
        let mut memory = Memory::from_def(&lost_arm_def(), 0).unwrap();
        memory.mood_power_factor = 1.5;
        assert_eq!(memory.mood_offset(), -15.0);
    }

    #[test]
    fn test_health_record_add_remove() {
        let mut record = HealthRecord::default();
        let id = record.add(HealthCondition::missing(BodyPart::new("Leg", "left leg")));
        assert_eq!(record.len(), 1);
        assert!(record.iter().all(HealthCondition::is_missing_part));

        let removed = record.remove(id).unwrap();
        assert_eq!(removed.part.unwrap().label, "left leg");
        assert!(record.remove(id).is_none());
        assert!(record.is_empty());
    }

    #[test]
    fn test_trait_set() {
        let traits = TraitSet {
            traits: vec!["BodyPurist".to_string()],
        };
        assert!(traits.has_trait("BodyPurist"));
        assert!(!traits.has_trait("BodyModder"));
    }
}
