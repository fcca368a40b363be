//! World state - owns characters and notifies health listeners.

use std::collections::HashMap;

use crate::entities::{Character, ConditionId, EntityId, HealthCondition};
use crate::error::{ModelError, Result};

/// Receives health changes after they have been committed.
///
/// `on_condition_added` is called once the condition is in the character's
/// health record; `on_condition_removed` once it is gone. Implementations must
/// not fail: the mutation has already happened.
pub trait HealthListener {
    fn on_condition_added(&self, character: &mut Character, condition: &HealthCondition);

    fn on_condition_removed(&self, character: &mut Character, condition: &HealthCondition);
}

/// The host world: all characters plus the listeners watching their health.
#[derive(Default)]
pub struct WorldState {
    /// All characters in the world.
    pub characters: HashMap<EntityId, Character>,

    listeners: Vec<Box<dyn HealthListener>>,
}

impl WorldState {
    /// Create a new empty world state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for health changes.
    pub fn subscribe(&mut self, listener: impl HealthListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Add a character to the world.
    pub fn add_character(&mut self, character: Character) -> EntityId {
        let id = character.id;
        self.characters.insert(id, character);
        id
    }

    /// Get character by ID.
    pub fn get_character(&self, id: EntityId) -> Option<&Character> {
        self.characters.get(&id)
    }

    /// Get mutable character by ID.
    pub fn get_character_mut(&mut self, id: EntityId) -> Option<&mut Character> {
        self.characters.get_mut(&id)
    }

    /// Apply a condition to a character, then notify listeners.
    pub fn add_condition(
        &mut self,
        character_id: EntityId,
        condition: HealthCondition,
    ) -> Result<ConditionId> {
        let character = self
            .characters
            .get_mut(&character_id)
            .ok_or(ModelError::CharacterNotFound(character_id))?;

        let id = character.health.add(condition.clone());
        for listener in &self.listeners {
            listener.on_condition_added(character, &condition);
        }
        Ok(id)
    }

    /// Remove a condition from a character, then notify listeners.
    pub fn remove_condition(
        &mut self,
        character_id: EntityId,
        condition_id: ConditionId,
    ) -> Result<HealthCondition> {
        let character = self
            .characters
            .get_mut(&character_id)
            .ok_or(ModelError::CharacterNotFound(character_id))?;

        let condition = character
            .health
            .remove(condition_id)
            .ok_or(ModelError::ConditionNotFound {
                character: character_id,
                condition: condition_id,
            })?;

        for listener in &self.listeners {
            listener.on_condition_removed(character, &condition);
        }
        Ok(condition)
    }
}
