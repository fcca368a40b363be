//! Thought engine - turns health changes into granted and retracted memories.
//!
//! Each entry point handles exactly one event against one character:
//!
//! 1. **Classify**: missing part, replacement device, or unrelated
//! 2. **Count**: live ledger count for the part category
//! 3. **Resolve**: catalog identifier, then the registered definition
//! 4. **Retract**: every stale identifier of the category's family
//! 5. **Commit**: create, adjust and grant the new memory
//!
//! Every way an event can fail is checked before step 4, so a dropped event
//! never leaves the memory store half-updated.

use health_model::{
    Character, EntityId, HealthCondition, HealthListener, Memory, MemoryStore, ThoughtRegistry,
};
use serde::{Deserialize, Serialize};

use crate::adjuster::MagnitudeAdjuster;
use crate::catalog::{CatalogEntry, EventKind, MemoryCatalog};
use crate::classifier::{classify_part, classify_replacement, PartCategory, ReplacementTier};
use crate::config::EngineConfig;
use crate::error::{Result, ThoughtError};
use crate::ledger::ConditionLedger;

/// A memory granted to a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRequest {
    pub def_name: String,
    pub stage: usize,
    pub target: EntityId,
}

/// Grants and retracts limb thoughts in response to health changes.
#[derive(Debug, Clone)]
pub struct ThoughtEngine<R> {
    registry: R,
    catalog: MemoryCatalog,
    adjuster: MagnitudeAdjuster,
    config: EngineConfig,
}

impl<R: ThoughtRegistry> ThoughtEngine<R> {
    /// Create an engine with default configuration.
    pub fn new(registry: R) -> Self {
        Self::with_config(registry, EngineConfig::default())
    }

    /// Create an engine with the given configuration.
    pub fn with_config(registry: R, config: EngineConfig) -> Self {
        Self {
            registry,
            catalog: MemoryCatalog::new(config.thought_prefix.clone()),
            adjuster: MagnitudeAdjuster::new(config.mood.clone()),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &MemoryCatalog {
        &self.catalog
    }

    /// Catalog identifiers the registry does not know.
    pub fn missing_defs(&self) -> Vec<String> {
        self.catalog
            .all_def_names()
            .into_iter()
            .filter(|name| self.registry.thought_def(name).is_none())
            .collect()
    }

    /// Handle a condition that has just been added to the character's record.
    pub fn handle_condition_added(
        &self,
        character: &mut Character,
        condition: &HealthCondition,
    ) -> Result<Option<MemoryRequest>> {
        if condition.is_missing_part() {
            return self.limb_lost(character, condition);
        }

        let tier = classify_replacement(Some(&condition.def));
        match (condition.part.as_ref(), tier) {
            (Some(_), Some(tier)) => self.replacement_gained(character, condition, tier),
            _ => {
                tracing::debug!(
                    condition = %condition.def.def_name,
                    "ignoring unrelated condition"
                );
                Ok(None)
            }
        }
    }

    /// Handle a condition that has just been removed from the character's record.
    pub fn handle_condition_removed(
        &self,
        character: &mut Character,
        condition: &HealthCondition,
    ) -> Result<Option<MemoryRequest>> {
        if condition.is_missing_part() {
            self.limb_restored(character, condition)?;
            return Ok(None);
        }

        let tier = classify_replacement(Some(&condition.def));
        match (condition.part.as_ref(), tier) {
            (Some(_), Some(tier)) => self.replacement_lost(character, condition, tier),
            _ => {
                tracing::debug!(
                    condition = %condition.def.def_name,
                    "ignoring unrelated condition"
                );
                Ok(None)
            }
        }
    }

    /// Like [`Self::handle_condition_added`], but logs and drops any error.
    pub fn on_condition_added(
        &self,
        character: &mut Character,
        condition: &HealthCondition,
    ) -> Option<MemoryRequest> {
        let id = character.id;
        self.handle_condition_added(character, condition)
            .unwrap_or_else(|e| {
                tracing::warn!(
                    character = %id,
                    condition = %condition.def.def_name,
                    "dropped added condition: {e}"
                );
                None
            })
    }

    /// Like [`Self::handle_condition_removed`], but logs and drops any error.
    pub fn on_condition_removed(
        &self,
        character: &mut Character,
        condition: &HealthCondition,
    ) -> Option<MemoryRequest> {
        let id = character.id;
        self.handle_condition_removed(character, condition)
            .unwrap_or_else(|e| {
                tracing::warn!(
                    character = %id,
                    condition = %condition.def.def_name,
                    "dropped removed condition: {e}"
                );
                None
            })
    }

    fn limb_lost(
        &self,
        character: &mut Character,
        condition: &HealthCondition,
    ) -> Result<Option<MemoryRequest>> {
        let category = part_category(condition)?;
        if category == PartCategory::Other {
            return Ok(None);
        }

        let count = ConditionLedger::new(&character.health).count_missing(category);
        let entry = self.resolve(EventKind::LimbLost, category, None, count)?;
        let stale = self.catalog.loss_family(category);

        self.commit(character, &entry, &stale, self.config.adjust_loss_memories)
            .map(Some)
    }

    fn limb_restored(&self, character: &mut Character, condition: &HealthCondition) -> Result<()> {
        let category = part_category(condition)?;
        if category == PartCategory::Other {
            return Ok(());
        }

        let id = character.id;
        let store = character
            .memories_mut()
            .ok_or(ThoughtError::IncompleteMoodSubsystem(id))?;
        self.retract(store, &self.catalog.loss_family(category));
        Ok(())
    }

    fn replacement_gained(
        &self,
        character: &mut Character,
        condition: &HealthCondition,
        tier: ReplacementTier,
    ) -> Result<Option<MemoryRequest>> {
        let category = classify_part(condition.part.as_ref());
        if category == PartCategory::Other {
            return Ok(None);
        }

        let tier_filter = if self.config.count_replacements_across_tiers {
            None
        } else {
            Some(tier)
        };
        let ledger = ConditionLedger::new(&character.health);
        let count = ledger.count_replacements(category, tier_filter);
        let entry = self.resolve(EventKind::ReplacementGained, category, Some(tier), count)?;
        let stale = self.catalog.full_family(category);

        self.commit(character, &entry, &stale, true).map(Some)
    }

    fn replacement_lost(
        &self,
        character: &mut Character,
        condition: &HealthCondition,
        tier: ReplacementTier,
    ) -> Result<Option<MemoryRequest>> {
        let category = classify_part(condition.part.as_ref());
        if category == PartCategory::Other {
            return Ok(None);
        }

        let entry = self.resolve(EventKind::ReplacementLost, category, Some(tier), 1)?;
        let stale = self.catalog.replacement_family(category);

        self.commit(character, &entry, &stale, true).map(Some)
    }

    fn resolve(
        &self,
        kind: EventKind,
        category: PartCategory,
        tier: Option<ReplacementTier>,
        count: usize,
    ) -> Result<CatalogEntry> {
        self.catalog
            .resolve(kind, category, tier, count)
            .ok_or(ThoughtError::UnrecognizedCombination {
                kind,
                category,
                tier,
            })
    }

    /// Retract `stale` and grant the memory for `entry`.
    fn commit(
        &self,
        character: &mut Character,
        entry: &CatalogEntry,
        stale: &[String],
        adjust: bool,
    ) -> Result<MemoryRequest> {
        let def = self
            .registry
            .thought_def(&entry.def_name)
            .ok_or_else(|| ThoughtError::UnknownThoughtDef(entry.def_name.clone()))?;
        let mut memory = Memory::from_def(def, entry.stage)?;

        if adjust {
            self.adjuster.apply_all(character, &mut memory);
        }

        let id = character.id;
        let factor = memory.mood_power_factor;
        let store = character
            .memories_mut()
            .ok_or(ThoughtError::IncompleteMoodSubsystem(id))?;

        self.retract(store, stale);
        store.try_gain_memory(memory);

        tracing::info!(
            character = %id,
            thought = %entry.def_name,
            stage = entry.stage,
            factor,
            "granted thought"
        );

        Ok(MemoryRequest {
            def_name: entry.def_name.clone(),
            stage: entry.stage,
            target: id,
        })
    }

    fn retract(&self, store: &mut MemoryStore, family: &[String]) {
        let mut removed = 0;
        for def_name in family {
            if self.registry.thought_def(def_name).is_none() {
                tracing::debug!(thought = %def_name, "skipping retraction of unregistered thought");
                continue;
            }
            removed += store.remove_memories_of_def(def_name);
        }
        tracing::debug!(removed, "retracted stale thoughts");
    }
}

impl<R: ThoughtRegistry> HealthListener for ThoughtEngine<R> {
    fn on_condition_added(&self, character: &mut Character, condition: &HealthCondition) {
        ThoughtEngine::on_condition_added(self, character, condition);
    }

    fn on_condition_removed(&self, character: &mut Character, condition: &HealthCondition) {
        ThoughtEngine::on_condition_removed(self, character, condition);
    }
}

fn part_category(condition: &HealthCondition) -> Result<PartCategory> {
    let part = condition
        .part
        .as_ref()
        .ok_or(ThoughtError::MissingReference("missing-part condition without a body part"))?;
    Ok(classify_part(Some(part)))
}
