//! Thought definitions and the registry they are looked up in.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;

/// One severity stage of a thought.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThoughtStage {
    pub label: String,
    pub base_mood_effect: f32,
}

impl ThoughtStage {
    pub fn new(label: impl Into<String>, base_mood_effect: f32) -> Self {
        Self {
            label: label.into(),
            base_mood_effect,
        }
    }
}

/// Definition of a mood memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThoughtDef {
    pub def_name: String,
    #[serde(default)]
    pub stages: Vec<ThoughtStage>,
}

impl ThoughtDef {
    pub fn new(def_name: impl Into<String>) -> Self {
        Self {
            def_name: def_name.into(),
            stages: Vec::new(),
        }
    }

    pub fn with_stage(mut self, stage: ThoughtStage) -> Self {
        self.stages.push(stage);
        self
    }
}

/// Lookup of thought definitions by name.
///
/// Unknown names resolve to `None`; callers decide how to report it.
pub trait ThoughtRegistry {
    fn thought_def(&self, def_name: &str) -> Option<&ThoughtDef>;
}

impl<T: ThoughtRegistry + ?Sized> ThoughtRegistry for &T {
    fn thought_def(&self, def_name: &str) -> Option<&ThoughtDef> {
        (**self).thought_def(def_name)
    }
}

#[derive(Debug, Deserialize)]
struct DefFile {
    #[serde(default)]
    thoughts: Vec<ThoughtDef>,
}

/// In-memory thought definition database.
#[derive(Debug, Clone, Default)]
pub struct DefDatabase {
    thoughts: HashMap<String, ThoughtDef>,
}

impl DefDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse definitions from TOML.
    ///
    /// ```toml
    /// [[thoughts]]
    /// def_name = "LostArm"
    ///
    /// [[thoughts.stages]]
    /// label = "lost an arm"
    /// base_mood_effect = -10.0
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: DefFile = toml::from_str(source)?;
        let mut db = Self::new();
        for def in file.thoughts {
            db.insert(def);
        }
        tracing::debug!(count = db.len(), "loaded thought definitions");
        Ok(db)
    }

    /// Insert a definition, replacing any existing one of the same name.
    pub fn insert(&mut self, def: ThoughtDef) {
        if self.thoughts.contains_key(&def.def_name) {
            tracing::debug!(thought = %def.def_name, "replacing thought definition");
        }
        self.thoughts.insert(def.def_name.clone(), def);
    }

    pub fn len(&self) -> usize {
        self.thoughts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thoughts.is_empty()
    }
}

impl ThoughtRegistry for DefDatabase {
    fn thought_def(&self, def_name: &str) -> Option<&ThoughtDef> {
        self.thoughts.get(def_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;

    const DEFS: &str = r#"
        [[thoughts]]
        def_name = "LostArm"

        [[thoughts.stages]]
        label = "lost an arm"
        base_mood_effect = -10.0

        [[thoughts]]
        def_name = "GotBionicArm"

        [[thoughts.stages]]
        label = "got a bionic arm"
        base_mood_effect = 6.0
    "#;

    #[test]
    fn test_load_from_toml() {
        let db = DefDatabase::from_toml_str(DEFS).unwrap();
        assert_eq!(db.len(), 2);

        let def = db.thought_def("LostArm").unwrap();
        assert_eq!(def.stages.len(), 1);
        assert_eq!(def.stages[0].base_mood_effect, -10.0);
        assert!(db.thought_def("LostLeg").is_none());
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let err = DefDatabase::from_toml_str("[[thoughts]]\nstages = 3").unwrap_err();
        assert!(matches!(err, ModelError::DefParse(_)));
    }

    #[test]
    fn test_insert_replaces() {
        let mut db = DefDatabase::new();
        db.insert(ThoughtDef::new("LostArm"));
        db.insert(ThoughtDef::new("LostArm").with_stage(ThoughtStage::new("x", -1.0)));
        assert_eq!(db.len(), 1);
        assert_eq!(db.thought_def("LostArm").unwrap().stages.len(), 1);
    }

    #[test]
    fn test_registry_by_reference() {
        fn lookup<R: ThoughtRegistry>(registry: R) -> bool {
            registry.thought_def("LostArm").is_some()
        }

        let db = DefDatabase::from_toml_str(DEFS).unwrap();
        assert!(lookup(&db));
    }
}
