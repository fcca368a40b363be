//! Health mechanics: condition classes, capability markers, and the
//! definitions conditions and body parts are instantiated from.

use serde::{Deserialize, Serialize};

/// Canonical body part definition names.
pub const ARM_DEF: &str = "Arm";
pub const LEG_DEF: &str = "Leg";

/// The runtime class a condition definition instantiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionClass {
    /// The targeted part is permanently gone.
    MissingPart,
    /// An artificial part replacing a natural one.
    AddedPart,
    /// An implant installed alongside the natural part.
    Implant,
    Injury,
    Disease,
    Other,
}

/// Capability markers attached to a condition definition.
///
/// Artificial body part devices carry at least one of these in the host's
/// data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapabilityMarker {
    /// Grants the wearer an active ability.
    GrantsAbility,
    /// Disappears after some time.
    DisappearsOverTime,
    /// Heals a fixed amount per day.
    HealsPerDay,
    /// Can be immunized against.
    Immunizable,
    /// Has a tend duration.
    TendDuration,
}

/// Definition a health condition is instantiated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionDef {
    pub def_name: String,
    pub class: ConditionClass,
    #[serde(default)]
    pub capabilities: Vec<CapabilityMarker>,
}

impl ConditionDef {
    /// Create a definition with no capability markers.
    pub fn new(def_name: impl Into<String>, class: ConditionClass) -> Self {
        Self {
            def_name: def_name.into(),
            class,
            capabilities: Vec::new(),
        }
    }

    /// The standard definition for a missing body part.
    pub fn missing_part() -> Self {
        Self::new("MissingBodyPart", ConditionClass::MissingPart)
    }

    /// Attach a capability marker.
    pub fn with_capability(mut self, marker: CapabilityMarker) -> Self {
        self.capabilities.push(marker);
        self
    }

    /// Check if the definition carries any capability marker.
    pub fn has_capabilities(&self) -> bool {
        !self.capabilities.is_empty()
    }
}

/// Definition of a kind of body part ("Arm", "Leg", "Finger", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyPartDef {
    pub def_name: String,
}

impl BodyPartDef {
    pub fn new(def_name: impl Into<String>) -> Self {
        Self {
            def_name: def_name.into(),
        }
    }

    /// Check if this is the canonical arm definition.
    pub fn is_arm(&self) -> bool {
        self.def_name == ARM_DEF
    }

    /// Check if this is the canonical leg definition.
    pub fn is_leg(&self) -> bool {
        self.def_name == LEG_DEF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_limb_defs() {
        assert!(BodyPartDef::new("Arm").is_arm());
        assert!(BodyPartDef::new("Leg").is_leg());
        assert!(!BodyPartDef::new("Shoulder").is_arm());
        assert!(!BodyPartDef::new("leg").is_leg());
    }

    #[test]
    fn test_condition_def_capabilities() {
        let def = ConditionDef::new("PowerClaw", ConditionClass::AddedPart);
        assert!(!def.has_capabilities());

        let def = def.with_capability(CapabilityMarker::GrantsAbility);
        assert!(def.has_capabilities());
        assert_eq!(def.capabilities, vec![CapabilityMarker::GrantsAbility]);
    }

    #[test]
    fn test_missing_part_def() {
        let def = ConditionDef::missing_part();
        assert_eq!(def.class, ConditionClass::MissingPart);
    }
}
