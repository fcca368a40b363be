//! Classification of body parts and replacement devices.

use health_model::{BodyPart, ConditionDef};
use serde::{Deserialize, Serialize};

/// Substrings marking a definition name as a replacement device.
const REPLACEMENT_KEYWORDS: [&str; 4] = ["Prosthetic", "Bionic", "SimpleProsthetic", "Archotech"];

/// Which family of body part a condition concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartCategory {
    FingerOrToe,
    Arm,
    Leg,
    Other,
}

/// Quality tier of a replacement device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReplacementTier {
    Basic,
    Bionic,
    Archotech,
}

/// Classify a body part.
///
/// Finger and toe matching takes priority over the canonical arm and leg
/// definitions. A missing part is reported and classified as `Other`.
pub fn classify_part(part: Option<&BodyPart>) -> PartCategory {
    let Some(part) = part else {
        tracing::warn!("cannot classify a missing body part");
        return PartCategory::Other;
    };

    let def_name = part.def.def_name.as_str();
    if def_name.contains("Finger") || def_name.contains("Toe") {
        PartCategory::FingerOrToe
    } else if part.def.is_arm() {
        PartCategory::Arm
    } else if part.def.is_leg() {
        PartCategory::Leg
    } else {
        PartCategory::Other
    }
}

/// Classify a condition definition as a replacement device and find its tier.
///
/// A definition is a replacement if its name contains a replacement keyword or
/// it carries any capability marker.
pub fn classify_replacement(def: Option<&ConditionDef>) -> Option<ReplacementTier> {
    let def = def?;
    let name = def.def_name.as_str();

    let keyword = REPLACEMENT_KEYWORDS.iter().any(|k| name.contains(k));
    if !keyword && !def.has_capabilities() {
        return None;
    }

    Some(if name.contains("Archotech") {
        ReplacementTier::Archotech
    } else if name.contains("Bionic") {
        ReplacementTier::Bionic
    } else {
        ReplacementTier::Basic
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_model::{CapabilityMarker, ConditionClass};

    fn category(def_name: &str) -> PartCategory {
        classify_part(Some(&BodyPart::new(def_name, def_name.to_lowercase())))
    }

    fn added(def_name: &str) -> ConditionDef {
        ConditionDef::new(def_name, ConditionClass::AddedPart)
    }

    fn tier(def_name: &str) -> Option<ReplacementTier> {
        classify_replacement(Some(&added(def_name)))
    }

    #[test]
    fn test_fingers_and_toes() {
        for name in ["Finger", "Toe", "LeftPinkyFinger", "BigToe"] {
            assert_eq!(category(name), PartCategory::FingerOrToe, "{name}");
        }
    }

    #[test]
    fn test_arms_and_legs() {
        assert_eq!(category("Arm"), PartCategory::Arm);
        assert_eq!(category("Leg"), PartCategory::Leg);
    }

    #[test]
    fn test_other_parts() {
        for name in ["Shoulder", "Hand", "Foot", "Jaw", "arm", "finger"] {
            assert_eq!(category(name), PartCategory::Other, "{name}");
        }
        assert_eq!(category("LegBone"), PartCategory::Other);
        assert_eq!(classify_part(None), PartCategory::Other);
    }

    #[test]
    fn test_keyword_tiers() {
        assert_eq!(tier("SimpleProstheticArm"), Some(ReplacementTier::Basic));
        assert_eq!(tier("ProstheticLeg"), Some(ReplacementTier::Basic));
        assert_eq!(tier("BionicArm"), Some(ReplacementTier::Bionic));
        assert_eq!(tier("ArchotechLeg"), Some(ReplacementTier::Archotech));
    }

    #[test]
    fn test_archotech_wins_over_other_keywords() {
        for name in [
            "ArchotechBionicArm",
            "BionicArchotech",
            "ProstheticArchotechFinger",
        ] {
            assert_eq!(tier(name), Some(ReplacementTier::Archotech), "{name}");
        }
    }

    #[test]
    fn test_capability_markers_alone_qualify() {
        let basic = Some(ReplacementTier::Basic);
        let claw = added("PowerClaw").with_capability(CapabilityMarker::GrantsAbility);
        assert_eq!(classify_replacement(Some(&claw)), basic);

        // The host class plays no part: a tended injury qualifies too.
        let cut = ConditionDef::new("Cut", ConditionClass::Injury)
            .with_capability(CapabilityMarker::TendDuration);
        assert_eq!(classify_replacement(Some(&cut)), basic);
    }

    #[test]
    fn test_not_a_replacement() {
        assert_eq!(tier("Cut"), None);
        let missing = ConditionDef::missing_part();
        assert_eq!(classify_replacement(Some(&missing)), None);
        assert_eq!(classify_replacement(None), None);
    }
}
