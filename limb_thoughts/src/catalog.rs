//! Memory catalog - the single source of truth for thought identifiers.
//!
//! Multiplicity is encoded as distinct plural identifiers ("lost both arms")
//! rather than as stages of one identifier, so every entry resolves to stage 0.

use serde::{Deserialize, Serialize};

use crate::classifier::{PartCategory, ReplacementTier};

/// What happened to the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    LimbLost,
    ReplacementGained,
    /// A replacement was removed because the natural part grew back.
    ReplacementLost,
}

/// A resolved thought identifier and severity stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub def_name: String,
    pub stage: usize,
}

const LOST_FINGER_TOE: [&str; 2] = ["ColonistLostFingerToe", "ColonistLostMultipleFingersToes"];
const LOST_ARM: [&str; 2] = ["ColonistLostArm", "ColonistLostBothArms"];
const LOST_LEG: [&str; 2] = ["ColonistLostLeg", "ColonistLostBothLegs"];

const GOT_FINGER_TOE: [&str; 3] = [
    "ColonistGotProstheticFingerToe",
    "ColonistGotMultipleProstheticFingersToes",
    "ColonistGotArchotechFingerToe",
];
const GOT_ARM: [&str; 6] = [
    "ColonistGotProstheticArm",
    "ColonistGotBothProstheticArms",
    "ColonistGotBionicArm",
    "ColonistGotBothBionicArms",
    "ColonistGotArchotechArm",
    "ColonistGotBothArchotechArms",
];
const GOT_LEG: [&str; 6] = [
    "ColonistGotProstheticLeg",
    "ColonistGotBothProstheticLegs",
    "ColonistGotBionicLeg",
    "ColonistGotBothBionicLegs",
    "ColonistGotArchotechLeg",
    "ColonistGotBothArchotechLegs",
];

const GREW_BACK: [&str; 3] = [
    "LimbGrewBackFingerToe",
    "LimbGrewBackArm",
    "LimbGrewBackLeg",
];

const CATEGORIES: [PartCategory; 3] = [
    PartCategory::FingerOrToe,
    PartCategory::Arm,
    PartCategory::Leg,
];

/// Maps events on body parts to thought identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryCatalog {
    prefix: String,
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new("IMissMyLimb_")
    }
}

impl MemoryCatalog {
    /// Create a catalog whose identifiers all start with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Resolve the thought for an event.
    ///
    /// `count` is the live number of affected parts of the category, including
    /// the one this event concerns. Returns `None` for combinations with no
    /// thought, e.g. any event on an `Other` part.
    pub fn resolve(
        &self,
        kind: EventKind,
        category: PartCategory,
        tier: Option<ReplacementTier>,
        count: usize,
    ) -> Option<CatalogEntry> {
        let plural = count > 1;
        let suffix = match kind {
            EventKind::LimbLost => {
                let [single, multiple] = lost_pair(category)?;
                if plural {
                    multiple
                } else {
                    single
                }
            }
            EventKind::ReplacementGained => gained(category, tier?, plural)?,
            EventKind::ReplacementLost => grew_back(category)?,
        };

        Some(CatalogEntry {
            def_name: self.name(suffix),
            stage: 0,
        })
    }

    /// Limb-loss identifiers of a category.
    pub fn loss_family(&self, category: PartCategory) -> Vec<String> {
        lost_pair(category)
            .into_iter()
            .flatten()
            .map(|s| self.name(s))
            .collect()
    }

    /// Replacement identifiers of a category, across all tiers.
    pub fn replacement_family(&self, category: PartCategory) -> Vec<String> {
        let suffixes: &[&str] = match category {
            PartCategory::FingerOrToe => &GOT_FINGER_TOE,
            PartCategory::Arm => &GOT_ARM,
            PartCategory::Leg => &GOT_LEG,
            PartCategory::Other => &[],
        };
        suffixes.iter().map(|s| self.name(s)).collect()
    }

    /// Loss and replacement identifiers of a category.
    pub fn full_family(&self, category: PartCategory) -> Vec<String> {
        let mut family = self.loss_family(category);
        family.extend(self.replacement_family(category));
        family
    }

    /// Every identifier this catalog can produce.
    ///
    /// Hosts can check their definition database against this list up front.
    pub fn all_def_names(&self) -> Vec<String> {
        let mut names: Vec<String> = CATEGORIES
            .iter()
            .flat_map(|c| self.full_family(*c))
            .collect();
        names.extend(GREW_BACK.iter().map(|s| self.name(s)));
        names
    }

    fn name(&self, suffix: &str) -> String {
        format!("{}{}", self.prefix, suffix)
    }
}

fn lost_pair(category: PartCategory) -> Option<[&'static str; 2]> {
    match category {
        PartCategory::FingerOrToe => Some(LOST_FINGER_TOE),
        PartCategory::Arm => Some(LOST_ARM),
        PartCategory::Leg => Some(LOST_LEG),
        PartCategory::Other => None,
    }
}

fn gained(category: PartCategory, tier: ReplacementTier, plural: bool) -> Option<&'static str> {
    let table: &[&'static str] = match category {
        PartCategory::FingerOrToe => {
            // Archotech digits have no plural variant; bionic digits share the
            // prosthetic thought.
            return Some(match (tier, plural) {
                (ReplacementTier::Archotech, _) => GOT_FINGER_TOE[2],
                (_, false) => GOT_FINGER_TOE[0],
                (_, true) => GOT_FINGER_TOE[1],
            });
        }
        PartCategory::Arm => &GOT_ARM,
        PartCategory::Leg => &GOT_LEG,
        PartCategory::Other => return None,
    };

    // Each tier occupies a singular/plural pair in the table.
    let base = match tier {
        ReplacementTier::Basic => 0,
        ReplacementTier::Bionic => 2,
        ReplacementTier::Archotech => 4,
    };
    Some(table[base + usize::from(plural)])
}

fn grew_back(category: PartCategory) -> Option<&'static str> {
    match category {
        PartCategory::FingerOrToe => Some(GREW_BACK[0]),
        PartCategory::Arm => Some(GREW_BACK[1]),
        PartCategory::Leg => Some(GREW_BACK[2]),
        PartCategory::Other => None,
    }
}
