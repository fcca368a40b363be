//! Live counts over a character's health record.

use health_model::{HealthCondition, HealthRecord};

use crate::classifier::{classify_part, classify_replacement, PartCategory, ReplacementTier};

/// Read-only view over a health record. Nothing is cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct ConditionLedger<'a> {
    record: &'a HealthRecord,
}

impl<'a> ConditionLedger<'a> {
    pub fn new(record: &'a HealthRecord) -> Self {
        Self { record }
    }

    /// Number of missing parts of the given category.
    pub fn count_missing(&self, category: PartCategory) -> usize {
        self.record
            .iter()
            .filter(|c| c.is_missing_part() && category_of(c) == Some(category))
            .count()
    }

    /// Number of installed replacements of the given category.
    ///
    /// `tier = None` counts every tier.
    pub fn count_replacements(
        &self,
        category: PartCategory,
        tier: Option<ReplacementTier>,
    ) -> usize {
        self.record
            .iter()
            .filter(|c| !c.is_missing_part() && category_of(c) == Some(category))
            .filter_map(|c| classify_replacement(Some(&c.def)))
            .filter(|found| tier.map_or(true, |wanted| *found == wanted))
            .count()
    }
}

// Conditions without a part are never counted; classifying them would only
// produce a diagnostic.
fn category_of(condition: &HealthCondition) -> Option<PartCategory> {
    let part = condition.part.as_ref()?;
    Some(classify_part(Some(part)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_model::{BodyPart, ConditionClass, ConditionDef};

    fn replacement(def_name: &str, part: BodyPart) -> HealthCondition {
        HealthCondition::new(ConditionDef::new(def_name, ConditionClass::AddedPart)).on_part(part)
    }

    fn record(conditions: Vec<HealthCondition>) -> HealthRecord {
        HealthRecord { conditions }
    }

    #[test]
    fn test_count_missing() {
        let record = record(vec![
            HealthCondition::missing(BodyPart::new("Leg", "left leg")),
            HealthCondition::missing(BodyPart::new("Leg", "right leg")),
            HealthCondition::missing(BodyPart::new("Finger", "left thumb")),
            HealthCondition::missing(BodyPart::new("Toe", "right big toe")),
            HealthCondition::new(ConditionDef::new("Cut", ConditionClass::Injury))
                .on_part(BodyPart::new("Arm", "left arm")),
        ]);
        let ledger = ConditionLedger::new(&record);

        assert_eq!(ledger.count_missing(PartCategory::Leg), 2);
        assert_eq!(ledger.count_missing(PartCategory::FingerOrToe), 2);
        assert_eq!(ledger.count_missing(PartCategory::Arm), 0);
    }

    #[test]
    fn test_count_replacements_by_tier() {
        let record = record(vec![
            replacement("BionicArm", BodyPart::new("Arm", "left arm")),
            replacement("SimpleProstheticArm", BodyPart::new("Arm", "right arm")),
            replacement("BionicLeg", BodyPart::new("Leg", "left leg")),
            HealthCondition::missing(BodyPart::new("Arm", "third arm")),
        ]);
        let ledger = ConditionLedger::new(&record);

        let bionic = Some(ReplacementTier::Bionic);
        let archotech = Some(ReplacementTier::Archotech);

        assert_eq!(ledger.count_replacements(PartCategory::Arm, None), 2);
        assert_eq!(ledger.count_replacements(PartCategory::Arm, bionic), 1);
        assert_eq!(ledger.count_replacements(PartCategory::Arm, archotech), 0);
        assert_eq!(ledger.count_replacements(PartCategory::Leg, None), 1);
    }

    #[test]
    fn test_partless_conditions_ignored() {
        let heart = ConditionDef::new("BionicHeart", ConditionClass::AddedPart);
        let record = record(vec![HealthCondition::new(heart)]);
        let ledger = ConditionLedger::new(&record);
        assert_eq!(ledger.count_replacements(PartCategory::Other, None), 0);
    }

    #[test]
    fn test_counts_follow_live_record() {
        let mut record = record(vec![]);
        let id = record.add(HealthCondition::missing(BodyPart::new("Arm", "left arm")));
        let arms = ConditionLedger::new(&record).count_missing(PartCategory::Arm);
        assert_eq!(arms, 1);

        record.remove(id);
        let arms = ConditionLedger::new(&record).count_missing(PartCategory::Arm);
        assert_eq!(arms, 0);
    }
}
