use crate::creature::Creature;
use schema::{Effectiveness, Kind, MoveData};
use serde::{Deserialize, Serialize};

/// A move owned by one creature, with its own use counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveInst {
    pub name: String,
    pub kind: Kind,
    pub max_uses: u32,
    pub remaining_uses: u32,
    pub power: u32,
    pub accuracy: u32,
}

impl MoveInst {
    /// Create a new move instance with full uses
    pub fn new(name: impl Into<String>, kind: Kind, max_uses: u32, power: u32, accuracy: u32) -> Self {
        MoveInst {
            name: name.into(),
            kind,
            max_uses,
            remaining_uses: max_uses,
            power,
            accuracy,
        }
    }

    pub fn from_data(data: &MoveData) -> Self {
        Self::new(data.name.clone(), data.kind, data.max_uses, data.power, data.accuracy)
    }

    pub fn is_available(&self) -> bool {
        self.remaining_uses > 0
    }

    /// Use the move (decrease remaining uses)
    pub fn use_move(&mut self) -> bool {
        if self.remaining_uses > 0 {
            self.remaining_uses -= 1;
            true
        } else {
            false
        }
    }

    pub fn restore(&mut self) {
        self.remaining_uses = self.max_uses;
    }

    pub fn effectiveness_against(&self, target: &Creature) -> Effectiveness {
        Kind::effectiveness(self.kind, target.kind)
    }

    /// Damage = floor(power * attack / defense * effectiveness).
    pub fn calculate_damage(&self, attacker: &Creature, target: &Creature) -> u32 {
        let multiplier = self.effectiveness_against(target).multiplier();
        let damage = self.power as f64 * attacker.attack as f64 / target.defense as f64 * multiplier;
        damage as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::tests::common::TestCreatureBuilder;
    use rstest::rstest;

    #[rstest]
    #[case(Kind::Teacher, Kind::Student, 40, 30, 20, 120)]
    #[case(Kind::Teacher, Kind::Teacher, 40, 30, 20, 60)]
    #[case(Kind::Teacher, Kind::Administrator, 40, 30, 20, 30)]
    #[case(Kind::Administrator, Kind::Teacher, 50, 30, 20, 150)]
    #[case(Kind::Student, Kind::Teacher, 40, 30, 70, 8)] // 8.57 truncates
    #[case(Kind::Student, Kind::Teacher, 1, 1, 20, 0)]
    fn test_damage_formula(
        #[case] move_kind: Kind,
        #[case] target_kind: Kind,
        #[case] power: u32,
        #[case] attack: u32,
        #[case] defense: u32,
        #[case] expected: u32,
    ) {
        let attacker = TestCreatureBuilder::new("Attacker", Kind::Student)
            .with_attack(attack)
            .build();
        let target = TestCreatureBuilder::new("Target", target_kind)
            .with_defense(defense)
            .build();
        let move_ = MoveInst::new("Test Move", move_kind, 10, power, 100);

        assert_eq!(move_.calculate_damage(&attacker, &target), expected);
    }

    #[test]
    fn test_use_and_restore() {
        let mut move_ = MoveInst::new("Lecture", Kind::Teacher, 2, 40, 100);

        assert!(move_.use_move());
        assert!(move_.use_move());
        assert!(!move_.is_available());
        assert!(!move_.use_move());
        assert_eq!(move_.remaining_uses, 0);

        move_.restore();
        assert_eq!(move_.remaining_uses, 2);
        assert!(move_.is_available());
    }
}
