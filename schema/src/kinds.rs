use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

/// The category every creature and move belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Kind {
    Student,
    Teacher,
    Administrator,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Kind::Student => "student",
            Kind::Teacher => "teacher",
            Kind::Administrator => "administrator",
        };
        write!(f, "{}", display_name)
    }
}

/// Damage multiplier class for an attacking kind against a defending kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effectiveness {
    Strong,
    Normal,
    Weak,
}

impl Effectiveness {
    pub fn multiplier(self) -> f64 {
        match self {
            Effectiveness::Strong => 2.0,
            Effectiveness::Normal => 1.0,
            Effectiveness::Weak => 0.5,
        }
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Effectiveness::Strong => "strong",
            Effectiveness::Normal => "normal",
            Effectiveness::Weak => "weak",
        };
        write!(f, "{}", display_name)
    }
}

impl Kind {
    /// Effectiveness of an attack of kind `attacking` against a `defending` creature.
    /// Each kind is strong against one other kind and weak against the remaining one.
    pub fn effectiveness(attacking: Kind, defending: Kind) -> Effectiveness {
        use Kind::*;

        match (attacking, defending) {
            (Student, Administrator) => Effectiveness::Strong,
            (Student, Student) => Effectiveness::Normal,
            (Student, Teacher) => Effectiveness::Weak,

            (Teacher, Student) => Effectiveness::Strong,
            (Teacher, Teacher) => Effectiveness::Normal,
            (Teacher, Administrator) => Effectiveness::Weak,

            (Administrator, Teacher) => Effectiveness::Strong,
            (Administrator, Administrator) => Effectiveness::Normal,
            (Administrator, Student) => Effectiveness::Weak,
        }
    }

    /// Every (attacking, defending, effectiveness) entry, attacker-major.
    pub fn effectiveness_chart() -> Vec<(Kind, Kind, Effectiveness)> {
        Kind::iter()
            .flat_map(|attacking| {
                Kind::iter().map(move |defending| {
                    (attacking, defending, Kind::effectiveness(attacking, defending))
                })
            })
            .collect()
    }
}
