use crate::interface::EventSink;
use schema::{Effectiveness, Kind};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    Caught,
    Fled,
    WildFainted,
    PlayerFainted,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainerBattleOutcome {
    OpponentDefeated,
    PlayerDefeated,
}

/// Where a caught creature ended up.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchDestination {
    Party,
    Computer,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchRejection {
    NoCaptureDevices,
    TargetFainted,
}

/// Snapshot of a creature for banners and menus.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreatureSummary {
    pub name: String,
    pub kind: Kind,
    pub current_health: u32,
    pub health: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Battle Start
    EncounterStarted {
        wild: CreatureSummary,
    },
    TrainerBattleStarted {
        opponent: String,
        party: Vec<CreatureSummary>,
    },

    // Turn Management
    TurnStarted {
        turn_number: u32,
    },
    CreatureReady {
        owner: String,
        creature: String,
    },
    InvalidChoice {
        prompt: String,
        reply: String,
    },

    // Creature Actions
    CreatureSwitched {
        owner: String,
        creature: String,
    },
    MoveHit {
        attacker: String,
        target: String,
        move_name: String,
        damage: u32,
        effectiveness: Effectiveness,
    },
    MoveMissed {
        attacker: String,
        target: String,
        move_name: String,
    },
    ForcedPass {
        creature: String,
    },

    // Health
    CreatureFainted {
        creature: String,
    },
    CreatureHealed {
        creature: String,
        current_health: u32,
        health: u32,
    },
    CreatureRestored {
        creature: String,
    },

    // Catching and Fleeing
    CatchSucceeded {
        target: String,
        destination: CatchDestination,
    },
    CatchFailed {
        target: String,
    },
    CatchRejected {
        target: String,
        reason: CatchRejection,
    },
    FleeSucceeded,
    FleeFailed,

    // Battle End
    PartyFainted {
        owner: String,
    },
    TrainerDefeated {
        trainer: String,
    },
    EncounterEnded {
        outcome: EncounterOutcome,
    },
    TrainerBattleEnded {
        outcome: TrainerBattleOutcome,
    },
}

impl BattleEvent {
    /// Formats the event into human-readable text.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::EncounterStarted { wild } => Some(format!(
                "You found a {}! (health={})",
                wild.name, wild.current_health
            )),
            BattleEvent::TrainerBattleStarted { opponent, party } => {
                let mut text = format!(
                    "You found {}!\n{} has the following Pokemann:",
                    opponent, opponent
                );
                for member in party {
                    text.push_str(&format!(
                        "\n{} (health={})",
                        member.name, member.current_health
                    ));
                }
                Some(text)
            }

            BattleEvent::TurnStarted { turn_number } => {
                Some(format!("=== Turn {} ===", turn_number))
            }
            BattleEvent::CreatureReady { owner, creature } => {
                Some(format!("{}'s {} is ready.", owner, creature))
            }
            BattleEvent::InvalidChoice { reply, .. } => {
                Some(format!("'{}' is not a valid choice.", reply))
            }

            BattleEvent::CreatureSwitched { owner, creature } => {
                Some(format!("{} switched out. {} is now active.", owner, creature))
            }
            BattleEvent::MoveHit {
                attacker,
                target,
                move_name,
                damage,
                effectiveness,
            } => {
                let mut text = format!(
                    "{} hits {} with {} for {}.",
                    attacker, target, move_name, damage
                );
                match effectiveness {
                    Effectiveness::Strong => text.push_str(" It's super effective!"),
                    Effectiveness::Weak => text.push_str(" It's not very effective..."),
                    Effectiveness::Normal => {}
                }
                Some(text)
            }
            BattleEvent::MoveMissed { move_name, .. } => Some(format!("{} missed!", move_name)),
            BattleEvent::ForcedPass { creature } => {
                Some(format!("{} has no moves left and can't act!", creature))
            }

            BattleEvent::CreatureFainted { creature } => Some(format!("{} fainted!", creature)),
            BattleEvent::CreatureHealed {
                creature,
                current_health,
                health,
            } => Some(format!(
                "{} was healed. Health is now {}/{}.",
                creature, current_health, health
            )),
            BattleEvent::CreatureRestored { creature } => {
                Some(format!("{} was fully restored.", creature))
            }

            BattleEvent::CatchSucceeded {
                target,
                destination,
            } => match destination {
                CatchDestination::Party => Some(format!("You caught a {}!", target)),
                CatchDestination::Computer => Some(format!(
                    "You caught a {}! It was sent to the computer.",
                    target
                )),
            },
            BattleEvent::CatchFailed { target } => Some(format!("The {} got away!", target)),
            BattleEvent::CatchRejected { target, reason } => match reason {
                CatchRejection::NoCaptureDevices => {
                    Some("You have no capture devices left!".to_string())
                }
                CatchRejection::TargetFainted => {
                    Some(format!("{} has fainted and can't be caught.", target))
                }
            },
            BattleEvent::FleeSucceeded => Some("You got away!".to_string()),
            BattleEvent::FleeFailed => Some("Escape unsuccessful.".to_string()),

            BattleEvent::PartyFainted { owner } => Some(format!(
                "Oh, no! All of the Pokemann in {}'s party are fainted.",
                owner
            )),
            BattleEvent::TrainerDefeated { trainer } => {
                Some(format!("Congratulations! You have defeated {}.", trainer))
            }
            BattleEvent::EncounterEnded { .. } | BattleEvent::TrainerBattleEnded { .. } => None,
        }
    }
}

/// In-memory collector of battle events.
///
/// # Example
/// ```
/// use pokemann::battle::state::{BattleEvent, EventBus};
/// use pokemann::interface::EventSink;
///
/// let mut bus = EventBus::new();
/// bus.emit(&BattleEvent::TurnStarted { turn_number: 1 });
/// assert_eq!(bus.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        tracing::debug!(?event, "battle event");
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl EventSink for EventBus {
    fn emit(&mut self, event: &BattleEvent) {
        self.push(event.clone());
    }
}

impl std::fmt::Display for EventBus {
    /// Format the EventBus for printing. Uses formatted text, falling back to debug format for silent events.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            match event.format() {
                Some(text) => writeln!(f, "  {}", text)?,
                None => writeln!(f, "  {:?} (silent)", event)?,
            }
        }
        Ok(())
    }
}
