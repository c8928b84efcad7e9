use crate::battle::rng::RandomSource;
use crate::battle::state::{BattleEvent, CreatureSummary};
use crate::errors::{ActionError, BattleResult};
use crate::interface::EventSink;
use crate::moves::MoveInst;
use schema::{BaseStats, Kind};
use serde::{Deserialize, Serialize};

/// Result of a single move execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Hit { damage: u32 },
    Missed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
    pub kind: Kind,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub health: u32,         // Base (maximum) health
    pub current_health: u32, // 0..=health
    pub catch_rate: u32,     // Lower is harder to catch
    pub fainted: bool,
    pub moves: Vec<MoveInst>,
    pub image: String, // Opaque asset reference, never read by the engine
}

impl Creature {
    /// Create a creature at full health. The moves are cloned so no two
    /// creatures share use counters.
    pub fn new(
        name: impl Into<String>,
        kind: Kind,
        stats: BaseStats,
        catch_rate: u32,
        moves: &[MoveInst],
        image: impl Into<String>,
    ) -> Self {
        Creature {
            name: name.into(),
            kind,
            attack: stats.attack,
            defense: stats.defense,
            speed: stats.speed,
            health: stats.health,
            current_health: stats.health,
            catch_rate,
            fainted: stats.health == 0,
            moves: moves.to_vec(),
            image: image.into(),
        }
    }

    pub fn is_fainted(&self) -> bool {
        self.fainted
    }

    pub fn summary(&self) -> CreatureSummary {
        CreatureSummary {
            name: self.name.clone(),
            kind: self.kind,
            current_health: self.current_health,
            health: self.health,
        }
    }

    /// Moves with uses remaining, in declaration order.
    pub fn available_moves(&self) -> Vec<&MoveInst> {
        self.moves.iter().filter(|m| m.is_available()).collect()
    }

    /// Indices into `moves` of the available moves.
    pub fn available_move_indices(&self) -> Vec<usize> {
        self.moves
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_available())
            .map(|(i, _)| i)
            .collect()
    }

    /// Uniformly random available move index, or `None` when every move is used up.
    pub fn random_available_move(&self, rng: &mut dyn RandomSource) -> Option<usize> {
        let available = self.available_move_indices();
        if available.is_empty() {
            return None;
        }
        let choice = rng.pick(available.len(), "random move");
        Some(available[choice])
    }

    /// Roll accuracy and apply the move to `target`. Hit or miss, one use is consumed.
    pub fn execute_move(
        &mut self,
        move_index: usize,
        target: &mut Creature,
        rng: &mut dyn RandomSource,
        sink: &mut dyn EventSink,
    ) -> BattleResult<MoveOutcome> {
        let move_ = self
            .moves
            .get(move_index)
            .ok_or(ActionError::InvalidMoveIndex(move_index))?;
        if !move_.is_available() {
            return Err(ActionError::MoveExhausted {
                creature: self.name.clone(),
                move_name: move_.name.clone(),
            }
            .into());
        }

        let roll = rng.roll(1, 100, "accuracy");
        let outcome = if roll <= move_.accuracy {
            let damage = move_.calculate_damage(self, target);
            sink.emit(&BattleEvent::MoveHit {
                attacker: self.name.clone(),
                target: target.name.clone(),
                move_name: move_.name.clone(),
                damage,
                effectiveness: move_.effectiveness_against(target),
            });
            target.take_damage(damage, sink);
            MoveOutcome::Hit { damage }
        } else {
            sink.emit(&BattleEvent::MoveMissed {
                attacker: self.name.clone(),
                target: target.name.clone(),
                move_name: move_.name.clone(),
            });
            MoveOutcome::Missed
        };

        self.moves[move_index].use_move();
        Ok(outcome)
    }

    /// Applies damage. If health falls to zero, the creature faints.
    pub fn take_damage(&mut self, amount: u32, sink: &mut dyn EventSink) {
        self.current_health = self.current_health.saturating_sub(amount);
        if self.current_health == 0 && !self.fainted {
            self.faint(sink);
        }
    }

    pub fn faint(&mut self, sink: &mut dyn EventSink) {
        self.current_health = 0;
        self.fainted = true;
        sink.emit(&BattleEvent::CreatureFainted {
            creature: self.name.clone(),
        });
    }

    /// Raises current health by `amount`, capped at base health.
    pub fn heal(&mut self, amount: u32, sink: &mut dyn EventSink) {
        self.current_health = self.current_health.saturating_add(amount).min(self.health);
        self.fainted = self.current_health == 0;
        sink.emit(&BattleEvent::CreatureHealed {
            creature: self.name.clone(),
            current_health: self.current_health,
            health: self.health,
        });
    }

    /// Restores all health, unfaints, and resets uses for all moves.
    pub fn restore(&mut self) {
        self.current_health = self.health;
        self.fainted = self.health == 0;
        for move_ in &mut self.moves {
            move_.restore();
        }
    }
}
