use crate::battle::catch::{flee_roll, roll_catch_success};
use crate::battle::context::TurnContext;
use crate::battle::state::{BattleEvent, CatchDestination, CatchRejection};
use crate::creature::Creature;
use crate::errors::{BattleResult, BattleStateError};
use crate::interface::EventSink;
use serde::{Deserialize, Serialize};

/// What the player can do on their turn. Which of these are offered depends on the battle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Fight,
    Catch,
    Run,
    Switch,
}

impl PlayerAction {
    pub fn label(self) -> &'static str {
        match self {
            PlayerAction::Fight => "Fight",
            PlayerAction::Catch => "Catch",
            PlayerAction::Run => "Run",
            PlayerAction::Switch => "Switch out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchResult {
    Caught(CatchDestination),
    BrokeFree,
    Rejected(CatchRejection),
}

impl CatchResult {
    pub fn is_caught(self) -> bool {
        matches!(self, CatchResult::Caught(_))
    }
}

/// An owner's ordered party. The active creature is the first unfainted one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Roster {
    pub name: String,
    pub party: Vec<Creature>,
    pub image: String,
}

impl Roster {
    /// Create a roster. The creatures are cloned so rosters never share state.
    pub fn new(name: impl Into<String>, party: &[Creature], image: impl Into<String>) -> Self {
        Roster {
            name: name.into(),
            party: party.to_vec(),
            image: image.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.party.len()
    }

    pub fn is_empty(&self) -> bool {
        self.party.is_empty()
    }

    /// Unfainted creatures, in party order.
    pub fn available_creatures(&self) -> Vec<&Creature> {
        self.party.iter().filter(|c| !c.is_fainted()).collect()
    }

    pub fn has_available(&self) -> bool {
        self.party.iter().any(|c| !c.is_fainted())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.party.iter().position(|c| !c.is_fainted())
    }

    pub fn active_creature(&self) -> Option<&Creature> {
        self.active_index().map(|i| &self.party[i])
    }

    pub fn active_creature_mut(&mut self) -> Option<&mut Creature> {
        let index = self.active_index()?;
        Some(&mut self.party[index])
    }

    /// Party indices of unfainted creatures other than the active one.
    pub fn switch_candidates(&self) -> Vec<usize> {
        let active = self.active_index();
        self.party
            .iter()
            .enumerate()
            .filter(|(i, c)| !c.is_fainted() && Some(*i) != active)
            .map(|(i, _)| i)
            .collect()
    }

    /// Moves the creature at `index` to the front of the party.
    pub fn set_active(&mut self, index: usize) -> BattleResult<()> {
        if index >= self.party.len() {
            return Err(BattleStateError::InvalidCreatureIndex(index).into());
        }
        let creature = self.party.remove(index);
        self.party.insert(0, creature);
        Ok(())
    }

    /// Fully restores every creature in the party.
    pub fn restore(&mut self, sink: &mut dyn EventSink) {
        for creature in &mut self.party {
            creature.restore();
            sink.emit(&BattleEvent::CreatureRestored {
                creature: creature.name.clone(),
            });
        }
    }

    fn require_active(&self) -> BattleResult<&Creature> {
        self.active_creature().ok_or_else(|| {
            BattleStateError::NoActiveCreature {
                owner: self.name.clone(),
            }
            .into()
        })
    }

    fn announce_active(&self, sink: &mut dyn EventSink) {
        if let Some(active) = self.active_creature() {
            sink.emit(&BattleEvent::CreatureReady {
                owner: self.name.clone(),
                creature: active.name.clone(),
            });
        }
    }
}

/// The capabilities the battle runner needs from either side of a battle.
pub trait Trainer {
    fn roster(&self) -> &Roster;

    fn roster_mut(&mut self) -> &mut Roster;

    /// Index into the active creature's moves, or `None` when it has nothing left to use.
    fn select_move(&mut self, ctx: &mut TurnContext<'_>) -> BattleResult<Option<usize>>;

    /// Promote another available creature. Returns `false` if there was none to promote.
    fn switch_out(&mut self, ctx: &mut TurnContext<'_>) -> BattleResult<bool>;

    fn name(&self) -> &str {
        &self.roster().name
    }

    fn announce_active(&self, sink: &mut dyn EventSink) {
        self.roster().announce_active(sink);
    }
}

/// The human side: every decision goes through the input collaborator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Player {
    pub roster: Roster,
    pub computer: Vec<Creature>, // Overflow storage once the party is full
    pub capture_devices: u32,
}

impl Player {
    pub fn new(roster: Roster, capture_devices: u32) -> Self {
        Player {
            roster,
            computer: Vec::new(),
            capture_devices,
        }
    }

    pub fn choose_action(
        &mut self,
        ctx: &mut TurnContext<'_>,
        actions: &[PlayerAction],
    ) -> BattleResult<PlayerAction> {
        let labels: Vec<String> = actions.iter().map(|a| a.label().to_string()).collect();
        let choice = ctx.choose("What would you like to do?", &labels)?;
        Ok(actions[choice])
    }

    /// Only meaningful against a wild creature. One capture device is spent per
    /// attempt; with none left the attempt is rejected before any roll.
    pub fn attempt_catch(
        &mut self,
        target: &Creature,
        ctx: &mut TurnContext<'_>,
    ) -> BattleResult<CatchResult> {
        let rejection = if self.capture_devices == 0 {
            Some(CatchRejection::NoCaptureDevices)
        } else if target.is_fainted() {
            Some(CatchRejection::TargetFainted)
        } else {
            None
        };
        if let Some(reason) = rejection {
            ctx.emit(BattleEvent::CatchRejected {
                target: target.name.clone(),
                reason,
            });
            return Ok(CatchResult::Rejected(reason));
        }

        self.capture_devices -= 1;

        if !roll_catch_success(target, ctx.rng) {
            ctx.emit(BattleEvent::CatchFailed {
                target: target.name.clone(),
            });
            return Ok(CatchResult::BrokeFree);
        }

        let destination = if self.roster.len() < ctx.config.party_limit {
            self.roster.party.push(target.clone());
            CatchDestination::Party
        } else {
            let mut caught = target.clone();
            caught.restore();
            self.computer.push(caught);
            CatchDestination::Computer
        };
        ctx.emit(BattleEvent::CatchSucceeded {
            target: target.name.clone(),
            destination,
        });
        Ok(CatchResult::Caught(destination))
    }

    /// Only meaningful in a wild encounter.
    pub fn attempt_flee(&self, target: &Creature, ctx: &mut TurnContext<'_>) -> BattleResult<bool> {
        let active = self.roster.require_active()?;
        let escaped = flee_roll(active, target, ctx.rng) < ctx.config.flee_threshold;
        ctx.emit(if escaped {
            BattleEvent::FleeSucceeded
        } else {
            BattleEvent::FleeFailed
        });
        Ok(escaped)
    }
}

impl Trainer for Player {
    fn roster(&self) -> &Roster {
        &self.roster
    }

    fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    fn select_move(&mut self, ctx: &mut TurnContext<'_>) -> BattleResult<Option<usize>> {
        let active = self.roster.require_active()?;
        let available = active.available_move_indices();
        if available.is_empty() {
            return Ok(None);
        }

        let labels: Vec<String> = available
            .iter()
            .map(|&i| {
                let move_ = &active.moves[i];
                format!(
                    "{} (uses={}/{})",
                    move_.name, move_.remaining_uses, move_.max_uses
                )
            })
            .collect();
        let choice = ctx.choose("Select a move:", &labels)?;
        Ok(Some(available[choice]))
    }

    fn switch_out(&mut self, ctx: &mut TurnContext<'_>) -> BattleResult<bool> {
        let candidates = self.roster.switch_candidates();
        if candidates.is_empty() {
            return Ok(false);
        }

        let labels: Vec<String> = candidates
            .iter()
            .map(|&i| {
                let creature = &self.roster.party[i];
                format!(
                    "{} (health={}/{})",
                    creature.name, creature.current_health, creature.health
                )
            })
            .collect();
        let choice = ctx.choose("Select active Pokemann...", &labels)?;
        self.roster.set_active(candidates[choice])?;

        let active = self.roster.require_active()?;
        ctx.emit(BattleEvent::CreatureSwitched {
            owner: self.roster.name.clone(),
            creature: active.name.clone(),
        });
        Ok(true)
    }
}

/// A computer-controlled trainer: random moves and the occasional random switch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Opponent {
    pub roster: Roster,
}

impl Opponent {
    pub fn new(roster: Roster) -> Self {
        Opponent { roster }
    }

    /// Per-turn switch heuristic. The roll is always drawn, even when there is nothing to switch to.
    pub fn will_switch(&self, ctx: &mut TurnContext<'_>) -> bool {
        let roll = ctx.rng.roll(1, 100, "opponent switch");
        self.roster.available_creatures().len() > 1 && roll <= ctx.config.opponent_switch_chance
    }
}

impl Trainer for Opponent {
    fn roster(&self) -> &Roster {
        &self.roster
    }

    fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    fn select_move(&mut self, ctx: &mut TurnContext<'_>) -> BattleResult<Option<usize>> {
        let active = self.roster.require_active()?;
        Ok(active.random_available_move(ctx.rng))
    }

    fn switch_out(&mut self, ctx: &mut TurnContext<'_>) -> BattleResult<bool> {
        let candidates = self.roster.switch_candidates();
        if candidates.is_empty() {
            return Ok(false);
        }

        let choice = ctx.rng.pick(candidates.len(), "opponent switch target");
        self.roster.set_active(candidates[choice])?;

        let active = self.roster.require_active()?;
        ctx.emit(BattleEvent::CreatureSwitched {
            owner: self.roster.name.clone(),
            creature: active.name.clone(),
        });
        Ok(true)
    }
}
