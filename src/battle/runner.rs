use crate::battle::context::TurnContext;
use crate::battle::engine::exchange_attacks;
use crate::battle::state::{BattleEvent, EncounterOutcome, TrainerBattleOutcome};
use crate::creature::Creature;
use crate::errors::{BattleResult, BattleStateError};
use crate::player::{Opponent, Player, PlayerAction, Trainer};

/// Drives the two kinds of battle turn by turn, pulling decisions from the
/// trainers and resolving them through [`exchange_attacks`].
pub struct BattleRunner<'a> {
    ctx: TurnContext<'a>,
    turn_number: u32,
}

impl<'a> BattleRunner<'a> {
    pub fn new(ctx: TurnContext<'a>) -> Self {
        Self {
            ctx,
            turn_number: 0,
        }
    }

    /// Number of turns started so far.
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Runs an encounter with a wild creature until it is caught, fled from,
    /// knocked out, or the player's party is exhausted.
    pub fn run_wild_encounter(
        &mut self,
        player: &mut Player,
        wild: &mut Creature,
    ) -> BattleResult<EncounterOutcome> {
        self.ctx.emit(BattleEvent::EncounterStarted {
            wild: wild.summary(),
        });

        let outcome = loop {
            if let Some(outcome) = self.wild_turn(player, wild)? {
                break outcome;
            }
        };

        tracing::info!(?outcome, turns = self.turn_number, "wild encounter ended");
        self.ctx.emit(BattleEvent::EncounterEnded { outcome });
        Ok(outcome)
    }

    /// Plays one wild-encounter turn. Returns the outcome once the encounter is over.
    pub fn wild_turn(
        &mut self,
        player: &mut Player,
        wild: &mut Creature,
    ) -> BattleResult<Option<EncounterOutcome>> {
        if wild.is_fainted() {
            return Ok(Some(EncounterOutcome::WildFainted));
        }
        if !player.roster.has_available() {
            return Ok(Some(EncounterOutcome::PlayerFainted));
        }

        self.start_turn();
        player.announce_active(self.ctx.sink);

        // The wild creature commits to its move before the player decides.
        let wild_move = wild.random_available_move(self.ctx.rng);

        let mut actions = vec![PlayerAction::Fight, PlayerAction::Catch, PlayerAction::Run];
        if !player.roster.switch_candidates().is_empty() {
            actions.push(PlayerAction::Switch);
        }

        let mut player_move = None;
        match player.choose_action(&mut self.ctx, &actions)? {
            PlayerAction::Fight => player_move = self.select_or_pass(player)?,
            PlayerAction::Catch => {
                if player.attempt_catch(wild, &mut self.ctx)?.is_caught() {
                    return Ok(Some(EncounterOutcome::Caught));
                }
            }
            PlayerAction::Run => {
                if player.attempt_flee(wild, &mut self.ctx)? {
                    return Ok(Some(EncounterOutcome::Fled));
                }
            }
            PlayerAction::Switch => {
                player.switch_out(&mut self.ctx)?;
            }
        }

        if wild_move.is_none() {
            self.ctx.emit(BattleEvent::ForcedPass {
                creature: wild.name.clone(),
            });
        }

        let active = active_of(player)?;
        exchange_attacks(active, player_move, wild, wild_move, self.ctx.rng, self.ctx.sink)?;

        if wild.is_fainted() {
            return Ok(Some(EncounterOutcome::WildFainted));
        }
        if !player.roster.has_available() {
            self.ctx.emit(BattleEvent::PartyFainted {
                owner: player.roster.name.clone(),
            });
            return Ok(Some(EncounterOutcome::PlayerFainted));
        }
        Ok(None)
    }

    /// Runs a battle against another trainer until one side has no creature left standing.
    pub fn run_trainer_battle(
        &mut self,
        player: &mut Player,
        opponent: &mut Opponent,
    ) -> BattleResult<TrainerBattleOutcome> {
        self.ctx.emit(BattleEvent::TrainerBattleStarted {
            opponent: opponent.roster.name.clone(),
            party: opponent.roster.party.iter().map(Creature::summary).collect(),
        });

        let outcome = loop {
            if let Some(outcome) = self.trainer_turn(player, opponent)? {
                break outcome;
            }
        };

        tracing::info!(?outcome, turns = self.turn_number, "trainer battle ended");
        self.ctx.emit(BattleEvent::TrainerBattleEnded { outcome });
        Ok(outcome)
    }

    /// Plays one trainer-battle turn. Returns the outcome once the battle is over.
    pub fn trainer_turn(
        &mut self,
        player: &mut Player,
        opponent: &mut Opponent,
    ) -> BattleResult<Option<TrainerBattleOutcome>> {
        if !player.roster.has_available() {
            return Ok(Some(TrainerBattleOutcome::PlayerDefeated));
        }
        if !opponent.roster.has_available() {
            return Ok(Some(TrainerBattleOutcome::OpponentDefeated));
        }

        self.start_turn();
        player.announce_active(self.ctx.sink);

        let mut actions = vec![PlayerAction::Fight];
        if !player.roster.switch_candidates().is_empty() {
            actions.push(PlayerAction::Switch);
        }

        let player_move = match player.choose_action(&mut self.ctx, &actions)? {
            PlayerAction::Switch => {
                player.switch_out(&mut self.ctx)?;
                None
            }
            _ => self.select_or_pass(player)?,
        };

        // A switching opponent throws no move this turn.
        let opponent_move = if opponent.will_switch(&mut self.ctx) {
            opponent.switch_out(&mut self.ctx)?;
            None
        } else {
            self.select_or_pass(opponent)?
        };

        let active = active_of(player)?;
        let target = active_of(opponent)?;
        exchange_attacks(
            active,
            player_move,
            target,
            opponent_move,
            self.ctx.rng,
            self.ctx.sink,
        )?;

        if !player.roster.has_available() {
            self.ctx.emit(BattleEvent::PartyFainted {
                owner: player.roster.name.clone(),
            });
            return Ok(Some(TrainerBattleOutcome::PlayerDefeated));
        }
        if !opponent.roster.has_available() {
            self.ctx.emit(BattleEvent::TrainerDefeated {
                trainer: opponent.roster.name.clone(),
            });
            return Ok(Some(TrainerBattleOutcome::OpponentDefeated));
        }
        Ok(None)
    }

    fn start_turn(&mut self) {
        self.turn_number += 1;
        tracing::debug!(turn_number = self.turn_number, "turn started");
        self.ctx.emit(BattleEvent::TurnStarted {
            turn_number: self.turn_number,
        });
    }

    /// Asks the trainer for a move, announcing a forced pass when it has none left.
    fn select_or_pass<T: Trainer>(&mut self, trainer: &mut T) -> BattleResult<Option<usize>> {
        let selected = trainer.select_move(&mut self.ctx)?;
        if selected.is_none() {
            if let Some(active) = trainer.roster().active_creature() {
                self.ctx.emit(BattleEvent::ForcedPass {
                    creature: active.name.clone(),
                });
            }
        }
        Ok(selected)
    }
}

fn active_of<T: Trainer>(trainer: &mut T) -> BattleResult<&mut Creature> {
    let owner = trainer.name().to_string();
    trainer
        .roster_mut()
        .active_creature_mut()
        .ok_or_else(|| BattleStateError::NoActiveCreature { owner }.into())
}
