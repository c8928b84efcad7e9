use crate::battle::context::TurnContext;
use crate::battle::rng::ScriptedRng;
use crate::battle::state::EventBus;
use crate::config::BattleConfig;
use crate::creature::Creature;
use crate::interface::{InputSource, Reply};
use crate::moves::MoveInst;
use crate::player::{Opponent, Player, Roster};
use schema::{BaseStats, Kind};
use std::collections::VecDeque;

/// A builder for creating test creatures with common defaults.
///
/// # Example
/// ```ignore
/// let creature = TestCreatureBuilder::new("Coopasaur", Kind::Teacher)
///     .with_moves(vec![homework()])
///     .with_speed(80)
///     .build();
/// ```
pub struct TestCreatureBuilder {
    name: String,
    kind: Kind,
    stats: BaseStats,
    current_health: Option<u32>,
    catch_rate: u32,
    moves: Vec<MoveInst>,
}

impl TestCreatureBuilder {
    /// Creates a builder with the original roster's common stat line: 30/20/50, 100 health.
    pub fn new(name: &str, kind: Kind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            stats: BaseStats {
                attack: 30,
                defense: 20,
                speed: 50,
                health: 100,
            },
            current_health: None,
            catch_rate: 50,
            moves: Vec::new(),
        }
    }

    pub fn with_moves(mut self, moves: Vec<MoveInst>) -> Self {
        self.moves = moves;
        self
    }

    pub fn with_attack(mut self, attack: u32) -> Self {
        self.stats.attack = attack;
        self
    }

    pub fn with_defense(mut self, defense: u32) -> Self {
        self.stats.defense = defense;
        self
    }

    pub fn with_speed(mut self, speed: u32) -> Self {
        self.stats.speed = speed;
        self
    }

    pub fn with_health(mut self, health: u32) -> Self {
        self.stats.health = health;
        self
    }

    /// Sets the current health. If not set, health will be max.
    pub fn with_current_health(mut self, current_health: u32) -> Self {
        self.current_health = Some(current_health);
        self
    }

    pub fn with_catch_rate(mut self, catch_rate: u32) -> Self {
        self.catch_rate = catch_rate;
        self
    }

    pub fn build(self) -> Creature {
        let mut creature = Creature::new(
            self.name.clone(),
            self.kind,
            self.stats,
            self.catch_rate,
            &self.moves,
            format!("{}.png", self.name.to_lowercase()),
        );
        if let Some(current_health) = self.current_health {
            creature.current_health = current_health;
            creature.fainted = current_health == 0;
        }
        creature
    }
}

/// Replays menu replies in order, then reports the input as closed.
pub struct ScriptedInput {
    replies: VecDeque<Reply>,
    pub prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: replies.into(),
            prompts: Vec::new(),
        }
    }

    /// Zero-based indices as replies.
    pub fn picks(indices: &[usize]) -> Self {
        Self::new(indices.iter().map(|&i| Reply::Index(i)).collect())
    }

    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl InputSource for ScriptedInput {
    fn request_choice(&mut self, prompt: &str, _options: &[String]) -> Reply {
        self.prompts.push(prompt.to_string());
        self.replies.pop_front().unwrap_or(Reply::Closed)
    }
}

pub fn homework() -> MoveInst {
    MoveInst::new("Homework", Kind::Teacher, 30, 40, 100)
}

pub fn lecture() -> MoveInst {
    MoveInst::new("Lecture", Kind::Teacher, 30, 40, 100)
}

pub fn excessive_talking() -> MoveInst {
    MoveInst::new("Excessive Talking", Kind::Student, 30, 40, 100)
}

pub fn dress_code() -> MoveInst {
    MoveInst::new("Dress Code", Kind::Administrator, 30, 50, 95)
}

pub fn create_test_player(name: &str, party: Vec<Creature>, capture_devices: u32) -> Player {
    Player::new(Roster::new(name, &party, "player.png"), capture_devices)
}

pub fn create_test_opponent(name: &str, party: Vec<Creature>) -> Opponent {
    Opponent::new(Roster::new(name, &party, "opponent.png"))
}

/// Owns every collaborator a `TurnContext` borrows, so tests can build one in a line.
pub struct TestHarness {
    pub input: ScriptedInput,
    pub rng: ScriptedRng,
    pub bus: EventBus,
    pub config: BattleConfig,
}

impl TestHarness {
    pub fn new(replies: Vec<Reply>, outcomes: Vec<u32>) -> Self {
        Self {
            input: ScriptedInput::new(replies),
            rng: ScriptedRng::new_for_test(outcomes),
            bus: EventBus::new(),
            config: BattleConfig::default(),
        }
    }

    pub fn with_picks(indices: &[usize], outcomes: Vec<u32>) -> Self {
        Self::new(
            indices.iter().map(|&i| Reply::Index(i)).collect(),
            outcomes,
        )
    }

    pub fn ctx(&mut self) -> TurnContext<'_> {
        TurnContext::new(&mut self.input, &mut self.rng, &mut self.bus, &self.config)
    }
}
