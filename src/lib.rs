// In: src/lib.rs

//! Pokemann Battle Engine
//!
//! A turn-based creature battle simulator: wild encounters with catching and
//! fleeing, and trainer battles with switching, resolved through injected
//! input, randomness and event collaborators so every battle can be replayed.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod catalog;
pub mod config;
pub mod creature;
pub mod errors;
pub mod interface;
pub mod moves;
pub mod player;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Static data records and the kind chart.
pub use schema::{
    BaseStats, CreatureData, Effectiveness, GameData, Kind, MoveData, PlayerData, TrainerData,
};

// --- From this crate's modules (`src/`) ---

// Battle driving and the events it produces.
pub use battle::context::TurnContext;
pub use battle::engine::exchange_attacks;
pub use battle::rng::{RandomSource, TurnRng};
pub use battle::runner::BattleRunner;
pub use battle::state::{BattleEvent, EncounterOutcome, EventBus, TrainerBattleOutcome};

// Core runtime types for a battle.
pub use creature::{Creature, MoveOutcome};
pub use moves::MoveInst;
pub use player::{CatchResult, Opponent, Player, PlayerAction, Roster, Trainer};

// Data, configuration and I/O collaborators.
pub use catalog::Catalog;
pub use config::BattleConfig;
pub use interface::{ConsoleInput, ConsoleOutput, EventSink, InputSource, JsonOutput, Reply};

// Crate-specific error and result types.
pub use errors::{
    ActionError, BattleEngineError, BattleResult, BattleStateError, DataError, DataResult,
};
