//! Game data: move, creature and trainer records, validated once and then
//! instantiated on demand. Every instance handed out is freshly built, so
//! battles never share health or move uses through the catalog.

use crate::battle::rng::RandomSource;
use crate::creature::Creature;
use crate::errors::{DataError, DataResult};
use crate::moves::MoveInst;
use crate::player::{Opponent, Player, Roster};
use schema::{CreatureData, GameData, MoveData, TrainerData};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

const BUILTIN_DATA: &str = include_str!("../data/pokemann.ron");

#[derive(Debug, Clone)]
pub struct Catalog {
    data: GameData,
    moves: HashMap<String, usize>,
    creatures: HashMap<String, usize>,
}

impl Catalog {
    /// The roster shipped with the game.
    pub fn builtin() -> DataResult<Self> {
        Self::from_ron_str(BUILTIN_DATA)
    }

    pub fn load(path: &Path) -> DataResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| DataError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_ron_str(&content)
    }

    pub fn from_ron_str(content: &str) -> DataResult<Self> {
        let data: GameData = ron::from_str(content).map_err(|e| DataError::Parse(e.to_string()))?;
        Self::from_game_data(data)
    }

    pub fn from_game_data(data: GameData) -> DataResult<Self> {
        let moves = index_by_name(data.moves.iter().map(|m| m.name.as_str()))?;
        let creatures = index_by_name(data.creatures.iter().map(|c| c.name.as_str()))?;
        let catalog = Catalog {
            data,
            moves,
            creatures,
        };
        catalog.validate()?;

        tracing::debug!(
            moves = catalog.data.moves.len(),
            creatures = catalog.data.creatures.len(),
            opponents = catalog.data.opponents.len(),
            "loaded game data"
        );
        Ok(catalog)
    }

    fn validate(&self) -> DataResult<()> {
        for move_ in &self.data.moves {
            validate_move(move_)?;
        }
        for creature in &self.data.creatures {
            validate_creature(creature)?;
            for move_name in &creature.moves {
                self.move_data(move_name)?;
            }
        }

        self.validate_party(&self.data.player.name, &self.data.player.party)?;

        let mut opponent_names = HashSet::new();
        for opponent in &self.data.opponents {
            if !opponent_names.insert(opponent.name.as_str()) {
                return Err(DataError::DuplicateEntry(opponent.name.clone()));
            }
            self.validate_party(&opponent.name, &opponent.party)?;
        }

        for name in &self.data.wild {
            self.creature_data(name)?;
        }
        Ok(())
    }

    fn validate_party(&self, owner: &str, party: &[String]) -> DataResult<()> {
        if party.is_empty() {
            return Err(invalid(owner, "party is empty"));
        }
        for name in party {
            self.creature_data(name)?;
        }
        Ok(())
    }

    fn move_data(&self, name: &str) -> DataResult<&MoveData> {
        self.moves
            .get(name)
            .map(|&i| &self.data.moves[i])
            .ok_or_else(|| DataError::MoveNotFound(name.to_string()))
    }

    fn creature_data(&self, name: &str) -> DataResult<&CreatureData> {
        self.creatures
            .get(name)
            .map(|&i| &self.data.creatures[i])
            .ok_or_else(|| DataError::CreatureNotFound(name.to_string()))
    }

    fn opponent_data(&self, name: &str) -> DataResult<&TrainerData> {
        self.data
            .opponents
            .iter()
            .find(|o| o.name == name)
            .ok_or_else(|| DataError::OpponentNotFound(name.to_string()))
    }

    /// A move with a full set of uses.
    pub fn instantiate_move(&self, name: &str) -> DataResult<MoveInst> {
        self.move_data(name).map(MoveInst::from_data)
    }

    /// A fresh creature at full health.
    pub fn creature(&self, name: &str) -> DataResult<Creature> {
        let record = self.creature_data(name)?;
        let moves = record
            .moves
            .iter()
            .map(|m| self.instantiate_move(m))
            .collect::<DataResult<Vec<_>>>()?;
        Ok(Creature::new(
            record.name.clone(),
            record.kind,
            record.stats,
            record.catch_rate,
            &moves,
            record.image.clone(),
        ))
    }

    fn party(&self, names: &[String]) -> DataResult<Vec<Creature>> {
        names.iter().map(|n| self.creature(n)).collect()
    }

    pub fn player(&self) -> DataResult<Player> {
        let record = &self.data.player;
        let party = self.party(&record.party)?;
        Ok(Player::new(
            Roster::new(record.name.clone(), &party, record.image.clone()),
            record.capture_devices,
        ))
    }

    pub fn opponent(&self, name: &str) -> DataResult<Opponent> {
        let record = self.opponent_data(name)?;
        let party = self.party(&record.party)?;
        Ok(Opponent::new(Roster::new(
            record.name.clone(),
            &party,
            record.image.clone(),
        )))
    }

    pub fn opponent_names(&self) -> Vec<&str> {
        self.data.opponents.iter().map(|o| o.name.as_str()).collect()
    }

    /// Creature records in file order.
    pub fn creature_records(&self) -> &[CreatureData] {
        &self.data.creatures
    }

    pub fn opponent_records(&self) -> &[TrainerData] {
        &self.data.opponents
    }

    /// Creatures that can turn up in a wild encounter. Falls back to every
    /// creature when the data names no pool.
    pub fn wild_pool(&self) -> Vec<&str> {
        if self.data.wild.is_empty() {
            self.data.creatures.iter().map(|c| c.name.as_str()).collect()
        } else {
            self.data.wild.iter().map(String::as_str).collect()
        }
    }

    pub fn random_wild(&self, rng: &mut dyn RandomSource) -> DataResult<Creature> {
        let pool = self.wild_pool();
        if pool.is_empty() {
            return Err(DataError::CreatureNotFound("wild pool is empty".to_string()));
        }
        let name = pool[rng.pick(pool.len(), "wild creature")];
        self.creature(name)
    }
}

fn index_by_name<'a>(names: impl Iterator<Item = &'a str>) -> DataResult<HashMap<String, usize>> {
    let mut index = HashMap::new();
    for (i, name) in names.enumerate() {
        if index.insert(name.to_string(), i).is_some() {
            return Err(DataError::DuplicateEntry(name.to_string()));
        }
    }
    Ok(index)
}

fn invalid(name: &str, reason: &str) -> DataError {
    DataError::InvalidRecord {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

fn validate_move(move_: &MoveData) -> DataResult<()> {
    if move_.power == 0 {
        return Err(invalid(&move_.name, "power must be positive"));
    }
    if move_.accuracy > 100 {
        return Err(invalid(&move_.name, "accuracy is a percentage"));
    }
    if move_.max_uses == 0 {
        return Err(invalid(&move_.name, "max_uses must be positive"));
    }
    Ok(())
}

fn validate_creature(creature: &CreatureData) -> DataResult<()> {
    // Defense divides the damage formula.
    if creature.stats.defense == 0 {
        return Err(invalid(&creature.name, "defense must be positive"));
    }
    if creature.stats.health == 0 {
        return Err(invalid(&creature.name, "health must be positive"));
    }
    if creature.moves.is_empty() {
        return Err(invalid(&creature.name, "creature has no moves"));
    }
    Ok(())
}
