use crate::Kind;
use serde::{Deserialize, Serialize};

/// Static definition of a move. Instances with their own use counters are built from this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub name: String,
    pub kind: Kind,
    pub max_uses: u32,
    pub power: u32,
    pub accuracy: u32, // Percent, 0-100
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub health: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureData {
    pub name: String,
    pub kind: Kind,
    pub stats: BaseStats,
    pub catch_rate: u32, // Lower is harder to catch
    pub moves: Vec<String>,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerData {
    pub name: String,
    pub party: Vec<String>,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    pub name: String,
    pub party: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub capture_devices: u32,
}

/// Top-level layout of a game data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    pub moves: Vec<MoveData>,
    pub creatures: Vec<CreatureData>,
    pub player: PlayerData,
    #[serde(default)]
    pub opponents: Vec<TrainerData>,
    #[serde(default)]
    pub wild: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creature_record_parses_from_ron() {
        let source = r#"(
            name: "Marcelax",
            kind: Student,
            stats: (attack: 30, defense: 20, speed: 50, health: 30),
            catch_rate: 100,
            moves: ["Homework"],
        )"#;

        let record: CreatureData = ron::from_str(source).unwrap();
        assert_eq!(record.kind, Kind::Student);
        assert_eq!(record.stats.health, 30);
        assert_eq!(record.image, "");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let source = r#"(name: "Recess", kind: Janitor, max_uses: 5, power: 10, accuracy: 90)"#;
        assert!(ron::from_str::<MoveData>(source).is_err());
    }
}
