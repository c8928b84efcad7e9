use crate::battle::rng::RandomSource;
use crate::creature::Creature;

/// Catch roll weighted by remaining health: uniform(1, 100) * current / max.
/// A wounded creature rolls lower and is easier to catch.
pub fn catch_roll(target: &Creature, rng: &mut dyn RandomSource) -> f64 {
    let roll = rng.roll(1, 100, "catch roll") as f64;
    roll * target.current_health as f64 / target.health as f64
}

/// Returns true if the catch succeeds
pub fn roll_catch_success(target: &Creature, rng: &mut dyn RandomSource) -> bool {
    catch_roll(target, rng) <= target.catch_rate as f64
}

/// Flee roll: uniform(0, 100) + own speed - target speed. Escape needs a roll below the threshold.
pub fn flee_roll(active: &Creature, target: &Creature, rng: &mut dyn RandomSource) -> i64 {
    let roll = rng.roll(0, 100, "flee roll") as i64;
    roll + active.speed as i64 - target.speed as i64
}

/// Get a descriptive catch rate category for display purposes
pub fn get_catch_rate_description(catch_rate: u32) -> &'static str {
    match catch_rate {
        r if r >= 70 => "Easy",
        r if r >= 30 => "Fair",
        r if r >= 10 => "Hard",
        _ => "Very Hard",
    }
}
