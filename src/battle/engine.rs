use crate::battle::rng::RandomSource;
use crate::creature::Creature;
use crate::errors::BattleResult;
use crate::interface::EventSink;

/// Exchanges attacks between two creatures. The faster one moves first, and
/// `left` wins speed ties. A side without a move (it switched, caught, fled or is
/// out of moves) skips its attack, and the second attacker only acts if it is
/// still standing.
pub fn exchange_attacks(
    left: &mut Creature,
    left_move: Option<usize>,
    right: &mut Creature,
    right_move: Option<usize>,
    rng: &mut dyn RandomSource,
    sink: &mut dyn EventSink,
) -> BattleResult<()> {
    if left.speed >= right.speed {
        attack_then_reply(left, left_move, right, right_move, rng, sink)
    } else {
        attack_then_reply(right, right_move, left, left_move, rng, sink)
    }
}

fn attack_then_reply(
    first: &mut Creature,
    first_move: Option<usize>,
    second: &mut Creature,
    second_move: Option<usize>,
    rng: &mut dyn RandomSource,
    sink: &mut dyn EventSink,
) -> BattleResult<()> {
    if let Some(move_index) = first_move {
        first.execute_move(move_index, second, rng, sink)?;
    }

    if !second.is_fainted() {
        if let Some(move_index) = second_move {
            second.execute_move(move_index, first, rng, sink)?;
        }
    }

    Ok(())
}
