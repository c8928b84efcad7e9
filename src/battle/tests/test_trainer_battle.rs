#[cfg(test)]
mod tests {
    use crate::battle::runner::BattleRunner;
    use crate::battle::state::{BattleEvent, TrainerBattleOutcome};
    use crate::battle::tests::common::{
        create_test_opponent, create_test_player, dress_code, excessive_talking, homework,
        TestCreatureBuilder, TestHarness,
    };
    use crate::creature::Creature;
    use crate::player::Opponent;
    use pretty_assertions::assert_eq;
    use schema::Kind;

    const FIGHT: usize = 0;
    const SWITCH: usize = 1;

    fn teacher(name: &str) -> Creature {
        TestCreatureBuilder::new(name, Kind::Teacher)
            .with_speed(60)
            .with_moves(vec![homework()])
            .build()
    }

    fn student(name: &str, health: u32) -> Creature {
        TestCreatureBuilder::new(name, Kind::Student)
            .with_health(health)
            .with_moves(vec![excessive_talking()])
            .build()
    }

    fn rocket(party: Vec<Creature>) -> Opponent {
        create_test_opponent("Team Rocket", party)
    }

    #[test]
    fn test_defeating_last_opponent_creature_wins() {
        let mut player = create_test_player("Pat Riotum", vec![teacher("Coopasaur")], 0);
        let mut opponent = rocket(vec![student("Colboreon", 80)]);
        // Switch roll, opponent move pick, player accuracy.
        let mut harness = TestHarness::with_picks(&[FIGHT, 0], vec![1, 0, 100]);

        let outcome = BattleRunner::new(harness.ctx())
            .run_trainer_battle(&mut player, &mut opponent)
            .unwrap();

        assert_eq!(outcome, TrainerBattleOutcome::OpponentDefeated);
        assert_eq!(player.roster.party[0].current_health, 100);

        let events = harness.bus.events();
        assert!(events.contains(&BattleEvent::TrainerDefeated {
            trainer: "Team Rocket".to_string()
        }));
        assert_eq!(
            events.last(),
            Some(&BattleEvent::TrainerBattleEnded {
                outcome: TrainerBattleOutcome::OpponentDefeated
            })
        );
    }

    #[test]
    fn test_battle_continues_with_next_opponent_creature() {
        let mut player = create_test_player("Pat Riotum", vec![teacher("Coopasaur")], 0);
        let mut opponent = rocket(vec![student("Colboreon", 80), student("Zoeotto", 100)]);
        let mut harness = TestHarness::with_picks(
            &[FIGHT, 0, FIGHT, 0],
            vec![
                100, 0, 100, // turn 1: no switch, move pick, player KOs Colboreon
                100, 0, 100, // turn 2: same against Zoeotto
            ],
        );

        let outcome = BattleRunner::new(harness.ctx())
            .run_trainer_battle(&mut player, &mut opponent)
            .unwrap();

        assert_eq!(outcome, TrainerBattleOutcome::OpponentDefeated);
        assert!(opponent.roster.party.iter().all(|c| c.is_fainted()));
        assert_eq!(
            harness
                .bus
                .events()
                .iter()
                .filter(|e| matches!(e, BattleEvent::TurnStarted { .. }))
                .count(),
            2
        );
    }

    #[test]
    fn test_switching_opponent_throws_no_move() {
        let mut player = create_test_player("Pat Riotum", vec![teacher("Coopasaur")], 0);
        let mut opponent = rocket(vec![student("Colboreon", 200), student("Zoeotto", 200)]);
        // Switch roll of 20 switches; pick the only candidate; player accuracy.
        let mut harness = TestHarness::with_picks(&[FIGHT, 0], vec![20, 0, 100]);
        let mut runner = BattleRunner::new(harness.ctx());

        assert_eq!(runner.trainer_turn(&mut player, &mut opponent).unwrap(), None);

        // The player's hit lands on the creature that was switched in.
        assert_eq!(opponent.roster.party[0].name, "Zoeotto");
        assert_eq!(opponent.roster.party[0].current_health, 80);
        assert_eq!(opponent.roster.party[1].current_health, 200);
        assert_eq!(player.roster.party[0].current_health, 100);
        assert!(harness.bus.events().contains(&BattleEvent::CreatureSwitched {
            owner: "Team Rocket".to_string(),
            creature: "Zoeotto".to_string(),
        }));
    }

    #[test]
    fn test_roll_above_switch_chance_attacks() {
        let mut player = create_test_player("Pat Riotum", vec![teacher("Coopasaur")], 0);
        let mut opponent = rocket(vec![student("Colboreon", 200), student("Zoeotto", 200)]);
        let mut harness = TestHarness::with_picks(&[FIGHT, 0], vec![21, 0, 100, 1]);
        let mut runner = BattleRunner::new(harness.ctx());

        assert_eq!(runner.trainer_turn(&mut player, &mut opponent).unwrap(), None);

        assert_eq!(opponent.roster.party[0].name, "Colboreon");
        assert_eq!(opponent.roster.party[0].current_health, 80);
        assert_eq!(player.roster.party[0].current_health, 70);
    }

    #[test]
    fn test_player_switch_lets_opponent_attack_new_active() {
        let mut player = create_test_player(
            "Pat Riotum",
            vec![teacher("Coopasaur"), teacher("Cookmander")],
            0,
        );
        let mut opponent = rocket(vec![student("Colboreon", 200)]);
        let mut harness = TestHarness::with_picks(&[SWITCH, 0], vec![1, 0, 1]);
        let mut runner = BattleRunner::new(harness.ctx());

        assert_eq!(runner.trainer_turn(&mut player, &mut opponent).unwrap(), None);

        assert_eq!(player.roster.party[0].name, "Cookmander");
        assert_eq!(player.roster.party[0].current_health, 70);
        assert_eq!(player.roster.party[1].current_health, 100);
        assert_eq!(opponent.roster.party[0].current_health, 200);
    }

    #[test]
    fn test_losing_every_creature_is_a_defeat() {
        let frail = TestCreatureBuilder::new("Mayfieldarow", Kind::Administrator)
            .with_speed(10)
            .with_health(50)
            .with_moves(vec![dress_code()])
            .build();
        let mut player = create_test_player("Pat Riotum", vec![frail], 0);
        let mut opponent = rocket(vec![student("Colboreon", 200)]);
        // Opponent is faster; Excessive Talking (student) is strong against administrators: 120.
        let mut harness = TestHarness::with_picks(&[FIGHT, 0], vec![1, 0, 1]);

        let outcome = BattleRunner::new(harness.ctx())
            .run_trainer_battle(&mut player, &mut opponent)
            .unwrap();

        assert_eq!(outcome, TrainerBattleOutcome::PlayerDefeated);
        assert_eq!(opponent.roster.party[0].current_health, 200);
        assert!(harness.bus.events().contains(&BattleEvent::PartyFainted {
            owner: "Pat Riotum".to_string()
        }));
    }

    #[test]
    fn test_battle_banner_lists_opponent_party() {
        let mut player = create_test_player("Pat Riotum", vec![teacher("Coopasaur")], 0);
        let mut opponent = rocket(vec![student("Colboreon", 80)]);
        let mut harness = TestHarness::with_picks(&[FIGHT, 0], vec![1, 0, 100]);

        BattleRunner::new(harness.ctx())
            .run_trainer_battle(&mut player, &mut opponent)
            .unwrap();

        match &harness.bus.events()[0] {
            BattleEvent::TrainerBattleStarted { opponent, party } => {
                assert_eq!(opponent, "Team Rocket");
                assert_eq!(party.len(), 1);
                assert_eq!(party[0].name, "Colboreon");
                assert_eq!(party[0].current_health, 80);
            }
            other => panic!("Expected TrainerBattleStarted, got {:?}", other),
        }
    }
}
