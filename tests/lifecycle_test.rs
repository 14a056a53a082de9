//! Integration test: battle lifecycle
//!
//! Walks the phase machine end to end: base → select → battle → floors →
//! victory → base, plus defeat and the cancel interrupt.

use delve::character::{IdleInput, InputSnapshot, InputSource};
use delve::combat::Enemy;
use delve::core::{BattleOutcome, BattlePhase, Game, TickEvent};
use delve::error::GameError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Kills the whole roster with Power Strike, refreshing cooldown and MP
/// between casts.
fn wipe_roster(game: &mut Game) -> Vec<TickEvent> {
    let mut events = Vec::new();
    while !game.enemies.is_empty() {
        for enemy in &mut game.enemies {
            enemy.hp = 1;
        }
        game.skills.get_mut("power_strike").unwrap().current_cooldown_ticks = 0;
        game.player.restore_full();
        events.extend(game.use_skill("power_strike").unwrap());
    }
    events
}

#[test]
fn test_full_dungeon_clear() {
    let mut game = Game::new();
    assert_eq!(game.phase(), BattlePhase::Base);
    assert!(game.show_dungeon_select());
    assert!(game.start_dungeon("cave_1").unwrap());

    for floor in 1..=3 {
        assert_eq!(game.current_floor(), floor);
        assert_eq!(game.enemies.len(), 3 + floor as usize);
        let events = wipe_roster(&mut game);
        if floor < 3 {
            assert!(game.is_floor_cleared());
            assert!(game.advance_floor());
        } else {
            assert!(events
                .iter()
                .any(|e| matches!(e, TickEvent::DungeonCleared { .. })));
        }
    }

    assert_eq!(game.phase(), BattlePhase::Result(BattleOutcome::Victory));
    assert_eq!(game.stats.enemies_killed, 4 + 5 + 6);
    // Floor 3 fields orcs.
    assert!(game.player.level > 1);

    assert!(game.return_to_base());
    assert_eq!(game.phase(), BattlePhase::Base);

    // A new run starts from floor 1 again.
    assert!(game.start_dungeon("cave_1").unwrap());
    assert_eq!(game.current_floor(), 1);
}

#[test]
fn test_victory_requests_save() {
    let mut game = Game::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    game.start_dungeon("cave_1").unwrap();
    game.dungeons.get_mut("cave_1").unwrap().current_floor = 3;
    game.enemies.truncate(1);
    game.enemies[0].hp = 1;

    let result = game.tick(&InputSnapshot::with_skill(4), &mut rng);
    assert_eq!(game.phase(), BattlePhase::Result(BattleOutcome::Victory));
    assert!(result.save_requested);
}

#[test]
fn test_defeat_keeps_experience() {
    let mut game = Game::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    game.player.exp = 42;
    game.start_dungeon("forest_1").unwrap();
    game.player.hp = 1;
    for enemy in &mut game.enemies {
        enemy.x = game.player.x + 20.0;
        enemy.y = game.player.y;
    }

    game.tick(&InputSnapshot::default(), &mut rng);
    assert_eq!(game.phase(), BattlePhase::Result(BattleOutcome::Defeat));
    assert_eq!(game.player.hp, 0);
    assert_eq!(game.player.exp, 42);

    // Skills and floor advance are inert after the battle ends.
    assert!(!game.advance_floor());
    assert!(!game.start_dungeon("forest_1").unwrap());

    assert!(game.return_to_base());
    assert!(game.start_dungeon("forest_1").unwrap());
    assert_eq!(game.player.hp, game.player.effective_max_hp());
}

#[test]
fn test_cancel_from_every_phase() {
    let mut game = Game::new();
    assert!(game.cancel().is_none());

    game.show_dungeon_select();
    assert!(game.cancel().is_some());
    assert_eq!(game.phase(), BattlePhase::Base);

    game.start_dungeon("cave_1").unwrap();
    let event = game.cancel().unwrap();
    assert_eq!(event.message(), "Returned to base.");
    assert!(game.enemies.is_empty());
    assert_eq!(game.phase(), BattlePhase::Base);
}

#[test]
fn test_unknown_dungeon_leaves_phase() {
    let mut game = Game::new();
    game.show_dungeon_select();
    assert!(matches!(
        game.start_dungeon("volcano"),
        Err(GameError::UnknownDungeon(_))
    ));
    assert_eq!(game.phase(), BattlePhase::DungeonSelect);
}

#[test]
fn test_idle_input_source_lets_enemies_close_in() {
    let mut game = Game::new();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut input = IdleInput;
    game.start_dungeon("cave_1").unwrap();

    let mut took_damage = false;
    for _ in 0..600 {
        let result = game.tick(&input.snapshot(), &mut rng);
        took_damage |= result
            .events
            .iter()
            .any(|e| matches!(e, TickEvent::EnemyAttack { .. }));
        if !game.phase().is_battle_active() {
            break;
        }
    }

    assert!(took_damage);
    assert!(game.stats.total_damage_taken > 0);
    assert_eq!(game.stats.total_skill_uses, 0);
    assert_eq!(game.battle_log.last().map(|e| e.text.is_empty()), Some(false));
}

#[test]
fn test_defeat_result_is_final() {
    let mut game = Game::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    game.start_dungeon("cave_1").unwrap();
    game.dungeons.get_mut("cave_1").unwrap().current_floor = 3;
    game.enemies.truncate(1);
    game.enemies[0].x = game.player.x + 20.0;
    game.enemies[0].y = game.player.y;
    game.player.hp = 1;

    game.tick(&InputSnapshot::default(), &mut rng);
    assert_eq!(game.phase(), BattlePhase::Result(BattleOutcome::Defeat));
    assert!(game.enemies.is_empty());

    // A straggler killed after the battle ended cannot flip the outcome.
    let mut goblin = Enemy::spawn("goblin", game.player.x + 40.0, game.player.y);
    goblin.hp = 1;
    game.enemies.push(goblin);
    let events = game.use_skill("fire_ball").unwrap();

    assert_eq!(game.phase(), BattlePhase::Result(BattleOutcome::Defeat));
    assert!(!events
        .iter()
        .any(|e| matches!(e, TickEvent::DungeonCleared { .. })));
    assert!(!game.is_floor_cleared());
}
