//! Integration tests for achievement unlocking and passive bonuses

use delve::achievements::{AchievementMaster, HIDDEN_PLACEHOLDER};
use delve::core::{Game, RunStats, TickEvent};

#[test]
fn test_hidden_achievements_are_masked_until_unlocked() {
    let game = Game::new();
    let hidden: Vec<_> = game
        .achievements
        .all()
        .iter()
        .filter(|a| a.is_hidden())
        .collect();
    assert_eq!(hidden.len(), 5);
    for achievement in hidden {
        assert_eq!(achievement.display_name(), HIDDEN_PLACEHOLDER);
        assert_eq!(achievement.display_description(), HIDDEN_PLACEHOLDER);
    }

    let public = game.achievements.get("kill_10").unwrap();
    assert_eq!(public.display_name(), "Hunter");
}

#[test]
fn test_flawless_century_unlocks_everything_at_once() {
    let mut game = Game::new();
    game.stats = RunStats {
        enemies_killed: 100,
        total_damage_taken: 0,
        total_skill_uses: 0,
    };

    let events = game.check_achievements();
    let ids: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            TickEvent::AchievementUnlocked { id, .. } => Some(*id),
            _ => None,
        })
        .collect();
    assert_eq!(
        ids,
        vec![
            "first_kill",
            "kill_10",
            "kill_100",
            "hidden_no_death",
            "hidden_perfect_dodge"
        ]
    );

    // 10 + 1 + 3 + 10
    assert_eq!(game.player.effective_attack(), 24);
    assert_eq!(game.player.effective_defense(), 15);
    assert_eq!(game.player.effective_max_hp(), 170);
    assert_eq!(game.player.effective_speed(), 5.0);
    // Max hp bonuses top the current hp up.
    assert_eq!(game.player.hp, 170);

    let hidden = game.achievements.get("hidden_no_death").unwrap();
    assert_eq!(hidden.display_name(), "Untouchable");
    assert!(hidden.unlocked_at().is_some());
}

#[test]
fn test_damage_taken_blocks_flawless_achievements() {
    let mut game = Game::new();
    game.stats.enemies_killed = 120;
    game.stats.total_damage_taken = 1;
    game.check_achievements();

    assert!(game.achievements.is_unlocked("kill_100"));
    assert!(!game.achievements.is_unlocked("hidden_no_death"));
    assert!(!game.achievements.is_unlocked("hidden_perfect_dodge"));
    assert_eq!(game.achievements.unlocked_count(), 3);
}

#[test]
fn test_level_achievement_cascades_from_level_up() {
    let mut game = Game::new();
    game.player.level = 9;
    game.player.exp = 0;
    let exp_to_next = game.player.exp_to_next;
    game.player.gain_exp(exp_to_next);
    assert_eq!(game.player.level, 10);

    game.check_achievements();
    assert!(game.achievements.is_unlocked("level_10"));
    assert_eq!(
        game.player.effective_max_mp(),
        game.player.max_mp + 15,
        "Seasoned adds 15 max MP on top of the leveled base"
    );
}

#[test]
fn test_unlocked_effects_match_player_modifiers() {
    let mut game = Game::new();
    game.stats.enemies_killed = 10;
    game.stats.total_skill_uses = 1000;
    game.stats.total_damage_taken = 40;
    game.check_achievements();

    let effects = game.achievements.unlocked_effects();
    let modifiers = game.player.status_modifiers;
    assert_eq!(effects.attack, modifiers.attack);
    assert_eq!(effects.defense, modifiers.defense);
    assert_eq!(effects.max_hp, modifiers.max_hp);
    assert_eq!(effects.max_mp, modifiers.max_mp);
    assert_eq!(effects.attack, 4);
    assert_eq!(effects.max_mp, 30);
}

#[test]
fn test_restore_skips_top_up() {
    let mut master = AchievementMaster::new();
    let mut game = Game::new();
    game.player.hp = 50;

    assert!(master.restore("kill_100", true, Some(1_700_000_000_000), &mut game.player));
    assert_eq!(game.player.effective_max_hp(), 120);
    assert_eq!(game.player.hp, 50);

    // Already unlocked: no second application.
    assert!(!master.restore("kill_100", true, None, &mut game.player));
    assert!(!master.restore("kill_100", false, None, &mut game.player));
    assert_eq!(game.player.status_modifiers.attack, 10);
    assert_eq!(
        master.get("kill_100").unwrap().unlocked_at(),
        Some(1_700_000_000_000)
    );
}
