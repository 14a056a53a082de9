//! The per-tick battle pipeline.
//!
//! [`game_tick`] advances the simulation by one frame and returns a
//! [`TickResult`] describing what happened, so the presentation layer can
//! react without the game logic depending on any UI types.

use super::battle_log::LogKind;
use super::constants::{DAMAGE_POPUP_Y_OFFSET, MAX_EQUIPPED_SKILLS, SKILL_SLOT_COUNT};
use super::game::Game;
use super::lifecycle::BattlePhase;
use crate::character::InputSnapshot;
use crate::combat::{update_enemy, update_popups, DamagePopup};
use crate::dungeon::periodic_spawn;
use crate::error::SkillUseError;
use rand::Rng;
use tracing::debug;

/// A single event produced by a game tick or a game action.
///
/// Every variant carries the rendered battle-log line in `message`.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    // ── Skills ──────────────────────────────────────────────────
    /// An offensive skill hit the nearest enemy.
    PlayerAttack {
        skill_id: &'static str,
        enemy_name: &'static str,
        damage: i32,
        message: String,
    },

    /// The heal skill restored hp.
    PlayerHealed { amount: i32, message: String },

    /// An offensive skill was used with no enemy in range of targeting.
    SkillWasted {
        skill_id: &'static str,
        message: String,
    },

    /// A skill use was refused. No state changed.
    SkillRejected {
        skill_id: String,
        reason: SkillUseError,
        message: String,
    },

    /// A skill crossed a rank threshold.
    SkillRankUp {
        skill_id: &'static str,
        new_rank: u32,
        message: String,
    },

    // ── Combat ──────────────────────────────────────────────────
    EnemyAttack {
        enemy_name: &'static str,
        damage: i32,
        message: String,
    },

    EnemyDefeated {
        enemy_name: &'static str,
        exp_gained: u64,
        message: String,
    },

    EnemySpawned {
        enemy_name: &'static str,
        message: String,
    },

    /// Player leveled up (possibly several levels from one award).
    LeveledUp { new_level: u32, message: String },

    // ── Lifecycle ───────────────────────────────────────────────
    FloorStarted { floor: u32, message: String },

    /// Roster emptied below the final floor; waiting for `advance_floor`.
    FloorCleared { floor: u32, message: String },

    /// Final floor cleared.
    DungeonCleared {
        dungeon_name: &'static str,
        message: String,
    },

    PlayerDied { message: String },

    /// Battle abandoned through the cancel input.
    Cancelled { message: String },

    // ── Achievements ────────────────────────────────────────────
    AchievementUnlocked {
        id: &'static str,
        name: &'static str,
        message: String,
    },
}

impl TickEvent {
    pub fn message(&self) -> &str {
        match self {
            TickEvent::PlayerAttack { message, .. }
            | TickEvent::PlayerHealed { message, .. }
            | TickEvent::SkillWasted { message, .. }
            | TickEvent::SkillRejected { message, .. }
            | TickEvent::SkillRankUp { message, .. }
            | TickEvent::EnemyAttack { message, .. }
            | TickEvent::EnemyDefeated { message, .. }
            | TickEvent::EnemySpawned { message, .. }
            | TickEvent::LeveledUp { message, .. }
            | TickEvent::FloorStarted { message, .. }
            | TickEvent::FloorCleared { message, .. }
            | TickEvent::DungeonCleared { message, .. }
            | TickEvent::PlayerDied { message }
            | TickEvent::Cancelled { message }
            | TickEvent::AchievementUnlocked { message, .. } => message,
        }
    }

    /// Styling category of the battle-log line for this event.
    pub fn log_kind(&self) -> LogKind {
        match self {
            TickEvent::PlayerAttack { .. } | TickEvent::EnemyAttack { .. } => LogKind::Damage,
            TickEvent::PlayerHealed { .. } => LogKind::Heal,
            TickEvent::LeveledUp { .. }
            | TickEvent::SkillRankUp { .. }
            | TickEvent::AchievementUnlocked { .. } => LogKind::LevelUp,
            _ => LogKind::Normal,
        }
    }
}

/// Result of processing a single game tick.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Events produced during this tick, in chronological order.
    pub events: Vec<TickEvent>,

    /// True when the battle reached a result this tick and progress should
    /// be persisted. The caller owns the actual IO.
    pub save_requested: bool,

    /// True on ticks where the periodic autosave is due.
    pub autosave_due: bool,

    /// True if any achievement unlocked this tick.
    pub achievements_changed: bool,
}

impl TickResult {
    fn finish(mut self, game: &Game, phase_before: BattlePhase) -> Self {
        let phase = game.phase();
        if phase != phase_before && phase.outcome().is_some() {
            self.save_requested = true;
        }
        self.achievements_changed = self
            .events
            .iter()
            .any(|e| matches!(e, TickEvent::AchievementUnlocked { .. }));
        self
    }
}

/// Processes one frame of the game.
///
/// Outside `BattleActive` only the frame counter and the cancel input are
/// handled. In battle the stages run in a fixed order: regen and cooldowns,
/// movement, skill intents, enemy updates, effect aging, the defeat check,
/// then the periodic achievement poll and spawn. A terminal transition
/// skips whatever stages remain.
///
/// `rng` feeds the periodic spawner. Pass a seeded
/// `rand_chacha::ChaCha8Rng` in tests for deterministic behavior.
pub fn game_tick<R: Rng>(game: &mut Game, input: &InputSnapshot, rng: &mut R) -> TickResult {
    let mut result = TickResult::default();
    let phase_before = game.phase();
    let frame = game.advance_frame();

    let autosave_interval = game.config().autosave_interval_ticks;
    result.autosave_due = autosave_interval > 0 && frame % autosave_interval == 0;

    // ── 1. Global interrupt ─────────────────────────────────────
    if input.cancel {
        if let Some(event) = game.cancel() {
            result.events.push(event);
        }
        return result.finish(game, phase_before);
    }

    if !game.phase().is_battle_active() {
        return result.finish(game, phase_before);
    }

    // ── 2. Regeneration and cooldowns ───────────────────────────
    game.player.regen_tick();
    game.skills.tick_cooldowns();

    // ── 3. Movement ─────────────────────────────────────────────
    if let Some((dx, dy)) = input.movement_vector() {
        let (width, height) = (game.config().arena_width, game.config().arena_height);
        game.player.move_by(dx, dy, width, height);
    }

    // ── 4. Skill intents ────────────────────────────────────────
    for slot in 0..SKILL_SLOT_COUNT {
        if !input.skill_slots[slot] || !game.take_skill_trigger() {
            continue;
        }
        if let Some(id) = game.skills.by_slot(slot).map(|s| s.id()) {
            run_skill(game, id, &mut result.events);
        }
        if !game.phase().is_battle_active() {
            return result.finish(game, phase_before);
        }
    }
    for slot in 0..MAX_EQUIPPED_SKILLS {
        if !input.equipped_slots[slot] {
            continue;
        }
        let Some(id) = game.player.equipped_skills.get(slot).cloned() else {
            continue;
        };
        if !game.take_skill_trigger() {
            continue;
        }
        run_skill(game, &id, &mut result.events);
        if !game.phase().is_battle_active() {
            return result.finish(game, phase_before);
        }
    }

    // ── 5. Enemies ──────────────────────────────────────────────
    update_enemies(game, &mut result.events);

    // ── 6. Effects ──────────────────────────────────────────────
    update_popups(&mut game.popups);
    if let Some(line) = &mut game.attack_line {
        if !line.update() {
            game.attack_line = None;
        }
    }

    // ── 7. Defeat ───────────────────────────────────────────────
    if let Some(event) = game.check_defeat() {
        result.events.push(event);
        return result.finish(game, phase_before);
    }

    // ── 8. Periodic achievement poll ────────────────────────────
    let check_interval = game.config().achievement_check_interval;
    if check_interval > 0 && frame % check_interval == 0 {
        result.events.extend(game.check_achievements());
    }

    // ── 9. Periodic spawn ───────────────────────────────────────
    if let Some(dungeon) = game.current_dungeon().map(|d| d.def()) {
        let interval = u64::from(dungeon.spawn_interval_ticks);
        if interval > 0 && frame % interval == 0 {
            let (width, height) = (game.config().arena_width, game.config().arena_height);
            let enemy = periodic_spawn(dungeon, width, height, rng);
            debug!(enemy = enemy.name, x = enemy.x, y = enemy.y, "periodic spawn");
            let event = TickEvent::EnemySpawned {
                enemy_name: enemy.name,
                message: format!("A {} appears!", enemy.name),
            };
            game.enemies.push(enemy);
            game.log_event(&event);
            result.events.push(event);
        }
    }

    result.finish(game, phase_before)
}

/// Uses a skill on behalf of an input trigger, turning a refusal into an event.
fn run_skill(game: &mut Game, id: &str, events: &mut Vec<TickEvent>) {
    match game.use_skill(id) {
        Ok(produced) => events.extend(produced),
        Err(reason) => events.push(TickEvent::SkillRejected {
            skill_id: id.to_string(),
            message: reason.to_string(),
            reason,
        }),
    }
}

fn update_enemies(game: &mut Game, events: &mut Vec<TickEvent>) {
    let (px, py, radius) = (game.player.x, game.player.y, game.player.radius);

    for i in 0..game.enemies.len() {
        let Some(power) = update_enemy(&mut game.enemies[i], px, py, radius) else {
            continue;
        };
        let enemy_name = game.enemies[i].name;
        let damage = game.player.take_damage(power);
        game.stats.record_damage_taken(damage);
        game.popups.push(DamagePopup::damage(
            game.player.x,
            game.player.y - DAMAGE_POPUP_Y_OFFSET,
            damage,
        ));

        let event = TickEvent::EnemyAttack {
            enemy_name,
            damage,
            message: format!("{} attacks! {} damage", enemy_name, damage),
        };
        game.log_event(&event);
        events.push(event);
    }
}

impl Game {
    /// Advances the game by one frame. See [`game_tick`].
    pub fn tick<R: Rng>(&mut self, input: &InputSnapshot, rng: &mut R) -> TickResult {
        game_tick(self, input, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::lifecycle::BattleOutcome;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn battle() -> Game {
        let mut game = Game::new();
        assert!(game.start_dungeon("cave_1").unwrap());
        game
    }

    #[test]
    fn test_idle_tick_outside_battle_only_counts_frames() {
        let mut game = Game::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let result = game.tick(&InputSnapshot::default(), &mut rng);
        assert!(result.events.is_empty());
        assert_eq!(game.frame_count(), 1);
        assert_eq!(game.phase(), BattlePhase::Base);
    }

    #[test]
    fn test_cancel_returns_to_base() {
        let mut game = battle();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let result = game.tick(&InputSnapshot::cancel(), &mut rng);
        assert_eq!(game.phase(), BattlePhase::Base);
        assert!(game.enemies.is_empty());
        assert!(matches!(result.events[0], TickEvent::Cancelled { .. }));
    }

    #[test]
    fn test_mp_regenerates_in_battle() {
        let mut game = battle();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        game.player.mp = 10.0;
        for _ in 0..20 {
            game.tick(&InputSnapshot::default(), &mut rng);
        }
        assert!((game.player.mp - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_skill_trigger_debounce() {
        let mut game = battle();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let press = InputSnapshot::with_skill(3);
        game.player.hp = 10;

        game.tick(&press, &mut rng);
        assert_eq!(game.skills.get("heal").unwrap().usage_count, 1);

        // Still held: cooldown and debounce both block a second use.
        for _ in 0..5 {
            game.tick(&press, &mut rng);
        }
        assert_eq!(game.skills.get("heal").unwrap().usage_count, 1);
    }

    #[test]
    fn test_one_trigger_use_per_tick() {
        let mut game = battle();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut input = InputSnapshot::default();
        input.skill_slots = [true; SKILL_SLOT_COUNT];
        game.tick(&input, &mut rng);
        assert_eq!(game.stats.total_skill_uses, 1);
    }

    #[test]
    fn test_rejection_surfaces_as_event() {
        let mut game = battle();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        game.player.mp = 0.0;
        let result = game.tick(&InputSnapshot::with_skill(0), &mut rng);
        let rejected = result
            .events
            .iter()
            .find(|e| matches!(e, TickEvent::SkillRejected { .. }))
            .unwrap();
        assert!(rejected.message().contains("not enough MP"));
        assert_eq!(game.stats.total_skill_uses, 0);
    }

    #[test]
    fn test_defeat_requests_save_and_skips_rest() {
        let mut game = battle();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        // Put a goblin in contact and leave the player on 1 hp.
        game.enemies[0].x = game.player.x + 20.0;
        game.enemies[0].y = game.player.y;
        game.player.hp = 1;

        let result = game.tick(&InputSnapshot::default(), &mut rng);
        assert_eq!(game.phase(), BattlePhase::Result(BattleOutcome::Defeat));
        assert!(result.save_requested);
        assert!(matches!(
            result.events.last(),
            Some(TickEvent::PlayerDied { .. })
        ));

        // Result phase is inert.
        let result = game.tick(&InputSnapshot::default(), &mut rng);
        assert!(result.events.is_empty());
        assert!(!result.save_requested);
    }

    #[test]
    fn test_periodic_spawn_on_interval() {
        let mut game = battle();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        // Keep the player out of reach so nothing dies.
        game.enemies.clear();
        let mut spawned = 0;
        for _ in 0..180 {
            let result = game.tick(&InputSnapshot::default(), &mut rng);
            spawned += result
                .events
                .iter()
                .filter(|e| matches!(e, TickEvent::EnemySpawned { .. }))
                .count();
        }
        assert_eq!(spawned, 1);
        assert_eq!(game.enemies.len(), 1);
        let id = game.enemies[0].archetype_id;
        assert!(id == "slime" || id == "goblin");
    }

    #[test]
    fn test_autosave_cadence() {
        let mut game = battle();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut due = 0;
        for _ in 0..1800 {
            if game.tick(&InputSnapshot::default(), &mut rng).autosave_due {
                due += 1;
            }
        }
        assert_eq!(due, 1);
    }

    #[test]
    fn test_flat_arena_still_spawns() {
        let config = GameConfig {
            arena_height: 0.0,
            ..GameConfig::default()
        };
        let mut game = Game::with_config(config);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert!(game.start_dungeon("cave_1").unwrap());
        game.enemies.clear();
        for _ in 0..180 {
            game.tick(&InputSnapshot::default(), &mut rng);
        }
        assert_eq!(game.enemies.len(), 1);
        assert_eq!(game.enemies[0].y, 0.0);
    }
}
