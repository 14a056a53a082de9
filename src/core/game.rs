//! The game orchestrator.
//!
//! `Game` owns every piece of mutable state (player, skill and achievement
//! masters, dungeons, run statistics, the battle roster) and drives the
//! lifecycle transitions between them. Collaborators receive explicit
//! borrows instead of reaching into shared global state.

use super::battle_log::{BattleLog, LogKind};
use super::constants::{DAMAGE_POPUP_Y_OFFSET, MAX_EQUIPPED_SKILLS, SKILL_INPUT_DEBOUNCE_TICKS};
use super::lifecycle::{BattleOutcome, BattlePhase};
use super::run_stats::RunStats;
use super::tick::TickEvent;
use crate::achievements::AchievementMaster;
use crate::character::Player;
use crate::combat::{nearest_enemy, AttackLine, DamagePopup, Enemy};
use crate::config::GameConfig;
use crate::dungeon::{initial_wave, Dungeon, DungeonMaster};
use crate::error::{GameError, SkillUseError};
use crate::skills::{Element, SkillMaster};
use chrono::Utc;
use tracing::{debug, info, warn};

pub struct Game {
    pub player: Player,
    pub skills: SkillMaster,
    pub achievements: AchievementMaster,
    pub dungeons: DungeonMaster,
    pub stats: RunStats,
    /// Living enemies of the active battle.
    pub enemies: Vec<Enemy>,
    pub battle_log: BattleLog,
    pub popups: Vec<DamagePopup>,
    pub attack_line: Option<AttackLine>,
    phase: BattlePhase,
    current_dungeon: Option<&'static str>,
    floor_cleared: bool,
    frame_count: u64,
    last_skill_trigger: Option<u64>,
    config: GameConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            player: Player::new(),
            skills: SkillMaster::new(),
            achievements: AchievementMaster::new(),
            dungeons: DungeonMaster::new(),
            stats: RunStats::default(),
            enemies: Vec::new(),
            battle_log: BattleLog::new(),
            popups: Vec::new(),
            attack_line: None,
            phase: BattlePhase::Base,
            current_dungeon: None,
            floor_cleared: false,
            frame_count: 0,
            last_skill_trigger: None,
            config,
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// The dungeon of the current or most recent run.
    pub fn current_dungeon(&self) -> Option<&Dungeon> {
        self.current_dungeon.and_then(|id| self.dungeons.get(id))
    }

    /// Floor of the current run, or 0 before any dungeon was entered.
    pub fn current_floor(&self) -> u32 {
        self.current_dungeon().map_or(0, |d| d.current_floor)
    }

    /// True while the roster is empty below the final floor.
    pub fn is_floor_cleared(&self) -> bool {
        self.floor_cleared
    }

    pub(crate) fn advance_frame(&mut self) -> u64 {
        self.frame_count += 1;
        self.frame_count
    }

    /// Consumes the input debounce. Returns false while it is still cooling.
    pub(crate) fn take_skill_trigger(&mut self) -> bool {
        let ready = self
            .last_skill_trigger
            .map_or(true, |last| self.frame_count - last > SKILL_INPUT_DEBOUNCE_TICKS);
        if ready {
            self.last_skill_trigger = Some(self.frame_count);
        }
        ready
    }

    pub(crate) fn log_event(&mut self, event: &TickEvent) {
        self.battle_log.add(event.message(), event.log_kind());
    }

    fn emit(&mut self, events: &mut Vec<TickEvent>, event: TickEvent) {
        self.log_event(&event);
        events.push(event);
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// `Base → DungeonSelect`.
    pub fn show_dungeon_select(&mut self) -> bool {
        if self.phase != BattlePhase::Base {
            return false;
        }
        self.phase = BattlePhase::DungeonSelect;
        true
    }

    /// Enters a dungeon at floor 1 with full hp and mp.
    ///
    /// Returns `Ok(false)` without changing anything when a battle cannot
    /// start from the current phase, and also when the first wave comes out
    /// empty (the game then stays at `Base`).
    pub fn start_dungeon(&mut self, dungeon_id: &str) -> Result<bool, GameError> {
        let dungeon = self
            .dungeons
            .get(dungeon_id)
            .ok_or_else(|| GameError::UnknownDungeon(dungeon_id.to_string()))?;
        let id = dungeon.id();

        if !self.phase.can_start_dungeon() {
            debug!(phase = self.phase.label(), "start_dungeon ignored");
            return Ok(false);
        }

        if let Some(dungeon) = self.dungeons.get_mut(id) {
            dungeon.reset();
        }
        self.current_dungeon = Some(id);
        self.player.restore_full();
        Ok(self.start_battle())
    }

    fn start_battle(&mut self) -> bool {
        let (cx, cy) = self.config.arena_center();
        self.player.x = cx;
        self.player.y = cy;

        self.floor_cleared = false;
        self.popups.clear();
        self.attack_line = None;
        self.enemies = initial_wave(self.current_floor(), self.player.x, self.player.y);

        if self.enemies.is_empty() {
            warn!("initial wave is empty, returning to base");
            self.phase = BattlePhase::Base;
            return false;
        }

        self.phase = BattlePhase::BattleActive;
        info!(
            dungeon = self.current_dungeon.unwrap_or_default(),
            floor = self.current_floor(),
            enemies = self.enemies.len(),
            "battle started"
        );
        self.announce_floor();
        true
    }

    fn announce_floor(&mut self) {
        let floor = self.current_floor();
        let event = TickEvent::FloorStarted {
            floor,
            message: format!("Entered floor {}!", floor),
        };
        self.log_event(&event);
    }

    /// Proceeds to the next floor once the current one is cleared.
    ///
    /// Valid only in `BattleActive` with a cleared roster below the final
    /// floor. The new wave rings the player where they stand.
    pub fn advance_floor(&mut self) -> bool {
        if !self.phase.is_battle_active() || !self.floor_cleared {
            return false;
        }
        let Some(dungeon) = self.current_dungeon.and_then(|id| self.dungeons.get_mut(id)) else {
            return false;
        };
        if dungeon.is_final_floor() {
            return false;
        }
        dungeon.current_floor += 1;

        self.floor_cleared = false;
        self.enemies = initial_wave(self.current_floor(), self.player.x, self.player.y);
        info!(floor = self.current_floor(), "advanced floor");
        self.announce_floor();
        true
    }

    /// `Result(*) → Base` (also backs out of dungeon selection).
    pub fn return_to_base(&mut self) -> bool {
        match self.phase {
            BattlePhase::Result(_) | BattlePhase::DungeonSelect => {
                self.phase = BattlePhase::Base;
                self.clear_battle();
                true
            }
            _ => false,
        }
    }

    /// Global interrupt: abandons whatever is in progress and goes to `Base`.
    pub fn cancel(&mut self) -> Option<TickEvent> {
        if self.phase == BattlePhase::Base {
            return None;
        }
        let was_battle = self.phase.is_battle_active();
        self.phase = BattlePhase::Base;
        self.floor_cleared = false;
        self.clear_battle();
        info!(was_battle, "cancelled to base");

        let event = TickEvent::Cancelled {
            message: "Returned to base.".to_string(),
        };
        self.log_event(&event);
        Some(event)
    }

    fn clear_battle(&mut self) {
        self.enemies.clear();
        self.popups.clear();
        self.attack_line = None;
    }

    /// Sets `Result(Defeat)` once the player has no hp left.
    pub(crate) fn check_defeat(&mut self) -> Option<TickEvent> {
        if !self.phase.is_battle_active() || self.player.hp > 0 {
            return None;
        }
        self.phase = BattlePhase::Result(BattleOutcome::Defeat);
        self.enemies.clear();
        info!(floor = self.current_floor(), "player defeated");
        let event = TickEvent::PlayerDied {
            message: "You have fallen... Experience is kept.".to_string(),
        };
        self.log_event(&event);
        Some(event)
    }

    // ── Skills ──────────────────────────────────────────────────

    /// Uses a skill immediately, bypassing the input debounce.
    ///
    /// Readiness is checked before MP, and a refused use changes nothing
    /// apart from the battle-log line. Offensive skills hit the nearest
    /// enemy. With an empty roster they are wasted but still paid for.
    pub fn use_skill(&mut self, skill_id: &str) -> Result<Vec<TickEvent>, SkillUseError> {
        let Some(skill) = self.skills.get_mut(skill_id) else {
            let err = SkillUseError::UnknownSkill(skill_id.to_string());
            self.battle_log.add(err.to_string(), LogKind::Normal);
            return Err(err);
        };
        if !skill.is_ready() {
            let err = SkillUseError::OnCooldown {
                remaining: skill.current_cooldown_ticks,
            };
            self.battle_log.add(err.to_string(), LogKind::Normal);
            return Err(err);
        }

        let cost = skill.current_cost();
        if !self.player.consume_mp(cost) {
            let err = SkillUseError::InsufficientMp {
                needed: cost,
                available: self.player.mp.floor() as u32,
            };
            self.battle_log.add(err.to_string(), LogKind::Normal);
            return Err(err);
        }

        let (id, element) = (skill.id(), skill.element());
        let power = skill.current_damage() as i32;
        let ranked_up = skill.record_use();
        let display_name = skill.display_name();
        let new_rank = skill.rank;
        let mut events = Vec::new();
        self.stats.record_skill_use();

        if element.is_offensive() {
            self.strike_nearest(id, &display_name, power, element, &mut events);
        } else {
            self.player.heal(power);
            self.popups.push(DamagePopup::heal(
                self.player.x,
                self.player.y - DAMAGE_POPUP_Y_OFFSET,
                power,
            ));
            let event = TickEvent::PlayerHealed {
                amount: power,
                message: format!("{}! Recovered {} HP", display_name, power),
            };
            self.emit(&mut events, event);
        }

        if ranked_up {
            let event = TickEvent::SkillRankUp {
                skill_id: id,
                new_rank,
                message: format!("{} reached rank {}!", display_name, new_rank),
            };
            self.emit(&mut events, event);
            // Ranks feed achievement conditions.
            events.extend(self.check_achievements());
        }

        Ok(events)
    }

    fn strike_nearest(
        &mut self,
        skill_id: &'static str,
        display_name: &str,
        power: i32,
        element: Element,
        events: &mut Vec<TickEvent>,
    ) {
        let Some(index) = nearest_enemy(&self.enemies, self.player.x, self.player.y) else {
            let event = TickEvent::SkillWasted {
                skill_id,
                message: format!("{}! No target.", display_name),
            };
            self.emit(events, event);
            return;
        };

        let enemy = &mut self.enemies[index];
        let damage = enemy.take_damage(power);
        let (ex, ey, enemy_name) = (enemy.x, enemy.y, enemy.name);
        let dead = enemy.is_dead();

        self.attack_line = Some(AttackLine::new(
            (self.player.x, self.player.y),
            (ex, ey),
            element.attack_line_color(),
        ));
        self.popups
            .push(DamagePopup::damage(ex, ey - DAMAGE_POPUP_Y_OFFSET, damage));

        let event = TickEvent::PlayerAttack {
            skill_id,
            enemy_name,
            damage,
            message: format!("{}! {} takes {} damage", display_name, enemy_name, damage),
        };
        self.emit(events, event);

        if dead {
            self.kill_enemy(index, events);
        }
    }

    /// Removes a dead enemy and pays out its reward.
    fn kill_enemy(&mut self, index: usize, events: &mut Vec<TickEvent>) {
        let enemy = self.enemies.remove(index);
        let levels = self.player.gain_exp(enemy.exp);
        self.stats.record_kill();
        debug!(enemy = enemy.name, exp = enemy.exp, "enemy killed");

        let event = TickEvent::EnemyDefeated {
            enemy_name: enemy.name,
            exp_gained: enemy.exp,
            message: format!("Defeated {}! +{} EXP", enemy.name, enemy.exp),
        };
        self.emit(events, event);

        if levels > 0 {
            let event = TickEvent::LeveledUp {
                new_level: self.player.level,
                message: format!("Level up! Now level {}", self.player.level),
            };
            self.emit(events, event);
        }

        if self.enemies.is_empty() && self.phase.is_battle_active() {
            self.complete_floor(events);
        }
    }

    fn complete_floor(&mut self, events: &mut Vec<TickEvent>) {
        let Some((floor, final_floor, name)) = self
            .current_dungeon()
            .map(|d| (d.current_floor, d.is_final_floor(), d.name()))
        else {
            self.phase = BattlePhase::Base;
            return;
        };

        if !final_floor {
            self.floor_cleared = true;
            let event = TickEvent::FloorCleared {
                floor,
                message: format!("Floor {} cleared! Prepare for the next floor.", floor),
            };
            self.emit(events, event);
        } else {
            self.phase = BattlePhase::Result(BattleOutcome::Victory);
            info!(dungeon = name, "dungeon cleared");
            let event = TickEvent::DungeonCleared {
                dungeon_name: name,
                message: format!("{} conquered!", name),
            };
            self.emit(events, event);
        }
    }

    /// Equips a skill, or unequips it if it already is.
    /// Returns whether the skill is equipped afterwards.
    pub fn toggle_equip(&mut self, skill_id: &str) -> Result<bool, GameError> {
        let skill = self
            .skills
            .get(skill_id)
            .ok_or_else(|| GameError::UnknownSkill(skill_id.to_string()))?;
        let id = skill.id();

        let equipped = &mut self.player.equipped_skills;
        if let Some(pos) = equipped.iter().position(|s| s == id) {
            equipped.remove(pos);
            return Ok(false);
        }
        if equipped.len() >= MAX_EQUIPPED_SKILLS {
            return Err(GameError::EquipLimit(MAX_EQUIPPED_SKILLS));
        }
        equipped.push(id.to_string());
        Ok(true)
    }

    // ── Achievements ────────────────────────────────────────────

    /// Polls achievements, applying the bonus of each new unlock.
    pub fn check_achievements(&mut self) -> Vec<TickEvent> {
        let ranks = self.skills.ranks();
        let now = Utc::now().timestamp_millis();
        let unlocked = self
            .achievements
            .evaluate(&mut self.player, &self.stats, &ranks, now);

        let mut events = Vec::with_capacity(unlocked.len());
        for def in unlocked {
            info!(id = def.id, "achievement unlocked");
            let event = TickEvent::AchievementUnlocked {
                id: def.id,
                name: def.name,
                message: format!("Achievement unlocked: {}", def.name),
            };
            self.emit(&mut events, event);
        }
        events
    }
}
