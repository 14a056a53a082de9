// Tick cadence (one tick per rendered frame, ~60 FPS)
pub const TICKS_PER_SECOND: u64 = 60;
pub const ACHIEVEMENT_CHECK_INTERVAL_TICKS: u64 = 60;
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 30;
pub const SKILL_INPUT_DEBOUNCE_TICKS: u64 = 10;

// Arena
pub const ARENA_WIDTH: f64 = 800.0;
pub const ARENA_HEIGHT: f64 = 600.0;

// Player defaults
pub const PLAYER_START_X: f64 = 400.0;
pub const PLAYER_START_Y: f64 = 300.0;
pub const PLAYER_RADIUS: f64 = 15.0;
pub const PLAYER_BASE_SPEED: f64 = 3.0;
pub const PLAYER_BASE_MAX_HP: i32 = 100;
pub const PLAYER_BASE_MAX_MP: i32 = 50;
pub const PLAYER_BASE_ATTACK: i32 = 10;
pub const PLAYER_BASE_DEFENSE: i32 = 5;
pub const PLAYER_BASE_EXP_TO_NEXT: u64 = 100;
pub const PLAYER_MP_REGEN_PER_TICK: f64 = 0.05;
pub const MAX_EQUIPPED_SKILLS: usize = 3;

// Leveling: expToNext *= 1.5, fixed stat deltas per level
pub const EXP_CURVE_MULTIPLIER: f64 = 1.5;
pub const LEVEL_UP_MAX_HP: i32 = 10;
pub const LEVEL_UP_MAX_MP: i32 = 5;
pub const LEVEL_UP_ATTACK: i32 = 2;
pub const LEVEL_UP_DEFENSE: i32 = 1;

// Skill mastery
pub const SKILL_RANK_THRESHOLDS: [u64; 6] = [0, 100, 500, 2000, 10000, 50000];
pub const SKILL_COST_REDUCTION_PER_USE: f64 = 0.001;
pub const SKILL_MAX_COST_REDUCTION: f64 = 0.5;
pub const SKILL_DAMAGE_GROWTH_PER_USE: f64 = 0.01;
pub const SKILL_DEFAULT_COOLDOWN_TICKS: u32 = 180;

// Enemy behavior
pub const ENEMY_SPEED: f64 = 1.5;
pub const ENEMY_ATTACK_INTERVAL_TICKS: u32 = 60;
pub const ENEMY_CONTACT_MARGIN: f64 = 10.0;

// Wave generation
pub const WAVE_BASE_SIZE: u32 = 3;
pub const WAVE_RING_RADIUS: f64 = 200.0;
pub const WAVE_ORC_FLOOR: u32 = 3;
pub const WAVE_SKELETON_FLOOR: u32 = 5;

// Visual effect lifetimes (ticks)
pub const DAMAGE_POPUP_LIFE: u32 = 60;
pub const DAMAGE_POPUP_RISE_PER_TICK: f64 = 2.0;
pub const DAMAGE_POPUP_Y_OFFSET: f64 = 30.0;
pub const ATTACK_LINE_LIFE: u32 = 10;

// Battle log
pub const BATTLE_LOG_MAX_ENTRIES: usize = 50;

// Input
pub const STICK_DEAD_ZONE: f64 = 0.2;
pub const SKILL_SLOT_COUNT: usize = 5;

// Save format
pub const SAVE_VERSION: &str = "1.0";
pub const SAVE_FILE_NAME: &str = "save.json";
