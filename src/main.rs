//! Headless driver: loads the save, plays a dungeon on autopilot and saves.
//!
//! Usage:
//!   delve [--dungeon <id>] [--ticks <n>] [--seed <n>] [--save <path>] [--fresh]
//!
//! Examples:
//!   delve                              # cave_1 for one simulated minute
//!   delve --dungeon forest_1 --ticks 36000
//!   delve --seed 42 --save /tmp/delve.json --fresh

use delve::autopilot;
use delve::core::{BattlePhase, Game, TickEvent};
use delve::utils::build_info::version_string;
use delve::utils::{FileStore, MemoryStore, SaveStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct CliOptions {
    dungeon: String,
    ticks: u64,
    seed: Option<u64>,
    save_path: Option<PathBuf>,
    fresh: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            dungeon: "cave_1".to_string(),
            ticks: 3600,
            seed: None,
            save_path: None,
            fresh: false,
        }
    }
}

enum Command {
    Run(CliOptions),
    Version,
    Help,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Version) => {
            println!("{}", version_string());
            return ExitCode::SUCCESS;
        }
        Ok(Command::Help) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'delve --help' for usage.");
            return ExitCode::from(2);
        }
    };

    let mut store = open_store(&options);
    let mut game = Game::new();
    if !options.fresh {
        match game.load_from(store.as_ref()) {
            Ok(true) => {}
            Ok(false) => info!("no save found, starting fresh"),
            Err(e) => warn!("could not load save, starting fresh: {}", e),
        }
    }

    match game.start_dungeon(&options.dungeon) {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("Could not start {}", options.dungeon);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    }

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut unlocked = Vec::new();
    for _ in 0..options.ticks {
        let result = autopilot::step(&mut game, &mut rng);
        for event in &result.events {
            if let TickEvent::AchievementUnlocked { name, .. } = event {
                unlocked.push(*name);
            }
        }
        if result.save_requested || result.autosave_due {
            save(&game, store.as_mut());
        }
        if !game.phase().is_battle_active() {
            break;
        }
    }

    print_summary(&game, &unlocked);
    save(&game, store.as_mut());
    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = CliOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-d" | "--dungeon" => {
                options.dungeon = value_of(args, i)?.to_string();
                i += 1;
            }
            "-t" | "--ticks" => {
                options.ticks = value_of(args, i)?
                    .parse()
                    .map_err(|_| "--ticks expects a number".to_string())?;
                i += 1;
            }
            "-s" | "--seed" => {
                options.seed = Some(
                    value_of(args, i)?
                        .parse()
                        .map_err(|_| "--seed expects a number".to_string())?,
                );
                i += 1;
            }
            "--save" => {
                options.save_path = Some(PathBuf::from(value_of(args, i)?));
                i += 1;
            }
            "--fresh" => options.fresh = true,
            "-v" | "--version" => return Ok(Command::Version),
            "-h" | "--help" => return Ok(Command::Help),
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(Command::Run(options))
}

fn value_of(args: &[String], i: usize) -> Result<&str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{} expects a value", args[i]))
}

fn open_store(options: &CliOptions) -> Box<dyn SaveStore> {
    if let Some(path) = &options.save_path {
        return Box::new(FileStore::new(path));
    }
    match FileStore::default_location() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("no save location available, progress will not persist: {}", e);
            Box::new(MemoryStore::new())
        }
    }
}

fn save(game: &Game, store: &mut dyn SaveStore) {
    if let Err(e) = game.save_to(store) {
        warn!("save failed: {}", e);
    }
}

fn print_summary(game: &Game, unlocked: &[&str]) {
    let player = &game.player;
    let dungeon = game.current_dungeon().map_or("-", |d| d.name());
    let outcome = match game.phase() {
        BattlePhase::BattleActive => "in progress",
        phase => phase.label(),
    };

    println!("╔═══════════════════════════════════════════════╗");
    println!("║                 DELVE SUMMARY                 ║");
    println!("╚═══════════════════════════════════════════════╝");
    println!("  Dungeon:      {} (floor {})", dungeon, game.current_floor());
    println!("  Outcome:      {}", outcome);
    println!("  Ticks:        {}", game.frame_count());
    println!(
        "  Level:        {} ({}/{} EXP)",
        player.level, player.exp, player.exp_to_next
    );
    println!(
        "  HP / MP:      {}/{}  {:.0}/{}",
        player.hp,
        player.effective_max_hp(),
        player.mp,
        player.effective_max_mp()
    );
    println!("  Kills:        {}", game.stats.enemies_killed);
    println!("  Damage taken: {}", game.stats.total_damage_taken);
    println!("  Skill uses:   {}", game.stats.total_skill_uses);
    println!();
    println!("  Skills:");
    for skill in game.skills.all() {
        println!("    {:<18} x{}", skill.display_name(), skill.usage_count);
    }
    println!(
        "  Achievements: {}/{}",
        game.achievements.unlocked_count(),
        game.achievements.all().len()
    );
    for name in unlocked {
        println!("    new: {}", name);
    }
}

fn print_usage() {
    println!("Delve - headless action-RPG runner\n");
    println!("Usage: delve [options]\n");
    println!("Options:");
    println!("  -d, --dungeon <id>   Dungeon to enter (cave_1, forest_1)");
    println!("  -t, --ticks <n>      Ticks to simulate, 60 per second (default 3600)");
    println!("  -s, --seed <n>       Seed for reproducible spawns");
    println!("      --save <path>    Save file (default ~/.delve/save.json)");
    println!("      --fresh          Ignore the existing save");
    println!("  -v, --version        Show version information");
    println!("  -h, --help           Show this help message");
}
