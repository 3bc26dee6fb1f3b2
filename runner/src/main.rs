// ═══════════════════════════════════════════════════════════════════════
// Runner — CLI entry point for driving issue phases on a generated map
//
// This is a thin driver: it deals a seeded board, tops up each player's
// reinforcement pool, lets the decision engine fill the order queue and
// then drains it. Orders are listed, not executed.
// ═══════════════════════════════════════════════════════════════════════

use clap::{Parser, Subcommand};
use conquest_agents::{run_issue_phase, Player, TracingObserver};
use conquest_engine::config::{IssueConfig, SetupConfig};
use conquest_engine::setup::{create_initial_state, GameSetup};
use conquest_engine::ConfigError;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "conquest-runner", about = "Territory conquest order-issuing lab")]
struct Cli {
    /// JSON file with setup parameters (players, territories, seed...)
    #[arg(long, global = true)]
    setup: Option<PathBuf>,
    /// JSON file with decision-engine parameters
    #[arg(long, global = true)]
    issue_config: Option<PathBuf>,
    /// Override the setup seed
    #[arg(short, long, global = true)]
    seed: Option<u64>,
    /// Log every decision step (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run issue phases for every player
    Play {
        #[arg(short, long, default_value_t = 1)]
        turns: u32,
        /// Safety limit on issue_order calls per player per turn
        #[arg(short, long, default_value_t = 25)]
        max_calls: usize,
        /// Print per-turn summaries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show defend and attack rankings for every player
    Inspect,
    /// Print the effective configuration as JSON
    Config,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let configs = match load_configs(&cli) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "failed to load configuration");
            eprintln!("Config error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Play { turns, max_calls, json } => cmd_play(&configs, turns, max_calls, json),
        Commands::Inspect => cmd_inspect(&configs),
        Commands::Config => cmd_config(&configs),
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

struct Configs {
    setup: SetupConfig,
    issue: IssueConfig,
}

fn load_configs(cli: &Cli) -> Result<Configs, ConfigError> {
    let mut setup = match &cli.setup {
        Some(path) => SetupConfig::load(path)?,
        None => SetupConfig::default(),
    };
    if let Some(seed) = cli.seed {
        setup.seed = seed;
    }
    let issue = match &cli.issue_config {
        Some(path) => IssueConfig::load(path)?,
        None => IssueConfig::default(),
    };
    Ok(Configs { setup, issue })
}

/// Seat every player from `setup` as a decision-engine Player.
fn seat_players(setup: &GameSetup, config: IssueConfig) -> Vec<Player> {
    setup.seats.iter()
        .map(|seat| {
            let mut player = Player::with_config(seat.id, seat.name.clone(), config);
            for &t in &seat.territories {
                player.add_territory(t);
            }
            *player.hand_mut() = seat.hand.clone();
            player
        })
        .collect()
}

/// Turn income: one unit per three territories, never below three.
fn reinforcement_for(territory_count: usize) -> u32 {
    ((territory_count / 3) as u32).max(3)
}

fn cmd_play(configs: &Configs, turns: u32, max_calls: usize, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut setup = create_initial_state(&configs.setup)?;
    let mut players = seat_players(&setup, configs.issue);
    let mut observer = TracingObserver;

    if !json {
        println!("=== Conquest Order Lab ===\n");
        println!("seed={}, players={}, territories={}, turns={}\n",
            configs.setup.seed, players.len(), setup.map.len(), turns);
    }

    for turn in 1..=turns {
        info!(turn, "starting issue phase");
        for player in &mut players {
            player.set_reinforcements(reinforcement_for(player.territories().len()));
            if let Some(card) = setup.deck.draw() {
                player.hand_mut().add_card(card);
            }

            let summary = run_issue_phase(player, &setup.map, &mut setup.roster, &mut observer, max_calls)?;
            if json {
                let line = serde_json::json!({
                    "turn": turn,
                    "player": player.name(),
                    "summary": summary,
                    "orders": player.orders(),
                });
                println!("{}", line);
            } else {
                println!("--- Turn {} ---", turn);
                print!("{}", player.report(&setup.map));
                println!("  calls: {}, orders added: {}{}\n",
                    summary.calls(),
                    summary.orders_added(),
                    if summary.exhausted { " (call limit reached)" } else { "" });
            }

            // Execution is external; the queue is handed off and emptied
            let drained = player.orders_mut().take_all();
            info!(player = player.name(), orders = drained.len(), "orders handed to execution");
        }
    }

    if !json {
        println!("Players in roster (including neutrals): {}", setup.roster.len());
    }
    Ok(())
}

fn cmd_inspect(configs: &Configs) -> Result<(), Box<dyn std::error::Error>> {
    let setup = create_initial_state(&configs.setup)?;
    let players = seat_players(&setup, configs.issue);

    println!("=== Rankings (seed={}) ===\n", configs.setup.seed);
    for player in &players {
        println!("{} ({})", player.name(), player.id());
        let defend = player.to_defend(&setup.map);
        let attack = player.to_attack(&setup.map);
        println!("  defend: {}", describe(&setup, &defend));
        println!("  attack: {}", describe(&setup, &attack));
        println!("  cards:  {}", player.hand().cards().iter()
            .map(|c| c.card_type().to_string())
            .collect::<Vec<_>>()
            .join(", "));
        println!();
    }
    Ok(())
}

fn describe(setup: &GameSetup, ids: &[conquest_engine::TerritoryId]) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter()
        .map(|&id| format!("{}({})", setup.map.name_of(id), setup.map.armies_of(id).unwrap_or(0)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn cmd_config(configs: &Configs) -> Result<(), Box<dyn std::error::Error>> {
    let out = serde_json::json!({
        "setup": configs.setup,
        "issue": configs.issue,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
