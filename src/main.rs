use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pokemann::battle::catch::get_catch_rate_description;
use pokemann::{
    BattleConfig, BattleRunner, Catalog, ConsoleInput, ConsoleOutput, EventSink, JsonOutput,
    Kind, RandomSource, TurnContext, TurnRng,
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pokemann - turn-based creature battles in the terminal
#[derive(Parser, Debug)]
#[command(name = "pokemann", version)]
struct Cli {
    /// Game data file (RON). Uses the built-in roster when omitted.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Battle rules file (RON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Random seed for a reproducible battle
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write battle events as JSON lines instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Meet a wild creature
    Encounter {
        /// Creature to meet. Drawn from the wild pool when omitted.
        #[arg(long)]
        creature: Option<String>,
    },
    /// Battle a trainer
    Battle {
        #[arg(long)]
        opponent: String,
    },
    /// Print the kind effectiveness chart
    Chart,
    /// List the known creatures and trainers
    Roster,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays the game.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pokemann=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.data {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading game data from {}", path.display()))?,
        None => Catalog::builtin().context("loading built-in game data")?,
    };
    let config = match &cli.config {
        Some(path) => BattleConfig::load(path)
            .with_context(|| format!("loading battle config from {}", path.display()))?,
        None => BattleConfig::default(),
    };
    let mut rng = match cli.seed {
        Some(seed) => TurnRng::from_seed(seed),
        None => TurnRng::new_random(),
    };

    match &cli.command {
        Command::Encounter { creature } => {
            let mut wild = match creature {
                Some(name) => catalog.creature(name)?,
                None => catalog.random_wild(&mut rng)?,
            };
            let mut player = catalog.player()?;
            with_context(&cli, &config, &mut rng, |ctx| {
                let outcome = BattleRunner::new(ctx).run_wild_encounter(&mut player, &mut wild)?;
                tracing::info!(?outcome, devices_left = player.capture_devices, "encounter over");
                Ok(())
            })?;
        }
        Command::Battle { opponent } => {
            let mut opponent = catalog.opponent(opponent)?;
            let mut player = catalog.player()?;
            with_context(&cli, &config, &mut rng, |ctx| {
                BattleRunner::new(ctx).run_trainer_battle(&mut player, &mut opponent)?;
                Ok(())
            })?;
        }
        Command::Chart => print_chart(),
        Command::Roster => print_roster(&catalog),
    }

    Ok(())
}

/// Wires stdin and stdout into a turn context. In JSON mode the menus move
/// to stderr so stdout carries only events.
fn with_context(
    cli: &Cli,
    config: &BattleConfig,
    rng: &mut dyn RandomSource,
    play: impl FnOnce(TurnContext<'_>) -> Result<()>,
) -> Result<()> {
    let stdin = io::stdin();
    let menu_writer: Box<dyn Write> = if cli.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let mut input = ConsoleInput::new(stdin.lock(), menu_writer);
    let mut sink: Box<dyn EventSink> = if cli.json {
        Box::new(JsonOutput::new(io::stdout()))
    } else {
        Box::new(ConsoleOutput::new(io::stdout()))
    };

    play(TurnContext::new(&mut input, rng, sink.as_mut(), config))
}

fn print_chart() {
    println!("{:<15} {:<15} {:<8} {}", "Attacking", "Defending", "Result", "Multiplier");
    for (attacking, defending, effectiveness) in Kind::effectiveness_chart() {
        println!(
            "{:<15} {:<15} {:<8} {}",
            attacking.to_string(),
            defending.to_string(),
            effectiveness.to_string(),
            effectiveness.multiplier()
        );
    }
}

fn print_roster(catalog: &Catalog) {
    println!("Creatures:");
    for record in catalog.creature_records() {
        println!(
            "  {:<14} {:<14} health={:<4} catch={} ({})",
            record.name,
            record.kind.to_string(),
            record.stats.health,
            record.catch_rate,
            get_catch_rate_description(record.catch_rate),
        );
    }
    println!();
    println!("Trainers:");
    for record in catalog.opponent_records() {
        println!("  {}: {}", record.name, record.party.join(", "));
    }
}
