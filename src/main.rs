//! Dice Arena
//!
//! Interactive dice table in the terminal: add players, roll everyone's die
//! with a spin animation and watch the ranking after each round.

use clap::Parser;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use dicearena::arena::terminal::{
    joined_name, StdinConfirm, TableCommand, TerminalBell, TerminalSpinner, TerminalSurface,
};
use dicearena::arena::{
    Collaborators, GameSettings, PlayerId, RandomRolls, RollSource, Table,
    DEFAULT_SETTINGS_FILE,
};

/// Dice Arena - multiplayer dice table
#[derive(Parser)]
#[command(name = "dicearena")]
#[command(
    author,
    version,
    about = "Dice Arena - roll a die against up to five friends"
)]
struct Cli {
    /// Path to the settings file (RON)
    #[arg(short = 'c', long = "config", default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,

    /// Number of players to seat at start
    #[arg(short, long, default_value = "0")]
    players: usize,

    /// Seed the dice for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Spin duration in milliseconds (overrides the settings file)
    #[arg(long)]
    animation_ms: Option<u64>,

    /// Do not ring the terminal bell on rolls
    #[arg(long)]
    no_sound: bool,

    /// Write the effective settings to the config file before playing
    #[arg(long)]
    save_config: bool,
}

// Margin between the spin and the settle deadline, applied when
// only the spin duration is overridden.
const SETTLE_MARGIN_MS: u64 = 200;

fn main() {
    init_logging();
    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(s) => s,
        Err(e) => fail(&e),
    };

    if cli.save_config {
        if let Err(e) = settings.save_to(&cli.config) {
            fail(&e);
        }
        println!("Settings written to {}", cli.config.display());
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => fail(&format!("Failed to start event loop: {e}")),
    };

    let rolls = match cli.seed {
        Some(seed) => RandomRolls::seeded(seed),
        None => RandomRolls::from_entropy(),
    };

    let collaborators = Collaborators {
        surface: Box::new(TerminalSurface::stdout()),
        animator: Box::new(TerminalSpinner::stdout(settings.frame_interval())),
        sound: Box::new(TerminalBell::stdout(settings.sound)),
        confirm: Box::new(StdinConfirm),
    };

    let mut table = Table::new(settings, rolls, collaborators);
    print_intro();

    if cli.players == 0 {
        table.render();
    }
    for _ in 0..cli.players {
        // A full table has already been reported as a notice.
        if table.add_player().is_err() {
            break;
        }
    }

    run_table(&runtime, &mut table);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn fail(message: &str) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), message);
    std::process::exit(1);
}

fn load_settings(cli: &Cli) -> Result<GameSettings, String> {
    let mut settings = GameSettings::load_from(&cli.config)?;

    if let Some(ms) = cli.animation_ms {
        settings.animation_ms = ms;
        if settings.settle_delay_ms < ms {
            settings.settle_delay_ms = ms.saturating_add(SETTLE_MARGIN_MS);
        }
    }
    if cli.no_sound {
        settings.sound = false;
    }

    settings.validate()?;
    Ok(settings)
}

fn print_intro() {
    println!("\n{}", "Dice Arena".bold().yellow());
    println!(
        "Commands: {}, {}, {}, {}, {}, {}, {} (type {} for details)",
        "add".cyan(),
        "remove <id>".cyan(),
        "rename <id> <name>".cyan(),
        "roll".cyan(),
        "reset".cyan(),
        "list".cyan(),
        "quit".cyan(),
        "help".cyan()
    );
}

fn run_table<S: RollSource>(runtime: &Runtime, table: &mut Table<S>) {
    let stdin = std::io::stdin();

    loop {
        print!("{} ", ">".cyan().bold());
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("{} Failed to read input: {}", "Error:".red().bold(), e);
                break;
            }
        }

        match TableCommand::parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(TableCommand::Quit)) => break,
            Ok(Some(command)) => run_command(runtime, table, command),
            Err(text) => println!("{}", text.trim_end()),
        }
    }

    println!("Thanks for playing!");
}

fn run_command<S: RollSource>(runtime: &Runtime, table: &mut Table<S>, command: TableCommand) {
    // Failures have already been shown as notices by the table.
    let _ = match command {
        TableCommand::Add => table.add_player().map(|_| ()),
        TableCommand::Remove { id } => table.remove_player(PlayerId(id)),
        TableCommand::Rename { id, name } => table.rename_player(PlayerId(id), joined_name(&name)),
        TableCommand::Roll => runtime.block_on(table.roll_all()).map(|_| ()),
        TableCommand::Reset => table.reset_round().map(|_| ()),
        TableCommand::List => {
            table.render();
            Ok(())
        }
        TableCommand::Quit => Ok(()),
    };
}
