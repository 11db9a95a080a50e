//! Dice Arena CLI
//!
//! Plays a number of rounds instantly for a list of players and prints every
//! round's rolls and the final standings.

use clap::Parser;
use colored::Colorize;
use serde::Serialize;

use dicearena::arena::{
    DieFace, GameSettings, RandomRolls, Ranking, RollSource, RoundState, ScriptedRolls,
};

/// Dice Arena CLI - quick dice rounds
#[derive(Parser)]
#[command(name = "arenarolls")]
#[command(
    author,
    version,
    about = "Dice Arena CLI - play quick dice rounds from the command line"
)]
struct Cli {
    /// Player names, comma separated (e.g. "Ana,Budi,Citra"). Up to six.
    #[arg(short, long, value_delimiter = ',', required = true)]
    players: Vec<String>,

    /// Number of rounds to play
    #[arg(short, long, default_value = "1")]
    rounds: u32,

    /// Seed the dice for reproducible rounds
    #[arg(long, conflicts_with = "faces")]
    seed: Option<u64>,

    /// Fixed faces to roll instead of random ones, repeated as needed (e.g. "6,3")
    #[arg(long, value_delimiter = ',', value_parser = parse_face)]
    faces: Option<Vec<DieFace>>,

    /// Print the whole game as JSON
    #[arg(long)]
    json: bool,
}

fn parse_face(s: &str) -> Result<DieFace, String> {
    let value: u8 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid face: {}. Use a number from 1 to 6", s))?;
    DieFace::try_from(value)
}

#[derive(Debug, Serialize)]
struct RollRecord {
    player: String,
    face: DieFace,
}

#[derive(Debug, Serialize)]
struct RoundRecord {
    round: u32,
    rolls: Vec<RollRecord>,
    ranking: Ranking,
}

#[derive(Debug, Serialize)]
struct GameRecord {
    rounds: Vec<RoundRecord>,
}

impl GameRecord {
    fn standings(&self) -> Option<&Ranking> {
        self.rounds.last().map(|r| &r.ranking)
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    let cli = Cli::parse();

    let result = match (&cli.faces, cli.seed) {
        (Some(faces), _) => ScriptedRolls::new(faces.clone())
            .and_then(|rolls| play(rolls, &cli.players, cli.rounds)),
        (None, Some(seed)) => play(RandomRolls::seeded(seed), &cli.players, cli.rounds),
        (None, None) => play(RandomRolls::from_entropy(), &cli.players, cli.rounds),
    };

    let game = match result {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&game) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("{} Failed to encode JSON: {}", "Error:".red().bold(), e);
                std::process::exit(1);
            }
        }
    } else {
        print_game(&game);
    }
}

// ============================================================================
// Playing
// ============================================================================

fn play<S: RollSource>(rolls: S, names: &[String], rounds: u32) -> Result<GameRecord, String> {
    if rounds == 0 {
        return Err("Play at least one round".to_string());
    }

    let mut state = RoundState::new(&GameSettings::default(), rolls);
    for name in names {
        let id = state.add_player().map_err(|e| e.to_string())?;
        state
            .rename_player(id, name.trim())
            .map_err(|e| e.to_string())?;
    }

    let mut records = Vec::with_capacity(rounds as usize);
    for _ in 0..rounds {
        let orders = state.roll_all().map_err(|e| e.to_string())?;
        let rolls = orders
            .iter()
            .map(|order| RollRecord {
                player: state
                    .player(order.player)
                    .map(|p| p.display_name.clone())
                    .unwrap_or_default(),
                face: order.face,
            })
            .collect();
        // No animations here, so the round settles right away.
        let ranking = state.settle();
        records.push(RoundRecord {
            round: ranking.round,
            rolls,
            ranking,
        });
    }

    Ok(GameRecord { rounds: records })
}

// ============================================================================
// Output
// ============================================================================

const RULE: &str = "═══════════════════════════════════════";

fn print_game(game: &GameRecord) {
    for round in &game.rounds {
        println!("\n{}", RULE.cyan());
        println!("{} {}", "Round".bold().white(), round.round.to_string().yellow().bold());
        let rolls: Vec<String> = round
            .rolls
            .iter()
            .map(|r| {
                let face = format!("[{} {}]", r.face.glyph(), r.face);
                let face = match r.face.value() {
                    6 => face.bright_green().bold().to_string(),
                    1 => face.bright_red().to_string(),
                    _ => face.bright_white().bold().to_string(),
                };
                format!("{}: {}", r.player, face)
            })
            .collect();
        println!("{} {}", "Rolls:".bold().white(), rolls.join(", "));
    }

    let Some(standings) = game.standings() else {
        return;
    };

    println!("{}", RULE.cyan());
    println!("{}", "Final standings".bold().white());
    for (position, entry) in standings.entries.iter().enumerate() {
        let line = format!("{}. {} : {}", position + 1, entry.name, entry.total_score);
        if position == 0 {
            println!("  {}", line.bright_green().bold());
        } else {
            println!("  {}", line);
        }
    }
    if let Some(winner) = standings.winner() {
        if let Some(face) = winner.last_roll {
            println!("{} {} ({})", "Winner:".bold().white(), winner.name.yellow().bold(), face.describe());
        }
    }
    println!("{}", RULE.cyan());
}
