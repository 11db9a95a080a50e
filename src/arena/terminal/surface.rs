//! Colored text display for the table

use colored::Colorize;
use std::fmt::Display;
use std::io::Write;

use crate::arena::{DieFace, Player, Ranking, RankingEntry, RoundError, Surface};

const RULE: &str = "═══════════════════════════════════════";

pub struct TerminalSurface<W: Write> {
    out: W,
}

impl TerminalSurface<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl Display) {
        // A broken terminal is not a game error; drop the line.
        let _ = writeln!(self.out, "{}", text);
    }

    fn rule(&mut self) {
        self.line(RULE.cyan());
    }
}

fn last_roll_label(face: Option<DieFace>) -> String {
    match face {
        Some(face) => format!("{} {}", face.glyph(), face),
        None => "-".to_string(),
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn render_slots(&mut self, players: &[Player], can_add: bool) {
        self.rule();
        if players.is_empty() {
            self.line("No players yet".dimmed());
        }
        for player in players {
            let line = format!(
                "  {:>3}  {:<16} {} {:>4}   {} {}",
                player.id().to_string().cyan(),
                player.display_name.bold(),
                "Total:".white(),
                player.total_score(),
                "Last:".white(),
                last_roll_label(player.last_roll())
            );
            self.line(line);
        }
        if can_add {
            self.line("  [+] add player".green());
        } else {
            self.line("  Table full".yellow());
        }
        self.rule();
        let _ = self.out.flush();
    }

    fn show_scores(&mut self, players: &[Player]) {
        let scores: Vec<String> = players
            .iter()
            .map(|p| format!("{}: {}", p.display_name, p.total_score()))
            .collect();
        self.line(format!("{} {}", "Scores:".bold().white(), scores.join(", ")));
    }

    fn show_winner(&mut self, winner: &RankingEntry, last_roll: Option<DieFace>) {
        self.rule();
        self.line(format!(
            "{} {} {}",
            "Leader:".bold().white(),
            winner.name.yellow().bold(),
            format!("({} points)", winner.total_score).bright_green()
        ));
        if let Some(face) = last_roll {
            self.line(format!("{} {}", "Last roll:".bold().white(), face.describe()));
            for row in face.pip_rows() {
                self.line(format!("    {}", row));
            }
        }
    }

    fn show_ranking(&mut self, ranking: &Ranking) {
        self.line(format!("{} {}", "Ranking after round".bold().white(), ranking.round));
        for (position, entry) in ranking.entries.iter().enumerate() {
            let place = format!("{}.", position + 1);
            let place = if position == 0 {
                place.bright_green().bold()
            } else {
                place.white()
            };
            self.line(format!("  {} {} : {}", place, entry.name, entry.total_score));
        }
        self.rule();
        let _ = self.out.flush();
    }

    fn hide_ranking(&mut self) {
        self.line("Scores reset, ranking cleared".dimmed());
    }

    fn notice(&mut self, error: &RoundError) {
        self.line(format!("{} {}", "Warning:".yellow().bold(), error));
        let _ = self.out.flush();
    }
}
