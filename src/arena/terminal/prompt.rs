use colored::Colorize;
use std::io::{BufRead, Write};

use crate::arena::Confirm;

/// Asks a `[y/N]` question and reads the answer line
pub struct LineConfirm<R: BufRead, W: Write> {
    input: R,
    out: W,
}

/// Reads the answer from stdin without holding the stdin lock between
/// questions, so the command loop can keep reading lines too.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, question: &str) -> bool {
        ask(&mut std::io::stdout(), question);
        let mut answer = String::new();
        match std::io::stdin().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_yes(&answer),
        }
    }
}

fn ask(out: &mut impl Write, question: &str) {
    let _ = write!(out, "{} {} ", question.yellow().bold(), "[y/N]".dimmed());
    let _ = out.flush();
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }
}

/// Only an explicit yes counts; anything else, including EOF, is a no.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<R, W> {
    fn confirm(&mut self, question: &str) -> bool {
        ask(&mut self.out, question);

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_yes(&answer),
        }
    }
}
