//! Interactive command line
//!
//! Each input line is tokenized on whitespace and parsed with clap, so the
//! table gets `help` output and aliases for free.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "table",
    no_binary_name = true,
    disable_version_flag = true,
    about = "Commands at the dice table"
)]
struct TableLine {
    #[command(subcommand)]
    command: TableCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TableCommand {
    /// Add a player (up to six)
    Add,

    /// Remove a player by id
    #[command(visible_alias = "rm")]
    Remove {
        /// Player id as shown in the table, e.g. 2
        id: u32,
    },

    /// Rename a player. An empty name is allowed.
    Rename {
        id: u32,
        /// New display name (may contain spaces)
        name: Vec<String>,
    },

    /// Roll every player's die
    Roll,

    /// Reset all scores to zero
    Reset,

    /// Show the players at the table
    #[command(visible_alias = "ls")]
    List,

    /// Leave the table
    #[command(visible_alias = "exit")]
    Quit,
}

impl TableCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`; parse failures and
    /// `help` yield the text clap would print.
    pub fn parse_line(line: &str) -> Result<Option<TableCommand>, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(None);
        }

        TableLine::try_parse_from(words)
            .map(|parsed| Some(parsed.command))
            .map_err(|e| e.to_string())
    }
}

/// Join the words of a `rename` back into one name
pub fn joined_name(words: &[String]) -> String {
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(TableCommand::parse_line("   "), Ok(None));
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(TableCommand::parse_line("add"), Ok(Some(TableCommand::Add)));
        assert_eq!(TableCommand::parse_line("roll"), Ok(Some(TableCommand::Roll)));
        assert_eq!(TableCommand::parse_line("ls"), Ok(Some(TableCommand::List)));
        assert_eq!(TableCommand::parse_line("exit"), Ok(Some(TableCommand::Quit)));
    }

    #[test]
    fn test_remove_with_alias() {
        assert_eq!(
            TableCommand::parse_line("rm 3"),
            Ok(Some(TableCommand::Remove { id: 3 }))
        );
        assert!(TableCommand::parse_line("remove abc").is_err());
    }

    #[test]
    fn test_rename_keeps_spaces() {
        let parsed = TableCommand::parse_line("rename 2 Ana   Maria").unwrap();
        match parsed {
            Some(TableCommand::Rename { id, name }) => {
                assert_eq!(id, 2);
                assert_eq!(joined_name(&name), "Ana Maria");
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_rename_to_empty() {
        assert_eq!(
            TableCommand::parse_line("rename 1"),
            Ok(Some(TableCommand::Rename {
                id: 1,
                name: Vec::new()
            }))
        );
    }

    #[test]
    fn test_unknown_command() {
        assert!(TableCommand::parse_line("dance").is_err());
    }
}
