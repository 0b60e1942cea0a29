//! Tokenizing of bot input lines.

use crate::error::CommandError;
use std::str::FromStr;

/// A bot command word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    AddPhone,
    RemovePhone,
    EditPhone,
    Delete,
    Search,
    Export,
    Help,
    Exit,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 16] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::AddPhone,
        Command::RemovePhone,
        Command::EditPhone,
        Command::Delete,
        Command::Search,
        Command::Export,
        Command::Help,
        Command::Exit,
    ];

    /// Usage line shown in `help` and in missing-argument replies.
    pub fn usage(self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add <name> [phone] [DD.MM.YYYY]",
            Command::Change => "change <name> <new phone>",
            Command::Phone => "phone <name>",
            Command::All => "all",
            Command::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Command::ShowBirthday => "show-birthday <name>",
            Command::Birthdays => "birthdays [days]",
            Command::AddPhone => "add-phone <name> <phone>",
            Command::RemovePhone => "remove-phone <name> <phone>",
            Command::EditPhone => "edit-phone <name> <old phone> <new phone>",
            Command::Delete => "delete <name>",
            Command::Search => "search <query>",
            Command::Export => "export",
            Command::Help => "help",
            Command::Exit => "exit | close",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "add-phone" => Ok(Command::AddPhone),
            "remove-phone" => Ok(Command::RemovePhone),
            "edit-phone" => Ok(Command::EditPhone),
            "delete" => Ok(Command::Delete),
            "search" => Ok(Command::Search),
            "export" => Ok(Command::Export),
            "help" => Ok(Command::Help),
            "exit" | "close" => Ok(Command::Exit),
            _ => Err(CommandError::UnknownCommand(s.to_string())),
        }
    }
}

/// Split a line into its command word and arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?;
    Some((command, tokens.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(
            parse_input("  add   Alice 0501234567 "),
            Some(("add", vec!["Alice", "0501234567"]))
        );
        assert_eq!(parse_input("all"), Some(("all", vec![])));
        assert_eq!(parse_input("   "), None);
    }

    #[test]
    fn test_command_from_str_is_case_insensitive() {
        assert_eq!("ADD".parse::<Command>(), Ok(Command::Add));
        assert_eq!("Show-Birthday".parse::<Command>(), Ok(Command::ShowBirthday));
        assert_eq!("close".parse::<Command>(), Ok(Command::Exit));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Exit));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            "fly".parse::<Command>(),
            Err(CommandError::UnknownCommand("fly".to_string()))
        );
    }

    #[test]
    fn test_every_command_has_distinct_usage() {
        let mut usages: Vec<&str> = Command::ALL.iter().map(|c| c.usage()).collect();
        usages.sort_unstable();
        usages.dedup();
        assert_eq!(usages.len(), Command::ALL.len());
    }
}
