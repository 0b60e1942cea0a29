//! Command handlers for the assistant bot.
//!
//! Each handler takes the service by reference, runs one operation and turns
//! the outcome into the text printed back to the user. Errors never end the
//! session; they become replies.

use super::parser::{parse_input, Command};
use crate::config::{Config, MAX_BIRTHDAY_WINDOW_DAYS};
use crate::error::{CommandError, CommandResult};
use crate::services::ContactService;
use tracing::{debug, warn};

/// Text printed after a command, and whether the session should end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub exit: bool,
}

impl Reply {
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }

    pub fn exit(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: true,
        }
    }
}

/// Interpret one input line against the service.
///
/// Returns `None` for a blank line.
pub fn dispatch(service: &mut dyn ContactService, config: &Config, line: &str) -> Option<Reply> {
    let (word, args) = parse_input(line)?;
    debug!(command = word, args = args.len(), "Dispatching command");

    let reply = word
        .parse::<Command>()
        .and_then(|command| execute(service, config, command, &args))
        .unwrap_or_else(|err| {
            warn!(command = word, error = %err, "Command failed");
            Reply::message(err.to_string())
        });
    Some(reply)
}

fn execute(
    service: &mut dyn ContactService,
    config: &Config,
    command: Command,
    args: &[&str],
) -> CommandResult<Reply> {
    let arg = |index| required(args, index, command);

    let text = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Add => {
            let name = arg(0)?;
            service.add_record(name, args.get(1).copied(), args.get(2).copied())?;
            format!("Contact {} added.", name)
        }
        Command::Change => {
            let name = arg(0)?;
            if service.change_phone(name, arg(1)?)? {
                format!("Phone for {} changed.", name)
            } else {
                "Contact not found.".to_string()
            }
        }
        Command::Phone => service.get_phone(arg(0)?),
        Command::All => {
            let rendered = service.render_all();
            if rendered.is_empty() {
                "No contacts saved.".to_string()
            } else {
                rendered.trim_end_matches('\n').to_string()
            }
        }
        Command::AddBirthday => {
            let name = arg(0)?;
            if service.add_birthday(name, arg(1)?)? {
                format!("Birthday for {} added.", name)
            } else {
                "Contact not found.".to_string()
            }
        }
        Command::ShowBirthday => service.get_birthday(arg(0)?),
        Command::Birthdays => {
            let days = match args.first() {
                Some(raw) => parse_window(raw)?,
                None => config.birthday_window_days,
            };
            let upcoming = service.upcoming_birthdays(days);
            if upcoming.is_empty() {
                format!("No birthdays within the next {} days.", days)
            } else {
                upcoming
                    .iter()
                    .map(|entry| format!("{}: {}", entry.name, entry.birthday))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        Command::AddPhone => {
            let name = arg(0)?;
            service.add_phone(name, arg(1)?)?;
            format!("Phone added to {}.", name)
        }
        Command::RemovePhone => {
            let name = arg(0)?;
            service.remove_phone(name, arg(1)?)?;
            format!("Phone removed from {}.", name)
        }
        Command::EditPhone => {
            let name = arg(0)?;
            service.edit_phone(name, arg(1)?, arg(2)?)?;
            format!("Phone for {} changed.", name)
        }
        Command::Delete => {
            let name = arg(0)?;
            match service.delete(name) {
                Some(_) => format!("Contact {} deleted.", name),
                None => "Contact not found.".to_string(),
            }
        }
        Command::Search => {
            arg(0)?;
            let matches = service.search(&args.join(" "));
            if matches.is_empty() {
                "No matching contacts.".to_string()
            } else {
                matches
                    .iter()
                    .map(|m| m.contact.to_string())
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        Command::Export => service.export_json()?,
        Command::Help => help_text(),
        Command::Exit => return Ok(Reply::exit("Good bye!")),
    };

    Ok(Reply::message(text))
}

fn required<'a>(args: &[&'a str], index: usize, command: Command) -> CommandResult<&'a str> {
    args.get(index).copied().ok_or(CommandError::MissingArguments {
        usage: command.usage(),
    })
}

fn parse_window(raw: &str) -> CommandResult<u32> {
    let days = raw
        .parse::<u32>()
        .map_err(|_| CommandError::InvalidArgument {
            value: raw.to_string(),
            reason: "days must be a non-negative number".to_string(),
        })?;
    if days > MAX_BIRTHDAY_WINDOW_DAYS {
        return Err(CommandError::InvalidArgument {
            value: raw.to_string(),
            reason: format!("days must be at most {}", MAX_BIRTHDAY_WINDOW_DAYS),
        });
    }
    Ok(days)
}

fn help_text() -> String {
    let mut text = String::from("Available commands:");
    for command in Command::ALL {
        text.push_str("\n  ");
        text.push_str(command.usage());
    }
    text
}
