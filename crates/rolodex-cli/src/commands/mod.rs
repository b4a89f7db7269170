use crate::error::{user_message, CommandError};
use chrono::NaiveDate;
use rolodex_core::AddressBook;
use tracing::debug;

pub mod birthdays;
pub mod contacts;

pub type CommandResult = Result<Vec<String>, CommandError>;

pub struct Context<'a> {
    pub book: &'a mut AddressBook,
    pub today: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    RemovePhone { name: String, phone: String },
    Delete { name: String },
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    All,
    Exit,
}

/// Command words the interpreter recognises, used to tell a malformed
/// command apart from an unknown one.
const COMMANDS: &[&str] = &[
    "hello",
    "help",
    "add",
    "change",
    "phone",
    "remove-phone",
    "delete",
    "add-birthday",
    "show-birthday",
    "birthdays",
    "all",
    "close",
    "exit",
];

impl Command {
    /// Splits a line on whitespace. The command word is case-insensitive and
    /// every command takes a fixed number of arguments. A blank line yields
    /// `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            return Ok(None);
        };
        let word = word.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        let command = match (word.as_str(), args.as_slice()) {
            ("hello", []) => Command::Hello,
            ("help", []) => Command::Help,
            ("add", [name, phone]) => Command::Add {
                name: name.to_string(),
                phone: phone.to_string(),
            },
            ("change", [name, old, new]) => Command::Change {
                name: name.to_string(),
                old: old.to_string(),
                new: new.to_string(),
            },
            ("phone", [name]) => Command::Phone {
                name: name.to_string(),
            },
            ("remove-phone", [name, phone]) => Command::RemovePhone {
                name: name.to_string(),
                phone: phone.to_string(),
            },
            ("delete", [name]) => Command::Delete {
                name: name.to_string(),
            },
            ("add-birthday", [name, date]) => Command::AddBirthday {
                name: name.to_string(),
                date: date.to_string(),
            },
            ("show-birthday", [name]) => Command::ShowBirthday {
                name: name.to_string(),
            },
            ("birthdays", []) => Command::Birthdays,
            ("all", []) => Command::All,
            ("close" | "exit", []) => Command::Exit,
            _ => {
                return Err(match COMMANDS.iter().copied().find(|known| *known == word) {
                    Some(command) => CommandError::Format { command },
                    None => CommandError::Unknown(word),
                })
            }
        };
        Ok(Some(command))
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }
}

/// Runs one input line against the book and returns the lines to print.
/// Exit is left to the caller, which owns persistence.
pub fn execute(ctx: &mut Context<'_>, command: Command) -> Vec<String> {
    debug!(?command, "dispatch");
    let result = match command {
        Command::Hello => Ok(vec!["How can I help you?".to_string()]),
        Command::Help => Ok(help_lines()),
        Command::Add { name, phone } => contacts::add(ctx, &name, &phone),
        Command::Change { name, old, new } => contacts::change(ctx, &name, &old, &new),
        Command::Phone { name } => contacts::phone(ctx, &name),
        Command::RemovePhone { name, phone } => contacts::remove_phone(ctx, &name, &phone),
        Command::Delete { name } => contacts::delete(ctx, &name),
        Command::AddBirthday { name, date } => birthdays::add_birthday(ctx, &name, &date),
        Command::ShowBirthday { name } => birthdays::show_birthday(ctx, &name),
        Command::Birthdays => birthdays::birthdays(ctx),
        Command::All => contacts::all(ctx),
        Command::Exit => Ok(Vec::new()),
    };
    result.unwrap_or_else(|err| {
        debug!(error = %err, "command rejected");
        vec![user_message(&err)]
    })
}

/// Parses and runs a line. Parse failures are reported the same way as
/// command failures.
#[cfg(test)]
pub(crate) fn execute_line(ctx: &mut Context<'_>, line: &str) -> Vec<String> {
    match Command::parse(line) {
        Ok(Some(command)) => execute(ctx, command),
        Ok(None) => Vec::new(),
        Err(err) => vec![user_message(&err)],
    }
}

fn help_lines() -> Vec<String> {
    [
        "hello",
        "add <name> <phone>",
        "change <name> <old phone> <new phone>",
        "phone <name>",
        "remove-phone <name> <phone>",
        "delete <name>",
        "add-birthday <name> <DD.MM.YYYY>",
        "show-birthday <name>",
        "birthdays",
        "all",
        "close | exit",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}
