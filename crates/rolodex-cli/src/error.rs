use anyhow::Error;
use rolodex_config::ConfigError;
use rolodex_core::CoreError;
use rolodex_store::error::{StoreError, StoreErrorKind};
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

/// Failures of a single interpreter command. These never end the session;
/// each one becomes a line of output.
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("wrong number of arguments for {command}")]
    Format { command: &'static str },
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub fn user_message(err: &CommandError) -> String {
    match err {
        CommandError::Unknown(_) => "Invalid command.".to_string(),
        CommandError::Format { .. } => "Invalid command format.".to_string(),
        CommandError::Core(core) => match core {
            CoreError::EmptyName => "Contact name cannot be empty.".to_string(),
            CoreError::InvalidPhoneLength { expected, .. } => {
                format!("Phone must be {expected} symbols")
            }
            CoreError::InvalidPhoneDigits(_) => "Phone must contain only digits".to_string(),
            CoreError::PhoneNotFound(phone) => format!("Phone {phone} not found."),
            CoreError::RecordNotFound(name) => format!("Contact {name} not found."),
            CoreError::InvalidDateFormat(_) => {
                "Wrong date format. Please use: DD.MM.YYYY".to_string()
            }
            CoreError::InvalidCalendarDate(text) => format!("Date {text} does not exist."),
        },
    }
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(CliError::InvalidInput(_)) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return ExitCode::from(store_exit_code(store_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::InvalidPath => EXIT_INVALID_INPUT,
        StoreErrorKind::Io
        | StoreErrorKind::Encode
        | StoreErrorKind::Corrupt
        | StoreErrorKind::MissingHomeDir => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidBookPath(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
