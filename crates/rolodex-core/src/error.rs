use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("contact name is required")]
    EmptyName,
    #[error("phone must be {expected} characters, got {actual}")]
    InvalidPhoneLength { expected: usize, actual: usize },
    #[error("phone must contain only digits: {0}")]
    InvalidPhoneDigits(String),
    #[error("phone not found: {0}")]
    PhoneNotFound(String),
    #[error("contact not found: {0}")]
    RecordNotFound(String),
    #[error("invalid date format (expected DD.MM.YYYY): {0}")]
    InvalidDateFormat(String),
    #[error("date does not exist: {0}")]
    InvalidCalendarDate(String),
}
