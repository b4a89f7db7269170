use crate::error::CoreError;
use std::fmt;

pub const PHONE_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Length is checked before content: a short value with letters in it is
    /// a length error.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let len = raw.chars().count();
        if len != PHONE_LEN {
            return Err(CoreError::InvalidPhoneLength {
                expected: PHONE_LEN,
                actual: len,
            });
        }
        if !raw.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(CoreError::InvalidPhoneDigits(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
