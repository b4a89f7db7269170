use crate::error::CoreError;
use chrono::NaiveDate;
use std::fmt;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

const PATTERN_LEN: usize = 10;
const DIGIT_OFFSETS: [usize; 8] = [0, 1, 3, 4, 6, 7, 8, 9];

/// A calendar birthday written as `DD.MM.YYYY`.
///
/// The two separators may be any single character (`15/06/1990` and
/// `15-06-1990` are both accepted); the fields are read by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let chars: Vec<char> = raw.chars().collect();
        if chars.len() != PATTERN_LEN
            || DIGIT_OFFSETS
                .iter()
                .any(|&offset| !chars[offset].is_ascii_digit())
        {
            return Err(CoreError::InvalidDateFormat(raw.to_string()));
        }

        let day = read_number(&chars[0..2]);
        let month = read_number(&chars[3..5]);
        let year = read_number(&chars[6..10]);

        // No year zero in the proleptic calendar used for birthdays.
        if year == 0 {
            return Err(CoreError::InvalidCalendarDate(raw.to_string()));
        }

        NaiveDate::from_ymd_opt(year as i32, month, day)
            .map(Self)
            .ok_or_else(|| CoreError::InvalidCalendarDate(raw.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

fn read_number(digits: &[char]) -> u32 {
    digits
        .iter()
        .filter_map(|ch| ch.to_digit(10))
        .fold(0, |acc, digit| acc * 10 + digit)
}

#[cfg(test)]
mod tests {
    use super::Birthday;
    use crate::error::CoreError;
    use chrono::NaiveDate;

    #[test]
    fn birthday_parses_leap_day() {
        let birthday = Birthday::parse("29.02.2020").unwrap();
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(2020, 2, 29).unwrap());
    }

    #[test]
    fn birthday_accepts_any_separator() {
        let slash = Birthday::parse("15/06/1990").unwrap();
        let mixed = Birthday::parse("15x06-1990").unwrap();
        assert_eq!(slash, mixed);
        assert_eq!(slash.to_string(), "15.06.1990");
    }

    #[test]
    fn birthday_rejects_iso_layout() {
        let err = Birthday::parse("2022-02-29").unwrap_err();
        assert_eq!(err, CoreError::InvalidDateFormat("2022-02-29".to_string()));
    }

    #[test]
    fn birthday_rejects_short_and_long_text() {
        assert!(matches!(
            Birthday::parse("1.6.1990"),
            Err(CoreError::InvalidDateFormat(_))
        ));
        assert!(matches!(
            Birthday::parse("15.06.19901"),
            Err(CoreError::InvalidDateFormat(_))
        ));
        assert!(matches!(
            Birthday::parse(""),
            Err(CoreError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn birthday_rejects_non_digit_fields() {
        assert!(matches!(
            Birthday::parse("1a.06.1990"),
            Err(CoreError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn birthday_rejects_impossible_dates() {
        assert_eq!(
            Birthday::parse("31.13.2020").unwrap_err(),
            CoreError::InvalidCalendarDate("31.13.2020".to_string())
        );
        assert!(matches!(
            Birthday::parse("30.02.2021"),
            Err(CoreError::InvalidCalendarDate(_))
        ));
        assert!(matches!(
            Birthday::parse("29.02.2021"),
            Err(CoreError::InvalidCalendarDate(_))
        ));
        assert!(matches!(
            Birthday::parse("01.01.0000"),
            Err(CoreError::InvalidCalendarDate(_))
        ));
    }

    #[test]
    fn birthday_renders_zero_padded() {
        let birthday = Birthday::parse("05.01.2001").unwrap();
        assert_eq!(birthday.to_string(), "05.01.2001");
    }
}
