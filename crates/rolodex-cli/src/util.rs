use crate::error::invalid_input;
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};

// Birthdays are stored as DD.MM.YYYY, so `--today` stays within four digit years.
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date_flag(raw: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| invalid_input("invalid date format: expected YYYY-MM-DD"))?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(invalid_input(format!(
            "date out of range: year must be between {MIN_YEAR} and {MAX_YEAR}"
        )));
    }
    Ok(date)
}
