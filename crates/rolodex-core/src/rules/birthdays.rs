//! Weekly birthday reminders.
//!
//! The report covers a seven day window starting today, except that on
//! Sunday and Monday the window is pulled back to the preceding Saturday so
//! weekend birthdays are not missed. Weekend birthdays are congratulated on
//! Monday.

use crate::domain::BirthdayEntry;
use crate::rules::dates::anniversary_in;
use chrono::{Datelike, Days, NaiveDate, Weekday};

const WINDOW_DAYS: u64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CelebrationWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CelebrationWindow {
    /// Returns `None` when the window would leave chrono's date range.
    pub fn for_today(today: NaiveDate) -> Option<Self> {
        let lookback = match today.weekday() {
            Weekday::Mon => 2,
            Weekday::Sun => 1,
            _ => 0,
        };
        let start = today.checked_sub_days(Days::new(lookback))?;
        let end = start.checked_add_days(Days::new(WINDOW_DAYS - 1))?;
        Some(Self { start, end })
    }

    pub fn crosses_new_year(&self) -> bool {
        self.start.year() != self.end.year()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Moves a birthday onto the window's year. January birthdays land in the
    /// following year when the window spans New Year.
    pub fn project(&self, birthday: NaiveDate) -> Option<NaiveDate> {
        let mut year = self.start.year();
        if self.crosses_new_year() && birthday.month() == 1 {
            year += 1;
        }
        anniversary_in(birthday, year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDay {
    pub weekday: Weekday,
    pub names: Vec<String>,
}

pub fn birthdays_per_week(today: NaiveDate, entries: &[BirthdayEntry]) -> Vec<ReportDay> {
    let Some(window) = CelebrationWindow::for_today(today) else {
        return Vec::new();
    };
    let mut buckets: [Vec<String>; 7] = Default::default();

    for entry in entries {
        let Some(projected) = window.project(entry.birthday) else {
            continue;
        };
        if window.contains(projected) {
            buckets[bucket(projected.weekday())].push(entry.name.clone());
        }
    }

    let mut monday = std::mem::take(&mut buckets[bucket(Weekday::Sat)]);
    monday.append(&mut buckets[bucket(Weekday::Sun)]);
    monday.append(&mut buckets[bucket(Weekday::Mon)]);
    buckets[bucket(Weekday::Mon)] = monday;

    std::iter::successors(Some(today.weekday()), |weekday| Some(weekday.succ()))
        .take(WINDOW_DAYS as usize)
        .filter(|weekday| !matches!(weekday, Weekday::Sat | Weekday::Sun))
        .filter_map(|weekday| {
            let names = std::mem::take(&mut buckets[bucket(weekday)]);
            if names.is_empty() {
                None
            } else {
                Some(ReportDay { weekday, names })
            }
        })
        .collect()
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn bucket(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}
