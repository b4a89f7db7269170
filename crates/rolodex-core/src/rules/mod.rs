pub mod birthdays;
pub mod dates;

pub use birthdays::{birthdays_per_week, weekday_name, CelebrationWindow, ReportDay};
pub use dates::{anniversary_in, is_leap_year};
