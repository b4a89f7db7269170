use crate::commands::{CommandResult, Context};
use rolodex_core::rules::{birthdays_per_week, weekday_name, ReportDay};

pub fn add_birthday(ctx: &mut Context<'_>, name: &str, date: &str) -> CommandResult {
    ctx.book.find_mut(name)?.set_birthday(date)?;
    Ok(vec!["Birthday added sucessfully.".to_string()])
}

pub fn show_birthday(ctx: &mut Context<'_>, name: &str) -> CommandResult {
    let record = ctx.book.find(name)?;
    Ok(vec![record.birthday_label()])
}

pub fn birthdays(ctx: &mut Context<'_>) -> CommandResult {
    let entries = ctx.book.birthday_list();
    let report = birthdays_per_week(ctx.today, &entries);
    if report.is_empty() {
        return Ok(vec!["No birthdays in the coming week.".to_string()]);
    }
    Ok(report.iter().map(format_report_day).collect())
}

fn format_report_day(day: &ReportDay) -> String {
    format!("{:<9} : {}", weekday_name(day.weekday), day.names.join(", "))
}
