use crate::commands::{CommandResult, Context};
use rolodex_core::{Name, Record};

/// Adds a phone, creating the contact on first use. A rejected phone does
/// not leave an empty contact behind.
pub fn add(ctx: &mut Context<'_>, name: &str, phone: &str) -> CommandResult {
    if ctx.book.contains(name) {
        ctx.book.find_mut(name)?.add_phone(phone)?;
    } else {
        let mut record = Record::new(Name::new(name)?);
        record.add_phone(phone)?;
        ctx.book.add_record(record);
    }
    Ok(vec!["Contact added sucessfully.".to_string()])
}

pub fn change(ctx: &mut Context<'_>, name: &str, old: &str, new: &str) -> CommandResult {
    ctx.book.find_mut(name)?.edit_phone(old, new)?;
    Ok(vec!["Contact changed sucessfully.".to_string()])
}

pub fn phone(ctx: &mut Context<'_>, name: &str) -> CommandResult {
    let record = ctx.book.find(name)?;
    Ok(vec![record.to_string()])
}

pub fn remove_phone(ctx: &mut Context<'_>, name: &str, phone: &str) -> CommandResult {
    ctx.book.find_mut(name)?.remove_phone(phone)?;
    Ok(vec!["Phone removed sucessfully.".to_string()])
}

pub fn delete(ctx: &mut Context<'_>, name: &str) -> CommandResult {
    ctx.book.delete(name)?;
    Ok(vec!["Contact deleted sucessfully.".to_string()])
}

pub fn all(ctx: &mut Context<'_>) -> CommandResult {
    if ctx.book.is_empty() {
        return Ok(vec!["Address book is empty.".to_string()]);
    }
    Ok(ctx.book.records().map(Record::to_string).collect())
}
