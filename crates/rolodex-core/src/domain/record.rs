use crate::domain::{Birthday, Name, Phone};
use crate::error::CoreError;
use std::fmt;

pub const NO_BIRTHDAY_LABEL: &str = "No Data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Adding a number the record already holds is a no-op.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), CoreError> {
        let phone = Phone::parse(raw)?;
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
        Ok(())
    }

    pub fn remove_phone(&mut self, raw: &str) -> Result<Phone, CoreError> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == raw)
            .ok_or_else(|| CoreError::PhoneNotFound(raw.to_string()))?;
        Ok(self.phones.remove(index))
    }

    /// Replaces every phone equal to `old`. The new value is validated first,
    /// so a rejected value leaves the record untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), CoreError> {
        let replacement = Phone::parse(new)?;
        let mut found = false;
        for phone in self.phones.iter_mut().filter(|phone| phone.as_str() == old) {
            *phone = replacement.clone();
            found = true;
        }
        if !found {
            return Err(CoreError::PhoneNotFound(old.to_string()));
        }
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    pub fn set_birthday(&mut self, raw: &str) -> Result<(), CoreError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    pub fn birthday_label(&self) -> String {
        self.birthday
            .map(|birthday| birthday.to_string())
            .unwrap_or_else(|| NO_BIRTHDAY_LABEL.to_string())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}
