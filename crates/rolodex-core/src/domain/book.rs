use crate::domain::Record;
use crate::error::CoreError;
use chrono::NaiveDate;

/// A contact with a known birthday, as fed to the weekly report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayEntry {
    pub name: String,
    pub birthday: NaiveDate,
}

/// All contacts of a session, keyed by name and kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any record with the same name in place.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Result<&Record, CoreError> {
        self.position(name)
            .map(|index| &self.records[index])
            .ok_or_else(|| CoreError::RecordNotFound(name.to_string()))
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record, CoreError> {
        match self.position(name) {
            Some(index) => Ok(&mut self.records[index]),
            None => Err(CoreError::RecordNotFound(name.to_string())),
        }
    }

    pub fn delete(&mut self, name: &str) -> Result<Record, CoreError> {
        let index = self
            .position(name)
            .ok_or_else(|| CoreError::RecordNotFound(name.to_string()))?;
        Ok(self.records.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn birthday_list(&self) -> Vec<BirthdayEntry> {
        self.records
            .iter()
            .filter_map(|record| {
                record.birthday().map(|birthday| BirthdayEntry {
                    name: record.name().to_string(),
                    birthday: birthday.date(),
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }
}
