use crate::domain::{Birthday, Name, Phone, Record};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDto {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
}

impl From<&Record> for RecordDto {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            phones: record.phones().iter().map(Phone::to_string).collect(),
            birthday: record.birthday().map(Birthday::to_string),
        }
    }
}

impl TryFrom<RecordDto> for Record {
    type Error = CoreError;

    fn try_from(dto: RecordDto) -> Result<Self, Self::Error> {
        let mut record = Record::new(Name::new(&dto.name)?);
        for phone in &dto.phones {
            record.add_phone(phone)?;
        }
        if let Some(birthday) = dto.birthday.as_deref() {
            record.set_birthday(birthday)?;
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::RecordDto;
    use crate::domain::{Name, Record};
    use crate::error::CoreError;

    #[test]
    fn dto_preserves_phone_order_and_birthday() {
        let mut record = Record::new(Name::new("Ada").unwrap());
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();
        record.set_birthday("10.12.1815").unwrap();

        let dto = RecordDto::from(&record);
        assert_eq!(dto.phones, vec!["2222222222", "1111111111"]);
        assert_eq!(dto.birthday.as_deref(), Some("10.12.1815"));

        let restored = Record::try_from(dto).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn dto_revalidates_fields() {
        let dto = RecordDto {
            name: "Ada".to_string(),
            phones: vec!["123".to_string()],
            birthday: None,
        };
        assert!(matches!(
            Record::try_from(dto),
            Err(CoreError::InvalidPhoneLength { .. })
        ));

        let dto = RecordDto {
            name: "Ada".to_string(),
            phones: vec![],
            birthday: Some("31.02.1990".to_string()),
        };
        assert!(matches!(
            Record::try_from(dto),
            Err(CoreError::InvalidCalendarDate(_))
        ));
    }
}
