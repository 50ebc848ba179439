//! Ordered metadata record handed to the encoder, plus date-part validation.
use chrono::NaiveDate;
use thiserror::Error;

use crate::types::{DatePart, Field};

/// One credit entry, serialized as `credit=name:role`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credit {
    pub name: String,
    pub role: String,
}

impl Credit {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

/// Raw (not yet cleaned) value of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Credits(Vec<Credit>),
    List(Vec<String>),
}

impl Value {
    fn is_blank(&self) -> bool {
        match self {
            Value::Text(s) => s.trim().is_empty(),
            Value::Credits(credits) => credits.is_empty(),
            Value::List(items) => items.iter().all(|i| i.trim().is_empty()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Vec<Credit>> for Value {
    fn from(credits: Vec<Credit>) -> Self {
        Value::Credits(credits)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

/// Field values for one archive, in the order they will be serialized.
///
/// Blank values are never stored, so an empty record means the user gave
/// nothing worth writing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    entries: Vec<(Field, Value)>,
}

impl MetadataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `field`. Returns false when the value was blank and
    /// therefore dropped; a blank value never removes an existing entry.
    pub fn insert(&mut self, field: Field, value: impl Into<Value>) -> bool {
        let value = value.into();
        if value.is_blank() {
            return false;
        }
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((field, value)),
        }
        true
    }

    pub fn get(&self, field: Field) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v)
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        self.get(field).and_then(Value::as_text)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &Value)> {
        self.entries.iter().map(|(f, v)| (*f, v))
    }

    pub fn fields(&self) -> Vec<Field> {
        self.entries.iter().map(|(f, _)| *f).collect()
    }

    /// True when year, month and day are all set but do not name a real
    /// calendar day (e.g. 2021-02-30). Each part is range-checked on its
    /// own, so this is advisory only.
    pub fn has_impossible_date(&self) -> bool {
        let part = |field| self.text(field).and_then(|s| s.parse::<u32>().ok());
        match (part(Field::Year), part(Field::Month), part(Field::Day)) {
            (Some(y), Some(m), Some(d)) => NaiveDate::from_ymd_opt(y as i32, m, d).is_none(),
            _ => false,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid {part}. Please enter a numeric value between {min} and {max}.")]
pub struct InvalidDatePart {
    pub part: DatePart,
    pub min: u32,
    pub max: u32,
}

/// Validate user input for a date component.
///
/// Returns `Ok(None)` for empty input (the field is skipped) and the parsed
/// value when it is all digits and inside the part's range.
pub fn parse_date_part(part: DatePart, raw: &str) -> Result<Option<u32>, InvalidDatePart> {
    let (min, max) = part.range();
    let invalid = InvalidDatePart { part, min, max };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid);
    }
    match raw.parse::<u32>() {
        Ok(value) if (min..=max).contains(&value) => Ok(Some(value)),
        _ => Err(invalid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_part_bounds() {
        assert_eq!(parse_date_part(DatePart::Year, "1900"), Ok(Some(1900)));
        assert_eq!(parse_date_part(DatePart::Year, "2100"), Ok(Some(2100)));
        assert!(parse_date_part(DatePart::Year, "1899").is_err());
        assert!(parse_date_part(DatePart::Year, "2101").is_err());
        assert!(parse_date_part(DatePart::Month, "0").is_err());
        assert!(parse_date_part(DatePart::Month, "13").is_err());
        assert_eq!(parse_date_part(DatePart::Month, "07"), Ok(Some(7)));
        assert!(parse_date_part(DatePart::Day, "0").is_err());
        assert!(parse_date_part(DatePart::Day, "32").is_err());
        assert_eq!(parse_date_part(DatePart::Day, "31"), Ok(Some(31)));
    }

    #[test]
    fn date_part_rejects_non_numeric() {
        assert!(parse_date_part(DatePart::Year, "20x1").is_err());
        assert!(parse_date_part(DatePart::Year, "-2021").is_err());
        assert!(parse_date_part(DatePart::Month, "1.5").is_err());
        assert!(parse_date_part(DatePart::Day, "99999999999999999999").is_err());
    }

    #[test]
    fn empty_date_part_is_skipped() {
        assert_eq!(parse_date_part(DatePart::Day, ""), Ok(None));
        assert_eq!(parse_date_part(DatePart::Day, "   "), Ok(None));
    }

    #[test]
    fn invalid_message_names_range() {
        let err = parse_date_part(DatePart::Month, "13").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid month. Please enter a numeric value between 1 and 12."
        );
    }

    #[test]
    fn blank_values_are_not_stored() {
        let mut record = MetadataRecord::new();
        assert!(!record.insert(Field::Title, "   "));
        assert!(!record.insert(Field::Credit, Vec::<Credit>::new()));
        assert!(!record.insert(Field::Characters, vec![String::new()]));
        assert!(record.is_empty());
    }

    #[test]
    fn insert_keeps_first_position_on_replace() {
        let mut record = MetadataRecord::new();
        record.insert(Field::Year, "2020");
        record.insert(Field::Title, "A");
        record.insert(Field::Year, "2021");
        assert_eq!(record.fields(), vec![Field::Year, Field::Title]);
        assert_eq!(record.text(Field::Year), Some("2021"));
        assert!(!record.insert(Field::Title, ""));
        assert_eq!(record.text(Field::Title), Some("A"));
    }

    #[test]
    fn impossible_dates_are_flagged() {
        let mut record = MetadataRecord::new();
        record.insert(Field::Year, "2021");
        record.insert(Field::Month, "2");
        assert!(!record.has_impossible_date());
        record.insert(Field::Day, "30");
        assert!(record.has_impossible_date());
        record.insert(Field::Day, "28");
        assert!(!record.has_impossible_date());
    }
}
