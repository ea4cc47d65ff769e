use crate::{constants::RECORD_FIELD_DELIMITER, error::RecsortError, utils::util::Result};
use record_sort::SortRecord;
use std::{fmt, str::FromStr};

/// A named record ordered by `name`, then `age`. The optional `id` is only displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    id: Option<u32>,
    name: String,
    age: u32,
}

impl Record {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
        }
    }

    pub fn with_id(id: u32, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            age,
        }
    }

    pub fn id(&self) -> Option<u32> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_id(&mut self, id: Option<u32>) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }
}

impl SortRecord for Record {
    fn primary_key(&self) -> &str {
        &self.name
    }

    fn secondary_key(&self) -> i64 {
        i64::from(self.age)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{{id={}, name='{}', age={}}}", id, self.name, self.age),
            None => write!(f, "{{name='{}', age={}}}", self.name, self.age),
        }
    }
}

fn parse_number(value: &str, field: &str, content_str: &str) -> Result<u32> {
    let field_str = value.trim();
    if field_str.is_empty() {
        return Err(RecsortError::invalid_record(
            content_str,
            format!("{field} cannot be empty"),
        ));
    }
    field_str.parse::<u32>().map_err(|e| {
        RecsortError::invalid_record(
            content_str,
            format!("{field} '{field_str}' is not a valid number ({e})"),
        )
    })
}

impl FromStr for Record {
    type Err = RecsortError;

    /// Parses `NAME:AGE` or `NAME:AGE:ID`.
    fn from_str(content_str: &str) -> Result<Self> {
        let parts: Vec<&str> = content_str.split(RECORD_FIELD_DELIMITER).collect();
        if parts.len() < 2 {
            return Err(RecsortError::invalid_record(content_str, "missing age field"));
        }
        if parts.len() > 3 {
            return Err(RecsortError::invalid_record(
                content_str,
                format!("expected at most 3 fields, found {}", parts.len()),
            ));
        }

        let name = parts[0].trim();
        if name.is_empty() {
            return Err(RecsortError::invalid_record(content_str, "name cannot be empty"));
        }

        let age = parse_number(parts[1], "age", content_str)?;
        let record = match parts.get(2) {
            Some(id_str) => Record::with_id(parse_number(id_str, "id", content_str)?, name, age),
            None => Record::new(name, age),
        };
        Ok(record)
    }
}
