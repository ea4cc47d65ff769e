use crate::{core::record::Record, error::RecsortError, utils::util::Result};

/// Built-in literal record collections used by the `demo` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Employees,
    Staff,
    Books,
}

impl Dataset {
    pub const NAMES: [&'static str; 3] = ["employees", "staff", "books"];

    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Employees => "employees",
            Dataset::Staff => "staff",
            Dataset::Books => "books",
        }
    }

    /// Builds a fresh copy of the dataset in insertion order.
    pub fn records(&self) -> Vec<Record> {
        match self {
            Dataset::Employees => vec![
                Record::new("Lafir", 33),
                Record::new("Lafir", 23),
                Record::new("Raez", 32),
            ],
            Dataset::Staff => vec![
                Record::with_id(1, "Ammar", 42),
                Record::with_id(2, "Sheik", 61),
                Record::with_id(3, "Ammar", 37),
            ],
            // Title and edition
            Dataset::Books => vec![
                Record::with_id(101, "Effective Java", 3),
                Record::with_id(102, "Clean Code", 1),
                Record::with_id(103, "Effective Java", 2),
                Record::with_id(104, "Refactoring", 2),
            ],
        }
    }
}

impl std::str::FromStr for Dataset {
    type Err = RecsortError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "employees" => Ok(Dataset::Employees),
            "staff" => Ok(Dataset::Staff),
            "books" => Ok(Dataset::Books),
            _ => Err(RecsortError::UnknownDataset {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for name in Dataset::NAMES {
            let dataset: Dataset = name.parse().expect("dataset name should parse");
            assert_eq!(dataset.to_string(), name);
        }
    }

    #[test]
    fn test_unknown_dataset_lists_choices() {
        let error = "cars"
            .parse::<Dataset>()
            .expect_err("unknown dataset should be rejected");
        assert_eq!(
            error.to_string(),
            "Unknown dataset: cars. Must be one of employees, staff, books"
        );
    }

    #[test]
    fn test_employees_literal() {
        let names_and_ages = Dataset::Employees
            .records()
            .iter()
            .map(|record| (record.name().to_string(), record.age()))
            .collect::<Vec<_>>();
        assert_eq!(
            names_and_ages,
            vec![
                ("Lafir".to_string(), 33),
                ("Lafir".to_string(), 23),
                ("Raez".to_string(), 32)
            ]
        );
    }

    #[test]
    fn test_only_employees_lack_ids() {
        assert!(Dataset::Employees.records().iter().all(|r| r.id().is_none()));
        assert!(Dataset::Staff.records().iter().all(|r| r.id().is_some()));
        assert!(Dataset::Books.records().iter().all(|r| r.id().is_some()));
    }
}
