use crate::{RecordSortError, Result};
use std::{cmp::Ordering, fmt, str::FromStr};

/// A record that can be ordered by a string primary key and an integer secondary key.
pub trait SortRecord {
    fn primary_key(&self) -> &str;
    fn secondary_key(&self) -> i64;
}

/// Borrowed composite key: primary key first, secondary key only on ties.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortKey<'a> {
    primary: &'a str,
    secondary: i64,
}

impl<'a> SortKey<'a> {
    pub fn from_record<T: SortRecord + ?Sized>(record: &'a T) -> Self {
        Self {
            primary: record.primary_key(),
            secondary: record.secondary_key(),
        }
    }
}

impl Ord for SortKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.primary
            .cmp(other.primary)
            .then_with(|| self.secondary.cmp(&other.secondary))
    }
}

impl PartialOrd for SortKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// How a collection of records is ordered.
///
/// Every strategy is a total preorder on records; records that compare
/// `Equal` keep their input order when sorted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum SortStrategy {
    /// Primary key ascending.
    Primary,
    /// Primary key ascending, then secondary key ascending.
    #[default]
    PrimaryThenSecondary,
    /// Primary key descending. The secondary key is ignored.
    PrimaryDescending,
}

impl SortStrategy {
    pub const ALL: [SortStrategy; 3] = [
        SortStrategy::Primary,
        SortStrategy::PrimaryThenSecondary,
        SortStrategy::PrimaryDescending,
    ];

    pub fn compare<T: SortRecord + ?Sized>(&self, left: &T, right: &T) -> Ordering {
        match self {
            SortStrategy::Primary => left.primary_key().cmp(right.primary_key()),
            SortStrategy::PrimaryThenSecondary => {
                SortKey::from_record(left).cmp(&SortKey::from_record(right))
            }
            SortStrategy::PrimaryDescending => right.primary_key().cmp(left.primary_key()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortStrategy::Primary => "name",
            SortStrategy::PrimaryThenSecondary => "name-age",
            SortStrategy::PrimaryDescending => "name-desc",
        }
    }
}

impl FromStr for SortStrategy {
    type Err = RecordSortError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(SortStrategy::Primary),
            "name-age" => Ok(SortStrategy::PrimaryThenSecondary),
            "name-desc" => Ok(SortStrategy::PrimaryDescending),
            _ => Err(RecordSortError::UnknownStrategy {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
