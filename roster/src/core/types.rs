//! Shared deterministic types for the view pipeline.
//!
//! These types define the contracts between pipeline stages. They hold no
//! references to the record store and can be copied freely between states.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::record::{Gender, Record};

/// Sentinel shown for "no constraint on this dimension".
pub const ALL: &str = "All";

/// Error returned when parsing a user-facing value (filter option, sort key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(String);

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ParseError {}

/// One filter dimension: either unconstrained or pinned to a single value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// True if `value` satisfies this selection.
    ///
    /// A missing value only satisfies `All`.
    pub fn admits(&self, value: Option<&T>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => value == Some(expected),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Only(value) => value.fmt(f),
        }
    }
}

impl<T: FromStr<Err = ParseError>> FromStr for Selection<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            return Ok(Selection::All);
        }
        s.parse().map(Selection::Only)
    }
}

/// Free-form country value; any observed `address.state` string is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Country(pub String);

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Country {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::new("country must not be empty"));
        }
        Ok(Country(s.to_string()))
    }
}

/// Current filter selection across independent dimensions, combined by AND.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub gender: Selection<Gender>,
    /// Matches `address.state`.
    pub country: Selection<Country>,
}

impl FilterCriteria {
    pub fn is_unconstrained(&self) -> bool {
        self.gender == Selection::All && self.country == Selection::All
    }
}

/// Sortable columns. Each key maps to an accessor on [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    FirstName,
    Age,
    State,
}

impl SortKey {
    pub const ALL_KEYS: [SortKey; 4] = [
        SortKey::Id,
        SortKey::FirstName,
        SortKey::Age,
        SortKey::State,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::FirstName => "firstName",
            SortKey::Age => "age",
            SortKey::State => "address.state",
        }
    }

    /// Extract the comparable value for this key, `None` if the record lacks it.
    pub fn value(self, record: &Record) -> Option<SortValue<'_>> {
        match self {
            SortKey::Id => Some(SortValue::Number(record.id)),
            SortKey::FirstName => Some(SortValue::Text(record.first_name.as_str())),
            SortKey::Age => Some(SortValue::Number(u64::from(record.age))),
            SortKey::State => record.state().map(SortValue::Text),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    /// Accepts the record path (`address.state`) and a few short aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortKey::Id),
            "firstName" | "first-name" | "name" => Ok(SortKey::FirstName),
            "age" => Ok(SortKey::Age),
            "address.state" | "state" | "country" => Ok(SortKey::State),
            other => Err(ParseError::new(format!(
                "unknown sort key '{}' (expected one of: id, firstName, age, address.state)",
                other
            ))),
        }
    }
}

/// Comparable value produced by a sort accessor.
///
/// Keys never mix variants, so the derived ordering only ever compares
/// numbers with numbers and text with text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue<'a> {
    Number(u64),
    Text(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Orient an ascending comparison result for this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Active sort key and direction. "No sort" is `Option::<SortDirective>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortDirective {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }
}

/// Text fields whose distinct values can be listed from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Gender,
    City,
    State,
    Title,
}

impl TextField {
    pub fn get(self, record: &Record) -> Option<&str> {
        match self {
            TextField::Gender => Some(record.gender.as_str()),
            TextField::City => record.city(),
            TextField::State => record.state(),
            TextField::Title => record.title(),
        }
    }
}

/// Table columns in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Image,
    FullName,
    Demography,
    Designation,
    Location,
}

impl Column {
    pub const ALL_COLUMNS: [Column; 6] = [
        Column::Id,
        Column::Image,
        Column::FullName,
        Column::Demography,
        Column::Designation,
        Column::Location,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Image => "Image",
            Column::FullName => "Full Name",
            Column::Demography => "Demography",
            Column::Designation => "Designation",
            Column::Location => "Location",
        }
    }

    /// Sort key a header click requests, `None` for non-sortable columns.
    pub fn sort_key(self) -> Option<SortKey> {
        match self {
            Column::Id => Some(SortKey::Id),
            Column::FullName => Some(SortKey::FirstName),
            Column::Demography => Some(SortKey::Age),
            Column::Location => Some(SortKey::State),
            Column::Image | Column::Designation => None,
        }
    }
}
