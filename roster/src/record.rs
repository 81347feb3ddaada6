use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::types::ParseError;

/// One person/employee row as supplied by the record source.
///
/// `address` and `company`, and each field inside them, are optional so a
/// record with a missing or partly filled nested object still loads;
/// accessors report the missing value as `None`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: u64,
    pub first_name: String,
    #[serde(default)]
    pub maiden_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: Gender,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub image: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(ParseError::new(format!(
                "unknown gender '{}' (expected male or female)",
                other
            ))),
        }
    }
}

impl Record {
    pub fn city(&self) -> Option<&str> {
        self.address.as_ref()?.city.as_deref()
    }

    /// The `address.state` value, surfaced as "country" in filters.
    pub fn state(&self) -> Option<&str> {
        self.address.as_ref()?.state.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.company.as_ref()?.title.as_deref()
    }

    /// First, maiden and last name joined by single spaces, skipping empty parts.
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.maiden_name, &self.last_name]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `gender/age`, e.g. `female/28`.
    pub fn demography(&self) -> String {
        format!("{}/{}", self.gender, self.age)
    }

    /// `city, state`, skipping whichever part is missing.
    pub fn location(&self) -> String {
        [self.city(), self.state()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{record, record_without_address};

    #[test]
    fn deserializes_upstream_shape_and_ignores_extra_fields() {
        let raw = r#"{
            "id": 1,
            "firstName": "Emily",
            "lastName": "Johnson",
            "maidenName": "Smith",
            "age": 28,
            "gender": "female",
            "email": "emily@example.com",
            "image": "https://example.com/1.png",
            "address": { "address": "626 Main Street", "city": "Phoenix", "state": "Mississippi" },
            "company": { "department": "Engineering", "title": "Sales Manager" }
        }"#;
        let parsed: Record = serde_json::from_str(raw).expect("parse record");
        assert_eq!(parsed.id, 1);
        assert_eq!(parsed.gender, Gender::Female);
        assert_eq!(parsed.state(), Some("Mississippi"));
        assert_eq!(parsed.title(), Some("Sales Manager"));
        assert_eq!(parsed.full_name(), "Emily Smith Johnson");
    }

    #[test]
    fn missing_nested_objects_load_as_none() {
        let raw = r#"{"id": 2, "firstName": "A", "lastName": "B", "age": 3, "gender": "male"}"#;
        let parsed: Record = serde_json::from_str(raw).expect("parse record");
        assert_eq!(parsed.state(), None);
        assert_eq!(parsed.title(), None);
        assert_eq!(parsed.location(), "");
        assert_eq!(parsed.full_name(), "A B");
    }

    #[test]
    fn partly_filled_nested_objects_load_with_missing_fields() {
        let raw = r#"{
            "id": 4, "firstName": "A", "lastName": "B", "age": 3, "gender": "male",
            "address": {"city": "Denver"},
            "company": {}
        }"#;
        let parsed: Record = serde_json::from_str(raw).expect("parse record");
        assert_eq!(parsed.city(), Some("Denver"));
        assert_eq!(parsed.state(), None);
        assert_eq!(parsed.title(), None);
        assert_eq!(parsed.location(), "Denver");

        let json = serde_json::to_string(&parsed).expect("serialize");
        assert!(json.contains(r#""address":{"city":"Denver"}"#));
        assert!(json.contains(r#""company":{}"#));
    }

    #[test]
    fn display_helpers_format_cells() {
        let rec = record(7, "Noah", 41, Gender::Male, "Texas");
        assert_eq!(rec.demography(), "male/41");
        assert_eq!(rec.location(), "Noah City, Texas");
        assert_eq!(record_without_address(8, "Ava").state(), None);
    }

    #[test]
    fn gender_parses_lowercase_only() {
        assert_eq!("male".parse::<Gender>().expect("male"), Gender::Male);
        assert!("Male".parse::<Gender>().is_err());
    }
}
