//! View state transitions driven by user actions.
//!
//! Each action maps the previous [`ViewState`] to a new one and reports which
//! pipeline stages must be recomputed. Stages are ordered
//! filter → sort → paginate; invalidating a stage invalidates everything after it.

use std::fmt;
use std::str::FromStr;

use crate::core::paginate::PageRequest;
use crate::core::sort::toggle;
use crate::core::types::{Country, FilterCriteria, ParseError, Selection, SortDirective, SortKey};
use crate::record::Gender;

/// The complete user-controlled state of one table session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub criteria: FilterCriteria,
    pub directive: Option<SortDirective>,
    /// 1-based page number.
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            directive: None,
            page: 1,
        }
    }
}

/// A user interaction with the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SetFilter(FilterCriteria),
    SetGender(Selection<Gender>),
    SetCountry(Selection<Country>),
    RequestSort(SortKey),
    Paginate(PageRequest),
}

/// First pipeline stage invalidated by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Filter,
    Sort,
    Paginate,
}

/// Result of applying an action to a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: ViewState,
    pub recompute_from: Stage,
}

/// Apply `action` to `prev`.
///
/// `total_pages` is the page count of the current view; it is only consulted
/// for page navigation, since filter changes reset to page 1 and sort changes
/// keep the page count.
pub fn apply_action(prev: &ViewState, action: ViewAction, total_pages: usize) -> Transition {
    match action {
        ViewAction::SetFilter(criteria) => filter_changed(prev, criteria),
        ViewAction::SetGender(gender) => filter_changed(
            prev,
            FilterCriteria {
                gender,
                ..prev.criteria.clone()
            },
        ),
        ViewAction::SetCountry(country) => filter_changed(
            prev,
            FilterCriteria {
                country,
                ..prev.criteria.clone()
            },
        ),
        ViewAction::RequestSort(key) => Transition {
            next: ViewState {
                directive: Some(toggle(prev.directive, key)),
                ..prev.clone()
            },
            recompute_from: Stage::Sort,
        },
        ViewAction::Paginate(request) => Transition {
            next: ViewState {
                page: request.resolve(prev.page, total_pages),
                ..prev.clone()
            },
            recompute_from: Stage::Paginate,
        },
    }
}

fn filter_changed(prev: &ViewState, criteria: FilterCriteria) -> Transition {
    Transition {
        next: ViewState {
            criteria,
            directive: prev.directive,
            page: 1,
        },
        recompute_from: Stage::Filter,
    }
}

impl fmt::Display for ViewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewAction::SetFilter(criteria) if criteria.is_unconstrained() => f.write_str("reset"),
            ViewAction::SetFilter(criteria) => {
                let (gender, country) = (&criteria.gender, &criteria.country);
                write!(f, "filter gender={} country={}", gender, country)
            }
            ViewAction::SetGender(gender) => write!(f, "gender {}", gender),
            ViewAction::SetCountry(country) => write!(f, "country {}", country),
            ViewAction::RequestSort(key) => write!(f, "sort {}", key),
            ViewAction::Paginate(PageRequest::Previous) => f.write_str("prev"),
            ViewAction::Paginate(PageRequest::Next) => f.write_str("next"),
            ViewAction::Paginate(PageRequest::GoTo(page)) => write!(f, "page {}", page),
        }
    }
}

impl FromStr for ViewAction {
    type Err = ParseError;

    /// Parse one interactive command, e.g. `gender female`, `country New Mexico`,
    /// `sort age`, `page 3`, `next`, `prev`, `reset`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        let action = match command {
            "gender" => ViewAction::SetGender(require(command, rest)?.parse()?),
            "country" => ViewAction::SetCountry(require(command, rest)?.parse()?),
            "sort" => ViewAction::RequestSort(require(command, rest)?.parse()?),
            "page" => {
                let raw = require(command, rest)?;
                let page = raw
                    .parse::<usize>()
                    .map_err(|_| ParseError::new(format!("invalid page number '{}'", raw)))?;
                ViewAction::Paginate(PageRequest::GoTo(page))
            }
            "next" => ViewAction::Paginate(PageRequest::Next),
            "prev" | "previous" => ViewAction::Paginate(PageRequest::Previous),
            "reset" => ViewAction::SetFilter(FilterCriteria::default()),
            "" => return Err(ParseError::new("empty command")),
            other => return Err(ParseError::new(format!("unknown command '{}'", other))),
        };
        Ok(action)
    }
}

fn require<'a>(command: &str, argument: &'a str) -> Result<&'a str, ParseError> {
    if argument.is_empty() {
        return Err(ParseError::new(format!("'{}' needs an argument", command)));
    }
    Ok(argument)
}
