//! Column sorting and the header-click toggle rule.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::core::types::{SortDirection, SortDirective, SortKey};
use crate::record::Record;

/// Compare two records under `directive`.
///
/// A record missing the key's value sorts after every record that has one,
/// in both directions. Two missing values compare equal.
pub fn compare(a: &Record, b: &Record, directive: SortDirective) -> Ordering {
    match (directive.key.value(a), directive.key.value(b)) {
        (Some(left), Some(right)) => directive.direction.apply(left.cmp(&right)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Return a new list ordered by `directive`; `None` returns the input order.
///
/// The sort is stable in both directions: descending reverses the comparator,
/// not the output, so equal keys keep their input order.
pub fn sort_records<R>(records: &[R], directive: Option<SortDirective>) -> Vec<R>
where
    R: Borrow<Record> + Clone,
{
    let mut ordered = records.to_vec();
    if let Some(directive) = directive {
        ordered.sort_by(|a, b| {
            compare(
                Borrow::<Record>::borrow(a),
                Borrow::<Record>::borrow(b),
                directive,
            )
        });
    }
    ordered
}

/// Directive produced by clicking the header for `key`.
///
/// Same key while ascending flips to descending; anything else starts ascending.
pub fn toggle(current: Option<SortDirective>, key: SortKey) -> SortDirective {
    match current {
        Some(SortDirective {
            key: current_key,
            direction: SortDirection::Ascending,
        }) if current_key == key => SortDirective::descending(key),
        _ => SortDirective::ascending(key),
    }
}
