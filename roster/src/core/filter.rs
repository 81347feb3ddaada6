//! Categorical filtering over raw records.

use std::borrow::Borrow;

use crate::core::types::{Country, FilterCriteria, Selection};
use crate::record::Record;

/// True if `record` satisfies every non-`All` criterion.
pub fn matches(record: &Record, criteria: &FilterCriteria) -> bool {
    let country_ok = match &criteria.country {
        Selection::All => true,
        Selection::Only(Country(expected)) => record.state() == Some(expected.as_str()),
    };
    country_ok && criteria.gender.admits(Some(&record.gender))
}

/// Keep records matching `criteria`, preserving input order.
///
/// Callers pass the raw store contents, never a previously filtered list.
pub fn filter_records<R>(records: &[R], criteria: &FilterCriteria) -> Vec<R>
where
    R: Borrow<Record> + Clone,
{
    if criteria.is_unconstrained() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| matches(Borrow::<Record>::borrow(*record), criteria))
        .cloned()
        .collect()
}
