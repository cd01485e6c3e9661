//! Pure filtering of transaction snapshots.

use std::ops::RangeInclusive;

use time::OffsetDateTime;

use crate::{
    tag::TransactionTag,
    transaction::{Transaction, TransactionKind},
};

/// Defines which transactions [filter_transactions] should select.
///
/// Criteria are optional and conjunctive: a transaction matches when it
/// satisfies every criterion that is set. The default query matches
/// everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionQuery {
    /// Include transactions that occurred within `date_range` (both ends
    /// inclusive).
    pub date_range: Option<RangeInclusive<OffsetDateTime>>,
    /// Include transactions of this kind only.
    pub kind: Option<TransactionKind>,
    /// Include transactions with this tag only.
    pub tag: Option<TransactionTag>,
}

/// Select the transactions matching `query`, most recent first.
///
/// The result is a new vector; the input is never reordered or mutated.
/// The sort is stable, so transactions with the same `occurred_on` keep
/// their relative input order. An empty input or a query with no matches
/// gives an empty vector.
pub fn filter_transactions(
    transactions: &[Transaction],
    query: &TransactionQuery,
) -> Vec<Transaction> {
    let mut matches: Vec<Transaction> = transactions
        .iter()
        .filter(|transaction| matches_query(transaction, query))
        .cloned()
        .collect();

    matches.sort_by(|a, b| b.occurred_on.cmp(&a.occurred_on));

    matches
}

fn matches_query(transaction: &Transaction, query: &TransactionQuery) -> bool {
    let within_window = query
        .date_range
        .as_ref()
        .map(|date_range| date_range.contains(&transaction.occurred_on))
        .unwrap_or(true);
    let kind_matches = query
        .kind
        .map(|kind| transaction.kind == kind)
        .unwrap_or(true);
    let tag_matches = query
        .tag
        .map(|tag| transaction.tag == Some(tag))
        .unwrap_or(true);

    within_window && kind_matches && tag_matches
}
