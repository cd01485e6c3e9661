//! Totals and per-tag sums over a transaction slice.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    tag::TransactionTag,
    transaction::{Transaction, TransactionId, TransactionKind},
};

/// The totals computed by [aggregate].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Income total minus expense total.
    pub balance: Decimal,
    /// The sum of all income amounts.
    pub income_total: Decimal,
    /// The sum of all expense amounts.
    pub expense_total: Decimal,
    /// The sum of amounts per tag, income and expense alike.
    ///
    /// Untagged transactions count towards the totals but appear under no
    /// tag here.
    pub by_tag: HashMap<TransactionTag, Decimal>,
    /// The IDs of transactions left out because their amount was negative.
    pub skipped: Vec<TransactionId>,
}

/// Sum up `transactions` into totals, a balance and per-tag sums.
///
/// Transactions with a negative amount are skipped with a warning and
/// their IDs reported in [Aggregate::skipped]. The same input always
/// produces the same output.
pub fn aggregate(transactions: &[Transaction]) -> Aggregate {
    let mut income_total = Decimal::ZERO;
    let mut expense_total = Decimal::ZERO;
    let mut by_tag: HashMap<TransactionTag, Decimal> = HashMap::new();
    let mut skipped = Vec::new();

    for transaction in transactions {
        if transaction.amount < Decimal::ZERO {
            warn!(
                "skipping transaction {} with negative amount {}",
                transaction.id, transaction.amount
            );
            skipped.push(transaction.id);
            continue;
        }

        match transaction.kind {
            TransactionKind::Income => income_total += transaction.amount,
            TransactionKind::Expense => expense_total += transaction.amount,
        }

        if let Some(tag) = transaction.tag {
            *by_tag.entry(tag).or_insert(Decimal::ZERO) += transaction.amount;
        }
    }

    Aggregate {
        balance: income_total - expense_total,
        income_total,
        expense_total,
        by_tag,
        skipped,
    }
}
