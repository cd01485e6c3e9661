//! Ready-made summaries for presentation collaborators.
//!
//! Each summary composes the window resolver, the transaction filter and
//! the aggregator over a caller-supplied snapshot. Rendering the result
//! stays with the caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    aggregation::{Aggregate, aggregate},
    chart::{ChartEntry, chart_entries},
    query::{TransactionQuery, filter_transactions},
    tag::TransactionTag,
    transaction::{Transaction, TransactionKind},
    window::TimeFilter,
};

/// Totals and the matching transactions for a time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    /// The window the overview covers.
    pub filter: TimeFilter,
    /// Totals over the windowed transactions.
    pub totals: Aggregate,
    /// The windowed transactions, most recent first.
    pub transactions: Vec<Transaction>,
}

/// Windowed totals restricted to one transaction kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindBreakdown {
    /// The kind the breakdown covers.
    pub kind: TransactionKind,
    /// The sum over the selected transactions.
    pub total: Decimal,
    /// Per-tag chart slices for the selected transactions, largest first.
    pub entries: Vec<ChartEntry>,
    /// The selected transactions, most recent first.
    pub transactions: Vec<Transaction>,
}

/// Windowed totals for one tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagSummary {
    /// The tag the summary covers.
    pub tag: TransactionTag,
    /// The sum of income amounts carrying the tag.
    pub income_total: Decimal,
    /// The sum of expense amounts carrying the tag.
    pub expense_total: Decimal,
    /// The tagged transactions, most recent first.
    pub transactions: Vec<Transaction>,
}

/// Summarize `transactions` within `filter`'s window.
pub fn overview(
    transactions: &[Transaction],
    filter: TimeFilter,
    now: OffsetDateTime,
) -> Overview {
    let query = TransactionQuery {
        date_range: filter.resolve(now),
        ..Default::default()
    };
    let transactions = filter_transactions(transactions, &query);
    let totals = aggregate(&transactions);

    Overview {
        filter,
        totals,
        transactions,
    }
}

/// Summarize the transactions of one `kind` within `filter`'s window.
pub fn kind_breakdown(
    transactions: &[Transaction],
    filter: TimeFilter,
    kind: TransactionKind,
    now: OffsetDateTime,
) -> KindBreakdown {
    let query = TransactionQuery {
        date_range: filter.resolve(now),
        kind: Some(kind),
        tag: None,
    };
    let transactions = filter_transactions(transactions, &query);
    let totals = aggregate(&transactions);
    let total = match kind {
        TransactionKind::Income => totals.income_total,
        TransactionKind::Expense => totals.expense_total,
    };

    KindBreakdown {
        kind,
        total,
        entries: chart_entries(&totals.by_tag),
        transactions,
    }
}

/// Summarize the transactions carrying `tag` within `filter`'s window.
pub fn tag_summary(
    transactions: &[Transaction],
    filter: TimeFilter,
    tag: TransactionTag,
    now: OffsetDateTime,
) -> TagSummary {
    let query = TransactionQuery {
        date_range: filter.resolve(now),
        kind: None,
        tag: Some(tag),
    };
    let transactions = filter_transactions(transactions, &query);
    let totals = aggregate(&transactions);

    TagSummary {
        tag,
        income_total: totals.income_total,
        expense_total: totals.expense_total,
        transactions,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use time::{OffsetDateTime, macros::datetime};

    use crate::{
        summary::{kind_breakdown, overview, tag_summary},
        tag::TransactionTag,
        transaction::{Transaction, TransactionId, TransactionKind},
        window::TimeFilter,
    };

    fn create_test_transaction(
        id: TransactionId,
        amount: Decimal,
        kind: TransactionKind,
        tag: Option<TransactionTag>,
        occurred_on: OffsetDateTime,
    ) -> Transaction {
        Transaction {
            id,
            title: String::new(),
            amount,
            kind,
            tag,
            occurred_on,
            note: None,
            attachment: None,
        }
    }

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            create_test_transaction(
                1,
                Decimal::from(100),
                TransactionKind::Income,
                Some(TransactionTag::Food),
                datetime!(2024 - 03 - 10 12:00 UTC),
            ),
            create_test_transaction(
                2,
                Decimal::from(40),
                TransactionKind::Expense,
                Some(TransactionTag::Food),
                datetime!(2024 - 03 - 01 12:00 UTC),
            ),
            create_test_transaction(
                3,
                Decimal::from(10),
                TransactionKind::Expense,
                Some(TransactionTag::Transport),
                datetime!(2024 - 02 - 20 12:00 UTC),
            ),
            // Older than every symbolic window except the unbounded one
            create_test_transaction(
                4,
                Decimal::from(999),
                TransactionKind::Expense,
                Some(TransactionTag::Housing),
                datetime!(2023 - 12 - 01 12:00 UTC),
            ),
        ]
    }

    #[test]
    fn overview_covers_the_windowed_transactions_only() {
        let now = datetime!(2024 - 03 - 15 12:00 UTC);

        let result = overview(&sample_transactions(), TimeFilter::Month, now);

        assert_eq!(result.filter, TimeFilter::Month);
        let ids: Vec<_> = result
            .transactions
            .iter()
            .map(|transaction| transaction.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(result.totals.income_total, Decimal::from(100));
        assert_eq!(result.totals.expense_total, Decimal::from(50));
        assert_eq!(result.totals.balance, Decimal::from(50));
    }

    #[test]
    fn overview_of_the_unbounded_window_covers_everything() {
        let now = datetime!(2024 - 03 - 15 12:00 UTC);

        let result = overview(&sample_transactions(), TimeFilter::All, now);

        assert_eq!(result.transactions.len(), 4);
        assert_eq!(result.totals.expense_total, Decimal::from(1049));
    }

    #[test]
    fn kind_breakdown_selects_one_kind() {
        let now = datetime!(2024 - 03 - 15 12:00 UTC);

        let result = kind_breakdown(
            &sample_transactions(),
            TimeFilter::Month,
            TransactionKind::Expense,
            now,
        );

        assert_eq!(result.kind, TransactionKind::Expense);
        assert_eq!(result.total, Decimal::from(50));
        assert_eq!(result.transactions.len(), 2);

        let labels: Vec<_> = result
            .entries
            .iter()
            .map(|entry| entry.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Food", "Transport"]);
        assert_eq!(result.entries[0].value, Decimal::from(40));
    }

    #[test]
    fn tag_summary_totals_one_tag() {
        let now = datetime!(2024 - 03 - 15 12:00 UTC);

        let result = tag_summary(
            &sample_transactions(),
            TimeFilter::Month,
            TransactionTag::Food,
            now,
        );

        assert_eq!(result.tag, TransactionTag::Food);
        assert_eq!(result.income_total, Decimal::from(100));
        assert_eq!(result.expense_total, Decimal::from(40));
        assert_eq!(result.transactions.len(), 2);
    }
}
