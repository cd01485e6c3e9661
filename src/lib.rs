//! Spendeur is a library for tracking personal income and expenses.
//!
//! It turns a snapshot of recorded transactions into time-windowed subsets,
//! income/expense totals, and chart-ready tag breakdowns. The pipeline is a
//! set of pure functions: pick a [TimeFilter] and resolve it against a
//! caller-supplied instant, select matching transactions with
//! [filter_transactions], reduce them with [aggregate], and hand the per-tag
//! totals to [chart_entries] when a breakdown view is wanted. [Ledger] is an
//! in-memory store for callers that do not bring their own.

#![warn(missing_docs)]

use rust_decimal::Decimal;

mod aggregation;
mod chart;
mod csv;
mod ledger;
mod query;
mod summary;
mod tag;
mod transaction;
mod window;

pub use aggregation::{Aggregate, aggregate};
pub use chart::{ChartEntry, chart_entries, donut_chart};
pub use csv::{export_csv, parse_csv};
pub use ledger::Ledger;
pub use query::{TransactionQuery, filter_transactions};
pub use summary::{KindBreakdown, Overview, TagSummary, kind_breakdown, overview, tag_summary};
pub use tag::TransactionTag;
pub use transaction::{Transaction, TransactionBuilder, TransactionId, TransactionKind};
pub use window::TimeFilter;

/// The errors that may occur in the library.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A negative amount was used to create a transaction.
    ///
    /// Amounts are magnitudes and the direction of the money comes from
    /// [TransactionKind], so a negative amount is always a caller mistake.
    #[error("transaction amounts must not be negative, got {0}")]
    InvalidAmount(Decimal),

    /// A tag key outside the fixed tag set.
    #[error("\"{0}\" is not a recognized tag")]
    UnrecognizedTag(String),

    /// A transaction kind key other than `income` or `expense`.
    #[error("\"{0}\" is not a recognized transaction kind")]
    UnrecognizedKind(String),

    /// The requested transaction was not found.
    #[error("the requested transaction could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist.
    #[error("tried to update a transaction that is not in the ledger")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist.
    #[error("tried to delete a transaction that is not in the ledger")]
    DeleteMissingTransaction,

    /// The CSV had issues that prevented it from being parsed.
    #[error("could not parse the CSV data: {0}")]
    InvalidCSV(String),

    /// An error occurred while writing transactions as CSV.
    #[error("could not serialize as CSV: {0}")]
    CSVSerializationError(String),
}
