//! Defines the core transaction data model.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, tag::TransactionTag};

/// The identifier for a transaction.
pub type TransactionId = i64;

/// Whether a transaction brings money in or takes money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionKind {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

impl TransactionKind {
    /// The stable key used in serialized data and queries.
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// The human-readable display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(Error::UnrecognizedKind(s.to_owned())),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A short display title. May be empty.
    pub title: String,
    /// The amount of money moved. This is a magnitude, never negative; the
    /// direction comes from `kind`.
    pub amount: Decimal,
    /// Whether the transaction is an income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The category of the transaction. `None` for records whose label fell
    /// outside the fixed tag set.
    pub tag: Option<TransactionTag>,
    /// When the transaction happened. Future instants are allowed.
    #[serde(with = "time::serde::rfc3339")]
    pub occurred_on: OffsetDateTime,
    /// A free-form note.
    pub note: Option<String>,
    /// A reference to an attached image. The blob itself is managed by an
    /// external collaborator; this library only carries the reference.
    pub attachment: Option<String>,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        amount: Decimal,
        kind: TransactionKind,
        occurred_on: OffsetDateTime,
    ) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            kind,
            occurred_on,
            title: String::new(),
            tag: None,
            note: None,
            attachment: None,
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// The builder collects the transaction fields step by step, with sensible
/// defaults for the optional ones. Pass the finished builder to
/// [crate::Ledger::add], which validates the amount and assigns the ID.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use time::macros::datetime;
///
/// use spendeur_rs::{Transaction, TransactionKind, TransactionTag};
///
/// let builder = Transaction::build(
///     Decimal::new(4599, 2),
///     TransactionKind::Expense,
///     datetime!(2025 - 01 - 15 18:30 UTC),
/// )
/// .title("Coffee beans")
/// .tag(Some(TransactionTag::Food))
/// .note(Some("1kg dark roast"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    /// The amount of money moved, as a non-negative magnitude.
    ///
    /// Negative values are rejected when the builder is finalized.
    pub amount: Decimal,

    /// Whether the transaction is an income or an expense.
    pub kind: TransactionKind,

    /// When the transaction happened.
    ///
    /// Any instant is accepted, including instants in the future, so
    /// forward-dated entries such as upcoming bills can be recorded.
    pub occurred_on: OffsetDateTime,

    /// A short display title. Defaults to the empty string.
    pub title: String,

    /// The category of the transaction. Defaults to `None`.
    pub tag: Option<TransactionTag>,

    /// A free-form note. Defaults to `None`.
    pub note: Option<String>,

    /// A reference to an attached image. Defaults to `None`.
    pub attachment: Option<String>,
}

impl TransactionBuilder {
    /// Set the display title for the transaction.
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_owned();
        self
    }

    /// Set the tag for the transaction.
    pub fn tag(mut self, tag: Option<TransactionTag>) -> Self {
        self.tag = tag;
        self
    }

    /// Set the note for the transaction.
    pub fn note(mut self, note: Option<&str>) -> Self {
        self.note = note.map(str::to_owned);
        self
    }

    /// Set the image attachment reference for the transaction.
    pub fn attachment(mut self, attachment: Option<&str>) -> Self {
        self.attachment = attachment.map(str::to_owned);
        self
    }

    pub(crate) fn finalize(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            title: self.title,
            amount: self.amount,
            kind: self.kind,
            tag: self.tag,
            occurred_on: self.occurred_on,
            note: self.note,
            attachment: self.attachment,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use time::macros::datetime;

    use crate::{
        Error,
        tag::TransactionTag,
        transaction::{Transaction, TransactionKind},
    };

    #[test]
    fn build_sets_optional_fields() {
        let builder = Transaction::build(
            Decimal::new(4599, 2),
            TransactionKind::Expense,
            datetime!(2025 - 01 - 15 18:30 UTC),
        )
        .title("Coffee beans")
        .tag(Some(TransactionTag::Food))
        .note(Some("1kg dark roast"))
        .attachment(Some("receipts/coffee.jpg"));

        assert_eq!(builder.title, "Coffee beans");
        assert_eq!(builder.tag, Some(TransactionTag::Food));
        assert_eq!(builder.note, Some("1kg dark roast".to_owned()));
        assert_eq!(builder.attachment, Some("receipts/coffee.jpg".to_owned()));
    }

    #[test]
    fn kind_key_round_trips() {
        assert_eq!(
            TransactionKind::from_str("income"),
            Ok(TransactionKind::Income)
        );
        assert_eq!(
            TransactionKind::from_str("expense"),
            Ok(TransactionKind::Expense)
        );
    }

    #[test]
    fn unknown_kind_key_is_rejected() {
        assert_eq!(
            TransactionKind::from_str("transfer"),
            Err(Error::UnrecognizedKind("transfer".to_owned()))
        );
    }

    #[test]
    fn labels_are_display_names() {
        assert_eq!(TransactionKind::Income.label(), "Income");
        assert_eq!(TransactionKind::Expense.label(), "Expense");
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let transaction = Transaction::build(
            Decimal::new(4599, 2),
            TransactionKind::Expense,
            datetime!(2025 - 01 - 15 18:30 UTC),
        )
        .title("Coffee beans")
        .tag(Some(TransactionTag::Food))
        .finalize(7);

        let value = serde_json::to_value(&transaction).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["amount"], "45.99");
        assert_eq!(value["type"], "expense");
        assert_eq!(value["tag"], "food");
        assert_eq!(value["occurred_on"], "2025-01-15T18:30:00Z");
    }
}
