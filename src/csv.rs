//! Transaction import and export as CSV.
//!
//! The interchange format is one header line
//! `title,amount,kind,tag,occurred_on,note` followed by one row per
//! transaction, with raw decimal amounts and RFC 3339 instants.

use std::io::Write;

use csv::{Reader, Writer};
use rust_decimal::Decimal;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::warn;

use crate::{
    Error,
    tag::TransactionTag,
    transaction::{Transaction, TransactionBuilder, TransactionKind},
};

const HEADER: [&str; 6] = ["title", "amount", "kind", "tag", "occurred_on", "note"];

/// Writes `transactions` to `writer` as CSV.
///
/// Untagged transactions and missing notes become empty fields. The
/// attachment reference is not part of the interchange format.
///
/// Returns `Error::CSVSerializationError` if a row cannot be written.
pub fn export_csv<W: Write>(transactions: &[Transaction], writer: W) -> Result<(), Error> {
    let mut writer = Writer::from_writer(writer);

    writer
        .write_record(HEADER)
        .map_err(|error| Error::CSVSerializationError(error.to_string()))?;

    for transaction in transactions {
        let amount = transaction.amount.to_string();
        let occurred_on = transaction
            .occurred_on
            .format(&Rfc3339)
            .map_err(|error| Error::CSVSerializationError(error.to_string()))?;
        let tag = transaction
            .tag
            .map(TransactionTag::as_key)
            .unwrap_or_default();
        let note = transaction.note.as_deref().unwrap_or_default();

        writer
            .write_record([
                transaction.title.as_str(),
                amount.as_str(),
                transaction.kind.as_key(),
                tag,
                occurred_on.as_str(),
                note,
            ])
            .map_err(|error| Error::CSVSerializationError(error.to_string()))?;
    }

    writer
        .flush()
        .map_err(|error| Error::CSVSerializationError(error.to_string()))
}

/// Parses transactions from CSV `text` in the format written by
/// [export_csv].
///
/// Returns a vector of builders ready for
/// [Ledger::import](crate::Ledger::import), or `Error::InvalidCSV` when
/// the header is wrong or a row carries an amount, kind or date that does
/// not parse. Amounts must not be negative. A row with an unrecognized
/// tag key keeps its totals-relevant fields and degrades to no tag with a
/// warning, so one stale key does not reject a whole statement.
pub fn parse_csv(text: &str) -> Result<Vec<TransactionBuilder>, Error> {
    let mut reader = Reader::from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|error| Error::InvalidCSV(error.to_string()))?;
    let headers: Vec<&str> = headers.iter().collect();

    if headers != HEADER {
        return Err(Error::InvalidCSV(format!(
            "expected header '{}', got '{}'",
            HEADER.join(","),
            headers.join(",")
        )));
    }

    let mut transactions = Vec::new();

    for (row_number, result) in reader.records().enumerate() {
        // The header occupies line one
        let line_number = row_number + 2;

        let record = result.map_err(|error| {
            Error::InvalidCSV(format!("could not read line {line_number}: {error}"))
        })?;

        let amount: Decimal = record[1].parse().map_err(|error| {
            Error::InvalidCSV(format!(
                "Could not parse '{}' as amount on line {line_number}: {error}",
                &record[1]
            ))
        })?;

        if amount < Decimal::ZERO {
            return Err(Error::InvalidCSV(format!(
                "Amount on line {line_number} must not be negative, got {amount}"
            )));
        }

        let kind: TransactionKind = record[2].parse().map_err(|error| {
            Error::InvalidCSV(format!(
                "Could not parse '{}' as kind on line {line_number}: {error}",
                &record[2]
            ))
        })?;

        let tag = match record[3].trim() {
            "" => None,
            key => match key.parse::<TransactionTag>() {
                Ok(tag) => Some(tag),
                Err(_) => {
                    warn!("dropping unrecognized tag '{}' on line {}", key, line_number);
                    None
                }
            },
        };

        let occurred_on = OffsetDateTime::parse(&record[4], &Rfc3339).map_err(|error| {
            Error::InvalidCSV(format!(
                "Could not parse '{}' as date on line {line_number}: {error}",
                &record[4]
            ))
        })?;

        let note = record[5].trim();
        let transaction = Transaction::build(amount, kind, occurred_on)
            .title(&record[0])
            .tag(tag)
            .note(if note.is_empty() { None } else { Some(note) });

        transactions.push(transaction);
    }

    Ok(transactions)
}
