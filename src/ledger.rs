//! An in-memory transaction store.

use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    Error,
    query::{TransactionQuery, filter_transactions},
    transaction::{Transaction, TransactionBuilder, TransactionId},
};

/// An in-memory collection of transactions that owns ID assignment.
///
/// The ledger hands out snapshots. The query and aggregation functions
/// work on those snapshots, so their results do not shift while a caller
/// holds one.
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger. IDs start at one.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Add the transaction described by `builder`, assigning the next ID.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] when the builder's amount is
    /// negative.
    pub fn add(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        if builder.amount < Decimal::ZERO {
            return Err(Error::InvalidAmount(builder.amount));
        }

        let transaction = builder.finalize(self.next_id);
        self.next_id += 1;

        debug!("adding transaction {}", transaction.id);
        self.transactions.push(transaction.clone());

        Ok(transaction)
    }

    /// Add every transaction described by `builders`, in order.
    ///
    /// Nothing is added unless every builder is valid.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] when any builder's amount is
    /// negative.
    pub fn import(
        &mut self,
        builders: Vec<TransactionBuilder>,
    ) -> Result<Vec<Transaction>, Error> {
        if let Some(builder) = builders
            .iter()
            .find(|builder| builder.amount < Decimal::ZERO)
        {
            return Err(Error::InvalidAmount(builder.amount));
        }

        let mut imported = Vec::with_capacity(builders.len());

        for builder in builders {
            imported.push(self.add(builder)?);
        }

        Ok(imported)
    }

    /// Look up a transaction by its ID.
    ///
    /// # Errors
    /// Returns [Error::NotFound] when no transaction has `id`.
    pub fn get(&self, id: TransactionId) -> Result<&Transaction, Error> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
            .ok_or(Error::NotFound)
    }

    /// Replace the stored transaction that shares `transaction`'s ID.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] when the new amount is negative, and
    /// [Error::UpdateMissingTransaction] when the ID is not in the ledger.
    pub fn update(&mut self, transaction: Transaction) -> Result<(), Error> {
        if transaction.amount < Decimal::ZERO {
            return Err(Error::InvalidAmount(transaction.amount));
        }

        let Some(stored) = self
            .transactions
            .iter_mut()
            .find(|stored| stored.id == transaction.id)
        else {
            return Err(Error::UpdateMissingTransaction);
        };

        debug!("updating transaction {}", transaction.id);
        *stored = transaction;

        Ok(())
    }

    /// Remove the transaction with `id` from the ledger.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingTransaction] when the ID is not in the
    /// ledger.
    pub fn remove(&mut self, id: TransactionId) -> Result<(), Error> {
        let count_before = self.transactions.len();
        self.transactions.retain(|transaction| transaction.id != id);

        if self.transactions.len() == count_before {
            return Err(Error::DeleteMissingTransaction);
        }

        debug!("removed transaction {}", id);
        Ok(())
    }

    /// All transactions in insertion order.
    pub fn snapshot(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The transactions matching `query`, most recent first.
    pub fn get_query(&self, query: &TransactionQuery) -> Vec<Transaction> {
        filter_transactions(&self.transactions, query)
    }
}
