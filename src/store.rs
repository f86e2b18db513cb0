//! The authoritative list of transactions and its write-through persistence.
//!
//! Every mutation serializes the full list and writes it to the slot before
//! the in-memory list is replaced. If the write fails the store keeps its
//! previous contents.

use std::collections::HashSet;

use time::Date;

use crate::{
    Error, NewTransaction, PersistenceSlot, Transaction, TransactionId, TransactionPatch,
    transaction::validate_amount,
};

/// Owns the transaction list and keeps a persistence slot in sync with it.
///
/// Transactions are kept in insertion order.
#[derive(Debug)]
pub struct TransactionStore<S> {
    slot: S,
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl<S: PersistenceSlot> TransactionStore<S> {
    /// Create a store from whatever was previously persisted in `slot`.
    ///
    /// An empty, unreadable or malformed slot results in an empty store, the
    /// problem is logged and otherwise ignored.
    pub fn load(slot: S) -> Self {
        let transactions = read_transactions(&slot);
        let next_id = next_id_after(&transactions);

        tracing::info!(
            slot = slot.name(),
            count = transactions.len(),
            "Loaded transactions"
        );

        Self {
            slot,
            transactions,
            next_id,
        }
    }

    /// Discard the in-memory list and read it again from the slot.
    pub fn reload(&mut self) -> &[Transaction] {
        self.transactions = read_transactions(&self.slot);
        self.next_id = self.next_id.max(next_id_after(&self.transactions));

        &self.transactions
    }

    /// All transactions in insertion order.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Get a transaction by its ID.
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|transaction| transaction.id == id)
    }

    /// The slot the store persists to.
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Validate and add a new transaction.
    ///
    /// # Errors
    /// Returns a validation error if a field is empty or the amount is not a
    /// finite, non-negative number, or [Error::PersistenceWrite] if the list
    /// could not be saved. The store is unchanged in both cases.
    pub fn add(
        &mut self,
        description: &str,
        amount: f64,
        category: &str,
        date: Date,
    ) -> Result<Transaction, Error> {
        let new_transaction = NewTransaction::new(description, amount, category, date)?;

        self.insert(new_transaction)
    }

    /// Add an already validated transaction, assigning it a fresh ID.
    ///
    /// # Errors
    /// Returns [Error::TransactionIdsExhausted] if there is no ID left to
    /// assign, or an error if the list could not be saved. The store is
    /// unchanged in both cases.
    pub fn insert(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let following_id = self
            .next_id
            .checked_add(1)
            .ok_or(Error::TransactionIdsExhausted)?;
        let transaction = new_transaction.with_id(self.next_id);

        let mut transactions = self.transactions.clone();
        transactions.push(transaction.clone());
        self.commit(transactions)?;
        self.next_id = following_id;

        tracing::debug!(
            id = transaction.id,
            category = %transaction.category,
            "Added transaction"
        );

        Ok(transaction)
    }

    /// Replace the fields supplied in `patch` on the transaction with `id`.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingTransaction] if there is no transaction
    /// with `id`, a validation error if a supplied field is invalid, or
    /// [Error::PersistenceWrite] if the list could not be saved. The store is
    /// unchanged in all of these cases.
    pub fn update(
        &mut self,
        id: TransactionId,
        patch: &TransactionPatch,
    ) -> Result<Transaction, Error> {
        let position = self
            .position(id)
            .ok_or(Error::UpdateMissingTransaction)?;
        patch.validate()?;

        let updated = patch.apply_to(&self.transactions[position]);
        let mut transactions = self.transactions.clone();
        transactions[position] = updated.clone();
        self.commit(transactions)?;

        tracing::debug!(id, "Updated transaction");

        Ok(updated)
    }

    /// Remove the transaction with `id`, returning it.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingTransaction] if there is no transaction
    /// with `id`, or [Error::PersistenceWrite] if the list could not be saved.
    /// The store is unchanged in both cases.
    pub fn delete(&mut self, id: TransactionId) -> Result<Transaction, Error> {
        let position = self
            .position(id)
            .ok_or(Error::DeleteMissingTransaction)?;

        let mut transactions = self.transactions.clone();
        let removed = transactions.remove(position);
        self.commit(transactions)?;

        tracing::debug!(id, "Deleted transaction");

        Ok(removed)
    }

    fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions
            .iter()
            .position(|transaction| transaction.id == id)
    }

    fn commit(&mut self, transactions: Vec<Transaction>) -> Result<(), Error> {
        let payload = encode_transactions(&transactions)?;

        if let Err(error) = self.slot.write(&payload) {
            tracing::error!(slot = self.slot.name(), "Could not save transactions: {error}");
            return Err(error);
        }

        self.transactions = transactions;

        Ok(())
    }
}

/// The ID to assign after the largest ID in `transactions`, 1 for an empty
/// list.
fn next_id_after(transactions: &[Transaction]) -> TransactionId {
    transactions
        .iter()
        .map(|transaction| transaction.id)
        .max()
        .map_or(1, |id| id.saturating_add(1))
}

/// Read the transaction list from `slot`, falling back to an empty list.
///
/// This never fails: an absent payload is the normal first-run state, and an
/// unreadable or corrupt payload is logged as a warning.
pub fn read_transactions(slot: &impl PersistenceSlot) -> Vec<Transaction> {
    let payload = match slot.read() {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(error) => {
            tracing::warn!(slot = slot.name(), "Could not read persisted transactions: {error}");
            return Vec::new();
        }
    };

    decode_transactions(&payload).unwrap_or_else(|error| {
        tracing::warn!(slot = slot.name(), "Ignoring persisted transactions: {error}");
        Vec::new()
    })
}

/// Serialize the transaction list as a JSON array.
///
/// # Errors
/// Returns [Error::JSONSerializationError] if serialization fails.
pub fn encode_transactions(transactions: &[Transaction]) -> Result<String, Error> {
    serde_json::to_string(transactions)
        .map_err(|error| Error::JSONSerializationError(error.to_string()))
}

/// Decode a persisted JSON array of transactions.
///
/// Besides being valid JSON, the payload must hold unique IDs that leave
/// room for a successor, non-empty descriptions and valid amounts, otherwise
/// the whole payload is rejected.
///
/// # Errors
/// Returns [Error::PersistenceDecode] describing the first problem found.
pub fn decode_transactions(payload: &str) -> Result<Vec<Transaction>, Error> {
    let transactions: Vec<Transaction> = serde_json::from_str(payload)
        .map_err(|error| Error::PersistenceDecode(error.to_string()))?;

    let mut seen_ids = HashSet::with_capacity(transactions.len());

    for transaction in &transactions {
        if transaction.id == TransactionId::MAX {
            return Err(Error::PersistenceDecode(format!(
                "transaction ID {} leaves no room for new transactions",
                transaction.id
            )));
        }

        if !seen_ids.insert(transaction.id) {
            return Err(Error::PersistenceDecode(format!(
                "duplicate transaction ID {}",
                transaction.id
            )));
        }

        if transaction.description.trim().is_empty() {
            return Err(Error::PersistenceDecode(format!(
                "transaction {} has an empty description",
                transaction.id
            )));
        }

        validate_amount(transaction.amount).map_err(|error| {
            Error::PersistenceDecode(format!("transaction {}: {error}", transaction.id))
        })?;
    }

    Ok(transactions)
}
