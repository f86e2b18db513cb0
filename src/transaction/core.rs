//! Defines the core data models for transactions.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Category, Error};

/// Identifier for a transaction, unique within a store.
pub type TransactionId = i64;

/// An expense, i.e. an event where money was spent.
///
/// Transactions are created by [crate::TransactionStore::add], which assigns
/// the ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent, never negative.
    pub amount: f64,
    /// The category the transaction belongs to.
    pub category: Category,
    /// When the transaction happened.
    pub date: Date,
}

/// The validated fields of a transaction that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent.
    pub amount: f64,
    /// The category the transaction belongs to.
    pub category: Category,
    /// When the transaction happened.
    pub date: Date,
}

impl NewTransaction {
    /// Validate the fields of a new transaction.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyDescription] or [Error::EmptyCategory] if a text
    /// field is blank, and [Error::InvalidAmount] if `amount` is negative,
    /// NaN or infinite.
    pub fn new(description: &str, amount: f64, category: &str, date: Date) -> Result<Self, Error> {
        Ok(Self {
            description: validate_description(description)?,
            amount: validate_amount(amount)?,
            category: Category::new(category)?,
            date,
        })
    }

    pub(crate) fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            description: self.description,
            amount: self.amount,
            category: self.category,
            date: self.date,
        }
    }
}

/// A partial update for a transaction.
///
/// Only the fields that are `Some` are replaced, the ID is never changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    /// The replacement description.
    pub description: Option<String>,
    /// The replacement amount.
    pub amount: Option<f64>,
    /// The replacement category.
    pub category: Option<Category>,
    /// The replacement date.
    pub date: Option<Date>,
}

impl TransactionPatch {
    /// Replace the description.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    /// Replace the amount.
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Replace the category.
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Replace the date.
    pub fn date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    /// Check the supplied fields before anything is written.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let Some(description) = &self.description {
            validate_description(description)?;
        }

        if let Some(amount) = self.amount {
            validate_amount(amount)?;
        }

        Ok(())
    }

    /// Apply the patch to `transaction`, keeping its ID.
    pub(crate) fn apply_to(&self, transaction: &Transaction) -> Transaction {
        Transaction {
            id: transaction.id,
            description: self
                .description
                .as_deref()
                .map(|description| description.trim().to_owned())
                .unwrap_or_else(|| transaction.description.clone()),
            amount: self.amount.unwrap_or(transaction.amount),
            category: self
                .category
                .clone()
                .unwrap_or_else(|| transaction.category.clone()),
            date: self.date.unwrap_or(transaction.date),
        }
    }
}

impl From<NewTransaction> for TransactionPatch {
    fn from(value: NewTransaction) -> Self {
        Self {
            description: Some(value.description),
            amount: Some(value.amount),
            category: Some(value.category),
            date: Some(value.date),
        }
    }
}

pub(crate) fn validate_description(description: &str) -> Result<String, Error> {
    let description = description.trim();

    if description.is_empty() {
        Err(Error::EmptyDescription)
    } else {
        Ok(description.to_owned())
    }
}

pub(crate) fn validate_amount(amount: f64) -> Result<f64, Error> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(Error::InvalidAmount(amount.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{Category, Error, NewTransaction, TransactionPatch};

    #[test]
    fn new_transaction_trims_description() {
        let transaction =
            NewTransaction::new("  Rent  ", 1450.0, "Rent", date!(2024 - 01 - 01)).unwrap();

        assert_eq!(transaction.description, "Rent");
    }

    #[test]
    fn new_transaction_rejects_blank_description() {
        let result = NewTransaction::new(" ", 10.0, "Gas", date!(2024 - 01 - 01));

        assert_eq!(result, Err(Error::EmptyDescription));
    }

    #[test]
    fn new_transaction_rejects_blank_category() {
        let result = NewTransaction::new("Fuel", 10.0, "", date!(2024 - 01 - 01));

        assert_eq!(result, Err(Error::EmptyCategory));
    }

    #[test]
    fn new_transaction_rejects_bad_amounts() {
        for amount in [-0.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = NewTransaction::new("Fuel", amount, "Gas", date!(2024 - 01 - 01));

            assert!(
                matches!(result, Err(Error::InvalidAmount(_))),
                "want invalid amount error for {amount}, got {result:?}"
            );
        }
    }

    #[test]
    fn new_transaction_accepts_zero_amount() {
        let result = NewTransaction::new("Free coffee", 0.0, "Food", date!(2024 - 01 - 01));

        assert!(result.is_ok());
    }

    #[test]
    fn patch_only_replaces_supplied_fields() {
        let original = NewTransaction::new("Fuel", 30.0, "Gas", date!(2024 - 01 - 02))
            .unwrap()
            .with_id(7);

        let updated = TransactionPatch::default().amount(45.5).apply_to(&original);

        assert_eq!(updated.id, 7);
        assert_eq!(updated.amount, 45.5);
        assert_eq!(updated.description, "Fuel");
        assert_eq!(updated.category, Category::new("Gas").unwrap());
        assert_eq!(updated.date, date!(2024 - 01 - 02));
    }

    #[test]
    fn patch_validation_rejects_negative_amount() {
        let patch = TransactionPatch::default().amount(-5.0);

        assert!(matches!(patch.validate(), Err(Error::InvalidAmount(_))));
    }
}
