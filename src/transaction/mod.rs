//! Transactions and the form used to enter them.
//!
//! This module contains:
//! - The `Transaction` model and the validated `NewTransaction`
//! - `TransactionPatch` for partial updates
//! - `TransactionForm`, the raw values exchanged with the form collaborator

mod core;
mod form;

pub use core::{NewTransaction, Transaction, TransactionId, TransactionPatch};
pub use form::TransactionForm;

pub(crate) use core::validate_amount;
