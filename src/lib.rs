//! Expense tracker is a personal expense log that lives entirely on the client.
//!
//! Transactions are kept in a [TransactionStore] that rewrites a single
//! [PersistenceSlot] after every change. The visible set is derived from the
//! store by the [filter] functions, reduced by the aggregation functions in
//! [dashboard] and projected into table rows, a chart model and a total label
//! for whatever renders the page.
//!
//! [Tracker] wires these pieces together with the UI state described by
//! [AppState].

#![warn(missing_docs)]

mod category;
mod config;
pub mod dashboard;
pub mod filter;
mod html;
mod logging;
mod slot;
mod state;
mod store;
mod timezone;
mod tracker;
mod transaction;

pub use category::Category;
pub use config::{DEFAULT_PALETTE, TrackerConfig};
pub use filter::{TimeFilter, visible};
pub use html::{format_amount, format_currency, format_date_label};
pub use logging::init_logging;
#[cfg(feature = "web")]
pub use slot::LocalStorageSlot;
pub use slot::{MemorySlot, PersistenceSlot};
#[cfg(feature = "sqlite")]
pub use slot::{SqliteSlot, create_slot_table};
pub use state::{AppState, ChartType, EditState};
pub use store::{TransactionStore, decode_transactions, encode_transactions, read_transactions};
pub use timezone::today;
pub use tracker::{ConfirmDelete, DeleteOutcome, SubmitOutcome, Tracker};
pub use transaction::{NewTransaction, Transaction, TransactionForm, TransactionId, TransactionPatch};

/// The errors that may occur in the application.
///
/// None of these are fatal: every operation that returns an error leaves the
/// store and the UI state as they were before the call.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A transaction was submitted without a description.
    #[error("description cannot be empty")]
    EmptyDescription,

    /// A transaction was submitted without a category.
    #[error("category cannot be empty")]
    EmptyCategory,

    /// The amount was not a finite, non-negative number.
    ///
    /// Holds the rejected input as text.
    #[error("\"{0}\" is not a valid amount, amounts must be finite, non-negative numbers")]
    InvalidAmount(String),

    /// The date could not be parsed as a `YYYY-MM-DD` calendar date.
    #[error("\"{0}\" is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Tried to update a transaction that is not in the store.
    #[error("tried to update a transaction that is not in the store")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that is not in the store.
    #[error("tried to delete a transaction that is not in the store")]
    DeleteMissingTransaction,

    /// Tried to start editing a transaction that is not in the store.
    #[error("tried to edit a transaction that is not in the store")]
    EditMissingTransaction,

    /// Every transaction ID has been used.
    #[error("there are no transaction IDs left to assign")]
    TransactionIdsExhausted,

    /// A chart segment index did not match any category in the chart.
    #[error("there is no chart segment at index {0}")]
    InvalidSegment(usize),

    /// The persisted payload could not be decoded into a list of transactions.
    ///
    /// [TransactionStore::load] never returns this error, it falls back to
    /// an empty list instead.
    #[error("could not decode the persisted transactions: {0}")]
    PersistenceDecode(String),

    /// The persistence slot could not be read.
    #[error("could not read the persistence slot: {0}")]
    PersistenceRead(String),

    /// The persistence slot rejected a write.
    #[error("could not write to the persistence slot: {0}")]
    PersistenceWrite(String),

    /// An error occurred while serializing a struct as JSON.
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// A colour palette must contain at least one colour.
    #[error("the chart palette cannot be empty")]
    EmptyPalette,

    /// The configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Could not acquire the lock on a shared persistence slot.
    #[error("could not acquire the persistence slot lock")]
    SlotLockError,

    /// The logging subscriber could not be installed.
    #[error("could not initialise logging: {0}")]
    LoggingInitError(String),

    /// An unhandled/unexpected SQL error.
    #[cfg(feature = "sqlite")]
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl Error {
    /// Whether the error was caused by invalid user input.
    ///
    /// Validation errors reject a submission and leave the store unchanged.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::EmptyDescription
                | Error::EmptyCategory
                | Error::InvalidAmount(_)
                | Error::InvalidDate(_)
        )
    }

    /// Whether the error was caused by an id that is not in the store.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::UpdateMissingTransaction
                | Error::DeleteMissingTransaction
                | Error::EditMissingTransaction
        )
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}
