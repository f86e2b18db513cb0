//! The application controller.
//!
//! A user action (submit, edit, delete, change a filter, click a chart
//! segment) mutates the store if needed, which persists the list, and then
//! the UI state. [Tracker::view] recomputes everything derived from the two.

use std::mem;

use time::Date;

use crate::{
    AppState, Category, ChartType, Error, PersistenceSlot, TimeFilter, TrackerConfig,
    Transaction, TransactionForm, TransactionId, TransactionStore,
    dashboard::{ChartOptions, View, by_category, chart_model, project},
    filter::visible,
};

/// Asks the user to confirm a deletion.
///
/// Implemented for closures, e.g. `|_: &Transaction| true`.
pub trait ConfirmDelete {
    /// Whether `transaction` should be deleted.
    fn confirm(&self, transaction: &Transaction) -> bool;
}

impl<F> ConfirmDelete for F
where
    F: Fn(&Transaction) -> bool,
{
    fn confirm(&self, transaction: &Transaction) -> bool {
        self(transaction)
    }
}

/// The result of a successful submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A new transaction was added.
    Added(Transaction),
    /// The transaction being edited was updated.
    Updated(Transaction),
}

/// The result of a delete request.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The transaction was removed.
    Deleted(Transaction),
    /// The user declined, nothing changed.
    Cancelled,
}

/// Owns the transaction store, the UI state and the configuration.
#[derive(Debug)]
pub struct Tracker<S> {
    store: TransactionStore<S>,
    state: AppState,
    config: TrackerConfig,
}

impl<S: PersistenceSlot> Tracker<S> {
    /// Open the slot named by `config.storage_key` with `open_slot`, load the
    /// store from it and start with the configured defaults.
    ///
    /// ```
    /// use expense_tracker::{MemorySlot, PersistenceSlot, Tracker, TrackerConfig};
    ///
    /// let tracker = Tracker::open(TrackerConfig::default(), |key| Ok(MemorySlot::new(key)))?;
    /// assert_eq!(tracker.store().slot().name(), "transactions");
    /// # Ok::<(), expense_tracker::Error>(())
    /// ```
    ///
    /// # Errors
    /// Returns [Error::EmptyPalette] if the configuration is invalid, or the
    /// error from `open_slot`.
    pub fn open(
        config: TrackerConfig,
        open_slot: impl FnOnce(&str) -> Result<S, Error>,
    ) -> Result<Self, Error> {
        config.validate()?;
        let slot = open_slot(&config.storage_key)?;

        Ok(Self::new(slot, config))
    }

    /// Load the store from an already opened `slot` and start with the
    /// configured defaults.
    ///
    /// `config.storage_key` is not consulted, see [Tracker::open].
    pub fn new(slot: S, config: TrackerConfig) -> Self {
        let state = AppState::new(config.default_time_filter, config.default_chart_type);

        Self {
            store: TransactionStore::load(slot),
            state,
            config,
        }
    }

    /// The transaction store.
    pub fn store(&self) -> &TransactionStore<S> {
        &self.store
    }

    /// The current UI state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The configuration the tracker was created with.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Handle a form submission.
    ///
    /// Adds a new transaction, or when a transaction is being edited, updates
    /// it and ends the edit.
    ///
    /// # Errors
    /// Returns a validation error if the form is invalid, or a persistence
    /// error if the change could not be saved. The store and the UI state are
    /// unchanged in both cases.
    pub fn submit(&mut self, form: &TransactionForm) -> Result<SubmitOutcome, Error> {
        let new_transaction = form.parse()?;

        let Some(id) = self.state.edit.editing_id() else {
            return self.store.insert(new_transaction).map(SubmitOutcome::Added);
        };

        match self.store.update(id, &new_transaction.into()) {
            Ok(updated) => {
                self.update_state(AppState::finish_edit);
                Ok(SubmitOutcome::Updated(updated))
            }
            Err(Error::UpdateMissingTransaction) => {
                tracing::warn!(id, "Edited transaction no longer exists, ending edit");
                self.update_state(AppState::finish_edit);
                Err(Error::UpdateMissingTransaction)
            }
            Err(error) => Err(error),
        }
    }

    /// Start editing the transaction with `id`.
    ///
    /// Returns the values to pre-fill the form with.
    ///
    /// # Errors
    /// Returns [Error::EditMissingTransaction] if there is no transaction
    /// with `id`, the UI state is unchanged.
    pub fn edit_transaction(&mut self, id: TransactionId) -> Result<TransactionForm, Error> {
        let form = self
            .store
            .get(id)
            .map(TransactionForm::from)
            .ok_or(Error::EditMissingTransaction)?;

        self.update_state(|state| state.begin_edit(id));

        Ok(form)
    }

    /// Stop editing without saving.
    pub fn cancel_edit(&mut self) {
        self.update_state(AppState::finish_edit);
    }

    /// Delete the transaction with `id` once `confirm` agrees.
    ///
    /// Deleting the transaction being edited also ends the edit.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingTransaction] if there is no transaction
    /// with `id`, or a persistence error if the change could not be saved.
    pub fn delete_transaction(
        &mut self,
        id: TransactionId,
        confirm: &impl ConfirmDelete,
    ) -> Result<DeleteOutcome, Error> {
        let transaction = self.store.get(id).ok_or(Error::DeleteMissingTransaction)?;

        if !confirm.confirm(transaction) {
            tracing::debug!(id, "Deletion cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let removed = self.store.delete(id)?;
        self.update_state(|state| state.after_delete(id));

        Ok(DeleteOutcome::Deleted(removed))
    }

    /// Switch the time window.
    pub fn set_time_filter(&mut self, time_filter: TimeFilter) {
        self.update_state(|state| state.with_time_filter(time_filter));
    }

    /// Switch the chart type.
    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.update_state(|state| state.with_chart_type(chart_type));
    }

    /// Switch between pie and doughnut charts.
    pub fn toggle_chart_type(&mut self) {
        let chart_type = self.state.chart_type.toggled();
        self.set_chart_type(chart_type);
    }

    /// Remove the category restriction.
    pub fn clear_category_filter(&mut self) {
        self.update_state(AppState::clear_category_filter);
    }

    /// Handle a click on chart segment `index`.
    ///
    /// The segment is resolved against the chart as currently displayed for
    /// `now`. Clicking the active category clears the filter, clicking any
    /// other category selects it. Returns the category filter after the
    /// click.
    ///
    /// # Errors
    /// Returns [Error::InvalidSegment] if the chart has no segment at
    /// `index`, the UI state is unchanged.
    pub fn click_segment(&mut self, index: usize, now: Date) -> Result<Option<&Category>, Error> {
        let visible = visible(
            self.store.all(),
            self.state.time_filter,
            self.state.category_filter.as_ref(),
            now,
        );
        let category = chart_model(&by_category(&visible), &self.config).category_at(index)?;

        tracing::debug!(index, category = %category, "Chart segment clicked");
        self.update_state(|state| state.toggle_category(category));

        Ok(self.state.category_filter.as_ref())
    }

    /// Compute everything the renderers need for `now`.
    pub fn view(&self, now: Date) -> View {
        project(self.store.all(), &self.state, now, &self.config)
    }

    /// The chart configuration for a computed view.
    pub fn chart_options(&self, view: &View) -> ChartOptions {
        ChartOptions::new(&view.chart, view.chart_type, &self.config.currency_symbol)
    }

    fn update_state(&mut self, update: impl FnOnce(AppState) -> AppState) {
        let state = mem::take(&mut self.state);
        self.state = update(state);
    }
}
