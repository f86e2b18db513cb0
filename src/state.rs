//! UI state that is not persisted: the edit target, the filters and the chart
//! type.
//!
//! State changes are pure functions that take the current [AppState] and
//! return the next one.

use serde::{Deserialize, Serialize};

use crate::{Category, TimeFilter, TransactionId};

/// Whether the next submit inserts a new transaction or updates one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditState {
    /// The next submit inserts a new transaction.
    #[default]
    Idle,
    /// The next submit updates the transaction with this ID.
    Editing(TransactionId),
}

impl EditState {
    /// The ID being edited, if any.
    pub fn editing_id(self) -> Option<TransactionId> {
        match self {
            Self::Idle => None,
            Self::Editing(id) => Some(id),
        }
    }

    /// The text for the submit button.
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Idle => "Add",
            Self::Editing(_) => "Update",
        }
    }
}

/// How the category chart is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartType {
    /// A full pie chart.
    #[default]
    Pie,
    /// A pie chart with a hollow centre.
    Doughnut,
}

impl ChartType {
    /// The other chart type.
    pub fn toggled(self) -> Self {
        match self {
            Self::Pie => Self::Doughnut,
            Self::Doughnut => Self::Pie,
        }
    }

    /// The name the chart renderer knows this type by.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
        }
    }
}

/// The UI state of the tracker.
///
/// None of these values change unless the user asks for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Whether a transaction is being edited.
    pub edit: EditState,
    /// The active time window.
    pub time_filter: TimeFilter,
    /// The active category restriction, if any.
    pub category_filter: Option<Category>,
    /// How the category chart is drawn.
    pub chart_type: ChartType,
}

impl AppState {
    /// Create the initial state with the given defaults.
    pub fn new(time_filter: TimeFilter, chart_type: ChartType) -> Self {
        Self {
            edit: EditState::Idle,
            time_filter,
            category_filter: None,
            chart_type,
        }
    }

    /// Toggle the category filter.
    ///
    /// Selecting the active category clears the filter, selecting any other
    /// category replaces it.
    pub fn toggle_category(self, category: Category) -> Self {
        let category_filter = match self.category_filter {
            Some(active) if active == category => None,
            _ => Some(category),
        };

        Self {
            category_filter,
            ..self
        }
    }

    /// Remove the category restriction.
    pub fn clear_category_filter(self) -> Self {
        Self {
            category_filter: None,
            ..self
        }
    }

    /// Switch to a different time window.
    pub fn with_time_filter(self, time_filter: TimeFilter) -> Self {
        Self {
            time_filter,
            ..self
        }
    }

    /// Switch to a different chart type.
    pub fn with_chart_type(self, chart_type: ChartType) -> Self {
        Self { chart_type, ..self }
    }

    /// Make the next submit an update of `id`.
    pub fn begin_edit(self, id: TransactionId) -> Self {
        Self {
            edit: EditState::Editing(id),
            ..self
        }
    }

    /// Return to inserting new transactions.
    pub fn finish_edit(self) -> Self {
        Self {
            edit: EditState::Idle,
            ..self
        }
    }

    /// Account for the transaction `id` having been deleted.
    ///
    /// Deleting the transaction being edited ends the edit.
    pub fn after_delete(self, id: TransactionId) -> Self {
        match self.edit {
            EditState::Editing(editing_id) if editing_id == id => self.finish_edit(),
            _ => self,
        }
    }
}
