//! Maps the visible set and its aggregates into the shapes the table and chart
//! renderers consume.

use serde::Serialize;
use time::Date;

use crate::{
    AppState, Category, ChartType, Error, TimeFilter, Transaction, TransactionId, TrackerConfig,
    dashboard::aggregation::{CategoryTotal, by_category, total},
    filter::visible,
    format_amount, format_currency, format_date_label,
};

/// One row of the transactions table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    /// The transaction ID, used by the edit and delete actions.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount with two decimal places.
    pub amount: String,
    /// The category label.
    pub category: String,
    /// The date formatted for display.
    pub date: String,
}

/// The data for the category chart, one entry per segment.
///
/// The three lists have the same length and are in segment order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartModel {
    /// Category labels.
    pub labels: Vec<String>,
    /// Category totals.
    pub values: Vec<f64>,
    /// Segment colours.
    pub colors: Vec<String>,
}

impl ChartModel {
    /// Whether the chart has no segments.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The category drawn at segment `index`.
    ///
    /// # Errors
    /// Returns [Error::InvalidSegment] if there is no segment at `index`.
    pub fn category_at(&self, index: usize) -> Result<Category, Error> {
        self.labels
            .get(index)
            .ok_or(Error::InvalidSegment(index))
            .and_then(|label| Category::new(label))
    }
}

/// Everything the renderers need to draw the page.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// The visible transactions as table rows.
    pub rows: Vec<TableRow>,
    /// The sum of the visible amounts.
    pub total: f64,
    /// The total formatted as currency.
    pub total_text: String,
    /// What the total covers, e.g. "Total Spent (All Time)".
    pub total_label: String,
    /// The category chart.
    pub chart: ChartModel,
    /// How the chart is drawn.
    pub chart_type: ChartType,
    /// The text for the submit button.
    pub submit_label: &'static str,
    /// The transaction being edited, if any.
    pub editing_id: Option<TransactionId>,
}

/// Project the store contents through the filters, aggregates and formatters.
pub fn project(
    transactions: &[Transaction],
    state: &AppState,
    now: Date,
    config: &TrackerConfig,
) -> View {
    let visible = visible(
        transactions,
        state.time_filter,
        state.category_filter.as_ref(),
        now,
    );
    let total = total(&visible);

    View {
        rows: table_rows(&visible),
        total,
        total_text: format_currency(total, &config.currency_symbol),
        total_label: total_label(state.time_filter, state.category_filter.as_ref()),
        chart: chart_model(&by_category(&visible), config),
        chart_type: state.chart_type,
        submit_label: state.edit.submit_label(),
        editing_id: state.edit.editing_id(),
    }
}

/// Convert the visible transactions into table rows, keeping their order.
pub fn table_rows(visible: &[&Transaction]) -> Vec<TableRow> {
    visible
        .iter()
        .map(|transaction| TableRow {
            id: transaction.id,
            description: transaction.description.clone(),
            amount: format_amount(transaction.amount),
            category: transaction.category.to_string(),
            date: format_date_label(transaction.date),
        })
        .collect()
}

/// Build the chart data from category totals.
///
/// Colours are assigned by position, cycling through the palette.
pub fn chart_model(totals: &[CategoryTotal], config: &TrackerConfig) -> ChartModel {
    ChartModel {
        labels: totals.iter().map(|t| t.category.to_string()).collect(),
        values: totals.iter().map(|t| t.amount).collect(),
        colors: (0..totals.len())
            .map(|position| config.colour_at(position).to_owned())
            .collect(),
    }
}

/// Describe what the displayed total covers.
pub fn total_label(time_filter: TimeFilter, category: Option<&Category>) -> String {
    match category {
        Some(category) => format!("Total Spent on {category} ({})", time_filter.label()),
        None => format!("Total Spent ({})", time_filter.label()),
    }
}
