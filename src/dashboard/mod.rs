//! Dashboard module
//!
//! Aggregates the visible transactions and projects them into table rows, a
//! category chart and a total, plus the HTML and chart configuration used to
//! draw them.

pub mod aggregation;
pub mod charts;
pub mod tables;
pub mod view;

pub use aggregation::{CategoryTotal, by_category, total};
pub use charts::{CHART_ELEMENT_ID, ChartOptions, chart_script, chart_view, expense_chart};
pub use tables::{total_view, transactions_table};
pub use view::{ChartModel, TableRow, View, chart_model, project, table_rows, total_label};
