//! Derives the visible set of transactions from the store.
//!
//! Filters are applied in a fixed order: the time window first, then the
//! category. Both preserve the order of the input.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Category, Transaction};

/// The time window used to select transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeFilter {
    /// Every transaction, regardless of date.
    #[default]
    All,
    /// Only transactions in the same calendar month and year as "now".
    Monthly,
}

impl TimeFilter {
    /// The human readable name of the window, used in the total label.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Time",
            Self::Monthly => "This Month",
        }
    }

    /// Whether `date` falls inside the window anchored at `now`.
    pub fn contains(self, date: Date, now: Date) -> bool {
        match self {
            Self::All => true,
            Self::Monthly => date.year() == now.year() && date.month() == now.month(),
        }
    }
}

/// Select the transactions that pass the time window and category filters.
///
/// `now` anchors the monthly window, pass [crate::today] outside of tests.
/// A `category` of `None` applies no category restriction.
pub fn visible<'a>(
    transactions: &'a [Transaction],
    time_filter: TimeFilter,
    category: Option<&Category>,
    now: Date,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|transaction| time_filter.contains(transaction.date, now))
        .filter(|transaction| category.is_none_or(|category| &transaction.category == category))
        .collect()
}

#[cfg(test)]
mod tests {
    use time::{Date, macros::date};

    use crate::{Category, NewTransaction, TimeFilter, Transaction, visible};

    fn create_test_transaction(id: i64, category: &str, date: Date) -> Transaction {
        NewTransaction::new("Test", 10.0, category, date)
            .unwrap()
            .with_id(id)
    }

    fn ids(transactions: &[&Transaction]) -> Vec<i64> {
        transactions.iter().map(|transaction| transaction.id).collect()
    }

    #[test]
    fn all_time_is_identity() {
        let transactions = vec![
            create_test_transaction(1, "Rent", date!(2020 - 05 - 01)),
            create_test_transaction(2, "Gas", date!(2024 - 01 - 02)),
            create_test_transaction(3, "Rent", date!(2030 - 12 - 31)),
        ];

        let result = visible(&transactions, TimeFilter::All, None, date!(2024 - 01 - 15));

        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn monthly_keeps_same_month_and_year_only() {
        let transactions = vec![
            create_test_transaction(1, "Rent", date!(2024 - 01 - 01)),
            create_test_transaction(2, "Gas", date!(2024 - 01 - 31)),
            create_test_transaction(3, "Gas", date!(2023 - 01 - 15)),
            create_test_transaction(4, "Gas", date!(2024 - 02 - 01)),
            create_test_transaction(5, "Gas", date!(2023 - 12 - 31)),
        ];

        let result = visible(&transactions, TimeFilter::Monthly, None, date!(2024 - 01 - 15));

        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[test]
    fn category_filter_applies_after_time_filter() {
        let transactions = vec![
            create_test_transaction(1, "Gas", date!(2024 - 01 - 01)),
            create_test_transaction(2, "Rent", date!(2024 - 01 - 01)),
            create_test_transaction(3, "Gas", date!(2023 - 06 - 01)),
            create_test_transaction(4, "Gas", date!(2024 - 01 - 20)),
        ];
        let gas = Category::new("Gas").unwrap();

        let monthly = visible(
            &transactions,
            TimeFilter::Monthly,
            Some(&gas),
            date!(2024 - 01 - 15),
        );
        let all_time = visible(&transactions, TimeFilter::All, Some(&gas), date!(2024 - 01 - 15));

        assert_eq!(ids(&monthly), vec![1, 4]);
        assert_eq!(ids(&all_time), vec![1, 3, 4]);
    }

    #[test]
    fn unknown_category_gives_empty_set() {
        let transactions = vec![create_test_transaction(1, "Gas", date!(2024 - 01 - 01))];
        let travel = Category::new("Travel").unwrap();

        let result = visible(&transactions, TimeFilter::All, Some(&travel), date!(2024 - 01 - 15));

        assert!(result.is_empty());
    }

    #[test]
    fn time_filter_labels() {
        assert_eq!(TimeFilter::All.label(), "All Time");
        assert_eq!(TimeFilter::Monthly.label(), "This Month");
    }
}
