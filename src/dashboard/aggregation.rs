//! Reduces the visible set into a total and per-category sums.

use std::collections::HashMap;

use crate::{Category, Transaction};

/// The summed amount for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// The category.
    pub category: Category,
    /// The sum of the amounts of the visible transactions in the category.
    pub amount: f64,
}

/// The sum of the amounts of the visible transactions, zero if there are none.
pub fn total(visible: &[&Transaction]) -> f64 {
    visible.iter().map(|transaction| transaction.amount).sum()
}

/// Sums the amounts of the visible transactions by category.
///
/// Categories appear in the order they are first seen in `visible`. Chart
/// segments are drawn in this order and a segment click is mapped back to a
/// category by its position, so the order must not be changed (e.g. sorted).
pub fn by_category(visible: &[&Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut positions: HashMap<&Category, usize> = HashMap::new();

    for transaction in visible {
        match positions.get(&transaction.category) {
            Some(&position) => totals[position].amount += transaction.amount,
            None => {
                positions.insert(&transaction.category, totals.len());
                totals.push(CategoryTotal {
                    category: transaction.category.clone(),
                    amount: transaction.amount,
                });
            }
        }
    }

    totals
}
