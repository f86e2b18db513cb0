//! Raw values exchanged with the transaction form.

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{Error, NewTransaction, Transaction};

const DATE_INPUT_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// The values in the transaction form, exactly as the user typed them.
///
/// The form collaborator hands one of these over on submit, and receives one
/// (via `From<&Transaction>`) to pre-fill the inputs when editing starts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionForm {
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount as entered, e.g. "12.50".
    pub amount: String,
    /// The category label.
    pub category: String,
    /// The date in `YYYY-MM-DD` format, as produced by a date input.
    pub date: String,
}

impl TransactionForm {
    /// Validate the form and convert it into a [NewTransaction].
    ///
    /// # Errors
    ///
    /// Returns one of the validation errors ([Error::EmptyDescription],
    /// [Error::EmptyCategory], [Error::InvalidAmount], [Error::InvalidDate])
    /// for the first invalid field. The amount and date are parsed before the
    /// text fields are checked.
    pub fn parse(&self) -> Result<NewTransaction, Error> {
        let amount = parse_amount(&self.amount)?;
        let date = parse_date(&self.date)?;

        NewTransaction::new(&self.description, amount, &self.category, date)
    }
}

impl From<&Transaction> for TransactionForm {
    fn from(transaction: &Transaction) -> Self {
        Self {
            description: transaction.description.clone(),
            amount: format!("{:.2}", transaction.amount),
            category: transaction.category.to_string(),
            date: format_date_input(transaction.date),
        }
    }
}

fn parse_amount(text: &str) -> Result<f64, Error> {
    let text = text.trim();

    text.parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
        .ok_or_else(|| Error::InvalidAmount(text.to_owned()))
}

fn parse_date(text: &str) -> Result<Date, Error> {
    let text = text.trim();

    Date::parse(text, DATE_INPUT_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}

fn format_date_input(date: Date) -> String {
    date.format(DATE_INPUT_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{Category, Error, TransactionForm};

    fn form(description: &str, amount: &str, category: &str, date: &str) -> TransactionForm {
        TransactionForm {
            description: description.to_owned(),
            amount: amount.to_owned(),
            category: category.to_owned(),
            date: date.to_owned(),
        }
    }

    #[test]
    fn parse_valid_form() {
        let transaction = form("Rent", "1450", "Rent", "2024-01-01").parse().unwrap();

        assert_eq!(transaction.description, "Rent");
        assert_eq!(transaction.amount, 1450.0);
        assert_eq!(transaction.category, Category::new("Rent").unwrap());
        assert_eq!(transaction.date, date!(2024 - 01 - 01));
    }

    #[test]
    fn parse_trims_amount_and_date() {
        let transaction = form("Gas", " 30.25 ", "Gas", " 2024-01-02 ").parse().unwrap();

        assert_eq!(transaction.amount, 30.25);
        assert_eq!(transaction.date, date!(2024 - 01 - 02));
    }

    #[test]
    fn parse_rejects_non_numeric_amount() {
        let result = form("Gas", "thirty", "Gas", "2024-01-02").parse();

        assert_eq!(result, Err(Error::InvalidAmount("thirty".to_owned())));
    }

    #[test]
    fn parse_rejects_negative_and_non_finite_amounts() {
        for amount in ["-1", "NaN", "inf", ""] {
            let result = form("Gas", amount, "Gas", "2024-01-02").parse();

            assert!(
                matches!(result, Err(Error::InvalidAmount(_))),
                "want invalid amount for {amount:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_bad_date() {
        let result = form("Gas", "30", "Gas", "02/01/2024").parse();

        assert_eq!(result, Err(Error::InvalidDate("02/01/2024".to_owned())));
    }

    #[test]
    fn parse_rejects_missing_fields() {
        assert_eq!(
            form("", "30", "Gas", "2024-01-02").parse(),
            Err(Error::EmptyDescription)
        );
        assert_eq!(
            form("Fuel", "30", " ", "2024-01-02").parse(),
            Err(Error::EmptyCategory)
        );
    }

    #[test]
    fn prefill_from_transaction() {
        let transaction = form("Fuel", "30.5", "Gas", "2024-01-02")
            .parse()
            .unwrap()
            .with_id(3);

        let prefill = TransactionForm::from(&transaction);

        assert_eq!(prefill, form("Fuel", "30.50", "Gas", "2024-01-02"));
    }
}
