//! Table views for the transaction list and the total.

use maud::{Markup, html};

use crate::{
    TransactionId,
    dashboard::view::{TableRow, View},
};

const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";
const TABLE_ROW_EDITING_STYLE: &str =
    "bg-blue-50 border-b dark:bg-blue-900 dark:border-gray-700";
const TABLE_CELL_STYLE: &str = "px-6 py-4";
const TABLE_HEADER_CELL_STYLE: &str = "px-6 py-3";

/// Renders the visible transactions as a table.
///
/// Each row carries edit and delete buttons with the transaction ID in a
/// `data-id` attribute. The row for `editing_id` is highlighted.
pub fn transactions_table(rows: &[TableRow], editing_id: Option<TransactionId>) -> Markup {
    html! {
        div class="overflow-x-auto rounded-lg shadow" {
            table id="transactions" class="w-full text-sm text-left text-gray-500 dark:text-gray-400" {
                thead class="text-xs text-gray-700 uppercase bg-gray-50 dark:bg-gray-700 dark:text-gray-400" {
                    tr {
                        th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Amount" }
                        th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Actions" }
                    }
                }
                tbody {
                    @for row in rows {
                        @let editing = editing_id == Some(row.id);
                        tr
                            data-id=(row.id)
                            class=(if editing { TABLE_ROW_EDITING_STYLE } else { TABLE_ROW_STYLE })
                        {
                            td class=(TABLE_CELL_STYLE) { (row.description) }
                            td class=(TABLE_CELL_STYLE) { (row.amount) }
                            td class=(TABLE_CELL_STYLE) { (row.category) }
                            td class=(TABLE_CELL_STYLE) { (row.date) }
                            td class={(TABLE_CELL_STYLE) " flex gap-4"} {
                                button type="button" data-action="edit" data-id=(row.id) { "Edit" }
                                button type="button" data-action="delete" data-id=(row.id) { "Delete" }
                            }
                        }
                    } @if rows.is_empty() {
                        tr class=(TABLE_ROW_STYLE) {
                            td colspan="5" class={(TABLE_CELL_STYLE) " text-center"} {
                                "No transactions to show"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the total and the label describing what it covers.
pub fn total_view(view: &View) -> Markup {
    html! {
        div id="total" class="text-xl font-semibold mb-4" {
            span id="total-label" { (view.total_label) ": " }
            span id="total-amount" { (view.total_text) }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        AppState, NewTransaction, TrackerConfig,
        dashboard::{
            tables::{total_view, transactions_table},
            view::{TableRow, project},
        },
    };

    fn get_test_rows() -> Vec<TableRow> {
        vec![
            TableRow {
                id: 1,
                description: "Rent".to_owned(),
                amount: "1450.00".to_owned(),
                category: "Rent".to_owned(),
                date: "1 Jan 2024".to_owned(),
            },
            TableRow {
                id: 2,
                description: "Gas <station>".to_owned(),
                amount: "30.00".to_owned(),
                category: "Gas".to_owned(),
                date: "2 Jan 2024".to_owned(),
            },
        ]
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }

    #[test]
    fn renders_one_row_per_transaction() {
        let markup = transactions_table(&get_test_rows(), None).into_string();
        let html = Html::parse_fragment(&markup);
        assert_valid_html(&html);

        let row_selector = Selector::parse("tbody tr[data-id]").unwrap();
        let rows: Vec<_> = html.select(&row_selector).collect();
        assert_eq!(rows.len(), 2);

        let cell_selector = Selector::parse("td").unwrap();
        let cells: Vec<String> = rows[1]
            .select(&cell_selector)
            .take(4)
            .map(|cell| cell.text().collect())
            .collect();
        assert_eq!(cells, vec!["Gas <station>", "30.00", "Gas", "2 Jan 2024"]);
    }

    #[test]
    fn rows_have_edit_and_delete_actions() {
        let markup = transactions_table(&get_test_rows(), None).into_string();
        let html = Html::parse_fragment(&markup);

        for action in ["edit", "delete"] {
            let selector = Selector::parse(&format!("button[data-action={action}]")).unwrap();
            let ids: Vec<_> = html
                .select(&selector)
                .filter_map(|button| button.value().attr("data-id"))
                .collect();
            assert_eq!(ids, vec!["1", "2"], "want {action} buttons for each row");
        }
    }

    #[test]
    fn editing_row_is_highlighted() {
        let markup = transactions_table(&get_test_rows(), Some(2)).into_string();
        let html = Html::parse_fragment(&markup);

        let selector = Selector::parse("tr[data-id=\"2\"]").unwrap();
        let row = html.select(&selector).next().expect("row 2 missing");
        let class = row.value().attr("class").unwrap_or_default();
        assert!(class.contains("bg-blue-50"), "got class {class:?}");
    }

    #[test]
    fn empty_table_shows_placeholder() {
        let markup = transactions_table(&[], None).into_string();
        let html = Html::parse_fragment(&markup);
        assert_valid_html(&html);

        let selector = Selector::parse("tbody td[colspan]").unwrap();
        let text: String = html
            .select(&selector)
            .next()
            .expect("placeholder missing")
            .text()
            .collect();
        assert_eq!(text.trim(), "No transactions to show");
    }

    #[test]
    fn total_view_shows_label_and_amount() {
        let transactions = vec![
            NewTransaction::new("Gas", 30.0, "Gas", date!(2024 - 01 - 02))
                .unwrap()
                .with_id(1),
        ];
        let view = project(
            &transactions,
            &AppState::default(),
            date!(2024 - 01 - 15),
            &TrackerConfig::default(),
        );

        let html = Html::parse_fragment(&total_view(&view).into_string());

        let label_selector = Selector::parse("#total-label").unwrap();
        let label: String = html.select(&label_selector).next().unwrap().text().collect();
        assert_eq!(label, "Total Spent (All Time): ");
    }
}
