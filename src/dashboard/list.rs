//! The "Recent Transactions" list on the dashboard.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    endpoints,
    html::{
        AMOUNT_NEGATIVE_STYLE, AMOUNT_POSITIVE_STYLE, CARD_STYLE, CARD_TITLE_STYLE,
        format_signed_currency, link,
    },
    transaction::Transaction,
};

/// The max number of graphemes to display for a title before truncating and
/// displaying ellipses.
const MAX_TITLE_GRAPHEMES: usize = 32;

/// Renders `transactions` in the given order, one row per transaction.
pub(super) fn transaction_list_view(transactions: &[&Transaction]) -> Markup {
    html! {
        section
            id="recent-transactions"
            class={ "w-full mb-6 " (CARD_STYLE) }
        {
            h3 class=(CARD_TITLE_STYLE) { "Recent Transactions" }

            @if transactions.is_empty() {
                p class="text-gray-600 dark:text-gray-400"
                {
                    "No transactions yet. "
                    (link(endpoints::NEW_TRANSACTION_VIEW, "Add your first transaction"))
                    "."
                }
            } @else {
                ul class="divide-y divide-gray-200 dark:divide-gray-700"
                {
                    @for transaction in transactions {
                        (transaction_row(transaction))
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let (title, full_title) = format_title(&transaction.title);
    let amount_style = if transaction.amount.is_sign_negative() {
        AMOUNT_NEGATIVE_STYLE
    } else {
        AMOUNT_POSITIVE_STYLE
    };

    html! {
        li
            class="flex items-center justify-between py-3"
            data-id=(transaction.id)
            data-amount=(transaction.amount)
        {
            div
            {
                p class="font-medium" title=[full_title] { (title) }
                p class="text-sm text-gray-600 dark:text-gray-400"
                {
                    (transaction.category.label()) " • " (transaction.date)
                }
            }

            span class={ "font-semibold " (amount_style) }
            {
                (format_signed_currency(transaction.amount))
            }
        }
    }
}

fn format_title(title: &str) -> (String, Option<&str>) {
    let title_length = title.graphemes(true).count();

    if title_length <= MAX_TITLE_GRAPHEMES {
        (title.to_owned(), None)
    } else {
        let truncated: String = title
            .graphemes(true)
            .take(MAX_TITLE_GRAPHEMES - 3)
            .collect();
        let truncated = truncated + "...";
        (truncated, Some(title))
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::transaction::{DisplayOrder, TransactionStore};

    use super::{format_title, transaction_list_view};

    #[test]
    fn short_title_is_not_truncated() {
        assert_eq!(format_title("Coffee"), ("Coffee".to_owned(), None));
    }

    #[test]
    fn long_title_is_truncated_with_ellipses() {
        let title = "🍕".repeat(40);

        let (truncated, full_title) = format_title(&title);

        assert_eq!(truncated, format!("{}...", "🍕".repeat(29)));
        assert_eq!(full_title, Some(title.as_str()));
    }

    #[test]
    fn lists_transactions_in_given_order() {
        let store = TransactionStore::with_seed_data();
        let transactions = store.in_display_order(DisplayOrder::NewestFirst);

        let document = Html::parse_fragment(&transaction_list_view(&transactions).into_string());

        let rows: Vec<_> = document
            .select(&Selector::parse("li").unwrap())
            .map(|row| row.value().attr("data-amount").unwrap().to_owned())
            .collect();
        assert_eq!(rows, ["-12.99", "3000.00", "-54.75"]);

        let details = document
            .select(&Selector::parse("li p.text-sm").unwrap())
            .next()
            .unwrap()
            .text()
            .collect::<String>();
        assert_eq!(details.trim(), "Entertainment • 2025-03-24");
    }

    #[test]
    fn amounts_are_colored_by_sign() {
        let store = TransactionStore::with_seed_data();
        let transactions = store.in_display_order(DisplayOrder::Insertion);

        let document = Html::parse_fragment(&transaction_list_view(&transactions).into_string());

        let classes: Vec<_> = document
            .select(&Selector::parse("li span").unwrap())
            .map(|amount| amount.value().attr("class").unwrap().to_owned())
            .collect();
        assert!(classes[0].contains("text-red-600"));
        assert!(classes[1].contains("text-green-600"));
    }

    #[test]
    fn empty_list_links_to_form() {
        let document = Html::parse_fragment(&transaction_list_view(&[]).into_string());

        let link = document
            .select(&Selector::parse("a").unwrap())
            .next()
            .expect("want link to the new transaction page");
        assert_eq!(link.value().attr("href"), Some("/transactions/new"));
    }
}
