//! Card components for the dashboard summary totals.

use maud::{Markup, html};
use rust_decimal::Decimal;

use crate::{
    dashboard::aggregation::Summary,
    html::{
        AMOUNT_NEGATIVE_STYLE, AMOUNT_POSITIVE_STYLE, CARD_STYLE, CARD_TITLE_STYLE,
        format_currency,
    },
};

/// Renders the income, expenses and net balance cards.
pub(super) fn summary_cards_view(summary: &Summary) -> Markup {
    let net_balance_style =
        if summary.net_balance.is_sign_negative() && !summary.net_balance.is_zero() {
            AMOUNT_NEGATIVE_STYLE
        } else {
            AMOUNT_POSITIVE_STYLE
        };

    html! {
        section
            id="summary"
            class="grid grid-cols-1 sm:grid-cols-3 gap-4 w-full mb-6"
        {
            (summary_card("income", "Income", summary.income_total, AMOUNT_POSITIVE_STYLE))
            (summary_card("expenses", "Expenses", summary.expense_total, AMOUNT_NEGATIVE_STYLE))
            (summary_card("net-balance", "Net Balance", summary.net_balance, net_balance_style))
        }
    }
}

fn summary_card(id: &str, title: &str, amount: Decimal, amount_style: &str) -> Markup {
    html! {
        div
            id={ "summary-" (id) }
            class=(CARD_STYLE)
            data-amount=(amount)
        {
            h3 class=(CARD_TITLE_STYLE) { (title) }

            p class={ "text-2xl font-bold " (amount_style) }
            {
                (format_currency(amount))
            }
        }
    }
}
