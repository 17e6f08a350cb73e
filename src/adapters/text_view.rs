//! Plain-text rendering of the dashboard view for the CLI.
//!
//! Renders:
//! - Stats cards (total profit, profit per day)
//! - Operations table for the active date
//! - Historical windows
//! - Earnings / selected company lists with page positions

use crate::domain::company::Company;
use crate::domain::operation::Operation;
use crate::domain::pager::PageInfo;
use crate::domain::session::DashboardView;

fn date_label(view: &DashboardView<'_>) -> String {
    view.date
        .map(|d| d.format("%a %b %d %Y").to_string())
        .unwrap_or_default()
}

/// Positive/negative marker for the profit column.
fn outcome(op: &Operation) -> &'static str {
    if op.is_win() { "+" } else { "-" }
}

pub fn format_operations_table(operations: &[&Operation], empty_text: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:<6}  {:>9}  {:>10}  {:>6}  {:>9}  {:>10}  {:<4}\n",
        "Date", "Symbol", "Buy Price", "Sell Price", "Shares", "Profit", "Return (%)", "Type"
    ));
    if operations.is_empty() {
        output.push_str(&format!("  {empty_text}\n"));
        return output;
    }
    for op in operations {
        output.push_str(&format!(
            "{:<10}  {:<6}  {:>9}  {:>10}  {:>6}  {:>7} $  {:>9}%  {:<4}  {}\n",
            op.date.format("%Y-%m-%d"),
            op.symbol,
            op.buy_price,
            op.sell_price,
            op.shares,
            op.profit,
            op.return_pct,
            op.sell_type,
            outcome(op)
        ));
    }
    output
}

pub fn format_company_list(title: &str, companies: &[&Company], page: PageInfo) -> String {
    let mut output = format!(
        "{} (page {}/{}, {} total)\n",
        title, page.index, page.count, page.total_items
    );
    for company in companies {
        output.push_str(&format!("  {company}\n"));
    }
    output
}

pub fn render(view: &DashboardView<'_>) -> String {
    let mut output = String::new();

    output.push_str("=== Trading Dashboard ===\n");
    output.push_str(&format!("Total Profit:  {} $\n", view.summary.total_profit));
    output.push_str(&format!("Profit / Day:  {:.2} $\n", view.summary.profit_per_day));

    output.push_str(&format!("\n=== Operations List: {} ===\n", date_label(view)));
    output.push_str(&format_operations_table(
        &view.active_operations,
        "No operations match the selected date.",
    ));

    output.push_str("\n=== Historical Operations ===\n");
    for window in &view.historical {
        output.push_str(&format!("-- Last {} Days --\n", window.days));
        output.push_str(&format_operations_table(&window.operations, "No operations"));
    }

    output.push_str(&format!("\n=== Earnings for {} ===\n", date_label(view)));
    output.push_str(&format_company_list("Earnings", view.earnings, view.earnings_page));
    output.push_str(&format_company_list(
        "Selected Companies",
        view.selected,
        view.selected_page,
    ));
    if view.selected_page.total_items == 0 {
        output.push_str("  No companies selected.\n");
    }
    if let Some(message) = &view.message {
        output.push_str(&format!("! {message}\n"));
    }
    output.push_str(&format!(
        "Submit: {}\n",
        if view.submit_enabled { "enabled" } else { "disabled" }
    ));

    let s = view.settings;
    output.push_str("\n=== Trading Settings ===\n");
    output.push_str(&format!("Stop Loss (%):             {}\n", s.stop_loss_pct));
    output.push_str(&format!("Take Profit (%):           {}\n", s.take_profit_pct));
    output.push_str(&format!("Next Investment per Trade: {}\n", s.investment_per_trade));
    output.push_str(&format!("Trades per Day:            {}\n", s.trades_per_day));

    output
}
