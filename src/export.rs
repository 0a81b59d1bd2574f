//! Pure tabular exports for document generation. The document layout
//! itself lives behind whatever renderer consumes these rows.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::menu::Menu;
use crate::models::{BillItem, BillSummary, DailySales, Transaction};
use crate::money::{format_currency, round2, TAX_RATE};

/// One printable table line: item, quantity, unit price, line total.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ReportRow {
    pub item: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub line_total: f64,
}

/// Receipt body for a live bill or a finalized transaction.
pub fn receipt_rows(items: &[BillItem]) -> Vec<ReportRow> {
    items
        .iter()
        .map(|item| ReportRow {
            item: item.name.clone(),
            quantity: item.quantity,
            unit_price: item.price,
            line_total: round2(item.price * item.quantity as f64),
        })
        .collect()
}

/// Labeled receipt footer: item count, subtotal, tax, grand total.
pub fn bill_summary_rows(summary: &BillSummary) -> Vec<(String, String)> {
    vec![
        ("Items".to_string(), summary.item_count.to_string()),
        ("Subtotal".to_string(), format_currency(summary.subtotal)),
        (
            format!("Tax ({:.0}%)", TAX_RATE * 100.0),
            format_currency(summary.tax),
        ),
        (
            "Grand Total".to_string(),
            format_currency(summary.grand_total),
        ),
    ]
}

/// Item-wise sales for the daily report: menu order, sold items only.
pub fn item_sales_rows(sales: &DailySales, menu: &Menu) -> Vec<ReportRow> {
    menu.items()
        .iter()
        .filter_map(|entry| {
            let quantity = sales.item_quantities.get(&entry.id).copied().unwrap_or(0);
            (quantity > 0).then(|| ReportRow {
                item: entry.name.clone(),
                quantity,
                unit_price: entry.price,
                line_total: round2(entry.price * quantity as f64),
            })
        })
        .collect()
}

/// Daily report listing: one line per finalized bill.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TransactionRow {
    pub bill_number: i64,
    pub date: DateTime<Utc>,
    pub total: f64,
}

pub fn transaction_rows(transactions: &[Transaction]) -> Vec<TransactionRow> {
    transactions
        .iter()
        .map(|transaction| TransactionRow {
            bill_number: transaction.bill_number,
            date: transaction.date,
            total: transaction.total,
        })
        .collect()
}
