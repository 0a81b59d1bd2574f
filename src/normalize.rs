//! Reconciles persisted records of unknown vintage with the current shape.
//! Every malformed field has a defined fallback; loading history never
//! fails.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::menu::Menu;
use crate::models::{BillItem, DailySales, Transaction};
use crate::money::{round2, TAX_RATE};

// Numeric field lookup, tolerating the legacy camelCase spelling.
fn number(record: &Value, names: &[&str]) -> Option<f64> {
    names
        .iter()
        .find_map(|name| record.get(*name).and_then(Value::as_f64))
}

fn line_items(record: &Value) -> Vec<BillItem> {
    let Some(raw_items) = record.get("items").and_then(Value::as_array) else {
        return Vec::new();
    };

    raw_items
        .iter()
        .map(|raw| BillItem {
            id: raw
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            name: raw
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            price: raw.get("price").and_then(Value::as_f64).unwrap_or(0.0),
            quantity: raw.get("quantity").and_then(Value::as_f64).unwrap_or(0.0) as i32,
        })
        .collect()
}

/// Produce a canonical transaction from a stored record whose fields may be
/// missing, renamed or inconsistent.
///
/// The fallback chain is order-sensitive: stored values win over
/// recomputation, and a stored grand total takes precedence when inferring
/// a missing tax. Recomputation is the last resort only, so rounding
/// differences between schema versions never silently rewrite old totals.
pub fn sanitize_transaction(record: &Value) -> Transaction {
    let items = line_items(record);
    let computed_subtotal = round2(
        items
            .iter()
            .map(|item| item.price * item.quantity as f64)
            .sum(),
    );

    let subtotal = number(record, &["subtotal"]).unwrap_or(computed_subtotal);
    let stored_total = number(record, &["total"]);
    let tax = number(record, &["tax"]).unwrap_or_else(|| match stored_total {
        Some(total) => round2(total - subtotal),
        None => round2(subtotal * TAX_RATE),
    });
    let total = stored_total.unwrap_or_else(|| round2(subtotal + tax));

    let item_count = match number(record, &["item_count", "itemCount"]) {
        Some(count) => count as i32,
        None => items.iter().map(|item| item.quantity).sum(),
    };
    let bill_number = number(record, &["bill_number", "billNumber"])
        .map(|n| n as i64)
        .unwrap_or(0);
    let note = record
        .get("note")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    let date = record
        .get("date")
        .and_then(Value::as_str)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|parsed| parsed.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);

    Transaction {
        bill_number,
        items,
        subtotal,
        tax,
        total,
        item_count,
        note,
        date,
    }
}

/// Same treatment for the stored rollup: coerce the revenue to a number,
/// keep whatever per-item counters are usable, and seed catalog items the
/// stored map predates with zero.
pub fn sanitize_daily_sales(record: &Value, menu: &Menu) -> DailySales {
    let total_revenue = number(record, &["total_revenue", "totalRevenue"]).unwrap_or(0.0);

    let mut item_quantities: BTreeMap<String, i32> = BTreeMap::new();
    if let Some(map) = record
        .get("item_quantities")
        .or_else(|| record.get("itemQuantities"))
        .and_then(Value::as_object)
    {
        for (id, quantity) in map {
            if let Some(quantity) = quantity.as_f64() {
                item_quantities.insert(id.clone(), quantity as i32);
            }
        }
    }
    for id in menu.ids() {
        item_quantities.entry(id.to_string()).or_insert(0);
    }

    DailySales {
        total_revenue,
        item_quantities,
    }
}
