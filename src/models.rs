use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BillItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Bill {
    pub bill_number: i64,
    pub items: Vec<BillItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub grand_total: f64,
    pub item_count: i32, // sum of line quantities, not distinct lines
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Transaction {
    pub bill_number: i64,
    pub items: Vec<BillItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub item_count: i32,
    pub note: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct DailySales {
    pub total_revenue: f64,
    pub item_quantities: BTreeMap<String, i32>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BillSummary {
    pub item_count: i32,
    pub subtotal: f64,
    pub tax: f64,
    pub grand_total: f64,
    pub average: f64, // grand total per item ordered, 0 for an empty bill
}
