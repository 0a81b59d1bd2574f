use chrono::Utc;

use crate::error::BillingError;
use crate::menu::Menu;
use crate::models::{Bill, BillItem, BillSummary, Transaction};
use crate::money::{round2, TAX_RATE};

#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    pub tax: f64,
    pub grand_total: f64,
    pub item_count: i32,
}

/// Derive totals from the line items. This is the only place bill totals
/// come from; they are never hand-set.
pub fn compute_totals(items: &[BillItem]) -> Totals {
    let raw_subtotal: f64 = items
        .iter()
        .map(|item| item.price * item.quantity as f64)
        .sum();
    let item_count = items.iter().map(|item| item.quantity).sum();

    let subtotal = round2(raw_subtotal);
    let tax = round2(subtotal * TAX_RATE);
    let grand_total = round2(subtotal + tax);

    Totals {
        subtotal,
        tax,
        grand_total,
        item_count,
    }
}

impl Bill {
    pub fn new(bill_number: i64) -> Self {
        Bill {
            bill_number,
            items: Vec::new(),
            subtotal: 0.0,
            tax: 0.0,
            grand_total: 0.0,
            item_count: 0,
            created_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `quantity` of a menu item. If the item is already on the bill
    /// its quantity accumulates; otherwise a new line is appended at the
    /// end. Name and unit price come from the catalog.
    pub fn add_item(
        &mut self,
        menu: &Menu,
        item_id: &str,
        quantity: i32,
    ) -> Result<(), BillingError> {
        if quantity <= 0 {
            return Err(BillingError::InvalidQuantity(quantity));
        }

        let entry = menu
            .get(item_id)
            .ok_or_else(|| BillingError::UnknownItem(item_id.to_string()))?;

        match self.items.iter_mut().find(|item| item.id == item_id) {
            Some(existing) => existing.quantity += quantity,
            None => self.items.push(BillItem {
                id: entry.id.clone(),
                name: entry.name.clone(),
                price: entry.price,
                quantity,
            }),
        }

        self.recompute_totals();
        Ok(())
    }

    /// Remove the line at `index`; remaining lines keep their order.
    pub fn remove_item(&mut self, index: usize) -> Result<BillItem, BillingError> {
        if index >= self.items.len() {
            return Err(BillingError::IndexOutOfRange(index));
        }

        let removed = self.items.remove(index);
        self.recompute_totals();
        Ok(removed)
    }

    pub fn recompute_totals(&mut self) {
        let totals = compute_totals(&self.items);
        self.subtotal = totals.subtotal;
        self.tax = totals.tax;
        self.grand_total = totals.grand_total;
        self.item_count = totals.item_count;
    }

    /// Empty the bill and zero its totals. The bill number is untouched;
    /// it only advances on finalize.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute_totals();
        self.created_at = Utc::now();
    }

    /// Snapshot the bill into an immutable transaction, then clear it and
    /// advance the bill number for the next customer. Appending the
    /// snapshot anywhere is the ledger's job, not ours.
    pub fn finalize(&mut self, note: &str) -> Result<Transaction, BillingError> {
        if self.items.is_empty() {
            return Err(BillingError::EmptyBill);
        }

        self.recompute_totals();
        let transaction = Transaction {
            bill_number: self.bill_number,
            items: self.items.clone(),
            subtotal: self.subtotal,
            tax: self.tax,
            total: self.grand_total,
            item_count: self.item_count,
            note: note.trim().to_string(),
            date: Utc::now(),
        };

        self.bill_number += 1;
        self.clear();

        Ok(transaction)
    }

    pub fn summary(&self) -> BillSummary {
        let average = if self.item_count > 0 {
            self.grand_total / self.item_count as f64
        } else {
            0.0
        };

        BillSummary {
            item_count: self.item_count,
            subtotal: self.subtotal,
            tax: self.tax,
            grand_total: self.grand_total,
            average,
        }
    }
}
