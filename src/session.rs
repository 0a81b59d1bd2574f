use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{BillingError, StoreError};
use crate::ledger::Ledger;
use crate::menu::Menu;
use crate::models::{Bill, BillSummary, DailySales, Transaction};
use crate::normalize::{sanitize_daily_sales, sanitize_transaction};
use crate::store::{StorageAdapter, BILL_NUMBER_KEY, DAILY_SALES_KEY, TRANSACTIONS_KEY};

/// One operator, one live bill, one ledger. All mutation flows through
/// this handle; the storage adapter is only touched at load, after a
/// successful finalize and after a reset.
pub struct Session<S: StorageAdapter> {
    menu: Menu,
    bill: Bill,
    ledger: Ledger,
    store: S,
}

impl<S: StorageAdapter> Session<S> {
    /// Start a session, restoring whatever the store holds. Missing or
    /// corrupt keys fall back to an empty ledger, a zeroed rollup and bill
    /// number 1; a failing store only costs durability, never the session.
    pub fn new(menu: Menu, store: S) -> Self {
        let transactions = match store.get(TRANSACTIONS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Array(records)) => {
                    records.iter().map(sanitize_transaction).collect()
                }
                Ok(_) | Err(_) => {
                    warn!("stored transactions are not a JSON array, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "could not read stored transactions");
                Vec::new()
            }
        };

        let daily_sales = match store.get(DAILY_SALES_KEY) {
            Ok(Some(raw)) => {
                let record = serde_json::from_str::<Value>(&raw).unwrap_or(Value::Null);
                sanitize_daily_sales(&record, &menu)
            }
            Ok(None) => DailySales::zeroed(&menu),
            Err(err) => {
                warn!(error = %err, "could not read stored daily sales");
                DailySales::zeroed(&menu)
            }
        };

        let bill_number = match store.get(BILL_NUMBER_KEY) {
            Ok(Some(raw)) => raw.trim().parse::<i64>().unwrap_or(1).max(1),
            Ok(None) => 1,
            Err(err) => {
                warn!(error = %err, "could not read stored bill number");
                1
            }
        };

        Session {
            bill: Bill::new(bill_number),
            ledger: Ledger::from_parts(transactions, daily_sales),
            menu,
            store,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn bill(&self) -> &Bill {
        &self.bill
    }

    pub fn bill_summary(&self) -> BillSummary {
        self.bill.summary()
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn transaction(&self, index: usize) -> Result<&Transaction, BillingError> {
        self.ledger.get(index)
    }

    pub fn daily_sales(&self) -> &DailySales {
        self.ledger.daily_sales()
    }

    pub fn add_item(&mut self, item_id: &str, quantity: i32) -> Result<(), BillingError> {
        self.bill.add_item(&self.menu, item_id, quantity)
    }

    pub fn remove_item(&mut self, index: usize) -> Result<(), BillingError> {
        self.bill.remove_item(index).map(|_| ())
    }

    /// Clear the live bill. A bill with items on it requires an explicit
    /// confirmation from the caller; an empty bill clears straight away.
    /// Returns whether anything was cleared.
    pub fn clear_bill(&mut self, confirmed: bool) -> bool {
        if !self.bill.is_empty() && !confirmed {
            return false;
        }
        self.bill.clear();
        true
    }

    /// Finalize the live bill: snapshot it, append the snapshot to the
    /// ledger, fold the rollup, then persist. The ledger append and the
    /// rollup fold are one uninterrupted in-memory unit; the write
    /// afterwards is best effort.
    pub fn finalize(&mut self, note: &str) -> Result<Transaction, BillingError> {
        let transaction = self.bill.finalize(note)?;
        self.ledger.append(transaction.clone());
        debug!(
            bill_number = transaction.bill_number,
            total = transaction.total,
            "bill finalized"
        );
        self.persist();
        Ok(transaction)
    }

    /// Wipe everything: ledger, rollup, live bill and the stored keys.
    /// Returns false when there is nothing to reset or the caller did not
    /// confirm.
    pub fn reset_all(&mut self, confirmed: bool) -> bool {
        if self.ledger.is_empty() && self.bill.is_empty() {
            return false;
        }
        if !confirmed {
            return false;
        }

        self.ledger.reset(&self.menu);
        self.bill = Bill::new(1);
        self.clear_stored();
        self.persist();
        debug!("all sales data reset");
        true
    }

    // Best-effort write of the full state. Failures are logged and the
    // session keeps running on its in-memory copy.
    fn persist(&self) {
        if let Err(err) = self.try_persist() {
            warn!(error = %err, "could not persist sales data, continuing in memory");
        }
    }

    fn try_persist(&self) -> Result<(), StoreError> {
        let transactions = serde_json::to_string(self.ledger.transactions())?;
        let daily_sales = serde_json::to_string(self.ledger.daily_sales())?;

        self.store.set(TRANSACTIONS_KEY, &transactions)?;
        self.store.set(DAILY_SALES_KEY, &daily_sales)?;
        self.store
            .set(BILL_NUMBER_KEY, &self.bill.bill_number.to_string())?;
        Ok(())
    }

    fn clear_stored(&self) {
        for key in [TRANSACTIONS_KEY, DAILY_SALES_KEY, BILL_NUMBER_KEY] {
            if let Err(err) = self.store.remove(key) {
                warn!(error = %err, key, "could not clear stored key");
            }
        }
    }
}
