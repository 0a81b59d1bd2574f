use crate::error::BillingError;
use crate::menu::Menu;
use crate::models::{DailySales, Transaction};
use crate::money::round2;

impl DailySales {
    /// A rollup with every catalog item present at zero.
    pub fn zeroed(menu: &Menu) -> Self {
        DailySales {
            total_revenue: 0.0,
            item_quantities: menu.ids().map(|id| (id.to_string(), 0)).collect(),
        }
    }
}

/// Ordered, append-only list of finalized transactions plus the running
/// daily-sales rollup.
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    daily_sales: DailySales,
}

impl Ledger {
    pub fn new(menu: &Menu) -> Self {
        Ledger {
            transactions: Vec::new(),
            daily_sales: DailySales::zeroed(menu),
        }
    }

    /// Rebuild from persisted state. The stored rollup is trusted as-is;
    /// it is not re-derived from the transactions.
    pub fn from_parts(transactions: Vec<Transaction>, daily_sales: DailySales) -> Self {
        Ledger {
            transactions,
            daily_sales,
        }
    }

    /// Append the transaction and fold it into the rollup: revenue grows by
    /// the grand total, per-item counters by each line's quantity. Items
    /// the rollup has never seen (catalog grew after old data was saved)
    /// start from zero.
    pub fn append(&mut self, transaction: Transaction) {
        for item in &transaction.items {
            let count = self
                .daily_sales
                .item_quantities
                .entry(item.id.clone())
                .or_insert(0);
            *count += item.quantity;
        }
        self.daily_sales.total_revenue =
            round2(self.daily_sales.total_revenue + transaction.total);

        self.transactions.push(transaction);
    }

    pub fn get(&self, index: usize) -> Result<&Transaction, BillingError> {
        self.transactions
            .get(index)
            .ok_or(BillingError::IndexOutOfRange(index))
    }

    /// Drop every transaction and zero the rollup. The catalog itself is
    /// untouched.
    pub fn reset(&mut self, menu: &Menu) {
        self.transactions.clear();
        self.daily_sales = DailySales::zeroed(menu);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn daily_sales(&self) -> &DailySales {
        &self.daily_sales
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
