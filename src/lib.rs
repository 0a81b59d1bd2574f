mod bill;
mod error;
mod export;
mod ledger;
mod menu;
mod models;
mod money;
mod normalize;
mod session;
mod store;


pub use bill::{compute_totals, Totals};
pub use error::{BillingError, StoreError};
pub use export::{
    bill_summary_rows, item_sales_rows, receipt_rows, transaction_rows, ReportRow, TransactionRow,
};
pub use ledger::Ledger;
pub use menu::Menu;
pub use models::{Bill, BillItem, BillSummary, DailySales, MenuItem, Transaction};
pub use money::{format_currency, round2, CURRENCY_SYMBOL, TAX_RATE};
pub use normalize::{sanitize_daily_sales, sanitize_transaction};
pub use session::Session;
pub use store::{
    MemoryStore, SqliteStore, StorageAdapter, BILL_NUMBER_KEY, DAILY_SALES_KEY, TRANSACTIONS_KEY,
};
