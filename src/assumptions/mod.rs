//! Rate assumptions used by the premium calculations

pub mod loader;
mod tax;

pub use tax::{TaxRateTable, IL_TAX_RATE, TN_TAX_RATE};
pub use loader::load_tax_rates;
