//! Policy data structures, input loading and data-entry correction

mod data;
pub mod loader;
pub mod normalizer;

pub use data::{PolicyRecord, RawPolicyRecord};
pub use loader::{load_policies, load_policies_from_reader};
pub use normalizer::normalize;
