//! billed-core: shared infrastructure for the Billed expense-report client.
pub mod config;
pub mod observability;
