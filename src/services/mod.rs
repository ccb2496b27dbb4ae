//! Business logic services
//!
//! Fetching, reconciliation and export. None of these touch the terminal.

pub mod export;
pub mod fetcher;
pub mod reconciler;

pub use export::ExportFormat;
pub use fetcher::Session;
