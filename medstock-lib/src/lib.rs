//! Core domain logic for Medstock.
//!
//! Everything that doesn't touch a window lives here: the entry model and its
//! validation, the in-memory [`Ledger`] the table view projects from, the
//! [`RowStore`] client for the remote spreadsheet API, the PDF report
//! exporter, and configuration.

use thiserror::Error;

pub mod config;
pub mod entry;
pub mod export;
pub mod fs;
pub mod ledger;
pub mod store;

pub use entry::{Entry, EntryDraft, EntryId};
pub use ledger::Ledger;
pub use store::RowStore;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] entry::ValidationError),
    #[error(transparent)]
    Store(#[from] store::Error),
    #[error(transparent)]
    Export(#[from] export::Error),
}
