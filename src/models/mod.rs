//! Core data models for the theater billing engine.
//!
//! This module contains the plays, performances, invoices, and the
//! statement data produced by the aggregator.

mod invoice;
mod play;
mod statement;

pub use invoice::{Invoice, Performance};
pub use play::{Genre, Play, PlayCatalog};
pub use statement::{StatementData, StatementLine};
