//! Theater Billing Engine
//!
//! This crate computes billing statements for theater invoices: an amount in
//! cents and a number of loyalty credits per performance, priced by the genre
//! of the play, plus the invoice totals.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod render;
