//! Employee directory service.
//!
//! This crate lists, creates, edits, views and deletes employee records held
//! by a remote REST data source, and derives the figures presentation code
//! shows alongside them: age, years of service, the active employment record,
//! update recency and hiring aggregates. Employee form input is validated
//! field by field before anything is sent to the data source.

#![warn(missing_docs)]

pub mod api;
pub mod client;
pub mod config;
pub mod context;
pub mod derivation;
pub mod error;
pub mod models;
pub mod validation;
