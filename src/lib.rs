//! Expense tracker - command-line personal expense record keeping
//!
//! This library provides the core functionality for the `expense-tracker`
//! binary: a single-user store of expenses and monthly budgets, persisted
//! to one JSON file and rewritten atomically on every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, month keys)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (expense mutations, budgets)
//! - `reports`: Spending summaries
//! - `export`: CSV export
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
//! use expense_tracker::storage::Storage;
//!
//! let paths = TrackerPaths::resolve(None)?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(paths, &settings)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::TrackerError;
