//! Audit logging for the expense tracker
//!
//! Records every create, update and delete of expenses and budgets with
//! before/after values in an append-only JSONL file.
//!
//! - `AuditEntry`: one logged change with its subject, the changed fields
//!   and optional before/after values.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{Action, AuditEntry, Subject};
pub use logger::AuditLogger;
