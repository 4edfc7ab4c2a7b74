//! Report submission transport.

pub mod api;

pub use api::{ReportReceipt, SubmitError, submit_report};
