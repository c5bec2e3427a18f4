//! Command handler layer.
//!
//! `report.rs` wires discovery, extraction, aggregation and the canary check
//! into one `Report` and hands it to the presenter. Business logic stays in
//! `services/*`.

pub mod report;

pub use report::handle_report;
