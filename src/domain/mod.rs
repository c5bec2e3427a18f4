//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep report structs in one place so the text and JSON presenters render
//!   the same data.
//! - Avoid cyclic imports between services.
//!
//! ## Files
//! - `models.rs`: candidate files, per-file rules, canary state/health, report.
//! - `constants.rs`: default file names, paths and output banners.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect the `--json` output.

pub mod constants;
pub mod models;
