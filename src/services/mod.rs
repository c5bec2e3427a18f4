//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `locator.rs`: CLAUDE.md discovery (global file + cwd ancestors).
//! - `rules.rs`: canonical rule table and line extraction.
//! - `aggregate.rs`: cross-file concatenation and order-preserving dedup.
//! - `canary.rs`: canary watchdog artifact check and health classification.
//! - `config.rs`: optional `~/.config/recite/config.toml`.
//! - `logging.rs`: tracing subscriber setup.
//! - `output.rs`: text/JSON presenters.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Filesystem failures degrade output; they never abort the run.

pub mod aggregate;
pub mod canary;
pub mod config;
pub mod locator;
pub mod logging;
pub mod output;
pub mod rules;
