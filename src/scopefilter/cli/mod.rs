//! # CLI Behavior
//!
//! One possible UI client for scopefilter. The CLI is the only place that
//! knows about terminal I/O, exit codes and output formatting.
//!
//! Running `scopefilter` with no arguments defaults to `scopefilter list`.
//!
//! Every update command loads the definitions and the saved state, applies a
//! single change, and saves the state again only if the change was accepted.
//! A rejected value prints the error on stderr and exits non-zero; an option id
//! the filter never declared exits with status 2.
//!
//! `emit` prints two lines, `filters_json` then `state_json`, and nothing else
//! on stdout. Diagnostics (`--verbose`, `SCOPEFILTER_LOG`) go to stderr.
//!
//! ## Module Structure
//!
//! - `commands`: per-command handlers that call the API and print results
//! - `render`: output formatting (rows, colors, messages)
//! - `setup`: argument parsing via clap, logging setup

mod commands;
mod render;
pub mod setup;

pub use commands::run;
