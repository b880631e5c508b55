//! # Scopefilter Architecture
//!
//! Scopefilter is the filter state engine of a search scope: the part that
//! knows which filters a scope offers, what the user has selected in each of
//! them, and how both are handed to the display client. It is a library first;
//! the `scopefilter` binary is one client of it.
//!
//! ## The Engine
//!
//! ```text
//!   Filter (describe) ──────────────► filters_json ─┐
//!        │                                          ├─► display client
//!        │ update_state / accessors                 │
//!        ▼                                          │
//!   FilterState (id -> JSON value) ─► state_json ───┘
//!        ▲                                          │
//!        └──────────── FilterState::from_json ◄─────┘  (next request)
//! ```
//!
//! - [`filters`]: six filter variants and the closed [`filters::Filter`] sum.
//!   Filters are stateless descriptions; every selection lives in a
//!   caller-owned [`state::FilterState`] threaded through each call.
//! - [`state`]: the untyped per-filter-id mapping and its wire codec.
//! - [`reply`]: the `filters_json` / `state_json` pair.
//!
//! Updates are all-or-nothing. Bad runtime input returns a
//! [`error::ValidationError`] and leaves the state untouched; an option id the
//! filter never declared returns a [`error::ContractViolation`], which callers
//! must treat as fatal. The engine is synchronous and does no I/O.
//!
//! ## Around the Engine
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns Result<CmdResult>     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Loads definitions + state, applies one change, saves     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StateStore trait: FileStore, InMemoryStore               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//!
//! ## Testing Strategy
//!
//! 1. **Engine** (`filters/`, `state.rs`, `reply.rs`): selection semantics of
//!    every variant, including the error classes and the round trip.
//! 2. **Commands**: business logic against `InMemoryStore`.
//! 3. **API**: dispatch only.
//! 4. **CLI**: argument parsing and rendering, plus end-to-end runs of the
//!    binary under `tests/`.

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod filters;
pub mod model;
pub mod reply;
pub mod state;
pub mod store;
