//! # scopefilter
//!
//! Thin binary wrapper: all behavior lives in the library (see the crate-level
//! docs of `scopefilter`) and in the CLI client under `cli/`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        let code = if e.is_fatal() { 2 } else { 1 };
        std::process::exit(code);
    }
}
