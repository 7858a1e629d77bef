//! Command-line front-end for the club agenda.
//!
//! # Responsibility
//! - One invocation is one editing session: load, apply one command, save.
//! - Print the resulting schedule so edits are visible immediately.

mod app;
mod cli;

fn main() {
    if let Err(e) = app::run() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
