// ============================================================
// File: main.rs
// Author: Bob Jack
// Project: Dance Academy Index
// Date: Dec. 8, 2025
//
// Description:
//   Entry point for the dance academy program. Installs the log
//   subscriber, creates an empty session and hands off to the
//   command loop in `lib.rs`.
//
//   Responses go to standard output. Diagnostics go to standard
//   error, filtered by `RUST_LOG` (default: `warn`), so automated
//   black-box testing only ever sees command output.
// ============================================================
use academy_index::{repl_loop, Session};
use tracing_subscriber::EnvFilter;


/// Entry point for the dance academy index.
fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    println!("Dance Academy Index");

    // Each run starts from an empty academy
    let mut session = Session::new();

    // Hand off to the main command loop
    repl_loop(&mut session);
}
