//! Gym Ledger CLI
//!
//! Interactive console for tracking gym members, packages and payments.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --data-dir /srv/gym
//! cargo run -- --data-dir /srv/gym --log-level debug 2> gym.log
//! ```
//!
//! The program loads `packages.txt`, `members.txt` and `payments.txt` from the
//! data directory, runs the menu on stdin/stdout, and writes the files back
//! only when the operator chooses "Save & Exit".
//!
//! # Exit Codes
//!
//! - 0: Session ended (saved, discarded, or input closed)
//! - 1: Data files could not be loaded, or the console stream failed

use gym_ledger::cli;
use gym_ledger::core::SystemClock;
use gym_ledger::io::load_state;
use gym_ledger::logger;
use gym_ledger::tui::Console;
use std::process;

fn main() {
    let args = cli::parse_args();

    if let Err(e) = logger::init(&args.log_level) {
        eprintln!("Warning: {}", e);
    }

    let files = args.data_files();

    // A malformed data file is fatal; the operator must correct it first.
    let state = match load_state(&files) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "failed to load data");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let mut console = Console::new(
        state,
        files,
        Box::new(SystemClock),
        stdin.lock(),
        std::io::stdout(),
    );

    if let Err(e) = console.run() {
        tracing::error!(error = %e, "session failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
