//! Bank Ledger CLI
//!
//! Interactive administration console for an in-memory account ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --first-account-number 5000 --no-bootstrap
//! cargo run -- --list-format csv --log-level info
//! BANK_ADMIN_PASSWORD=s3cret cargo run
//! ```
//!
//! The program seeds the ledger (by default with the demonstration account
//! 1000), then runs the login menu on stdin/stdout until the operator exits
//! or input ends. Nothing is persisted.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (ledger could not be seeded, terminal I/O failed)

use bank_ledger::cli;
use bank_ledger::logging;
use bank_ledger::{Ledger, Session};
use std::io;
use std::process;
use tracing::error;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    logging::init(&args.log_level);

    let mut ledger = match Ledger::from_config(&args.to_ledger_config()) {
        Ok(ledger) => ledger,
        Err(e) => {
            error!(error = %e, "failed to seed ledger");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        &mut ledger,
        stdin.lock(),
        stdout.lock(),
        args.to_session_settings(),
    );

    if let Err(e) = session.run() {
        error!(error = %e, "session ended with an I/O error");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
