//! vigenere_cli - Vigenère cipher tool
//!
//! Encrypts and decrypts text over the 26-letter Latin alphabet with a
//! repeating key, preserving case and passing non-letters through.

mod cipher;
mod cli;
mod types;

#[cfg(feature = "tui")]
mod tui;

use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    // Check for explicit --tui flag
    let run_tui = args.contains(&"--tui".to_string());

    // No arguments at all runs the interactive prompt session
    let run_interactive = !run_tui && args.len() == 1;

    #[cfg(feature = "tui")]
    if run_tui {
        if let Err(e) = tui::run_tui() {
            eprintln!("TUI Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    #[cfg(not(feature = "tui"))]
    if run_tui {
        eprintln!("TUI feature not enabled. Rebuild with --features tui");
        std::process::exit(1);
    }

    if run_interactive {
        if let Err(e) = cli::run_interactive() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    // Run CLI mode
    if let Err(e) = cli::run_cli() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
