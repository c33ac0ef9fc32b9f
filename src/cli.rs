//! Command-line interface and interactive prompt session

use crate::cipher::{apply_cipher, derive_shift_sequence};
use crate::types::Direction;
use clap::Parser;
use std::io::{self, BufRead, Read, Write};

#[derive(Parser)]
#[command(name = "vigenere_cli")]
#[command(author = "vigenere_cli Contributors")]
#[command(version = "1.0.0")]
#[command(about = "Vigenère cipher encryption and decryption", long_about = "Vigenère cipher encryption and decryption\n\nRun without arguments for an interactive session, or with --tui for the\nterminal interface. Provide arguments to use CLI mode.")]
pub struct Cli {
    /// Launch TUI mode (terminal interface)
    #[arg(long)]
    pub tui: bool,

    /// Encrypt the text
    #[arg(long, conflicts_with = "decrypt")]
    pub encrypt: bool,

    /// Decrypt the text
    #[arg(long, conflicts_with = "encrypt")]
    pub decrypt: bool,

    /// Cipher key (letters A-Z only, case-insensitive)
    #[arg(long)]
    pub key: Option<String>,

    /// Text to transform; read from stdin when omitted
    #[arg(long)]
    pub text: Option<String>,
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let direction = if cli.encrypt {
        Direction::Encrypt
    } else if cli.decrypt {
        Direction::Decrypt
    } else {
        anyhow::bail!("Either --encrypt or --decrypt is required. Use --help for more information.");
    };

    let key = cli.key.as_ref().ok_or_else(|| {
        anyhow::anyhow!("--key is required. Use --help for more information.")
    })?;

    let shifts = derive_shift_sequence(key)?;

    let text = match cli.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            // Strip the trailing newline a terminal or pipe appends
            if buf.ends_with('\n') {
                buf.pop();
                if buf.ends_with('\r') {
                    buf.pop();
                }
            }
            buf
        }
    };

    println!("{}", apply_cipher(&text, &shifts, direction));
    Ok(())
}

/// Interactive session: prompt for direction, key, and text, re-prompting
/// on invalid input, then print the transformed text.
pub fn run_interactive() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Vigenère Cipher");

    let direction = loop {
        let answer = prompt(&mut lines, "Encrypt or decrypt? [e/d]: ")?;
        match answer.trim().to_ascii_lowercase().as_str() {
            "e" => break Direction::Encrypt,
            "d" => break Direction::Decrypt,
            _ => println!("Invalid choice, enter 'e' or 'd'."),
        }
    };

    let shifts = loop {
        let key = prompt(&mut lines, "Enter key (letters only): ")?;
        match derive_shift_sequence(key.trim()) {
            Ok(shifts) => break shifts,
            Err(e) => println!("Invalid key: {}", e),
        }
    };

    let prompt_text = match direction {
        Direction::Encrypt => "Enter plaintext: ",
        Direction::Decrypt => "Enter ciphertext: ",
    };
    let text = prompt(&mut lines, prompt_text)?;

    println!(
        "{}:\n{}",
        direction.output_label(),
        apply_cipher(&text, &shifts, direction)
    );
    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> anyhow::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    lines
        .next()
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("Unexpected end of input"))
}
