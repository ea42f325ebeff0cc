//! User-facing notices and confirmations
//!
//! Transient notices and blocking confirmation prompts, printed to the
//! terminal.

use std::io::{self, BufRead, Write};

/// Informational notice (not an error)
pub fn info(message: &str) {
    println!("[info] {}", message);
}

/// Success notice
pub fn success(message: &str) {
    println!("[ok] {}", message);
}

/// Warning notice
pub fn warning(message: &str) {
    eprintln!("[warn] {}", message);
}

/// Error notice
pub fn error(message: &str) {
    eprintln!("[error] {}", message);
}

/// Blocking yes/no confirmation before a destructive action
///
/// Anything other than `y`/`yes` counts as a refusal.
pub fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }

    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
