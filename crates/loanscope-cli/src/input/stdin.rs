use serde_json::Value;
use std::io::{self, Read};

/// Read a piped JSON request (offers, comparison input) from stdin.
/// Returns None on a TTY so flag-based invocation takes over.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(raw)?))
}
