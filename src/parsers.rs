// src/parsers.rs
use std::path::PathBuf;

/// Parse a `usize` with an inclusive lower bound and optional upper bound.
fn parse_bounded_number(s: &str, min: usize, max: Option<usize>) -> Result<usize, String> {
    let value: usize = s.trim().parse().map_err(|e| format!("invalid number '{s}': {e}"))?;
    if value < min {
        return Err(format!("must be >= {min}"));
    }
    if let Some(max) = max.filter(|&max| value > max) {
        return Err(format!("must be <= {max}"));
    }
    Ok(value)
}

/// Parse a directory depth (0 = traversal root only).
///
/// # Errors
/// Returns an error if the input string is not a non-negative number.
pub fn parse_depth(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 0, None)
}

/// Reject empty path arguments, which the OS would treat as the current directory on some platforms.
///
/// # Errors
/// Returns an error if the argument is empty.
pub fn parse_directory(s: &str) -> Result<PathBuf, String> {
    if s.is_empty() { Err("directory must not be empty".to_string()) } else { Ok(PathBuf::from(s)) }
}
