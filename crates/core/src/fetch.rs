//! Reading extracted text from files and stdin.
//!
//! The extraction layer hands over plain text; these helpers load it from
//! the places the CLI accepts input from.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::{Result, SwiftreadError};

/// Reads extracted text from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(SwiftreadError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(SwiftreadError::from)
    }
}

/// Reads extracted text from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(SwiftreadError::from)?;

    Ok(buffer)
}
