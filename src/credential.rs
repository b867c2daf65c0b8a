// Session credential loading.
// Reads the session token from a local file, prompting once and persisting it when missing.

use std::fmt;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::{AocError, Result};

/// Default location of the session token file, relative to the working directory.
pub const DEFAULT_SESSION_FILE: &str = "api_key.txt";

/// Opaque session token sent with every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Load the credential from `path`, or ask for it with `prompt` and save it there.
pub fn load_or_prompt<F>(path: &Path, prompt: F) -> Result<Credential>
where
    F: FnOnce() -> io::Result<String>,
{
    match fs::read_to_string(path) {
        Ok(contents) => {
            tracing::debug!(path = %path.display(), "Loaded session token");
            return Ok(Credential::new(contents.trim()));
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Session token file not readable");
        }
    }

    let token = prompt()?.trim().to_string();
    if token.is_empty() {
        return Err(AocError::EmptyCredential);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, &token)?;
    tracing::info!(path = %path.display(), "Saved session token");

    Ok(Credential::new(token))
}

/// Ask the operator for the session cookie on stderr and read one line from stdin.
pub fn prompt_stdin() -> io::Result<String> {
    let mut stderr = io::stderr();
    write!(
        stderr,
        "please insert the session cookie value (excluding 'session=' and ';'): "
    )?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
