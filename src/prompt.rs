//! Interactive zip code prompt

use crate::models::ZipCode;
use crate::{CurrentTempError, Result};
use std::io::{BufRead, Write};
use tracing::debug;

pub const HEADER: &str = "---Check the temperature of your area---";
pub const PROMPT: &str = "Please enter a zip code:";
pub const RETRY_PROMPT: &str = "Error..Please enter a valid zip code: ";

/// Ask for a zip code until a valid one is entered.
///
/// Each rejected line prints its diagnostic followed by the retry prompt.
/// There is no attempt limit; running out of input is an error. Bytes that
/// are not valid UTF-8 are decoded lossily and rejected like any other
/// non-digit.
pub fn prompt_zip_code<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<ZipCode> {
    writeln!(output, "{HEADER}")?;
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut attempts = 0_u32;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Err(CurrentTempError::Io {
                source: std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "input closed before a valid zip code was entered",
                ),
            });
        }
        attempts = attempts.saturating_add(1);

        let line = String::from_utf8_lossy(&buf);
        let candidate = line.trim_end_matches(['\r', '\n']);
        match ZipCode::parse(candidate) {
            Ok(zip_code) => {
                debug!(attempts, "Accepted zip code {}", zip_code);
                return Ok(zip_code);
            }
            Err(reason) => {
                debug!(attempts, ?reason, "Rejected zip code input");
                writeln!(output, "{reason}")?;
                write!(output, "{RETRY_PROMPT}")?;
                output.flush()?;
            }
        }
    }
}
