// ABOUTME: Separator line configuration for multi-document output
// ABOUTME: Validates the format up front and substitutes the current filename

use super::error::{RenderError, Result};

/// The substitution slot a separator format must contain exactly once.
const SLOT: &str = "%v";

/// A validated separator line format.
///
/// The format must contain exactly one `%v` slot, which is replaced with the
/// current document's name. A trailing newline is appended when the format
/// does not already end with one, so the separator always occupies its own
/// line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator {
    format: String,
}

impl Separator {
    pub fn new(format: &str) -> Result<Self> {
        let slots = format.matches(SLOT).count();
        if slots != 1 {
            return Err(RenderError::Separator {
                format: format.to_string(),
                reason: format!("expected exactly one {SLOT} slot, found {slots}"),
            });
        }

        let format = if format.ends_with('\n') {
            format.to_string()
        } else {
            format!("{format}\n")
        };

        Ok(Self { format })
    }

    /// Produce the separator line for the given document name.
    pub fn line(&self, filename: &str) -> String {
        self.format.replacen(SLOT, filename, 1)
    }
}
