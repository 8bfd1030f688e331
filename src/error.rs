//! Per-file error taxonomy.
//!
//! Every variant is contained within the subplot of the file that produced it;
//! none of them aborts a run.

use thiserror::Error;

use crate::constants::ERROR_MESSAGE_MAX_CHARS;

#[derive(Debug, Error)]
pub enum SensorFileError {
    /// No records at all, or nothing that reads as delimited text.
    #[error("Empty file or unreadable")]
    Unreadable,

    #[error("need 6 columns, got {found}")]
    InsufficientColumns { found: usize },

    #[error("No valid 6-column numeric data rows")]
    NoValidRows,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl SensorFileError {
    /// True for failures outside the expected taxonomy (I/O, CSV framing, encoding).
    pub fn is_unexpected(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Csv(_))
    }

    /// Text drawn on the subplot in place of data.
    pub fn annotation(&self) -> String {
        if self.is_unexpected() {
            format!(
                "Error processing file:\n{}",
                truncate_message(&self.to_string(), ERROR_MESSAGE_MAX_CHARS)
            )
        } else {
            self.to_string()
        }
    }
}

/// Keeps at most `max_chars` characters of `message`.
pub fn truncate_message(message: &str, max_chars: usize) -> &str {
    match message.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &message[..byte_idx],
        None => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_columns_annotation() {
        let err = SensorFileError::InsufficientColumns { found: 4 };
        assert_eq!(err.annotation(), "need 6 columns, got 4");
        assert!(!err.is_unexpected());
    }

    #[test]
    fn test_unexpected_error_is_truncated() {
        let long = "x".repeat(300);
        let err = SensorFileError::Io(std::io::Error::new(std::io::ErrorKind::Other, long));
        let annotation = err.annotation();
        let body = annotation
            .strip_prefix("Error processing file:\n")
            .unwrap_or_default();
        assert_eq!(body.chars().count(), 100);
        assert!(err.is_unexpected());
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_message("ééé", 2), "éé");
        assert_eq!(truncate_message("short", 100), "short");
    }
}
