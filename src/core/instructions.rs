//! System instruction loading

use std::path::Path;
use tracing::{debug, warn};

use crate::core::errors::{Result, TranslationError};

/// Name of the instruction file expected in the run root
pub const INSTRUCTION_FILE: &str = "promt.md";

/// Immutable natural-language instructions steering every translation call
///
/// Loaded once per process before any translation work starts; a missing
/// file is a fatal precondition failure.
#[derive(Debug, Clone)]
pub struct InstructionSet {
    text: String,
}

impl InstructionSet {
    /// Load instructions from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TranslationError::MissingInstructions {
                path: path.display().to_string(),
            });
        }

        let text = std::fs::read_to_string(path).map_err(|e| TranslationError::FileError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        if text.trim().is_empty() {
            warn!("instruction file {} is empty", path.display());
        }
        debug!(
            "loaded {} bytes of instructions from {}",
            text.len(),
            path.display()
        );

        Ok(Self { text })
    }

    /// Wrap already-loaded instruction text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The instruction text
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_reads_full_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(INSTRUCTION_FILE);
        std::fs::write(&path, "Translate everything to French.\nKeep formatting.\n").unwrap();

        let instructions = InstructionSet::load(&path).unwrap();
        assert_eq!(
            instructions.as_str(),
            "Translate everything to French.\nKeep formatting.\n"
        );
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(INSTRUCTION_FILE);

        let err = InstructionSet::load(&path).unwrap_err();
        assert!(matches!(
            err,
            TranslationError::MissingInstructions { .. }
        ));
    }

    #[test]
    fn test_load_accepts_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(INSTRUCTION_FILE);
        std::fs::write(&path, "").unwrap();

        let instructions = InstructionSet::load(&path).unwrap();
        assert!(instructions.as_str().is_empty());
    }

    #[test]
    fn test_from_text() {
        let instructions = InstructionSet::from_text("Translate to German.");
        assert_eq!(instructions.as_str(), "Translate to German.");
    }
}
