//! Gemini Batch Translator - Markdown directory translation library
//!
//! This library walks a directory of Markdown documents, translates each one
//! through the Gemini API, and writes the results into a mirrored output tree.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod batch;
pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::{GeminiTranslator, Translator},
    config::TranslatorConfig,
    errors::TranslationError,
    instructions::InstructionSet,
};

pub use crate::batch::{
    conflict::{ConflictResolver, ConsoleResolver, FixedResolver, Resolution},
    walker::{DirectoryTranslator, RunState, RunSummary},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
