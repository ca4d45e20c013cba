//! Recursive directory translation with a mirrored output tree

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::batch::conflict::{ConflictResolver, Resolution};
use crate::core::client::Translator;
use crate::core::errors::{Result, TranslationError};

/// File extension handled by a batch run, compared case-insensitively
pub const DOCUMENT_EXTENSION: &str = "md";

/// Mutable progress of one batch run
///
/// Carried as a plain value through the run loop; nothing global.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    /// Documents discovered under the input directory
    pub files_total: usize,
    /// Documents counted as done (translated or permanently ignored)
    pub files_completed: usize,
    /// Set once the operator chooses to ignore every later conflict
    pub ignore_always: bool,
}

impl RunState {
    /// Create state for a run over `files_total` documents
    pub fn new(files_total: usize) -> Self {
        Self {
            files_total,
            ..Self::default()
        }
    }

    /// Completed share of the run as a percentage
    pub fn progress_percent(&self) -> f64 {
        if self.files_total == 0 {
            return 100.0;
        }
        self.files_completed as f64 / self.files_total as f64 * 100.0
    }
}

/// Final counters reported after a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Documents discovered under the input directory
    pub total: usize,
    /// Documents translated and written
    pub translated: usize,
    /// Documents left untouched because of a conflict choice
    pub ignored: usize,
    /// Documents that failed to translate
    pub failed: usize,
}

/// Walks an input tree and translates every document into a mirrored output tree
///
/// Files are processed one at a time in walk order. A failure on one file is
/// reported and the run moves on to the next.
pub struct DirectoryTranslator {
    translator: Arc<dyn Translator>,
    resolver: Box<dyn ConflictResolver>,
}

impl DirectoryTranslator {
    /// Create a new directory translator
    pub fn new(translator: Arc<dyn Translator>, resolver: Box<dyn ConflictResolver>) -> Self {
        Self {
            translator,
            resolver,
        }
    }

    /// Find documents recursively, in a deterministic per-directory order
    pub fn find_documents(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(TranslationError::FileError {
                path: dir.display().to_string(),
                message: "Not a directory".to_string(),
            });
        }

        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && self.is_document(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    /// Check if a file is a translatable document
    fn is_document(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase() == DOCUMENT_EXTENSION)
            .unwrap_or(false)
    }

    /// Translate every document under `input_dir` into `output_dir`
    ///
    /// The output tree mirrors the input tree. Existing output files go
    /// through the conflict resolver before being overwritten.
    pub async fn run(&self, input_dir: &Path, output_dir: &Path) -> Result<RunSummary> {
        // A missing input root reads the same as an empty one
        if !input_dir.is_dir() {
            return Err(TranslationError::EmptyInputSet {
                path: input_dir.display().to_string(),
            });
        }

        let files = self.find_documents(input_dir)?;
        if files.is_empty() {
            return Err(TranslationError::EmptyInputSet {
                path: input_dir.display().to_string(),
            });
        }

        info!(
            "Translating {} documents: {} -> {}",
            files.len(),
            input_dir.display(),
            output_dir.display()
        );

        let mut state = RunState::new(files.len());
        let mut summary = RunSummary {
            total: files.len(),
            ..RunSummary::default()
        };

        // Paths shown to the operator are relative to the parent of the
        // input directory, e.g. original/guide/intro.md
        let display_base = input_dir.parent().map(Path::to_path_buf);

        for input_path in files {
            let relative = match input_path.strip_prefix(input_dir) {
                Ok(relative) => relative,
                Err(_) => {
                    warn!("Skipping file outside the input tree: {}", input_path.display());
                    continue;
                }
            };
            let output_path = output_dir.join(relative);
            let display = self.display_path(&input_path, display_base.as_deref());

            // Mirror the source layout before any conflict decision
            if let Err(e) = self.ensure_parent(&output_path).await {
                summary.failed += 1;
                eprintln!("❌ Failed to translate {}: {}", display, e);
                continue;
            }

            if output_path.exists() {
                if state.ignore_always {
                    state.files_completed += 1;
                    summary.ignored += 1;
                    println!("Ignoring: {}", display);
                    continue;
                }

                match self.resolver.resolve(&output_path) {
                    Resolution::Skip => {
                        // A one-off ignore does not advance the completed count
                        summary.ignored += 1;
                        println!("Ignoring: {}", display);
                        continue;
                    }
                    Resolution::SkipAlways => {
                        state.ignore_always = true;
                        state.files_completed += 1;
                        summary.ignored += 1;
                        println!("Ignoring: {}", display);
                        continue;
                    }
                    Resolution::Overwrite => {}
                }
            }

            // Progress advances even if the translation then fails
            state.files_completed += 1;
            println!("{:.2}% Translating: {}", state.progress_percent(), display);

            match self.translate_file(&input_path, &output_path).await {
                Ok(()) => summary.translated += 1,
                Err(e) => {
                    summary.failed += 1;
                    eprintln!("❌ Failed to translate {}: {}", display, e);
                }
            }
        }

        info!(
            "Run finished: {} translated, {} ignored, {} failed",
            summary.translated, summary.ignored, summary.failed
        );
        Ok(summary)
    }

    /// Translate a single document
    async fn translate_file(&self, input: &Path, output: &Path) -> Result<()> {
        debug!("Translating: {}", input.display());

        let content = tokio::fs::read_to_string(input)
            .await
            .map_err(|e| TranslationError::FileError {
                path: input.display().to_string(),
                message: e.to_string(),
            })?;

        let translated = self.translator.translate(&content).await?;

        tokio::fs::write(output, translated)
            .await
            .map_err(|e| TranslationError::FileError {
                path: output.display().to_string(),
                message: e.to_string(),
            })?;

        info!("Translated: {} -> {}", input.display(), output.display());
        Ok(())
    }

    /// Ensure the parent directory of an output file exists
    async fn ensure_parent(&self, output: &Path) -> Result<()> {
        if let Some(parent) = output.parent() {
            if !parent.exists() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| TranslationError::FileError {
                        path: parent.display().to_string(),
                        message: e.to_string(),
                    })?;
            }
        }
        Ok(())
    }

    /// Path as shown in console output
    fn display_path(&self, input: &Path, base: Option<&Path>) -> String {
        match base.and_then(|b| input.strip_prefix(b).ok()) {
            Some(relative) => relative.display().to_string(),
            None => input.display().to_string(),
        }
    }
}
