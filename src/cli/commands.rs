//! CLI command handlers

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use clap::ValueEnum;
use tracing::info;

use crate::batch::conflict::{ConflictResolver, ConsoleResolver, FixedResolver, Resolution};
use crate::batch::walker::DirectoryTranslator;
use crate::core::client::GeminiTranslator;
use crate::core::config::{TranslatorConfig, API_KEY_ENV};
use crate::core::errors::TranslationError;
use crate::core::instructions::{InstructionSet, INSTRUCTION_FILE};

/// Directory scanned for documents, resolved under the run root
pub const INPUT_DIR: &str = "original";

/// Directory receiving translated documents, resolved under the run root
pub const OUTPUT_DIR: &str = "translated";

/// How to handle output files that already exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConflictChoice {
    /// Ask on the console for each conflicting file
    Prompt,
    /// Overwrite every conflicting file
    Overwrite,
    /// Ignore every conflicting file
    Skip,
}

impl ConflictChoice {
    /// Build the resolver backing this choice
    fn resolver(self) -> Box<dyn ConflictResolver> {
        match self {
            ConflictChoice::Prompt => Box::new(ConsoleResolver),
            ConflictChoice::Overwrite => Box::new(FixedResolver(Resolution::Overwrite)),
            ConflictChoice::Skip => Box::new(FixedResolver(Resolution::SkipAlways)),
        }
    }
}

/// Handle a batch translation run rooted at `root`
pub async fn handle_run(
    root: &Path,
    api_key: Option<String>,
    on_conflict: ConflictChoice,
) -> anyhow::Result<()> {
    let start_time = Instant::now();

    println!(
        "Create in the root directory a folder named \"{}\" and put the files to be translated in it.",
        INPUT_DIR
    );
    println!(
        "The translated files will be saved in the \"{}\" folder.",
        OUTPUT_DIR
    );

    // The instruction file is a hard precondition; nothing runs without it
    let instructions = match InstructionSet::load(&root.join(INSTRUCTION_FILE)) {
        Ok(instructions) => instructions,
        Err(TranslationError::MissingInstructions { .. }) => {
            anyhow::bail!(
                "The \"{}\" file is missing. Please create it and add the system instructions. \
                 See the README for more information.",
                INSTRUCTION_FILE
            );
        }
        Err(e) => return Err(e.into()),
    };

    let key = match resolve_api_key(api_key) {
        Some(key) => key,
        None => prompt_api_key()?,
    };
    let config = TranslatorConfig::with_api_key(key);

    let translator = GeminiTranslator::new(config, instructions)?;
    let runner = DirectoryTranslator::new(Arc::new(translator), on_conflict.resolver());

    let input_dir = root.join(INPUT_DIR);
    let output_dir = root.join(OUTPUT_DIR);

    info!("Input: {}", input_dir.display());
    info!("Output: {}", output_dir.display());

    let summary = match runner.run(&input_dir, &output_dir).await {
        Ok(summary) => summary,
        Err(TranslationError::EmptyInputSet { .. }) => {
            anyhow::bail!(
                "The {} folder is empty. Please add some files to translate.",
                INPUT_DIR
            );
        }
        Err(e) => return Err(e.into()),
    };

    let duration = start_time.elapsed();
    info!(
        "Completed: {} translated, {} ignored, {} failed in {:?}",
        summary.translated, summary.ignored, summary.failed, duration
    );

    println!("\n✅ Translation completed!");
    println!("   Translated: {}", summary.translated);
    println!("   Ignored: {}", summary.ignored);
    println!("   Failed: {}", summary.failed);
    println!("   Time: {:?}", duration);

    Ok(())
}

/// Pick the API key from the command line flag or the environment
fn resolve_api_key(flag: Option<String>) -> Option<String> {
    flag.filter(|key| !key.trim().is_empty()).or_else(|| {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
    })
}

/// Ask for the API key on the console
fn prompt_api_key() -> io::Result<String> {
    print!("Enter your Google Gemini API key: ");
    io::stdout().flush()?;

    let mut key = String::new();
    io::stdin().read_line(&mut key)?;
    Ok(key.trim().to_string())
}
