//! Conflict resolution for existing output files

use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

/// Outcome of a conflict check against an existing output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Replace the existing file with a fresh translation
    Overwrite,
    /// Leave this one file alone
    Skip,
    /// Leave this file alone and stop asking for the rest of the run
    SkipAlways,
}

impl Resolution {
    /// Map one line of console input to a resolution
    ///
    /// Anything other than the two skip choices falls through to overwrite.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "2" => Resolution::Skip,
            "3" => Resolution::SkipAlways,
            _ => Resolution::Overwrite,
        }
    }
}

/// Decides what happens when a translation target already exists
pub trait ConflictResolver: Send + Sync {
    /// Resolve a conflict for the given existing output file
    fn resolve(&self, existing_output: &Path) -> Resolution;
}

/// Interactive resolver that asks on stdout and reads the answer from stdin
#[derive(Debug, Default)]
pub struct ConsoleResolver;

impl ConflictResolver for ConsoleResolver {
    fn resolve(&self, existing_output: &Path) -> Resolution {
        println!(
            "File {} already exists. Do you want to (1) overwrite, (2) ignore, or (3) ignore always?",
            existing_output.display()
        );
        let _ = io::stdout().flush();

        let mut choice = String::new();
        if io::stdin().read_line(&mut choice).is_err() {
            // Unreadable input falls through to overwrite, like any other
            // unrecognized choice
            debug!("could not read conflict choice, overwriting");
            return Resolution::Overwrite;
        }

        Resolution::from_choice(&choice)
    }
}

/// Resolver that returns the same resolution for every conflict
#[derive(Debug, Clone, Copy)]
pub struct FixedResolver(pub Resolution);

impl ConflictResolver for FixedResolver {
    fn resolve(&self, _existing_output: &Path) -> Resolution {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_choice_mappings() {
        assert_eq!(Resolution::from_choice("1"), Resolution::Overwrite);
        assert_eq!(Resolution::from_choice("2"), Resolution::Skip);
        assert_eq!(Resolution::from_choice("3"), Resolution::SkipAlways);
    }

    #[test]
    fn test_choice_is_trimmed() {
        assert_eq!(Resolution::from_choice(" 3 \n"), Resolution::SkipAlways);
        assert_eq!(Resolution::from_choice("2\n"), Resolution::Skip);
    }

    #[test]
    fn test_unrecognized_choice_overwrites() {
        assert_eq!(Resolution::from_choice(""), Resolution::Overwrite);
        assert_eq!(Resolution::from_choice("yes"), Resolution::Overwrite);
        assert_eq!(Resolution::from_choice("22"), Resolution::Overwrite);
    }

    #[test]
    fn test_fixed_resolver_is_constant() {
        let resolver = FixedResolver(Resolution::Skip);
        let path = PathBuf::from("translated/chapter.md");
        assert_eq!(resolver.resolve(&path), Resolution::Skip);
        assert_eq!(resolver.resolve(&path), Resolution::Skip);
    }
}
