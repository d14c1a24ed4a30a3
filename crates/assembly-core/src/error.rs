//! Error types for part assembly
//!
//! Building parts never fails. Errors only come from:
//! - Running a director recipe without a usable builder
//! - Loading a part vocabulary

use crate::recipe::PartSlot;

/// Main assembly error type
#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    /// Director misuse
    #[error("director error: {0}")]
    Director(#[from] DirectorError),

    /// Vocabulary could not be loaded
    #[error("vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),
}

impl AssemblyError {
    /// Check if error is caused by incorrect API usage rather than bad input
    #[inline]
    #[must_use]
    pub fn is_programmer_error(&self) -> bool {
        matches!(self, Self::Director(_))
    }
}

/// Director errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectorError {
    /// Recipe invoked with no builder assigned
    #[error("recipe '{recipe}' invoked before a builder was assigned")]
    BuilderNotSet {
        /// Name of the recipe that was requested
        recipe: &'static str,
    },

    /// Recipe invoked while the builder lock is held
    #[error("recipe '{recipe}' invoked while the builder is locked elsewhere")]
    BuilderBusy {
        /// Name of the recipe that was requested
        recipe: &'static str,
    },
}

/// Vocabulary loading errors
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    /// Document is not valid TOML or has unknown keys
    #[error("invalid vocabulary document: {0}")]
    Parse(#[from] toml::de::Error),

    /// A slot was given an empty name
    #[error("part name for slot {slot} cannot be empty")]
    EmptyPartName {
        /// Offending slot
        slot: PartSlot,
    },
}
