//! Part vocabulary
//!
//! Names a [`ConcreteBuilder`](crate::ConcreteBuilder) appends for each
//! [`PartSlot`]. Defaults to `PartA1`, `PartB1`, `PartC1`.

use crate::error::VocabularyError;
use crate::recipe::PartSlot;
use serde::{Deserialize, Serialize};

/// Part names per slot
///
/// # Example
/// ```
/// use assembly_core::{PartSlot, PartVocabulary};
///
/// let vocab = PartVocabulary::from_toml_str(r#"part_b = "Turbo""#).unwrap();
/// assert_eq!(vocab.name(PartSlot::A), "PartA1");
/// assert_eq!(vocab.name(PartSlot::B), "Turbo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartVocabulary {
    /// Appended by `build_part_a`
    pub part_a: String,
    /// Appended by `build_part_b`
    pub part_b: String,
    /// Appended by `build_part_c`
    pub part_c: String,
}

impl Default for PartVocabulary {
    fn default() -> Self {
        Self {
            part_a: "PartA1".to_string(),
            part_b: "PartB1".to_string(),
            part_c: "PartC1".to_string(),
        }
    }
}

impl PartVocabulary {
    /// Parse and validate a TOML document
    ///
    /// Missing keys keep their default name.
    ///
    /// # Errors
    /// - [`VocabularyError::Parse`] on malformed TOML or unknown keys
    /// - [`VocabularyError::EmptyPartName`] if a name is blank
    pub fn from_toml_str(source: &str) -> Result<Self, VocabularyError> {
        let vocabulary: Self = toml::from_str(source)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Reject blank names
    ///
    /// # Errors
    /// [`VocabularyError::EmptyPartName`] for the first blank slot
    pub fn validate(&self) -> Result<(), VocabularyError> {
        match PartSlot::ALL
            .into_iter()
            .find(|slot| self.name(*slot).trim().is_empty())
        {
            Some(slot) => Err(VocabularyError::EmptyPartName { slot }),
            None => Ok(()),
        }
    }

    /// Name appended for `slot`
    #[inline]
    #[must_use]
    pub fn name(&self, slot: PartSlot) -> &str {
        match slot {
            PartSlot::A => &self.part_a,
            PartSlot::B => &self.part_b,
            PartSlot::C => &self.part_c,
        }
    }
}
