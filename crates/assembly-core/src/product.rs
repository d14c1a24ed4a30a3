//! Product - ordered list of assembled parts
//!
//! Provides [`Product`], the value a builder hands back to its caller.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Ordered collection of parts
///
/// Insertion order is significant and duplicates are kept.
///
/// # Example
/// ```
/// use assembly_core::Product;
///
/// let mut product = Product::new();
/// product.add("CustomPart1");
/// product.add("CustomPart2");
/// assert_eq!(product.list_parts(), "Product parts: CustomPart1, CustomPart2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product {
    parts: Vec<String>,
}

impl Product {
    /// Prefix of every rendering
    pub const PREFIX: &'static str = "Product parts: ";

    /// Separator between rendered parts
    pub const SEPARATOR: &'static str = ", ";

    /// Create empty product
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Append a part
    #[inline]
    pub fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    /// Render the summary line
    ///
    /// An empty product renders as `"Product parts: "`. Nothing is emitted
    /// after the last part.
    #[must_use]
    pub fn list_parts(&self) -> String {
        format!("{}{}", Self::PREFIX, self.parts.join(Self::SEPARATOR))
    }

    /// Parts in insertion order
    #[inline]
    #[must_use]
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Number of parts
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check if no part was added
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(Self::PREFIX)?;
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(Self::SEPARATOR)?;
            }
            f.write_str(part)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for Product {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            parts: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for Product {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.parts.extend(iter.into_iter().map(Into::into));
    }
}
