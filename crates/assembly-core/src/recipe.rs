//! Recipes - canned build sequences
//!
//! A [`Recipe`] is a fixed list of [`PartSlot`]s the [`Director`](crate::Director)
//! replays against a builder, in order.

use crate::builder::PartBuilder;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// One of the part operations a builder exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartSlot {
    /// `build_part_a`
    A,
    /// `build_part_b`
    B,
    /// `build_part_c`
    C,
}

impl PartSlot {
    /// All slots in declaration order
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// Invoke the matching build operation on `builder`
    #[inline]
    pub fn apply<B: PartBuilder + ?Sized>(self, builder: &mut B) {
        match self {
            Self::A => builder.build_part_a(),
            Self::B => builder.build_part_b(),
            Self::C => builder.build_part_c(),
        }
    }
}

impl Display for PartSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        };
        f.write_str(label)
    }
}

/// Canned construction sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recipe {
    /// Part A only
    MinimalViable,

    /// Parts A, B and C in that order
    FullFeatured,
}

impl Recipe {
    /// All recipes
    pub const ALL: [Self; 2] = [Self::MinimalViable, Self::FullFeatured];

    /// Recipe name (for logging/errors)
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MinimalViable => "minimal_viable",
            Self::FullFeatured => "full_featured",
        }
    }

    /// Build steps, in call order
    #[inline]
    #[must_use]
    pub fn steps(self) -> &'static [PartSlot] {
        match self {
            Self::MinimalViable => &[PartSlot::A],
            Self::FullFeatured => &[PartSlot::A, PartSlot::B, PartSlot::C],
        }
    }
}

impl Display for Recipe {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
