//! Part builders
//!
//! [`PartBuilder`] is the capability set a [`Director`](crate::Director) drives.
//! [`ConcreteBuilder`] is the default implementation.

use crate::product::Product;
use crate::recipe::PartSlot;
use crate::vocabulary::PartVocabulary;
use std::fmt;

/// Incremental product construction
///
/// Every implementation owns exactly one product under construction.
/// `get_product` moves it out and starts a fresh one, so each retrieval only
/// observes parts added since the previous retrieval.
pub trait PartBuilder: Send + fmt::Debug {
    /// Append the first part
    fn build_part_a(&mut self);

    /// Append the second part
    fn build_part_b(&mut self);

    /// Append the third part
    fn build_part_c(&mut self);

    /// Hand off the product under construction and reset to an empty one
    ///
    /// The reset happens even if the returned product is dropped.
    fn get_product(&mut self) -> Product;
}

/// Default builder
///
/// Usage:
/// ```rust
/// use assembly_core::{ConcreteBuilder, PartBuilder};
///
/// let mut builder = ConcreteBuilder::new();
/// builder.build_part_a();
/// builder.build_part_c();
/// assert_eq!(builder.get_product().list_parts(), "Product parts: PartA1, PartC1");
/// assert!(builder.get_product().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConcreteBuilder {
    vocabulary: PartVocabulary,
    product: Product,
}

impl ConcreteBuilder {
    /// Create builder with the default vocabulary
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_vocabulary(PartVocabulary::default())
    }

    /// Create builder appending custom part names
    #[inline]
    #[must_use]
    pub fn with_vocabulary(vocabulary: PartVocabulary) -> Self {
        Self {
            vocabulary,
            product: Product::new(),
        }
    }

    /// Part names this builder appends
    #[inline]
    #[must_use]
    pub fn vocabulary(&self) -> &PartVocabulary {
        &self.vocabulary
    }

    /// Parts added since the last retrieval
    #[inline]
    #[must_use]
    pub fn parts_in_progress(&self) -> &[String] {
        self.product.parts()
    }

    fn append(&mut self, slot: PartSlot) {
        let part = self.vocabulary.name(slot);
        tracing::debug!(%slot, part, "appending part");
        self.product.add(part);
    }
}

impl PartBuilder for ConcreteBuilder {
    fn build_part_a(&mut self) {
        self.append(PartSlot::A);
    }

    fn build_part_b(&mut self) {
        self.append(PartSlot::B);
    }

    fn build_part_c(&mut self) {
        self.append(PartSlot::C);
    }

    fn get_product(&mut self) -> Product {
        let product = std::mem::take(&mut self.product);
        tracing::debug!(parts = product.len(), "product retrieved, builder reset");
        product
    }
}
