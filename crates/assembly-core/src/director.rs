//! Director - drives canned recipes against a builder
//!
//! The director holds a shared handle to a builder but never retrieves the
//! product itself. Callers keep their own handle and call
//! [`PartBuilder::get_product`] when they want the result.

use crate::builder::PartBuilder;
use crate::error::DirectorError;
use crate::recipe::Recipe;
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared handle to any builder
pub type SharedBuilder = Arc<Mutex<dyn PartBuilder>>;

/// Wrap a builder so it can be shared with a [`Director`]
///
/// The returned handle coerces to [`SharedBuilder`] while the caller keeps
/// the concrete type.
#[inline]
#[must_use]
pub fn shared<B: PartBuilder + 'static>(builder: B) -> Arc<Mutex<B>> {
    Arc::new(Mutex::new(builder))
}

/// Runs [`Recipe`]s against an assigned builder
///
/// Usage:
/// ```rust
/// use assembly_core::{shared, ConcreteBuilder, Director, DirectorError, PartBuilder, Recipe};
///
/// let mut director = Director::new();
/// assert!(matches!(
///     director.try_build(Recipe::MinimalViable),
///     Err(DirectorError::BuilderNotSet { .. })
/// ));
///
/// let builder = shared(ConcreteBuilder::new());
/// director.set_builder(builder.clone());
/// director.build_minimal_viable_product();
/// assert_eq!(builder.lock().get_product().list_parts(), "Product parts: PartA1");
/// ```
#[derive(Debug, Default)]
pub struct Director {
    builder: Option<SharedBuilder>,
}

impl Director {
    /// Create director with no builder assigned
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { builder: None }
    }

    /// Create director driving `builder`
    #[inline]
    #[must_use]
    pub fn with_builder(builder: SharedBuilder) -> Self {
        Self {
            builder: Some(builder),
        }
    }

    /// Assign or replace the builder
    #[inline]
    pub fn set_builder(&mut self, builder: SharedBuilder) {
        self.builder = Some(builder);
    }

    /// Check if a builder is assigned
    #[inline]
    #[must_use]
    pub fn has_builder(&self) -> bool {
        self.builder.is_some()
    }

    /// Append part A only
    ///
    /// # Panics
    /// If no builder is assigned, or the builder is locked elsewhere
    #[inline]
    pub fn build_minimal_viable_product(&self) {
        self.build(Recipe::MinimalViable);
    }

    /// Append parts A, B and C in that order
    ///
    /// # Panics
    /// If no builder is assigned, or the builder is locked elsewhere
    #[inline]
    pub fn build_full_featured_product(&self) {
        self.build(Recipe::FullFeatured);
    }

    /// Replay `recipe` against the assigned builder
    ///
    /// Running a recipe without a usable builder is a programming error.
    /// Use [`Director::try_build`] to get it back as a value instead.
    ///
    /// # Panics
    /// If no builder is assigned, or the builder is locked elsewhere
    pub fn build(&self, recipe: Recipe) {
        if let Err(err) = self.try_build(recipe) {
            panic!("{err}");
        }
    }

    /// Replay `recipe` against the assigned builder, reporting misuse
    ///
    /// Never blocks: the builder lock is only tried. Nothing is appended when
    /// an error is returned.
    ///
    /// # Errors
    /// - [`DirectorError::BuilderNotSet`] if no builder is assigned
    /// - [`DirectorError::BuilderBusy`] if the builder is already locked,
    ///   including by the calling thread
    #[tracing::instrument(skip_all, fields(recipe = recipe.name()))]
    pub fn try_build(&self, recipe: Recipe) -> Result<(), DirectorError> {
        let Some(builder) = self.builder.as_ref() else {
            tracing::warn!("recipe invoked without a builder");
            return Err(DirectorError::BuilderNotSet {
                recipe: recipe.name(),
            });
        };

        let Some(mut guard) = builder.try_lock() else {
            tracing::warn!("builder is locked elsewhere");
            return Err(DirectorError::BuilderBusy {
                recipe: recipe.name(),
            });
        };

        tracing::info!(steps = recipe.steps().len(), "running recipe");
        for slot in recipe.steps() {
            slot.apply(&mut *guard);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConcreteBuilder;

    fn director_with_builder() -> (Arc<Mutex<ConcreteBuilder>>, Director) {
        let builder = shared(ConcreteBuilder::new());
        let director = Director::with_builder(builder.clone());
        (builder, director)
    }

    #[test]
    fn new_director_has_no_builder() {
        let director = Director::new();
        assert!(!director.has_builder());
    }

    #[test]
    #[should_panic(expected = "invoked before a builder was assigned")]
    fn full_featured_without_builder_panics() {
        Director::new().build_full_featured_product();
    }

    #[test]
    #[should_panic(expected = "recipe 'minimal_viable'")]
    fn minimal_viable_without_builder_panics() {
        Director::default().build_minimal_viable_product();
    }

    #[test]
    fn try_build_reports_missing_builder() {
        let director = Director::default();

        for recipe in Recipe::ALL {
            assert_eq!(
                director.try_build(recipe),
                Err(DirectorError::BuilderNotSet {
                    recipe: recipe.name()
                })
            );
        }
    }

    #[test]
    fn try_build_does_not_block_on_held_lock() {
        let (builder, director) = director_with_builder();
        let held = builder.lock();

        assert_eq!(
            director.try_build(Recipe::FullFeatured),
            Err(DirectorError::BuilderBusy {
                recipe: "full_featured"
            })
        );
        assert!(held.parts_in_progress().is_empty());
    }

    #[test]
    #[should_panic(expected = "is locked elsewhere")]
    fn recipe_panics_instead_of_deadlocking() {
        let (builder, director) = director_with_builder();
        let _held = builder.lock();

        director.build_minimal_viable_product();
    }

    #[test]
    fn minimal_viable_appends_part_a() {
        let (builder, director) = director_with_builder();
        director.build_minimal_viable_product();

        assert_eq!(builder.lock().parts_in_progress(), ["PartA1"]);
    }

    #[test]
    fn full_featured_appends_a_b_c() {
        let (builder, director) = director_with_builder();
        director.build_full_featured_product();

        assert_eq!(
            builder.lock().parts_in_progress(),
            ["PartA1", "PartB1", "PartC1"]
        );
    }

    #[test]
    fn director_never_retrieves_product() {
        let (builder, director) = director_with_builder();
        director.build_minimal_viable_product();
        director.build_minimal_viable_product();

        // both runs accumulate into the same product
        assert_eq!(builder.lock().get_product().parts(), ["PartA1", "PartA1"]);
    }

    #[test]
    fn set_builder_replaces_previous() {
        let (first, mut director) = director_with_builder();
        let second = shared(ConcreteBuilder::new());
        director.set_builder(second.clone());

        director.build_minimal_viable_product();

        assert!(first.lock().parts_in_progress().is_empty());
        assert_eq!(second.lock().parts_in_progress(), ["PartA1"]);
    }
}
