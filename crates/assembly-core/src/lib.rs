//! Part Assembly
//!
//! Builder / director construction of products made of ordered, named parts.
//!
//! # Core Concepts
//!
//! - [`Product`]: Ordered accumulator of parts with a summary rendering
//! - [`PartBuilder`]: Capability trait for appending parts and retrieving the product
//! - [`ConcreteBuilder`]: Default builder, owns exactly one product under construction
//! - [`Director`]: Drives canned [`Recipe`]s against an assigned builder
//! - [`PartVocabulary`]: Part names a builder appends, loadable from TOML
//!
//! # Example
//!
//! ```rust
//! use assembly_core::{shared, ConcreteBuilder, Director, PartBuilder};
//!
//! let builder = shared(ConcreteBuilder::new());
//! let mut director = Director::new();
//! director.set_builder(builder.clone());
//!
//! director.build_full_featured_product();
//! let product = builder.lock().get_product();
//!
//! assert_eq!(product.list_parts(), "Product parts: PartA1, PartB1, PartC1");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod builder;
mod director;
mod error;
mod product;
mod recipe;
mod vocabulary;

// Re-exports
pub use builder::{ConcreteBuilder, PartBuilder};
pub use director::{shared, Director, SharedBuilder};
pub use error::{AssemblyError, DirectorError, VocabularyError};
pub use product::Product;
pub use recipe::{PartSlot, Recipe};
pub use vocabulary::PartVocabulary;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building products
    pub use crate::{
        shared, ConcreteBuilder, Director, PartBuilder, PartSlot, PartVocabulary, Product, Recipe,
        SharedBuilder,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
