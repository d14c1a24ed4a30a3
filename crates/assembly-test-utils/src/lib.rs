//! Testing utilities for the assembly workspace
//!
//! Shared fixtures, strategies, and rendering helpers.

#![allow(missing_docs)]

use assembly_core::{shared, ConcreteBuilder, Director, PartSlot, PartVocabulary, Product};
use parking_lot::Mutex;
use proptest::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Builder handle plus a director already pointed at it
pub struct Fixture {
    pub builder: Arc<Mutex<ConcreteBuilder>>,
    pub director: Director,
}

pub fn setup_fixture() -> Fixture {
    init_tracing();
    let builder = shared(ConcreteBuilder::new());
    let mut director = Director::new();
    director.set_builder(builder.clone());
    Fixture { builder, director }
}

/// Install a test-writer subscriber; repeated calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Expected `list_parts()` output for `slots` under the default vocabulary
pub fn expected_listing(slots: &[PartSlot]) -> String {
    let vocab = PartVocabulary::default();
    let names: Vec<&str> = slots.iter().map(|slot| vocab.name(*slot)).collect();
    format!("{}{}", Product::PREFIX, names.join(Product::SEPARATOR))
}

pub fn part_slot() -> impl Strategy<Value = PartSlot> {
    prop_oneof![Just(PartSlot::A), Just(PartSlot::B), Just(PartSlot::C)]
}

pub fn part_slots(max_len: usize) -> impl Strategy<Value = Vec<PartSlot>> {
    proptest::collection::vec(part_slot(), 0..=max_len)
}
