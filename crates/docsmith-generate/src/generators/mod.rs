use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::RngCore;
use serde_json::Value;

pub mod catalog;
pub mod primitives;
pub mod semantic;

/// Run-wide inputs shared by every generator.
///
/// Time-based generators derive their windows from `reference_time` instead
/// of reading the wall clock, so a run is fully determined by its seed and
/// its context.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorContext {
    /// Upper bound for generated timestamps, fixed once per run.
    pub reference_time: DateTime<Utc>,
}

/// A single value producer.
///
/// Generation is infallible: every generator must return a value for any rng
/// state, so schema walking never has a failure path.
pub trait ValueGenerator: Send + Sync {
    /// Stable identifier, usable as a selector in override files.
    fn id(&self) -> &'static str;

    fn generate(&self, ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value;
}

/// Lookup tables for the three resolution tiers: field-type tags, well-known
/// field names, and the selector catalog exposed to override files.
#[derive(Clone)]
pub struct GeneratorRegistry {
    by_type: HashMap<&'static str, Arc<dyn ValueGenerator>>,
    by_field_name: HashMap<&'static str, Arc<dyn ValueGenerator>>,
    selectors: HashMap<&'static str, Arc<dyn ValueGenerator>>,
    fallback: Arc<dyn ValueGenerator>,
}

impl GeneratorRegistry {
    /// Registry with the built-in type table, field-name table, and selector
    /// catalog.
    pub fn new() -> Self {
        let mut registry = Self {
            by_type: HashMap::new(),
            by_field_name: HashMap::new(),
            selectors: HashMap::new(),
            fallback: Arc::new(primitives::WordGenerator),
        };
        primitives::register(&mut registry);
        semantic::register(&mut registry);
        catalog::register(&mut registry);
        registry
    }

    pub fn register_type(&mut self, tag: &'static str, generator: Arc<dyn ValueGenerator>) {
        self.by_type.insert(tag, generator);
    }

    pub fn register_field_name(&mut self, name: &'static str, generator: Arc<dyn ValueGenerator>) {
        self.by_field_name.insert(name, generator);
    }

    /// Add a generator to the selector catalog under its own id.
    pub fn register_selector(&mut self, generator: Arc<dyn ValueGenerator>) {
        self.selectors.insert(generator.id(), generator);
    }

    /// Add a generator to the selector catalog under an extra name.
    pub fn register_selector_alias(
        &mut self,
        alias: &'static str,
        generator: Arc<dyn ValueGenerator>,
    ) {
        self.selectors.insert(alias, generator);
    }

    /// Generator for a type tag. Total: unknown tags resolve to the word
    /// fallback.
    pub fn for_type(&self, tag: &str) -> &dyn ValueGenerator {
        self.by_type.get(tag).unwrap_or(&self.fallback).as_ref()
    }

    pub fn for_field_name(&self, name: &str) -> Option<&dyn ValueGenerator> {
        self.by_field_name.get(name).map(|generator| generator.as_ref())
    }

    pub fn selector(&self, id: &str) -> Option<&dyn ValueGenerator> {
        self.selectors.get(id).map(|generator| generator.as_ref())
    }

    pub fn has_selector(&self, id: &str) -> bool {
        self.selectors.contains_key(id)
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("types", &self.by_type.len())
            .field("field_names", &self.by_field_name.len())
            .field("selectors", &self.selectors.len())
            .finish()
    }
}
