use docsmith_core::{FieldSpec, FieldType, Properties};
use rand::{Rng, RngCore};
use serde_json::Value;
use tracing::debug;

use crate::generators::{GeneratorContext, GeneratorRegistry, ValueGenerator};
use crate::overrides::ResolvedOverrides;

/// One synthesized document, keyed in mapping declaration order.
pub type Document = serde_json::Map<String, Value>;

/// Walks a mapping's property tree and fills in values.
///
/// Scalar fields resolve a generator in three steps: a user override for the
/// field name, then the built-in field-name table, then the field type. The
/// type lookup always succeeds, so synthesis itself cannot fail.
pub struct Synthesizer<'a> {
    registry: &'a GeneratorRegistry,
    overrides: &'a ResolvedOverrides,
    ctx: GeneratorContext,
}

impl<'a> Synthesizer<'a> {
    pub fn new(
        registry: &'a GeneratorRegistry,
        overrides: &'a ResolvedOverrides,
        ctx: GeneratorContext,
    ) -> Self {
        Self { registry, overrides, ctx }
    }

    pub fn synthesize(&self, properties: &Properties, rng: &mut dyn RngCore) -> Document {
        let mut document = Document::new();
        for (name, spec) in properties {
            document.insert(name.clone(), self.field_value(name, spec, rng));
        }
        document
    }

    fn field_value(&self, name: &str, spec: &FieldSpec, rng: &mut dyn RngCore) -> Value {
        match (spec.resolved_type(), spec.children()) {
            (FieldType::Nested, Some(children)) => {
                let count = self
                    .overrides
                    .count(name)
                    .unwrap_or_else(|| rng.random_range(1..=3));
                let items = (0..count)
                    .map(|_| Value::Object(self.synthesize(children, rng)))
                    .collect();
                Value::Array(items)
            }
            (FieldType::Object, Some(children)) => Value::Object(self.synthesize(children, rng)),
            (field_type, _) => self.scalar_value(name, &field_type, rng),
        }
    }

    fn scalar_value(&self, name: &str, field_type: &FieldType, rng: &mut dyn RngCore) -> Value {
        let (generator, tier) = self.resolve(name, field_type);
        debug!(field = name, generator = generator.id(), tier, "generator resolved");
        generator.generate(&self.ctx, rng)
    }

    fn resolve(&self, name: &str, field_type: &FieldType) -> (&dyn ValueGenerator, &'static str) {
        if let Some(selector) = self.overrides.generator(name) {
            if let Some(generator) = self.registry.selector(selector) {
                return (generator, "override");
            }
        }
        if let Some(generator) = self.registry.for_field_name(name) {
            return (generator, "field_name");
        }
        (self.registry.for_type(field_type.as_tag()), "type")
    }
}
