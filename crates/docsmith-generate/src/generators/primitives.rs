use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::{Sentence, Word};
use rand::{Rng, RngCore};
use serde_json::Value;

use crate::generators::{GeneratorContext, GeneratorRegistry, ValueGenerator};

/// Wire up the field-type tier plus the selectors these generators expose.
pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_type("keyword", Arc::new(WordGenerator));
    registry.register_type("text", Arc::new(SentenceGenerator));
    registry.register_type("date", Arc::new(Iso8601Generator));
    registry.register_type("integer", Arc::new(IntegerGenerator));
    registry.register_type("long", Arc::new(LongGenerator));
    registry.register_type("float", Arc::new(FloatGenerator));
    registry.register_type("boolean", Arc::new(BooleanGenerator));
    registry.register_type("ip", Arc::new(Ipv4Generator));
    registry.register_type("email", Arc::new(EmailGenerator));

    registry.register_selector(Arc::new(WordGenerator));
    registry.register_selector(Arc::new(SentenceGenerator));
    registry.register_selector(Arc::new(Iso8601Generator));
    registry.register_selector_alias("date_time", Arc::new(Iso8601Generator));
    registry.register_selector(Arc::new(IntegerGenerator));
    registry.register_selector(Arc::new(LongGenerator));
    registry.register_selector(Arc::new(FloatGenerator));
    registry.register_selector(Arc::new(BooleanGenerator));
    registry.register_selector(Arc::new(Ipv4Generator));
    registry.register_selector(Arc::new(EmailGenerator));
    registry.register_selector_alias("safe_email", Arc::new(EmailGenerator));
}

/// Single lowercase word, also the fallback for unknown type tags.
pub(crate) struct WordGenerator;

impl ValueGenerator for WordGenerator {
    fn id(&self) -> &'static str {
        "word"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = Word().fake_with_rng(rng);
        Value::String(value)
    }
}

pub(crate) struct SentenceGenerator;

impl ValueGenerator for SentenceGenerator {
    fn id(&self) -> &'static str {
        "sentence"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = Sentence(4..10).fake_with_rng(rng);
        Value::String(value)
    }
}

/// Timestamp between the Unix epoch and the run's reference time.
pub(crate) struct Iso8601Generator;

impl ValueGenerator for Iso8601Generator {
    fn id(&self) -> &'static str {
        "iso8601"
    }

    fn generate(&self, ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value = timestamp_between(DateTime::<Utc>::UNIX_EPOCH, ctx.reference_time, rng);
        Value::String(value)
    }
}

pub(crate) struct IntegerGenerator;

impl ValueGenerator for IntegerGenerator {
    fn id(&self) -> &'static str {
        "integer"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        Value::from(rng.random_range(18..=99_i64))
    }
}

pub(crate) struct LongGenerator;

impl ValueGenerator for LongGenerator {
    fn id(&self) -> &'static str {
        "long"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        Value::from(rng.random_range(1000..=100_000_i64))
    }
}

pub(crate) struct FloatGenerator;

impl ValueGenerator for FloatGenerator {
    fn id(&self) -> &'static str {
        "float"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: f64 = rng.random_range(1.0..=1000.0);
        let rounded = (value * 100.0).round() / 100.0;
        Value::from(rounded)
    }
}

pub(crate) struct BooleanGenerator;

impl ValueGenerator for BooleanGenerator {
    fn id(&self) -> &'static str {
        "boolean"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        Value::Bool(rng.random_bool(0.5))
    }
}

pub(crate) struct Ipv4Generator;

impl ValueGenerator for Ipv4Generator {
    fn id(&self) -> &'static str {
        "ipv4"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = fake::faker::internet::en::IPv4().fake_with_rng(rng);
        Value::String(value)
    }
}

pub(crate) struct EmailGenerator;

impl ValueGenerator for EmailGenerator {
    fn id(&self) -> &'static str {
        "email"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = SafeEmail().fake_with_rng(rng);
        Value::String(value)
    }
}

/// RFC 3339 timestamp uniform over `[start, end]`, second precision.
pub(crate) fn timestamp_between(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    rng: &mut dyn RngCore,
) -> String {
    let low = start.timestamp().min(end.timestamp());
    let high = start.timestamp().max(end.timestamp());
    let seconds = rng.random_range(low..=high);
    DateTime::<Utc>::from_timestamp(seconds, 0)
        .unwrap_or(end)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}
