use std::sync::Arc;

use fake::Fake;
use fake::faker::company::en::{Buzzword, CompanyName};
use fake::faker::internet::en::{FreeEmail, IPv6, MACAddress};
use fake::faker::job::en::Title;
use fake::faker::lorem::en::{Paragraph, Word};
use fake::faker::name::en::Name;
use rand::{Rng, RngCore};
use serde_json::Value;

use crate::generators::{GeneratorContext, GeneratorRegistry, ValueGenerator};

/// Wire up the selectors that exist only for override files, on top of the
/// ones the type and field-name tiers already expose.
pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_selector(Arc::new(ParagraphGenerator));
    registry.register_selector(Arc::new(FullNameGenerator));
    registry.register_selector(Arc::new(FreeEmailGenerator));
    registry.register_selector(Arc::new(CompanyGenerator));
    registry.register_selector(Arc::new(BuzzwordGenerator));
    registry.register_selector(Arc::new(JobGenerator));
    registry.register_selector(Arc::new(Ipv6Generator));
    registry.register_selector(Arc::new(MacAddressGenerator));
    registry.register_selector(Arc::new(Uuid4Generator));
    registry.register_selector(Arc::new(UrlGenerator));
    registry.register_selector(Arc::new(LatitudeGenerator));
    registry.register_selector(Arc::new(LongitudeGenerator));
}

struct ParagraphGenerator;

impl ValueGenerator for ParagraphGenerator {
    fn id(&self) -> &'static str {
        "paragraph"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = Paragraph(1..3).fake_with_rng(rng);
        Value::String(value)
    }
}

struct FullNameGenerator;

impl ValueGenerator for FullNameGenerator {
    fn id(&self) -> &'static str {
        "name"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = Name().fake_with_rng(rng);
        Value::String(value)
    }
}

struct FreeEmailGenerator;

impl ValueGenerator for FreeEmailGenerator {
    fn id(&self) -> &'static str {
        "free_email"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = FreeEmail().fake_with_rng(rng);
        Value::String(value)
    }
}

struct CompanyGenerator;

impl ValueGenerator for CompanyGenerator {
    fn id(&self) -> &'static str {
        "company"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = CompanyName().fake_with_rng(rng);
        Value::String(value)
    }
}

struct BuzzwordGenerator;

impl ValueGenerator for BuzzwordGenerator {
    fn id(&self) -> &'static str {
        "buzzword"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = Buzzword().fake_with_rng(rng);
        Value::String(value)
    }
}

struct JobGenerator;

impl ValueGenerator for JobGenerator {
    fn id(&self) -> &'static str {
        "job"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = Title().fake_with_rng(rng);
        Value::String(value)
    }
}

struct Ipv6Generator;

impl ValueGenerator for Ipv6Generator {
    fn id(&self) -> &'static str {
        "ipv6"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = IPv6().fake_with_rng(rng);
        Value::String(value)
    }
}

struct MacAddressGenerator;

impl ValueGenerator for MacAddressGenerator {
    fn id(&self) -> &'static str {
        "mac_address"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = MACAddress().fake_with_rng(rng);
        Value::String(value)
    }
}

/// Version 4 UUID built from rng bytes so seeded runs reproduce it.
struct Uuid4Generator;

impl ValueGenerator for Uuid4Generator {
    fn id(&self) -> &'static str {
        "uuid4"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let mut bytes = [0_u8; 16];
        rng.fill_bytes(&mut bytes);
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Value::String(uuid::Uuid::from_bytes(bytes).to_string())
    }
}

struct UrlGenerator;

impl ValueGenerator for UrlGenerator {
    fn id(&self) -> &'static str {
        "url"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let slug: String = Word().fake_with_rng(rng);
        let page = rng.random_range(1..=9999);
        Value::String(format!("https://example.com/{slug}-{page}"))
    }
}

struct LatitudeGenerator;

impl ValueGenerator for LatitudeGenerator {
    fn id(&self) -> &'static str {
        "latitude"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        Value::from(round6(rng.random_range(-90.0..=90.0)))
    }
}

struct LongitudeGenerator;

impl ValueGenerator for LongitudeGenerator {
    fn id(&self) -> &'static str {
        "longitude"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        Value::from(round6(rng.random_range(-180.0..=180.0)))
    }
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
