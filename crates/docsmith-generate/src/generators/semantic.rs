use std::sync::Arc;

use chrono::{DateTime, Datelike, TimeZone, Utc};
use fake::Fake;
use fake::faker::address::en::{CityName, CountryName, PostCode, StreetName, ZipCode};
use fake::faker::internet::en::Username;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use rand::RngCore;
use serde_json::Value;

use crate::generators::{GeneratorContext, GeneratorRegistry, ValueGenerator, primitives};

/// Wire up the field-name tier: exact field names that get a themed value
/// regardless of their declared type.
pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_field_name("email", Arc::new(primitives::EmailGenerator));
    registry.register_field_name("username", Arc::new(UsernameGenerator));
    registry.register_field_name("first_name", Arc::new(FirstNameGenerator));
    registry.register_field_name("last_name", Arc::new(LastNameGenerator));
    registry.register_field_name("bio", Arc::new(primitives::SentenceGenerator));
    registry.register_field_name("street", Arc::new(StreetNameGenerator));
    registry.register_field_name("city", Arc::new(CityGenerator));
    registry.register_field_name("postal_code", Arc::new(PostcodeGenerator));
    registry.register_field_name("zipcode", Arc::new(ZipcodeGenerator));
    registry.register_field_name("country", Arc::new(CountryGenerator));
    registry.register_field_name("phone", Arc::new(PhoneNumberGenerator));
    registry.register_field_name("ip", Arc::new(primitives::Ipv4Generator));
    registry.register_field_name("created_at", Arc::new(DateTimeThisDecadeGenerator));

    registry.register_selector(Arc::new(UsernameGenerator));
    registry.register_selector_alias("user_name", Arc::new(UsernameGenerator));
    registry.register_selector(Arc::new(FirstNameGenerator));
    registry.register_selector(Arc::new(LastNameGenerator));
    registry.register_selector(Arc::new(StreetNameGenerator));
    registry.register_selector(Arc::new(CityGenerator));
    registry.register_selector(Arc::new(PostcodeGenerator));
    registry.register_selector(Arc::new(ZipcodeGenerator));
    registry.register_selector(Arc::new(CountryGenerator));
    registry.register_selector(Arc::new(PhoneNumberGenerator));
    registry.register_selector(Arc::new(DateTimeThisDecadeGenerator));
}

struct UsernameGenerator;

impl ValueGenerator for UsernameGenerator {
    fn id(&self) -> &'static str {
        "username"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = Username().fake_with_rng(rng);
        Value::String(value)
    }
}

struct FirstNameGenerator;

impl ValueGenerator for FirstNameGenerator {
    fn id(&self) -> &'static str {
        "first_name"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = FirstName().fake_with_rng(rng);
        Value::String(value)
    }
}

struct LastNameGenerator;

impl ValueGenerator for LastNameGenerator {
    fn id(&self) -> &'static str {
        "last_name"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = LastName().fake_with_rng(rng);
        Value::String(value)
    }
}

struct StreetNameGenerator;

impl ValueGenerator for StreetNameGenerator {
    fn id(&self) -> &'static str {
        "street_name"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = StreetName().fake_with_rng(rng);
        Value::String(value)
    }
}

struct CityGenerator;

impl ValueGenerator for CityGenerator {
    fn id(&self) -> &'static str {
        "city"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = CityName().fake_with_rng(rng);
        Value::String(value)
    }
}

struct PostcodeGenerator;

impl ValueGenerator for PostcodeGenerator {
    fn id(&self) -> &'static str {
        "postcode"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = PostCode().fake_with_rng(rng);
        Value::String(value)
    }
}

struct ZipcodeGenerator;

impl ValueGenerator for ZipcodeGenerator {
    fn id(&self) -> &'static str {
        "zipcode"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = ZipCode().fake_with_rng(rng);
        Value::String(value)
    }
}

struct CountryGenerator;

impl ValueGenerator for CountryGenerator {
    fn id(&self) -> &'static str {
        "country"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = CountryName().fake_with_rng(rng);
        Value::String(value)
    }
}

struct PhoneNumberGenerator;

impl ValueGenerator for PhoneNumberGenerator {
    fn id(&self) -> &'static str {
        "phone_number"
    }

    fn generate(&self, _ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let value: String = PhoneNumber().fake_with_rng(rng);
        Value::String(value)
    }
}

/// Timestamp between the start of the reference time's decade and the
/// reference time itself.
struct DateTimeThisDecadeGenerator;

impl ValueGenerator for DateTimeThisDecadeGenerator {
    fn id(&self) -> &'static str {
        "date_time_this_decade"
    }

    fn generate(&self, ctx: &GeneratorContext, rng: &mut dyn RngCore) -> Value {
        let start = decade_start(ctx.reference_time);
        let value = primitives::timestamp_between(start, ctx.reference_time, rng);
        Value::String(value)
    }
}

fn decade_start(reference: DateTime<Utc>) -> DateTime<Utc> {
    let year = reference.year() - reference.year().rem_euclid(10);
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
