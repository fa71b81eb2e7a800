use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::errors::GenerationError;
use crate::generators::GeneratorRegistry;

/// One entry of an override file: either a bare generator name or an object
/// carrying directives such as `count`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OverrideSpec {
    Selector(String),
    Directive(serde_json::Map<String, Value>),
}

/// Field-name overrides after validation against the registry.
///
/// Lookups are by plain field name, so an entry applies at every depth the
/// name appears in the mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedOverrides {
    selectors: HashMap<String, String>,
    counts: HashMap<String, usize>,
}

impl ResolvedOverrides {
    pub fn set_generator(&mut self, field: impl Into<String>, selector: impl Into<String>) {
        self.selectors.insert(field.into(), selector.into());
    }

    pub fn set_count(&mut self, field: impl Into<String>, count: usize) {
        self.counts.insert(field.into(), count);
    }

    pub fn generator(&self, field: &str) -> Option<&str> {
        self.selectors.get(field).map(String::as_str)
    }

    pub fn count(&self, field: &str) -> Option<usize> {
        self.counts.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty() && self.counts.is_empty()
    }
}

/// Load and validate a user override file.
///
/// A missing path is not an error: generation proceeds with defaults. A file
/// that exists but does not parse, or whose root is not a JSON object, is
/// fatal. Individual entries that fail validation are skipped with a warning
/// so a single typo does not discard the rest of the file.
pub fn load_overrides(
    path: Option<&Path>,
    registry: &GeneratorRegistry,
) -> Result<ResolvedOverrides, GenerationError> {
    let Some(path) = path else {
        return Ok(ResolvedOverrides::default());
    };
    if !path.exists() {
        warn!(path = %path.display(), "override file not found; continuing without overrides");
        return Ok(ResolvedOverrides::default());
    }

    let text = fs::read_to_string(path)?;
    let root: Value = serde_json::from_str(&text)?;
    let Value::Object(entries) = root else {
        return Err(GenerationError::InvalidOverrides(
            "override file root must be a JSON object".to_string(),
        ));
    };

    let mut resolved = ResolvedOverrides::default();
    for (field, raw) in entries {
        match serde_json::from_value::<OverrideSpec>(raw) {
            Ok(OverrideSpec::Selector(selector)) => {
                if registry.has_selector(&selector) {
                    resolved.set_generator(field, selector);
                } else {
                    warn!(field = %field, selector = %selector, "unknown generator selector; entry skipped");
                }
            }
            Ok(OverrideSpec::Directive(directive)) => match directive.get("count") {
                Some(value) => match value.as_u64() {
                    Some(count) => resolved.set_count(field, count as usize),
                    None => {
                        warn!(field = %field, "count must be a non-negative integer; directive ignored");
                    }
                },
                None => warn!(field = %field, "directive without a count; entry ignored"),
            },
            Err(_) => {
                warn!(field = %field, "override entry must be a generator name or an object; entry skipped");
            }
        }
    }
    Ok(resolved)
}
