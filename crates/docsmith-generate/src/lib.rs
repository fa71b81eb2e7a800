//! Schema-driven synthetic document generation for search indexes.
//!
//! This crate consumes an index mapping (and an optional override file) to
//! produce batches of realistic documents, reproducible under a fixed seed.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod output;
pub mod overrides;
pub mod synth;

pub use engine::{EngineOptions, SynthesisEngine, load_mapping};
pub use errors::GenerationError;
pub use generators::{GeneratorContext, GeneratorRegistry, ValueGenerator};
pub use overrides::{OverrideSpec, ResolvedOverrides, load_overrides};
pub use synth::{Document, Synthesizer};
