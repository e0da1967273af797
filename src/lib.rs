//! # piigen
//!
//! Synthetic, labeled training data for PII-detecting NER models.
//!
//! Given a CSV of harvested street addresses and a pool of person names
//! (supplied or synthesized), piigen renders sentences from contextual
//! templates, recovers each embedded entity's token span, and emits a
//! BIO-tagged CoNLL corpus covering person names (`PER`) and street
//! addresses (`LOC`).
//!
//! The pipeline:
//!
//! ```text
//! addresses.csv ─▶ Augmenter ─┐
//!                             ├─▶ templates::render ─▶ tagger::tag ─▶ corpus
//! names ──────────────────────┘
//! ```
//!
//! Addresses are run through a randomized augmentation pipeline (synonym
//! substitution, case jitter, postal-code variants, noise tokens) so the
//! downstream model learns addresses independent of exact formatting. The
//! tagger then relocates the augmented string inside the rendered sentence
//! under normalization, tolerating the drift the pipeline introduced.
//!
//! ## Example
//!
//! ```rust
//! use piigen::tagger;
//!
//! let s = tagger::tag("My name is John Tan.", Some("John Tan"), None, true);
//! assert_eq!(s.tokens, vec!["My", "name", "is", "John", "Tan."]);
//! assert!(s.check_bio());
//! ```
//!
//! Every randomized component takes an explicit [`Rng`]; a fixed seed
//! reproduces a corpus exactly.

pub mod augment;
pub mod corpus;
pub mod error;
pub mod names;
pub mod rng;
pub mod source;
pub mod tag;
pub mod tagger;
pub mod templates;

pub use augment::{AugmentedAddress, Augmenter, RawAddress};
pub use corpus::{GenerationReport, GeneratorConfig};
pub use error::{Error, Result};
pub use rng::Rng;
pub use tag::{EntityKind, Tag, TaggedSentence};
pub use templates::Scenario;
