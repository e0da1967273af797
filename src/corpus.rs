//! Corpus assembly: balanced generation, shuffling, and CoNLL persistence.
//!
//! The assembler drives the full pipeline (name pick, address augmentation,
//! template rendering, span tagging) across a target sentence count split
//! evenly over the scenario × PII-class cross product. Any remainder from the
//! integer division is dropped and reported, never silently swallowed. The
//! finished sentence list is shuffled (uniform permutation) before
//! serialization so the output file carries no scenario-correlated batches.

use crate::augment::{Augmenter, AugmentedAddress, RawAddress};
use crate::rng::Rng;
use crate::tag::{EntityKind, TaggedSentence};
use crate::templates::{self, Scenario};
use crate::{tagger, Error, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Scenario × PII-class combinations the corpus is balanced across.
pub const COMBO_COUNT: usize = 6;

/// Corpus generation parameters.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Requested sentence count; rounded down to a multiple of
    /// [`COMBO_COUNT`].
    pub total: usize,
    /// Augmented variants produced per harvested address row.
    pub variants_per_address: usize,
    /// Gate probabilities for the address mutator.
    pub augmenter: Augmenter,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            total: 12_000,
            variants_per_address: 3,
            augmenter: Augmenter::default(),
        }
    }
}

/// Summary of one generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// Sentence count requested.
    pub requested: usize,
    /// Sentences actually generated (`COMBO_COUNT * floor(requested / COMBO_COUNT)`).
    pub generated: usize,
    /// Requested sentences dropped by the balancing division.
    pub dropped_remainder: usize,
    /// Sentences whose person span could not be relocated (emitted all-O for
    /// that role).
    pub person_span_misses: usize,
    /// Sentences whose location span could not be relocated.
    pub location_span_misses: usize,
}

/// Generate a balanced, shuffled corpus.
///
/// Upstream entities are transient: each sentence consumes one name draw and
/// one augmented-address draw and retains neither. Span misses are soft and
/// only counted; the affected sentences stay in the corpus untagged for the
/// missed role.
pub fn generate(
    addresses: &[RawAddress],
    names: &[String],
    config: &GeneratorConfig,
    rng: &mut Rng,
) -> Result<(Vec<TaggedSentence>, GenerationReport)> {
    if addresses.is_empty() {
        return Err(Error::invalid_input("no usable address rows"));
    }
    if names.is_empty() {
        return Err(Error::invalid_input("no usable name rows"));
    }
    if config.variants_per_address == 0 {
        return Err(Error::invalid_input("variants_per_address must be >= 1"));
    }

    // Expand the harvested rows into a pool of augmented surface forms.
    let mut pool: Vec<AugmentedAddress> =
        Vec::with_capacity(addresses.len() * config.variants_per_address);
    for raw in addresses {
        for _ in 0..config.variants_per_address {
            let augmented = config.augmenter.augment(raw, rng);
            if !augmented.augmented.is_empty() {
                pool.push(augmented);
            }
        }
    }
    if pool.is_empty() {
        return Err(Error::invalid_input("address augmentation produced no variants"));
    }

    let per_combo = config.total / COMBO_COUNT;
    let generated = per_combo * COMBO_COUNT;
    let mut report = GenerationReport {
        requested: config.total,
        generated,
        dropped_remainder: config.total - generated,
        person_span_misses: 0,
        location_span_misses: 0,
    };
    if report.dropped_remainder > 0 {
        log::info!(
            "dropping {} sentences to balance across {} scenario/class combinations",
            report.dropped_remainder,
            COMBO_COUNT
        );
    }

    let mut sentences = Vec::with_capacity(generated);
    for scenario in Scenario::ALL {
        for pii in [true, false] {
            for _ in 0..per_combo {
                let name = rng.choose(names).as_str();
                let address = rng.choose(&pool).augmented.as_str();
                let sentence = templates::render(scenario, pii, name, address, rng);

                let (person, location) = match scenario {
                    Scenario::Person => (Some(name), None),
                    Scenario::Location => (None, Some(address)),
                    Scenario::PersonAndLocation => (Some(name), Some(address)),
                };
                let tagged = tagger::tag(&sentence, person, location, pii);

                if person.is_some() && !tagged.has_span(EntityKind::Person) {
                    report.person_span_misses += 1;
                }
                if location.is_some() && !tagged.has_span(EntityKind::Location) {
                    report.location_span_misses += 1;
                }
                sentences.push(tagged);
            }
        }
    }

    rng.shuffle(&mut sentences);
    Ok((sentences, report))
}

/// Write a corpus as blank-line-delimited CoNLL blocks.
pub fn write_conll<W: Write>(
    sentences: &[TaggedSentence],
    w: &mut W,
    include_flag: bool,
) -> std::io::Result<()> {
    for sentence in sentences {
        sentence.write_conll(w, include_flag)?;
    }
    Ok(())
}

/// Write a corpus to a file, replacing it wholesale.
pub fn write_conll_file(
    path: &Path,
    sentences: &[TaggedSentence],
    include_flag: bool,
) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    write_conll(sentences, &mut w, include_flag)?;
    w.flush()?;
    Ok(())
}

/// Parse a CoNLL file produced by [`write_conll`].
///
/// Lines are `token<sep>tag` or `token<sep>tag<sep>flag`; blank lines end a
/// sentence. When the flag column is absent, sentences default to PII. A flag
/// outside the `PII`/`NONPII` vocabulary is a parse error, like an unknown
/// tag.
pub fn parse_conll(content: &str) -> Result<Vec<TaggedSentence>> {
    let mut sentences = Vec::new();
    let mut tokens = Vec::new();
    let mut tags = Vec::new();
    let mut pii = true;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !tokens.is_empty() {
                sentences.push(TaggedSentence::new(
                    std::mem::take(&mut tokens),
                    std::mem::take(&mut tags),
                    pii,
                ));
                pii = true;
            }
            continue;
        }
        let mut parts = line.split_whitespace();
        let token = parts
            .next()
            .ok_or_else(|| Error::parse("empty CoNLL line"))?;
        let tag = parts
            .next()
            .ok_or_else(|| Error::parse(format!("missing tag for token {token:?}")))?;
        tokens.push(token.to_string());
        tags.push(crate::tag::Tag::parse(tag)?);
        if let Some(flag) = parts.next() {
            pii = if flag == crate::tag::PII_FLAG {
                true
            } else if flag == crate::tag::NONPII_FLAG {
                false
            } else {
                return Err(Error::parse(format!("unknown flag: {flag}")));
            };
        }
    }
    if !tokens.is_empty() {
        sentences.push(TaggedSentence::new(tokens, tags, pii));
    }
    Ok(sentences)
}
