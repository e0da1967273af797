//! BIO tags and tagged sentences.
//!
//! The corpus uses the IOB2 scheme: the first token of an entity is tagged
//! `B-<type>`, subsequent tokens `I-<type>`, and non-entity tokens `O`. Tag
//! vocabulary is restricted to `{O, B-PER, I-PER, B-LOC, I-LOC}`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Flag value for sentences drawn from the real-PII template set.
pub const PII_FLAG: &str = "PII";
/// Flag value for sentences drawn from the fictional template set.
pub const NONPII_FLAG: &str = "NONPII";

/// Entity role a span can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Person name (PER)
    Person,
    /// Street address (LOC)
    Location,
}

impl EntityKind {
    /// Convert to standard label string (CoNLL format).
    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            EntityKind::Person => "PER",
            EntityKind::Location => "LOC",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// A single token's BIO tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// Outside any entity span.
    Outside,
    /// First token of an entity span.
    Begin(EntityKind),
    /// Continuation token of an entity span.
    Inside(EntityKind),
}

impl Tag {
    /// CoNLL string form (`O`, `B-PER`, `I-PER`, `B-LOC`, `I-LOC`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Outside => "O",
            Tag::Begin(EntityKind::Person) => "B-PER",
            Tag::Inside(EntityKind::Person) => "I-PER",
            Tag::Begin(EntityKind::Location) => "B-LOC",
            Tag::Inside(EntityKind::Location) => "I-LOC",
        }
    }

    /// Parse from CoNLL string form.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "O" => Ok(Tag::Outside),
            "B-PER" => Ok(Tag::Begin(EntityKind::Person)),
            "I-PER" => Ok(Tag::Inside(EntityKind::Person)),
            "B-LOC" => Ok(Tag::Begin(EntityKind::Location)),
            "I-LOC" => Ok(Tag::Inside(EntityKind::Location)),
            other => Err(Error::parse(format!("unknown tag: {other}"))),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One labeled sentence: parallel token and tag sequences plus the
/// PII/non-PII class of the template it was rendered from.
///
/// Invariant: `tokens.len() == tags.len()` and every `I-X` tag is preceded by
/// a `B-X` or `I-X` of the same kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedSentence {
    /// Whitespace-split tokens of the rendered sentence.
    pub tokens: Vec<String>,
    /// BIO tag per token.
    pub tags: Vec<Tag>,
    /// True when the sentence came from the real-PII template set.
    pub pii: bool,
}

impl TaggedSentence {
    /// Create a tagged sentence. `tokens` and `tags` must be the same length.
    #[must_use]
    pub fn new(tokens: Vec<String>, tags: Vec<Tag>, pii: bool) -> Self {
        debug_assert_eq!(tokens.len(), tags.len());
        Self { tokens, tags, pii }
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the sentence has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True when at least one span of `kind` was tagged.
    #[must_use]
    pub fn has_span(&self, kind: EntityKind) -> bool {
        self.tags.iter().any(|t| *t == Tag::Begin(kind))
    }

    /// Validate the IOB2 invariant: lengths match and no `I-X` tag appears
    /// without a preceding `B-X` or `I-X` of the same kind.
    #[must_use]
    pub fn check_bio(&self) -> bool {
        if self.tokens.len() != self.tags.len() {
            return false;
        }
        let mut prev = Tag::Outside;
        for &tag in &self.tags {
            if let Tag::Inside(kind) = tag {
                match prev {
                    Tag::Begin(p) | Tag::Inside(p) if p == kind => {}
                    _ => return false,
                }
            }
            prev = tag;
        }
        true
    }

    /// Write this sentence as one CoNLL block: one `token<TAB>tag` line per
    /// token (plus the `PII`/`NONPII` column when `include_flag` is set),
    /// terminated by a blank line.
    pub fn write_conll<W: Write>(&self, w: &mut W, include_flag: bool) -> std::io::Result<()> {
        let flag = if self.pii { PII_FLAG } else { NONPII_FLAG };
        for (token, tag) in self.tokens.iter().zip(&self.tags) {
            if include_flag {
                writeln!(w, "{token}\t{}\t{flag}", tag.as_str())?;
            } else {
                writeln!(w, "{token}\t{}", tag.as_str())?;
            }
        }
        writeln!(w)
    }
}
