//! Token-level span tagging of rendered sentences.
//!
//! Given a rendered sentence and the exact entity string(s) that filled its
//! template, this module recovers each entity's token span and emits BIO
//! tags. Matching must survive the drift the pipeline introduces between the
//! entity string and the sentence tokens:
//!
//! - a template may glue an honorific onto a name (`"by Dr. {name}."`);
//! - the address mutator randomizes case and punctuation;
//! - whitespace splitting leaves trailing punctuation on the last token.
//!
//! Tokens are therefore compared after normalization (lowercase, surrounding
//! punctuation stripped) with a leftmost sliding-window exact match. A span
//! that cannot be relocated is a soft miss: the sentence is emitted with that
//! role fully untagged. There is no partial or fuzzy recovery: an address
//! the mutator broke badly enough to defeat exact normalized matching is a
//! weaker training signal, not an error.

use crate::tag::{EntityKind, Tag, TaggedSentence};

/// Honorific tokens templates may prepend to a person name. When one occurs
/// in the sentence, matching first tries the honorific-anchored window; the
/// honorific token itself stays `O`.
pub const NAME_PREFIXES: &[&str] = &["Dr.", "Mr.", "Ms.", "Mrs.", "Prof.", "Sir", "Madam"];

/// Lowercase a token and strip surrounding (not internal) punctuation.
fn normalize_token(token: &str) -> String {
    token
        .trim_matches(|c: char| c.is_ascii_punctuation())
        .to_lowercase()
}

/// Leftmost offset at which `span` matches `tokens` under normalization, or
/// `None`. Both slices hold pre-normalized tokens.
fn find_window(tokens: &[String], span: &[String]) -> Option<usize> {
    if span.is_empty() || span.len() > tokens.len() {
        return None;
    }
    (0..=tokens.len() - span.len()).find(|&i| tokens[i..i + span.len()] == *span)
}

/// Mark a span of `n` tokens starting at `start` with B-/I- tags of `kind`.
fn mark_span(tags: &mut [Tag], start: usize, n: usize, kind: EntityKind) {
    tags[start] = Tag::Begin(kind);
    for tag in tags.iter_mut().skip(start + 1).take(n - 1) {
        *tag = Tag::Inside(kind);
    }
}

/// Locate a person span, trying honorific-anchored windows before the bare
/// name. Returns `(start, len)` of the name tokens only; a matched honorific
/// anchors the window but is not part of the span.
fn locate_person(
    sentence: &str,
    tokens_norm: &[String],
    name_norm: &[String],
) -> Option<(usize, usize)> {
    for prefix in NAME_PREFIXES {
        if !sentence.contains(prefix) {
            continue;
        }
        let mut window: Vec<String> = prefix.split_whitespace().map(normalize_token).collect();
        let prefix_len = window.len();
        window.extend_from_slice(name_norm);
        if let Some(i) = find_window(tokens_norm, &window) {
            return Some((i + prefix_len, name_norm.len()));
        }
    }
    find_window(tokens_norm, name_norm).map(|i| (i, name_norm.len()))
}

/// Tag one rendered sentence.
///
/// `person` and `location` are the exact strings used during template
/// rendering. Both roles are searched independently over the same token
/// sequence; templates keep their spans disjoint. The `pii` flag is carried
/// through as corpus metadata and does not alter tagging.
///
/// Never panics on a miss; the affected role is simply left all-`O`.
#[must_use]
pub fn tag(
    sentence: &str,
    person: Option<&str>,
    location: Option<&str>,
    pii: bool,
) -> TaggedSentence {
    let tokens: Vec<String> = sentence.split_whitespace().map(String::from).collect();
    let tokens_norm: Vec<String> = tokens.iter().map(|t| normalize_token(t)).collect();
    let mut tags = vec![Tag::Outside; tokens.len()];

    if let Some(name) = person.filter(|n| !n.trim().is_empty()) {
        let name_norm: Vec<String> = name.split_whitespace().map(normalize_token).collect();
        match locate_person(sentence, &tokens_norm, &name_norm) {
            Some((start, n)) => mark_span(&mut tags, start, n, EntityKind::Person),
            None => log::debug!("person span not found: {name:?} in {sentence:?}"),
        }
    }

    if let Some(addr) = location.filter(|a| !a.trim().is_empty()) {
        let addr_norm: Vec<String> = addr.split_whitespace().map(normalize_token).collect();
        match find_window(&tokens_norm, &addr_norm) {
            Some(start) => mark_span(&mut tags, start, addr_norm.len(), EntityKind::Location),
            None => log::debug!("location span not found: {addr:?} in {sentence:?}"),
        }
    }

    TaggedSentence::new(tokens, tags, pii)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(s: &TaggedSentence) -> Vec<&'static str> {
        s.tags.iter().map(|t| t.as_str()).collect()
    }

    #[test]
    fn tags_simple_person() {
        let s = tag("My name is John Tan.", Some("John Tan"), None, true);
        assert_eq!(s.tokens, vec!["My", "name", "is", "John", "Tan."]);
        assert_eq!(labels(&s), vec!["O", "O", "O", "B-PER", "I-PER"]);
        assert!(s.pii);
    }

    #[test]
    fn honorific_stays_outside_the_span() {
        let s = tag(
            "The medical record belongs to Dr. Siti binti Abdullah.",
            Some("Siti binti Abdullah"),
            None,
            true,
        );
        let dr = s.tokens.iter().position(|t| t == "Dr.").unwrap();
        assert_eq!(s.tags[dr], Tag::Outside);
        assert_eq!(s.tags[dr + 1], Tag::Begin(EntityKind::Person));
        assert_eq!(s.tags[dr + 2], Tag::Inside(EntityKind::Person));
        assert_eq!(s.tags[dr + 3], Tag::Inside(EntityKind::Person));
        assert!(s.check_bio());
    }

    #[test]
    fn location_survives_trailing_punctuation() {
        let s = tag(
            "Please deliver to Blk 5 XYZ Rd S123456.",
            None,
            Some("Blk 5 XYZ Rd S123456"),
            true,
        );
        let blk = s.tokens.iter().position(|t| t == "Blk").unwrap();
        assert_eq!(s.tags[blk], Tag::Begin(EntityKind::Location));
        assert!(s
            .tags
            .iter()
            .skip(blk + 1)
            .all(|t| *t == Tag::Inside(EntityKind::Location)));
    }

    #[test]
    fn mutated_address_miss_leaves_all_outside() {
        // Mutation renamed "Road" -> "Rd"; exact normalized match fails and
        // the sentence is emitted untagged for the location role.
        let s = tag(
            "Please deliver to Blk 5 XYZ Rd S123456.",
            None,
            Some("5 XYZ Road"),
            true,
        );
        assert!(s.tags.iter().all(|t| *t == Tag::Outside));
        assert!(s.check_bio());
    }

    #[test]
    fn person_and_location_tagged_independently() {
        let s = tag(
            "The patient John Tan lives at Blk 9 Bishan St 22 S570009.",
            Some("John Tan"),
            Some("Blk 9 Bishan St 22 S570009"),
            true,
        );
        assert!(s.has_span(EntityKind::Person));
        assert!(s.has_span(EntityKind::Location));
        assert!(s.check_bio());
    }

    #[test]
    fn case_drift_is_tolerated() {
        let s = tag(
            "The billing address is bLk 9 BISHAN st 22.",
            None,
            Some("bLk 9 BISHAN st 22"),
            true,
        );
        assert!(s.has_span(EntityKind::Location));
    }

    #[test]
    fn leftmost_match_wins() {
        // Both occurrences normalize identically; only the leftmost window is
        // tagged for the role.
        let s = tag("John Tan met John Tan.", Some("John Tan"), None, false);
        assert_eq!(labels(&s), vec!["B-PER", "I-PER", "O", "O", "O"]);
    }

    #[test]
    fn empty_inputs_never_panic() {
        let s = tag("", Some("John Tan"), Some("Blk 5"), true);
        assert!(s.is_empty());
        let s = tag("Hello there.", Some(""), Some("   "), false);
        assert!(s.tags.iter().all(|t| *t == Tag::Outside));
    }
}
