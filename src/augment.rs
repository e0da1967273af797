//! Address augmentation pipeline.
//!
//! Turns one canonical `(street, postal code)` pair into a noisy surface form
//! by chaining independently gated transformations:
//!
//! 1. road-type synonymization (first matching keyword only)
//! 2. unit-number reformatting (`#NN-NNNN` variants)
//! 3. per-character case jitter
//! 4. comma stripping
//! 5. whitespace collapsing
//! 6. postal-code suffixing (`S…`, `S(…)`, `Singapore …`, `SG …`, bare)
//! 7. bracketed landmark noise token
//! 8. interior-character noise on one word
//!
//! Each gate fires independently, so a single address yields a combinatorial
//! range of surface forms. The output is deliberately non-deterministic given
//! a fresh RNG; seed the [`Rng`] to reproduce a run.

use crate::rng::Rng;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A harvested address row, as supplied by the address source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAddress {
    /// Street line, e.g. `Blk 123 Serangoon Avenue 4 #05-678`.
    pub street: String,
    /// Postal code digits, possibly empty.
    pub zip_code: String,
}

/// An augmented address, retaining the canonical form for traceability.
///
/// Only `augmented` participates in template rendering and tagging; the
/// original is never reused downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentedAddress {
    /// Canonical `street zip` form before augmentation.
    pub original: String,
    /// Noisy surface form.
    pub augmented: String,
}

/// Road-type keywords and their abbreviation/case variants. Only the first
/// keyword found in the street string is substituted, once.
const ROAD_SYNONYMS: &[(&str, &[&str])] = &[
    ("Road", &["Rd", "rd", "ROAD"]),
    ("Avenue", &["Ave", "ave", "AVENUE"]),
    ("Lane", &["Ln", "ln"]),
    ("Street", &["St", "st"]),
    ("Drive", &["Dr", "dr"]),
    ("Boulevard", &["Blvd", "blvd"]),
    ("Place", &["Pl", "pl"]),
];

/// Free-standing landmark phrases appended as noise. These are not part of
/// the true address and exist to harden the downstream model against
/// non-address trailing text.
const LANDMARK_TOKENS: &[&str] = &[
    "(Opposite Gate 3)",
    "(Near Exit A)",
    "(Behind Carpark)",
    "(Beside MRT)",
    "(Opposite XXX)",
    "(Near Gate 3)",
];

/// Chance that a jittered character is uppercased rather than lowercased.
pub const CASE_JITTER_UPPER_BIAS: f64 = 0.3;

/// Address mutator with one named gate probability per pipeline step.
///
/// Gates are public so tests can force (`1.0`) or suppress (`0.0`) individual
/// transformations. Defaults mirror the harvest-time augmentation rates the
/// corpus was tuned with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Augmenter {
    /// Substitute a road-type keyword with an abbreviation/case variant.
    pub road_synonym: f64,
    /// Reformat a `#NN-NNNN` unit number.
    pub unit_reformat: f64,
    /// Randomize character case across the whole string.
    pub case_jitter: f64,
    /// Replace commas with spaces.
    pub strip_commas: f64,
    /// Collapse whitespace runs to single spaces.
    pub collapse_whitespace: f64,
    /// Append a postal-code rendering.
    pub postal_suffix: f64,
    /// Append a bracketed landmark phrase.
    pub landmark_noise: f64,
    /// Replace one interior character of one word.
    pub char_noise: f64,
}

impl Default for Augmenter {
    fn default() -> Self {
        Self {
            road_synonym: 0.7,
            unit_reformat: 0.5,
            case_jitter: 0.5,
            strip_commas: 0.5,
            collapse_whitespace: 0.5,
            postal_suffix: 0.8,
            landmark_noise: 0.3,
            char_noise: 0.4,
        }
    }
}

impl Augmenter {
    /// All gates closed: `mutate` returns the street unchanged (no postal
    /// suffix either). Useful as a test baseline.
    #[must_use]
    pub fn never() -> Self {
        Self {
            road_synonym: 0.0,
            unit_reformat: 0.0,
            case_jitter: 0.0,
            strip_commas: 0.0,
            collapse_whitespace: 0.0,
            postal_suffix: 0.0,
            landmark_noise: 0.0,
            char_noise: 0.0,
        }
    }

    /// All gates open: every step fires on every call.
    #[must_use]
    pub fn always() -> Self {
        Self {
            road_synonym: 1.0,
            unit_reformat: 1.0,
            case_jitter: 1.0,
            strip_commas: 1.0,
            collapse_whitespace: 1.0,
            postal_suffix: 1.0,
            landmark_noise: 1.0,
            char_noise: 1.0,
        }
    }

    /// Produce one noisy rendering of `(street, zip_code)`.
    ///
    /// Fails soft: an empty or whitespace-only street yields an empty string.
    /// Malformed postal codes never panic; they are suffixed verbatim or
    /// skipped when empty.
    #[must_use]
    pub fn mutate(&self, street: &str, zip_code: &str, rng: &mut Rng) -> String {
        if street.trim().is_empty() {
            return String::new();
        }
        let mut addr = street.to_string();

        if rng.gen_bool(self.road_synonym) {
            addr = synonymize_road(&addr, rng);
        }
        if rng.gen_bool(self.unit_reformat) {
            addr = reformat_unit(&addr, rng);
        }
        if rng.gen_bool(self.case_jitter) {
            addr = jitter_case(&addr, rng);
        }
        if rng.gen_bool(self.strip_commas) {
            addr = addr.replace(',', " ");
        }
        if rng.gen_bool(self.collapse_whitespace) {
            addr = collapse_whitespace(&addr);
        }
        if rng.gen_bool(self.postal_suffix) && !zip_code.trim().is_empty() {
            let suffix = postal_variant(zip_code.trim(), rng);
            addr = format!("{addr} {suffix}");
        }
        if rng.gen_bool(self.landmark_noise) {
            addr = format!("{addr} {}", rng.choose(LANDMARK_TOKENS));
        }
        if rng.gen_bool(self.char_noise) {
            addr = char_noise(&addr, rng);
        }

        addr
    }

    /// Augment a raw address row, retaining the canonical form.
    #[must_use]
    pub fn augment(&self, raw: &RawAddress, rng: &mut Rng) -> AugmentedAddress {
        let original = format!("{} {}", raw.street.trim(), raw.zip_code.trim())
            .trim()
            .to_string();
        AugmentedAddress {
            original,
            augmented: self.mutate(&raw.street, &raw.zip_code, rng),
        }
    }
}

/// Replace the first road-type keyword found with a random variant from its
/// synonym set. Stops after the first keyword matched.
fn synonymize_road(addr: &str, rng: &mut Rng) -> String {
    for (keyword, variants) in ROAD_SYNONYMS {
        if addr.contains(keyword) {
            return addr.replacen(keyword, *rng.choose(variants), 1);
        }
    }
    addr.to_string()
}

/// Reformat a `#NN-NNNN` unit number into one of three equivalent renderings:
/// the original, the block with its leading zero dropped, or the unit digits
/// truncated to two.
fn reformat_unit(addr: &str, rng: &mut Rng) -> String {
    static UNIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\d{2}-\d{2,4}").unwrap());

    let Some(m) = UNIT.find(addr) else {
        return addr.to_string();
    };
    let unit = m.as_str();
    let base = &unit[1..]; // strip '#'
    let (block, digits) = match base.split_once('-') {
        Some(parts) => parts,
        None => return addr.to_string(),
    };
    let variants = [
        unit.to_string(),
        format!("#{}-{digits}", block.parse::<u32>().unwrap_or_default()),
        format!("#{block}-{}", &digits[..digits.len().min(2)]),
    ];
    addr.replacen(unit, rng.choose(&variants).as_str(), 1)
}

/// Randomize case per character, biased towards lowercase.
fn jitter_case(addr: &str, rng: &mut Rng) -> String {
    addr.chars()
        .map(|c| {
            if rng.gen_bool(CASE_JITTER_UPPER_BIAS) {
                c.to_uppercase().next().unwrap_or(c)
            } else {
                c.to_lowercase().next().unwrap_or(c)
            }
        })
        .collect()
}

fn collapse_whitespace(addr: &str) -> String {
    static WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
    WS.replace_all(addr, " ").into_owned()
}

/// Pick one of the recognized postal-code renderings.
fn postal_variant(zip_code: &str, rng: &mut Rng) -> String {
    let formats = [
        format!("S{zip_code}"),
        format!("S({zip_code})"),
        format!("Singapore {zip_code}"),
        format!("SG {zip_code}"),
        zip_code.to_string(),
    ];
    formats[rng.gen_range(formats.len())].clone()
}

/// Replace one interior character of one randomly chosen word. Words that
/// look numeric, postal, or unit-like are left alone, as are words too short
/// to have an interior.
fn char_noise(addr: &str, rng: &mut Rng) -> String {
    static NUMERICISH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+|S\d+|#\d+-\d+)").unwrap());

    let mut words: Vec<String> = addr.split_whitespace().map(String::from).collect();
    if words.is_empty() {
        return addr.to_string();
    }
    let i = rng.gen_range(words.len());
    if NUMERICISH.is_match(&words[i]) {
        return addr.to_string();
    }
    let chars: Vec<char> = words[i].chars().collect();
    if chars.len() > 3 {
        let pos = 1 + rng.gen_range(chars.len() - 2);
        let mut mutated = chars;
        mutated[pos] = rng.gen_ascii_lower();
        words[i] = mutated.into_iter().collect();
    }
    words.join(" ")
}
