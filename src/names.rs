//! Multi-ethnic person name synthesis.
//!
//! Produces plausible Singapore-resident full names across five generative
//! patterns, weighted to roughly mirror local demographics:
//!
//! | Pattern | Example | Weight |
//! |---------|---------|--------|
//! | Chinese, mixed script | `Grace Tan Xiu Ling` | 40 |
//! | Chinese, pinyin only | `Lim Wei Ming` | 20 |
//! | Malay patronymic | `Siti binti Abdullah` | 15 |
//! | Tamil patronymic | `Priya d/o Rajendran` | 10 |
//! | Western | `Daniel Harris` | 15 |
//!
//! Every generated name is non-empty and whitespace-tokenizable.

use crate::rng::Rng;
use serde::{Deserialize, Serialize};

/// Generative pattern a synthesized name was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamePattern {
    /// Western given name + Chinese surname + pinyin given name.
    ChineseMixed,
    /// Chinese surname + pinyin given name.
    ChinesePinyin,
    /// Malay `bin`/`binti` patronymic.
    MalayPatronymic,
    /// Tamil `s/o`/`d/o` patronymic.
    TamilPatronymic,
    /// Western first + last name.
    Western,
}

/// Pattern weights out of 100.
const PATTERN_WEIGHTS: &[(NamePattern, u32)] = &[
    (NamePattern::ChineseMixed, 40),
    (NamePattern::ChinesePinyin, 20),
    (NamePattern::MalayPatronymic, 15),
    (NamePattern::TamilPatronymic, 10),
    (NamePattern::Western, 15),
];

const CHINESE_SURNAMES: &[&str] = &[
    "Tan", "Lim", "Lee", "Ng", "Wong", "Chen", "Goh", "Ong", "Teo", "Chua", "Koh", "Ho", "Low",
    "Toh", "Sim", "Chan", "Yeo", "Tay", "Ang", "Foo",
];

const CHINESE_GIVEN: &[&str] = &[
    "Wei Ming", "Jia Hui", "Xiu Ling", "Li Wei", "Mei Lin", "Jun Jie", "Hui Min", "Zhi Hao",
    "Xin Yi", "Yu Ting", "Kai Wen", "Shu Fen", "Wen Jun", "Qian Hui", "Zhen Yu", "Jing Wen",
];

const WESTERN_FIRST: &[&str] = &[
    "James", "Sarah", "Michael", "Emily", "Daniel", "Grace", "Benjamin", "Chloe", "Samuel",
    "Rachel", "Nathan", "Olivia", "Marcus", "Fiona", "Adrian", "Vanessa",
];

const WESTERN_LAST: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Taylor", "Anderson", "Thomas", "Harris", "Martin",
    "Thompson", "White", "Clark", "Lewis", "Walker", "Hall", "Young",
];

const MALAY_MALE_FIRST: &[&str] = &[
    "Ahmad", "Muhammad", "Faiz", "Hafiz", "Azlan", "Syafiq", "Firdaus", "Imran", "Hakim", "Irfan",
    "Danish", "Aiman",
];

const MALAY_FEMALE_FIRST: &[&str] = &[
    "Siti", "Nur", "Aisyah", "Amirah", "Hana", "Farah", "Nadiah", "Zahra", "Hidayah", "Liyana",
    "Balqis", "Maryam",
];

const MALAY_FATHER: &[&str] = &[
    "Abdullah", "Ismail", "Hussain", "Rahim", "Yusof", "Osman", "Ali", "Ibrahim", "Salleh",
    "Razak", "Khalid", "Hamid",
];

const TAMIL_MALE_FIRST: &[&str] = &[
    "Arun", "Kumar", "Rajesh", "Suresh", "Vijay", "Ravi", "Ganesh", "Prakash", "Ramesh",
    "Karthik", "Anand", "Dinesh",
];

const TAMIL_FEMALE_FIRST: &[&str] = &[
    "Priya", "Lakshmi", "Anitha", "Deepa", "Kavitha", "Revathi", "Meena", "Divya", "Radha",
    "Nandini", "Sangeetha", "Shanthi",
];

const TAMIL_FATHER: &[&str] = &[
    "Rajendran", "Ganesan", "Subramaniam", "Balakrishnan", "Ramasamy", "Sivakumar", "Venkatesan",
    "Krishnan", "Natarajan", "Murugan", "Shanmugam", "Arumugam",
];

/// Pick a generative pattern according to the demographic weights.
fn pick_pattern(rng: &mut Rng) -> NamePattern {
    let mut r = rng.gen_range(100) as u32;
    for &(pattern, weight) in PATTERN_WEIGHTS {
        if r < weight {
            return pattern;
        }
        r -= weight;
    }
    NamePattern::Western
}

/// Synthesize one full name, returning it with the pattern it came from.
pub fn generate(rng: &mut Rng) -> (String, NamePattern) {
    let pattern = pick_pattern(rng);
    (generate_with(pattern, rng), pattern)
}

/// Synthesize one full name for a specific pattern.
pub fn generate_with(pattern: NamePattern, rng: &mut Rng) -> String {
    match pattern {
        NamePattern::ChineseMixed => format!(
            "{} {} {}",
            rng.choose(WESTERN_FIRST),
            rng.choose(CHINESE_SURNAMES),
            rng.choose(CHINESE_GIVEN)
        ),
        NamePattern::ChinesePinyin => format!(
            "{} {}",
            rng.choose(CHINESE_SURNAMES),
            rng.choose(CHINESE_GIVEN)
        ),
        NamePattern::MalayPatronymic => {
            if rng.gen_bool(0.5) {
                format!(
                    "{} bin {}",
                    rng.choose(MALAY_MALE_FIRST),
                    rng.choose(MALAY_FATHER)
                )
            } else {
                format!(
                    "{} binti {}",
                    rng.choose(MALAY_FEMALE_FIRST),
                    rng.choose(MALAY_FATHER)
                )
            }
        }
        NamePattern::TamilPatronymic => {
            if rng.gen_bool(0.5) {
                format!(
                    "{} s/o {}",
                    rng.choose(TAMIL_MALE_FIRST),
                    rng.choose(TAMIL_FATHER)
                )
            } else {
                format!(
                    "{} d/o {}",
                    rng.choose(TAMIL_FEMALE_FIRST),
                    rng.choose(TAMIL_FATHER)
                )
            }
        }
        NamePattern::Western => format!(
            "{} {}",
            rng.choose(WESTERN_FIRST),
            rng.choose(WESTERN_LAST)
        ),
    }
}
