use std::collections::{HashMap, HashSet};
use std::fmt;

/// Classification bucket for a discovered marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Solo,
    SoloFemale,
    SoloMale,
    Duo,
    Couple,
}

impl Category {
    /// Order in which category blocks are written to the manifest.
    pub const EMISSION_ORDER: [Self; 5] = [
        Self::Solo,
        Self::SoloFemale,
        Self::SoloMale,
        Self::Duo,
        Self::Couple,
    ];

    /// Classify a marker line by case-insensitive substring, first match
    /// wins. Priority matters: "female" contains "male", and the paired
    /// categories outrank the solo ones.
    pub fn classify(line: &str) -> Self {
        let lower = line.to_lowercase();
        if lower.contains("couple") {
            Self::Couple
        } else if lower.contains("duo") {
            Self::Duo
        } else if lower.contains("female") {
            Self::SoloFemale
        } else if lower.contains("male") {
            Self::SoloMale
        } else {
            Self::Solo
        }
    }

    /// Display label used for manifest category headers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Solo => "SOLO",
            Self::SoloFemale => "SOLO FEMALE",
            Self::SoloMale => "SOLO MALE",
            Self::Duo => "DUO",
            Self::Couple => "COUPLE",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Solo => "solo",
            Self::SoloFemale => "solo_female",
            Self::SoloMale => "solo_male",
            Self::Duo => "duo",
            Self::Couple => "couple",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Default, Clone)]
struct Bucket {
    lines: Vec<String>,
    seen: HashSet<String>,
}

/// Per-category ordered collection of unique marker lines. Insertion
/// order is preserved; duplicates (exact trimmed text, per category) are
/// rejected. Built fresh per scan, never persisted directly.
#[derive(Debug, Default, Clone)]
pub struct CategoryMap {
    buckets: HashMap<Category, Bucket>,
}

impl CategoryMap {
    /// Record a line under a category. Returns false when the exact line
    /// was already recorded in that category.
    pub fn insert(&mut self, category: Category, line: &str) -> bool {
        let bucket = self.buckets.entry(category).or_default();
        if !bucket.seen.insert(line.to_string()) {
            return false;
        }
        bucket.lines.push(line.to_string());
        true
    }

    /// Lines recorded for a category, in insertion order.
    pub fn lines(&self, category: Category) -> &[String] {
        self.buckets
            .get(&category)
            .map(|b| b.lines.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(|b| b.lines.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(|b| b.lines.is_empty())
    }
}
