use serde::{Deserialize, Serialize};

/// Where a detail line of a listing ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Location,
    Salary,
    TimePosted,
    Tag,
    Unknown,
}

/// Phrase lists used to sort detail lines into buckets. Matching is a
/// case-insensitive substring test; phrases are stored lowercase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineVocabulary {
    pub location: Vec<String>,
    pub salary: Vec<String>,
    pub time_posted: Vec<String>,
    pub tags: Vec<String>,
}

const LOCATION: &[&str] = &[
    "argentina",
    "remote",
    "latin america",
    "buenos aires",
    "córdoba",
    "mendoza",
];
const SALARY: &[&str] = &["$", "/yr", "/month", "k/yr"];
const TIME_POSTED: &[&str] = &["ago", "hours", "days", "weeks", "months", "years"];
const TAGS: &[&str] = &[
    "easy apply",
    "actively reviewing",
    "viewed",
    "be an early applicant",
    "you'd be a top applicant",
];

impl Default for LineVocabulary {
    fn default() -> Self {
        let owned = |list: &[&str]| -> Vec<String> { list.iter().map(|s| s.to_string()).collect() };
        LineVocabulary {
            location: owned(LOCATION),
            salary: owned(SALARY),
            time_posted: owned(TIME_POSTED),
            tags: owned(TAGS),
        }
    }
}

impl LineVocabulary {
    /// Lowercase every phrase so user-supplied lists match like the defaults.
    pub fn normalized(mut self) -> Self {
        for list in [
            &mut self.location,
            &mut self.salary,
            &mut self.time_posted,
            &mut self.tags,
        ] {
            for phrase in list.iter_mut() {
                *phrase = phrase.to_lowercase();
            }
        }
        self
    }

    /// First matching bucket wins, in location / salary / time / tag order.
    pub fn classify(&self, line: &str) -> LineKind {
        let lower = line.to_lowercase();
        if contains_any(&lower, &self.location) {
            LineKind::Location
        } else if contains_any(&lower, &self.salary) {
            LineKind::Salary
        } else if contains_any(&lower, &self.time_posted) {
            LineKind::TimePosted
        } else if contains_any(&lower, &self.tags) {
            LineKind::Tag
        } else {
            LineKind::Unknown
        }
    }
}

fn contains_any(lower: &str, needles: &[String]) -> bool {
    needles.iter().any(|n| lower.contains(n.as_str()))
}
