//! Keyword, pattern and exclusion scoring of job titles.

pub mod builtin;
pub mod taxonomy;

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::model::JobRecord;
pub use taxonomy::{Category, Taxonomy};

/// Result for titles no category claims.
pub const OTHER: &str = "Other";
const MAX_CONFIDENCE: f64 = 100.0;

static PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());
static SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub category: String,
    pub confidence: f64,
    pub matched: Vec<String>,
}

impl Classification {
    pub fn other() -> Self {
        Classification {
            category: OTHER.to_string(),
            confidence: 0.0,
            matched: Vec::new(),
        }
    }
}

/// Lowercase, punctuation to spaces, single spaces, trimmed.
pub fn clean_title(title: &str) -> String {
    let lower = title.to_lowercase();
    let spaced = PUNCT_RE.replace_all(&lower, " ");
    SPACE_RE.replace_all(&spaced, " ").trim().to_string()
}

struct Candidate<'a> {
    category: &'a Category,
    score: f64,
    matched: Vec<String>,
}

impl Category {
    fn excludes(&self, cleaned: &str, raw_lower: &str) -> bool {
        self.exclusions.iter().any(|e| {
            cleaned.contains(e.as_str()) || (self.raw_exclusions && raw_lower.contains(e.as_str()))
        })
    }

    /// Score a cleaned title. `None` when an exclusion vetoes the category.
    fn score(&self, cleaned: &str, raw_lower: &str) -> Option<(f64, Vec<String>)> {
        if self.excludes(cleaned, raw_lower) {
            return None;
        }

        let mut score = 0.0;
        let mut matched = Vec::new();

        for keyword in self.primary.iter().chain(&self.technologies) {
            if cleaned.contains(keyword.phrase.as_str()) {
                score += keyword.weight;
                matched.push(keyword.phrase.clone());
            }
        }

        for pattern in &self.patterns {
            if pattern.is_match(cleaned) {
                score += self.pattern_weight;
                matched.push(format!("pattern_{}", pattern.as_str()));
            }
        }

        for word in cleaned.split(' ') {
            if self.technologies.iter().any(|t| t.phrase == word) {
                score += self.word_technology;
                matched.push(word.to_string());
            }
            for primary in &self.primary {
                if primary.tokens.iter().any(|t| t == word) {
                    score += self.word_primary;
                    matched.push(word.to_string());
                }
            }
        }

        Some((score, matched))
    }
}

impl Taxonomy {
    /// Assign `title` to exactly one category, or to [`OTHER`].
    ///
    /// Highest score wins and ties go to the category declared first. A top
    /// candidate below its own `min_score` yields to the best candidate that
    /// clears its floor; when none does, the top candidate stands.
    pub fn categorize(&self, title: &str) -> Classification {
        let cleaned = clean_title(title);
        if cleaned.is_empty() {
            return Classification::other();
        }
        let raw_lower = title.to_lowercase();

        let mut candidates: Vec<Candidate> = self
            .categories
            .iter()
            .filter_map(|category| {
                let (score, matched) = category.score(&cleaned, &raw_lower)?;
                (score > 0.0).then_some(Candidate {
                    category,
                    score,
                    matched,
                })
            })
            .collect();

        // stable: equal scores keep declaration order
        candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        if candidates.is_empty() {
            return Classification::other();
        }
        let chosen = candidates
            .iter()
            .position(|c| c.category.meets_floor(c.score))
            .unwrap_or(0);
        let winner = candidates.swap_remove(chosen);

        Classification {
            category: winner.category.name.clone(),
            confidence: winner.score.min(MAX_CONFIDENCE),
            matched: winner.matched,
        }
    }
}

pub fn categorize_record(record: &mut JobRecord, taxonomy: &Taxonomy) {
    let Classification {
        category,
        confidence,
        matched,
    } = taxonomy.categorize(&record.title);
    record.category = category;
    record.category_confidence = confidence;
    record.matched_keywords = matched;
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::taxonomy::{CategoryRule, TaxonomyFile};
    use super::*;

    fn builtin(title: &str) -> Classification {
        Taxonomy::builtin().categorize(title)
    }

    #[test]
    fn cleaning() {
        assert_eq!(clean_title("  Senior  C++/Rust Dev!! "), "senior c rust dev");
        assert_eq!(clean_title("Kinesiólogo"), "kinesiólogo");
        assert_eq!(clean_title("!!!"), "");
    }

    #[test]
    fn software_engineer() {
        let result = builtin("Software Engineer");
        assert_eq!(result.category, "Software Engineer");
        assert_eq!(result.confidence, 62.0);
        assert_eq!(result.matched[0], "software engineer");

        let result = builtin("Senior React Developer");
        assert_eq!(result.category, "Software Engineer");
        assert_eq!(result.confidence, 100.0);
        assert!(result.matched.contains(&"react".to_string()));
    }

    #[test]
    fn data_science_uses_tuned_weights() {
        let result = builtin("Data Scientist");
        assert_eq!(result.category, "Data Science");
        assert_eq!(result.confidence, 61.0);
        assert_eq!(result.matched[0], "data scientist");
        assert!(result.matched[1].starts_with("pattern_"));

        // lone candidate below its floor still stands
        let result = builtin("Data Science");
        assert_eq!(result.category, "Data Science");
        assert_eq!(result.confidence, 10.0);
    }

    #[test]
    fn pattern_and_word_scores() {
        let result = builtin("QA");
        assert_eq!(result.category, "QA/Testing");
        assert_eq!(result.confidence, 36.0);
        assert_eq!(result.matched.len(), 3);
    }

    #[test]
    fn nothing_matches() {
        assert_eq!(builtin("!!!"), Classification::other());
        assert_eq!(builtin(""), Classification::other());
        assert_eq!(builtin("Chef").category, OTHER);
    }

    #[test]
    fn exclusions_veto() {
        let taxonomy = Taxonomy::builtin();
        let mut checked = 0;
        for category in taxonomy.categories.iter().filter(|c| !c.exclusions.is_empty()) {
            // without raw matching only phrases that survive cleaning can veto
            let exclusions = category
                .exclusions
                .iter()
                .filter(|e| category.raw_exclusions || clean_title(e) == **e);
            for exclusion in exclusions {
                for primary in &category.primary {
                    let title = format!("{} {}", primary.phrase, exclusion);
                    let result = taxonomy.categorize(&title);
                    assert_ne!(result.category, category.name, "{title}");
                    checked += 1;
                }
            }
        }
        assert!(checked > 1000, "only {checked} titles checked");
    }

    #[test]
    fn punctuated_exclusions_need_raw_matching() {
        let make = |raw_exclusions: bool| {
            let mut rule = CategoryRule::new("Systems");
            rule.primary = vec!["systems programmer".into()];
            rule.exclusions = vec!["c++".into()];
            rule.raw_exclusions = raw_exclusions;
            Taxonomy::compile(TaxonomyFile {
                categories: vec![rule],
            })
            .unwrap()
        };

        let cleaned_only = make(false);
        assert_eq!(cleaned_only.categorize("C++ Systems Programmer").category, "Systems");

        let raw = make(true);
        assert_eq!(raw.categorize("Systems Programmer").category, "Systems");
        assert_eq!(raw.categorize("C++ Systems Programmer").category, OTHER);
    }

    #[test]
    fn builtin_golden_titles() {
        let golden = [
            ("Software Engineer", "Software Engineer", 62.0),
            ("Senior React Developer", "Software Engineer", 100.0),
            ("Immigration Paralegal", "Legal", 76.0),
            ("Data Scientist", "Data Science", 61.0),
            ("C# Data Analyst", "Data Science", 63.0),
            (".NET Data Engineer", "Data Science", 80.0),
            ("C++ Data Scientist", "Data Science", 61.0),
            ("Machine Learning Engineer", "Data Science", 100.0),
            ("Data Science", "Data Science", 10.0),
            ("Registered Nurse", "Data Science", 15.0),
            ("Virtual Assistant", "Administrative", 88.0),
            ("Sales Representative", "Sales", 80.0),
            ("Appointment Setter", "Sales", 26.0),
            ("Video Editor", "Video/Media", 91.0),
            ("Kinesiólogo", "Healthcare/Medical", 53.0),
            ("UX Designer", "Design", 86.0),
            ("DevOps Engineer", "DevOps", 83.0),
            ("Customer Support Agent", "Customer Support", 80.0),
            ("Financial Analyst", "Finance/Accounting", 100.0),
            ("Content Writer", "Content Creation", 97.0),
            ("SEO Specialist", "Marketing", 97.0),
            ("QA", "QA/Testing", 36.0),
        ];
        for (title, category, confidence) in golden {
            let result = builtin(title);
            assert_eq!(result.category, category, "{title}");
            assert!(
                (result.confidence - confidence).abs() < 1e-9,
                "{title}: {} != {confidence}",
                result.confidence
            );
        }
    }

    #[test]
    fn results_stay_in_range() {
        let taxonomy = Taxonomy::builtin();
        let titles = [
            "Software Engineer",
            "Immigration Paralegal",
            "Virtual Assistant",
            "Sales Representative",
            "Video Editor",
            "Kinesiólogo",
            "German Translator",
            "SEO Specialist",
            "Talent Acquisition Partner",
            "UX Designer",
            "Content Writer",
            "DevOps Engineer",
            "Customer Support Agent",
            "Financial Analyst",
            "Quantitative Trader",
            "Python Data Analyst",
            "Trainee",
            "",
            "???",
        ];
        for title in titles {
            let result = taxonomy.categorize(title);
            assert!(
                result.category == OTHER || taxonomy.contains(&result.category),
                "{title} -> {}",
                result.category
            );
            assert!((0.0..=100.0).contains(&result.confidence));
            assert_eq!(result, taxonomy.categorize(title));
        }
    }

    #[test]
    fn ties_go_to_first_declared() {
        let make = |names: [&str; 2]| {
            let categories = names
                .iter()
                .map(|name| {
                    let mut rule = CategoryRule::new(name);
                    rule.primary = vec!["operator".into()];
                    rule
                })
                .collect();
            Taxonomy::compile(TaxonomyFile { categories }).unwrap()
        };
        assert_eq!(make(["Alpha", "Beta"]).categorize("Operator").category, "Alpha");
        assert_eq!(make(["Beta", "Alpha"]).categorize("Operator").category, "Beta");
    }

    #[test]
    fn floor_yields_to_next_candidate() {
        let mut strict = CategoryRule::new("Strict");
        strict.primary = vec!["night shift".into()];
        strict.min_score = Some(50.0);
        let mut loose = CategoryRule::new("Loose");
        loose.technologies = vec!["shift".into()];

        let taxonomy = Taxonomy::compile(TaxonomyFile {
            categories: vec![strict, loose],
        })
        .unwrap();
        // Strict: 20 + 3 + 3 = 26, below its floor. Loose: 10 + 5 = 15.
        let result = taxonomy.categorize("Night Shift");
        assert_eq!(result.category, "Loose");
        assert_eq!(result.confidence, 15.0);
    }

    #[test]
    fn fixture_taxonomy() {
        let taxonomy = Taxonomy::from_path(Path::new("tests/fixtures/taxonomy.json")).unwrap();

        let result = taxonomy.categorize("Software Traine");
        assert_eq!(result.category, "Software Engineer");
        assert_eq!(result.confidence, 32.0);

        assert_eq!(
            taxonomy.categorize("Apointment Seter for US-based company").category,
            "Sales"
        );
        assert_eq!(
            taxonomy.categorize("Frelance AI Agent Asistant").confidence,
            90.0
        );
        // Sales scores 23 under its floor of 25
        let result = taxonomy.categorize("Vendedor Python");
        assert_eq!(result.category, "Software Engineer");
        assert_eq!(result.confidence, 18.0);
        assert_eq!(result.matched, vec!["python", "python", "python"]);
    }

    #[test]
    fn fills_record() {
        let mut record = JobRecord {
            title: "Immigration Paralegal".into(),
            ..JobRecord::default()
        };
        categorize_record(&mut record, Taxonomy::builtin());
        assert_eq!(record.category, "Legal");
        assert_eq!(record.category_confidence, 76.0);
        assert!(record.matched_keywords.contains(&"paralegal".to_string()));
    }
}
