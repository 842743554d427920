use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::builtin::builtin_rules;
use super::OTHER;
use crate::error::TaxonomyError;

static BUILTIN: LazyLock<Taxonomy> = LazyLock::new(|| {
    Taxonomy::compile(TaxonomyFile {
        categories: builtin_rules(),
    })
    .expect("built-in taxonomy compiles")
});

/// On-disk form of a taxonomy. Category order is significant: it breaks
/// score ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyFile {
    pub categories: Vec<CategoryRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub name: String,
    #[serde(default)]
    pub primary: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub weights: Weights,
    /// A category whose best score stays below this loses to the next
    /// candidate that clears its own floor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    /// Also match exclusions against the lowercased raw title, so phrases
    /// with punctuation (`c++`, `node.js`) can veto.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub raw_exclusions: bool,
}

impl CategoryRule {
    pub fn new(name: &str) -> Self {
        CategoryRule {
            name: name.to_string(),
            primary: Vec::new(),
            technologies: Vec::new(),
            exclusions: Vec::new(),
            patterns: Vec::new(),
            weights: Weights::default(),
            min_score: None,
            raw_exclusions: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub primary: KeywordWeight,
    pub technology: KeywordWeight,
    pub pattern: f64,
    pub word_technology: f64,
    pub word_primary: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            primary: KeywordWeight::flat(20.0),
            technology: KeywordWeight::flat(10.0),
            pattern: 30.0,
            word_technology: 5.0,
            word_primary: 3.0,
        }
    }
}

/// Weight of a phrase match: `base`, or `boost.weight` for phrases that
/// contain one of the boost markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordWeight {
    pub base: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boost: Option<Boost>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boost {
    pub weight: f64,
    pub markers: Vec<String>,
}

impl KeywordWeight {
    pub fn flat(base: f64) -> Self {
        KeywordWeight { base, boost: None }
    }

    pub fn boosted(base: f64, weight: f64, markers: &[&str]) -> Self {
        KeywordWeight {
            base,
            boost: Some(Boost {
                weight,
                markers: markers.iter().map(|m| m.to_string()).collect(),
            }),
        }
    }

    pub fn weight_for(&self, phrase: &str) -> f64 {
        match &self.boost {
            Some(boost) if boost.markers.iter().any(|m| phrase.contains(m.as_str())) => boost.weight,
            _ => self.base,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Keyword {
    pub phrase: String,
    pub weight: f64,
    pub tokens: Vec<String>,
}

impl Keyword {
    fn new(phrase: &str, weight: &KeywordWeight) -> Self {
        let phrase = phrase.to_lowercase();
        Keyword {
            weight: weight.weight_for(&phrase),
            tokens: phrase.split_whitespace().map(str::to_string).collect(),
            phrase,
        }
    }
}

/// A compiled category, ready for scoring.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub(crate) primary: Vec<Keyword>,
    pub(crate) technologies: Vec<Keyword>,
    pub(crate) exclusions: Vec<String>,
    pub(crate) patterns: Vec<Regex>,
    pub(crate) pattern_weight: f64,
    pub(crate) word_technology: f64,
    pub(crate) word_primary: f64,
    pub(crate) min_score: Option<f64>,
    pub(crate) raw_exclusions: bool,
    rule: CategoryRule,
}

impl Category {
    fn compile(rule: CategoryRule) -> Result<Self, TaxonomyError> {
        let name = rule.name.trim().to_string();
        if name.is_empty() {
            return Err(TaxonomyError::EmptyName);
        }
        if name == OTHER {
            return Err(TaxonomyError::Reserved(name));
        }

        let patterns = rule
            .patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| TaxonomyError::Pattern {
                        category: name.clone(),
                        pattern: p.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let weights = &rule.weights;
        Ok(Category {
            primary: rule
                .primary
                .iter()
                .map(|p| Keyword::new(p, &weights.primary))
                .collect(),
            technologies: rule
                .technologies
                .iter()
                .map(|t| Keyword::new(t, &weights.technology))
                .collect(),
            exclusions: rule.exclusions.iter().map(|e| e.to_lowercase()).collect(),
            patterns,
            pattern_weight: weights.pattern,
            word_technology: weights.word_technology,
            word_primary: weights.word_primary,
            min_score: rule.min_score,
            raw_exclusions: rule.raw_exclusions,
            name,
            rule,
        })
    }

    pub(crate) fn meets_floor(&self, score: f64) -> bool {
        self.min_score.map_or(true, |floor| score >= floor)
    }
}

/// Immutable category table. Build once, share by reference.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    pub(crate) categories: Vec<Category>,
}

impl Taxonomy {
    pub fn compile(file: TaxonomyFile) -> Result<Self, TaxonomyError> {
        let mut seen = HashSet::new();
        let mut categories = Vec::with_capacity(file.categories.len());
        for rule in file.categories {
            let category = Category::compile(rule)?;
            if !seen.insert(category.name.clone()) {
                return Err(TaxonomyError::Duplicate(category.name));
            }
            categories.push(category);
        }
        Ok(Taxonomy { categories })
    }

    pub fn from_path(path: &Path) -> Result<Self, TaxonomyError> {
        let text = std::fs::read_to_string(path).map_err(|source| TaxonomyError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: TaxonomyFile =
            serde_json::from_str(&text).map_err(|source| TaxonomyError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::compile(file)
    }

    pub fn builtin() -> &'static Taxonomy {
        &BUILTIN
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn to_file(&self) -> TaxonomyFile {
        TaxonomyFile {
            categories: self.categories.iter().map(|c| c.rule.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_compiles() {
        let taxonomy = Taxonomy::builtin();
        assert_eq!(taxonomy.len(), 17);
        assert_eq!(taxonomy.names().next(), Some("Software Engineer"));
        assert!(taxonomy.contains("Data Science"));
        assert!(!taxonomy.contains(OTHER));
    }

    #[test]
    fn boosted_weights() {
        let weight = KeywordWeight::boosted(5.0, 25.0, &["data scientist", "machine learning"]);
        assert_eq!(weight.weight_for("machine learning engineer"), 25.0);
        assert_eq!(weight.weight_for("deep learning"), 5.0);
        assert_eq!(KeywordWeight::flat(20.0).weight_for("anything"), 20.0);
    }

    #[test]
    fn rejects_bad_pattern() {
        let mut rule = CategoryRule::new("Broken");
        rule.patterns.push(r"\b(unclosed".into());
        let err = Taxonomy::compile(TaxonomyFile {
            categories: vec![rule],
        })
        .unwrap_err();
        assert!(matches!(err, TaxonomyError::Pattern { ref category, .. } if category == "Broken"));
    }

    #[test]
    fn rejects_duplicate_and_reserved_names() {
        let dup = Taxonomy::compile(TaxonomyFile {
            categories: vec![CategoryRule::new("Sales"), CategoryRule::new("Sales")],
        });
        assert!(matches!(dup, Err(TaxonomyError::Duplicate(ref n)) if n == "Sales"));

        let reserved = Taxonomy::compile(TaxonomyFile {
            categories: vec![CategoryRule::new(OTHER)],
        });
        assert!(matches!(reserved, Err(TaxonomyError::Reserved(_))));

        let empty = Taxonomy::compile(TaxonomyFile {
            categories: vec![CategoryRule::new("  ")],
        });
        assert!(matches!(empty, Err(TaxonomyError::EmptyName)));
    }

    #[test]
    fn json_defaults_to_standard_weights() {
        let file: TaxonomyFile =
            serde_json::from_str(r#"{"categories":[{"name":"Ops","primary":["ops lead"]}]}"#).unwrap();
        assert_eq!(file.categories[0].weights, Weights::default());
        assert_eq!(file.categories[0].min_score, None);
        assert!(!file.categories[0].raw_exclusions);
    }

    #[test]
    fn builtin_round_trips_through_json() {
        let file = Taxonomy::builtin().to_file();
        let json = serde_json::to_string(&file).unwrap();
        let back: TaxonomyFile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, file);
    }

    #[test]
    fn fixture_file_loads() {
        let taxonomy = Taxonomy::from_path(Path::new("tests/fixtures/taxonomy.json")).unwrap();
        assert_eq!(
            taxonomy.names().collect::<Vec<_>>(),
            vec!["Software Engineer", "AI/ML Engineer", "Sales"]
        );
    }

    #[test]
    fn missing_file() {
        let err = Taxonomy::from_path(Path::new("tests/fixtures/nope.json")).unwrap_err();
        assert!(matches!(err, TaxonomyError::Read { .. }));
    }
}
