/// One parsed listing. Created by the parser, filled in by the normalizer
/// and the categorizer, then serialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobRecord {
    pub company: String,
    pub title: String,
    pub location: String,
    pub salary_text: String,
    pub time_posted_text: String,
    pub tags: Vec<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub days_ago: Option<f64>,
    pub category: String,
    pub category_confidence: f64,
    pub matched_keywords: Vec<String>,
}

pub const TAG_SEPARATOR: &str = "; ";

/// Column order of the persisted dataset.
pub const COLUMNS: [&str; 12] = [
    "company",
    "title",
    "location",
    "salary",
    "time_posted",
    "tags",
    "salary_min",
    "salary_max",
    "days_ago",
    "category",
    "category_confidence",
    "matched_keywords",
];

impl JobRecord {
    pub fn tags_joined(&self) -> String {
        self.tags.join(TAG_SEPARATOR)
    }

    pub fn keywords_joined(&self) -> String {
        self.matched_keywords.join(TAG_SEPARATOR)
    }
}
