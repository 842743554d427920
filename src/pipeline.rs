use std::path::Path;

use tracing::{debug, info};

use crate::categorize::{categorize_record, Taxonomy};
use crate::dedup::repair_document;
use crate::error::InputError;
use crate::model::JobRecord;
use crate::normalize::{normalize_record, UnspecifiedPeriod};
use crate::parser::lines::LineVocabulary;
use crate::parser::{parse_document, ParseReport};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Everything one run produces, records in input block order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<JobRecord>,
    pub report: ParseReport,
    pub titles_repaired: usize,
    /// The input with titles repaired and short blocks removed.
    pub repaired: String,
}

pub struct Pipeline<'a> {
    pub taxonomy: &'a Taxonomy,
    pub vocabulary: &'a LineVocabulary,
    pub salary_policy: UnspecifiedPeriod,
    pub parallel: bool,
}

impl<'a> Pipeline<'a> {
    pub fn new(taxonomy: &'a Taxonomy, vocabulary: &'a LineVocabulary) -> Self {
        Pipeline {
            taxonomy,
            vocabulary,
            salary_policy: UnspecifiedPeriod::default(),
            parallel: true,
        }
    }

    pub fn run(&self, raw: &str) -> Dataset {
        let repaired = repair_document(raw);
        info!(
            blocks = repaired.blocks,
            titles_repaired = repaired.titles_changed,
            "repaired titles"
        );

        // Parsing dedups titles on its own, so the raw text gives the same
        // records as the repaired one and keeps the short-block count.
        let parsed = parse_document(raw, self.vocabulary);
        info!(
            records = parsed.records.len(),
            dropped = parsed.report.dropped(),
            "parsed document"
        );

        let records = self.enrich(parsed.records);
        Dataset {
            records,
            report: parsed.report,
            titles_repaired: repaired.titles_changed,
            repaired: repaired.text,
        }
    }

    fn enrich_one(&self, mut record: JobRecord) -> JobRecord {
        normalize_record(&mut record, self.salary_policy);
        categorize_record(&mut record, self.taxonomy);
        debug!(
            company = %record.company,
            title = %record.title,
            category = %record.category,
            confidence = record.category_confidence,
            "categorized"
        );
        record
    }

    #[cfg(feature = "rayon")]
    fn enrich(&self, records: Vec<JobRecord>) -> Vec<JobRecord> {
        if !self.parallel {
            return records.into_iter().map(|r| self.enrich_one(r)).collect();
        }
        // indexed collect keeps input order
        records.into_par_iter().map(|r| self.enrich_one(r)).collect()
    }

    #[cfg(not(feature = "rayon"))]
    fn enrich(&self, records: Vec<JobRecord>) -> Vec<JobRecord> {
        records.into_iter().map(|r| self.enrich_one(r)).collect()
    }
}

/// Read the input document. A missing file is reported before anything is
/// written.
pub fn read_input(path: &Path) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::Missing(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}
