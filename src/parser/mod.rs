pub mod blocks;
pub mod lines;

use tracing::debug;

use crate::model::JobRecord;
use blocks::{extract_record, split_blocks, Rejection};
use lines::LineVocabulary;

/// Per-document parse counters. Dropped blocks never abort the batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub blocks: usize,
    pub too_short: usize,
    pub missing_company: usize,
    pub missing_title: usize,
}

impl ParseReport {
    pub fn dropped(&self) -> usize {
        self.too_short + self.missing_company + self.missing_title
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    pub records: Vec<JobRecord>,
    pub report: ParseReport,
}

/// Split the document into blocks and extract one record per valid block,
/// in input order.
pub fn parse_document(raw: &str, vocab: &LineVocabulary) -> ParsedDocument {
    let mut parsed = ParsedDocument::default();

    for (idx, lines) in split_blocks(raw).into_iter().enumerate() {
        parsed.report.blocks += 1;
        match extract_record(&lines, vocab) {
            Ok(record) => parsed.records.push(record),
            Err(reason) => {
                debug!(block = idx, ?reason, first_line = lines[0], "dropping block");
                match reason {
                    Rejection::TooShort => parsed.report.too_short += 1,
                    Rejection::MissingCompany => parsed.report.missing_company += 1,
                    Rejection::MissingTitle => parsed.report.missing_title += 1,
                }
            }
        }
    }

    parsed
}
