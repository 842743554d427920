use crate::dedup::dedup_title;
use crate::model::JobRecord;

use super::lines::{LineKind, LineVocabulary};

/// Company, title and the repeated company name.
pub const MIN_BLOCK_LINES: usize = 3;

const LOGO_SUFFIX: &str = " logo";

/// Split a document on blank lines. Each block is its trimmed, non-empty lines.
pub fn split_blocks(raw: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooShort,
    MissingCompany,
    MissingTitle,
}

/// Build a record from one block. Numeric and category fields are left for
/// the normalizer and the categorizer.
pub fn extract_record(lines: &[&str], vocab: &LineVocabulary) -> Result<JobRecord, Rejection> {
    if lines.len() < MIN_BLOCK_LINES {
        return Err(Rejection::TooShort);
    }

    let company = company_name(lines[0]);
    let title = dedup_title(lines[1]).trim().to_string();

    let mut record = JobRecord {
        company,
        title,
        ..JobRecord::default()
    };

    // lines[2] repeats the company name.
    for line in &lines[3..] {
        match vocab.classify(line) {
            LineKind::Location => record.location = line.to_string(),
            LineKind::Salary => record.salary_text = line.to_string(),
            LineKind::TimePosted => record.time_posted_text = line.to_string(),
            LineKind::Tag => record.tags.push(line.to_string()),
            LineKind::Unknown => {}
        }
    }

    if record.company.is_empty() {
        return Err(Rejection::MissingCompany);
    }
    if record.title.is_empty() {
        return Err(Rejection::MissingTitle);
    }
    Ok(record)
}

fn company_name(line: &str) -> String {
    let line = line.trim_end();
    line.strip_suffix(LOGO_SUFFIX).unwrap_or(line).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_blank_lines() {
        let blocks = split_blocks("a\nb\n\n\n  \nc\r\nd\n");
        assert_eq!(blocks, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn empty_document() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("\n\n   \n").is_empty());
    }

    #[test]
    fn full_block() {
        let lines = [
            "Acme Corp logo",
            "Software EngineerSoftware Engineer",
            "Acme Corp",
            "Remote - Argentina",
            "$50,000/yr",
            "3 days ago",
            "Easy Apply",
        ];
        let record = extract_record(&lines, &LineVocabulary::default()).unwrap();
        assert_eq!(record.company, "Acme Corp");
        assert_eq!(record.title, "Software Engineer");
        assert_eq!(record.location, "Remote - Argentina");
        assert_eq!(record.salary_text, "$50,000/yr");
        assert_eq!(record.time_posted_text, "3 days ago");
        assert_eq!(record.tags, vec!["Easy Apply"]);
    }

    #[test]
    fn last_match_wins_and_tags_accumulate() {
        let lines = [
            "Beta logo",
            "Designer",
            "Beta",
            "Buenos Aires",
            "Remote",
            "Viewed",
            "Easy Apply",
            "1 week ago",
            "2 weeks ago",
        ];
        let record = extract_record(&lines, &LineVocabulary::default()).unwrap();
        assert_eq!(record.location, "Remote");
        assert_eq!(record.time_posted_text, "2 weeks ago");
        assert_eq!(record.tags, vec!["Viewed", "Easy Apply"]);
    }

    #[test]
    fn company_line_without_logo_suffix() {
        let lines = ["Gamma", "Recruiter", "Gamma"];
        let record = extract_record(&lines, &LineVocabulary::default()).unwrap();
        assert_eq!(record.company, "Gamma");
        assert!(record.location.is_empty());
        assert!(record.tags.is_empty());
    }

    #[test]
    fn rejections() {
        let vocab = LineVocabulary::default();
        assert_eq!(
            extract_record(&["Acme logo", "Engineer"], &vocab),
            Err(Rejection::TooShort)
        );
        assert_eq!(
            extract_record(&["Acme logo", "   ", "Acme"], &vocab),
            Err(Rejection::MissingTitle)
        );
        assert_eq!(
            extract_record(&[" logo", "Engineer", "x"], &vocab),
            Err(Rejection::MissingCompany)
        );
    }
}
