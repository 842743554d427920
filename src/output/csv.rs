use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::model::{JobRecord, COLUMNS};

/// One CSV line. Field order is the column order; absent numbers are empty.
#[derive(Debug, Serialize)]
struct Row<'a> {
    company: &'a str,
    title: &'a str,
    location: &'a str,
    salary: &'a str,
    time_posted: &'a str,
    tags: String,
    salary_min: Option<f64>,
    salary_max: Option<f64>,
    days_ago: Option<f64>,
    category: &'a str,
    category_confidence: f64,
    matched_keywords: String,
}

impl<'a> From<&'a JobRecord> for Row<'a> {
    fn from(r: &'a JobRecord) -> Self {
        Row {
            company: &r.company,
            title: &r.title,
            location: &r.location,
            salary: &r.salary_text,
            time_posted: &r.time_posted_text,
            tags: r.tags_joined(),
            salary_min: r.salary_min,
            salary_max: r.salary_max,
            days_ago: r.days_ago,
            category: &r.category,
            category_confidence: r.category_confidence,
            matched_keywords: r.keywords_joined(),
        }
    }
}

pub fn write_records<W: io::Write>(writer: W, records: &[JobRecord]) -> Result<()> {
    // header written up front so an empty dataset still has one
    let mut wtr = ::csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(COLUMNS)?;
    for record in records {
        wtr.serialize(Row::from(record))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_file(path: &Path, records: &[JobRecord]) -> Result<()> {
    let file = std::fs::File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
    write_records(io::BufWriter::new(file), records)
        .with_context(|| format!("Failed to write {:?}", path))
}
