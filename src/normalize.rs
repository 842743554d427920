use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::JobRecord;

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$?([\d,]+(?:\.\d+)?)").unwrap());
static RECENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(hour|day|week|month|year)").unwrap());

const ANNUAL_MARKERS: &[&str] = &["/yr", "year", "annual"];
const MONTHLY_MARKERS: &[&str] = &["/month", "monthly"];
const MONTHS_PER_YEAR: f64 = 12.0;

/// What to do with salary figures that name no period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnspecifiedPeriod {
    #[default]
    Annual,
    Skip,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SalaryRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Annualized salary bounds from free-form text such as
/// `"$40,000 - $50,000/yr"` or `"$5,000/month"`.
pub fn parse_salary(text: &str, policy: UnspecifiedPeriod) -> SalaryRange {
    let values: Vec<f64> = NUMBER_RE
        .captures_iter(text)
        .filter_map(|caps| caps[1].replace(',', "").parse::<f64>().ok())
        .collect();
    if values.is_empty() {
        return SalaryRange::default();
    }

    let lower = text.to_lowercase();
    // a monthly marker annualizes even when an annual one is also present
    let factor = if MONTHLY_MARKERS.iter().any(|m| lower.contains(m)) {
        MONTHS_PER_YEAR
    } else if ANNUAL_MARKERS.iter().any(|m| lower.contains(m)) {
        1.0
    } else {
        match policy {
            UnspecifiedPeriod::Annual => 1.0,
            UnspecifiedPeriod::Skip => return SalaryRange::default(),
        }
    };

    let annual = values.iter().map(|v| v * factor);
    SalaryRange {
        min: annual.clone().reduce(f64::min),
        max: annual.reduce(f64::max),
    }
}

/// Days since posting from text such as `"3 days ago"` or `"12 hours ago"`.
/// Only the first `<number> <unit>` pair counts.
pub fn parse_days_ago(text: &str) -> Option<f64> {
    let caps = RECENCY_RE.captures(text)?;
    let amount: f64 = caps[1].parse().ok()?;
    let days = match caps[2].to_lowercase().as_str() {
        "hour" => amount / 24.0,
        "day" => amount,
        "week" => amount * 7.0,
        "month" => amount * 30.0,
        "year" => amount * 365.0,
        _ => return None,
    };
    Some(days)
}

/// Fill the numeric fields of a parsed record.
pub fn normalize_record(record: &mut JobRecord, policy: UnspecifiedPeriod) {
    let salary = parse_salary(&record.salary_text, policy);
    record.salary_min = salary.min;
    record.salary_max = salary.max;
    record.days_ago = parse_days_ago(&record.time_posted_text);
}
