use anyhow::Result;
use itertools::Itertools;
use rusqlite::Connection;

use crate::model::JobRecord;
use crate::parser::ParseReport;

const EASY_APPLY: &str = "easy apply";

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub name: String,
    pub count: usize,
    pub pct: f64,
    /// Mean of the known `salary_min` values; `None` when no record has one.
    pub avg_salary_min: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub unique_companies: usize,
    pub easy_apply: usize,
    pub recent: usize,
    pub recent_days: f64,
    pub categories: Vec<CategoryShare>,
    pub report: ParseReport,
}

impl Summary {
    pub fn from_records(records: &[JobRecord], report: ParseReport, recent_days: f64) -> Self {
        let total = records.len();
        let unique_companies = records.iter().map(|r| r.company.as_str()).unique().count();
        let easy_apply = records
            .iter()
            .filter(|r| r.tags.iter().any(|t| t.to_lowercase().contains(EASY_APPLY)))
            .count();
        let recent = records
            .iter()
            .filter(|r| r.days_ago.is_some_and(|d| d <= recent_days))
            .count();

        let categories = records
            .iter()
            .into_group_map_by(|r| r.category.clone())
            .into_iter()
            .map(|(name, group)| {
                let salaries: Vec<f64> = group.iter().filter_map(|r| r.salary_min).collect();
                let avg_salary_min = (!salaries.is_empty())
                    .then(|| salaries.iter().sum::<f64>() / salaries.len() as f64);
                CategoryShare {
                    name,
                    count: group.len(),
                    pct: percent(group.len(), total),
                    avg_salary_min,
                }
            })
            .sorted_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)))
            .collect();

        Summary {
            total,
            unique_companies,
            easy_apply,
            recent,
            recent_days,
            categories,
            report,
        }
    }

    pub fn render_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str("## Job Summary\n");
        out.push_str(&format!(
            "- Total jobs: {}\n- Unique companies: {}\n- Easy Apply: {} ({:.1}%)\n- Posted within {} days: {}\n",
            self.total,
            self.unique_companies,
            self.easy_apply,
            percent(self.easy_apply, self.total),
            self.recent_days,
            self.recent
        ));
        out.push_str(&format!(
            "- Blocks read: {} (dropped {}: {} too short, {} missing company, {} missing title)\n",
            self.report.blocks,
            self.report.dropped(),
            self.report.too_short,
            self.report.missing_company,
            self.report.missing_title
        ));

        out.push_str("\n### Categories\n");
        out.push_str("| Category | Jobs | Share | Avg min salary |\n");
        out.push_str("|---|---:|---:|---:|\n");
        for c in &self.categories {
            let salary = c
                .avg_salary_min
                .map(|s| format!("{s:.0}"))
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!(
                "| {} | {} | {:.1}% | {} |\n",
                c.name, c.count, c.pct, salary
            ));
        }
        out
    }

    /// Replace the `job_stats` table with this summary.
    pub fn persist(&self, conn: &Connection, markdown: &str) -> Result<()> {
        conn.execute("DELETE FROM job_stats", [])?;
        let mut stmt =
            conn.prepare("INSERT OR REPLACE INTO job_stats (metric, value) VALUES (?, ?)")?;

        stmt.execute(rusqlite::params!["total_jobs", self.total.to_string()])?;
        stmt.execute(rusqlite::params!["unique_companies", self.unique_companies.to_string()])?;
        stmt.execute(rusqlite::params!["easy_apply", self.easy_apply.to_string()])?;
        stmt.execute(rusqlite::params!["recent", self.recent.to_string()])?;
        stmt.execute(rusqlite::params!["blocks", self.report.blocks.to_string()])?;
        stmt.execute(rusqlite::params!["dropped", self.report.dropped().to_string()])?;
        for c in &self.categories {
            stmt.execute(rusqlite::params![
                format!("category:{}:count", c.name),
                c.count.to_string()
            ])?;
            stmt.execute(rusqlite::params![
                format!("category:{}:pct", c.name),
                format!("{:.2}", c.pct)
            ])?;
            if let Some(avg) = c.avg_salary_min {
                stmt.execute(rusqlite::params![
                    format!("category:{}:avg_salary_min", c.name),
                    format!("{:.2}", avg)
                ])?;
            }
        }
        stmt.execute(rusqlite::params!["markdown", markdown])?;
        Ok(())
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}
