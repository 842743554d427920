use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::Connection;

use crate::model::JobRecord;

pub fn connect(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path).with_context(|| format!("Failed to open {:?}", path))?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    Ok(conn)
}

pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS job_records (
            position            INTEGER PRIMARY KEY,
            run_id              TEXT NOT NULL,
            company             TEXT NOT NULL,
            title               TEXT NOT NULL,
            location            TEXT,
            salary              TEXT,
            time_posted         TEXT,
            tags                TEXT,
            salary_min          REAL,
            salary_max          REAL,
            days_ago            REAL,
            category            TEXT NOT NULL,
            category_confidence REAL NOT NULL,
            matched_keywords    TEXT,
            processed_at        TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_job_records_category ON job_records(category);

        CREATE TABLE IF NOT EXISTS job_stats (
            metric TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

pub fn new_run_id() -> String {
    format!("run-{}", Utc::now().format("%Y%m%dT%H%M%SZ"))
}

/// Replace the stored dataset with `records`, keeping input order in
/// `position`.
pub fn replace_records(conn: &mut Connection, run_id: &str, records: &[JobRecord]) -> Result<usize> {
    let processed_at = Utc::now().to_rfc3339();
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM job_records", [])?;
    {
        let mut stmt = tx.prepare(
            "INSERT OR REPLACE INTO job_records (
                position, run_id, company, title, location, salary, time_posted, tags,
                salary_min, salary_max, days_ago, category, category_confidence,
                matched_keywords, processed_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
        )?;
        for (position, r) in records.iter().enumerate() {
            stmt.execute(rusqlite::params![
                position as i64,
                run_id,
                r.company,
                r.title,
                r.location,
                r.salary_text,
                r.time_posted_text,
                r.tags_joined(),
                r.salary_min,
                r.salary_max,
                r.days_ago,
                r.category,
                r.category_confidence,
                r.keywords_joined(),
                processed_at,
            ])?;
        }
    }
    tx.commit()?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<JobRecord> {
        vec![
            JobRecord {
                company: "Acme Corp".into(),
                title: "Software Engineer".into(),
                salary_min: Some(50000.0),
                category: "Software Engineer".into(),
                category_confidence: 62.0,
                ..JobRecord::default()
            },
            JobRecord {
                company: "Café Central".into(),
                title: "Chef".into(),
                category: "Other".into(),
                ..JobRecord::default()
            },
        ]
    }

    #[test]
    fn rerun_replaces_rows() {
        let mut conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        assert_eq!(replace_records(&mut conn, "run-a", &records()).unwrap(), 2);
        replace_records(&mut conn, "run-b", &records()).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM job_records", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 2);

        let (run_id, salary, missing): (String, Option<f64>, Option<f64>) = conn
            .query_row(
                "SELECT run_id, salary_min, salary_max FROM job_records WHERE position = 0",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!(run_id, "run-b");
        assert_eq!(salary, Some(50000.0));
        assert_eq!(missing, None);
    }

    #[test]
    fn file_database() {
        let dir = tempfile::tempdir().unwrap();
        let mut conn = connect(&dir.path().join("jobs.sqlite")).unwrap();
        create_tables(&conn).unwrap();
        replace_records(&mut conn, &new_run_id(), &records()).unwrap();
        let company: String = conn
            .query_row("SELECT company FROM job_records WHERE position = 1", [], |r| r.get(0))
            .unwrap();
        assert_eq!(company, "Café Central");
    }

    #[test]
    fn run_ids_are_tagged() {
        assert!(new_run_id().starts_with("run-"));
    }
}
