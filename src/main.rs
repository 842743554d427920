mod categorize;
mod dedup;
mod error;
mod model;
mod normalize;
mod output;
mod parser;
mod pipeline;
mod settings;
mod stats;

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use categorize::{Classification, Taxonomy};
use pipeline::Pipeline;
use settings::Settings;
use stats::Summary;

#[derive(Parser)]
#[command(name = "jobcat", about = "Turn scraped job listings into a categorized dataset")]
struct Cli {
    /// Settings file to use instead of ./jobcat.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Repair, parse, normalize and categorize a listings document
    Run {
        /// Raw listings text
        input: PathBuf,
        /// CSV output path
        #[arg(short, long, default_value = "categorized_jobs.csv")]
        output: PathBuf,
        /// Also store records and summary in this SQLite database
        #[arg(long)]
        sqlite: Option<PathBuf>,
        /// Write the title-repaired document here
        #[arg(long)]
        repaired: Option<PathBuf>,
        /// JSON taxonomy to use instead of the built-in one
        #[arg(long)]
        taxonomy: Option<PathBuf>,
        /// Skip the markdown summary
        #[arg(long)]
        no_summary: bool,
    },
    /// Categorize job titles
    Categorize {
        #[arg(required = true)]
        titles: Vec<String>,
        #[arg(long)]
        taxonomy: Option<PathBuf>,
        /// Print JSON instead of one line per title
        #[arg(long)]
        json: bool,
    },
    /// Repair duplicated job titles
    Dedup {
        #[arg(required = true)]
        titles: Vec<String>,
    },
    /// Print the built-in taxonomy as JSON
    Taxonomy,
}

#[derive(Serialize)]
struct TitleResult<'a> {
    title: &'a str,
    #[serde(flatten)]
    classification: Classification,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .try_init();
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    if let Some(p) = path {
        return Settings::from_file(p)
            .with_context(|| format!("Failed to load settings from {:?}", p));
    }
    Ok(match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            warn!(error = %e, "ignoring unusable configuration");
            Settings::default()
        }
    })
}

fn load_taxonomy(path: Option<&Path>) -> Result<Cow<'static, Taxonomy>> {
    match path {
        Some(p) => {
            let taxonomy = Taxonomy::from_path(p)?;
            if taxonomy.is_empty() {
                warn!(path = ?p, "taxonomy has no categories, every title will be Other");
            }
            info!(path = ?p, categories = taxonomy.len(), "loaded taxonomy");
            Ok(Cow::Owned(taxonomy))
        }
        None => Ok(Cow::Borrowed(Taxonomy::builtin())),
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            input,
            output,
            sqlite,
            repaired,
            taxonomy,
            no_summary,
        } => {
            let t0 = Instant::now();
            let raw = pipeline::read_input(&input)?;
            let taxonomy = load_taxonomy(taxonomy.as_deref().or(settings.taxonomy.as_deref()))?;

            let pipeline = Pipeline {
                salary_policy: settings.salary_unspecified,
                parallel: settings.parallel,
                ..Pipeline::new(&taxonomy, &settings.vocabulary)
            };
            let dataset = pipeline.run(&raw);

            output::csv::write_file(&output, &dataset.records)?;
            println!("Wrote {} jobs to {}", dataset.records.len(), output.display());

            if let Some(path) = repaired {
                std::fs::write(&path, &dataset.repaired)
                    .with_context(|| format!("Failed to write {:?}", path))?;
                println!(
                    "Repaired {} titles -> {}",
                    dataset.titles_repaired,
                    path.display()
                );
            }

            let summary = Summary::from_records(&dataset.records, dataset.report, settings.recent_days);
            let markdown = summary.render_markdown();

            if let Some(path) = sqlite {
                let mut conn = output::db::connect(&path)?;
                output::db::create_tables(&conn)?;
                let run_id = output::db::new_run_id();
                let n = output::db::replace_records(&mut conn, &run_id, &dataset.records)?;
                summary.persist(&conn, &markdown)?;
                println!("Stored {} jobs in {} ({})", n, path.display(), run_id);
            }

            if !no_summary {
                println!("\n{markdown}");
            }
            info!(elapsed_ms = t0.elapsed().as_millis() as u64, "run finished");
        }
        Commands::Categorize {
            titles,
            taxonomy,
            json,
        } => {
            let taxonomy = load_taxonomy(taxonomy.as_deref().or(settings.taxonomy.as_deref()))?;
            let results: Vec<TitleResult> = titles
                .iter()
                .map(|title| TitleResult {
                    title,
                    classification: taxonomy.categorize(title),
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for r in &results {
                    println!(
                        "{} -> {} (confidence: {:.0}%)",
                        r.title, r.classification.category, r.classification.confidence
                    );
                }
            }
        }
        Commands::Dedup { titles } => {
            for title in &titles {
                println!("{}", dedup::dedup_title(title));
            }
        }
        Commands::Taxonomy => {
            let file = Taxonomy::builtin().to_file();
            println!("{}", serde_json::to_string_pretty(&file)?);
        }
    }

    Ok(())
}
