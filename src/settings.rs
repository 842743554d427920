use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::normalize::UnspecifiedPeriod;
use crate::parser::lines::LineVocabulary;

const CONFIG_FILE: &str = "jobcat";
const ENV_PREFIX: &str = "JOBCAT";

/// Runtime settings: `jobcat.toml` in the working directory, then
/// `JOBCAT_*` environment variables. Command-line flags win over both.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub salary_unspecified: UnspecifiedPeriod,
    pub parallel: bool,
    /// Jobs posted within this many days count as recent in the summary.
    pub recent_days: f64,
    pub taxonomy: Option<PathBuf>,
    pub vocabulary: LineVocabulary,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            salary_unspecified: UnspecifiedPeriod::Annual,
            parallel: true,
            recent_days: 7.0,
            taxonomy: None,
            vocabulary: LineVocabulary::default(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(File::with_name(CONFIG_FILE).required(false))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::build(File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings: Settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(Settings {
            vocabulary: settings.vocabulary.normalized(),
            ..settings
        })
    }
}
