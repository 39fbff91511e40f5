//! Configuration for a generation run.

use std::path::PathBuf;

use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, Time};

use crate::error::{MockDataError, Result};

/// Output file when `CRM_MOCK_OUTPUT` is not set.
pub const DEFAULT_OUTPUT_PATH: &str = "empresas_mock.json";

pub const OUTPUT_VAR: &str = "CRM_MOCK_OUTPUT";
pub const SEED_VAR: &str = "CRM_MOCK_SEED";
pub const BASE_TIME_VAR: &str = "CRM_MOCK_BASE_TIME";
pub const CONTACTS_VAR: &str = "CRM_MOCK_CONTACTS";
pub const SYNTHETIC_VAR: &str = "CRM_MOCK_SYNTHETIC_COMPANIES";

/// Where the contacts for a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactSource {
    /// The built-in executive directory.
    Builtin,
    /// A JSON fixture file.
    Fixture(PathBuf),
    /// Invented companies with fake staff.
    Synthetic { companies: usize },
}

/// Configuration for a single run of the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Destination of the JSON document.
    pub output_path: PathBuf,

    /// Seed for the random draws; entropy when unset.
    pub seed: Option<u64>,

    /// Generation time all dates are relative to (RFC 3339).
    pub base_time: Option<OffsetDateTime>,

    /// Contact pool to generate from.
    pub contacts: ContactSource,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            seed: None,
            base_time: None,
            contacts: ContactSource::Builtin,
        }
    }
}

impl RunConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    ///
    /// A fixture path takes precedence over a synthetic company count.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup(OUTPUT_VAR).filter(|v| !v.is_empty()) {
            config.output_path = PathBuf::from(path);
        }

        if let Some(value) = lookup(SEED_VAR) {
            config.seed = Some(parse_var(SEED_VAR, value)?);
        }

        if let Some(value) = lookup(BASE_TIME_VAR).filter(|v| !v.is_empty()) {
            config.base_time = Some(parse_time(BASE_TIME_VAR, value)?);
        }

        if let Some(path) = lookup(CONTACTS_VAR).filter(|v| !v.is_empty()) {
            config.contacts = ContactSource::Fixture(PathBuf::from(path));
        } else if let Some(value) = lookup(SYNTHETIC_VAR) {
            config.contacts = ContactSource::Synthetic {
                companies: parse_var(SYNTHETIC_VAR, value)?,
            };
        }

        Ok(config)
    }

    /// The generation time to pin, if any.
    ///
    /// An explicit base time wins. A seeded run without one is pinned to
    /// midnight UTC of `now`, so reruns on the same day produce identical
    /// output. Unseeded runs are not pinned.
    pub fn pinned_base_time(&self, now: OffsetDateTime) -> Option<OffsetDateTime> {
        self.base_time.or_else(|| {
            self.seed
                .map(|_| now.to_offset(time::UtcOffset::UTC).replace_time(Time::MIDNIGHT))
        })
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| MockDataError::InvalidConfig { var, value })
}

fn parse_time(var: &'static str, value: String) -> Result<OffsetDateTime> {
    OffsetDateTime::parse(value.trim(), &Rfc3339)
        .map_err(|_| MockDataError::InvalidConfig { var, value })
}
