//! Generates the mock CRM dataset and writes it as JSON.
//!
//! Run with:
//! ```
//! cargo run -p crm-mock --bin generate
//! ```
//!
//! Environment:
//! - `CRM_MOCK_OUTPUT`: output file (default `empresas_mock.json`)
//! - `CRM_MOCK_SEED`: seed for the random draws; without a base time, dates are
//!   relative to midnight UTC today, so reruns on the same day match
//! - `CRM_MOCK_BASE_TIME`: RFC 3339 generation time; with a seed, output is fully reproducible
//! - `CRM_MOCK_CONTACTS`: JSON fixture of `{"name", "company", "title"}` contacts
//! - `CRM_MOCK_SYNTHETIC_COMPANIES`: invent this many companies instead

use crm_mock::builders::DatasetBuilder;
use crm_mock::config::{ContactSource, RunConfig};
use crm_mock::output::JsonWriter;
use crm_mock::sources::{ContactPool, SyntheticContacts};
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = RunConfig::from_env()?;

    let mut builder = match &config.contacts {
        ContactSource::Builtin => DatasetBuilder::executive_directory(),
        ContactSource::Fixture(path) => {
            DatasetBuilder::new().with_contacts(ContactPool::load_json(path)?)
        }
        ContactSource::Synthetic { companies } => {
            DatasetBuilder::new().with_synthetic_contacts(SyntheticContacts::new(*companies))
        }
    }
    .with_metrics(true);

    if let Some(seed) = config.seed {
        tracing::info!("Using seed {seed}");
        builder = builder.with_seed(seed);
    }

    if let Some(base_time) = config.pinned_base_time(OffsetDateTime::now_utc()) {
        tracing::info!("Dates relative to {base_time}");
        builder = builder.with_base_time(base_time);
    }

    let result = builder.build();
    JsonWriter::new(&config.output_path).write_companies(&result.companies)?;

    // Summary output
    if let Some(metrics) = result.metrics {
        tracing::info!("Dataset generated in {} ms", metrics.generation_time_ms);
        tracing::info!("  Companies: {}", metrics.company_count);
        tracing::info!("  Departments: {}", metrics.department_count);
        tracing::info!("  Users: {}", metrics.user_count);
        tracing::info!("  Personal tasks: {}", metrics.personal_task_count);
        tracing::info!("  Department tasks: {}", metrics.department_task_count);
        tracing::info!("  News items: {}", metrics.news_count);
    }

    Ok(())
}
