//! Fluent builder for constructing mock CRM datasets.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use time::OffsetDateTime;
use tracing::info;

use crate::generators::{
    CompanyGenConfig, CompanyGenerator, DepartmentGenConfig, DepartmentGenerator,
    GeneratedCompany, TaskGenConfig, TaskGenerator, UserGenConfig, UserGenerator,
};
use crate::sources::{ContactPool, SyntheticContacts};

/// Result of building a dataset.
#[derive(Debug)]
pub struct DatasetResult {
    /// The pool the dataset was generated from.
    pub contacts: ContactPool,
    pub companies: Vec<GeneratedCompany>,
    /// Metrics from generation (populated if metrics tracking enabled).
    pub metrics: Option<DatasetMetrics>,
}

/// Size and timing metrics for a generated dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetMetrics {
    /// Time spent generating data (milliseconds).
    pub generation_time_ms: u64,
    pub company_count: usize,
    pub department_count: usize,
    pub user_count: usize,
    /// Tasks in users' own lists.
    pub personal_task_count: usize,
    /// Tasks in departments' aggregate lists.
    pub department_task_count: usize,
    pub news_count: usize,
}

impl DatasetMetrics {
    /// Counts the records in `companies`.
    pub fn count(companies: &[GeneratedCompany], generation_time_ms: u64) -> Self {
        let departments = companies.iter().flat_map(|c| &c.departments);
        let mut metrics = Self {
            generation_time_ms,
            company_count: companies.len(),
            department_count: 0,
            user_count: 0,
            personal_task_count: 0,
            department_task_count: 0,
            news_count: companies.iter().map(|c| c.news.len()).sum(),
        };

        for department in departments {
            metrics.department_count += 1;
            metrics.user_count += department.users.len();
            metrics.department_task_count += department.tasks.len();
            metrics.personal_task_count += department
                .users
                .iter()
                .map(|u| u.task_statuses.len())
                .sum::<usize>();
        }

        metrics
    }
}

/// Where the builder takes its contacts from.
#[derive(Debug, Clone)]
enum PoolSource {
    Fixed(ContactPool),
    Synthetic(SyntheticContacts),
}

/// Builder for complete mock datasets.
///
/// # Example
///
/// ```rust,ignore
/// let result = DatasetBuilder::new()
///     .with_contacts(ContactPool::builtin())
///     .with_seed(12345)
///     .with_metrics(true)
///     .build();
/// ```
pub struct DatasetBuilder {
    pool: PoolSource,
    user_config: UserGenConfig,
    task_config: TaskGenConfig,
    department_config: DepartmentGenConfig,
    company_config: CompanyGenConfig,
    base_time: Option<OffsetDateTime>,
    seed: Option<u64>,
    track_metrics: bool,
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetBuilder {
    /// Creates a builder over the built-in executive directory.
    pub fn new() -> Self {
        Self {
            pool: PoolSource::Fixed(ContactPool::builtin()),
            user_config: UserGenConfig::default(),
            task_config: TaskGenConfig::default(),
            department_config: DepartmentGenConfig::default(),
            company_config: CompanyGenConfig::default(),
            base_time: None,
            seed: None,
            track_metrics: false,
        }
    }

    /// Generates from a fixed contact pool.
    pub fn with_contacts(mut self, pool: ContactPool) -> Self {
        self.pool = PoolSource::Fixed(pool);
        self
    }

    /// Generates from a synthetic pool, invented at build time.
    pub fn with_synthetic_contacts(mut self, source: SyntheticContacts) -> Self {
        self.pool = PoolSource::Synthetic(source);
        self
    }

    pub fn with_user_config(mut self, config: UserGenConfig) -> Self {
        self.user_config = config;
        self
    }

    pub fn with_task_config(mut self, config: TaskGenConfig) -> Self {
        self.task_config = config;
        self
    }

    pub fn with_department_config(mut self, config: DepartmentGenConfig) -> Self {
        self.department_config = config;
        self
    }

    pub fn with_company_config(mut self, config: CompanyGenConfig) -> Self {
        self.company_config = config;
        self
    }

    /// Pins the generation time that all dates are relative to.
    ///
    /// Defaults to the current time when the dataset is built.
    pub fn with_base_time(mut self, base_time: OffsetDateTime) -> Self {
        self.base_time = Some(base_time);
        self
    }

    /// Sets the random seed used by [`build`](Self::build).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables metrics tracking.
    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.track_metrics = enabled;
        self
    }

    /// Builds the dataset with an RNG from the configured seed, or from entropy.
    pub fn build(&self) -> DatasetResult {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.build_data(&mut rng)
    }

    /// Builds the dataset with the caller's RNG.
    pub fn build_data(&self, rng: &mut impl Rng) -> DatasetResult {
        let start_time = self.track_metrics.then(Instant::now);
        let base_time = self.base_time.unwrap_or_else(OffsetDateTime::now_utc);

        let contacts = match &self.pool {
            PoolSource::Fixed(pool) => pool.clone(),
            PoolSource::Synthetic(source) => source.generate(rng),
        };
        info!(
            "Generating dataset from {} contacts across {} companies",
            contacts.len(),
            contacts.company_names().len()
        );

        let companies = {
            let users = UserGenerator::with_config(&contacts, self.user_config.clone());
            let tasks = TaskGenerator::with_config(self.task_config.clone());
            let departments = DepartmentGenerator::with_generators(
                &contacts,
                self.department_config.clone(),
                users,
                tasks,
            );
            CompanyGenerator::with_generators(&contacts, self.company_config.clone(), departments)
                .generate_all(base_time, rng)
        };

        let metrics = start_time
            .map(|start| DatasetMetrics::count(&companies, start.elapsed().as_millis() as u64));

        DatasetResult {
            contacts,
            companies,
            metrics,
        }
    }
}

/// Preset datasets.
impl DatasetBuilder {
    /// The built-in directory of 20 executives at 10 well-known companies.
    pub fn executive_directory() -> Self {
        Self::new().with_contacts(ContactPool::builtin())
    }

    /// A larger synthetic directory for volume testing.
    ///
    /// - 40 invented companies, about 5 contacts each
    /// - Metrics tracking enabled
    pub fn large_directory() -> Self {
        Self::new()
            .with_synthetic_contacts(SyntheticContacts {
                company_count: 40,
                avg_contacts_per_company: 5.0,
            })
            .with_metrics(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_data() {
        let mut rng = rand::thread_rng();

        let result = DatasetBuilder::new().build_data(&mut rng);

        assert_eq!(result.companies.len(), 10);
        assert_eq!(result.contacts, ContactPool::builtin());
        assert!(result.metrics.is_none());
    }

    #[test]
    fn test_seed_reproduces_dataset() {
        let base_time = OffsetDateTime::now_utc();
        let a = DatasetBuilder::new()
            .with_seed(12345)
            .with_base_time(base_time)
            .build();
        let b = DatasetBuilder::new()
            .with_seed(12345)
            .with_base_time(base_time)
            .build();

        assert_eq!(a.companies, b.companies);
    }

    #[test]
    fn test_different_seeds_differ() {
        let base_time = OffsetDateTime::now_utc();
        let a = DatasetBuilder::new()
            .with_seed(1)
            .with_base_time(base_time)
            .build();
        let b = DatasetBuilder::new()
            .with_seed(2)
            .with_base_time(base_time)
            .build();

        assert_ne!(a.companies, b.companies);
    }

    #[test]
    fn test_metrics_tracking() {
        let mut rng = rand::thread_rng();

        let result = DatasetBuilder::new().with_metrics(true).build_data(&mut rng);
        let metrics = result.metrics.unwrap();

        assert_eq!(metrics.company_count, 10);
        assert!((10..=20).contains(&metrics.department_count));
        assert!(metrics.user_count >= metrics.department_count);
        assert!(metrics.personal_task_count >= metrics.user_count);
        assert!(metrics.department_task_count >= metrics.user_count);
        assert!((10..=30).contains(&metrics.news_count));
    }

    #[test]
    fn test_synthetic_contacts() {
        let mut rng = rand::thread_rng();

        let result = DatasetBuilder::new()
            .with_synthetic_contacts(SyntheticContacts::new(4))
            .build_data(&mut rng);

        assert_eq!(result.companies.len(), result.contacts.company_names().len());
        for company in &result.companies {
            for department in &company.departments {
                assert!(!department.users.is_empty());
            }
        }
    }

    #[test]
    fn test_custom_company_config() {
        let mut rng = rand::thread_rng();

        let result = DatasetBuilder::new()
            .with_company_config(CompanyGenConfig {
                departments: 2..=2,
                news_items: 3..=3,
                ..Default::default()
            })
            .build_data(&mut rng);

        for company in &result.companies {
            assert_eq!(company.departments.len(), 2);
            assert_eq!(company.news.len(), 3);
        }
    }

    #[test]
    fn test_preset_large_directory() {
        let builder = DatasetBuilder::large_directory();
        assert!(builder.track_metrics);
        assert!(matches!(
            builder.pool,
            PoolSource::Synthetic(SyntheticContacts {
                company_count: 40,
                ..
            })
        ));
    }
}
