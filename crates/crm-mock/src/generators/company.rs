//! Company generation: departments plus recent news.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};
use time::{Date, Duration, OffsetDateTime};
use tracing::debug;

use super::department::{DepartmentGenerator, GeneratedDepartment};
use crate::models::{iso_date, pick};
use crate::sources::ContactPool;

/// Generated company with its departments and news feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedCompany {
    #[serde(rename = "empresa")]
    pub name: String,
    #[serde(rename = "departamentos")]
    pub departments: Vec<GeneratedDepartment>,
    #[serde(rename = "data_fresh_collector")]
    pub news: Vec<GeneratedNewsItem>,
}

/// Generated news headline about a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedNewsItem {
    #[serde(rename = "fuente")]
    pub source: String,
    #[serde(rename = "fecha", with = "iso_date")]
    pub date: Date,
    #[serde(rename = "noticia")]
    pub headline: String,
    #[serde(rename = "tema_relacionado")]
    pub topic: String,
}

/// Configuration for company generation.
#[derive(Debug, Clone)]
pub struct CompanyGenConfig {
    /// Departments per company.
    pub departments: RangeInclusive<usize>,
    /// News items per company.
    pub news_items: RangeInclusive<usize>,
    /// How many days before generation time a news item was published.
    pub news_days_ago: RangeInclusive<i64>,
    /// Label recorded as the source of every news item.
    pub news_source: String,
}

impl Default for CompanyGenConfig {
    fn default() -> Self {
        Self {
            departments: 1..=2,
            news_items: 1..=3,
            news_days_ago: 0..=10,
            news_source: "Google News".to_string(),
        }
    }
}

const NEWS_CLAUSES: &[&str] = &[
    "announces strategic partnership with Microsoft on cloud innovation",
    "launches sustainability roadmap aligned with 2030 goals",
    "reports record quarterly earnings above Wall Street expectations",
    "expands manufacturing footprint in North America",
    "introduces new AI-driven customer experience program",
    "secures multiyear sponsorship with global sports league",
];

const NEWS_TOPICS: &[&str] = &["Automatización", "Finanzas", "Logística"];

/// Generates companies and drives the whole record tree.
pub struct CompanyGenerator<'a> {
    pool: &'a ContactPool,
    config: CompanyGenConfig,
    departments: DepartmentGenerator<'a>,
}

impl<'a> CompanyGenerator<'a> {
    /// Creates a company generator with default settings at every level.
    pub fn new(pool: &'a ContactPool) -> Self {
        Self::with_generators(pool, CompanyGenConfig::default(), DepartmentGenerator::new(pool))
    }

    /// Creates a generator from explicit parts.
    pub fn with_generators(
        pool: &'a ContactPool,
        config: CompanyGenConfig,
        departments: DepartmentGenerator<'a>,
    ) -> Self {
        Self {
            pool,
            config,
            departments,
        }
    }

    /// Generates one company per distinct company name in the pool.
    ///
    /// An empty pool yields an empty list.
    pub fn generate_all(
        &self,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedCompany> {
        self.pool
            .company_names()
            .into_iter()
            .map(|name| self.generate(name, base_time, rng))
            .collect()
    }

    /// Generates a single company.
    pub fn generate(
        &self,
        name: &str,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> GeneratedCompany {
        let department_count = rng.gen_range(self.config.departments.clone());
        let departments: Vec<GeneratedDepartment> = (0..department_count)
            .map(|_| self.departments.generate(name, base_time, rng))
            .collect();

        let news_count = rng.gen_range(self.config.news_items.clone());
        let news = (0..news_count)
            .map(|_| self.generate_news_item(name, base_time, rng))
            .collect();

        debug!(
            company = name,
            departments = departments.len(),
            "Generated company"
        );

        GeneratedCompany {
            name: name.to_string(),
            departments,
            news,
        }
    }

    /// Generates a news headline about `company`.
    fn generate_news_item(
        &self,
        company: &str,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> GeneratedNewsItem {
        let days_ago = rng.gen_range(self.config.news_days_ago.clone());
        let clause = pick(NEWS_CLAUSES, rng);

        GeneratedNewsItem {
            source: self.config.news_source.clone(),
            date: (base_time - Duration::days(days_ago)).date(),
            headline: format!("{company} {clause}"),
            topic: pick(NEWS_TOPICS, rng).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_company() {
        let pool = ContactPool::builtin();
        let company_gen = CompanyGenerator::new(&pool);
        let mut rng = rand::thread_rng();
        let now = OffsetDateTime::now_utc();

        for _ in 0..50 {
            let company = company_gen.generate("Netflix", now, &mut rng);

            assert_eq!(company.name, "Netflix");
            assert!((1..=2).contains(&company.departments.len()));
            assert!((1..=3).contains(&company.news.len()));

            for item in &company.news {
                assert_eq!(item.source, "Google News");
                assert!(item.headline.starts_with("Netflix "));
                assert!(NEWS_TOPICS.contains(&item.topic.as_str()));
                assert!(item.date <= now.date());
                assert!(item.date >= now.date() - Duration::days(10));
            }
        }
    }

    #[test]
    fn test_generate_all_one_per_company() {
        let pool = ContactPool::builtin();
        let company_gen = CompanyGenerator::new(&pool);
        let mut rng = rand::thread_rng();

        let companies = company_gen.generate_all(OffsetDateTime::now_utc(), &mut rng);

        let names: Vec<&str> = companies.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, pool.company_names());
    }

    #[test]
    fn test_empty_pool_generates_nothing() {
        let pool = ContactPool::default();
        let company_gen = CompanyGenerator::new(&pool);
        let mut rng = rand::thread_rng();

        let companies = company_gen.generate_all(OffsetDateTime::now_utc(), &mut rng);

        assert!(companies.is_empty());
    }
}
