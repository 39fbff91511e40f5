//! Department generation: a roster of users and their tasks.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::task::{GeneratedTask, TaskGenerator};
use super::user::{GeneratedUser, UserGenerator};
use crate::models::pick;
use crate::sources::{Contact, ContactPool};

/// Generated department within a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedDepartment {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "usuarios")]
    pub users: Vec<GeneratedUser>,
    /// Aggregate list, separate instances from each user's own tasks.
    #[serde(rename = "tareas")]
    pub tasks: Vec<GeneratedTask>,
}

/// Configuration for department generation.
#[derive(Debug, Clone)]
pub struct DepartmentGenConfig {
    /// Tasks per user, for both the personal and the aggregate list.
    pub tasks_per_user: RangeInclusive<usize>,
}

impl Default for DepartmentGenConfig {
    fn default() -> Self {
        Self {
            tasks_per_user: 1..=2,
        }
    }
}

const DEPARTMENT_NAMES: &[&str] = &[
    "Operaciones",
    "IT",
    "Innovación",
    "Finanzas",
    "Comercial",
    "Logística",
    "Dirección",
    "Suministro",
    "Marketing",
];

/// Generates departments staffed from a contact pool.
pub struct DepartmentGenerator<'a> {
    pool: &'a ContactPool,
    config: DepartmentGenConfig,
    users: UserGenerator<'a>,
    tasks: TaskGenerator,
}

impl<'a> DepartmentGenerator<'a> {
    /// Creates a department generator with default user and task generators.
    pub fn new(pool: &'a ContactPool) -> Self {
        Self::with_generators(
            pool,
            DepartmentGenConfig::default(),
            UserGenerator::new(pool),
            TaskGenerator::new(),
        )
    }

    /// Creates a generator from explicit parts.
    pub fn with_generators(
        pool: &'a ContactPool,
        config: DepartmentGenConfig,
        users: UserGenerator<'a>,
        tasks: TaskGenerator,
    ) -> Self {
        Self {
            pool,
            config,
            users,
            tasks,
        }
    }

    /// Generates one department of `company`.
    pub fn generate(
        &self,
        company: &str,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> GeneratedDepartment {
        let name = pick(DEPARTMENT_NAMES, rng).to_string();

        let mut users: Vec<GeneratedUser> = self
            .sample_roster(company, rng)
            .into_iter()
            .map(|contact| self.users.generate(contact, base_time, rng))
            .collect();

        // Tasks need resolved user names, so they come after the roster
        for user in &mut users {
            let count = rng.gen_range(self.config.tasks_per_user.clone());
            user.task_statuses = self
                .tasks
                .generate_batch(&user.name, count, base_time, rng);
        }

        let mut tasks = Vec::new();
        for user in &users {
            let count = rng.gen_range(self.config.tasks_per_user.clone());
            tasks.extend(
                self.tasks
                    .generate_batch(&user.name, count, base_time, rng),
            );
        }

        GeneratedDepartment { name, users, tasks }
    }

    /// Samples between one and all of the company's contacts, without replacement.
    fn sample_roster(&self, company: &str, rng: &mut impl Rng) -> Vec<&'a Contact> {
        let staff = self.pool.company_contacts(company);
        if staff.is_empty() {
            return Vec::new();
        }

        let size = rng.gen_range(1..=staff.len());
        staff.choose_multiple(rng, size).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_department() {
        let pool = ContactPool::builtin();
        let dept_gen = DepartmentGenerator::new(&pool);
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let dept = dept_gen.generate("Microsoft", OffsetDateTime::now_utc(), &mut rng);

            assert!(DEPARTMENT_NAMES.contains(&dept.name.as_str()));
            assert!((1..=2).contains(&dept.users.len()));
            assert!(dept.tasks.len() >= dept.users.len());
            assert!(dept.tasks.len() <= dept.users.len() * 2);

            for user in &dept.users {
                assert_eq!(user.company, "Microsoft");
                assert!((1..=2).contains(&user.task_statuses.len()));
                for task in &user.task_statuses {
                    assert_eq!(task.responsible, user.name);
                }
            }
        }
    }

    #[test]
    fn test_roster_has_no_duplicates() {
        let pool = ContactPool::builtin();
        let dept_gen = DepartmentGenerator::new(&pool);
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let dept = dept_gen.generate("Apple", OffsetDateTime::now_utc(), &mut rng);
            let names: std::collections::HashSet<_> =
                dept.users.iter().map(|u| u.name.as_str()).collect();
            assert_eq!(names.len(), dept.users.len());
        }
    }

    #[test]
    fn test_aggregate_tasks_are_separate_instances() {
        let pool = ContactPool::builtin();
        let dept_gen = DepartmentGenerator::new(&pool);
        let mut rng = rand::thread_rng();
        let dept = dept_gen.generate("Tesla", OffsetDateTime::now_utc(), &mut rng);

        let personal: std::collections::HashSet<_> = dept
            .users
            .iter()
            .flat_map(|u| u.task_statuses.iter().map(|t| t.id))
            .collect();
        for task in &dept.tasks {
            assert!(!personal.contains(&task.id));
            assert!(dept.users.iter().any(|u| u.name == task.responsible));
        }
    }

    #[test]
    fn test_unknown_company_is_empty() {
        let pool = ContactPool::builtin();
        let dept_gen = DepartmentGenerator::new(&pool);
        let mut rng = rand::thread_rng();

        let dept = dept_gen.generate("Nowhere Inc", OffsetDateTime::now_utc(), &mut rng);

        assert!(dept.users.is_empty());
        assert!(dept.tasks.is_empty());
    }
}
